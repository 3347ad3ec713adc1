//! Terminal driver for the portfolio chat assistant - composition root.
//!
//! Wires the folio crates into a small REPL:
//! 1. Load configuration from TOML (defaults if absent)
//! 2. Initialize tracing
//! 3. Create a chat session and print the seed messages
//! 4. Loop: read a line, simulate the thinking delay, print the reply
//!    and any suggestion chips
//!
//! Commands: `:clear` resets the conversation, `:export` prints the
//! transcript, `:quit` exits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio_chat::{navigate, ChatMessage, ChatSession};
use folio_core::AssistantConfig;

#[derive(Parser)]
#[command(name = "folio", about = "Rule-based portfolio chat assistant", version)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for deterministic response selection.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the simulated thinking delay.
    #[arg(long)]
    no_delay: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AssistantConfig::load_or_default(path),
        None => AssistantConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.general.log_level.clone())),
        )
        .init();

    let mut session = match args.seed {
        Some(seed) => ChatSession::with_seed(config.chat.clone(), seed),
        None => ChatSession::new(config.chat.clone()),
    };
    tracing::info!(session_id = %session.id(), "chat session started");

    for message in session.messages() {
        print_message(message);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "" => continue,
            ":quit" | ":q" => break,
            ":clear" => {
                session.clear();
                println!("(conversation cleared)");
                for message in session.messages() {
                    print_message(message);
                }
                continue;
            }
            ":export" => {
                println!("--- {} ---", session.export_filename());
                println!("{}", session.export_text());
                continue;
            }
            _ => {}
        }

        match session.send(input) {
            Ok(appended) => {
                if !args.no_delay {
                    tokio::time::sleep(session.thinking_delay()).await;
                }
                // The first appended message echoes the visitor input.
                for message in appended.iter().skip(1) {
                    print_message(message);
                }
            }
            Err(e) => println!("(not sent: {})", e),
        }
    }

    println!("bye!");
    Ok(())
}

fn print_message(message: &ChatMessage) {
    if message.is_suggestion {
        println!("assistant> {}", message.text);
        for chip in &message.suggestions {
            if navigate::is_navigation_label(chip) {
                match navigate::section_anchor(chip) {
                    Some(anchor) => println!("    [{}] (#{})", chip, anchor),
                    None => tracing::warn!(chip = %chip, "suggestion label yields no anchor"),
                }
            } else {
                println!("    [{}]", chip);
            }
        }
        return;
    }

    if message.is_bot {
        let marker = if message.is_out_of_scope {
            " (off-topic)"
        } else if message.confidence.is_some_and(|c| c < 0.4) {
            " (unsure)"
        } else {
            ""
        };
        println!("assistant>{} {}", marker, message.text);
    }
}
