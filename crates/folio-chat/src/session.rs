//! Chat session: message log, send pipeline, and lifecycle operations.

use std::time::Duration;

use chrono::Local;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use folio_core::config::ChatConfig;
use folio_core::sanitize::validate_chat_message;
use folio_engine::{Classifier, ConversationWindow, ResponseCache};

use crate::error::ChatError;
use crate::types::{ChatMessage, Reaction};

/// Replies at or above this confidence get section-navigation follow-ups;
/// below it (or out-of-scope) the visitor gets generic topic chips.
pub const SUGGESTION_CONFIDENCE_THRESHOLD: f32 = 0.3;

/// Generic topic chips shown after weak or refused replies.
const TOPIC_CHIPS: &[&str] = &["Projects", "Skills", "Artwork", "Contact"];

const SEED_GREETING: &str = "\u{1f44b} Hello! I'm the portfolio assistant. I can help you explore the projects, skills, and artwork here, or help you get in touch. What would you like to know?";
const SEED_SUGGESTION_TEXT: &str =
    "\u{1f4a1} Quick suggestions: try asking about 'projects', 'skills', 'contact', or 'artwork'!";
const SEED_CHIPS: &[&str] = &[
    "Tell me about the projects",
    "What skills are covered?",
    "How do I get in touch?",
    "Show the artwork",
];

/// One visitor's conversation with the assistant.
///
/// Owns the classifier, the response cache, the conversation window, and
/// the ordered message log. All state lives in memory and dies with the
/// session.
pub struct ChatSession {
    id: Uuid,
    config: ChatConfig,
    classifier: Classifier,
    cache: ResponseCache,
    window: ConversationWindow,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    /// Create a session with an OS-seeded classifier.
    pub fn new(config: ChatConfig) -> Self {
        Self::build(config, Classifier::new())
    }

    /// Create a session whose response selection is deterministic.
    pub fn with_seed(config: ChatConfig, seed: u64) -> Self {
        Self::build(config, Classifier::with_seed(seed))
    }

    fn build(config: ChatConfig, classifier: Classifier) -> Self {
        let window = ConversationWindow::new(config.context_window);
        let mut session = Self {
            id: Uuid::new_v4(),
            config,
            classifier,
            cache: ResponseCache::new(),
            window,
            messages: Vec::new(),
            next_id: 1,
        };
        session.push_seed_messages();
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The full ordered message log, seed messages included.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Handle one visitor message.
    ///
    /// Validates and sanitizes the input, appends the visitor message,
    /// computes the engine reply, appends the bot message, and appends a
    /// follow-up suggestions message when warranted. Returns clones of the
    /// messages appended by this call, in order.
    ///
    /// The logged message text is the sanitized form; classification sees
    /// the trimmed original, so punctuation-sensitive patterns still match.
    pub fn send(&mut self, text: &str) -> Result<Vec<ChatMessage>, ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }
        let sanitized = validate_chat_message(text, self.config.max_message_length)?;
        let raw = text.trim();

        let mut appended = Vec::new();

        let user = ChatMessage::user(self.take_id(), sanitized, now_hhmm());
        self.messages.push(user.clone());
        appended.push(user);

        let reply = self
            .classifier
            .respond(raw, &mut self.cache, &mut self.window);
        debug!(
            confidence = reply.confidence,
            out_of_scope = reply.is_out_of_scope,
            "assistant reply"
        );

        let bot = ChatMessage::bot(
            self.take_id(),
            reply.response.clone(),
            now_hhmm(),
            reply.confidence,
            reply.is_out_of_scope,
        );
        self.messages.push(bot.clone());
        appended.push(bot);

        if reply.confidence < SUGGESTION_CONFIDENCE_THRESHOLD || reply.is_out_of_scope {
            let chips = TOPIC_CHIPS.iter().map(|c| c.to_string()).collect();
            let follow_up = ChatMessage::suggestion(
                self.take_id(),
                "\u{1f4a1} Try asking about:".to_string(),
                now_hhmm(),
                chips,
            );
            self.messages.push(follow_up.clone());
            appended.push(follow_up);
        } else if !reply.related_sections.is_empty() {
            let chips = reply
                .related_sections
                .iter()
                .map(|section| format!("Go to {}", section))
                .collect();
            let follow_up = ChatMessage::suggestion(
                self.take_id(),
                "\u{1f4cb} Check out these sections:".to_string(),
                now_hhmm(),
                chips,
            );
            self.messages.push(follow_up.clone());
            appended.push(follow_up);
        }

        Ok(appended)
    }

    /// Apply a like/dislike to a message.
    pub fn react(&mut self, message_id: u64, reaction: Reaction) -> Result<(), ChatError> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(ChatError::UnknownMessage(message_id))?;
        let reactions = message
            .reactions
            .as_mut()
            .ok_or(ChatError::NotReactable(message_id))?;
        match reaction {
            Reaction::Like => reactions.likes += 1,
            Reaction::Dislike => reactions.dislikes += 1,
        }
        Ok(())
    }

    /// Reset the log to the two seed messages and empty the conversation
    /// window. The response cache is retained for the session's lifetime.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.next_id = 1;
        self.window.clear();
        self.push_seed_messages();
        debug!("chat cleared");
    }

    /// Render the log as a plain-text transcript.
    pub fn export_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| {
                let speaker = if m.is_bot { "Assistant" } else { "You" };
                format!("{}: {} ({})", speaker, m.text, m.time)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render the log as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, ChatError> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }

    /// A dated file name for a transcript download.
    pub fn export_filename(&self) -> String {
        format!("chat-export-{}.txt", Local::now().format("%Y-%m-%d"))
    }

    /// Randomized pause before showing a reply. Purely presentational; the
    /// caller decides whether to sleep it.
    pub fn thinking_delay(&self) -> Duration {
        let min = self.config.thinking_delay_min_ms;
        let max = self.config.thinking_delay_max_ms.max(min);
        Duration::from_millis(rand::rng().random_range(min..=max))
    }

    fn push_seed_messages(&mut self) {
        let greeting =
            ChatMessage::bot(self.take_id(), SEED_GREETING.to_string(), now_hhmm(), 1.0, false);
        self.messages.push(greeting);

        let chips = SEED_CHIPS.iter().map(|c| c.to_string()).collect();
        let suggestion = ChatMessage::suggestion(
            self.take_id(),
            SEED_SUGGESTION_TEXT.to_string(),
            now_hhmm(),
            chips,
        );
        self.messages.push(suggestion);
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

// =============================================================================
// Tests
// =============================================================================
