//! Chat session shell around the response engine.
//!
//! Owns the message log, wires visitor input through validation and the
//! classifier, emits follow-up suggestion messages, and handles reactions,
//! transcript export, and clearing.

pub mod error;
pub mod navigate;
pub mod session;
pub mod types;

pub use error::ChatError;
pub use session::ChatSession;
pub use types::{ChatMessage, Reaction, Reactions};
