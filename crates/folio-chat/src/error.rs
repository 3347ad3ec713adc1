//! Error types for the chat shell.

use folio_core::sanitize::ValidationError;

/// Errors from the chat session.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("message contains no renderable content")]
    NoContent,
    #[error("no message with id {0}")]
    UnknownMessage(u64),
    #[error("message {0} does not accept reactions")]
    NotReactable(u64),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<ValidationError> for ChatError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Empty => ChatError::EmptyMessage,
            ValidationError::TooLong(limit) => ChatError::MessageTooLong(limit),
            ValidationError::NoContent => ChatError::NoContent,
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Serialization(err.to_string())
    }
}
