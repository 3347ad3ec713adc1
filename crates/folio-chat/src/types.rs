use serde::{Deserialize, Serialize};

/// Thumbs-up / thumbs-down counters on a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub likes: u32,
    pub dislikes: u32,
}

/// A single reaction applied by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
}

/// One entry in the session's message log.
///
/// `id` is monotonic within the session. Suggestion messages carry
/// quick-reply labels instead of conversational content; bot replies carry
/// the classifier's confidence and out-of-scope flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub is_bot: bool,
    /// Formatted wall-clock time (HH:MM) at creation.
    pub time: String,
    #[serde(default)]
    pub reactions: Option<Reactions>,
    #[serde(default)]
    pub is_suggestion: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub is_out_of_scope: bool,
}

impl ChatMessage {
    /// A visitor message.
    pub fn user(id: u64, text: String, time: String) -> Self {
        Self {
            id,
            text,
            is_bot: false,
            time,
            reactions: Some(Reactions::default()),
            is_suggestion: false,
            suggestions: Vec::new(),
            confidence: None,
            is_out_of_scope: false,
        }
    }

    /// An assistant reply.
    pub fn bot(id: u64, text: String, time: String, confidence: f32, is_out_of_scope: bool) -> Self {
        Self {
            id,
            text,
            is_bot: true,
            time,
            reactions: Some(Reactions::default()),
            is_suggestion: false,
            suggestions: Vec::new(),
            confidence: Some(confidence),
            is_out_of_scope,
        }
    }

    /// A synthetic suggestions message with quick-reply labels.
    pub fn suggestion(id: u64, text: String, time: String, suggestions: Vec<String>) -> Self {
        Self {
            id,
            text,
            is_bot: true,
            time,
            reactions: None,
            is_suggestion: true,
            suggestions,
            confidence: None,
            is_out_of_scope: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_shape() {
        let msg = ChatMessage::user(3, "hi".to_string(), "12:00".to_string());
        assert_eq!(msg.id, 3);
        assert!(!msg.is_bot);
        assert!(!msg.is_suggestion);
        assert_eq!(msg.reactions, Some(Reactions::default()));
        assert!(msg.confidence.is_none());
    }

    #[test]
    fn test_bot_message_shape() {
        let msg = ChatMessage::bot(4, "answer".to_string(), "12:01".to_string(), 0.9, false);
        assert!(msg.is_bot);
        assert_eq!(msg.confidence, Some(0.9));
        assert!(!msg.is_out_of_scope);
    }

    #[test]
    fn test_suggestion_message_shape() {
        let msg = ChatMessage::suggestion(
            5,
            "Try asking about:".to_string(),
            "12:02".to_string(),
            vec!["Projects".to_string()],
        );
        assert!(msg.is_bot);
        assert!(msg.is_suggestion);
        assert!(msg.reactions.is_none());
        assert_eq!(msg.suggestions, vec!["Projects".to_string()]);
    }

    #[test]
    fn test_message_serde_round_trip() {
        let msg = ChatMessage::bot(7, "answer".to_string(), "09:30".to_string(), 0.55, true);
        let json = serde_json::to_string(&msg).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_message_deserialize_with_defaults() {
        // Optional fields may be absent entirely.
        let json = r#"{"id":1,"text":"hi","is_bot":false,"time":"10:00"}"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert!(msg.reactions.is_none());
        assert!(msg.suggestions.is_empty());
        assert!(!msg.is_out_of_scope);
    }
}
