//! Sanitization of untrusted chat input.
//!
//! Strips markup and inline event handlers from visitor-provided text,
//! escapes HTML entities, and enforces length bounds before anything
//! reaches the message log or the response engine.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Hard cap applied after sanitization, in characters.
const MAX_SANITIZED_LENGTH: usize = 10_000;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid tag pattern"));

// Inline event handlers can survive tag stripping when the input was never
// well-formed markup, so both quoted and bare forms are removed explicitly.
static EVENT_HANDLER_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)on\w+\s*=\s*["'][^"']*["']"#).expect("invalid handler pattern"));
static EVENT_HANDLER_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=\s*[^\s>]*").expect("invalid handler pattern"));

/// Validation failure for a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message is empty")]
    Empty,
    #[error("message exceeds maximum length of {0} characters")]
    TooLong(usize),
    #[error("message contains no renderable content")]
    NoContent,
}

/// Escape HTML special characters so the text is inert when rendered.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Sanitize raw user input for display and classification.
///
/// Trims whitespace, removes HTML-like tags and inline event handlers,
/// escapes the remaining entities, and caps the result at
/// [`MAX_SANITIZED_LENGTH`] characters (with a trailing ellipsis).
pub fn sanitize_input(input: &str) -> String {
    let trimmed = input.trim();
    let stripped = TAG_RE.replace_all(trimmed, "");
    let stripped = EVENT_HANDLER_QUOTED_RE.replace_all(&stripped, "");
    let stripped = EVENT_HANDLER_BARE_RE.replace_all(&stripped, "");
    let mut sanitized = escape_html(&stripped);

    if sanitized.chars().count() > MAX_SANITIZED_LENGTH {
        sanitized = sanitized.chars().take(MAX_SANITIZED_LENGTH).collect();
        sanitized.push_str("...");
    }

    sanitized
}

/// Validate a chat message and return the sanitized form.
///
/// `max_length` bounds the trimmed input before sanitization; the caller
/// decides the limit (the chat shell reads it from configuration).
pub fn validate_chat_message(message: &str, max_length: usize) -> Result<String, ValidationError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.len() > max_length {
        return Err(ValidationError::TooLong(max_length));
    }

    let sanitized = sanitize_input(trimmed);
    if sanitized.is_empty() {
        return Err(ValidationError::NoContent);
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- escape_html ----

    #[test]
    fn test_escape_html_script() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;&#x2F;script&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("tell me about projects"), "tell me about projects");
    }

    #[test]
    fn test_escape_html_all_special_chars() {
        assert_eq!(escape_html("&<>\"'/`="), "&amp;&lt;&gt;&quot;&#39;&#x2F;&#x60;&#x3D;");
    }

    #[test]
    fn test_escape_html_empty() {
        assert_eq!(escape_html(""), "");
    }

    // ---- sanitize_input ----

    #[test]
    fn test_sanitize_strips_tags() {
        let out = sanitize_input("hello <b>world</b>");
        assert_eq!(out, "hello world");
    }

    #[test]
    fn test_sanitize_strips_script_blocks() {
        let out = sanitize_input("<script>alert('xss')</script>hi");
        assert!(!out.contains("<script"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn test_sanitize_strips_quoted_event_handler() {
        let out = sanitize_input(r#"click onclick="steal()" here"#);
        assert!(!out.to_lowercase().contains("onclick"));
        assert!(out.contains("click"));
        assert!(out.contains("here"));
    }

    #[test]
    fn test_sanitize_strips_bare_event_handler() {
        let out = sanitize_input("text onerror=alert(1) more");
        assert!(!out.to_lowercase().contains("onerror"));
        assert!(out.contains("more"));
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_input("   hello   "), "hello");
    }

    #[test]
    fn test_sanitize_caps_length_with_ellipsis() {
        let long = "a".repeat(MAX_SANITIZED_LENGTH + 500);
        let out = sanitize_input(&long);
        assert_eq!(out.chars().count(), MAX_SANITIZED_LENGTH + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_sanitize_at_exact_cap_untouched() {
        let exact = "b".repeat(MAX_SANITIZED_LENGTH);
        let out = sanitize_input(&exact);
        assert_eq!(out.chars().count(), MAX_SANITIZED_LENGTH);
        assert!(!out.ends_with("..."));
    }

    #[test]
    fn test_sanitize_unicode_preserved() {
        let out = sanitize_input("caf\u{00e9} \u{1f44b}");
        assert!(out.contains('\u{00e9}'));
        assert!(out.contains('\u{1f44b}'));
    }

    // ---- validate_chat_message ----

    #[test]
    fn test_validate_ok() {
        let out = validate_chat_message("what are the skills?", 5000).unwrap();
        assert!(out.contains("skills"));
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_chat_message("", 5000), Err(ValidationError::Empty));
    }

    #[test]
    fn test_validate_whitespace_only_is_empty() {
        assert_eq!(validate_chat_message("   \n\t ", 5000), Err(ValidationError::Empty));
    }

    #[test]
    fn test_validate_too_long() {
        let long = "x".repeat(5001);
        assert_eq!(
            validate_chat_message(&long, 5000),
            Err(ValidationError::TooLong(5000))
        );
    }

    #[test]
    fn test_validate_at_limit_ok() {
        let msg = "x".repeat(5000);
        assert!(validate_chat_message(&msg, 5000).is_ok());
    }

    #[test]
    fn test_validate_tags_only_is_no_content() {
        assert_eq!(
            validate_chat_message("<b></b><i></i>", 5000),
            Err(ValidationError::NoContent)
        );
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::Empty.to_string(), "message is empty");
        assert_eq!(
            ValidationError::TooLong(5000).to_string(),
            "message exceeds maximum length of 5000 characters"
        );
        assert_eq!(
            ValidationError::NoContent.to_string(),
            "message contains no renderable content"
        );
    }
}
