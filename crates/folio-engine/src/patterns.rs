//! Fixed pattern sets for out-of-scope and clarification detection.
//!
//! Patterns are simple literal alternations (no nested quantifiers) so
//! evaluation cost stays linear even on hostile input.

use std::sync::LazyLock;

use regex::Regex;

/// A pattern hit only counts when the matched substring is longer than
/// this, which filters out trivial partial matches.
const MIN_SUBSTANTIAL_MATCH: usize = 5;

/// Topics the assistant refuses to engage with.
static OUT_OF_SCOPE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mk = |pats: &[&str]| -> Vec<Regex> {
        pats.iter()
            .map(|p| Regex::new(p).expect("invalid out-of-scope pattern"))
            .collect()
    };

    mk(&[
        // Support questions for unrelated tools
        r"(?i)\b(photoshop tutorial|illustrator help|figma guide|adobe support|microsoft office help|excel formula|word template|powerpoint presentation)\b",
        // Personal or private data
        r"(?i)\b(age|birthday|birth date|address|phone number|social security|password|credit card|bank account)\b",
        // Current events and news
        r"(?i)\b(latest news|political news|election results|sports scores|celebrity gossip|movie reviews|tv show episodes)\b",
        // Time-sensitive queries
        r"(?i)\b(current time|time now|today's date|what day is it|weather forecast|temperature now)\b",
        // Computation requests
        r"(?i)\b(calculate this|math problem|solve equation|physics formula|chemistry reaction)\b",
        // Medical or legal advice
        r"(?i)\b(medical advice|doctor opinion|health diagnosis|legal advice|lawyer consultation)\b",
    ])
});

/// Phrasings that usually need a clarifying follow-up rather than a
/// category answer.
static CLARIFICATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mk = |pats: &[&str]| -> Vec<Regex> {
        pats.iter()
            .map(|p| Regex::new(p).expect("invalid clarification pattern"))
            .collect()
    };

    mk(&[
        r"(?i)\b(why does|how come|explain in detail|detailed tutorial|step by step guide)\b",
        r"(?i)\b(your opinion|what do you think|personal feeling|emotional response)\b",
        r"(?i)\b(predict the future|what will happen|future prediction|tell me tomorrow)\b",
    ])
});

/// Whether the utterance hits a known-unsupported topic.
///
/// Requires a substantial match (more than [`MIN_SUBSTANTIAL_MATCH`]
/// characters) so a stray short token does not trigger a refusal.
pub fn is_out_of_scope(utterance: &str) -> bool {
    OUT_OF_SCOPE_PATTERNS
        .iter()
        .any(|re| re.find(utterance).is_some_and(|m| m.as_str().len() > MIN_SUBSTANTIAL_MATCH))
}

/// Whether the utterance is vague enough to warrant a clarification prompt.
pub fn needs_clarification(utterance: &str) -> bool {
    CLARIFICATION_PATTERNS.iter().any(|re| re.is_match(utterance))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Out-of-scope ----

    #[test]
    fn test_time_sensitive_query_is_out_of_scope() {
        assert!(is_out_of_scope("what's today's date"));
        assert!(is_out_of_scope("weather forecast for the weekend"));
    }

    #[test]
    fn test_unrelated_tool_support_is_out_of_scope() {
        assert!(is_out_of_scope("can you give me a photoshop tutorial"));
        assert!(is_out_of_scope("I need an excel formula for sums"));
    }

    #[test]
    fn test_private_data_is_out_of_scope() {
        assert!(is_out_of_scope("what is your phone number"));
        assert!(is_out_of_scope("tell me the password"));
    }

    #[test]
    fn test_news_is_out_of_scope() {
        assert!(is_out_of_scope("any latest news?"));
        assert!(is_out_of_scope("what were the election results"));
    }

    #[test]
    fn test_computation_is_out_of_scope() {
        assert!(is_out_of_scope("calculate this for me"));
        assert!(is_out_of_scope("solve equation x^2 = 4"));
    }

    #[test]
    fn test_medical_legal_is_out_of_scope() {
        assert!(is_out_of_scope("I need medical advice"));
        assert!(is_out_of_scope("can I get legal advice here"));
    }

    #[test]
    fn test_short_match_is_not_substantial() {
        // "age" matches the private-data group but is only 3 characters,
        // below the substantial-match threshold.
        assert!(!is_out_of_scope("what is your age"));
    }

    #[test]
    fn test_portfolio_questions_are_in_scope() {
        assert!(!is_out_of_scope("tell me about the projects"));
        assert!(!is_out_of_scope("what skills are covered"));
        assert!(!is_out_of_scope("how do I contact you"));
    }

    #[test]
    fn test_case_insensitive_out_of_scope() {
        assert!(is_out_of_scope("WEATHER FORECAST please"));
    }

    #[test]
    fn test_empty_input_in_scope() {
        assert!(!is_out_of_scope(""));
    }

    // ---- Clarification ----

    #[test]
    fn test_vague_why_needs_clarification() {
        assert!(needs_clarification("why does this matter"));
        assert!(needs_clarification("how come it works"));
    }

    #[test]
    fn test_opinion_needs_clarification() {
        assert!(needs_clarification("what do you think about rust"));
        assert!(needs_clarification("give me your opinion"));
    }

    #[test]
    fn test_future_prediction_needs_clarification() {
        assert!(needs_clarification("predict the future of the web"));
        assert!(needs_clarification("what will happen next year"));
    }

    #[test]
    fn test_direct_questions_do_not_need_clarification() {
        assert!(!needs_clarification("show me the projects"));
        assert!(!needs_clarification("hello"));
        assert!(!needs_clarification(""));
    }

    #[test]
    fn test_clarification_case_insensitive() {
        assert!(needs_clarification("WHAT DO YOU THINK"));
    }
}
