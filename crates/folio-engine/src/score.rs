//! Weighted relevance scoring of an utterance against a category.
//!
//! Four independent signals are summed and clamped to 1.0:
//! a whole-word keyword hit (0.5, first match only), keyword substring
//! density (up to 0.4), context-term overlap (up to 0.2), and carryover
//! from the recent conversation window (up to 0.1).

use regex::Regex;

use crate::category::ResponseCategory;
use crate::window::ConversationWindow;

/// Bonus for the first whole-word keyword match.
pub const EXACT_MATCH_BONUS: f32 = 0.5;
/// Weight of the matched-keyword fraction.
pub const KEYWORD_DENSITY_WEIGHT: f32 = 0.4;
/// Weight of the context-term overlap fraction.
pub const CONTEXT_OVERLAP_WEIGHT: f32 = 0.2;
/// Weight of the conversation-window carryover fraction.
pub const CARRYOVER_WEIGHT: f32 = 0.1;

/// Per-category regexes, compiled once at engine construction.
#[derive(Debug)]
pub struct CategoryMatchers {
    /// One whole-word pattern per keyword.
    exact: Vec<Regex>,
    /// One relaxed suffix pattern per keyword, parallel to `exact`.
    relaxed: Vec<Regex>,
}

impl CategoryMatchers {
    /// Compile the matchers for one category.
    pub fn compile(category: &ResponseCategory) -> Self {
        let exact = category
            .keywords
            .iter()
            .map(|kw| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw)))
                    .expect("invalid keyword pattern")
            })
            .collect();
        // `[s|ing|ed]` is a character class (any run of the characters
        // s, |, i, n, g, e, d), not a suffix alternation. The looser match
        // is intentional; the scoring thresholds depend on it.
        let relaxed = category
            .keywords
            .iter()
            .map(|kw| {
                Regex::new(&format!(r"(?i)\b{}[s|ing|ed]*\b", regex::escape(kw)))
                    .expect("invalid keyword pattern")
            })
            .collect();
        Self { exact, relaxed }
    }
}

/// Score how well `utterance` matches `category`, in [0, 1].
pub fn relevance(
    utterance: &str,
    category: &ResponseCategory,
    matchers: &CategoryMatchers,
    window: &ConversationWindow,
) -> f32 {
    let lower = utterance.to_lowercase();
    let mut score = 0.0f32;

    // Whole-word keyword hit: first match wins, no stacking.
    if matchers.exact.iter().any(|re| re.is_match(utterance)) {
        score += EXACT_MATCH_BONUS;
    }

    // Substring density: keyword present as a substring and matching the
    // relaxed word-boundary form.
    let matched = category
        .keywords
        .iter()
        .zip(&matchers.relaxed)
        .filter(|(kw, re)| lower.contains(kw.as_str()) && re.is_match(utterance))
        .count();
    score += matched as f32 / category.keywords.len().max(1) as f32 * KEYWORD_DENSITY_WEIGHT;

    // Context-term overlap. Contributes nothing when the category has no
    // context terms.
    if !category.context.is_empty() {
        let hits = category
            .context
            .iter()
            .filter(|term| lower.contains(term.as_str()))
            .count();
        score += hits as f32 / category.context.len() as f32 * CONTEXT_OVERLAP_WEIGHT;
    }

    // Carryover: fraction of recent utterances containing any keyword.
    if !window.is_empty() {
        let hits = window
            .iter()
            .filter(|prior| {
                let prior_lower = prior.to_lowercase();
                category
                    .keywords
                    .iter()
                    .any(|kw| prior_lower.contains(kw.as_str()))
            })
            .count();
        score += hits as f32 / window.len() as f32 * CARRYOVER_WEIGHT;
    }

    score.min(1.0)
}

// =============================================================================
// Tests
// =============================================================================
