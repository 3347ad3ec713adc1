//! Classification and response selection.
//!
//! Resolution order: cache hit, canonical short query, out-of-scope
//! refusal, then relevance scoring over every category with a
//! clarification/fallback decision below the match threshold.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::ResponseCache;
use crate::category::{builtin_categories, simple_query_keyword, ResponseCategory};
use crate::patterns;
use crate::score::{relevance, CategoryMatchers};
use crate::window::ConversationWindow;

/// Minimum relevance score for a category to win.
pub const MATCH_THRESHOLD: f32 = 0.15;
/// Reported confidence never drops below this once a category is selected.
pub const CONFIDENCE_FLOOR: f32 = 0.4;
/// Confidence reported with a clarification prompt.
pub const CLARIFICATION_CONFIDENCE: f32 = 0.3;
/// Confidence reported with a generic fallback.
pub const FALLBACK_CONFIDENCE: f32 = 0.2;
/// Confidence reported with an out-of-scope refusal.
pub const OUT_OF_SCOPE_CONFIDENCE: f32 = 0.1;

static OUT_OF_SCOPE_RESPONSE: &str = "I'm focused on helping you explore this portfolio, so I can't help with that topic. Would you like to hear about the projects, skills, or artwork instead?";

static CLARIFICATION_RESPONSES: &[&str] = &[
    "I can share factual information about this portfolio. Could you rephrase your question or ask about something specific from the work here?",
    "To help you better, could you ask about the projects, technical skills, artwork, or how to get in touch?",
    "I can answer questions about the work on this site. Could you be more specific about what you'd like to know?",
];

static FALLBACK_RESPONSES: &[&str] = &[
    "I can help you explore this portfolio. Try asking about the projects, skills, artwork, or contact options.",
    "I'm here to talk about the work on this site. What would you like to know about the projects, skills, or creative pieces?",
    "Feel free to ask about the projects, technical skills, digital artwork, or contact information.",
];

/// The engine's answer for one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub response: String,
    pub confidence: f32,
    #[serde(default)]
    pub is_out_of_scope: bool,
    #[serde(default)]
    pub related_sections: Vec<String>,
}

/// Rule-based classifier over an immutable category list.
///
/// Owns the random source used for response selection so tests can seed
/// it for deterministic output.
pub struct Classifier {
    categories: Vec<ResponseCategory>,
    matchers: Vec<CategoryMatchers>,
    rng: StdRng,
}

impl Classifier {
    /// Classifier over the built-in dataset, seeded from the OS.
    pub fn new() -> Self {
        Self::with_categories(builtin_categories())
    }

    /// Classifier over the built-in dataset with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut classifier = Self::new();
        classifier.rng = StdRng::seed_from_u64(seed);
        classifier
    }

    /// Classifier over a custom category list.
    pub fn with_categories(categories: Vec<ResponseCategory>) -> Self {
        let matchers = categories.iter().map(CategoryMatchers::compile).collect();
        Self {
            categories,
            matchers,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn categories(&self) -> &[ResponseCategory] {
        &self.categories
    }

    /// Produce a reply for one utterance.
    ///
    /// Reads through `cache` before computing, and pushes the utterance
    /// onto `window` whenever the call reaches the scoring step (so cache
    /// hits and short-query hits leave the window untouched).
    pub fn respond(
        &mut self,
        utterance: &str,
        cache: &mut ResponseCache,
        window: &mut ConversationWindow,
    ) -> Reply {
        let key = ResponseCache::key(utterance);

        if let Some(hit) = cache.get(&key) {
            debug!(key = %key, "response cache hit");
            return hit.clone();
        }

        // Canonical short queries resolve straight to their category.
        if let Some(keyword) = simple_query_keyword(&key) {
            if let Some(category) = self
                .categories
                .iter()
                .find(|c| c.keywords.iter().any(|k| k == keyword))
            {
                debug!(key = %key, keyword, "short-query match");
                let reply = Reply {
                    response: pick(&mut self.rng, &category.responses),
                    confidence: category.confidence,
                    is_out_of_scope: false,
                    related_sections: category.related_sections.clone(),
                };
                cache.insert(key, reply.clone());
                return reply;
            }
        }

        if patterns::is_out_of_scope(utterance) {
            debug!(key = %key, "out-of-scope utterance");
            let reply = Reply {
                response: OUT_OF_SCOPE_RESPONSE.to_string(),
                confidence: OUT_OF_SCOPE_CONFIDENCE,
                is_out_of_scope: true,
                related_sections: vec![],
            };
            cache.insert(key, reply.clone());
            return reply;
        }

        // Recorded now, applied only if no category clears the threshold.
        let wants_clarification = patterns::needs_clarification(utterance);

        let mut scored: Vec<(usize, f32)> = (0..self.categories.len())
            .map(|i| {
                (
                    i,
                    relevance(utterance, &self.categories[i], &self.matchers[i], window),
                )
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        // Every call that reaches scoring feeds the window, even when the
        // decision below ends in clarification or fallback.
        window.push(utterance);

        let best = scored.first().copied();
        let reply = match best {
            Some((index, score)) if score > MATCH_THRESHOLD => {
                let category = &self.categories[index];
                let confidence = (category.confidence * score).max(CONFIDENCE_FLOOR);
                debug!(category = index, score, confidence, "category match");
                Reply {
                    response: pick(&mut self.rng, &category.responses),
                    confidence,
                    is_out_of_scope: false,
                    related_sections: category.related_sections.clone(),
                }
            }
            _ if wants_clarification => {
                debug!(key = %key, "clarification prompt");
                Reply {
                    response: pick(&mut self.rng, CLARIFICATION_RESPONSES),
                    confidence: CLARIFICATION_CONFIDENCE,
                    is_out_of_scope: false,
                    related_sections: vec![],
                }
            }
            _ => {
                debug!(key = %key, "fallback response");
                Reply {
                    response: pick(&mut self.rng, FALLBACK_RESPONSES),
                    confidence: FALLBACK_CONFIDENCE,
                    is_out_of_scope: false,
                    related_sections: vec![],
                }
            }
        };
        cache.insert(key, reply.clone());
        reply
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform random pick from a response list.
fn pick<T: AsRef<str>>(rng: &mut StdRng, options: &[T]) -> String {
    if options.is_empty() {
        return String::new();
    }
    options[rng.random_range(0..options.len())].as_ref().to_string()
}

// =============================================================================
// Tests
// =============================================================================
