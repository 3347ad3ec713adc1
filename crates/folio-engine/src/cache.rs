//! Session-scoped response cache.
//!
//! Keys are the lower-cased, trimmed raw utterance; entries are written
//! once per unique key and read through before any recomputation. The
//! cache is unbounded for the lifetime of the session, which is acceptable
//! for low-volume interactive use.

use std::collections::HashMap;

use crate::classify::Reply;

/// Write-once, read-through map from normalized utterances to replies.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    entries: HashMap<String, Reply>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize an utterance into its cache key.
    pub fn key(utterance: &str) -> String {
        utterance.trim().to_lowercase()
    }

    /// Look up a previously computed reply.
    pub fn get(&self, key: &str) -> Option<&Reply> {
        self.entries.get(key)
    }

    /// Store a reply for a key. The first write wins; later writes for the
    /// same key are ignored.
    pub fn insert(&mut self, key: String, reply: Reply) {
        self.entries.entry(key).or_insert(reply);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str) -> Reply {
        Reply {
            response: text.to_string(),
            confidence: 0.9,
            is_out_of_scope: false,
            related_sections: vec![],
        }
    }

    #[test]
    fn test_key_normalization() {
        assert_eq!(ResponseCache::key("  Hello There  "), "hello there");
        assert_eq!(ResponseCache::key("PROJECTS"), "projects");
    }

    #[test]
    fn test_get_miss() {
        let cache = ResponseCache::new();
        assert!(cache.get("anything").is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = ResponseCache::new();
        cache.insert("projects".to_string(), reply("see the projects section"));
        let hit = cache.get("projects").unwrap();
        assert_eq!(hit.response, "see the projects section");
    }

    #[test]
    fn test_first_write_wins() {
        let mut cache = ResponseCache::new();
        cache.insert("projects".to_string(), reply("first"));
        cache.insert("projects".to_string(), reply("second"));
        assert_eq!(cache.get("projects").unwrap().response, "first");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_case_variants_share_key() {
        let mut cache = ResponseCache::new();
        cache.insert(ResponseCache::key("Projects"), reply("answer"));
        assert!(cache.get(&ResponseCache::key("pRoJeCtS")).is_some());
    }

    #[test]
    fn test_out_of_scope_flag_preserved() {
        let mut cache = ResponseCache::new();
        let mut r = reply("refused");
        r.is_out_of_scope = true;
        r.confidence = 0.1;
        cache.insert("whats the weather".to_string(), r);
        let hit = cache.get("whats the weather").unwrap();
        assert!(hit.is_out_of_scope);
        assert_eq!(hit.confidence, 0.1);
    }
}
