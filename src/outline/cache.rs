//! Parse result cache
//!
//! Keyed by the blake3 hash of the content, the language, and the signature width,
//! so identical files under different paths share one parse. Cached and uncached
//! runs produce the same outlines.

use crate::extractors::base::ParseOutcome;
use crate::language::LanguageTag;
use dashmap::DashMap;
use std::sync::Arc;

type CacheKey = (blake3::Hash, LanguageTag, usize);

/// Concurrent cache of parse outcomes, cheap to clone and share between engines
#[derive(Debug, Clone, Default)]
pub struct OutlineCache {
    entries: Arc<DashMap<CacheKey, ParseOutcome>>,
}

impl OutlineCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(content: &str, language: LanguageTag, max_signature_width: usize) -> CacheKey {
        (
            blake3::hash(content.as_bytes()),
            language,
            max_signature_width,
        )
    }

    pub fn get(
        &self,
        content: &str,
        language: LanguageTag,
        max_signature_width: usize,
    ) -> Option<ParseOutcome> {
        self.entries
            .get(&Self::key(content, language, max_signature_width))
            .map(|entry| entry.value().clone())
    }

    pub fn insert(
        &self,
        content: &str,
        language: LanguageTag,
        max_signature_width: usize,
        outcome: ParseOutcome,
    ) {
        self.entries
            .insert(Self::key(content, language, max_signature_width), outcome);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_requires_same_content_language_and_width() {
        let cache = OutlineCache::new();
        cache.insert("x = 1\n", LanguageTag::Python, 120, ParseOutcome::default());

        assert!(cache.get("x = 1\n", LanguageTag::Python, 120).is_some());
        assert!(cache.get("x = 2\n", LanguageTag::Python, 120).is_none());
        assert!(cache.get("x = 1\n", LanguageTag::Ruby, 120).is_none());
        assert!(cache.get("x = 1\n", LanguageTag::Python, 40).is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = OutlineCache::new();
        let shared = cache.clone();
        shared.insert("", LanguageTag::Go, 120, ParseOutcome::default());
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(shared.is_empty());
    }
}
