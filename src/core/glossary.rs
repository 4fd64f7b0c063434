// --- File: src/core/glossary.rs
use crate::core::normalizer::normalize;
use crate::core::types::{first_variant, Direction, NormalizedKey};
use log::{debug, warn};
use std::collections::HashMap;

/// The two one-way glossaries.
///
/// Every pair is written into both maps, but the maps are keyed independently
/// (each by the first variant of its own side), so they are two views that do
/// not have to agree with each other. Later writes overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct GlossaryStore {
    /// English key -> raw Spanish value, variants included.
    forward: HashMap<NormalizedKey, String>,
    /// Spanish key -> raw English value, variants included.
    reverse: HashMap<NormalizedKey, String>,
}

impl GlossaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `english -> spanish` and `spanish -> english`.
    ///
    /// Returns `false` without touching either map when a side is blank.
    pub fn add_pair(&mut self, english: &str, spanish: &str) -> bool {
        if english.trim().is_empty() || spanish.trim().is_empty() {
            warn!("Ignoring glossary pair with a blank side: {:?} / {:?}", english, spanish);
            return false;
        }

        let english_key = normalize(first_variant(english));
        let spanish_key = normalize(first_variant(spanish));

        if let Some(previous) = self.forward.insert(english_key.clone(), spanish.to_string()) {
            debug!("Overwrote '{}': '{}' -> '{}'", english_key, previous, spanish);
        } else {
            debug!("Stored '{}' -> '{}'", english_key, spanish);
        }
        if let Some(previous) = self.reverse.insert(spanish_key.clone(), english.to_string()) {
            debug!("Overwrote '{}': '{}' -> '{}'", spanish_key, previous, english);
        } else {
            debug!("Stored '{}' -> '{}'", spanish_key, english);
        }
        true
    }

    /// Raw stored value (all variants) for an already-normalized key.
    pub fn lookup(&self, direction: Direction, key: &str) -> Option<&str> {
        self.map(direction).get(key).map(String::as_str)
    }

    pub fn len(&self, direction: Direction) -> usize {
        self.map(direction).len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.reverse.is_empty()
    }

    fn map(&self, direction: Direction) -> &HashMap<NormalizedKey, String> {
        match direction {
            Direction::EnglishToSpanish => &self.forward,
            Direction::SpanishToEnglish => &self.reverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn pair_lands_in_both_directions() {
        let mut store = GlossaryStore::new();
        assert!(store.add_pair("Year", "año"));
        assert_eq!(store.lookup(EnglishToSpanish, "year"), Some("año"));
        assert_eq!(store.lookup(SpanishToEnglish, "ano"), Some("Year"));
    }

    #[test]
    fn keys_come_from_first_variant_but_values_stay_raw() {
        let mut store = GlossaryStore::new();
        store.add_pair("Child", "niño/niña");
        assert_eq!(store.lookup(EnglishToSpanish, "child"), Some("niño/niña"));
        assert_eq!(store.lookup(SpanishToEnglish, "nino"), Some("Child"));
        assert_eq!(store.lookup(SpanishToEnglish, "nina"), None);
    }

    #[test]
    fn blank_sides_are_ignored() {
        let mut store = GlossaryStore::new();
        assert!(!store.add_pair("", "tiempo"));
        assert!(!store.add_pair("Time", "   "));
        assert!(store.is_empty());
    }

    #[test]
    fn last_write_wins() {
        let mut store = GlossaryStore::new();
        store.add_pair("Day", "día");
        store.add_pair("Day", "jornada");
        assert_eq!(store.lookup(EnglishToSpanish, "day"), Some("jornada"));
        assert_eq!(store.len(EnglishToSpanish), 1);
        // the old reverse entry is not cleaned up
        assert_eq!(store.lookup(SpanishToEnglish, "dia"), Some("Day"));
        assert_eq!(store.lookup(SpanishToEnglish, "jornada"), Some("Day"));
    }
}
