// File: src/learning.rs
use crate::core::engine::TranslatorEngine;
use crate::core::types::Direction;

/// A word the user wants to teach the glossary, in the order they typed it:
/// `word` is in the source language of `direction`, `translation` in the target.
pub struct NewWord {
    pub direction: Direction,
    pub word: String,
    pub translation: String,
}

impl NewWord {
    pub fn new(direction: Direction, word: &str, translation: &str) -> Self {
        Self {
            direction,
            word: word.trim().to_string(),
            translation: translation.trim().to_string(),
        }
    }

    /// The `(english, spanish)` pair regardless of which side was typed first.
    pub fn as_pair(&self) -> (&str, &str) {
        match self.direction {
            Direction::EnglishToSpanish => (&self.word, &self.translation),
            Direction::SpanishToEnglish => (&self.translation, &self.word),
        }
    }

    /// Stores the word in both glossaries. Returns whether anything was stored.
    pub fn learn(&self, engine: &mut TranslatorEngine) -> bool {
        let (english, spanish) = self.as_pair();
        engine.add_pair(english, spanish)
    }
}
