// src/core/types.rs
use serde::Deserialize;

/// Canonical lookup form of a word: trimmed, lowercased, diacritics removed.
/// Only ever used as a map key, never shown to the user.
pub type NormalizedKey = String;

/// Separator between alternative wordings inside a stored translation,
/// e.g. "niño/niña".
pub const VARIANT_SEPARATOR: char = '/';

/// Which of the two one-way glossaries a call works against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    EnglishToSpanish,
    SpanishToEnglish,
}

impl Direction {
    /// Parses the console selector: "1" is English -> Spanish, "2" the reverse.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim() {
            "1" => Some(Direction::EnglishToSpanish),
            "2" => Some(Direction::SpanishToEnglish),
            _ => None,
        }
    }
}

/// One maximal run of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Consecutive letters (Unicode category L).
    LetterRun(&'a str),
    /// Everything else: whitespace, punctuation, digits, symbols.
    NonLetterRun(&'a str),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Token::LetterRun(s) | Token::NonLetterRun(s) => *s,
        }
    }

    pub fn is_letter_run(&self) -> bool {
        matches!(self, Token::LetterRun(_))
    }
}

/// A single English/Spanish pair as written in the seed document.
/// Either side may carry `/`-separated variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedPair {
    pub english: String,
    pub spanish: String,
}

/// Returns the first `/`-delimited segment of a raw translation.
pub fn first_variant(raw: &str) -> &str {
    raw.split(VARIANT_SEPARATOR).next().unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parsing() {
        assert_eq!(Direction::from_selector("1"), Some(Direction::EnglishToSpanish));
        assert_eq!(Direction::from_selector(" 2 "), Some(Direction::SpanishToEnglish));
        assert_eq!(Direction::from_selector("3"), None);
        assert_eq!(Direction::from_selector(""), None);
    }

    #[test]
    fn first_variant_takes_leading_segment() {
        assert_eq!(first_variant("el/la/los/las"), "el");
        assert_eq!(first_variant("tiempo"), "tiempo");
        assert_eq!(first_variant("/forma"), "");
        assert_eq!(first_variant(""), "");
    }
}
