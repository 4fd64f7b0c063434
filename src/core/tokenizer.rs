// src/core/tokenizer.rs
use crate::core::types::Token;
use once_cell::sync::Lazy;
use regex::Regex;

/// Either a run of letters (group 1) or a run of anything else (group 2).
static RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\p{L}+)|(\P{L}+)").expect("run pattern is valid"));

/// Splits `text` into maximal letter / non-letter runs, in order.
///
/// The partition is total: concatenating every token's text gives back
/// `text` exactly. The iterator borrows from `text` and is consumed once.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token<'_>> {
    RUNS.captures_iter(text).filter_map(|caps| {
        if let Some(letters) = caps.get(1) {
            Some(Token::LetterRun(letters.as_str()))
        } else {
            caps.get(2).map(|other| Token::NonLetterRun(other.as_str()))
        }
    })
}
