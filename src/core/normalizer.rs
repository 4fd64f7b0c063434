// src/core/normalizer.rs
use crate::core::types::NormalizedKey;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Non-spacing marks only; spacing (Mc) and enclosing (Me) marks are kept.
static NON_SPACING_MARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Mn}+").expect("mark pattern is valid"));

/// Produces the canonical lookup key for a word.
///
/// Trims, lowercases, decomposes (NFD), drops non-spacing marks and recomposes
/// (NFC), so "Año", "AÑO" and "año " all land on the same key "ano".
/// Empty input yields an empty key.
pub fn normalize(s: &str) -> NormalizedKey {
    let lowered = s.trim().to_lowercase();
    if lowered.is_empty() {
        return NormalizedKey::new();
    }
    let decomposed: String = lowered.nfd().collect();
    let without_marks = NON_SPACING_MARKS.replace_all(&decomposed, "");
    let stripped: String = without_marks.chars().nfc().collect();
    // a stray leading mark can leave whitespace at the edge once removed
    stripped.trim().to_string()
}
