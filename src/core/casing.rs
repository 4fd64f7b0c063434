// File: src/core/casing.rs

/// Re-applies the casing pattern of `original` to `translation`.
///
/// All-caps source gives an all-caps result, a capitalized source gives a
/// capitalized result, anything else leaves the translation as stored.
pub fn match_case(original: &str, translation: &str) -> String {
    if translation.is_empty() {
        return String::new();
    }
    if original == original.to_uppercase() {
        return translation.to_uppercase();
    }
    if original.chars().next().is_some_and(char::is_uppercase) {
        return capitalize_first(translation);
    }
    translation.to_string()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
