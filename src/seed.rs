// File: src/seed.rs
use crate::core::types::SeedPair;
use crate::error::Result;

/// The glossary every session starts from. Nothing added at runtime is
/// written back here.
const SEED_DOCUMENT: &str = include_str!("../data/seed_glossary.json");

/// Parses the built-in seed pairs, preserving document order.
pub fn load_seed_pairs() -> Result<Vec<SeedPair>> {
    parse_seed_pairs(SEED_DOCUMENT)
}

pub fn parse_seed_pairs(document: &str) -> Result<Vec<SeedPair>> {
    let pairs: Vec<SeedPair> = serde_json::from_str(document)?;
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlosaError;

    #[test]
    fn builtin_document_parses() {
        let pairs = load_seed_pairs().unwrap();
        assert_eq!(pairs.len(), 24);
        assert_eq!(
            pairs[0],
            SeedPair { english: "Time".into(), spanish: "tiempo".into() }
        );
        assert_eq!(pairs.last().unwrap().spanish, "el/la/los/las");
    }

    #[test]
    fn malformed_document_is_a_seed_error() {
        let err = parse_seed_pairs("[{\"english\": \"Time\"}]").unwrap_err();
        assert!(matches!(err, GlosaError::Seed(_)));
    }
}
