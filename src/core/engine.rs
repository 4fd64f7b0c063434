use crate::core::casing::match_case;
use crate::core::glossary::GlossaryStore;
use crate::core::normalizer::normalize;
use crate::core::tokenizer::tokenize;
use crate::core::types::{first_variant, Direction, Token};
use crate::error::Result;
use crate::seed::load_seed_pairs;
use log::{info, trace};

// The translator owns the glossary; the shell borrows it mutably for
// additions and immutably for translations.
pub struct TranslatorEngine {
    pub glossary: GlossaryStore,
}

impl TranslatorEngine {
    /// An engine with an empty glossary.
    pub fn new() -> Self {
        Self {
            glossary: GlossaryStore::new(),
        }
    }

    /// An engine pre-loaded with the built-in English/Spanish pairs.
    pub fn with_seed() -> Result<Self> {
        let mut engine = Self::new();
        engine.seed_initial_pairs()?;
        Ok(engine)
    }

    /// Adds the built-in pairs to the glossary, in document order.
    pub fn seed_initial_pairs(&mut self) -> Result<()> {
        let pairs = load_seed_pairs()?;
        for pair in &pairs {
            self.glossary.add_pair(&pair.english, &pair.spanish);
        }
        info!("Seeded glossary with {} pairs", pairs.len());
        Ok(())
    }

    pub fn add_pair(&mut self, english: &str, spanish: &str) -> bool {
        self.glossary.add_pair(english, spanish)
    }

    /// Word-for-word translation of `text`.
    ///
    /// Known words are replaced by the first variant of their stored
    /// translation, cased like the source word. Unknown words and every
    /// non-letter run are copied through unchanged.
    pub fn translate(&self, text: &str, direction: Direction) -> String {
        let mut output = String::with_capacity(text.len());
        for token in tokenize(text) {
            match token {
                Token::LetterRun(word) => output.push_str(&self.translate_word(word, direction)),
                Token::NonLetterRun(other) => output.push_str(other),
            }
        }
        output
    }

    fn translate_word(&self, word: &str, direction: Direction) -> String {
        let key = normalize(word);
        match self.glossary.lookup(direction, &key) {
            Some(raw) => {
                let chosen = first_variant(raw).trim();
                trace!("{:?}: '{}' -> '{}'", direction, word, chosen);
                match_case(word, chosen)
            }
            None => {
                trace!("{:?}: no entry for '{}'", direction, key);
                word.to_string()
            }
        }
    }
}

impl Default for TranslatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
