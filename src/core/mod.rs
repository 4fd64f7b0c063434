// src/core/mod.rs
//
// Leaf components of the translator, leaves first:
// normalizer -> glossary -> casing -> tokenizer -> engine.

pub mod casing;
pub mod engine;
pub mod glossary;
pub mod normalizer;
pub mod tokenizer;
pub mod types;
