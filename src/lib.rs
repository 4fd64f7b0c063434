// src/lib.rs

pub mod core;
pub mod error;
pub mod learning;
pub mod seed;
pub mod shell;
pub use crate::core::engine::TranslatorEngine;
pub use crate::core::types::Direction;
