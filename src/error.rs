/*!
 * Error types for glosa.
 *
 * Translation itself cannot fail; only loading the built-in glossary and
 * talking to the console can.
 */

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlosaError {
    /// The embedded seed glossary could not be parsed
    #[error("Invalid seed glossary: {0}")]
    Seed(#[from] serde_json::Error),

    /// Reading from or writing to the console failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GlosaError>;
