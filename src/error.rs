//! Error types for morse_trie

use thiserror::Error;

/// Result type alias for morse_trie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in morse_trie operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid signal {symbol:?} in code {code:?}")]
    InvalidSignal { symbol: char, code: String },

    #[error("Unknown code {token:?} at position {position}")]
    UnknownPath { token: String, position: usize },

    #[error("Incomplete code {token:?} at position {position}")]
    IncompleteCode { token: String, position: usize },

    #[error("Unknown character: {0:?}")]
    UnknownCharacter(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
