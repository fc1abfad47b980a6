//! Core data model types for morse_trie

mod alphabet;
mod code;

pub use alphabet::Alphabet;
pub use code::{Code, Signal};
