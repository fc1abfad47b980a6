//! # morse_trie
//!
//! Morse code decoding and encoding over a binary dot/dash trie.
//!
//! Each node of the trie is reached by a path of signals from the root: a
//! dot descends left, a dash descends right. Inserting a character walks
//! (and, where needed, grows) its path and stores the character at the
//! end. Decoding walks the same path back. A reverse index kept alongside
//! the tree answers "what is the code for this character" without
//! traversal.
//!
//! ## Core Concepts
//!
//! - **Signal / Code**: a dot or dash, and the sequence of them for one character
//! - **Alphabet**: the table a trie is seeded from, standard or custom
//! - **MorseTrie**: the tree plus its reverse index
//! - **TreeLayout**: the trie placed on a canvas, for renderers
//!
//! ## Example
//!
//! ```
//! use morse_trie::MorseTrie;
//!
//! let trie = MorseTrie::standard();
//! assert_eq!(trie.decode(".... . .-.. .-.. ---"), "HELLO");
//! assert_eq!(trie.code_for('s'), "...");
//! assert_eq!(trie.height(), 5);
//! ```

pub mod config;
pub mod model;
pub mod trie;
pub mod viz;

mod error;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use model::{Alphabet, Code, Signal};
pub use trie::{Lookup, MorseTrie, Node, SharedTrie, BLANK_MARKER, UNKNOWN_MARKER};
pub use viz::{TreeLayout, VizEdge, VizLabel, VizMeta, VizNode};
