//! Binary dot/dash trie for Morse decoding
//!
//! This implements a trie where:
//! - Each edge is a signal: dot descends left, dash descends right
//! - A node carries a character when some inserted code ends there
//! - A side index maps characters back to their codes

mod node;
mod shared;
mod tree;

pub use node::Node;
pub use shared::SharedTrie;
pub use tree::{Lookup, MorseTrie, BLANK_MARKER, UNKNOWN_MARKER};
