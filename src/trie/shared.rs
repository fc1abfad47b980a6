//! Lock-guarded trie for callers that insert concurrently

use super::MorseTrie;
use crate::model::Code;
use crate::Result;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// A cloneable handle to a trie behind a read/write lock
///
/// Insertions take the write lock, so a path and its reverse-lookup entry
/// are always published together. Reads take the read lock and see a
/// consistent snapshot.
#[derive(Clone, Debug, Default)]
pub struct SharedTrie {
    inner: Arc<RwLock<MorseTrie>>,
}

impl SharedTrie {
    pub fn new(trie: MorseTrie) -> Self {
        SharedTrie {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    pub fn insert(&self, symbol: char, code: &Code) -> Option<char> {
        self.inner.write().insert(symbol, code)
    }

    pub fn insert_str(&self, symbol: char, code: &str) -> Result<Option<char>> {
        self.inner.write().insert_str(symbol, code)
    }

    pub fn decode(&self, message: &str) -> String {
        self.inner.read().decode(message)
    }

    pub fn decode_strict(&self, message: &str) -> Result<String> {
        self.inner.read().decode_strict(message)
    }

    pub fn code_for(&self, symbol: char) -> String {
        self.inner.read().code_for(symbol)
    }

    pub fn height(&self) -> usize {
        self.inner.read().height()
    }

    /// Hold the read lock for several queries against one snapshot
    pub fn read(&self) -> RwLockReadGuard<'_, MorseTrie> {
        self.inner.read()
    }

    /// Copy out the current state
    pub fn snapshot(&self) -> MorseTrie {
        self.inner.read().clone()
    }
}

impl From<MorseTrie> for SharedTrie {
    fn from(trie: MorseTrie) -> Self {
        SharedTrie::new(trie)
    }
}
