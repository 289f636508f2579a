//! Transient store for entries staged within one processing unit.

use dexkeys_types::constants::MEM_STORE_KEY;

use crate::kv::{KvIter, KvStore};
use crate::memory::MemKvStore;

/// The `mem_dex` namespace: staged orders, cancels, and deposits.
///
/// Nothing here is committed. [`TransientStore::clear`] is called when the
/// processing unit ends.
#[derive(Debug, Clone, Default)]
pub struct TransientStore {
    inner: MemKvStore,
}

impl TransientStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store key this namespace is mounted under.
    #[must_use]
    pub fn store_key(&self) -> &'static str {
        MEM_STORE_KEY
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop every staged entry. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.inner.len();
        self.inner.clear();
        tracing::trace!(store = MEM_STORE_KEY, dropped, "transient store cleared");
        dropped
    }
}

impl KvStore for TransientStore {
    fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.inner.set(key, value);
    }

    fn delete(&mut self, key: &[u8]) {
        self.inner.delete(key);
    }

    fn iterate_prefix(&self, prefix: &[u8]) -> KvIter<'_> {
        self.inner.iterate_prefix(prefix)
    }
}
