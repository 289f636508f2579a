//! In-memory `BTreeMap` backend.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::kv::{KvIter, KvStore, prefix_end_bytes};

/// A sorted in-memory store. Iteration order is byte-lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemKvStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemKvStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Every entry, ascending.
    pub fn iter(&self) -> KvIter<'_> {
        self.iterate_prefix(&[])
    }
}

impl KvStore for MemKvStore {
    fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.entries.insert(key.to_vec(), value.to_vec());
    }

    fn delete(&mut self, key: &[u8]) {
        self.entries.remove(key);
    }

    fn iterate_prefix(&self, prefix: &[u8]) -> KvIter<'_> {
        let end = prefix_end_bytes(prefix);
        let upper = match &end {
            Some(end) => Bound::Excluded(end.as_slice()),
            None => Bound::Unbounded,
        };
        let range = self
            .entries
            .range::<[u8], _>((Bound::Included(prefix), upper));
        Box::new(range.map(|(k, v)| (k.as_slice(), v.as_slice())))
    }
}
