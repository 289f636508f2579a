//! A store view scoped to one key prefix.

use dexkeys_core::concat;

use crate::kv::{KvIter, KvStore};

/// Reads and writes through to `parent` with `prefix` prepended.
///
/// Keys seen through the view, including those yielded by iteration, have
/// the prefix stripped.
pub struct PrefixStore<'a, S: KvStore> {
    parent: &'a mut S,
    prefix: Vec<u8>,
}

impl<'a, S: KvStore> PrefixStore<'a, S> {
    pub fn new(parent: &'a mut S, prefix: Vec<u8>) -> Self {
        Self { parent, prefix }
    }

    #[must_use]
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }
}

impl<S: KvStore> KvStore for PrefixStore<'_, S> {
    fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.parent.get(&concat(&self.prefix, key))
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        let full = concat(&self.prefix, key);
        self.parent.set(&full, value);
    }

    fn delete(&mut self, key: &[u8]) {
        let full = concat(&self.prefix, key);
        self.parent.delete(&full);
    }

    fn iterate_prefix(&self, prefix: &[u8]) -> KvIter<'_> {
        let strip = self.prefix.len();
        let full = concat(&self.prefix, prefix);
        Box::new(
            self.parent
                .iterate_prefix(&full)
                .map(move |(k, v)| (&k[strip..], v)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemKvStore;

    #[test]
    fn writes_land_under_prefix() {
        let mut store = MemKvStore::new();
        {
            let mut view = PrefixStore::new(&mut store, b"noid".to_vec());
            view.set(b"\x01c", b"7");
            assert_eq!(view.get(b"\x01c"), Some(&b"7"[..]));
        }
        assert_eq!(store.get(b"noid\x01c"), Some(&b"7"[..]));
    }

    #[test]
    fn iteration_strips_prefix_and_stays_scoped() {
        let mut store = MemKvStore::new();
        store.set(b"rp-a", b"1");
        store.set(b"rp-b", b"2");
        store.set(b"rq-c", b"3");
        let view = PrefixStore::new(&mut store, b"rp-".to_vec());
        let seen: Vec<(Vec<u8>, Vec<u8>)> = view
            .iterate_prefix(&[])
            .map(|(k, v)| (k.to_vec(), v.to_vec()))
            .collect();
        assert_eq!(
            seen,
            vec![
                (b"a".to_vec(), b"1".to_vec()),
                (b"b".to_vec(), b"2".to_vec())
            ]
        );
    }

    #[test]
    fn nested_views_compose() {
        let mut store = MemKvStore::new();
        {
            let mut outer = PrefixStore::new(&mut store, b"A".to_vec());
            let mut inner = PrefixStore::new(&mut outer, b"B".to_vec());
            inner.set(b"C", b"v");
            assert_eq!(inner.delete_prefix(b"X"), 0);
        }
        assert!(store.has(b"ABC"));
    }
}
