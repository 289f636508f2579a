//! The sorted store interface every key in the layout is used against.

/// Iterator over `(key, value)` pairs in ascending byte order.
pub type KvIter<'a> = Box<dyn Iterator<Item = (&'a [u8], &'a [u8])> + 'a>;

/// A byte-keyed store with exact lookups and ordered prefix scans.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Option<&[u8]>;

    fn set(&mut self, key: &[u8], value: &[u8]);

    fn delete(&mut self, key: &[u8]);

    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// All entries whose key starts with `prefix`, ascending.
    fn iterate_prefix(&self, prefix: &[u8]) -> KvIter<'_>;

    /// Delete every entry under `prefix`. Returns how many were removed.
    fn delete_prefix(&mut self, prefix: &[u8]) -> usize {
        let keys: Vec<Vec<u8>> = self
            .iterate_prefix(prefix)
            .map(|(k, _)| k.to_vec())
            .collect();
        for key in &keys {
            self.delete(key);
        }
        keys.len()
    }
}

/// The smallest key strictly greater than every key starting with `prefix`.
///
/// `None` means the range is unbounded above: the prefix is empty or all
/// `0xFF`.
#[must_use]
pub fn prefix_end_bytes(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.pop() {
        if last < u8::MAX {
            end.push(last + 1);
            return Some(end);
        }
    }
    None
}
