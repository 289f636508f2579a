//! Layout fingerprint for cross-replica consistency.
//!
//! Every replica must derive bit-identical keys from identical inputs. The
//! fingerprint commits to the tag registry and the fixed field widths, so two
//! nodes can compare a single 32-byte value instead of the whole layout.

use dexkeys_types::constants::{
    ADDRESS_LEN_PREFIX_WIDTH, DENOM_LEN_PREFIX_WIDTH, SETTLEMENT_SEPARATOR, U64_WIDTH,
};
use sha2::{Digest, Sha256};

use crate::tags::KeyTag;

/// Compute the fingerprint of the current key layout.
#[must_use]
pub fn layout_fingerprint() -> [u8; 32] {
    fingerprint_of(&KeyTag::ALL.map(KeyTag::as_bytes))
}

/// Hex form of [`layout_fingerprint`].
#[must_use]
pub fn layout_fingerprint_hex() -> String {
    hex::encode(layout_fingerprint())
}

/// Check a fingerprint reported by another replica.
#[must_use]
pub fn verify_layout_fingerprint(expected: &[u8; 32]) -> bool {
    layout_fingerprint() == *expected
}

fn fingerprint_of(literals: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"dexkeys:layout:v1:");
    hasher.update((literals.len() as u64).to_be_bytes());
    for literal in literals {
        hasher.update((literal.len() as u64).to_be_bytes());
        hasher.update(literal);
    }
    hasher.update((DENOM_LEN_PREFIX_WIDTH as u64).to_be_bytes());
    hasher.update((ADDRESS_LEN_PREFIX_WIDTH as u64).to_be_bytes());
    hasher.update((U64_WIDTH as u64).to_be_bytes());
    hasher.update([SETTLEMENT_SEPARATOR]);

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_across_calls() {
        assert_eq!(layout_fingerprint(), layout_fingerprint());
        assert!(verify_layout_fingerprint(&layout_fingerprint()));
    }

    #[test]
    fn hex_is_64_chars() {
        let hex = layout_fingerprint_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn renamed_tag_changes_fingerprint() {
        let mut literals: Vec<&[u8]> = KeyTag::ALL.iter().map(|t| t.as_bytes()).collect();
        let original = fingerprint_of(&literals);
        literals[0] = b"LongBook-v2-";
        assert_ne!(original, fingerprint_of(&literals));
    }

    #[test]
    fn tag_boundaries_matter() {
        let a = fingerprint_of(&[b"ab".as_slice(), b"c".as_slice()]);
        let b = fingerprint_of(&[b"a".as_slice(), b"bc".as_slice()]);
        assert_ne!(a, b);
    }

    #[test]
    fn wrong_fingerprint_rejected() {
        assert!(!verify_layout_fingerprint(&[0xAB; 32]));
    }
}
