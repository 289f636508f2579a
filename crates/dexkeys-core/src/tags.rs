//! Domain tag registry.
//!
//! Every key in the store starts with exactly one tag literal. The registry
//! is closed: all tags live in [`KeyTag::ALL`], and the table is checked for
//! pairwise prefix-freedom at compile time (see the `const` assertion below)
//! and again at runtime by [`KeyTag::verify_registry`].
//!
//! The literals are part of the persisted layout. Renaming one is a breaking
//! migration.

use std::fmt;

use dexkeys_types::{DexKeyError, Result, Side};

/// A logical namespace in the exchange key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum KeyTag {
    LongBook,
    ShortBook,
    Order,
    AccountActiveOrders,
    Cancel,
    Twap,
    Price,
    SettlementEntry,
    NextSettlementId,
    NextOrderId,
    RegisteredPair,
    AssetList,
    MatchResult,
    LongOrderCount,
    ShortOrderCount,
    MemOrder,
    MemDeposit,
    MemCancel,
}

impl KeyTag {
    /// Every tag in the registry, in layout order.
    pub const ALL: [KeyTag; 18] = [
        KeyTag::LongBook,
        KeyTag::ShortBook,
        KeyTag::Order,
        KeyTag::AccountActiveOrders,
        KeyTag::Cancel,
        KeyTag::Twap,
        KeyTag::Price,
        KeyTag::SettlementEntry,
        KeyTag::NextSettlementId,
        KeyTag::NextOrderId,
        KeyTag::RegisteredPair,
        KeyTag::AssetList,
        KeyTag::MatchResult,
        KeyTag::LongOrderCount,
        KeyTag::ShortOrderCount,
        KeyTag::MemOrder,
        KeyTag::MemDeposit,
        KeyTag::MemCancel,
    ];

    /// The literal bytes that lead every key in this namespace.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::LongBook => b"LongBook-value-",
            Self::ShortBook => b"ShortBook-value-",
            Self::Order => b"order",
            Self::AccountActiveOrders => b"account-active-orders",
            Self::Cancel => b"cancel",
            Self::Twap => b"TWAP-",
            Self::Price => b"Price-",
            Self::SettlementEntry => b"SettlementEntry-",
            Self::NextSettlementId => b"NextSettlementID-",
            Self::NextOrderId => b"noid",
            Self::RegisteredPair => b"rp",
            Self::AssetList => b"AssetList-",
            Self::MatchResult => b"MatchResult-",
            Self::LongOrderCount => b"loc-",
            Self::ShortOrderCount => b"soc-",
            Self::MemOrder => b"MemOrder-",
            Self::MemDeposit => b"MemDeposit-",
            Self::MemCancel => b"MemCancel-",
        }
    }

    /// Order book tag for a side.
    #[must_use]
    pub const fn book(side: Side) -> Self {
        match side {
            Side::Long => Self::LongBook,
            Side::Short => Self::ShortBook,
        }
    }

    /// Order count tag for a side.
    #[must_use]
    pub const fn order_count(side: Side) -> Self {
        match side {
            Side::Long => Self::LongOrderCount,
            Side::Short => Self::ShortOrderCount,
        }
    }

    /// Whether keys under this tag belong to the transient (mem) store.
    #[must_use]
    pub const fn is_ephemeral(self) -> bool {
        matches!(self, Self::MemOrder | Self::MemDeposit | Self::MemCancel)
    }

    /// The tag a key starts with, if any.
    ///
    /// At most one tag can match because the registry is prefix-free.
    #[must_use]
    pub fn classify(key: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| key.starts_with(tag.as_bytes()))
    }

    /// The remainder of `key` after this tag.
    pub fn strip(self, key: &[u8]) -> Result<&[u8]> {
        key.strip_prefix(self.as_bytes())
            .ok_or_else(|| DexKeyError::UnexpectedTag {
                expected: self.to_string(),
            })
    }

    /// Check the whole registry for duplicate or prefix-related literals.
    pub fn verify_registry() -> Result<()> {
        let entries: Vec<(String, &[u8])> = Self::ALL
            .iter()
            .map(|tag| (tag.to_string(), tag.as_bytes()))
            .collect();
        check_prefix_free(&entries)
    }
}

impl fmt::Display for KeyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

/// Check that no literal equals or is a byte-prefix of another.
///
/// `entries` pairs a display name with its literal bytes.
pub fn check_prefix_free<N: AsRef<str>>(entries: &[(N, &[u8])]) -> Result<()> {
    for (i, (name_a, a)) in entries.iter().enumerate() {
        for (name_b, b) in &entries[i + 1..] {
            if a == b {
                return Err(DexKeyError::DuplicateTag(name_a.as_ref().to_string()));
            }
            if b.starts_with(a) {
                return Err(DexKeyError::TagPrefixConflict {
                    shorter: name_a.as_ref().to_string(),
                    longer: name_b.as_ref().to_string(),
                });
            }
            if a.starts_with(b) {
                return Err(DexKeyError::TagPrefixConflict {
                    shorter: name_b.as_ref().to_string(),
                    longer: name_a.as_ref().to_string(),
                });
            }
        }
    }
    Ok(())
}

const fn starts_with(bytes: &[u8], prefix: &[u8]) -> bool {
    if prefix.len() > bytes.len() {
        return false;
    }
    let mut i = 0;
    while i < prefix.len() {
        if bytes[i] != prefix[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn registry_is_prefix_free(tags: &[KeyTag]) -> bool {
    let mut i = 0;
    while i < tags.len() {
        let mut j = 0;
        while j < tags.len() {
            if i != j && starts_with(tags[j].as_bytes(), tags[i].as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    registry_is_prefix_free(&KeyTag::ALL),
    "key tag registry is not prefix-free"
);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn registry_is_verified() {
        KeyTag::verify_registry().unwrap();
    }

    #[test]
    fn no_tag_is_prefix_of_another() {
        for a in KeyTag::ALL {
            for b in KeyTag::ALL {
                if a != b {
                    assert!(
                        !b.as_bytes().starts_with(a.as_bytes()),
                        "{a} is a prefix of {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn all_lists_every_variant_once() {
        let unique: HashSet<KeyTag> = KeyTag::ALL.into_iter().collect();
        assert_eq!(unique.len(), KeyTag::ALL.len());
    }

    #[test]
    fn sides_map_to_disjoint_tags() {
        assert_eq!(KeyTag::book(Side::Long), KeyTag::LongBook);
        assert_eq!(KeyTag::book(Side::Short), KeyTag::ShortBook);
        assert_eq!(KeyTag::order_count(Side::Long), KeyTag::LongOrderCount);
        assert_eq!(KeyTag::order_count(Side::Short), KeyTag::ShortOrderCount);
        assert_ne!(
            KeyTag::book(Side::Long).as_bytes(),
            KeyTag::book(Side::Short).as_bytes()
        );
    }

    #[test]
    fn literals_are_stable() {
        assert_eq!(KeyTag::LongBook.as_bytes(), b"LongBook-value-");
        assert_eq!(KeyTag::NextOrderId.as_bytes(), b"noid");
        assert_eq!(KeyTag::RegisteredPair.as_bytes(), b"rp");
        assert_eq!(KeyTag::MemCancel.as_bytes(), b"MemCancel-");
    }

    #[test]
    fn only_mem_tags_are_ephemeral() {
        let ephemeral: Vec<KeyTag> = KeyTag::ALL
            .into_iter()
            .filter(|t| t.is_ephemeral())
            .collect();
        assert_eq!(
            ephemeral,
            vec![KeyTag::MemOrder, KeyTag::MemDeposit, KeyTag::MemCancel]
        );
    }

    #[test]
    fn detects_prefix_conflict() {
        let entries: Vec<(&str, &[u8])> = vec![
            ("order", b"order".as_slice()),
            ("orders", b"orders".as_slice()),
        ];
        let err = check_prefix_free(&entries).unwrap_err();
        assert_eq!(
            err,
            DexKeyError::TagPrefixConflict {
                shorter: "order".into(),
                longer: "orders".into(),
            }
        );
    }

    #[test]
    fn detects_reverse_prefix_conflict() {
        let entries: Vec<(&str, &[u8])> =
            vec![("loc-x", b"loc-x".as_slice()), ("loc", b"loc".as_slice())];
        let err = check_prefix_free(&entries).unwrap_err();
        assert!(matches!(
            err,
            DexKeyError::TagPrefixConflict { ref shorter, .. } if shorter == "loc"
        ));
    }

    #[test]
    fn detects_duplicate() {
        let entries: Vec<(&str, &[u8])> = vec![("a", b"rp".as_slice()), ("b", b"rp".as_slice())];
        assert_eq!(
            check_prefix_free(&entries).unwrap_err(),
            DexKeyError::DuplicateTag("a".into())
        );
    }

    #[test]
    fn classify_finds_the_leading_tag() {
        for tag in KeyTag::ALL {
            let key = [tag.as_bytes(), b"\x14rest".as_slice()].concat();
            assert_eq!(KeyTag::classify(&key), Some(tag));
        }
        assert_eq!(KeyTag::classify(b"ord"), None);
        assert_eq!(KeyTag::classify(b""), None);
    }

    #[test]
    fn strip_checks_the_tag() {
        assert_eq!(KeyTag::Order.strip(b"order\x01\x02").unwrap(), b"\x01\x02");
        assert_eq!(KeyTag::RegisteredPair.strip(b"rp").unwrap(), b"");
        assert_eq!(
            KeyTag::Cancel.strip(b"order\x01"),
            Err(DexKeyError::UnexpectedTag {
                expected: "cancel".into(),
            })
        );
    }

    #[test]
    fn const_checker_agrees() {
        assert!(registry_is_prefix_free(&KeyTag::ALL));
        assert!(!registry_is_prefix_free(&[KeyTag::Order, KeyTag::Order]));
    }
}
