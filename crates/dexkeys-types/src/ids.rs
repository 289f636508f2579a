//! Identifiers that appear as components of store keys.
//!
//! Numeric IDs are plain `u64` counters. Their key encoding is fixed-width
//! big-endian so byte order equals numeric order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::U64_WIDTH;

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Per-contract order identifier, allocated from the `NextOrderID` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Fixed-width big-endian key encoding.
    #[must_use]
    pub fn to_key_bytes(self) -> [u8; U64_WIDTH] {
        self.0.to_be_bytes()
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// SettlementId
// ---------------------------------------------------------------------------

/// Sequence number of a settlement within one (account, order) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementId(pub u64);

impl SettlementId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Fixed-width big-endian key encoding.
    #[must_use]
    pub fn to_key_bytes(self) -> [u8; U64_WIDTH] {
        self.0.to_be_bytes()
    }
}

impl From<u64> for SettlementId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SettlementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "settlement:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TradingPair
// ---------------------------------------------------------------------------

/// An ordered (price denomination, asset denomination) pair.
///
/// Order is significant: `(A, B)` and `(B, A)` are different markets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TradingPair {
    pub price_denom: String,
    pub asset_denom: String,
}

impl TradingPair {
    #[must_use]
    pub fn new(price_denom: impl Into<String>, asset_denom: impl Into<String>) -> Self {
        Self {
            price_denom: price_denom.into(),
            asset_denom: asset_denom.into(),
        }
    }

    /// The same two denominations with their roles swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.asset_denom.clone(), self.price_denom.clone())
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.asset_denom, self.price_denom)
    }
}
