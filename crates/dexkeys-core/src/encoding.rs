//! Length-prefixed and fixed-width scalar encoders.
//!
//! - Denominations: 2-byte big-endian length, then the raw bytes.
//! - `u64` IDs: 8-byte big-endian, so byte order equals numeric order.
//! - Pairs: price denomination then asset denomination. Not commutative.
//!
//! The decoders are the inverses, used when walking keys returned by a
//! prefix scan. Each returns the decoded value and the unconsumed tail.

use dexkeys_types::constants::{DENOM_LEN_PREFIX_WIDTH, MAX_DENOM_LEN, U64_WIDTH};
use dexkeys_types::{DexKeyError, Result, TradingPair};

/// Encode a denomination as `len:u16be ++ bytes`.
///
/// # Errors
/// Returns [`DexKeyError::DenomTooLong`] if `denom` is longer than 65535
/// bytes. The length is never truncated.
pub fn encode_denom(denom: &str) -> Result<Vec<u8>> {
    let len = u16::try_from(denom.len()).map_err(|_| DexKeyError::DenomTooLong {
        len: denom.len(),
        max: MAX_DENOM_LEN,
    })?;
    let mut out = Vec::with_capacity(DENOM_LEN_PREFIX_WIDTH + denom.len());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(denom.as_bytes());
    Ok(out)
}

/// Encode a `u64` as 8 big-endian bytes.
#[must_use]
pub const fn encode_u64_be(n: u64) -> [u8; U64_WIDTH] {
    n.to_be_bytes()
}

/// Encode an ordered (price, asset) denomination pair.
pub fn encode_pair(price_denom: &str, asset_denom: &str) -> Result<Vec<u8>> {
    let price = encode_denom(price_denom)?;
    let asset = encode_denom(asset_denom)?;
    Ok(crate::concat(&price, &asset))
}

/// [`encode_pair`] for a [`TradingPair`].
pub fn encode_trading_pair(pair: &TradingPair) -> Result<Vec<u8>> {
    encode_pair(&pair.price_denom, &pair.asset_denom)
}

/// Decode a length-prefixed denomination from the front of `bytes`.
pub fn decode_denom(bytes: &[u8]) -> Result<(&str, &[u8])> {
    let (len_bytes, rest) = split_field(bytes, DENOM_LEN_PREFIX_WIDTH, "denom length")?;
    let len = usize::from(u16::from_be_bytes([len_bytes[0], len_bytes[1]]));
    let (raw, rest) = split_field(rest, len, "denom")?;
    let denom = std::str::from_utf8(raw).map_err(|_| DexKeyError::InvalidUtf8 { field: "denom" })?;
    Ok((denom, rest))
}

/// Decode a big-endian `u64` from the front of `bytes`.
pub fn decode_u64_be(bytes: &[u8]) -> Result<(u64, &[u8])> {
    let (raw, rest) = split_field(bytes, U64_WIDTH, "u64")?;
    let mut buf = [0u8; U64_WIDTH];
    buf.copy_from_slice(raw);
    Ok((u64::from_be_bytes(buf), rest))
}

/// Decode an encoded pair from the front of `bytes`.
pub fn decode_pair(bytes: &[u8]) -> Result<(TradingPair, &[u8])> {
    let (price, rest) = decode_denom(bytes)?;
    let (asset, rest) = decode_denom(rest)?;
    Ok((TradingPair::new(price, asset), rest))
}

pub(crate) fn split_field<'a>(
    bytes: &'a [u8],
    len: usize,
    field: &'static str,
) -> Result<(&'a [u8], &'a [u8])> {
    if bytes.len() < len {
        return Err(DexKeyError::TruncatedKey {
            field,
            needed: len,
            available: bytes.len(),
        });
    }
    Ok(bytes.split_at(len))
}
