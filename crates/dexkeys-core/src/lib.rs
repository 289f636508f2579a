//! # dexkeys-core
//!
//! **The key space of the exchange state.**
//!
//! Every order book, order, price, counter, settlement, and staged (mem)
//! entry is addressed by a byte key built here. The encoding is:
//!
//! - **Prefix-free across domains**: each namespace starts with a distinct
//!   tag literal from the verified [`KeyTag`] registry
//! - **Unambiguous within a domain**: denominations and addresses carry an
//!   explicit length prefix
//! - **Order-preserving**: IDs are fixed-width big-endian, so byte order is
//!   numeric order and range scans come out sorted
//! - **Pure**: no builder mutates its inputs; every key is a fresh buffer
//!
//! ```text
//! Keyspace::order_book_prefix(Long, contract, "usei", "uatom")
//!   = "LongBook-value-" | len:u8 addr | 0x0004 "usei" | 0x0005 "uatom"
//! ```

pub mod address;
pub mod concat;
pub mod encoding;
pub mod fingerprint;
pub mod keys;
pub mod settlement;
pub mod tags;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fixtures;

pub use address::{AddressCodec, decode_length_prefixed, length_prefix};
pub use concat::{concat, concat_all};
pub use encoding::{
    decode_denom, decode_pair, decode_u64_be, encode_denom, encode_pair, encode_trading_pair,
    encode_u64_be,
};
pub use fingerprint::{layout_fingerprint, layout_fingerprint_hex, verify_layout_fingerprint};
pub use keys::{Keyspace, asset_list_prefix, split_pair_key};
pub use settlement::{
    SettlementKeyParts, parse_settlement_key, settlement_account_prefix, settlement_key,
    settlement_order_id_prefix,
};
pub use tags::{KeyTag, check_prefix_free};
