//! System-wide constants for the dexkeys key space.
//!
//! Every value here is part of the persisted state layout. Changing one is a
//! breaking migration of all stored state.

/// Module name of the exchange.
pub const MODULE_NAME: &str = "dex";

/// Primary (committed) store key.
pub const STORE_KEY: &str = MODULE_NAME;

/// Message route.
pub const ROUTER_KEY: &str = MODULE_NAME;

/// Query route.
pub const QUERIER_ROUTE: &str = MODULE_NAME;

/// Transient (in-memory, per processing unit) store key.
pub const MEM_STORE_KEY: &str = "mem_dex";

/// Maximum denomination length representable by the two-byte length prefix.
pub const MAX_DENOM_LEN: usize = u16::MAX as usize;

/// Maximum raw address length representable by the one-byte length prefix.
pub const MAX_ADDRESS_LEN: usize = u8::MAX as usize;

/// Width of the denomination length prefix, in bytes.
pub const DENOM_LEN_PREFIX_WIDTH: usize = 2;

/// Width of the address length prefix, in bytes.
pub const ADDRESS_LEN_PREFIX_WIDTH: usize = 1;

/// Width of a big-endian `u64` field, in bytes.
pub const U64_WIDTH: usize = 8;

/// Separator between the account and the order ID in settlement keys (`|`).
pub const SETTLEMENT_SEPARATOR: u8 = b'|';

/// Default bech32 human-readable part for account and contract addresses.
pub const DEFAULT_ACCOUNT_HRP: &str = "sei";
