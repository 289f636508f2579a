//! Deterministic bech32 addresses for tests.

use crate::address::AddressCodec;

/// A 32-byte contract address under the default HRP, filled with `seed`.
#[must_use]
pub fn contract_address(seed: u8) -> String {
    AddressCodec::default()
        .to_bech32(&[seed; 32])
        .expect("default HRP encodes")
}

/// A 20-byte account address under the default HRP, filled with `seed`.
#[must_use]
pub fn account_address(seed: u8) -> String {
    AddressCodec::default()
        .to_bech32(&[seed; 20])
        .expect("default HRP encodes")
}
