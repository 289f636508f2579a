//! Address canonicalization.
//!
//! Contract and account addresses arrive as bech32 text. Inside keys they are
//! stored as their raw bytes behind a one-byte length prefix:
//!
//! ```text
//! [len: u8][raw address bytes; len]
//! ```
//!
//! Malformed input is always an error. An address that fails to decode must
//! never be encoded as the zero-length address, or it would collide with it.

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use dexkeys_types::constants::{ADDRESS_LEN_PREFIX_WIDTH, MAX_ADDRESS_LEN};
use dexkeys_types::{AddressConfig, DexKeyError, Result};

use crate::encoding::split_field;

/// Decodes bech32 addresses for one chain prefix and length-prefixes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressCodec {
    config: AddressConfig,
}

impl AddressCodec {
    /// Create a codec from a validated config.
    ///
    /// The HRP must be one bech32 can encode under, so that every address
    /// this codec accepts can also be rendered back.
    pub fn new(config: AddressConfig) -> Result<Self> {
        config.validate()?;
        parse_hrp(&config.account_hrp)?;
        Ok(Self { config })
    }

    /// The expected human-readable part.
    #[must_use]
    pub fn hrp(&self) -> &str {
        &self.config.account_hrp
    }

    #[must_use]
    pub fn config(&self) -> &AddressConfig {
        &self.config
    }

    /// Decode bech32 text to raw address bytes.
    ///
    /// # Errors
    /// - [`DexKeyError::EmptyAddress`] for `""`
    /// - [`DexKeyError::MalformedAddress`] on charset, case, or checksum failure
    /// - [`DexKeyError::AddressPrefixMismatch`] if the HRP is not the configured one
    /// - [`DexKeyError::EmptyAddressBytes`] / [`DexKeyError::AddressTooLong`]
    ///   if the payload length is outside `1..=max_address_len`
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        if text.trim().is_empty() {
            return Err(DexKeyError::EmptyAddress);
        }

        let checked = CheckedHrpstring::new::<Bech32>(text).map_err(|e| {
            tracing::debug!(address = text, error = %e, "rejected malformed address");
            DexKeyError::MalformedAddress {
                address: text.to_string(),
                reason: e.to_string(),
            }
        })?;

        let hrp = checked.hrp();
        if !hrp.as_str().eq_ignore_ascii_case(&self.config.account_hrp) {
            return Err(DexKeyError::AddressPrefixMismatch {
                expected: self.config.account_hrp.clone(),
                actual: hrp.to_lowercase(),
            });
        }

        let raw: Vec<u8> = checked.byte_iter().collect();
        if raw.is_empty() {
            return Err(DexKeyError::EmptyAddressBytes);
        }
        if raw.len() > self.config.max_address_len {
            return Err(DexKeyError::AddressTooLong {
                len: raw.len(),
                max: self.config.max_address_len,
            });
        }
        Ok(raw)
    }

    /// Decode `text` and emit `[len:u8] ++ raw`.
    pub fn encode_address(&self, text: &str) -> Result<Vec<u8>> {
        let raw = self.decode(text)?;
        length_prefix(&raw)
    }

    /// Render raw address bytes as bech32 text under the configured HRP.
    pub fn to_bech32(&self, raw: &[u8]) -> Result<String> {
        let hrp = parse_hrp(&self.config.account_hrp)?;
        bech32::encode::<Bech32>(hrp, raw).map_err(|e| DexKeyError::Serialization(e.to_string()))
    }
}

fn parse_hrp(hrp: &str) -> Result<Hrp> {
    Hrp::parse(hrp)
        .map_err(|e| DexKeyError::Configuration(format!("account_hrp {hrp:?}: {e}")))
}

/// Prepend the one-byte length to raw address bytes.
pub fn length_prefix(raw: &[u8]) -> Result<Vec<u8>> {
    if raw.is_empty() {
        return Err(DexKeyError::EmptyAddressBytes);
    }
    let len = u8::try_from(raw.len()).map_err(|_| DexKeyError::AddressTooLong {
        len: raw.len(),
        max: MAX_ADDRESS_LEN,
    })?;
    Ok(crate::concat(&[len], raw))
}

/// Split a length-prefixed address off the front of `bytes`.
pub fn decode_length_prefixed(bytes: &[u8]) -> Result<(&[u8], &[u8])> {
    let (len, rest) = split_field(bytes, ADDRESS_LEN_PREFIX_WIDTH, "address length")?;
    split_field(rest, usize::from(len[0]), "address")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> AddressCodec {
        AddressCodec::default()
    }

    #[test]
    fn encodes_length_prefixed_raw_bytes() {
        let raw = [7u8; 32];
        let text = codec().to_bech32(&raw).unwrap();
        assert!(text.starts_with("sei1"));

        let encoded = codec().encode_address(&text).unwrap();
        assert_eq!(encoded[0], 32);
        assert_eq!(&encoded[1..], &raw);
    }

    #[test]
    fn uppercase_address_is_accepted() {
        let raw = [3u8; 20];
        let text = codec().to_bech32(&raw).unwrap().to_uppercase();
        assert_eq!(codec().decode(&text).unwrap(), raw);
    }

    #[test]
    fn empty_string_rejected() {
        assert_eq!(codec().encode_address(""), Err(DexKeyError::EmptyAddress));
        assert_eq!(codec().encode_address("   "), Err(DexKeyError::EmptyAddress));
    }

    #[test]
    fn malformed_address_rejected() {
        for bad in ["c1", "acct1", "not-an-address", "sei1qqqqqqqq"] {
            let err = codec().encode_address(bad).unwrap_err();
            assert!(
                matches!(err, DexKeyError::MalformedAddress { .. }),
                "{bad}: {err:?}"
            );
        }
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let mut text = codec().to_bech32(&[9u8; 20]).unwrap();
        let last = text.pop().unwrap();
        text.push(if last == 'q' { 'p' } else { 'q' });
        assert!(matches!(
            codec().decode(&text),
            Err(DexKeyError::MalformedAddress { .. })
        ));
    }

    #[test]
    fn wrong_hrp_rejected() {
        let other = AddressCodec::new(AddressConfig::with_hrp("cosmos")).unwrap();
        let text = other.to_bech32(&[1u8; 20]).unwrap();
        let err = codec().decode(&text).unwrap_err();
        assert_eq!(
            err,
            DexKeyError::AddressPrefixMismatch {
                expected: "sei".into(),
                actual: "cosmos".into(),
            }
        );
    }

    #[test]
    fn empty_payload_rejected() {
        let text = codec().to_bech32(&[]).unwrap();
        assert_eq!(codec().decode(&text), Err(DexKeyError::EmptyAddressBytes));
    }

    #[test]
    fn payload_above_bound_rejected() {
        let narrow = AddressCodec::new(AddressConfig {
            max_address_len: 20,
            ..AddressConfig::default()
        })
        .unwrap();
        let text = narrow.to_bech32(&[5u8; 32]).unwrap();
        assert_eq!(
            narrow.decode(&text),
            Err(DexKeyError::AddressTooLong { len: 32, max: 20 })
        );
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(AddressCodec::new(AddressConfig::with_hrp("")).is_err());
    }

    #[test]
    fn unencodable_hrp_rejected_up_front() {
        let too_long = "x".repeat(84);
        for hrp in ["se i", "sei\u{7f}", too_long.as_str()] {
            assert!(
                matches!(
                    AddressCodec::new(AddressConfig::with_hrp(hrp)),
                    Err(DexKeyError::Configuration(_))
                ),
                "{hrp:?} accepted"
            );
        }
        let codec = AddressCodec::new(AddressConfig::with_hrp("osmo")).unwrap();
        assert!(codec.to_bech32(&[1u8; 20]).is_ok());
    }

    #[test]
    fn length_prefix_bounds() {
        assert_eq!(length_prefix(&[]), Err(DexKeyError::EmptyAddressBytes));
        assert_eq!(length_prefix(&[0xAA; 255]).unwrap().len(), 256);
        assert!(matches!(
            length_prefix(&[0xAA; 256]),
            Err(DexKeyError::AddressTooLong { len: 256, .. })
        ));
    }

    #[test]
    fn decode_length_prefixed_splits_tail() {
        let (raw, rest) = decode_length_prefixed(&[2, 0xAB, 0xCD, 0x00, 0x04]).unwrap();
        assert_eq!(raw, &[0xAB, 0xCD]);
        assert_eq!(rest, &[0x00, 0x04]);
        assert!(decode_length_prefixed(&[3, 1]).is_err());
        assert!(decode_length_prefixed(&[]).is_err());
    }

    #[test]
    fn distinct_addresses_never_share_encoding() {
        let a = codec().encode_address(&codec().to_bech32(&[1u8; 20]).unwrap()).unwrap();
        let b = codec().encode_address(&codec().to_bech32(&[1u8; 21]).unwrap()).unwrap();
        assert_ne!(a, b);
        assert!(!b.starts_with(&a), "length prefix keeps addresses prefix-free");
    }
}
