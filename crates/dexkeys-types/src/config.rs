//! Address configuration for the key space.

use serde::{Deserialize, Serialize};

use crate::{DexKeyError, Result, constants};

/// How account and contract addresses are decoded before entering a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    /// Expected bech32 human-readable part (e.g., "sei").
    pub account_hrp: String,
    /// Maximum raw address length accepted. Never above 255.
    pub max_address_len: usize,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            account_hrp: constants::DEFAULT_ACCOUNT_HRP.to_string(),
            max_address_len: constants::MAX_ADDRESS_LEN,
        }
    }
}

impl AddressConfig {
    /// Config for a chain using a different human-readable part.
    #[must_use]
    pub fn with_hrp(hrp: impl Into<String>) -> Self {
        Self {
            account_hrp: hrp.into(),
            ..Self::default()
        }
    }

    /// Check the config is usable.
    pub fn validate(&self) -> Result<()> {
        if self.account_hrp.is_empty() {
            return Err(DexKeyError::Configuration(
                "account_hrp must not be empty".into(),
            ));
        }
        if !self.account_hrp.is_ascii() {
            return Err(DexKeyError::Configuration(format!(
                "account_hrp {:?} must be ASCII",
                self.account_hrp
            )));
        }
        if self.max_address_len == 0 || self.max_address_len > constants::MAX_ADDRESS_LEN {
            return Err(DexKeyError::Configuration(format!(
                "max_address_len must be in 1..={}, got {}",
                constants::MAX_ADDRESS_LEN,
                self.max_address_len
            )));
        }
        Ok(())
    }

    /// Parse a JSON config document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| DexKeyError::Serialization(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
