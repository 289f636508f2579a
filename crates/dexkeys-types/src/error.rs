//! Error types for the dexkeys key space.
//!
//! All errors use the `DK_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Address errors
//! - 2xx: Field encoding errors
//! - 3xx: Tag registry errors
//! - 4xx: Key decoding errors
//! - 9xx: General / internal errors

use thiserror::Error;

/// Central error enum for every key construction and decoding operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DexKeyError {
    // =================================================================
    // Address Errors (1xx)
    // =================================================================
    /// The caller passed an empty address string.
    #[error("DK_ERR_100: Empty address string is not allowed")]
    EmptyAddress,

    /// The address text is not valid bech32 (charset, checksum, separator).
    #[error("DK_ERR_101: Malformed address {address:?}: {reason}")]
    MalformedAddress { address: String, reason: String },

    /// The address decoded, but under a different human-readable part.
    #[error("DK_ERR_102: Invalid address prefix: expected {expected}, got {actual}")]
    AddressPrefixMismatch { expected: String, actual: String },

    /// The address decoded to zero raw bytes.
    #[error("DK_ERR_103: Decoded address is empty")]
    EmptyAddressBytes,

    /// The raw address does not fit the one-byte length prefix.
    #[error("DK_ERR_104: Address length {len} exceeds maximum {max}")]
    AddressTooLong { len: usize, max: usize },

    // =================================================================
    // Field Encoding Errors (2xx)
    // =================================================================
    /// A denomination does not fit the two-byte length prefix.
    #[error("DK_ERR_200: Denomination length {len} exceeds maximum {max}")]
    DenomTooLong { len: usize, max: usize },

    /// An account contains the settlement separator byte.
    #[error("DK_ERR_201: Account {account:?} contains the settlement separator byte")]
    SeparatorInAccount { account: String },

    // =================================================================
    // Tag Registry Errors (3xx)
    // =================================================================
    /// One tag literal is a byte-prefix of another.
    #[error("DK_ERR_300: Tag {shorter} is a prefix of tag {longer}")]
    TagPrefixConflict { shorter: String, longer: String },

    /// Two tags share the same literal bytes.
    #[error("DK_ERR_301: Duplicate tag literal {0}")]
    DuplicateTag(String),

    // =================================================================
    // Key Decoding Errors (4xx)
    // =================================================================
    /// Fewer bytes remained than the field declares.
    #[error("DK_ERR_400: Truncated key: {field} needs {needed} bytes, {available} available")]
    TruncatedKey {
        field: &'static str,
        needed: usize,
        available: usize,
    },

    /// The key does not start with the expected tag.
    #[error("DK_ERR_401: Key does not start with tag {expected}")]
    UnexpectedTag { expected: String },

    /// The key is not a well-formed settlement key.
    #[error("DK_ERR_402: Malformed settlement key: {reason}")]
    MalformedSettlementKey { reason: String },

    /// A decoded text field is not valid UTF-8.
    #[error("DK_ERR_403: Field {field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (bad HRP, bad length bound, etc.).
    #[error("DK_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("DK_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, DexKeyError>;
