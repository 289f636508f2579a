//! Settlement keys.
//!
//! ```text
//! account bytes | 0x7C ('|') | order_id: u64be | settlement_id: u64be
//! ```
//!
//! The account is NOT length-prefixed. Byte order of these keys is account
//! first, then order ID, then settlement ID, so one account's settlements (or
//! one (account, order) pair's settlements) form a single prefix range.
//!
//! That ordering only holds if the separator never occurs inside an account,
//! so accounts containing `|` are rejected. Bech32 text never contains it.

use dexkeys_types::constants::{SETTLEMENT_SEPARATOR, U64_WIDTH};
use dexkeys_types::{DexKeyError, OrderId, Result, SettlementId};

use crate::concat::concat;
use crate::encoding::encode_u64_be;

/// Decoded components of a settlement key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementKeyParts {
    pub account: String,
    pub order_id: OrderId,
    pub settlement_id: SettlementId,
}

fn checked_account(account: &str) -> Result<&[u8]> {
    let bytes = account.as_bytes();
    if bytes.contains(&SETTLEMENT_SEPARATOR) {
        return Err(DexKeyError::SeparatorInAccount {
            account: account.to_string(),
        });
    }
    Ok(bytes)
}

/// `account ++ '|'`: the range of every settlement of one account.
pub fn settlement_account_prefix(account: &str) -> Result<Vec<u8>> {
    Ok(concat(checked_account(account)?, &[SETTLEMENT_SEPARATOR]))
}

/// `account ++ '|' ++ order_id`: the range of one order's settlements.
pub fn settlement_order_id_prefix(order_id: OrderId, account: &str) -> Result<Vec<u8>> {
    let base = settlement_account_prefix(account)?;
    Ok(concat(&base, &encode_u64_be(order_id.0)))
}

/// Full key of one settlement entry.
pub fn settlement_key(
    order_id: OrderId,
    account: &str,
    settlement_id: SettlementId,
) -> Result<Vec<u8>> {
    let base = settlement_order_id_prefix(order_id, account)?;
    Ok(concat(&base, &encode_u64_be(settlement_id.0)))
}

/// Split a full settlement key into its components.
pub fn parse_settlement_key(key: &[u8]) -> Result<SettlementKeyParts> {
    let ids_len = 2 * U64_WIDTH;
    // account | sep | ids
    if key.len() < ids_len + 1 {
        return Err(DexKeyError::MalformedSettlementKey {
            reason: format!("key is {} bytes, need at least {}", key.len(), ids_len + 1),
        });
    }
    let (head, ids) = key.split_at(key.len() - ids_len);
    let Some((&sep, account)) = head.split_last() else {
        return Err(DexKeyError::MalformedSettlementKey {
            reason: "missing separator".into(),
        });
    };
    if sep != SETTLEMENT_SEPARATOR {
        return Err(DexKeyError::MalformedSettlementKey {
            reason: format!("expected separator 0x7c, found {sep:#04x}"),
        });
    }
    if account.contains(&SETTLEMENT_SEPARATOR) {
        return Err(DexKeyError::MalformedSettlementKey {
            reason: "account contains separator".into(),
        });
    }
    let account = std::str::from_utf8(account)
        .map_err(|_| DexKeyError::InvalidUtf8 { field: "account" })?;

    let (order_raw, settlement_raw) = ids.split_at(U64_WIDTH);
    let mut buf = [0u8; U64_WIDTH];
    buf.copy_from_slice(order_raw);
    let order_id = OrderId(u64::from_be_bytes(buf));
    buf.copy_from_slice(settlement_raw);
    let settlement_id = SettlementId(u64::from_be_bytes(buf));

    Ok(SettlementKeyParts {
        account: account.to_string(),
        order_id,
        settlement_id,
    })
}
