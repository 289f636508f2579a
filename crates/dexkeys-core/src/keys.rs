//! Composite key builders for every contract-scoped namespace.
//!
//! Grammar (tag literals abbreviated, `addr` = length-prefixed raw address,
//! `pair` = length-prefixed price denom ++ length-prefixed asset denom):
//!
//! ```text
//! order book     Tag(side)          | addr | pair   (caller appends price / order)
//! price          Tag(Price)         | addr | pair
//! order count    Tag(side-count)    | addr | pair   (full key)
//! next order id  Tag(NextOrderID)   | addr          (full key)
//! registered     Tag(RegisteredPair)| addr
//! order          Tag(Order)         | addr
//! match result   Tag(MatchResult)   | addr
//! asset list     Tag(AssetList)     | denom
//! mem order      Tag(MemOrder)      | addr [| pair]
//! mem cancel     Tag(MemCancel)     | addr [| pair]
//! mem deposit    Tag(MemDeposit)    | addr [| addr(creator) | denom]
//! ```
//!
//! Every pair-level prefix extends its contract-level prefix, so scanning a
//! contract-level prefix visits all pairs of that contract.

use dexkeys_types::{AddressConfig, Result, Side, TradingPair};

use crate::address::{AddressCodec, decode_length_prefixed};
use crate::concat::concat;
use crate::encoding::{decode_pair, encode_denom, encode_pair};
use crate::tags::KeyTag;

/// Builds store keys for one chain's address format.
///
/// All builders are pure: the same inputs always yield the same bytes, and
/// every call returns a fresh buffer owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct Keyspace {
    codec: AddressCodec,
}

impl Keyspace {
    /// Create a keyspace after checking the config and the tag registry.
    pub fn new(config: AddressConfig) -> Result<Self> {
        KeyTag::verify_registry()?;
        let codec = AddressCodec::new(config)?;
        tracing::debug!(hrp = codec.hrp(), tags = KeyTag::ALL.len(), "keyspace ready");
        Ok(Self { codec })
    }

    #[must_use]
    pub fn codec(&self) -> &AddressCodec {
        &self.codec
    }

    // =================================================================
    // Contract-level
    // =================================================================

    /// `addr` alone: the key of a registered contract.
    pub fn contract_key(&self, contract: &str) -> Result<Vec<u8>> {
        self.codec.encode_address(contract)
    }

    /// `Tag ++ addr` for any tag.
    ///
    /// Tags without a dedicated builder (`Cancel`, `AccountActiveOrders`,
    /// `Twap`, `SettlementEntry`, `NextSettlementId`) are scoped through here.
    pub fn contract_prefix(&self, tag: KeyTag, contract: &str) -> Result<Vec<u8>> {
        let addr = self.codec.encode_address(contract)?;
        Ok(concat(tag.as_bytes(), &addr))
    }

    pub fn order_book_contract_prefix(&self, side: Side, contract: &str) -> Result<Vec<u8>> {
        self.contract_prefix(KeyTag::book(side), contract)
    }

    pub fn price_contract_prefix(&self, contract: &str) -> Result<Vec<u8>> {
        self.contract_prefix(KeyTag::Price, contract)
    }

    pub fn registered_pair_prefix(&self, contract: &str) -> Result<Vec<u8>> {
        self.contract_prefix(KeyTag::RegisteredPair, contract)
    }

    pub fn order_prefix(&self, contract: &str) -> Result<Vec<u8>> {
        self.contract_prefix(KeyTag::Order, contract)
    }

    /// Full key of the contract's single order ID counter.
    pub fn next_order_id_prefix(&self, contract: &str) -> Result<Vec<u8>> {
        self.contract_prefix(KeyTag::NextOrderId, contract)
    }

    pub fn match_result_prefix(&self, contract: &str) -> Result<Vec<u8>> {
        self.contract_prefix(KeyTag::MatchResult, contract)
    }

    pub fn mem_order_prefix(&self, contract: &str) -> Result<Vec<u8>> {
        self.contract_prefix(KeyTag::MemOrder, contract)
    }

    pub fn mem_cancel_prefix(&self, contract: &str) -> Result<Vec<u8>> {
        self.contract_prefix(KeyTag::MemCancel, contract)
    }

    pub fn mem_deposit_prefix(&self, contract: &str) -> Result<Vec<u8>> {
        self.contract_prefix(KeyTag::MemDeposit, contract)
    }

    // =================================================================
    // Pair-level
    // =================================================================

    /// `Tag ++ addr ++ pair`.
    pub fn pair_prefix(
        &self,
        tag: KeyTag,
        contract: &str,
        price_denom: &str,
        asset_denom: &str,
    ) -> Result<Vec<u8>> {
        let base = self.contract_prefix(tag, contract)?;
        let pair = encode_pair(price_denom, asset_denom)?;
        Ok(concat(&base, &pair))
    }

    /// Prefix of one side of one pair's order book.
    pub fn order_book_prefix(
        &self,
        side: Side,
        contract: &str,
        price_denom: &str,
        asset_denom: &str,
    ) -> Result<Vec<u8>> {
        self.pair_prefix(KeyTag::book(side), contract, price_denom, asset_denom)
    }

    pub fn price_prefix(
        &self,
        contract: &str,
        price_denom: &str,
        asset_denom: &str,
    ) -> Result<Vec<u8>> {
        self.pair_prefix(KeyTag::Price, contract, price_denom, asset_denom)
    }

    /// Full key of one side's open order counter for a pair.
    pub fn order_count_prefix(
        &self,
        side: Side,
        contract: &str,
        price_denom: &str,
        asset_denom: &str,
    ) -> Result<Vec<u8>> {
        self.pair_prefix(KeyTag::order_count(side), contract, price_denom, asset_denom)
    }

    pub fn mem_order_prefix_for_pair(
        &self,
        contract: &str,
        price_denom: &str,
        asset_denom: &str,
    ) -> Result<Vec<u8>> {
        self.pair_prefix(KeyTag::MemOrder, contract, price_denom, asset_denom)
    }

    pub fn mem_cancel_prefix_for_pair(
        &self,
        contract: &str,
        price_denom: &str,
        asset_denom: &str,
    ) -> Result<Vec<u8>> {
        self.pair_prefix(KeyTag::MemCancel, contract, price_denom, asset_denom)
    }

    /// [`Self::order_book_prefix`] taking a [`TradingPair`].
    pub fn order_book_prefix_for(
        &self,
        side: Side,
        contract: &str,
        pair: &TradingPair,
    ) -> Result<Vec<u8>> {
        self.order_book_prefix(side, contract, &pair.price_denom, &pair.asset_denom)
    }

    /// `addr(creator) ++ denom`, the sub-key of a deposit under
    /// [`Self::mem_deposit_prefix`].
    ///
    /// The creator is decoded and length-prefixed like every other address,
    /// so no `(creator, denom)` pair can run into another.
    pub fn mem_deposit_subprefix(&self, creator: &str, denom: &str) -> Result<Vec<u8>> {
        let addr = self.codec.encode_address(creator)?;
        Ok(concat(&addr, &encode_denom(denom)?))
    }
}

/// `Tag(AssetList) ++ denom`.
pub fn asset_list_prefix(denom: &str) -> Result<Vec<u8>> {
    Ok(concat(KeyTag::AssetList.as_bytes(), &encode_denom(denom)?))
}

/// Split a `Tag ++ addr ++ pair` key into its raw address, its pair, and
/// whatever the caller appended after the pair.
pub fn split_pair_key(tag: KeyTag, key: &[u8]) -> Result<(&[u8], TradingPair, &[u8])> {
    let rest = tag.strip(key)?;
    let (raw, rest) = decode_length_prefixed(rest)?;
    let (pair, rest) = decode_pair(rest)?;
    Ok((raw, pair, rest))
}
