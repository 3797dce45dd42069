use std::fmt::Display;

use alloy_primitives::{Address, U256};

use super::{ChainSelector, paired};
use crate::{
    abi::{
        ADDRESS, ADDRESS_ARRAY, AbiValue, BOOL, Field, UINT64, UINT64_ARRAY, UINT256,
        UINT256_ARRAY, field,
    },
    error::CodecError,
};

/// Acceptance of a previously posted offer, protocol V0.
///
/// The token/NFT arrays mirror the "in" side of the offer being fulfilled;
/// `offer_id` names the offer on the destination chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FulfillV0 {
    /// Identifier of the offer being fulfilled.
    pub offer_id: U256,
    /// Chain selector of the chain the offer lives on.
    pub dest_chain_selector: ChainSelector,
    /// Executing contract on that chain.
    pub dest_chain_address: Address,
    pub token_in: Vec<Address>,
    pub token_in_amount: Vec<U256>,
    pub dest_selector_token_in: Vec<ChainSelector>,
    pub nft_in: Vec<Address>,
    pub nft_in_id: Vec<U256>,
    pub trader_address: Address,
    pub fee_address: Address,
}

impl FulfillV0 {
    /// Wire field table, in declaration order.
    pub const SCHEMA: &'static [Field] = &[
        field("offerId", UINT256),
        field("destChainSelector", UINT64),
        field("destChainAddress", ADDRESS),
        field("tokenIn", ADDRESS_ARRAY),
        field("tokenInAmount", UINT256_ARRAY),
        field("destSelectorTokenIn", UINT64_ARRAY),
        field("nftIn", ADDRESS_ARRAY),
        field("nftInId", UINT256_ARRAY),
        field("traderAddress", ADDRESS),
        field("feeAddress", ADDRESS),
    ];

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        crate::abi::encode_message(Self::SCHEMA, &self.to_values())
    }

    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        Self::from_values(crate::abi::decode_message(Self::SCHEMA, data)?)
    }

    /// See [`super::OfferV0::validate`].
    pub fn validate(&self) -> Result<(), CodecError> {
        paired("tokenIn", self.token_in.len(), "tokenInAmount", self.token_in_amount.len())?;
        paired(
            "tokenIn",
            self.token_in.len(),
            "destSelectorTokenIn",
            self.dest_selector_token_in.len(),
        )?;
        paired("nftIn", self.nft_in.len(), "nftInId", self.nft_in_id.len())?;
        Ok(())
    }

    pub(crate) fn to_values(&self) -> Vec<AbiValue> {
        vec![
            self.offer_id.into(),
            self.dest_chain_selector.into(),
            self.dest_chain_address.into(),
            self.token_in.as_slice().into(),
            self.token_in_amount.as_slice().into(),
            self.dest_selector_token_in.as_slice().into(),
            self.nft_in.as_slice().into(),
            self.nft_in_id.as_slice().into(),
            self.trader_address.into(),
            self.fee_address.into(),
        ]
    }

    pub(crate) fn from_values(values: Vec<AbiValue>) -> Result<Self, CodecError> {
        let [
            offer_id,
            dest_chain_selector,
            dest_chain_address,
            token_in,
            token_in_amount,
            dest_selector_token_in,
            nft_in,
            nft_in_id,
            trader_address,
            fee_address,
        ] = <[AbiValue; 10]>::try_from(values)
            .map_err(|v| CodecError::ArityMismatch { expected: 10, found: v.len() })?;
        Ok(Self {
            offer_id: offer_id.into_uint()?,
            dest_chain_selector: dest_chain_selector.into_u64()?,
            dest_chain_address: dest_chain_address.into_address()?,
            token_in: token_in.into_address_array()?,
            token_in_amount: token_in_amount.into_uint_array()?,
            dest_selector_token_in: dest_selector_token_in.into_u64_array()?,
            nft_in: nft_in.into_address_array()?,
            nft_in_id: nft_in_id.into_uint_array()?,
            trader_address: trader_address.into_address()?,
            fee_address: fee_address.into_address()?,
        })
    }
}

impl Display for FulfillV0 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[fulfill V0 offer #{} -> chain {} at {}, {} token / {} nft legs, trader {}]",
            self.offer_id,
            self.dest_chain_selector,
            self.dest_chain_address,
            self.token_in.len(),
            self.nft_in.len(),
            self.trader_address,
        )
    }
}

/// Acceptance of a previously posted offer, protocol V1.
///
/// Not wire-compatible with [`FulfillV0`]: per-token destination selectors
/// are gone, the trader address is split into owner/trader pairs and two
/// flags are appended, `isBridge` signaling cross-chain asset movement and
/// `isSuccess` the execution outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FulfillV1 {
    pub offer_id: U256,
    pub dest_chain_selector: ChainSelector,
    pub dest_chain_address: Address,
    pub token_in: Vec<Address>,
    pub token_in_amount: Vec<U256>,
    pub nft_in: Vec<Address>,
    pub nft_in_id: Vec<U256>,
    pub fee_address: Address,
    /// Account that owns the assets used to fulfill.
    pub owner_fulfill_address: Address,
    /// Account executing the fulfillment.
    pub trader_fulfill_address: Address,
    /// Whether fulfillment moves assets across chains.
    pub is_bridge: bool,
    /// Execution outcome, false until the destination contract completes.
    pub is_success: bool,
}

impl FulfillV1 {
    pub const SCHEMA: &'static [Field] = &[
        field("offerId", UINT256),
        field("destChainSelector", UINT64),
        field("destChainAddress", ADDRESS),
        field("tokenIn", ADDRESS_ARRAY),
        field("tokenInAmount", UINT256_ARRAY),
        field("nftIn", ADDRESS_ARRAY),
        field("nftInId", UINT256_ARRAY),
        field("feeAddress", ADDRESS),
        field("ownerFulfillAddress", ADDRESS),
        field("traderFulfillAddress", ADDRESS),
        field("isBridge", BOOL),
        field("isSuccess", BOOL),
    ];

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        crate::abi::encode_message(Self::SCHEMA, &self.to_values())
    }

    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        Self::from_values(crate::abi::decode_message(Self::SCHEMA, data)?)
    }

    /// See [`super::OfferV0::validate`].
    pub fn validate(&self) -> Result<(), CodecError> {
        paired("tokenIn", self.token_in.len(), "tokenInAmount", self.token_in_amount.len())?;
        paired("nftIn", self.nft_in.len(), "nftInId", self.nft_in_id.len())?;
        Ok(())
    }

    pub(crate) fn to_values(&self) -> Vec<AbiValue> {
        vec![
            self.offer_id.into(),
            self.dest_chain_selector.into(),
            self.dest_chain_address.into(),
            self.token_in.as_slice().into(),
            self.token_in_amount.as_slice().into(),
            self.nft_in.as_slice().into(),
            self.nft_in_id.as_slice().into(),
            self.fee_address.into(),
            self.owner_fulfill_address.into(),
            self.trader_fulfill_address.into(),
            self.is_bridge.into(),
            self.is_success.into(),
        ]
    }

    pub(crate) fn from_values(values: Vec<AbiValue>) -> Result<Self, CodecError> {
        let [
            offer_id,
            dest_chain_selector,
            dest_chain_address,
            token_in,
            token_in_amount,
            nft_in,
            nft_in_id,
            fee_address,
            owner_fulfill_address,
            trader_fulfill_address,
            is_bridge,
            is_success,
        ] = <[AbiValue; 12]>::try_from(values)
            .map_err(|v| CodecError::ArityMismatch { expected: 12, found: v.len() })?;
        Ok(Self {
            offer_id: offer_id.into_uint()?,
            dest_chain_selector: dest_chain_selector.into_u64()?,
            dest_chain_address: dest_chain_address.into_address()?,
            token_in: token_in.into_address_array()?,
            token_in_amount: token_in_amount.into_uint_array()?,
            nft_in: nft_in.into_address_array()?,
            nft_in_id: nft_in_id.into_uint_array()?,
            fee_address: fee_address.into_address()?,
            owner_fulfill_address: owner_fulfill_address.into_address()?,
            trader_fulfill_address: trader_fulfill_address.into_address()?,
            is_bridge: is_bridge.into_bool()?,
            is_success: is_success.into_bool()?,
        })
    }
}

impl Display for FulfillV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[fulfill V1 offer #{} -> chain {} at {}, {} token / {} nft legs, owner {}{}]",
            self.offer_id,
            self.dest_chain_selector,
            self.dest_chain_address,
            self.token_in.len(),
            self.nft_in.len(),
            self.owner_fulfill_address,
            if self.is_bridge { ", bridged" } else { "" },
        )
    }
}
