use std::fmt::Display;

use alloy_primitives::{Address, U256};

use super::{ChainSelector, format_deadline, paired};
use crate::{
    abi::{
        ADDRESS, ADDRESS_ARRAY, AbiValue, BOOL, Field, UINT64, UINT64_ARRAY, UINT256,
        UINT256_ARRAY, field,
    },
    error::CodecError,
};

/// Cross-chain trade intent, protocol V0.
///
/// Token and NFT legs come as companion arrays: `token_in[i]` is offered in
/// the amount `token_in_amount[i]` with destination `dest_selector_token_in[i]`,
/// and symmetrically for the requested "out" side. Empty arrays mean no legs
/// of that kind. Field order is part of the wire contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OfferV0 {
    /// ERC-20 contracts offered by the trader.
    pub token_in: Vec<Address>,
    /// Amount offered per `token_in` entry.
    pub token_in_amount: Vec<U256>,
    /// Destination chain selector per `token_in` entry.
    pub dest_selector_token_in: Vec<ChainSelector>,
    /// ERC-20 contracts requested in return.
    pub token_out: Vec<Address>,
    pub token_out_amount: Vec<U256>,
    pub dest_selector_token_out: Vec<ChainSelector>,
    /// NFT contracts offered, paired with `nft_in_id`.
    pub nft_in: Vec<Address>,
    pub nft_in_id: Vec<U256>,
    /// NFT contracts requested, paired with `nft_out_id`.
    pub nft_out: Vec<Address>,
    pub nft_out_id: Vec<U256>,
    /// Originator of the offer.
    pub trader_address: Address,
    /// Offer expiry as a unix timestamp, zero for no expiry.
    pub deadline: U256,
    /// Protocol fee amount.
    pub fee: U256,
    /// Recipient of the fee.
    pub fee_address: Address,
    /// Completion flag, false at creation and set only in an executed
    /// record.
    pub is_fulfill: bool,
}

impl OfferV0 {
    /// Wire field table, in declaration order.
    pub const SCHEMA: &'static [Field] = &[
        field("tokenIn", ADDRESS_ARRAY),
        field("tokenInAmount", UINT256_ARRAY),
        field("destSelectorTokenIn", UINT64_ARRAY),
        field("tokenOut", ADDRESS_ARRAY),
        field("tokenOutAmount", UINT256_ARRAY),
        field("destSelectorTokenOut", UINT64_ARRAY),
        field("nftIn", ADDRESS_ARRAY),
        field("nftInId", UINT256_ARRAY),
        field("nftOut", ADDRESS_ARRAY),
        field("nftOutId", UINT256_ARRAY),
        field("traderAddress", ADDRESS),
        field("deadLine", UINT256),
        field("fee", UINT256),
        field("feeAddress", ADDRESS),
        field("isFulfill", BOOL),
    ];

    /// Canonical tuple encoding of the record.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        crate::abi::encode_message(Self::SCHEMA, &self.to_values())
    }

    /// Decodes a canonical V0 offer encoding.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        Self::from_values(crate::abi::decode_message(Self::SCHEMA, data)?)
    }

    /// Checks that companion leg arrays agree in length.
    ///
    /// Encoding deliberately does not call this: the wire format admits
    /// mismatched legs and the receiving contract is the authority on
    /// rejecting them. Callers building offers should validate before
    /// submission.
    pub fn validate(&self) -> Result<(), CodecError> {
        paired("tokenIn", self.token_in.len(), "tokenInAmount", self.token_in_amount.len())?;
        paired(
            "tokenIn",
            self.token_in.len(),
            "destSelectorTokenIn",
            self.dest_selector_token_in.len(),
        )?;
        paired("tokenOut", self.token_out.len(), "tokenOutAmount", self.token_out_amount.len())?;
        paired(
            "tokenOut",
            self.token_out.len(),
            "destSelectorTokenOut",
            self.dest_selector_token_out.len(),
        )?;
        paired("nftIn", self.nft_in.len(), "nftInId", self.nft_in_id.len())?;
        paired("nftOut", self.nft_out.len(), "nftOutId", self.nft_out_id.len())?;
        Ok(())
    }

    pub(crate) fn to_values(&self) -> Vec<AbiValue> {
        vec![
            self.token_in.as_slice().into(),
            self.token_in_amount.as_slice().into(),
            self.dest_selector_token_in.as_slice().into(),
            self.token_out.as_slice().into(),
            self.token_out_amount.as_slice().into(),
            self.dest_selector_token_out.as_slice().into(),
            self.nft_in.as_slice().into(),
            self.nft_in_id.as_slice().into(),
            self.nft_out.as_slice().into(),
            self.nft_out_id.as_slice().into(),
            self.trader_address.into(),
            self.deadline.into(),
            self.fee.into(),
            self.fee_address.into(),
            self.is_fulfill.into(),
        ]
    }

    pub(crate) fn from_values(values: Vec<AbiValue>) -> Result<Self, CodecError> {
        let [
            token_in,
            token_in_amount,
            dest_selector_token_in,
            token_out,
            token_out_amount,
            dest_selector_token_out,
            nft_in,
            nft_in_id,
            nft_out,
            nft_out_id,
            trader_address,
            deadline,
            fee,
            fee_address,
            is_fulfill,
        ] = <[AbiValue; 15]>::try_from(values)
            .map_err(|v| CodecError::ArityMismatch { expected: 15, found: v.len() })?;
        Ok(Self {
            token_in: token_in.into_address_array()?,
            token_in_amount: token_in_amount.into_uint_array()?,
            dest_selector_token_in: dest_selector_token_in.into_u64_array()?,
            token_out: token_out.into_address_array()?,
            token_out_amount: token_out_amount.into_uint_array()?,
            dest_selector_token_out: dest_selector_token_out.into_u64_array()?,
            nft_in: nft_in.into_address_array()?,
            nft_in_id: nft_in_id.into_uint_array()?,
            nft_out: nft_out.into_address_array()?,
            nft_out_id: nft_out_id.into_uint_array()?,
            trader_address: trader_address.into_address()?,
            deadline: deadline.into_uint()?,
            fee: fee.into_uint()?,
            fee_address: fee_address.into_address()?,
            is_fulfill: is_fulfill.into_bool()?,
        })
    }
}

impl Display for OfferV0 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[offer V0: {} token / {} nft in, {} token / {} nft out, trader {}, fee {}, {}]",
            self.token_in.len(),
            self.nft_in.len(),
            self.token_out.len(),
            self.nft_out.len(),
            self.trader_address,
            self.fee,
            format_deadline(self.deadline),
        )
    }
}

/// Cross-chain trade intent, protocol V1.
///
/// Not wire-compatible with [`OfferV0`]: the tuple is reordered, the
/// destination selector is a single scalar for the whole offer, the owner
/// and trader addresses are split, and `isSuccess` replaces `isFulfill` as
/// the completion flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OfferV1 {
    pub token_in: Vec<Address>,
    pub token_in_amount: Vec<U256>,
    pub nft_in: Vec<Address>,
    pub nft_in_id: Vec<U256>,
    /// Target chain selector for the whole offer.
    pub dest_selector_out: ChainSelector,
    pub token_out: Vec<Address>,
    pub token_out_amount: Vec<U256>,
    pub nft_out: Vec<Address>,
    pub nft_out_id: Vec<U256>,
    /// Account that owns the escrowed assets.
    pub owner_offer_address: Address,
    /// Account that posted the offer.
    pub trader_offer_address: Address,
    pub deadline: U256,
    pub fee: U256,
    pub fee_address: Address,
    pub is_success: bool,
}

impl OfferV1 {
    pub const SCHEMA: &'static [Field] = &[
        field("tokenIn", ADDRESS_ARRAY),
        field("tokenInAmount", UINT256_ARRAY),
        field("nftIn", ADDRESS_ARRAY),
        field("nftInId", UINT256_ARRAY),
        field("destSelectorOut", UINT64),
        field("tokenOut", ADDRESS_ARRAY),
        field("tokenOutAmount", UINT256_ARRAY),
        field("nftOut", ADDRESS_ARRAY),
        field("nftOutId", UINT256_ARRAY),
        field("ownerOfferAddress", ADDRESS),
        field("traderOfferAddress", ADDRESS),
        field("deadLine", UINT256),
        field("fee", UINT256),
        field("feeAddress", ADDRESS),
        field("isSuccess", BOOL),
    ];

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        crate::abi::encode_message(Self::SCHEMA, &self.to_values())
    }

    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        Self::from_values(crate::abi::decode_message(Self::SCHEMA, data)?)
    }

    /// See [`OfferV0::validate`].
    pub fn validate(&self) -> Result<(), CodecError> {
        paired("tokenIn", self.token_in.len(), "tokenInAmount", self.token_in_amount.len())?;
        paired("nftIn", self.nft_in.len(), "nftInId", self.nft_in_id.len())?;
        paired("tokenOut", self.token_out.len(), "tokenOutAmount", self.token_out_amount.len())?;
        paired("nftOut", self.nft_out.len(), "nftOutId", self.nft_out_id.len())?;
        Ok(())
    }

    pub(crate) fn to_values(&self) -> Vec<AbiValue> {
        vec![
            self.token_in.as_slice().into(),
            self.token_in_amount.as_slice().into(),
            self.nft_in.as_slice().into(),
            self.nft_in_id.as_slice().into(),
            self.dest_selector_out.into(),
            self.token_out.as_slice().into(),
            self.token_out_amount.as_slice().into(),
            self.nft_out.as_slice().into(),
            self.nft_out_id.as_slice().into(),
            self.owner_offer_address.into(),
            self.trader_offer_address.into(),
            self.deadline.into(),
            self.fee.into(),
            self.fee_address.into(),
            self.is_success.into(),
        ]
    }

    pub(crate) fn from_values(values: Vec<AbiValue>) -> Result<Self, CodecError> {
        let [
            token_in,
            token_in_amount,
            nft_in,
            nft_in_id,
            dest_selector_out,
            token_out,
            token_out_amount,
            nft_out,
            nft_out_id,
            owner_offer_address,
            trader_offer_address,
            deadline,
            fee,
            fee_address,
            is_success,
        ] = <[AbiValue; 15]>::try_from(values)
            .map_err(|v| CodecError::ArityMismatch { expected: 15, found: v.len() })?;
        Ok(Self {
            token_in: token_in.into_address_array()?,
            token_in_amount: token_in_amount.into_uint_array()?,
            nft_in: nft_in.into_address_array()?,
            nft_in_id: nft_in_id.into_uint_array()?,
            dest_selector_out: dest_selector_out.into_u64()?,
            token_out: token_out.into_address_array()?,
            token_out_amount: token_out_amount.into_uint_array()?,
            nft_out: nft_out.into_address_array()?,
            nft_out_id: nft_out_id.into_uint_array()?,
            owner_offer_address: owner_offer_address.into_address()?,
            trader_offer_address: trader_offer_address.into_address()?,
            deadline: deadline.into_uint()?,
            fee: fee.into_uint()?,
            fee_address: fee_address.into_address()?,
            is_success: is_success.into_bool()?,
        })
    }
}

impl Display for OfferV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[offer V1 -> chain {}: {} token / {} nft in, {} token / {} nft out, owner {}, fee {}, {}]",
            self.dest_selector_out,
            self.token_in.len(),
            self.nft_in.len(),
            self.token_out.len(),
            self.nft_out.len(),
            self.owner_offer_address,
            self.fee,
            format_deadline(self.deadline),
        )
    }
}
