mod fulfill;
mod offer;

use std::fmt::Display;

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
pub use fulfill::{FulfillV0, FulfillV1};
pub use offer::{OfferV0, OfferV1};

use crate::{
    abi::{self, Field},
    error::CodecError,
};

/// Unsigned 64-bit identifier of a destination chain in the cross-chain
/// messaging scheme.
pub type ChainSelector = u64;

/// Wire-format generation of a trade message.
///
/// V0 and V1 are not wire-compatible: V1 reorders the tuple, collapses the
/// per-token destination selectors into a single scalar and splits the
/// trader address into owner/trader pairs. A record built for one version
/// must never be decoded as the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProtocolVersion {
    #[display("V0")]
    V0,
    #[display("V1")]
    V1,
}

/// Which of the two tuple schemas a message uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MessageKind {
    #[display("offer")]
    Offer,
    #[display("fulfill")]
    Fulfill,
}

/// A trade message record of any schema and version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TradeMessage {
    OfferV0(OfferV0),
    OfferV1(OfferV1),
    FulfillV0(FulfillV0),
    FulfillV1(FulfillV1),
}

impl TradeMessage {
    /// Intrinsic protocol version of the record.
    pub fn version(&self) -> ProtocolVersion {
        match self {
            TradeMessage::OfferV0(_) | TradeMessage::FulfillV0(_) => ProtocolVersion::V0,
            TradeMessage::OfferV1(_) | TradeMessage::FulfillV1(_) => ProtocolVersion::V1,
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            TradeMessage::OfferV0(_) | TradeMessage::OfferV1(_) => MessageKind::Offer,
            TradeMessage::FulfillV0(_) | TradeMessage::FulfillV1(_) => MessageKind::Fulfill,
        }
    }

    /// Declarative field table driving the generic tuple engine.
    pub fn schema(&self) -> &'static [Field] {
        match self {
            TradeMessage::OfferV0(_) => OfferV0::SCHEMA,
            TradeMessage::OfferV1(_) => OfferV1::SCHEMA,
            TradeMessage::FulfillV0(_) => FulfillV0::SCHEMA,
            TradeMessage::FulfillV1(_) => FulfillV1::SCHEMA,
        }
    }

    /// Checks the record's paired leg arrays, see the per-record `validate`.
    pub fn validate(&self) -> Result<(), CodecError> {
        match self {
            TradeMessage::OfferV0(m) => m.validate(),
            TradeMessage::OfferV1(m) => m.validate(),
            TradeMessage::FulfillV0(m) => m.validate(),
            TradeMessage::FulfillV1(m) => m.validate(),
        }
    }

    pub(crate) fn to_values(&self) -> Vec<abi::AbiValue> {
        match self {
            TradeMessage::OfferV0(m) => m.to_values(),
            TradeMessage::OfferV1(m) => m.to_values(),
            TradeMessage::FulfillV0(m) => m.to_values(),
            TradeMessage::FulfillV1(m) => m.to_values(),
        }
    }
}

impl Display for TradeMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeMessage::OfferV0(m) => m.fmt(f),
            TradeMessage::OfferV1(m) => m.fmt(f),
            TradeMessage::FulfillV0(m) => m.fmt(f),
            TradeMessage::FulfillV1(m) => m.fmt(f),
        }
    }
}

impl From<OfferV0> for TradeMessage {
    fn from(value: OfferV0) -> Self { TradeMessage::OfferV0(value) }
}

impl From<OfferV1> for TradeMessage {
    fn from(value: OfferV1) -> Self { TradeMessage::OfferV1(value) }
}

impl From<FulfillV0> for TradeMessage {
    fn from(value: FulfillV0) -> Self { TradeMessage::FulfillV0(value) }
}

impl From<FulfillV1> for TradeMessage {
    fn from(value: FulfillV1) -> Self { TradeMessage::FulfillV1(value) }
}

/// Parses a chain selector literal, rejecting empty or over-wide input.
pub fn parse_chain_selector(s: &str) -> Result<ChainSelector, CodecError> {
    Ok(abi::parse_uint(s, 64)?.to::<u64>())
}

/// Companion arrays describing one trade leg must agree in length.
pub(crate) fn paired(
    field: &'static str,
    len: usize,
    companion: &'static str,
    companion_len: usize,
) -> Result<(), CodecError> {
    if len != companion_len {
        return Err(CodecError::LegLengthMismatch { field, len, companion, companion_len });
    }
    Ok(())
}

/// Offer expiry for operator-facing output. Zero means no expiry.
pub(crate) fn format_deadline(deadline: U256) -> String {
    if deadline.is_zero() {
        return "no expiry".to_string();
    }
    if deadline <= U256::from(i64::MAX as u64) {
        if let Some(ts) = DateTime::<Utc>::from_timestamp(deadline.to::<u64>() as i64, 0) {
            return ts.format("%Y-%m-%d %H:%M:%S").to_string();
        }
    }
    deadline.to_string()
}
