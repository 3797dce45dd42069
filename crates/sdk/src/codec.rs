//! Versioned encode/decode entry points for trade messages.
//!
//! The codec is a pure function from (version tag, record) to bytes: it
//! never mutates its input and identical records always yield byte-identical
//! output. The explicit version tag guards against shipping a record under
//! the wrong wire generation, which would otherwise produce bytes the
//! destination contract decodes into garbage.

use crate::{
    abi,
    error::CodecError,
    types::{FulfillV0, FulfillV1, MessageKind, OfferV0, OfferV1, ProtocolVersion, TradeMessage},
};

/// Encodes a trade message under the given protocol version.
///
/// Fails with [`CodecError::SchemaVersionMismatch`] when the record's
/// intrinsic version differs from the requested tag, rather than silently
/// producing wrong bytes.
pub fn encode(version: ProtocolVersion, message: &TradeMessage) -> Result<Vec<u8>, CodecError> {
    if message.version() != version {
        return Err(CodecError::SchemaVersionMismatch {
            found: message.version(),
            requested: version,
        });
    }
    abi::encode_message(message.schema(), &message.to_values())
}

/// Decodes a canonical trade message encoding of the given version and
/// schema kind.
pub fn decode(
    version: ProtocolVersion,
    kind: MessageKind,
    data: &[u8],
) -> Result<TradeMessage, CodecError> {
    Ok(match (version, kind) {
        (ProtocolVersion::V0, MessageKind::Offer) => OfferV0::decode(data)?.into(),
        (ProtocolVersion::V1, MessageKind::Offer) => OfferV1::decode(data)?.into(),
        (ProtocolVersion::V0, MessageKind::Fulfill) => FulfillV0::decode(data)?.into(),
        (ProtocolVersion::V1, MessageKind::Fulfill) => FulfillV1::decode(data)?.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_version_mismatch_both_ways() {
        let v0: TradeMessage = OfferV0::default().into();
        let v1: TradeMessage = OfferV1::default().into();
        assert_eq!(
            encode(ProtocolVersion::V0, &v1),
            Err(CodecError::SchemaVersionMismatch {
                found: ProtocolVersion::V1,
                requested: ProtocolVersion::V0,
            }),
        );
        assert_eq!(
            encode(ProtocolVersion::V1, &v0),
            Err(CodecError::SchemaVersionMismatch {
                found: ProtocolVersion::V0,
                requested: ProtocolVersion::V1,
            }),
        );
    }

    #[test]
    fn fulfill_version_tag_is_checked_too() {
        let fulfill: TradeMessage = FulfillV1::default().into();
        assert!(matches!(
            encode(ProtocolVersion::V0, &fulfill),
            Err(CodecError::SchemaVersionMismatch { .. }),
        ));
    }
}
