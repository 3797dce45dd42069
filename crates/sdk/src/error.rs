use std::path::PathBuf;

use alloy_primitives::U256;
use thiserror::Error;

use crate::{abi::AbiType, types::ProtocolVersion};

/// Error encoding or decoding a trade message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Malformed 20-byte account address literal.
    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    /// Integer value exceeds the declared field width.
    #[error("integer overflow: {value} does not fit uint{bits}")]
    IntegerOverflow { value: U256, bits: u16 },

    /// String-sourced integer failed to parse. Empty literals are rejected,
    /// never coerced to zero.
    #[error("invalid integer literal {0:?}")]
    InvalidIntegerLiteral(String),

    /// Record was built for one protocol version but encoded or decoded
    /// under the schema of the other.
    #[error("schema version mismatch: {found} message under {requested} schema")]
    SchemaVersionMismatch {
        found: ProtocolVersion,
        requested: ProtocolVersion,
    },

    /// Value shape does not match the declared field type.
    #[error("value does not match expected type {expected}")]
    TypeMismatch { expected: AbiType },

    /// Number of values does not match the number of schema fields.
    #[error("schema expects {expected} fields, got {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// Paired leg arrays disagree in length.
    #[error("{field} has {len} entries but {companion} has {companion_len}")]
    LegLengthMismatch {
        field: &'static str,
        len: usize,
        companion: &'static str,
        companion_len: usize,
    },

    /// Encoded data ends before a required word or tail block.
    #[error("encoded data truncated")]
    Truncated,

    /// A word carries non-zero bytes outside its declared width, or an
    /// out-of-range boolean/offset.
    #[error("malformed word in encoded data")]
    MalformedWord,
}

/// Error reading or writing the address registry.
///
/// Both kinds are recoverable: a failed write commits nothing, so the
/// previously persisted document stays intact and the operation can be
/// retried.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The on-disk document exists but cannot be read or is not valid JSON.
    /// Distinct from an absent file, which reads as an empty mapping.
    #[error("failed to read address list {}: {reason}", .path.display())]
    ReadFailure { path: PathBuf, reason: String },

    /// The document directory cannot be created or the merged document
    /// cannot be written.
    #[error("failed to write address list {}: {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },
}
