//! Generic head-tail tuple ABI encoding.
//!
//! One engine walks a declarative schema (an ordered list of [`Field`]s) and
//! a matching list of [`AbiValue`]s. Static fields occupy one 32-byte word
//! in the head region; dynamic fields put an offset word in the head and a
//! length-prefixed block in the tail, recursively for nested dynamic
//! elements. Adding a schema is a data change, not a new code path.
//!
//! [`encode_message`] matches the layout Solidity's `abi.encode` produces
//! for a single struct argument, which is what the execution contract's
//! `abi.decode` expects on the receiving chain.

use std::{fmt::Display, str::FromStr};

use alloy_primitives::{Address, U256};

use crate::error::CodecError;

const WORD: usize = 32;

/// Type descriptor for a single tuple field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbiType {
    /// 20-byte account address, right-aligned in its word.
    Address,
    /// Unsigned integer of the given bit width (8..=256, multiple of 8).
    Uint(u16),
    Bool,
    /// Dynamically sized array of a single element type.
    Array(&'static AbiType),
}

/// A value paired with a schema slot at encode time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiValue {
    Address(Address),
    Uint(U256),
    Bool(bool),
    Array(Vec<AbiValue>),
}

/// Named slot of a schema. The name is the wire-contract field name and is
/// kept for documentation and diagnostics; layout is driven by `ty` alone.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub ty: AbiType,
}

/// Shorthand for schema tables.
pub const fn field(name: &'static str, ty: AbiType) -> Field { Field { name, ty } }

pub const ADDRESS: AbiType = AbiType::Address;
pub const UINT64: AbiType = AbiType::Uint(64);
pub const UINT256: AbiType = AbiType::Uint(256);
pub const BOOL: AbiType = AbiType::Bool;
pub const ADDRESS_ARRAY: AbiType = AbiType::Array(&ADDRESS);
pub const UINT64_ARRAY: AbiType = AbiType::Array(&UINT64);
pub const UINT256_ARRAY: AbiType = AbiType::Array(&UINT256);

impl AbiType {
    /// Whether the type is tail-encoded with an offset word in the head.
    pub fn is_dynamic(&self) -> bool { matches!(self, AbiType::Array(_)) }
}

impl Display for AbiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbiType::Address => write!(f, "address"),
            AbiType::Uint(bits) => write!(f, "uint{}", bits),
            AbiType::Bool => write!(f, "bool"),
            AbiType::Array(elem) => write!(f, "{}[]", elem),
        }
    }
}

impl From<Address> for AbiValue {
    fn from(value: Address) -> Self { AbiValue::Address(value) }
}

impl From<U256> for AbiValue {
    fn from(value: U256) -> Self { AbiValue::Uint(value) }
}

impl From<u64> for AbiValue {
    fn from(value: u64) -> Self { AbiValue::Uint(U256::from(value)) }
}

impl From<bool> for AbiValue {
    fn from(value: bool) -> Self { AbiValue::Bool(value) }
}

impl<T: Into<AbiValue> + Copy> From<&[T]> for AbiValue {
    fn from(values: &[T]) -> Self {
        AbiValue::Array(values.iter().copied().map(Into::into).collect())
    }
}

impl AbiValue {
    pub fn into_address(self) -> Result<Address, CodecError> {
        match self {
            AbiValue::Address(a) => Ok(a),
            _ => Err(CodecError::TypeMismatch { expected: ADDRESS }),
        }
    }

    pub fn into_uint(self) -> Result<U256, CodecError> {
        match self {
            AbiValue::Uint(v) => Ok(v),
            _ => Err(CodecError::TypeMismatch { expected: UINT256 }),
        }
    }

    pub fn into_u64(self) -> Result<u64, CodecError> {
        match self {
            AbiValue::Uint(v) if v > U256::from(u64::MAX) => {
                Err(CodecError::IntegerOverflow { value: v, bits: 64 })
            },
            AbiValue::Uint(v) => Ok(v.to::<u64>()),
            _ => Err(CodecError::TypeMismatch { expected: UINT64 }),
        }
    }

    pub fn into_bool(self) -> Result<bool, CodecError> {
        match self {
            AbiValue::Bool(b) => Ok(b),
            _ => Err(CodecError::TypeMismatch { expected: BOOL }),
        }
    }

    pub fn into_address_array(self) -> Result<Vec<Address>, CodecError> {
        match self {
            AbiValue::Array(items) => items.into_iter().map(AbiValue::into_address).collect(),
            _ => Err(CodecError::TypeMismatch { expected: ADDRESS_ARRAY }),
        }
    }

    pub fn into_uint_array(self) -> Result<Vec<U256>, CodecError> {
        match self {
            AbiValue::Array(items) => items.into_iter().map(AbiValue::into_uint).collect(),
            _ => Err(CodecError::TypeMismatch { expected: UINT256_ARRAY }),
        }
    }

    pub fn into_u64_array(self) -> Result<Vec<u64>, CodecError> {
        match self {
            AbiValue::Array(items) => items.into_iter().map(AbiValue::into_u64).collect(),
            _ => Err(CodecError::TypeMismatch { expected: UINT64_ARRAY }),
        }
    }
}

/// Parses a 20-byte account address from its hex literal, checksummed or
/// plain.
pub fn parse_address(s: &str) -> Result<Address, CodecError> {
    Address::from_str(s).map_err(|_| CodecError::InvalidAddress(s.to_string()))
}

/// Parses an unsigned integer literal (decimal, or hex with `0x` prefix)
/// and checks it against the declared bit width.
///
/// An empty or otherwise unparseable literal is an error, never zero.
pub fn parse_uint(s: &str, bits: u16) -> Result<U256, CodecError> {
    let value = U256::from_str(s).map_err(|_| CodecError::InvalidIntegerLiteral(s.to_string()))?;
    check_width(value, bits)?;
    Ok(value)
}

fn check_width(value: U256, bits: u16) -> Result<(), CodecError> {
    if bits < 256 && value >> usize::from(bits) != U256::ZERO {
        return Err(CodecError::IntegerOverflow { value, bits });
    }
    Ok(())
}

/// Encodes a schema-shaped value list the way `abi.encode` renders a single
/// struct argument: for a dynamic tuple, an offset word pointing at the
/// tuple body; for a fully static tuple, the head alone.
pub fn encode_message(schema: &[Field], values: &[AbiValue]) -> Result<Vec<u8>, CodecError> {
    if schema.len() != values.len() {
        return Err(CodecError::ArityMismatch { expected: schema.len(), found: values.len() });
    }
    let types: Vec<AbiType> = schema.iter().map(|f| f.ty).collect();
    let body = encode_tuple(&types, values)?;
    if types.iter().any(AbiType::is_dynamic) {
        let mut out = Vec::with_capacity(WORD + body.len());
        out.extend_from_slice(&U256::from(WORD as u64).to_be_bytes::<WORD>());
        out.extend_from_slice(&body);
        Ok(out)
    } else {
        Ok(body)
    }
}

/// Decodes `data` produced by [`encode_message`] back into a value list.
///
/// Strict on word contents: dirty padding, out-of-range booleans and
/// over-wide integers are rejected rather than masked off. Re-encoding a
/// decoded canonical message reproduces the input bytes.
pub fn decode_message(schema: &[Field], data: &[u8]) -> Result<Vec<AbiValue>, CodecError> {
    let types: Vec<AbiType> = schema.iter().map(|f| f.ty).collect();
    if types.iter().any(AbiType::is_dynamic) {
        let word = read_word(data, 0)?;
        if word_to_offset(word, data.len())? != WORD {
            return Err(CodecError::MalformedWord);
        }
        decode_tuple(&types, &data[WORD..])
    } else {
        decode_tuple(&types, data)
    }
}

/// Head-tail encoding of a tuple body. Offsets are relative to the start of
/// the returned buffer.
fn encode_tuple(types: &[AbiType], values: &[AbiValue]) -> Result<Vec<u8>, CodecError> {
    let head_len = types.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();
    for (ty, value) in types.iter().zip(values) {
        if ty.is_dynamic() {
            let offset = head_len + tail.len();
            head.extend_from_slice(&U256::from(offset as u64).to_be_bytes::<WORD>());
            encode_value(ty, value, &mut tail)?;
        } else {
            head.extend_from_slice(&encode_word(*ty, value)?);
        }
    }
    head.extend_from_slice(&tail);
    Ok(head)
}

/// Tail block of a single dynamic value.
fn encode_value(ty: &AbiType, value: &AbiValue, out: &mut Vec<u8>) -> Result<(), CodecError> {
    match (ty, value) {
        (AbiType::Array(elem), AbiValue::Array(items)) => {
            out.extend_from_slice(&U256::from(items.len() as u64).to_be_bytes::<WORD>());
            let elem_types = vec![**elem; items.len()];
            let body = encode_tuple(&elem_types, items)?;
            out.extend_from_slice(&body);
            Ok(())
        },
        (ty, _) => Err(CodecError::TypeMismatch { expected: *ty }),
    }
}

/// Single-word encoding of a static value, type- and width-checked.
fn encode_word(ty: AbiType, value: &AbiValue) -> Result<[u8; WORD], CodecError> {
    match (ty, value) {
        (AbiType::Address, AbiValue::Address(a)) => {
            let mut word = [0u8; WORD];
            word[12..].copy_from_slice(a.as_slice());
            Ok(word)
        },
        (AbiType::Uint(bits), AbiValue::Uint(v)) => {
            check_width(*v, bits)?;
            Ok(v.to_be_bytes::<WORD>())
        },
        (AbiType::Bool, AbiValue::Bool(b)) => {
            let mut word = [0u8; WORD];
            word[WORD - 1] = *b as u8;
            Ok(word)
        },
        (expected, _) => Err(CodecError::TypeMismatch { expected }),
    }
}

fn decode_tuple(types: &[AbiType], region: &[u8]) -> Result<Vec<AbiValue>, CodecError> {
    let mut values = Vec::with_capacity(types.len());
    for (slot, ty) in types.iter().enumerate() {
        let word = read_word(region, slot * WORD)?;
        if ty.is_dynamic() {
            let offset = word_to_offset(word, region.len())?;
            values.push(decode_value(ty, &region[offset..])?);
        } else {
            values.push(decode_word(*ty, word)?);
        }
    }
    Ok(values)
}

fn decode_value(ty: &AbiType, region: &[u8]) -> Result<AbiValue, CodecError> {
    match ty {
        AbiType::Array(elem) => {
            let len_word = read_word(region, 0)?;
            let elems = &region[WORD..];
            let len = word_to_offset(len_word, elems.len())?;
            if len > elems.len() / WORD {
                return Err(CodecError::Truncated);
            }
            let elem_types = vec![**elem; len];
            Ok(AbiValue::Array(decode_tuple(&elem_types, elems)?))
        },
        _ => Err(CodecError::TypeMismatch { expected: *ty }),
    }
}

fn decode_word(ty: AbiType, word: &[u8; WORD]) -> Result<AbiValue, CodecError> {
    match ty {
        AbiType::Address => {
            if word[..12].iter().any(|b| *b != 0) {
                return Err(CodecError::MalformedWord);
            }
            Ok(AbiValue::Address(Address::from_slice(&word[12..])))
        },
        AbiType::Uint(bits) => {
            let value = U256::from_be_slice(word);
            check_width(value, bits).map_err(|_| CodecError::MalformedWord)?;
            Ok(AbiValue::Uint(value))
        },
        AbiType::Bool => {
            if word[..WORD - 1].iter().any(|b| *b != 0) || word[WORD - 1] > 1 {
                return Err(CodecError::MalformedWord);
            }
            Ok(AbiValue::Bool(word[WORD - 1] == 1))
        },
        AbiType::Array(_) => Err(CodecError::TypeMismatch { expected: ty }),
    }
}

fn read_word(region: &[u8], offset: usize) -> Result<&[u8; WORD], CodecError> {
    region
        .get(offset..offset + WORD)
        .and_then(|s| s.try_into().ok())
        .ok_or(CodecError::Truncated)
}

/// Offset/length word to usize, bounded by the enclosing region.
fn word_to_offset(word: &[u8; WORD], region_len: usize) -> Result<usize, CodecError> {
    let value = U256::from_be_slice(word);
    if value > U256::from(region_len as u64) {
        return Err(CodecError::Truncated);
    }
    Ok(value.to::<usize>())
}
