//! Integer, binary float and boolean decoding.
//!
//! Integers arrive big-endian in the catalog width (SHORT rides in a 4-byte
//! slot). The column scale then decides the host type:
//!
//! - `scale == 0`: the integer at its natural width
//! - `scale > 0`: `integer * 10^scale`, widened
//! - `scale < 0`: an exact decimal, `integer * 10^scale`

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use super::{DecodeError, DecodeResult};
use crate::protocol::types::{SqlType, StorageLength};
use crate::protocol::wire;
use crate::value::Value;

pub(super) fn malformed(ty: SqlType, raw: &[u8]) -> DecodeError {
    let expected = match ty.length() {
        StorageLength::Fixed(n) => n,
        StorageLength::Variable => raw.len(),
    };
    DecodeError::MalformedNumeric {
        type_name: ty.name(),
        expected,
        actual: raw.len(),
    }
}

pub fn decode_short(raw: &[u8], scale: i32) -> DecodeResult<Value> {
    let v = wire::int32(raw).ok_or_else(|| malformed(SqlType::Short, raw))? as i16;
    apply_scale(SqlType::Short, i64::from(v), scale, Value::SmallInt(v))
}

pub fn decode_long(raw: &[u8], scale: i32) -> DecodeResult<Value> {
    let v = wire::int32(raw).ok_or_else(|| malformed(SqlType::Long, raw))?;
    apply_scale(SqlType::Long, i64::from(v), scale, Value::Int(v))
}

/// INT64, and QUAD which shares its 8-byte layout.
pub fn decode_int64(ty: SqlType, raw: &[u8], scale: i32) -> DecodeResult<Value> {
    let v = wire::int64(raw).ok_or_else(|| malformed(ty, raw))?;
    apply_scale(ty, v, scale, Value::BigInt(v))
}

/// INT128 is `high * 2^64 + low` with both halves signed, so a low half with
/// its top bit set lowers the value.
pub fn decode_int128(raw: &[u8], scale: i32) -> DecodeResult<Value> {
    let (high, low) = wire::int128_halves(raw).ok_or_else(|| malformed(SqlType::Int128, raw))?;
    let v = (BigInt::from(high) << 64u32) + BigInt::from(low);
    let value = match scale.cmp(&0) {
        Ordering::Equal => match i128::try_from(&v) {
            Ok(narrow) => Value::Int128(narrow),
            // only high = i64::MIN with a negative low half gets here
            Err(_) => Value::HugeInt(v),
        },
        Ordering::Greater => Value::HugeInt(v * BigInt::from(10u8).pow(scale.unsigned_abs())),
        Ordering::Less => Value::Decimal(BigDecimal::new(v, -i64::from(scale))),
    };
    Ok(value)
}

fn apply_scale(ty: SqlType, v: i64, scale: i32, natural: Value) -> DecodeResult<Value> {
    match scale.cmp(&0) {
        Ordering::Equal => Ok(natural),
        Ordering::Greater => 10i64
            .checked_pow(scale.unsigned_abs())
            .and_then(|factor| v.checked_mul(factor))
            .map(Value::BigInt)
            .ok_or(DecodeError::NumericOverflow {
                type_name: ty.name(),
                scale,
            }),
        Ordering::Less => Ok(Value::Decimal(BigDecimal::new(BigInt::from(v), -i64::from(scale)))),
    }
}

pub fn decode_float(raw: &[u8]) -> DecodeResult<Value> {
    wire::float32(raw)
        .map(Value::Float)
        .ok_or_else(|| malformed(SqlType::Float, raw))
}

pub fn decode_double(raw: &[u8]) -> DecodeResult<Value> {
    wire::float64(raw)
        .map(Value::Double)
        .ok_or_else(|| malformed(SqlType::Double, raw))
}

pub fn decode_boolean(raw: &[u8]) -> DecodeResult<Value> {
    match raw {
        [b] => Ok(Value::Boolean(*b != 0)),
        _ => Err(malformed(SqlType::Boolean, raw)),
    }
}
