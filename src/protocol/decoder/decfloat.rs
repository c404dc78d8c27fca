//! DECFLOAT(16), DECFLOAT(34) and DECFIXED decoding.
//!
//! The server sends IEEE 754-2008 decimal64/decimal128 values with a
//! densely packed decimal (DPD) significand, most significant byte first:
//!
//! ```text
//! | sign | combination (5) | exponent continuation (w) | declets (10 bits each) |
//! ```
//!
//! DECFIXED uses the decimal128 layout but its exponent is the column scale.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use super::numeric::malformed;
use super::DecodeResult;
use crate::protocol::types::SqlType;
use crate::protocol::wire;
use crate::value::{NonFinite, Value};

/// Interchange format parameters.
struct Format {
    bits: u32,
    exponent_continuation: u32,
    declets: u32,
    bias: i32,
}

const DECIMAL64: Format = Format {
    bits: 64,
    exponent_continuation: 8,
    declets: 5,
    bias: 398,
};

const DECIMAL128: Format = Format {
    bits: 128,
    exponent_continuation: 12,
    declets: 11,
    bias: 6176,
};

/// Sign, coefficient and exponent pulled out of the bit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unpacked {
    Finite {
        negative: bool,
        coefficient: u128,
        exponent: i32,
    },
    Infinite {
        negative: bool,
    },
    NaN {
        signaling: bool,
    },
}

impl Format {
    fn unpack(&self, bits: u128) -> Unpacked {
        let negative = (bits >> (self.bits - 1)) & 1 == 1;
        let combination = ((bits >> (self.bits - 6)) & 0x1f) as u32;

        if combination >> 1 == 0b1111 {
            if combination & 1 == 0 {
                return Unpacked::Infinite { negative };
            }
            let signaling = (bits >> (self.bits - 7)) & 1 == 1;
            return Unpacked::NaN { signaling };
        }

        let (exponent_msb, leading_digit) = if combination >> 3 == 0b11 {
            ((combination >> 1) & 0b11, 8 + (combination & 1))
        } else {
            (combination >> 3, combination & 0b111)
        };

        let w = self.exponent_continuation;
        let continuation = ((bits >> (self.bits - 6 - w)) & ((1 << w) - 1)) as u32;
        let exponent = ((exponent_msb << w) | continuation) as i32 - self.bias;

        let mut coefficient = u128::from(leading_digit);
        for i in (0..self.declets).rev() {
            let declet = ((bits >> (10 * i)) & 0x3ff) as u16;
            coefficient = coefficient * 1000 + u128::from(declet_value(declet));
        }

        Unpacked::Finite {
            negative,
            coefficient,
            exponent,
        }
    }
}

/// Three decimal digits from one 10-bit DPD declet.
fn declet_value(declet: u16) -> u16 {
    let bit = |n: u16| (declet >> n) & 1;
    let (p, q, r) = (bit(9), bit(8), bit(7));
    let (s, t, u) = (bit(6), bit(5), bit(4));
    let (v, w, x, y) = (bit(3), bit(2), bit(1), bit(0));

    let pqr = (declet >> 7) & 0b111;
    let stu = (declet >> 4) & 0b111;
    let wxy = declet & 0b111;
    let pqy = (p << 2) | (q << 1) | y;

    let (d2, d1, d0) = if v == 0 {
        (pqr, stu, wxy)
    } else {
        match (w, x, s, t) {
            (0, 0, _, _) => (pqr, stu, 8 + y),
            (0, 1, _, _) => (pqr, 8 + u, (s << 2) | (t << 1) | y),
            (1, 0, _, _) => (8 + r, stu, pqy),
            (1, 1, 0, 0) => (8 + r, 8 + u, pqy),
            (1, 1, 0, 1) => (8 + r, (p << 2) | (q << 1) | u, 8 + y),
            (1, 1, 1, 0) => (pqr, 8 + u, 8 + y),
            _ => (8 + r, 8 + u, 8 + y),
        }
    };
    d2 * 100 + d1 * 10 + d0
}

fn signed(negative: bool, coefficient: u128) -> BigInt {
    let magnitude = BigInt::from(coefficient);
    if negative { -magnitude } else { magnitude }
}

fn to_value(unpacked: Unpacked) -> Value {
    match unpacked {
        Unpacked::Finite {
            negative,
            coefficient,
            exponent,
        } => Value::Decimal(BigDecimal::new(signed(negative, coefficient), -i64::from(exponent))),
        Unpacked::Infinite { negative: false } => Value::DecFloatSpecial(NonFinite::Infinity),
        Unpacked::Infinite { negative: true } => Value::DecFloatSpecial(NonFinite::NegInfinity),
        Unpacked::NaN { signaling: false } => Value::DecFloatSpecial(NonFinite::NaN),
        Unpacked::NaN { signaling: true } => Value::DecFloatSpecial(NonFinite::SignalingNaN),
    }
}

pub fn decode_dec64(raw: &[u8]) -> DecodeResult<Value> {
    let bits = wire::uint64(raw).ok_or_else(|| malformed(SqlType::Dec64, raw))?;
    Ok(to_value(DECIMAL64.unpack(u128::from(bits))))
}

pub fn decode_dec128(raw: &[u8]) -> DecodeResult<Value> {
    let bits = wire::uint128(raw).ok_or_else(|| malformed(SqlType::Dec128, raw))?;
    Ok(to_value(DECIMAL128.unpack(bits)))
}

/// DECFIXED: decimal128 coefficient, column scale as the exponent.
pub fn decode_dec_fixed(raw: &[u8], scale: i32) -> DecodeResult<Value> {
    let bits = wire::uint128(raw).ok_or_else(|| malformed(SqlType::DecFixed, raw))?;
    let value = match DECIMAL128.unpack(bits) {
        Unpacked::Finite {
            negative,
            coefficient,
            ..
        } => Value::Decimal(BigDecimal::new(signed(negative, coefficient), -i64::from(scale))),
        special => to_value(special),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::decoder::DecodeError;
    use std::str::FromStr;

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn dec(s: &str) -> Value {
        Value::Decimal(BigDecimal::from_str(s).unwrap())
    }

    #[test]
    fn test_declets() {
        assert_eq!(declet_value(0x000), 0);
        assert_eq!(declet_value(0x0a3), 123);
        assert_eq!(declet_value(0x1c5), 345);
        assert_eq!(declet_value(0x0ff), 999);
        assert_eq!(declet_value(0x3ff), 999);
        assert_eq!(declet_value(0x16e), 888);
        assert_eq!(declet_value(0x07e), 898);
        assert_eq!(declet_value(0x2fe), 998);
    }

    #[test]
    fn test_decimal64_finite() {
        assert_eq!(decode_dec64(&hex("2238000000000001")), Ok(dec("1")));
        assert_eq!(decode_dec64(&hex("22380000000000a3")), Ok(dec("123")));
        assert_eq!(decode_dec64(&hex("a2300000000000a3")), Ok(dec("-1.23")));
        assert_eq!(decode_dec64(&hex("22380000000000ff")), Ok(dec("999")));
    }

    #[test]
    fn test_decimal64_large_leading_digit() {
        assert_eq!(decode_dec64(&hex("6a38000000000000")), Ok(dec("8000000000000000")));
    }

    #[test]
    fn test_decimal64_specials() {
        assert_eq!(decode_dec64(&hex("7800000000000000")), Ok(Value::DecFloatSpecial(NonFinite::Infinity)));
        assert_eq!(decode_dec64(&hex("f800000000000000")), Ok(Value::DecFloatSpecial(NonFinite::NegInfinity)));
        assert_eq!(decode_dec64(&hex("7c00000000000000")), Ok(Value::DecFloatSpecial(NonFinite::NaN)));
        assert_eq!(decode_dec64(&hex("7e00000000000000")), Ok(Value::DecFloatSpecial(NonFinite::SignalingNaN)));
    }

    #[test]
    fn test_decimal128() {
        assert_eq!(decode_dec128(&hex("22080000000000000000000000000001")), Ok(dec("1")));
        assert_eq!(decode_dec128(&hex("2207c000000000000000000000000015")), Ok(dec("1.5")));
        assert_eq!(decode_dec128(&hex("220800000000000000000000000049c5")), Ok(dec("12345")));
    }

    #[test]
    fn test_dec_fixed_uses_column_scale() {
        let raw = hex("220800000000000000000000000049c5");
        assert_eq!(decode_dec_fixed(&raw, -2), Ok(dec("123.45")));
        assert_eq!(decode_dec_fixed(&raw, 0), Ok(dec("12345")));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            decode_dec64(&[0; 16]),
            Err(DecodeError::MalformedNumeric {
                type_name: "DECFLOAT(16)",
                expected: 8,
                actual: 16,
            })
        );
        assert!(decode_dec128(&[0; 8]).is_err());
    }
}
