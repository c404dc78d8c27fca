//! Big-endian wire primitives.
//!
//! Every reader here is `all_consuming`: a buffer that is shorter *or longer*
//! than the layout yields `None`, so codecs can report a length mismatch
//! instead of silently reading a prefix.

use nom::IResult;
use nom::combinator::all_consuming;
use nom::number::complete::{
    be_f32, be_f64, be_i32, be_i64, be_u16, be_u32, be_u64, be_u128,
};
use nom::sequence::tuple;

type Input<'a> = &'a [u8];

/// Run `parser` over the whole of `raw`.
fn exact<'a, O>(raw: Input<'a>, parser: impl FnMut(Input<'a>) -> IResult<Input<'a>, O>) -> Option<O> {
    all_consuming(parser)(raw).ok().map(|(_, value)| value)
}

pub fn int32(raw: &[u8]) -> Option<i32> {
    exact(raw, be_i32)
}

pub fn uint32(raw: &[u8]) -> Option<u32> {
    exact(raw, be_u32)
}

pub fn int64(raw: &[u8]) -> Option<i64> {
    exact(raw, be_i64)
}

/// INT128 as its high and low 64-bit halves, both signed.
pub fn int128_halves(raw: &[u8]) -> Option<(i64, i64)> {
    exact(raw, tuple((be_i64, be_i64)))
}

pub fn uint64(raw: &[u8]) -> Option<u64> {
    exact(raw, be_u64)
}

pub fn uint128(raw: &[u8]) -> Option<u128> {
    exact(raw, be_u128)
}

pub fn float32(raw: &[u8]) -> Option<f32> {
    exact(raw, be_f32)
}

pub fn float64(raw: &[u8]) -> Option<f64> {
    exact(raw, be_f64)
}

/// DATE + TIME block of a TIMESTAMP.
pub fn date_time(raw: &[u8]) -> Option<(i32, u32)> {
    exact(raw, tuple((be_i32, be_u32)))
}

/// TIME block followed by a timezone id.
pub fn time_zone(raw: &[u8]) -> Option<(u32, u16)> {
    exact(raw, tuple((be_u32, be_u16)))
}

/// DATE + TIME blocks followed by a timezone id.
pub fn date_time_zone(raw: &[u8]) -> Option<(i32, u32, u16)> {
    exact(raw, tuple((be_i32, be_u32, be_u16)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lengths() {
        assert_eq!(int32(&[0, 0, 1, 0]), Some(256));
        assert_eq!(int32(&[0xff, 0xff, 0xff, 0xfe]), Some(-2));
        assert_eq!(int32(&[0, 0, 1]), None);
        assert_eq!(int32(&[0, 0, 0, 1, 0]), None);
    }

    #[test]
    fn test_int128_halves() {
        let mut raw = [0u8; 16];
        raw[7] = 2;
        raw[8] = 0x80;
        assert_eq!(int128_halves(&raw), Some((2, i64::MIN)));
        assert_eq!(int128_halves(&[0xff; 16]), Some((-1, -1)));
        assert_eq!(int128_halves(&[0; 15]), None);
    }

    #[test]
    fn test_composite_blocks() {
        let raw = [0, 0, 0, 1, 0, 0, 0, 2, 0xff, 0xff];
        assert_eq!(date_time_zone(&raw), Some((1, 2, 65535)));
        assert_eq!(date_time(&raw[..8]), Some((1, 2)));
        assert_eq!(time_zone(&raw[4..]), Some((2, 65535)));
        assert_eq!(date_time(&raw), None);
    }
}
