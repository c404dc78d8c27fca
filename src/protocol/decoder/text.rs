//! TEXT and VARYING decoding.

use crate::protocol::charset::Charset;
use crate::protocol::column::{SUBTYPE_OCTETS, SUBTYPE_TEXT};
use crate::value::Value;

/// Decode a text-family buffer.
///
/// - subtype 1 (octets): bytes unchanged, whatever the charset
/// - subtype 0: bytes through the session charset (`OCTETS` passes through)
/// - any other subtype: bytes unchanged
pub fn decode_text(subtype: i32, raw: &[u8], charset: &Charset) -> Value {
    match (subtype, charset) {
        (SUBTYPE_TEXT, Charset::Decoder(decoder)) => Value::Text(decoder.decode_to_utf8(raw)),
        (SUBTYPE_TEXT, Charset::Octets) | (SUBTYPE_OCTETS, _) => Value::Bytes(raw.to_vec()),
        _ => Value::Bytes(raw.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::charset;

    #[test]
    fn test_octets_subtype_ignores_charset() {
        let raw = [0xcf, 0xf0, 0x00, 0xff];
        assert_eq!(decode_text(1, &raw, charset::lookup("WIN1251")), Value::Bytes(raw.to_vec()));
        assert_eq!(decode_text(1, &raw, charset::lookup("UTF8")), Value::Bytes(raw.to_vec()));
    }

    #[test]
    fn test_text_subtype_uses_charset() {
        assert_eq!(
            decode_text(0, &[0xcf, 0xf0, 0xe8, 0xe2, 0xe5, 0xf2], charset::lookup("WIN1251")),
            Value::Text("Привет".into())
        );
        assert_eq!(decode_text(0, "ahoj".as_bytes(), charset::lookup("UTF8")), Value::Text("ahoj".into()));
    }

    #[test]
    fn test_octets_charset_passthrough() {
        assert_eq!(decode_text(0, b"\x00\x01", charset::lookup("OCTETS")), Value::Bytes(vec![0, 1]));
    }

    #[test]
    fn test_unknown_subtype_is_raw() {
        assert_eq!(decode_text(7, b"abc", charset::lookup("UTF8")), Value::Bytes(b"abc".to_vec()));
    }

    #[test]
    fn test_unknown_charset_is_lossy_utf8() {
        assert_eq!(decode_text(0, &[0x61, 0xc3], charset::lookup("NONE")), Value::Text("a\u{fffd}".into()));
    }
}
