//! Value Decoder
//!
//! Turns one column's raw bytes into a typed [`Value`]. Dispatch branches on
//! the type code alone; each family lives in its own codec:
//!
//! - [`numeric`]: integers, scaled integers, binary floats, BOOLEAN
//! - [`decfloat`]: DECFLOAT(16), DECFLOAT(34), DECFIXED
//! - [`temporal`]: DATE, TIME, TIMESTAMP and the WITH TIMEZONE variants
//! - [`text`]: TEXT and VARYING
//!
//! Decoding is pure: no I/O, no logging, no shared mutable state.

pub mod decfloat;
mod error;
pub mod numeric;
pub mod temporal;
pub mod text;

use std::sync::Arc;

pub use error::{DecodeError, DecodeResult};

use crate::protocol::charset::{self, Charset};
use crate::protocol::column::ColumnDescriptor;
use crate::protocol::timezone::TimezoneTable;
use crate::protocol::types::{SqlType, StorageLength};
use crate::value::{Value, Zone};

/// Session settings shared by every column of a result set.
#[derive(Debug, Clone)]
pub struct DecodeContext {
    session_timezone: String,
    session_zone: Option<Zone>,
    charset_name: String,
    charset: &'static Charset,
    timezones: Arc<TimezoneTable>,
}

impl DecodeContext {
    /// Context for a session timezone name and charset name.
    ///
    /// The timezone is resolved here but only reported when a DATE, TIME or
    /// TIMESTAMP column needs it.
    pub fn new(session_timezone: &str, session_charset: &str) -> Self {
        Self {
            session_timezone: session_timezone.to_string(),
            session_zone: Zone::parse(session_timezone),
            charset_name: session_charset.to_string(),
            charset: charset::lookup(session_charset),
            timezones: TimezoneTable::shared(),
        }
    }

    /// Use `timezones` for WITH TIMEZONE values instead of the built-in table.
    pub fn with_timezones(mut self, timezones: Arc<TimezoneTable>) -> Self {
        self.timezones = timezones;
        self
    }

    pub fn session_zone(&self) -> DecodeResult<Zone> {
        self.session_zone
            .ok_or_else(|| DecodeError::InvalidSessionTimezone(self.session_timezone.clone()))
    }

    pub fn charset_name(&self) -> &str {
        &self.charset_name
    }

    pub fn charset(&self) -> &'static Charset {
        self.charset
    }

    pub fn timezones(&self) -> &TimezoneTable {
        &self.timezones
    }

    /// Decode one non-NULL column value.
    pub fn decode(&self, column: &ColumnDescriptor, raw: &[u8]) -> DecodeResult<Value> {
        let ty = column.catalog_type().ok_or(DecodeError::UnsupportedType(column.sql_type))?;
        let scale = column.scale;

        match ty {
            SqlType::Text | SqlType::Varying => Ok(text::decode_text(column.subtype, raw, self.charset)),

            SqlType::Short => numeric::decode_short(raw, scale),
            SqlType::Long => numeric::decode_long(raw, scale),
            SqlType::Int64 | SqlType::Quad => numeric::decode_int64(ty, raw, scale),
            SqlType::Int128 => numeric::decode_int128(raw, scale),
            SqlType::Float => numeric::decode_float(raw),
            SqlType::Double => numeric::decode_double(raw),
            SqlType::Boolean => numeric::decode_boolean(raw),

            SqlType::Dec64 => decfloat::decode_dec64(raw),
            SqlType::Dec128 => decfloat::decode_dec128(raw),
            SqlType::DecFixed => decfloat::decode_dec_fixed(raw, scale),

            SqlType::Date => temporal::decode_date(raw, self.session_zone()?),
            SqlType::Time => temporal::decode_time(raw, self.session_zone()?),
            SqlType::Timestamp => temporal::decode_timestamp(raw, self.session_zone()?),
            SqlType::TimeTz => temporal::decode_time_tz(raw, &self.timezones),
            SqlType::TimestampTz => temporal::decode_timestamp_tz(raw, &self.timezones),

            SqlType::Blob | SqlType::Array => decode_id(ty, raw),
            SqlType::Null => Ok(Value::Null),
        }
    }
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::new("", "UTF8")
    }
}

/// BLOB and ARRAY columns carry an opaque 8-byte id, not the content.
fn decode_id(ty: SqlType, raw: &[u8]) -> DecodeResult<Value> {
    match ty.length() {
        StorageLength::Fixed(n) if n == raw.len() => Ok(Value::Bytes(raw.to_vec())),
        StorageLength::Fixed(n) => Err(DecodeError::MalformedBlobId {
            type_name: ty.name(),
            expected: n,
            actual: raw.len(),
        }),
        StorageLength::Variable => Ok(Value::Bytes(raw.to_vec())),
    }
}

/// Decode one value with a one-off session context.
///
/// Prefer [`DecodeContext::decode`] when decoding many values for the same
/// session.
pub fn decode(
    column: &ColumnDescriptor,
    raw: &[u8],
    session_timezone: &str,
    session_charset: &str,
) -> DecodeResult<Value> {
    DecodeContext::new(session_timezone, session_charset).decode(column, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::sqltype;
    use crate::value::{ValueKind, Zoned};
    use chrono::NaiveDate;
    use chrono_tz::Tz;

    #[test]
    fn test_unsupported_types() {
        let ctx = DecodeContext::default();
        assert_eq!(
            ctx.decode(&ColumnDescriptor::new(sqltype::D_FLOAT), &[0; 8]),
            Err(DecodeError::UnsupportedType(sqltype::D_FLOAT))
        );
        assert_eq!(
            ctx.decode(&ColumnDescriptor::new(12345), &[]),
            Err(DecodeError::UnsupportedType(12345))
        );
    }

    #[test]
    fn test_scaled_integers() {
        let raw = 12345i32.to_be_bytes();
        let col = ColumnDescriptor::of(SqlType::Long).scale(-2);
        assert_eq!(decode(&col, &raw, "", "UTF8").unwrap().to_string(), "123.45");

        let col = ColumnDescriptor::of(SqlType::Short).scale(2);
        assert_eq!(decode(&col, &5i32.to_be_bytes(), "", "UTF8"), Ok(Value::BigInt(500)));
    }

    #[test]
    fn test_quad_decodes_like_int64() {
        let col = ColumnDescriptor::of(SqlType::Quad);
        assert_eq!(decode(&col, &(-9i64).to_be_bytes(), "", "UTF8"), Ok(Value::BigInt(-9)));
    }

    #[test]
    fn test_session_timezone_applies_to_dates() {
        let col = ColumnDescriptor::of(SqlType::Date);
        let raw = 0i32.to_be_bytes();
        let expected = Zoned::new(NaiveDate::from_ymd_opt(1858, 11, 17).unwrap(), Zone::Named(Tz::Europe__Prague));
        assert_eq!(decode(&col, &raw, "Europe/Prague", "UTF8"), Ok(Value::Date(expected)));
    }

    #[test]
    fn test_invalid_session_timezone_only_hits_temporals() {
        let ctx = DecodeContext::new("Not/AZone", "UTF8");
        assert_eq!(
            ctx.decode(&ColumnDescriptor::of(SqlType::Date), &0i32.to_be_bytes()),
            Err(DecodeError::InvalidSessionTimezone("Not/AZone".into()))
        );
        assert_eq!(
            ctx.decode(&ColumnDescriptor::of(SqlType::Long), &7i32.to_be_bytes()),
            Ok(Value::Int(7))
        );
    }

    #[test]
    fn test_custom_timezone_table() {
        let table = TimezoneTable::builtin().with_zone(64000, "Europe/Prague").unwrap();
        let ctx = DecodeContext::default().with_timezones(Arc::new(table));
        let mut raw = 0u32.to_be_bytes().to_vec();
        raw.extend_from_slice(&64000u16.to_be_bytes());
        let Value::TimeTz(zoned) = ctx.decode(&ColumnDescriptor::of(SqlType::TimeTz), &raw).unwrap() else {
            panic!("expected TIME WITH TIMEZONE");
        };
        assert_eq!(zoned.zone, Zone::Named(Tz::Europe__Prague));

        assert_eq!(
            DecodeContext::default().decode(&ColumnDescriptor::of(SqlType::TimeTz), &raw),
            Err(DecodeError::UnknownTimezone(64000))
        );
    }

    #[test]
    fn test_blob_id() {
        let col = ColumnDescriptor::of(SqlType::Blob).subtype(1);
        let id = [0, 0, 0, 1, 0, 0, 0, 42];
        assert_eq!(decode(&col, &id, "", "UTF8"), Ok(Value::Bytes(id.to_vec())));
        assert_eq!(
            decode(&col, &id[..4], "", "UTF8"),
            Err(DecodeError::MalformedBlobId {
                type_name: "BLOB",
                expected: 8,
                actual: 4,
            })
        );
    }

    #[test]
    fn test_null_type() {
        let col = ColumnDescriptor::of(SqlType::Null);
        assert_eq!(decode(&col, &[], "", "UTF8"), Ok(Value::Null));
    }

    #[test]
    fn test_value_kind_matches_decoded_value() {
        let ctx = DecodeContext::new("UTC", "WIN1250");
        let cases: Vec<(ColumnDescriptor, Vec<u8>)> = vec![
            (ColumnDescriptor::of(SqlType::Varying), b"abc".to_vec()),
            (ColumnDescriptor::of(SqlType::Short).scale(-1), 3i32.to_be_bytes().to_vec()),
            (ColumnDescriptor::of(SqlType::Int128).scale(3), 3i128.to_be_bytes().to_vec()),
            (ColumnDescriptor::of(SqlType::Double), 1.0f64.to_be_bytes().to_vec()),
            (ColumnDescriptor::of(SqlType::Time), 0u32.to_be_bytes().to_vec()),
            (ColumnDescriptor::of(SqlType::Boolean), vec![1]),
        ];
        for (col, raw) in cases {
            let value = ctx.decode(&col, &raw).unwrap();
            assert_eq!(col.value_kind(ctx.charset()), Some(value.kind()), "{}", col.type_name());
        }
        assert_eq!(Value::Null.kind(), ValueKind::Null);
    }
}
