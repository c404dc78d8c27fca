//! Decoded column values.
//!
//! A `Value` is built fresh by every decode call and owned by the caller.
//! Temporal values keep their wall-clock components and carry the zone
//! they are to be read in, either the session zone or the zone sent on the
//! wire.

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use num_bigint::BigInt;

/// Zone attached to a temporal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The zone of the host system.
    Local,
    /// An IANA zone.
    Named(Tz),
    /// A fixed displacement from UTC.
    Offset(FixedOffset),
}

impl Zone {
    /// Parse a zone name: `""` is the local zone, `±HH:MM` a fixed offset,
    /// anything else an IANA name.
    pub fn parse(name: &str) -> Option<Zone> {
        let name = name.trim();
        if name.is_empty() {
            return Some(Zone::Local);
        }
        if let Some(offset) = parse_offset(name) {
            return Some(Zone::Offset(offset));
        }
        name.parse::<Tz>().ok().map(Zone::Named)
    }

    /// Build a fixed-offset zone from a displacement in minutes.
    pub fn from_offset_minutes(minutes: i32) -> Option<Zone> {
        FixedOffset::east_opt(minutes * 60).map(Zone::Offset)
    }

    /// Resolve a wall-clock value in this zone. Ambiguous local times pick
    /// the earlier instant; times skipped by a DST gap are `None`.
    pub fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Zone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            Zone::Named(tz) => tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            Zone::Offset(offset) => offset.from_local_datetime(&naive).single(),
        }
    }
}

fn parse_offset(name: &str) -> Option<FixedOffset> {
    let (sign, rest) = match name.as_bytes().first()? {
        b'+' => (1, &name[1..]),
        b'-' => (-1, &name[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Offset(offset) => write!(f, "{}", offset),
        }
    }
}

/// A wall-clock value paired with the zone it is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoned<T> {
    pub value: T,
    pub zone: Zone,
}

impl<T> Zoned<T> {
    pub fn new(value: T, zone: Zone) -> Self {
        Self { value, zone }
    }
}

impl Zoned<NaiveDateTime> {
    /// The instant this timestamp denotes, if it exists in its zone.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.zone.localize(self.value)
    }
}

impl Zoned<NaiveDate> {
    /// Midnight of this date in its zone.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.zone.localize(self.value.and_hms_opt(0, 0, 0)?)
    }
}

impl<T: fmt::Display> fmt::Display for Zoned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.zone)
    }
}

/// DECFLOAT values that have no finite decimal representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFinite {
    Infinity,
    NegInfinity,
    NaN,
    SignalingNaN,
}

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NonFinite::Infinity => "Infinity",
            NonFinite::NegInfinity => "-Infinity",
            NonFinite::NaN => "NaN",
            NonFinite::SignalingNaN => "sNaN",
        })
    }
}

/// A decoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL (signalled out-of-band, or a NULL_TYPE column).
    Null,
    Text(String),
    /// Raw octets: binary text, BLOB/ARRAY ids.
    Bytes(Vec<u8>),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    Int128(i128),
    /// INT128 scaled up past 128 bits.
    HugeInt(BigInt),
    /// Exact decimal: scaled integers, DECFLOAT, DECFIXED.
    Decimal(BigDecimal),
    DecFloatSpecial(NonFinite),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Date(Zoned<NaiveDate>),
    Time(Zoned<NaiveTime>),
    Timestamp(Zoned<NaiveDateTime>),
    TimeTz(Zoned<NaiveTime>),
    TimestampTz(Zoned<NaiveDateTime>),
}

/// The shape of a decoded value, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Text,
    Bytes,
    SmallInt,
    Int,
    BigInt,
    Int128,
    HugeInt,
    Decimal,
    Float,
    Double,
    Boolean,
    Date,
    Time,
    Timestamp,
    TimeTz,
    TimestampTz,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::SmallInt(_) => ValueKind::SmallInt,
            Value::Int(_) => ValueKind::Int,
            Value::BigInt(_) => ValueKind::BigInt,
            Value::Int128(_) => ValueKind::Int128,
            Value::HugeInt(_) => ValueKind::HugeInt,
            Value::Decimal(_) | Value::DecFloatSpecial(_) => ValueKind::Decimal,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Date(_) => ValueKind::Date,
            Value::Time(_) => ValueKind::Time,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::TimeTz(_) => ValueKind::TimeTz,
            Value::TimestampTz(_) => ValueKind::TimestampTz,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            Value::Text(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Any integer that fits in 64 bits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::SmallInt(v) => Some(i64::from(*v)),
            Value::Int(v) => Some(i64::from(*v)),
            Value::BigInt(v) => Some(*v),
            Value::Int128(v) => i64::try_from(*v).ok(),
            Value::HugeInt(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Exact decimal view of any finite numeric except binary floats.
    pub fn as_decimal(&self) -> Option<BigDecimal> {
        match self {
            Value::Decimal(d) => Some(d.clone()),
            Value::SmallInt(v) => Some(BigDecimal::from(*v)),
            Value::Int(v) => Some(BigDecimal::from(*v)),
            Value::BigInt(v) => Some(BigDecimal::from(*v)),
            Value::Int128(v) => Some(BigDecimal::from(BigInt::from(*v))),
            Value::HugeInt(v) => Some(BigDecimal::from(v.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Text(s) => f.write_str(s),
            Value::Bytes(b) => {
                f.write_str("\\x")?;
                for byte in b {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Value::SmallInt(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::BigInt(v) => write!(f, "{}", v),
            Value::Int128(v) => write!(f, "{}", v),
            Value::HugeInt(v) => write!(f, "{}", v),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::DecFloatSpecial(s) => write!(f, "{}", s),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Boolean(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Value::Date(z) => write!(f, "{}", z),
            Value::Time(z) | Value::TimeTz(z) => write!(f, "{}", z),
            Value::Timestamp(z) | Value::TimestampTz(z) => write!(f, "{}", z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_zone_parse() {
        assert_eq!(Zone::parse(""), Some(Zone::Local));
        assert_eq!(Zone::parse("Europe/Prague"), Some(Zone::Named(Tz::Europe__Prague)));
        assert_eq!(
            Zone::parse("+05:30"),
            Some(Zone::Offset(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()))
        );
        assert_eq!(
            Zone::parse("-08:00"),
            Some(Zone::Offset(FixedOffset::west_opt(8 * 3600).unwrap()))
        );
        assert_eq!(Zone::parse("Mars/Olympus_Mons"), None);
        assert_eq!(Zone::parse("+25:00"), None);
    }

    #[test]
    fn test_zone_display() {
        assert_eq!(Zone::Named(Tz::GMT).to_string(), "GMT");
        assert_eq!(Zone::from_offset_minutes(-90).unwrap().to_string(), "-01:30");
    }

    #[test]
    fn test_localize_named_zone() {
        let naive = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let zoned = Zoned::new(naive, Zone::Named(Tz::Europe__Prague));
        let dt = zoned.to_datetime().unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::SmallInt(-3).as_i64(), Some(-3));
        assert_eq!(Value::Int128(1 << 70).as_i64(), None);
        assert_eq!(Value::Text("abc".into()).as_str(), Some("abc"));
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
        assert_eq!(
            Value::Int(12).as_decimal(),
            Some(BigDecimal::from_str("12").unwrap())
        );
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Bytes(vec![0xde, 0xad]).to_string(), "\\xdead");
        assert_eq!(Value::Boolean(false).to_string(), "FALSE");
        assert_eq!(Value::DecFloatSpecial(NonFinite::NegInfinity).to_string(), "-Infinity");
        let date = NaiveDate::from_ymd_opt(1858, 11, 17).unwrap();
        assert_eq!(Value::Date(Zoned::new(date, Zone::Named(Tz::UTC))).to_string(), "1858-11-17 UTC");
    }
}
