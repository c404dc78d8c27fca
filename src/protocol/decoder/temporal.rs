//! DATE, TIME, TIMESTAMP and their timezone-qualified variants.
//!
//! Wire layout (big-endian):
//!
//! - DATE: `i32` modified Julian day (day 0 is 1858-11-17)
//! - TIME: `u32` count of 1/10000 s since midnight
//! - TIMESTAMP: DATE then TIME
//! - TIME WITH TIMEZONE: TIME then `u16` zone id
//! - TIMESTAMP WITH TIMEZONE: DATE, TIME, then `u16` zone id

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::{DecodeError, DecodeResult};
use crate::protocol::timezone::TimezoneTable;
use crate::protocol::types::{SqlType, StorageLength};
use crate::protocol::wire;
use crate::value::{Value, Zone, Zoned};

/// Ticks per second in a TIME value.
const TICKS_PER_SECOND: u32 = 10_000;

const NANOS_PER_TICK: u32 = 1_000_000_000 / TICKS_PER_SECOND;

fn malformed(ty: SqlType, raw: &[u8]) -> DecodeError {
    let expected = match ty.length() {
        StorageLength::Fixed(n) => n,
        StorageLength::Variable => raw.len(),
    };
    DecodeError::MalformedTemporal {
        type_name: ty.name(),
        expected,
        actual: raw.len(),
    }
}

/// Modified Julian day to proleptic Gregorian `(year, month, day)`.
pub fn julian_to_ymd(wire_day: i32) -> (i64, i64, i64) {
    let mut nday = i64::from(wire_day) + 678_882;

    let century = (4 * nday - 1).div_euclid(146_097);
    nday = 4 * nday - 1 - 146_097 * century;
    let mut day = nday.div_euclid(4);

    nday = (4 * day + 3).div_euclid(1461);
    day = 4 * day + 3 - 1461 * nday;
    day = (day + 4).div_euclid(4);

    let mut month = (5 * day - 3).div_euclid(153);
    day = 5 * day - 3 - 153 * month;
    day = (day + 5).div_euclid(5);

    let mut year = 100 * century + nday;
    if month < 10 {
        month += 3;
    } else {
        month -= 9;
        year += 1;
    }

    (year, month, day)
}

/// TIME ticks to `(hours, minutes, seconds, nanoseconds)`.
pub fn split_ticks(ticks: u32) -> (u32, u32, u32, u32) {
    let total = ticks / TICKS_PER_SECOND;
    let nanos = (ticks % TICKS_PER_SECOND) * NANOS_PER_TICK;
    (total / 3600, (total / 60) % 60, total % 60, nanos)
}

fn to_date(wire_day: i32) -> DecodeResult<NaiveDate> {
    let (year, month, day) = julian_to_ymd(wire_day);
    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month as u32, day as u32))
        .ok_or_else(|| DecodeError::InvalidTemporal(format!("day number {} is out of range", wire_day)))
}

fn to_time(ticks: u32) -> DecodeResult<NaiveTime> {
    let (hours, minutes, seconds, nanos) = split_ticks(ticks);
    if hours >= 24 {
        return Err(DecodeError::InvalidTemporal(format!(
            "time of day {} ticks is past midnight",
            ticks
        )));
    }
    NaiveTime::from_hms_nano_opt(hours, minutes, seconds, nanos)
        .ok_or_else(|| DecodeError::InvalidTemporal(format!("time of day {} ticks", ticks)))
}

pub fn decode_date(raw: &[u8], zone: Zone) -> DecodeResult<Value> {
    let day = wire::int32(raw).ok_or_else(|| malformed(SqlType::Date, raw))?;
    Ok(Value::Date(Zoned::new(to_date(day)?, zone)))
}

pub fn decode_time(raw: &[u8], zone: Zone) -> DecodeResult<Value> {
    let ticks = wire::uint32(raw).ok_or_else(|| malformed(SqlType::Time, raw))?;
    Ok(Value::Time(Zoned::new(to_time(ticks)?, zone)))
}

pub fn decode_timestamp(raw: &[u8], zone: Zone) -> DecodeResult<Value> {
    let (day, ticks) = wire::date_time(raw).ok_or_else(|| malformed(SqlType::Timestamp, raw))?;
    let value = NaiveDateTime::new(to_date(day)?, to_time(ticks)?);
    Ok(Value::Timestamp(Zoned::new(value, zone)))
}

/// TIME WITH TIMEZONE: the zone comes from the wire, not the session.
pub fn decode_time_tz(raw: &[u8], timezones: &TimezoneTable) -> DecodeResult<Value> {
    let (ticks, zone_id) = wire::time_zone(raw).ok_or_else(|| malformed(SqlType::TimeTz, raw))?;
    let zone = timezones.resolve(zone_id)?;
    Ok(Value::TimeTz(Zoned::new(to_time(ticks)?, zone)))
}

pub fn decode_timestamp_tz(raw: &[u8], timezones: &TimezoneTable) -> DecodeResult<Value> {
    let (day, ticks, zone_id) =
        wire::date_time_zone(raw).ok_or_else(|| malformed(SqlType::TimestampTz, raw))?;
    let zone = timezones.resolve(zone_id)?;
    let value = NaiveDateTime::new(to_date(day)?, to_time(ticks)?);
    Ok(Value::TimestampTz(Zoned::new(value, zone)))
}
