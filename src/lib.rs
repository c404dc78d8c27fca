//! fbwire - Firebird wire-protocol value decoding
//!
//! This crate provides:
//! - The type descriptor catalog for every Firebird SQL type code
//! - Column descriptors as reported by a prepared statement
//! - Decoding of raw column bytes into typed values: scaled integers,
//!   DECFLOAT/DECFIXED, Julian-day dates, timezone-qualified temporals and
//!   legacy character sets
//! - A row decoder for the driver boundary
//!
//! NO I/O, NO sockets - the transport hands over descriptors and bytes.
//!
//! # Example
//! ```
//! use fbwire::{decode, ColumnDescriptor, SqlType, Value};
//!
//! let column = ColumnDescriptor::of(SqlType::Long).scale(-2);
//! let value = decode(&column, &12345i32.to_be_bytes(), "", "UTF8").unwrap();
//! assert_eq!(value.to_string(), "123.45");
//! ```

pub mod config;
pub mod driver;
pub mod protocol;
pub mod value;

pub use config::{Config, ConfigError};
pub use driver::{DriverError, FbRow, RowDecoder};
pub use protocol::{
    decode, sqltype, ColumnDescriptor, DecodeContext, DecodeError, DecodeResult, SqlType,
    TimezoneTable,
};
pub use value::{NonFinite, Value, ValueKind, Zone, Zoned};
