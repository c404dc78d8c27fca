//! Firebird Value Decoding (Layer 2: Pure, Sync)
//!
//! This module contains the pure, synchronous decoding engine.
//! No I/O, no logging - just (column descriptor, bytes) → value.

pub mod charset;
pub mod column;
pub mod decoder;
pub mod timezone;
pub mod types;
pub mod wire;

pub use charset::{Charset, CharsetDecoder};
pub use column::{ColumnDescriptor, SUBTYPE_OCTETS, SUBTYPE_TEXT};
pub use decoder::{decode, DecodeContext, DecodeError, DecodeResult};
pub use timezone::{TimezoneTable, TimezoneTableError, GMT_ID};
pub use types::{display_width_of, length_of, name_of, sqltype, DisplayWidth, SqlType, StorageLength};
