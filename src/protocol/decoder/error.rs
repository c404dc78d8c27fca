//! Decoding errors for wire bytes to typed value conversion.

use thiserror::Error;

/// Errors that can occur while decoding a column value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The type code has no catalog entry (protocol/version mismatch).
    #[error("unsupported SQL type code {0}")]
    UnsupportedType(i32),

    /// A fixed-width numeric buffer has the wrong length.
    #[error("malformed {type_name} value: expected {expected} bytes, got {actual}")]
    MalformedNumeric {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A date/time buffer has the wrong length.
    #[error("malformed {type_name} value: expected {expected} bytes, got {actual}")]
    MalformedTemporal {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A BLOB or ARRAY identifier has the wrong length.
    #[error("malformed {type_name} id: expected {expected} bytes, got {actual}")]
    MalformedBlobId {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Positive scale pushed the value past the 64-bit range.
    #[error("{type_name} value with scale {scale} overflows a 64-bit integer")]
    NumericOverflow { type_name: &'static str, scale: i32 },

    /// Wire timezone id with no entry in the timezone table.
    #[error("unknown time zone id {0}")]
    UnknownTimezone(u16),

    /// Session timezone name that does not resolve to a zone.
    #[error("invalid session time zone '{0}'")]
    InvalidSessionTimezone(String),

    /// Date/time components outside the representable calendar.
    #[error("invalid temporal value: {0}")]
    InvalidTemporal(String),
}

/// Result type for value decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;
