//! Firebird SQL Type Codes and the Type Descriptor Catalog
//!
//! Reference: Firebird `dsc_pub.h` / `sqlda_pub.h` (XSQLVAR `sqltype` values).
//!
//! The catalog is a closed table: one entry per type code, fixed at compile
//! time and exposed only through read accessors.

use std::fmt;

/// Firebird wire type codes (XSQLVAR `sqltype`, with the nullable bit cleared).
#[allow(dead_code)]
pub mod sqltype {
    // Text
    pub const TEXT: i32 = 452;
    pub const VARYING: i32 = 448;

    // Integers
    pub const SHORT: i32 = 500;
    pub const LONG: i32 = 496;
    pub const INT64: i32 = 580;
    pub const INT128: i32 = 32752;
    pub const QUAD: i32 = 550;

    // Binary floats
    pub const FLOAT: i32 = 482;
    pub const DOUBLE: i32 = 480;
    pub const D_FLOAT: i32 = 530; // VAX float, never sent by modern servers

    // Date/Time
    pub const TIMESTAMP: i32 = 510;
    pub const TIME: i32 = 560;
    pub const DATE: i32 = 570;
    pub const TIMESTAMP_TZ: i32 = 32754;
    pub const TIME_TZ: i32 = 32756;

    // Decimal floating point
    pub const DEC_FIXED: i32 = 32758;
    pub const DEC64: i32 = 32760;
    pub const DEC128: i32 = 32762;

    // Identifiers
    pub const BLOB: i32 = 520;
    pub const ARRAY: i32 = 540;

    pub const BOOLEAN: i32 = 32764;
    pub const NULL_TYPE: i32 = 32766;
}

/// Storage length of a type on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageLength {
    /// Always exactly this many bytes.
    Fixed(usize),
    /// Taken from the column's declared length (text family).
    Variable,
}

/// Canonical display width of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayWidth {
    Fixed(usize),
    Variable,
}

/// A catalogued SQL type.
///
/// D_FLOAT has a wire constant but no catalog entry, so it has no variant
/// here and `SqlType::from_code(sqltype::D_FLOAT)` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Text,
    Varying,
    Short,
    Long,
    Float,
    Double,
    Timestamp,
    Blob,
    Array,
    Quad,
    Time,
    Date,
    Int64,
    Int128,
    TimestampTz,
    TimeTz,
    DecFixed,
    Dec64,
    Dec128,
    Boolean,
    Null,
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub length: StorageLength,
    pub display_width: DisplayWidth,
    pub name: &'static str,
}

const fn info(length: StorageLength, display_width: DisplayWidth, name: &'static str) -> TypeInfo {
    TypeInfo { length, display_width, name }
}

use DisplayWidth as W;
use StorageLength as L;

impl SqlType {
    /// Every catalogued type, in wire-code order.
    pub const ALL: [SqlType; 21] = [
        SqlType::Varying,
        SqlType::Text,
        SqlType::Double,
        SqlType::Float,
        SqlType::Long,
        SqlType::Short,
        SqlType::Timestamp,
        SqlType::Blob,
        SqlType::Array,
        SqlType::Quad,
        SqlType::Time,
        SqlType::Date,
        SqlType::Int64,
        SqlType::Int128,
        SqlType::TimestampTz,
        SqlType::TimeTz,
        SqlType::DecFixed,
        SqlType::Dec64,
        SqlType::Dec128,
        SqlType::Boolean,
        SqlType::Null,
    ];

    /// Look up a wire type code. The nullable flag (bit 0) is ignored.
    pub fn from_code(code: i32) -> Option<Self> {
        let ty = match code & !1 {
            sqltype::TEXT => SqlType::Text,
            sqltype::VARYING => SqlType::Varying,
            sqltype::SHORT => SqlType::Short,
            sqltype::LONG => SqlType::Long,
            sqltype::FLOAT => SqlType::Float,
            sqltype::DOUBLE => SqlType::Double,
            sqltype::TIMESTAMP => SqlType::Timestamp,
            sqltype::BLOB => SqlType::Blob,
            sqltype::ARRAY => SqlType::Array,
            sqltype::QUAD => SqlType::Quad,
            sqltype::TIME => SqlType::Time,
            sqltype::DATE => SqlType::Date,
            sqltype::INT64 => SqlType::Int64,
            sqltype::INT128 => SqlType::Int128,
            sqltype::TIMESTAMP_TZ => SqlType::TimestampTz,
            sqltype::TIME_TZ => SqlType::TimeTz,
            sqltype::DEC_FIXED => SqlType::DecFixed,
            sqltype::DEC64 => SqlType::Dec64,
            sqltype::DEC128 => SqlType::Dec128,
            sqltype::BOOLEAN => SqlType::Boolean,
            sqltype::NULL_TYPE => SqlType::Null,
            _ => return None,
        };
        Some(ty)
    }

    /// Look up a type by its catalog name or its constant name
    /// (`"DECFLOAT(16)"` and `"DEC64"` both work). Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|ty| {
            ty.name() == upper || ty.constant_name() == upper
        })
    }

    /// Wire type code.
    pub fn code(self) -> i32 {
        match self {
            SqlType::Text => sqltype::TEXT,
            SqlType::Varying => sqltype::VARYING,
            SqlType::Short => sqltype::SHORT,
            SqlType::Long => sqltype::LONG,
            SqlType::Float => sqltype::FLOAT,
            SqlType::Double => sqltype::DOUBLE,
            SqlType::Timestamp => sqltype::TIMESTAMP,
            SqlType::Blob => sqltype::BLOB,
            SqlType::Array => sqltype::ARRAY,
            SqlType::Quad => sqltype::QUAD,
            SqlType::Time => sqltype::TIME,
            SqlType::Date => sqltype::DATE,
            SqlType::Int64 => sqltype::INT64,
            SqlType::Int128 => sqltype::INT128,
            SqlType::TimestampTz => sqltype::TIMESTAMP_TZ,
            SqlType::TimeTz => sqltype::TIME_TZ,
            SqlType::DecFixed => sqltype::DEC_FIXED,
            SqlType::Dec64 => sqltype::DEC64,
            SqlType::Dec128 => sqltype::DEC128,
            SqlType::Boolean => sqltype::BOOLEAN,
            SqlType::Null => sqltype::NULL_TYPE,
        }
    }

    /// Catalog entry for this type.
    pub fn info(self) -> TypeInfo {
        match self {
            SqlType::Text => info(L::Variable, W::Variable, "TEXT"),
            SqlType::Varying => info(L::Variable, W::Variable, "VARYING"),
            SqlType::Short => info(L::Fixed(4), W::Fixed(6), "SHORT"),
            SqlType::Long => info(L::Fixed(4), W::Fixed(11), "LONG"),
            SqlType::Float => info(L::Fixed(4), W::Fixed(17), "FLOAT"),
            SqlType::Double => info(L::Fixed(8), W::Fixed(17), "DOUBLE"),
            SqlType::Timestamp => info(L::Fixed(8), W::Fixed(22), "TIMESTAMP"),
            SqlType::Blob => info(L::Fixed(8), W::Fixed(0), "BLOB"),
            SqlType::Array => info(L::Fixed(8), W::Variable, "ARRAY"),
            SqlType::Quad => info(L::Fixed(8), W::Fixed(20), "QUAD"),
            SqlType::Time => info(L::Fixed(4), W::Fixed(11), "TIME"),
            SqlType::Date => info(L::Fixed(4), W::Fixed(10), "DATE"),
            SqlType::Int64 => info(L::Fixed(8), W::Fixed(20), "INT64"),
            SqlType::Int128 => info(L::Fixed(16), W::Fixed(20), "INT128"),
            SqlType::TimestampTz => info(L::Fixed(10), W::Fixed(28), "TIMESTAMP WITH TIMEZONE"),
            SqlType::TimeTz => info(L::Fixed(6), W::Fixed(17), "TIME WITH TIMEZONE"),
            SqlType::DecFixed => info(L::Fixed(16), W::Fixed(34), "DECFIXED"),
            SqlType::Dec64 => info(L::Fixed(8), W::Fixed(16), "DECFLOAT(16)"),
            SqlType::Dec128 => info(L::Fixed(16), W::Fixed(34), "DECFLOAT(34)"),
            SqlType::Boolean => info(L::Fixed(1), W::Fixed(5), "BOOLEAN"),
            SqlType::Null => info(L::Fixed(0), W::Fixed(4), "NULL"),
        }
    }

    pub fn length(self) -> StorageLength {
        self.info().length
    }

    pub fn display_width(self) -> DisplayWidth {
        self.info().display_width
    }

    /// Human-readable catalog name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Name of the wire constant (`SQL_TYPE_*` without the prefix).
    pub fn constant_name(self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Varying => "VARYING",
            SqlType::Short => "SHORT",
            SqlType::Long => "LONG",
            SqlType::Float => "FLOAT",
            SqlType::Double => "DOUBLE",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Blob => "BLOB",
            SqlType::Array => "ARRAY",
            SqlType::Quad => "QUAD",
            SqlType::Time => "TIME",
            SqlType::Date => "DATE",
            SqlType::Int64 => "INT64",
            SqlType::Int128 => "INT128",
            SqlType::TimestampTz => "TIMESTAMP_TZ",
            SqlType::TimeTz => "TIME_TZ",
            SqlType::DecFixed => "DEC_FIXED",
            SqlType::Dec64 => "DEC64",
            SqlType::Dec128 => "DEC128",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Null => "NULL_TYPE",
        }
    }

    /// Whether a non-zero column scale changes the decoded value.
    pub fn is_scaled_numeric(self) -> bool {
        matches!(
            self,
            SqlType::Short
                | SqlType::Long
                | SqlType::Quad
                | SqlType::Int64
                | SqlType::Int128
                | SqlType::Dec64
                | SqlType::Dec128
                | SqlType::DecFixed
        )
    }

    pub fn is_text(self) -> bool {
        matches!(self, SqlType::Text | SqlType::Varying)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for StorageLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageLength::Fixed(n) => write!(f, "{}", n),
            StorageLength::Variable => f.write_str("variable"),
        }
    }
}

impl fmt::Display for DisplayWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayWidth::Fixed(n) => write!(f, "{}", n),
            DisplayWidth::Variable => f.write_str("variable"),
        }
    }
}

/// Fixed storage length for a type code, `None` if the code is not catalogued.
pub fn length_of(code: i32) -> Option<StorageLength> {
    SqlType::from_code(code).map(SqlType::length)
}

/// Display width for a type code, `None` if the code is not catalogued.
pub fn display_width_of(code: i32) -> Option<DisplayWidth> {
    SqlType::from_code(code).map(SqlType::display_width)
}

/// Catalog name for a type code, `None` if the code is not catalogued.
pub fn name_of(code: i32) -> Option<&'static str> {
    SqlType::from_code(code).map(SqlType::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_lengths() {
        let four = [sqltype::SHORT, sqltype::LONG, sqltype::FLOAT, sqltype::TIME, sqltype::DATE];
        for code in four {
            assert_eq!(length_of(code), Some(StorageLength::Fixed(4)), "code {}", code);
        }

        let eight = [
            sqltype::DOUBLE,
            sqltype::TIMESTAMP,
            sqltype::BLOB,
            sqltype::ARRAY,
            sqltype::QUAD,
            sqltype::INT64,
            sqltype::DEC64,
        ];
        for code in eight {
            assert_eq!(length_of(code), Some(StorageLength::Fixed(8)), "code {}", code);
        }

        for code in [sqltype::INT128, sqltype::DEC128, sqltype::DEC_FIXED] {
            assert_eq!(length_of(code), Some(StorageLength::Fixed(16)), "code {}", code);
        }

        assert_eq!(length_of(sqltype::TIMESTAMP_TZ), Some(StorageLength::Fixed(10)));
        assert_eq!(length_of(sqltype::TIME_TZ), Some(StorageLength::Fixed(6)));
        assert_eq!(length_of(sqltype::BOOLEAN), Some(StorageLength::Fixed(1)));
        assert_eq!(length_of(sqltype::TEXT), Some(StorageLength::Variable));
        assert_eq!(length_of(sqltype::VARYING), Some(StorageLength::Variable));
    }

    #[test]
    fn test_display_widths() {
        let expected = [
            (sqltype::SHORT, 6),
            (sqltype::LONG, 11),
            (sqltype::FLOAT, 17),
            (sqltype::TIME, 11),
            (sqltype::DATE, 10),
            (sqltype::DOUBLE, 17),
            (sqltype::TIMESTAMP, 22),
            (sqltype::BLOB, 0),
            (sqltype::QUAD, 20),
            (sqltype::INT64, 20),
            (sqltype::INT128, 20),
            (sqltype::TIMESTAMP_TZ, 28),
            (sqltype::TIME_TZ, 17),
            (sqltype::DEC64, 16),
            (sqltype::DEC128, 34),
            (sqltype::DEC_FIXED, 34),
            (sqltype::BOOLEAN, 5),
        ];
        for (code, width) in expected {
            assert_eq!(display_width_of(code), Some(DisplayWidth::Fixed(width)), "code {}", code);
        }
        assert_eq!(display_width_of(sqltype::ARRAY), Some(DisplayWidth::Variable));
        assert_eq!(display_width_of(sqltype::TEXT), Some(DisplayWidth::Variable));
    }

    #[test]
    fn test_names() {
        assert_eq!(name_of(sqltype::TIMESTAMP_TZ), Some("TIMESTAMP WITH TIMEZONE"));
        assert_eq!(name_of(sqltype::DEC64), Some("DECFLOAT(16)"));
        assert_eq!(name_of(sqltype::DEC_FIXED), Some("DECFIXED"));
        assert_eq!(name_of(12345), None);
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(SqlType::from_code(sqltype::D_FLOAT), None);
        assert_eq!(length_of(sqltype::D_FLOAT), None);
        assert_eq!(SqlType::from_code(0), None);
    }

    #[test]
    fn test_nullable_bit_ignored() {
        assert_eq!(SqlType::from_code(sqltype::LONG + 1), Some(SqlType::Long));
        assert_eq!(SqlType::from_code(sqltype::BOOLEAN + 1), Some(SqlType::Boolean));
    }

    #[test]
    fn test_code_roundtrip() {
        for ty in SqlType::ALL {
            assert_eq!(SqlType::from_code(ty.code()), Some(ty));
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(SqlType::from_name("decfloat(16)"), Some(SqlType::Dec64));
        assert_eq!(SqlType::from_name("DEC64"), Some(SqlType::Dec64));
        assert_eq!(SqlType::from_name("timestamp_tz"), Some(SqlType::TimestampTz));
        assert_eq!(SqlType::from_name("varchar"), None);
    }
}
