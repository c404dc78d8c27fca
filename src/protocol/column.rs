//! Column Descriptor
//!
//! Describes one output column as the server reports it. The descriptor is
//! produced by the statement layer and is read-only as far as decoding goes.

use std::cmp::Ordering;

use crate::protocol::charset::Charset;
use crate::protocol::types::{DisplayWidth, SqlType, StorageLength};
use crate::value::ValueKind;

/// Text subtype: bytes in the session character set.
pub const SUBTYPE_TEXT: i32 = 0;
/// Text subtype: binary octets.
pub const SUBTYPE_OCTETS: i32 = 1;

/// Wire description of one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Wire type code.
    pub sql_type: i32,
    /// Decimal exponent: negative divides, positive multiplies.
    pub scale: i32,
    /// Encoding within a type family (0 text, 1 octets).
    pub subtype: i32,
    /// Declared byte length. Authoritative for text types only.
    pub length: i32,
    pub nullable: bool,
    pub field_name: String,
    pub relation_name: String,
    pub owner_name: String,
    pub alias_name: String,
}

impl ColumnDescriptor {
    pub fn new(sql_type: i32) -> Self {
        Self {
            sql_type,
            ..Self::default()
        }
    }

    /// Descriptor for a catalogued type with its catalog length.
    pub fn of(ty: SqlType) -> Self {
        let length = match ty.length() {
            StorageLength::Fixed(n) => n as i32,
            StorageLength::Variable => 0,
        };
        Self {
            length,
            ..Self::new(ty.code())
        }
    }

    pub fn scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    pub fn subtype(mut self, subtype: i32) -> Self {
        self.subtype = subtype;
        self
    }

    pub fn length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn field(mut self, relation: &str, field: &str) -> Self {
        self.relation_name = relation.to_string();
        self.field_name = field.to_string();
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.owner_name = owner.to_string();
        self
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.alias_name = alias.to_string();
        self
    }

    /// Catalog type, `None` when the code is not catalogued.
    pub fn catalog_type(&self) -> Option<SqlType> {
        SqlType::from_code(self.sql_type)
    }

    fn declared_length(&self) -> usize {
        usize::try_from(self.length).unwrap_or(0)
    }

    /// Bytes the column occupies on the wire. TEXT uses its declared length;
    /// everything else follows the catalog.
    pub fn io_length(&self) -> Option<StorageLength> {
        match self.catalog_type()? {
            SqlType::Text => Some(StorageLength::Fixed(self.declared_length())),
            ty => Some(ty.length()),
        }
    }

    pub fn display_length(&self) -> Option<DisplayWidth> {
        match self.catalog_type()? {
            SqlType::Text => Some(DisplayWidth::Fixed(self.declared_length())),
            ty => Some(ty.display_width()),
        }
    }

    /// Numeric type whose value depends on a non-zero scale.
    pub fn has_precision_scale(&self) -> bool {
        self.scale != 0 && self.catalog_type().is_some_and(SqlType::is_scaled_numeric)
    }

    /// Catalog name, empty for an uncatalogued code.
    pub fn type_name(&self) -> &'static str {
        self.catalog_type().map(SqlType::name).unwrap_or("")
    }

    /// Name a result set would show: the alias, else the field name.
    pub fn display_name(&self) -> &str {
        if self.alias_name.is_empty() {
            &self.field_name
        } else {
            &self.alias_name
        }
    }

    /// Shape of the value decoding this column produces under `charset`.
    pub fn value_kind(&self, charset: &Charset) -> Option<ValueKind> {
        let scaled = |natural: ValueKind, widened: ValueKind| match self.scale.cmp(&0) {
            Ordering::Equal => natural,
            Ordering::Greater => widened,
            Ordering::Less => ValueKind::Decimal,
        };

        let kind = match self.catalog_type()? {
            SqlType::Text | SqlType::Varying => match (self.subtype, charset) {
                (SUBTYPE_TEXT, Charset::Decoder(_)) => ValueKind::Text,
                _ => ValueKind::Bytes,
            },
            SqlType::Short => scaled(ValueKind::SmallInt, ValueKind::BigInt),
            SqlType::Long => scaled(ValueKind::Int, ValueKind::BigInt),
            SqlType::Int64 | SqlType::Quad => scaled(ValueKind::BigInt, ValueKind::BigInt),
            SqlType::Int128 => scaled(ValueKind::Int128, ValueKind::HugeInt),
            SqlType::Float => ValueKind::Float,
            SqlType::Double => ValueKind::Double,
            SqlType::Dec64 | SqlType::Dec128 | SqlType::DecFixed => ValueKind::Decimal,
            SqlType::Boolean => ValueKind::Boolean,
            SqlType::Date => ValueKind::Date,
            SqlType::Time => ValueKind::Time,
            SqlType::Timestamp => ValueKind::Timestamp,
            SqlType::TimeTz => ValueKind::TimeTz,
            SqlType::TimestampTz => ValueKind::TimestampTz,
            SqlType::Blob | SqlType::Array => ValueKind::Bytes,
            SqlType::Null => ValueKind::Null,
        };
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::charset;
    use crate::protocol::types::sqltype;

    #[test]
    fn test_io_length() {
        let text = ColumnDescriptor::new(sqltype::TEXT).length(40);
        assert_eq!(text.io_length(), Some(StorageLength::Fixed(40)));

        let varying = ColumnDescriptor::new(sqltype::VARYING).length(40);
        assert_eq!(varying.io_length(), Some(StorageLength::Variable));

        // declared length is ignored outside the text family
        let long = ColumnDescriptor::new(sqltype::LONG).length(99);
        assert_eq!(long.io_length(), Some(StorageLength::Fixed(4)));

        assert_eq!(ColumnDescriptor::new(sqltype::D_FLOAT).io_length(), None);
    }

    #[test]
    fn test_display_length() {
        let text = ColumnDescriptor::new(sqltype::TEXT).length(12);
        assert_eq!(text.display_length(), Some(DisplayWidth::Fixed(12)));
        assert_eq!(
            ColumnDescriptor::of(SqlType::Date).display_length(),
            Some(DisplayWidth::Fixed(10))
        );
    }

    #[test]
    fn test_has_precision_scale() {
        assert!(ColumnDescriptor::of(SqlType::Int64).scale(-2).has_precision_scale());
        assert!(ColumnDescriptor::of(SqlType::DecFixed).scale(-4).has_precision_scale());
        assert!(!ColumnDescriptor::of(SqlType::Int64).has_precision_scale());
        assert!(!ColumnDescriptor::of(SqlType::Double).scale(-2).has_precision_scale());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(ColumnDescriptor::of(SqlType::TimeTz).type_name(), "TIME WITH TIMEZONE");
        assert_eq!(ColumnDescriptor::new(sqltype::D_FLOAT).type_name(), "");
    }

    #[test]
    fn test_display_name() {
        let col = ColumnDescriptor::of(SqlType::Long).field("EMPLOYEE", "EMP_NO");
        assert_eq!(col.display_name(), "EMP_NO");
        assert_eq!(col.alias("ID").display_name(), "ID");
    }

    #[test]
    fn test_value_kind() {
        let utf8 = charset::lookup("UTF8");
        let octets = charset::lookup("OCTETS");

        let text = ColumnDescriptor::new(sqltype::VARYING);
        assert_eq!(text.value_kind(utf8), Some(ValueKind::Text));
        assert_eq!(text.value_kind(octets), Some(ValueKind::Bytes));
        assert_eq!(text.clone().subtype(SUBTYPE_OCTETS).value_kind(utf8), Some(ValueKind::Bytes));

        let short = ColumnDescriptor::of(SqlType::Short);
        assert_eq!(short.value_kind(utf8), Some(ValueKind::SmallInt));
        assert_eq!(short.clone().scale(2).value_kind(utf8), Some(ValueKind::BigInt));
        assert_eq!(short.scale(-2).value_kind(utf8), Some(ValueKind::Decimal));

        assert_eq!(ColumnDescriptor::of(SqlType::Int128).scale(1).value_kind(utf8), Some(ValueKind::HugeInt));
        assert_eq!(ColumnDescriptor::of(SqlType::Blob).value_kind(utf8), Some(ValueKind::Bytes));
        assert_eq!(ColumnDescriptor::new(sqltype::D_FLOAT).value_kind(utf8), None);
    }
}
