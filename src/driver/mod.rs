//! Firebird Driver Boundary (Layer 3: Rows)
//!
//! The transport hands over one fetched row at a time: a buffer per column,
//! with NULL signalled out-of-band as `None`. This module decodes whole rows
//! against the statement's column descriptors and is the only layer that
//! logs.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, trace};

use crate::protocol::column::ColumnDescriptor;
use crate::protocol::decoder::{DecodeContext, DecodeError};
use crate::value::Value;

/// Error type for row decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The row does not have one buffer per described column.
    #[error("row has {actual} columns, statement describes {expected}")]
    ColumnCount { expected: usize, actual: usize },

    /// One column failed to decode.
    #[error("column {index} ({column}): {source}")]
    Decode {
        index: usize,
        column: String,
        #[source]
        source: DecodeError,
    },
}

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// A decoded row.
#[derive(Debug, Clone, PartialEq)]
pub struct FbRow {
    columns: Arc<[ColumnDescriptor]>,
    values: Vec<Value>,
}

impl FbRow {
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Value of the column whose alias is `name`, else whose field name is.
    /// Case-insensitive.
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        let index = self
            .columns
            .iter()
            .position(|c| c.alias_name.eq_ignore_ascii_case(name))
            .or_else(|| {
                self.columns
                    .iter()
                    .position(|c| c.field_name.eq_ignore_ascii_case(name))
            })?;
        self.values.get(index)
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// Decodes rows of one result set.
#[derive(Debug, Clone)]
pub struct RowDecoder {
    columns: Arc<[ColumnDescriptor]>,
    ctx: DecodeContext,
}

impl RowDecoder {
    pub fn new(columns: Vec<ColumnDescriptor>, ctx: DecodeContext) -> Self {
        debug!(
            columns = columns.len(),
            charset = ctx.charset_name(),
            "Prepared row decoder"
        );
        Self {
            columns: columns.into(),
            ctx,
        }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn context(&self) -> &DecodeContext {
        &self.ctx
    }

    /// Decode one fetched row. `None` entries are NULLs.
    pub fn decode_row(&self, raw: &[Option<&[u8]>]) -> DriverResult<FbRow> {
        if raw.len() != self.columns.len() {
            return Err(DriverError::ColumnCount {
                expected: self.columns.len(),
                actual: raw.len(),
            });
        }

        let mut values = Vec::with_capacity(raw.len());
        for (index, (column, buf)) in self.columns.iter().zip(raw).enumerate() {
            let value = match buf {
                None => Value::Null,
                Some(bytes) => self.ctx.decode(column, bytes).map_err(|source| {
                    debug!(
                        index,
                        column = column.display_name(),
                        sql_type = column.sql_type,
                        len = bytes.len(),
                        error = %source,
                        "Column decode failed"
                    );
                    DriverError::Decode {
                        index,
                        column: column.display_name().to_string(),
                        source,
                    }
                })?,
            };
            values.push(value);
        }

        trace!(columns = values.len(), "Decoded row");
        Ok(FbRow {
            columns: Arc::clone(&self.columns),
            values,
        })
    }
}
