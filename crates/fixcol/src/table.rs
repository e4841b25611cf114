//! Fixed-width table writing over a field spec.
//!
//! A table is a sequence of rows written against a `&[Field]` spec: each
//! column has a kind and a width, rows are separated by newlines, and rows
//! requested beyond the data are blank lines spanning the spec's total
//! width. This is the surrounding writer for the per-field operations in
//! [`writer`](crate::writer).

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};
use crate::traits::{NullPredicate, Sink};
use crate::value::CellValue;
use crate::writer::{write_float, write_int, write_null, write_text};

/// Kind of value a table column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Always blank.
    Null,
    /// Right-justified integer.
    Int,
    /// Right-justified float.
    Float,
    /// Left-justified text.
    Text,
}

/// One column of a fixed-width table: a kind and a width in characters.
///
/// # Example
///
/// ```
/// use fixcol::{Field, FieldKind};
///
/// let spec = vec![
///     Field::new(FieldKind::Int, 8),
///     Field::new(FieldKind::Float, 16),
///     Field::new(FieldKind::Text, 12),
/// ];
/// assert_eq!(spec.iter().map(|f| f.width).sum::<usize>(), 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Kind of value the column holds.
    pub kind: FieldKind,
    /// Width of the column in characters.
    pub width: usize,
}

impl Field {
    /// Creates a field spec entry.
    pub fn new(kind: FieldKind, width: usize) -> Self {
        Field { kind, width }
    }
}

/// Encodes one row against `spec`, writing each cell to the sink in order.
///
/// The row must have exactly one value per field.
pub fn write_row<S, N>(
    sink: &mut S,
    nulls: &N,
    spec: &[Field],
    row: &[CellValue<'_>],
) -> Result<()>
where
    S: Sink + ?Sized,
    N: NullPredicate + ?Sized,
{
    write_row_at(sink, nulls, spec, row, 0)
}

fn write_row_at<S, N>(
    sink: &mut S,
    nulls: &N,
    spec: &[Field],
    row: &[CellValue<'_>],
    index: usize,
) -> Result<()>
where
    S: Sink + ?Sized,
    N: NullPredicate + ?Sized,
{
    if row.len() != spec.len() {
        return Err(FieldError::RowShape {
            row: index,
            expected: spec.len(),
            actual: row.len(),
        });
    }
    for (field, value) in spec.iter().zip(row) {
        match field.kind {
            FieldKind::Null => write_null(sink, field.width)?,
            FieldKind::Int => write_int(sink, nulls, value, field.width)?,
            FieldKind::Float => write_float(sink, nulls, value, field.width)?,
            FieldKind::Text => write_text(sink, nulls, value, field.width)?,
        }
    }
    Ok(())
}

/// Writes `numrows` rows separated by newlines, no trailing newline.
///
/// Rows beyond `rows.len()` are written as blank lines spanning the spec's
/// total width, so the output always has exactly `numrows` lines.
pub fn write_table<S, N>(
    sink: &mut S,
    nulls: &N,
    spec: &[Field],
    rows: &[Vec<CellValue<'_>>],
    numrows: usize,
) -> Result<()>
where
    S: Sink + ?Sized,
    N: NullPredicate + ?Sized,
{
    for index in 0..numrows {
        if index > 0 {
            sink.write("\n")?;
        }
        match rows.get(index) {
            Some(row) => write_row_at(sink, nulls, spec, row, index)?,
            None => {
                for field in spec {
                    write_null(sink, field.width)?;
                }
            }
        }
    }
    Ok(())
}
