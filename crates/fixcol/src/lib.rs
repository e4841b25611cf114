//! fixcol - fixed-width field and table encoding.
//!
//! fixcol turns scalar values (floats, integers, text, nulls) into cells of
//! an exact character width, the building block of fixed-width columnar text
//! formats. Numbers are right-justified with adaptive precision: a double's
//! decimal rendering is shortened, significant digit by significant digit,
//! until it fits the cell. Text is left-justified, padded or truncated to
//! the byte. Nulls blank the cell.
//!
//! # Quick Start
//!
//! ```rust
//! use fixcol::{write_float, write_int, write_text, CellValue, StandardNulls};
//!
//! let mut out = String::new();
//! write_int(&mut out, &StandardNulls, &CellValue::Int(42), 5).unwrap();
//! write_float(&mut out, &StandardNulls, &CellValue::Float(3.14159265), 10).unwrap();
//! write_text(&mut out, &StandardNulls, &CellValue::Text("hello"), 8).unwrap();
//! assert_eq!(out, "   42 3.1415927hello   ");
//! ```
//!
//! # Tables
//!
//! Whole tables are written against a field spec, one [`Field`] per column:
//!
//! ```rust
//! use fixcol::{write_table, CellValue, Field, FieldKind, StandardNulls};
//!
//! let spec = [Field::new(FieldKind::Int, 6), Field::new(FieldKind::Float, 10)];
//! let rows = vec![
//!     vec![CellValue::Int(1), CellValue::Float(0.5)],
//!     vec![CellValue::Int(2), CellValue::Float(f64::NAN)],
//! ];
//!
//! let mut out = String::new();
//! write_table(&mut out, &StandardNulls, &spec, &rows, 2).unwrap();
//! assert_eq!(out, "     1       0.5\n     2          ");
//! ```
//!
//! # Collaborators
//!
//! Output goes to any [`Sink`] (`String`, `Vec<u8>`, or [`IoSink`] around an
//! `io::Write`); a [`NullPredicate`] decides which values render blank.
//! [`StandardNulls`] treats the `Null` variant and NaN floats as null; any
//! closure over `&CellValue` works too.
//!
//! # Widths
//!
//! Every cell is exactly as wide as requested, even on failure. Numeric
//! cells support widths 1 to [`MAX_NUMERIC_WIDTH`]; text and blank cells up
//! to [`MAX_TEXT_WIDTH`]. A double that cannot fit is replaced by the
//! [`FAILURE_TOKEN`]; when not even the token fits, the write fails with an
//! encode error rather than producing a short cell.

pub mod cell;
pub mod error;
pub mod numeric;
pub mod table;
pub mod traits;
pub mod value;
pub mod writer;

pub use cell::{blank_cell, text_cell, MAX_TEXT_WIDTH};
pub use error::{FieldError, Result, SinkError, OUTCOME_SUCCESS};
pub use numeric::{float_cell, int_cell, FAILURE_TOKEN, MAX_NUMERIC_WIDTH};
pub use table::{write_row, write_table, Field, FieldKind};
pub use traits::{IoSink, NullPredicate, Sink, StandardNulls};
pub use value::CellValue;
pub use writer::{write_float, write_int, write_null, write_text};
