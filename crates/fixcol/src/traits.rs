//! Collaborator traits: output sinks and null classification.
//!
//! The field writers are generic over two collaborators. A [`Sink`] receives
//! each rendered cell; a [`NullPredicate`] decides which values render as a
//! blank cell instead of being formatted. Both have ready-made
//! implementations ([`String`]/[`Vec<u8>`] sinks, the [`IoSink`] adapter,
//! [`StandardNulls`], and any closure as a predicate), but callers can
//! implement them for their own destinations and null rules.

use std::io;

use crate::error::SinkError;
use crate::value::CellValue;

/// Destination for rendered fixed-width cells.
pub trait Sink {
    /// Writes one rendered cell or separator.
    ///
    /// There are no partial-write semantics: a failure is terminal for the
    /// current field.
    fn write(&mut self, text: &str) -> Result<(), SinkError>;
}

impl Sink for String {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        self.push_str(text);
        Ok(())
    }
}

impl Sink for Vec<u8> {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        self.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

/// Adapter exposing any [`io::Write`] as a [`Sink`].
///
/// # Example
///
/// ```
/// use fixcol::{IoSink, Sink};
///
/// let mut sink = IoSink::new(Vec::new());
/// sink.write("   42").unwrap();
/// assert_eq!(sink.into_inner(), b"   42");
/// ```
#[derive(Debug)]
pub struct IoSink<W>(W);

impl<W: io::Write> IoSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        IoSink(writer)
    }

    /// Consumes the adapter, returning the wrapped writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        self.0.write_all(text.as_bytes()).map_err(SinkError::from)
    }
}

/// Classifies values that should render as a blank cell.
pub trait NullPredicate {
    /// Returns `true` if `value` should render as spaces.
    fn is_null(&self, value: &CellValue<'_>) -> bool;
}

/// Default null rule: the `Null` variant and NaN floats are null.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNulls;

impl NullPredicate for StandardNulls {
    fn is_null(&self, value: &CellValue<'_>) -> bool {
        match *value {
            CellValue::Null => true,
            CellValue::Float(d) => d.is_nan(),
            _ => false,
        }
    }
}

impl<F> NullPredicate for F
where
    F: Fn(&CellValue<'_>) -> bool,
{
    fn is_null(&self, value: &CellValue<'_>) -> bool {
        self(value)
    }
}
