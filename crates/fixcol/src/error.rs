//! Error types for field and table encoding.

use thiserror::Error;

/// Outcome code reported for a successful write.
///
/// See [`FieldError::outcome`] for the failure codes.
pub const OUTCOME_SUCCESS: i32 = 1;

/// Failure writing a rendered cell to a [`Sink`](crate::Sink).
#[derive(Debug, Error)]
#[error("sink write failed: {0}")]
pub struct SinkError(String);

impl SinkError {
    /// Creates a sink error with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        SinkError(msg.into())
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError(err.to_string())
    }
}

/// Errors that can occur when encoding a field or table.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Width is zero or exceeds the ceiling for the requested kind.
    #[error("field width must be between 1 and {max}, got {width}")]
    InvalidWidth { width: usize, max: usize },

    /// The value's runtime kind does not match the writer it was passed to.
    #[error("expected a {expected} value, got {actual}")]
    WrongKind {
        expected: &'static str,
        actual: &'static str,
    },

    /// A float could not be converted to a 64-bit integer.
    #[error("float value {value} cannot be converted to a 64-bit integer")]
    IntOutOfRange { value: f64 },

    /// Numeric formatting gave up and the failure token does not fit either.
    #[error("numeric value cannot be represented in {width} characters")]
    Unrepresentable { width: usize },

    /// A table row's length does not match the field spec.
    #[error("row {row} has {actual} values but the spec has {expected} fields")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The sink rejected the rendered cell.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl FieldError {
    /// Stable integer outcome code for callers that track results numerically.
    ///
    /// Successful writes are [`OUTCOME_SUCCESS`] (`1`). Failures map to:
    ///
    /// | Code | Meaning |
    /// |------|---------|
    /// | `0`  | invalid width |
    /// | `-2` | value could not be encoded |
    /// | `-3` | sink write failed |
    ///
    /// `-1` is reserved for a missing collaborator; with collaborators passed
    /// as trait references it cannot occur.
    pub fn outcome(&self) -> i32 {
        match self {
            FieldError::InvalidWidth { .. } => 0,
            FieldError::Sink(_) => -3,
            _ => -2,
        }
    }
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, FieldError>;
