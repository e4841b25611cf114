//! Cell values supplied to the field writers.
//!
//! A [`CellValue`] is a tagged scalar covering the four kinds a fixed-width
//! cell can hold: floats, integers, text, and an explicit null. Text is
//! borrowed from the caller; a value only needs to outlive the write call
//! it is passed to.

use crate::error::{FieldError, Result};

// Smallest f64 strictly above i64's range (2^63).
const I64_MAX_EXCLUSIVE: f64 = 9_223_372_036_854_775_808.0;

/// A single scalar to be encoded into one fixed-width cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// 64-bit floating point value.
    Float(f64),
    /// Signed 64-bit integer value.
    Int(i64),
    /// Text value (valid UTF-8, borrowed).
    Text(&'a str),
    /// Explicitly missing value.
    Null,
}

impl<'a> CellValue<'a> {
    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Float(_) => "float",
            CellValue::Int(_) => "integer",
            CellValue::Text(_) => "text",
            CellValue::Null => "null",
        }
    }

    /// Returns `true` if this is the `Null` variant.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Extracts the float value, if present.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            CellValue::Float(d) => Some(d),
            _ => None,
        }
    }

    /// Extracts the integer value, if present.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            CellValue::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Extracts the text value, if present.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Fallible conversion to a 64-bit integer.
    ///
    /// `Int` passes through unchanged. A finite `Float` within `i64` range
    /// truncates toward zero. Everything else is an encode error.
    pub fn try_to_int(&self) -> Result<i64> {
        match *self {
            CellValue::Int(i) => Ok(i),
            CellValue::Float(d) => {
                if !d.is_finite() {
                    return Err(FieldError::IntOutOfRange { value: d });
                }
                let truncated = d.trunc();
                if truncated < i64::MIN as f64 || truncated >= I64_MAX_EXCLUSIVE {
                    return Err(FieldError::IntOutOfRange { value: d });
                }
                Ok(truncated as i64)
            }
            other => Err(FieldError::WrongKind {
                expected: "integer",
                actual: other.kind(),
            }),
        }
    }
}

impl From<f64> for CellValue<'_> {
    fn from(d: f64) -> Self {
        CellValue::Float(d)
    }
}

impl From<i64> for CellValue<'_> {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue<'_> {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl<'a> From<&'a str> for CellValue<'a> {
    fn from(s: &'a str) -> Self {
        CellValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(CellValue::Float(1.0).kind(), "float");
        assert_eq!(CellValue::Int(1).kind(), "integer");
        assert_eq!(CellValue::Text("a").kind(), "text");
        assert_eq!(CellValue::Null.kind(), "null");
    }

    #[test]
    fn accessors() {
        assert_eq!(CellValue::Float(2.5).as_float(), Some(2.5));
        assert_eq!(CellValue::Float(2.5).as_int(), None);
        assert_eq!(CellValue::Int(7).as_int(), Some(7));
        assert_eq!(CellValue::Text("hi").as_text(), Some("hi"));
        assert!(CellValue::Null.is_null());
        assert!(!CellValue::Int(0).is_null());
    }

    #[test]
    fn try_to_int_passthrough() {
        assert_eq!(CellValue::Int(42).try_to_int().unwrap(), 42);
        assert_eq!(CellValue::Int(-1).try_to_int().unwrap(), -1);
    }

    #[test]
    fn try_to_int_truncates_toward_zero() {
        assert_eq!(CellValue::Float(2.9).try_to_int().unwrap(), 2);
        assert_eq!(CellValue::Float(-2.9).try_to_int().unwrap(), -2);
        assert_eq!(CellValue::Float(0.0).try_to_int().unwrap(), 0);
    }

    #[test]
    fn try_to_int_rejects_non_finite() {
        assert!(CellValue::Float(f64::NAN).try_to_int().is_err());
        assert!(CellValue::Float(f64::INFINITY).try_to_int().is_err());
    }

    #[test]
    fn try_to_int_rejects_out_of_range() {
        assert!(CellValue::Float(1e19).try_to_int().is_err());
        assert!(CellValue::Float(-1e19).try_to_int().is_err());
        // Exactly representable boundary
        assert_eq!(
            CellValue::Float(i64::MIN as f64).try_to_int().unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn try_to_int_rejects_text_and_null() {
        assert!(CellValue::Text("3").try_to_int().is_err());
        assert!(CellValue::Null.try_to_int().is_err());
    }

    #[test]
    fn from_impls() {
        assert_eq!(CellValue::from(1.5), CellValue::Float(1.5));
        assert_eq!(CellValue::from(3i64), CellValue::Int(3));
        assert_eq!(CellValue::from(3i32), CellValue::Int(3));
        assert_eq!(CellValue::from("x"), CellValue::Text("x"));
    }
}
