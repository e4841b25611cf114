//! Field dispatch: validate, classify null, render, write.
//!
//! Each writer runs the same linear pipeline and short-circuits on the first
//! failure: validate the width against the kind's ceiling, ask the null
//! predicate (null values blank the cell regardless of kind), render the
//! value, hand the fixed-width cell to the sink. On any failure the sink
//! receives nothing for the field.
//!
//! Errors carry a stable integer code via [`FieldError::outcome`] for
//! callers that track results numerically; `Ok(())` corresponds to
//! [`OUTCOME_SUCCESS`](crate::OUTCOME_SUCCESS).

use crate::cell::{blank_cell, text_cell, MAX_TEXT_WIDTH};
use crate::error::{FieldError, Result};
use crate::numeric::{float_cell, int_cell, MAX_NUMERIC_WIDTH};
use crate::traits::{NullPredicate, Sink};
use crate::value::CellValue;

fn check_width(width: usize, max: usize) -> Result<()> {
    if width < 1 || width > max {
        return Err(FieldError::InvalidWidth { width, max });
    }
    Ok(())
}

fn write_blank<S: Sink + ?Sized>(sink: &mut S, width: usize) -> Result<()> {
    sink.write(&blank_cell(width))?;
    Ok(())
}

/// Writes a float as a right-justified `width`-character cell.
///
/// The value must be [`CellValue::Float`] unless the null predicate claims
/// it, in which case the cell is blanked. Width ceiling:
/// [`MAX_NUMERIC_WIDTH`].
pub fn write_float<S, N>(
    sink: &mut S,
    nulls: &N,
    value: &CellValue<'_>,
    width: usize,
) -> Result<()>
where
    S: Sink + ?Sized,
    N: NullPredicate + ?Sized,
{
    check_width(width, MAX_NUMERIC_WIDTH)?;
    if nulls.is_null(value) {
        return write_blank(sink, width);
    }
    let d = value.as_float().ok_or(FieldError::WrongKind {
        expected: "float",
        actual: value.kind(),
    })?;
    sink.write(&float_cell(d, width)?)?;
    Ok(())
}

/// Writes an integer as a right-justified `width`-character cell.
///
/// Accepts [`CellValue::Int`] directly; a float is converted with
/// [`CellValue::try_to_int`] (truncation toward zero). Width ceiling:
/// [`MAX_NUMERIC_WIDTH`].
pub fn write_int<S, N>(
    sink: &mut S,
    nulls: &N,
    value: &CellValue<'_>,
    width: usize,
) -> Result<()>
where
    S: Sink + ?Sized,
    N: NullPredicate + ?Sized,
{
    check_width(width, MAX_NUMERIC_WIDTH)?;
    if nulls.is_null(value) {
        return write_blank(sink, width);
    }
    let i = value.try_to_int()?;
    sink.write(&int_cell(i, width))?;
    Ok(())
}

/// Writes text as a left-justified, space-padded or truncated
/// `width`-byte cell.
///
/// The value must be [`CellValue::Text`] unless the null predicate claims
/// it. Width ceiling: [`MAX_TEXT_WIDTH`].
pub fn write_text<S, N>(
    sink: &mut S,
    nulls: &N,
    value: &CellValue<'_>,
    width: usize,
) -> Result<()>
where
    S: Sink + ?Sized,
    N: NullPredicate + ?Sized,
{
    check_width(width, MAX_TEXT_WIDTH)?;
    if nulls.is_null(value) {
        return write_blank(sink, width);
    }
    let s = value.as_text().ok_or(FieldError::WrongKind {
        expected: "text",
        actual: value.kind(),
    })?;
    sink.write(&text_cell(s, width))?;
    Ok(())
}

/// Writes a `width`-character blank cell. No value is inspected.
pub fn write_null<S: Sink + ?Sized>(sink: &mut S, width: usize) -> Result<()> {
    check_width(width, MAX_TEXT_WIDTH)?;
    write_blank(sink, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use crate::traits::StandardNulls;

    struct BrokenSink;

    impl Sink for BrokenSink {
        fn write(&mut self, _text: &str) -> std::result::Result<(), SinkError> {
            Err(SinkError::new("sink is closed"))
        }
    }

    #[test]
    fn int_cell_scenario() {
        let mut out = String::new();
        write_int(&mut out, &StandardNulls, &CellValue::Int(42), 5).unwrap();
        assert_eq!(out, "   42");
    }

    #[test]
    fn float_cell_scenarios() {
        let mut out = String::new();
        write_float(&mut out, &StandardNulls, &CellValue::Float(3.0), 3).unwrap();
        assert_eq!(out, "3.0");

        let mut out = String::new();
        write_float(&mut out, &StandardNulls, &CellValue::Float(3.14159265), 6).unwrap();
        assert_eq!(out, " 3.142");
    }

    #[test]
    fn text_cell_scenarios() {
        let mut out = String::new();
        write_text(&mut out, &StandardNulls, &CellValue::Text("hello"), 8).unwrap();
        assert_eq!(out, "hello   ");

        let mut out = String::new();
        write_text(&mut out, &StandardNulls, &CellValue::Text("hello world"), 5).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn null_cell_scenario() {
        let mut out = String::new();
        write_null(&mut out, 4).unwrap();
        assert_eq!(out, "    ");
    }

    #[test]
    fn zero_width_never_touches_the_sink() {
        let mut out = String::new();
        let err = write_float(&mut out, &StandardNulls, &CellValue::Float(42.0), 0).unwrap_err();
        assert_eq!(err.outcome(), 0);
        assert!(out.is_empty());

        let err = write_null(&mut out, 0).unwrap_err();
        assert_eq!(err.outcome(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn numeric_width_ceiling() {
        let mut out = String::new();
        let err = write_float(&mut out, &StandardNulls, &CellValue::Float(1.0), 21).unwrap_err();
        assert!(matches!(err, FieldError::InvalidWidth { width: 21, max: 20 }));
        assert!(write_int(&mut out, &StandardNulls, &CellValue::Int(1), 21).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn boundary_widths_do_not_panic() {
        for width in [1usize, 20] {
            let mut out = String::new();
            write_int(&mut out, &StandardNulls, &CellValue::Int(7), width).unwrap();
            assert_eq!(out.len(), width);
        }
    }

    #[test]
    fn nulls_blank_the_cell_for_every_kind() {
        let mut out = String::new();
        write_float(&mut out, &StandardNulls, &CellValue::Float(f64::NAN), 6).unwrap();
        assert_eq!(out, "      ");

        let mut out = String::new();
        write_int(&mut out, &StandardNulls, &CellValue::Null, 8).unwrap();
        assert_eq!(out, "        ");

        let mut out = String::new();
        write_text(&mut out, &StandardNulls, &CellValue::Null, 3).unwrap();
        assert_eq!(out, "   ");
    }

    #[test]
    fn wrong_kinds_are_encode_errors() {
        let mut out = String::new();
        let err = write_float(&mut out, &StandardNulls, &CellValue::Text("3.0"), 6).unwrap_err();
        assert_eq!(err.outcome(), -2);

        let err = write_text(&mut out, &StandardNulls, &CellValue::Int(3), 6).unwrap_err();
        assert_eq!(err.outcome(), -2);

        let err = write_int(&mut out, &StandardNulls, &CellValue::Text("3"), 6).unwrap_err();
        assert_eq!(err.outcome(), -2);
        assert!(out.is_empty());
    }

    #[test]
    fn int_writer_truncates_floats() {
        let mut out = String::new();
        write_int(&mut out, &StandardNulls, &CellValue::Float(2.9), 4).unwrap();
        assert_eq!(out, "   2");
    }

    #[test]
    fn sink_failure_is_surfaced() {
        let err = write_int(&mut BrokenSink, &StandardNulls, &CellValue::Int(1), 4).unwrap_err();
        assert_eq!(err.outcome(), -3);

        let err = write_null(&mut BrokenSink, 4).unwrap_err();
        assert_eq!(err.outcome(), -3);
    }

    #[test]
    fn custom_null_predicate() {
        let negatives_are_null =
            |value: &CellValue<'_>| matches!(value, CellValue::Int(i) if *i < 0);
        let mut out = String::new();
        write_int(&mut out, &negatives_are_null, &CellValue::Int(-5), 4).unwrap();
        assert_eq!(out, "    ");

        let mut out = String::new();
        write_int(&mut out, &negatives_are_null, &CellValue::Int(5), 4).unwrap();
        assert_eq!(out, "   5");
    }
}
