//! Adaptive-precision numeric rendering.
//!
//! A double's natural decimal rendering has unbounded length, but the output
//! cell is fixed. The renderer starts from a significant-digit budget of
//! `width - 2` (leaving room for a sign and a decimal point) and shrinks it
//! by the measured overflow until the result fits, giving up after six
//! attempts. Whole numbers first try the more readable one-decimal form
//! (`"3.0"` rather than `"3"`).
//!
//! The significant-digit formatting follows the classic printf `%g` scheme:
//! scientific notation when the decimal exponent falls outside
//! `[-4, precision)`, fixed notation otherwise, trailing zeros stripped, and
//! the exponent printed with a sign and at least two digits.

use crate::error::{FieldError, Result};

/// Widest numeric cell the renderer supports.
pub const MAX_NUMERIC_WIDTH: usize = 20;

/// Token substituted when a double cannot be made to fit.
pub const FAILURE_TOKEN: &str = "INVALID";

const MAX_TRIES: u32 = 6;

/// Renders a double as an exactly `width`-byte right-justified cell.
///
/// Fails only when formatting gives up and [`FAILURE_TOKEN`] itself does not
/// fit `width`; in that case nothing sensible can occupy the cell.
pub fn float_cell(d: f64, width: usize) -> Result<String> {
    debug_assert!(width >= 1 && width <= MAX_NUMERIC_WIDTH);
    let body = format_double(d, width)?;
    Ok(right_justify(&body, width))
}

/// Renders an integer as an exactly `width`-byte right-justified cell.
///
/// The decimal rendering is clipped to its first `width` characters, so an
/// integer wider than the cell loses its trailing digits.
pub fn int_cell(i: i64, width: usize) -> String {
    debug_assert!(width >= 1 && width <= MAX_NUMERIC_WIDTH);
    let mut digits = i.to_string();
    digits.truncate(width);
    right_justify(&digits, width)
}

/// Left-pads `value` with ASCII spaces to exactly `width` bytes.
///
/// Callers must guarantee `value.len() <= width`.
pub(crate) fn right_justify(value: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    for _ in value.len()..width {
        out.push(' ');
    }
    out.push_str(value);
    out
}

fn is_whole(d: f64) -> bool {
    d.ceil() == d
}

fn format_double(d: f64, width: usize) -> Result<String> {
    if is_whole(d) {
        // favor the readable one-decimal form when it fits
        let fixed = format!("{:.1}", d);
        if fixed.len() <= width {
            return Ok(fixed);
        }
    }
    format_decimal(d, width)
}

fn format_decimal(d: f64, width: usize) -> Result<String> {
    // leave room for a sign and a decimal point
    let mut precision = width as i32 - 2;
    let mut rendered = format_general(d, precision);
    let mut tries = 0;
    loop {
        let excess = rendered.len() as i32 - width as i32;
        if excess <= 0 {
            return Ok(rendered);
        }
        tries += 1;
        if tries == MAX_TRIES || precision == 0 {
            break;
        }
        precision -= excess;
        rendered = format_general(d, precision);
    }
    if FAILURE_TOKEN.len() <= width {
        Ok(FAILURE_TOKEN.to_string())
    } else {
        Err(FieldError::Unrepresentable { width })
    }
}

/// printf `%.*g` equivalent with `precision` significant digits.
///
/// A negative precision means the printf default of six digits; zero means
/// one.
fn format_general(d: f64, precision: i32) -> String {
    if !d.is_finite() {
        return d.to_string();
    }
    let digits = match precision {
        p if p < 0 => 6usize,
        0 => 1,
        p => p as usize,
    };
    // Rounding to `digits` significant digits also determines the decimal
    // exponent, which picks fixed vs. scientific notation.
    let sci = format!("{:.*e}", digits - 1, d);
    let (mantissa, exp_digits) = match sci.split_once('e') {
        Some(parts) => parts,
        // unreachable for finite doubles
        None => return sci,
    };
    let exp: i32 = exp_digits.parse().unwrap_or(0);
    if exp >= -4 && exp < digits as i32 {
        let decimals = (digits as i32 - 1 - exp) as usize;
        strip_fraction_zeros(format!("{:.*}", decimals, d))
    } else {
        let mantissa = strip_fraction_zeros(mantissa.to_string());
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

fn strip_fraction_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
