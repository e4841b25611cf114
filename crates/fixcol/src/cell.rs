//! Text and blank cell encoding.

/// Widest text or blank cell the encoder supports.
pub const MAX_TEXT_WIDTH: usize = 200;

/// Pads or truncates `text` to an exactly `width`-byte cell.
///
/// Short text is left-justified and space-padded. Long text is truncated to
/// the first `width` bytes; the cut never splits a multi-byte character, it
/// backs up to the nearest character boundary and space-fills the remainder,
/// so the result is always valid UTF-8 of exactly `width` bytes.
pub fn text_cell(text: &str, width: usize) -> String {
    debug_assert!(width >= 1 && width <= MAX_TEXT_WIDTH);
    let mut out = String::with_capacity(width);
    if text.len() >= width {
        let mut end = width;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        out.push_str(&text[..end]);
    } else {
        out.push_str(text);
    }
    while out.len() < width {
        out.push(' ');
    }
    out
}

/// Produces a `width`-byte blank cell.
pub fn blank_cell(width: usize) -> String {
    " ".repeat(width)
}
