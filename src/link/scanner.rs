//! Field scanner: pulls successive unsigned integers out of a frame body.
//!
//! A frame body looks like `01,01,02`: decimal fields separated by `,`.
//! The scanner is a pure function over `(buffer, cursor)`, so the
//! dispatcher can walk a frame without copying it.
//!
//! The end of the slice and an embedded NUL byte both count as the
//! terminator.

/// Separator between fields.
pub const FIELD_SEPARATOR: u8 = b',';

/// Terminator byte inside a buffer (the slice end is also a terminator).
const TERMINATOR: u8 = 0;

/// Read the next field starting at `cursor`.
///
/// Skips any run of separators, then accumulates ASCII digits as a
/// base-10 `u32` with wrapping arithmetic. Returns the value and the
/// cursor just past the last digit consumed.
///
/// Returns `None` at the terminator, and also when no digit follows the
/// separators. A literal `0` field is always `Some(0)`, so "absent" and
/// "zero" are never confused.
pub fn scan_next(buf: &[u8], cursor: usize) -> Option<(u32, usize)> {
    let at = |i: usize| buf.get(i).copied().unwrap_or(TERMINATOR);

    if at(cursor) == TERMINATOR {
        return None;
    }

    let mut pos = cursor;
    while at(pos) == FIELD_SEPARATOR {
        pos += 1;
    }

    let digits_start = pos;
    let mut value: u32 = 0;
    while at(pos).is_ascii_digit() {
        value = value
            .wrapping_mul(10)
            .wrapping_add(u32::from(at(pos) - b'0'));
        pos += 1;
    }

    if pos == digits_start {
        return None;
    }

    Some((value, pos))
}

/// Iterator adapter over [`scan_next`].
///
/// The cursor never moves past a missing field, so once `next` returns
/// `None` every later call does too.
pub struct Fields<'a> {
    buf: &'a [u8],
    cursor: usize,
}

impl<'a> Fields<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, cursor: 0 }
    }
}

impl Iterator for Fields<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let (value, next) = scan_next(self.buf, self.cursor)?;
        self.cursor = next;
        Some(value)
    }
}
