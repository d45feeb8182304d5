//! Shape rasterization onto a frame buffer
//!
//! These only touch bits; pushing the result to the panel is left to the
//! caller so a whole shape costs a single refresh. Shapes are clipped to the
//! panel silently, and coordinates may be negative.

use crate::framebuffer::{FrameBuffer, COLS, ROWS};

/// Clip the half-open span `[start, start + len)` to `[0, limit)`
///
/// Works in `i32` so spans longer than `i16::MAX` still clip correctly.
fn clip(start: i16, len: i32, limit: usize) -> core::ops::Range<i16> {
    let end = (i32::from(start) + len).min(limit as i32);
    let start = i32::from(start).max(0);
    if end <= start {
        return 0..0;
    }
    start as i16..end as i16
}

/// Set every pixel of the rectangle at column `x`, row `y`
pub fn fill_rect(buffer: &mut FrameBuffer, x: i16, y: i16, width: i16, height: i16, on: bool) {
    for col in clip(x, width.into(), COLS) {
        for row in clip(y, height.into(), ROWS) {
            // Clipped coordinates are always in range
            let _ = buffer.set(row, col, on);
        }
    }
}

/// First coordinate and length of the inclusive span between `a` and `b`
fn span(a: i16, b: i16) -> (i16, i32) {
    let first = a.min(b);
    (first, i32::from(a.max(b)) - i32::from(first) + 1)
}

/// Light the pixels of an axis-aligned segment, both ends included
///
/// Returns `false` without touching the buffer when the segment is
/// diagonal (neither row nor column shared).
pub fn line(
    buffer: &mut FrameBuffer,
    start_row: i16,
    start_col: i16,
    end_row: i16,
    end_col: i16,
) -> bool {
    if start_row == end_row {
        let (first, len) = span(start_col, end_col);
        for col in clip(first, len, COLS) {
            let _ = buffer.set(start_row, col, true);
        }
        true
    } else if start_col == end_col {
        let (first, len) = span(start_row, end_row);
        for row in clip(first, len, ROWS) {
            let _ = buffer.set(row, start_col, true);
        }
        true
    } else {
        false
    }
}
