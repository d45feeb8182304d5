//! Scroll frame source
//!
//! A 16-column window slides across a bitmap; each window position is one
//! frame. `ScrollFrames` yields those frames in order and holds no hardware,
//! so a driving loop decides how to show them and when to stop.
//!
//! Window start positions:
//! - Left: `0, 1, ..., len - 16`
//! - Right: `len - 16, len - 17, ..., -16`
//!
//! Columns of the window that fall outside the bitmap are blank.
//! The bitmap is any [`ColumnSource`], so rendered text scrolls without
//! first being copied into a buffer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::framebuffer::COLS;

/// One screenful of column bytes
pub type Frame = [u8; COLS];

/// Direction the content travels across the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScrollDirection {
    /// Content moves right to left (window start ascends)
    #[default]
    Left,
    /// Content moves left to right (window start descends)
    Right,
}

/// Anything that can be read as a run of column bytes
///
/// Implemented for byte slices and arrays, and for rendered text, which
/// computes its columns on demand.
pub trait ColumnSource {
    /// Number of columns
    fn column_count(&self) -> usize;

    /// Column byte at `index` (`index < column_count()`)
    fn column_at(&self, index: usize) -> u8;
}

impl<T: AsRef<[u8]> + ?Sized> ColumnSource for T {
    fn column_count(&self) -> usize {
        self.as_ref().len()
    }

    fn column_at(&self, index: usize) -> u8 {
        self.as_ref().get(index).copied().unwrap_or(0)
    }
}

/// Finite, restartable sequence of scroll frames
#[derive(Debug, Clone)]
pub struct ScrollFrames<S> {
    source: S,
    direction: ScrollDirection,
    /// Window start of the next frame
    next_start: isize,
    /// Frames left to yield
    remaining: usize,
}

impl<S: ColumnSource> ScrollFrames<S> {
    /// Create a frame source over `source`
    pub fn new(source: S, direction: ScrollDirection) -> Self {
        let mut frames = Self {
            source,
            direction,
            next_start: 0,
            remaining: 0,
        };
        frames.reset();
        frames
    }

    /// Rewind to the first frame
    pub fn reset(&mut self) {
        let len = self.source.column_count();
        let last_start = len as isize - COLS as isize;
        match self.direction {
            ScrollDirection::Left => {
                self.next_start = 0;
                self.remaining = if last_start < 0 {
                    0
                } else {
                    last_start as usize + 1
                };
            }
            ScrollDirection::Right => {
                self.next_start = last_start;
                // last_start down to -COLS inclusive
                self.remaining = len + 1;
            }
        }
    }

    /// Direction of this scroll
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Window start of the frame the next call to `next` yields
    pub fn next_start(&self) -> Option<isize> {
        (self.remaining > 0).then_some(self.next_start)
    }

    /// Build the frame whose window begins at `start`
    pub fn frame_at(&self, start: isize) -> Frame {
        let len = self.source.column_count();
        let mut frame = [0; COLS];
        for (offset, column) in frame.iter_mut().enumerate() {
            let index = start + offset as isize;
            *column = usize::try_from(index)
                .ok()
                .filter(|&index| index < len)
                .map_or(0, |index| self.source.column_at(index));
        }
        frame
    }
}

impl<S: ColumnSource> Iterator for ScrollFrames<S> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let start = self.next_start()?;
        let frame = self.frame_at(start);

        self.remaining -= 1;
        self.next_start = match self.direction {
            ScrollDirection::Left => start + 1,
            ScrollDirection::Right => start - 1,
        };

        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: ColumnSource> ExactSizeIterator for ScrollFrames<S> {}
