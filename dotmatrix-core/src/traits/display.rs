//! Display trait for the 8x16 matrix
//!
//! A driver only has to expose its frame buffer, push it to the panel and
//! pause. Pixels, shapes, images and scrolling text come from the blanket
//! [`MatrixDisplayExt`] implementation.

use crate::config::ScrollConfig;
use crate::framebuffer::{FrameBuffer, Image};
use crate::scroll::{ColumnSource, Frame, ScrollDirection, ScrollFrames};
use crate::shapes;

/// Trait for an 8x16 matrix with a frame buffer
///
/// Implementors own the buffer exclusively; `refresh` must send the whole
/// buffer as one uninterrupted update.
pub trait MatrixDisplay {
    /// Current frame buffer contents
    fn frame_buffer(&self) -> &FrameBuffer;

    /// Mutable access to the frame buffer (does not refresh)
    fn frame_buffer_mut(&mut self) -> &mut FrameBuffer;

    /// Push the frame buffer to the panel
    fn refresh(&mut self);

    /// Block for `ms` milliseconds
    fn pause_ms(&mut self, ms: u32);
}

/// Drawing and animation on top of [`MatrixDisplay`]
///
/// Every operation refreshes at most once, after all its pixels are set.
/// Nothing here fails: bad coordinates are logged and ignored.
pub trait MatrixDisplayExt: MatrixDisplay {
    /// Light or clear one pixel, then refresh
    ///
    /// Out-of-range coordinates change nothing and skip the refresh.
    fn set_pixel(&mut self, row: i16, col: i16, on: bool) {
        match self.frame_buffer_mut().set(row, col, on) {
            Ok(()) => self.refresh(),
            Err(e) => warn!("pixel ({}, {}) out of bounds: {}", row, col, e),
        }
    }

    /// Read one pixel; out-of-range coordinates read as dark
    fn pixel(&self, row: i16, col: i16) -> bool {
        self.frame_buffer().get(row, col).unwrap_or_else(|e| {
            warn!("pixel ({}, {}) out of bounds: {}", row, col, e);
            false
        })
    }

    /// Turn every pixel off and refresh
    fn clear(&mut self) {
        self.frame_buffer_mut().clear();
        self.refresh();
    }

    /// Fill a rectangle with `on`, clipped to the panel, then refresh once
    ///
    /// `x` is the left column, `y` the top row.
    fn draw_rectangle(&mut self, x: i16, y: i16, width: i16, height: i16, on: bool) {
        shapes::fill_rect(self.frame_buffer_mut(), x, y, width, height, on);
        self.refresh();
    }

    /// Light a horizontal or vertical segment, then refresh once
    ///
    /// Diagonal segments are ignored entirely (no pixels, no refresh).
    fn draw_line(&mut self, start_row: i16, start_col: i16, end_row: i16, end_col: i16) {
        if shapes::line(
            self.frame_buffer_mut(),
            start_row,
            start_col,
            end_row,
            end_col,
        ) {
            self.refresh();
        } else {
            debug!(
                "diagonal line ({}, {}) -> ({}, {}) ignored",
                start_row,
                start_col,
                end_row,
                end_col
            );
        }
    }

    /// Replace the whole panel with an image, then refresh once
    fn draw_image(&mut self, image: &Image) {
        self.frame_buffer_mut().load_image(image);
        self.refresh();
    }

    /// Show each frame in turn, pausing `frame_delay_ms` after each
    ///
    /// Returns the number of frames shown. Stop early by limiting the
    /// iterator (`take`, `take_while`).
    fn scroll_frames<I>(&mut self, frames: I, frame_delay_ms: u32) -> usize
    where
        I: IntoIterator<Item = Frame>,
    {
        let mut shown = 0;
        for frame in frames {
            self.frame_buffer_mut().load_columns(&frame);
            self.refresh();
            self.pause_ms(frame_delay_ms);
            shown += 1;
        }
        shown
    }

    /// Slide a 16-column window across any column source
    fn scroll_columns<S: ColumnSource>(
        &mut self,
        columns: S,
        frame_delay_ms: u32,
        direction: ScrollDirection,
    ) {
        let frames = ScrollFrames::new(columns, direction);
        debug!("scrolling {} frames", frames.len());
        let shown = self.scroll_frames(frames, frame_delay_ms);
        trace!("scroll done after {} frames", shown);
    }

    /// Slide a 16-column window across `bitmap`
    fn scroll_bitmap(&mut self, bitmap: &[u8], frame_delay_ms: u32, direction: ScrollDirection) {
        self.scroll_columns(bitmap, frame_delay_ms, direction);
    }

    /// Render `text` and scroll it across the panel
    ///
    /// Blocks until the text has fully passed. Text of any length is shown
    /// in full.
    fn scroll_text(&mut self, text: &str, frame_delay_ms: u32, direction: ScrollDirection) {
        self.scroll_columns(crate::text::render(text), frame_delay_ms, direction);
    }

    /// Scroll `text` with pacing and direction taken from `config`
    fn scroll_text_with(&mut self, text: &str, config: &ScrollConfig) {
        self.scroll_text(text, config.frame_delay_ms, config.direction);
    }
}

// Blanket implementation for all MatrixDisplay types
impl<T: MatrixDisplay + ?Sized> MatrixDisplayExt for T {}
