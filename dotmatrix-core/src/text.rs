//! Text to scrollable bitmap rendering
//!
//! A rendered string is a run of column bytes laid out as:
//!
//! ```text
//! ┌──────────┬───────┬───┬───────┬───┬ ... ┬───────┬──────────┐
//! │ 16 blank │ glyph │ 0 │ glyph │ 0 │     │ glyph │ 16 blank │
//! └──────────┴───────┴───┴───────┴───┴ ... ┴───────┴──────────┘
//! ```
//!
//! The blank lead and trail let the text slide fully on and fully off the
//! 16-column panel. There is no separator after the last glyph.
//!
//! Columns are computed from the text on demand, so any length renders
//! without a buffer.

use crate::font::{glyph, GLYPH_WIDTH};
use crate::framebuffer::COLS;
use crate::scroll::ColumnSource;

/// Blank columns before and after the glyphs
pub const PADDING_COLS: usize = COLS;

/// Columns per character: glyph plus separator
const CHAR_STRIDE: usize = GLYPH_WIDTH + 1;

/// Number of columns a text of `chars` characters renders to
pub const fn bitmap_len(chars: usize) -> usize {
    if chars == 0 {
        2 * PADDING_COLS
    } else {
        2 * PADDING_COLS + chars * CHAR_STRIDE - 1
    }
}

/// Composite bitmap of a text, one column byte at a time
#[derive(Debug, Clone, Copy)]
pub struct TextColumns<'a> {
    text: &'a str,
    chars: usize,
}

impl<'a> TextColumns<'a> {
    /// Lay out `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.chars().count(),
        }
    }

    /// The text being rendered
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Total columns, padding included
    pub fn len(&self) -> usize {
        bitmap_len(self.chars)
    }

    /// Always false; even empty text has its padding
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Column byte at `index`; blank past the end
    pub fn column(&self, index: usize) -> u8 {
        if index < PADDING_COLS || index >= self.len() - PADDING_COLS {
            return 0;
        }

        let offset = index - PADDING_COLS;
        let within = offset % CHAR_STRIDE;
        if within == GLYPH_WIDTH {
            // Separator
            return 0;
        }
        self.text
            .chars()
            .nth(offset / CHAR_STRIDE)
            .map_or(0, |ch| glyph(ch)[within])
    }

    /// Every column in order
    pub fn iter(&self) -> impl Iterator<Item = u8> + 'a {
        let padding = core::iter::repeat(0).take(PADDING_COLS);
        let glyphs = self.text.chars().enumerate().flat_map(|(index, ch)| {
            let separator = (index > 0).then_some(0);
            separator.into_iter().chain(glyph(ch).iter().copied())
        });
        padding.clone().chain(glyphs).chain(padding)
    }
}

impl ColumnSource for TextColumns<'_> {
    fn column_count(&self) -> usize {
        self.len()
    }

    fn column_at(&self, index: usize) -> u8 {
        self.column(index)
    }
}

/// Render `text` into a scrollable bitmap
///
/// Characters without a glyph render as blanks.
pub fn render(text: &str) -> TextColumns<'_> {
    let columns = TextColumns::new(text);
    trace!("rendered {} chars to {} columns", columns.chars, columns.len());
    columns
}
