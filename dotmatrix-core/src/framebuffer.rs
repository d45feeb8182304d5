//! Frame buffer for the 8x16 matrix
//!
//! Sixteen bytes, one per hardware column, mirroring the controller's
//! display memory. Bit `row` of byte `col` is the pixel at `(row, col)`.
//! This is the only addressing convention; row-indexed bytes are never used.

/// Number of pixel rows
pub const ROWS: usize = 8;

/// Number of pixel columns (and hardware columns)
pub const COLS: usize = 16;

/// Row-major 8x16 image; any non-zero cell is a lit pixel
pub type Image = [[u8; COLS]; ROWS];

/// Rejected pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelError {
    /// Row outside 0..8
    RowOutOfRange,
    /// Column outside 0..16
    ColumnOutOfRange,
}

/// In-memory copy of the controller's display memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBuffer([u8; COLS]);

impl FrameBuffer {
    /// Create an all-dark buffer
    pub const fn new() -> Self {
        Self([0; COLS])
    }

    /// Create a buffer from raw column bytes
    pub const fn from_columns(columns: [u8; COLS]) -> Self {
        Self(columns)
    }

    /// Map a logical coordinate to (byte index, bit mask)
    fn locate(row: i16, col: i16) -> Result<(usize, u8), PixelError> {
        if !(0..ROWS as i16).contains(&row) {
            return Err(PixelError::RowOutOfRange);
        }
        if !(0..COLS as i16).contains(&col) {
            return Err(PixelError::ColumnOutOfRange);
        }
        Ok((col as usize, 1 << row))
    }

    /// Read the pixel at `(row, col)`
    pub fn get(&self, row: i16, col: i16) -> Result<bool, PixelError> {
        let (index, mask) = Self::locate(row, col)?;
        Ok(self.0[index] & mask != 0)
    }

    /// Light or clear the pixel at `(row, col)`
    ///
    /// Out-of-range coordinates leave the buffer untouched.
    pub fn set(&mut self, row: i16, col: i16, on: bool) -> Result<(), PixelError> {
        let (index, mask) = Self::locate(row, col)?;
        if on {
            self.0[index] |= mask;
        } else {
            self.0[index] &= !mask;
        }
        Ok(())
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.0 = [0; COLS];
    }

    /// Overwrite the whole buffer from a row-major image
    pub fn load_image(&mut self, image: &Image) {
        for (col, byte) in self.0.iter_mut().enumerate() {
            *byte = image
                .iter()
                .enumerate()
                .filter(|(_, cells)| cells[col] != 0)
                .fold(0, |acc, (row, _)| acc | (1 << row));
        }
    }

    /// Overwrite the whole buffer with raw column bytes
    pub fn load_columns(&mut self, columns: &[u8; COLS]) {
        self.0 = *columns;
    }

    /// Raw column bytes, in hardware address order
    pub fn columns(&self) -> &[u8; COLS] {
        &self.0
    }

    /// Raw byte of one hardware column
    pub fn column(&self, col: usize) -> Option<u8> {
        self.0.get(col).copied()
    }

    /// True when no pixel is lit
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&byte| byte == 0)
    }
}
