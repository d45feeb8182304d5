//! Driver for 8x16 dot-matrix LED panels
//!
//! This crate ties the board-agnostic pieces together:
//!
//! - [`transport`]: bit-banged two-wire framing over two output pins
//! - [`matrix`]: the [`LedMatrix`] driver implementing
//!   [`MatrixDisplay`](dotmatrix_core::MatrixDisplay)
//!
//! ```ignore
//! use dotmatrix_drivers::prelude::*;
//!
//! let mut matrix = LedMatrix::new(
//!     EhOutputPin::new(clk),
//!     EhOutputPin::new(dio),
//!     EhDelay::new(delay),
//! );
//! matrix.draw_rectangle(2, 2, 4, 3, true);
//! matrix.scroll_text("HELLO", 100, ScrollDirection::Left);
//! ```

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod matrix;
pub mod transport;

#[cfg(test)]
mod testing;

pub use matrix::LedMatrix;
pub use transport::Transport;

/// Everything needed to drive a panel
pub mod prelude {
    pub use crate::matrix::LedMatrix;
    pub use dotmatrix_core::config::{MatrixConfig, ScrollConfig, TransportTiming};
    pub use dotmatrix_core::{Image, MatrixDisplay, MatrixDisplayExt, ScrollDirection};
    pub use dotmatrix_hal::{EhDelay, EhOutputPin};
}
