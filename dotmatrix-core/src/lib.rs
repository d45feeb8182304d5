//! Board-agnostic core logic for the 8x16 LED matrix
//!
//! This crate contains everything that does not touch a GPIO pin:
//!
//! - Frame buffer and the pixel addressing convention
//! - 5x8 font table and text-to-bitmap rendering
//! - Scroll frame source for moving text across the panel
//! - Shape rasterization (rectangles, axis-aligned lines, images)
//! - The `MatrixDisplay` trait that drivers implement
//! - Configuration type definitions
//!
//! # Addressing
//!
//! The controller stores one byte per hardware column. Logical pixel
//! `(row, col)` lives in byte `col`, bit `row`:
//!
//! ```text
//!            col 0   col 1  ...  col 15
//! row 0  ->  bit 0   bit 0       bit 0
//! row 1  ->  bit 1   bit 1       bit 1
//!  ...
//! row 7  ->  bit 7   bit 7       bit 7
//! ```

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod font;
pub mod framebuffer;
pub mod scroll;
pub mod shapes;
pub mod text;
pub mod traits;

pub use framebuffer::{FrameBuffer, Image, PixelError, COLS, ROWS};
pub use scroll::{ColumnSource, Frame, ScrollDirection, ScrollFrames};
pub use text::{render, TextColumns};
pub use traits::{MatrixDisplay, MatrixDisplayExt};
