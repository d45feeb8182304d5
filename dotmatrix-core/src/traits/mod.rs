//! Hardware abstraction traits
//!
//! These traits define the interface between the drawing logic
//! and hardware-specific implementations.

pub mod display;

pub use display::{MatrixDisplay, MatrixDisplayExt};
