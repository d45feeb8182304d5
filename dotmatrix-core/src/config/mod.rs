//! Configuration types
//!
//! Board-agnostic configuration structures. With the `serde` feature they
//! can be stored as postcard binary data.

pub mod types;

pub use types::*;
