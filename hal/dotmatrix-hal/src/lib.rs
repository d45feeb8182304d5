//! Dotmatrix Hardware Abstraction Layer
//!
//! The matrix driver needs exactly two capabilities from its host: drive a
//! digital output high or low, and block for a duration. This crate defines
//! those as traits so the driver can run against real pins or against test
//! doubles.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dotmatrix-drivers (LedMatrix)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotmatrix-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  mock pins    │
//! │   adapters    │       │  (tests)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`delay::Delay`] - Blocking waits

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::{Delay, EhDelay};
pub use gpio::{EhOutputPin, OutputPin};
