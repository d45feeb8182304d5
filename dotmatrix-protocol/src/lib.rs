//! LED Matrix Controller Protocol
//!
//! This crate defines the byte-level commands understood by the 16-column
//! dot-matrix controller. The physical link has two wires (clock and data),
//! no chip-select and no acknowledgment; bits are clocked out by the host.
//!
//! # Protocol Overview
//!
//! A display refresh is always three framed commands:
//! ```text
//! ┌───────┬──────────────┬─────┐
//! │ START │ 0x40         │ END │   auto-increment addressing
//! ├───────┼──────────────┼─────┤
//! │ START │ 0xC0 | addr  │ ... │   start address, then data bytes
//! │       │ DATA × n     │ END │
//! ├───────┼──────────────┼─────┤
//! │ START │ 0x88         │ END │   display on, default brightness
//! └───────┴──────────────┴─────┘
//! ```
//!
//! This crate only builds and validates the frames; clocking them onto the
//! wire is the transport's job.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;

pub use command::{address_command, opcode, ADDRESS_COUNT, MAX_ADDRESS};
pub use frame::{CommandFrame, WriteError, WriteRequest, MAX_FRAME_LEN};
