//! Command frames for the matrix controller.
//!
//! A frame is everything sent between one START and the following END
//! condition: an opcode, optionally followed by display data.
//!
//! Frame format:
//! - OPCODE (1 byte): data, address or display-control command
//! - DATA (0-16 bytes): only after an address command

use heapless::Vec;

use crate::command::{address_command, opcode, ADDRESS_COUNT, MAX_ADDRESS};

/// Maximum frame size (OPCODE + one byte per address)
pub const MAX_FRAME_LEN: usize = 1 + ADDRESS_COUNT;

/// Reasons a display memory write is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteError {
    /// Start address is above 15
    AddressOutOfRange,
    /// Nothing to write
    EmptyPayload,
    /// Payload would run past the last address
    PayloadTooLong,
}

/// A single START..END framed command
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandFrame {
    bytes: Vec<u8, MAX_FRAME_LEN>,
}

impl CommandFrame {
    /// Create a frame holding only an opcode
    pub fn command(opcode: u8) -> Self {
        let mut bytes = Vec::new();
        // Capacity is at least one
        let _ = bytes.push(opcode);
        Self { bytes }
    }

    /// Opcode that opens this frame
    pub fn opcode(&self) -> u8 {
        self.bytes.first().copied().unwrap_or_default()
    }

    /// Data bytes following the opcode
    pub fn data(&self) -> &[u8] {
        self.bytes.get(1..).unwrap_or(&[])
    }

    /// Every byte of the frame in wire order
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A validated display memory write
///
/// Holds the data frame ready to send; construction fails for requests the
/// controller would misinterpret, so a `WriteRequest` is always safe to put
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WriteRequest {
    address: u8,
    data_frame: CommandFrame,
}

impl WriteRequest {
    /// Validate a write of `data` starting at `address`
    pub fn new(address: u8, data: &[u8]) -> Result<Self, WriteError> {
        if address > MAX_ADDRESS {
            return Err(WriteError::AddressOutOfRange);
        }
        if data.is_empty() {
            return Err(WriteError::EmptyPayload);
        }
        if address as usize + data.len() > ADDRESS_COUNT {
            return Err(WriteError::PayloadTooLong);
        }

        let mut data_frame = CommandFrame::command(address_command(address));
        data_frame
            .bytes
            .extend_from_slice(data)
            .map_err(|_| WriteError::PayloadTooLong)?;

        Ok(Self {
            address,
            data_frame,
        })
    }

    /// Write all sixteen columns starting at address 0
    pub fn full(columns: &[u8; ADDRESS_COUNT]) -> Self {
        let mut data_frame = CommandFrame::command(address_command(0));
        // 1 + ADDRESS_COUNT == MAX_FRAME_LEN
        let _ = data_frame.bytes.extend_from_slice(columns);
        Self {
            address: 0,
            data_frame,
        }
    }

    /// Start address of the write
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Display data carried by the write
    pub fn data(&self) -> &[u8] {
        self.data_frame.data()
    }

    /// The three frames of a complete update, in send order
    ///
    /// 1. auto-increment data command
    /// 2. start address followed by the data
    /// 3. display on
    pub fn frames(&self) -> [CommandFrame; 3] {
        [
            CommandFrame::command(opcode::AUTO_INCREMENT),
            self.data_frame.clone(),
            CommandFrame::command(opcode::DISPLAY_ON),
        ]
    }
}
