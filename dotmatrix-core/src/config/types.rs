//! Configuration type definitions
//!
//! These types describe wire timing and animation pacing. Every field has a
//! working default, so `MatrixConfig::default()` drives a panel out of the box.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scroll::ScrollDirection;

/// Largest encoded `MatrixConfig`
pub const MAX_CONFIG_BYTES: usize = 32;

/// Config encoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Output buffer too small or value not encodable
    Encode,
    /// Bytes are not a valid config
    Decode,
}

/// Bit timing on the two-wire link
///
/// The controller samples data on the rising clock edge, so exact hold
/// lengths do not matter as long as they are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransportTiming {
    /// Hold per clock phase while shifting bits (µs)
    pub bit_hold_us: u32,
    /// Hold inside START/END conditions (µs)
    pub start_hold_us: u32,
}

impl Default for TransportTiming {
    fn default() -> Self {
        Self {
            bit_hold_us: 2,
            start_hold_us: 1,
        }
    }
}

impl TransportTiming {
    /// Bit hold, never shorter than 1 µs
    pub fn bit_hold(&self) -> u32 {
        self.bit_hold_us.max(1)
    }

    /// START/END hold, never shorter than 1 µs
    pub fn start_hold(&self) -> u32 {
        self.start_hold_us.max(1)
    }
}

/// Scrolling text defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollConfig {
    /// Pause after each frame (ms)
    pub frame_delay_ms: u32,
    /// Direction of travel
    pub direction: ScrollDirection,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 100,
            direction: ScrollDirection::Left,
        }
    }
}

/// Complete driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixConfig {
    /// Wire timing
    pub timing: TransportTiming,
    /// Scroll pacing
    pub scroll: ScrollConfig,
}

#[cfg(feature = "serde")]
impl MatrixConfig {
    /// Encode as postcard into `buffer`, returning the bytes used
    pub fn to_bytes(&self, buffer: &mut [u8]) -> Result<usize, ConfigError> {
        postcard::to_slice(self, buffer)
            .map(|used| used.len())
            .map_err(|_| ConfigError::Encode)
    }

    /// Decode from postcard bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)
    }
}
