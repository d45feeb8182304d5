//! Bit-banged two-wire link to the matrix controller
//!
//! The controller has no chip select and no acknowledge. Idle is both lines
//! high. Framing:
//!
//! - START: data falls while clock is high
//! - bit: clock low, set data, hold, clock high, hold (sampled on the rise)
//! - END: data rises while clock is high
//!
//! Bytes go out most-significant bit first.

use dotmatrix_core::config::TransportTiming;
use dotmatrix_hal::{Delay, OutputPin};
use dotmatrix_protocol::{opcode, CommandFrame, WriteError, WriteRequest, ADDRESS_COUNT};

/// Two output pins and a delay speaking the controller's framing
pub struct Transport<CLK, DIO, D> {
    clock: CLK,
    data: DIO,
    delay: D,
    timing: TransportTiming,
}

impl<CLK, DIO, D> Transport<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: Delay,
{
    /// Take ownership of both pins and drive the link idle (both high)
    pub fn new(clock: CLK, data: DIO, delay: D, timing: TransportTiming) -> Self {
        let mut transport = Self {
            clock,
            data,
            delay,
            timing,
        };
        transport.data.set_high();
        transport.clock.set_high();
        transport
    }

    /// Timing in use
    pub fn timing(&self) -> &TransportTiming {
        &self.timing
    }

    /// Open a frame
    ///
    /// Leaves the clock high and data low.
    pub fn start_condition(&mut self) {
        self.clock.set_low();
        self.delay.delay_us(self.timing.start_hold());
        self.clock.set_high();
        self.data.set_high();
        self.data.set_low();
    }

    /// Close a frame and return the link to idle
    pub fn end_condition(&mut self) {
        self.clock.set_low();
        self.delay.delay_us(self.timing.bit_hold());
        self.data.set_low();
        self.clock.set_high();
        self.delay.delay_us(self.timing.start_hold());
        self.data.set_high();
    }

    fn send_bit(&mut self, high: bool) {
        let hold = self.timing.bit_hold();
        self.clock.set_low();
        self.data.set_state(high);
        self.delay.delay_us(hold);
        self.clock.set_high();
        self.delay.delay_us(hold);
    }

    /// Shift one byte out, MSB first
    pub fn send_byte(&mut self, value: u8) {
        for bit in (0..8).rev() {
            self.send_bit(value & (1 << bit) != 0);
        }
    }

    /// Send a complete START..END frame
    pub fn send_frame(&mut self, frame: &CommandFrame) {
        self.start_condition();
        for &byte in frame.bytes() {
            self.send_byte(byte);
        }
        self.end_condition();
    }

    /// Send a validated display memory write
    ///
    /// Three frames: auto-increment mode, address plus data, display on.
    pub fn write(&mut self, request: &WriteRequest) {
        trace!(
            "write {} bytes at address {}",
            request.data().len(),
            request.address()
        );
        for frame in request.frames().iter() {
            self.send_frame(frame);
        }
    }

    /// Write `data` starting at `address`
    ///
    /// Malformed requests are logged and dropped without touching either
    /// pin; the error is also returned for callers that care.
    ///
    /// This is stricter than the bare controller protocol, which only skips
    /// an address above 15 or an empty payload and always opens with `0xC0`.
    /// Here a payload running past address 15 is refused as well, and the
    /// start address is encoded into the low nibble of the address command.
    /// Full refreshes start at address 0, so neither difference shows there.
    pub fn write_bytes(&mut self, address: u8, data: &[u8]) -> Result<(), WriteError> {
        match WriteRequest::new(address, data) {
            Ok(request) => {
                self.write(&request);
                Ok(())
            }
            Err(e) => {
                warn!(
                    "dropping write of {} bytes at address {}: {}",
                    data.len(),
                    address,
                    e
                );
                Err(e)
            }
        }
    }

    /// Write all sixteen columns starting at address 0
    pub fn write_columns(&mut self, columns: &[u8; ADDRESS_COUNT]) {
        self.write(&WriteRequest::full(columns));
    }

    /// Turn the display on and blank its memory
    pub fn power_on(&mut self) {
        debug!("matrix power on");
        self.send_frame(&CommandFrame::command(opcode::DISPLAY_ON));
        self.write_columns(&[0; ADDRESS_COUNT]);
    }

    /// Block for `ms` milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Give back the pins and delay
    pub fn release(self) -> (CLK, DIO, D) {
        (self.clock, self.data, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{attach, Line, Wire};
    use core::cell::RefCell;

    fn frame(bytes: &[u8]) -> crate::testing::WireFrame {
        crate::testing::WireFrame::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_new_idles_high() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let _transport = Transport::new(clock, data, delay, TransportTiming::default());

        let wire = wire.borrow();
        assert!(wire.level(Line::Clock));
        assert!(wire.level(Line::Data));
        assert!(wire.frames.is_empty());
    }

    #[test]
    fn test_command_frame_on_wire() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let mut transport = Transport::new(clock, data, delay, TransportTiming::default());

        transport.send_frame(&CommandFrame::command(opcode::DISPLAY_ON));

        let wire = wire.borrow();
        assert_eq!(wire.frames.len(), 1);
        assert_eq!(wire.frames[0], frame(&[0x88]));
        assert!(!wire.frame_open());
        assert!(wire.level(Line::Clock));
        assert!(wire.level(Line::Data));
    }

    #[test]
    fn test_msb_first() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let mut transport = Transport::new(clock, data, delay, TransportTiming::default());

        // Asymmetric patterns decode wrong if the bit order is reversed
        transport.send_frame(&CommandFrame::command(0x01));
        transport.send_frame(&CommandFrame::command(0xC5));
        transport.send_frame(&CommandFrame::command(0x80));

        let wire = wire.borrow();
        assert_eq!(wire.frames[0], frame(&[0x01]));
        assert_eq!(wire.frames[1], frame(&[0xC5]));
        assert_eq!(wire.frames[2], frame(&[0x80]));
    }

    #[test]
    fn test_full_write_three_frames() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let mut transport = Transport::new(clock, data, delay, TransportTiming::default());

        let mut columns = [0u8; ADDRESS_COUNT];
        for (i, col) in columns.iter_mut().enumerate() {
            *col = (i as u8) * 17;
        }
        transport.write_columns(&columns);

        let wire = wire.borrow();
        assert_eq!(wire.frames.len(), 3);
        assert_eq!(wire.frames[0], frame(&[0x40]));
        assert_eq!(wire.frames[1][0], 0xC0);
        assert_eq!(&wire.frames[1][1..], &columns[..]);
        assert_eq!(wire.frames[2], frame(&[0x88]));
        assert_eq!(wire.unterminated, 0);
    }

    #[test]
    fn test_partial_write_encodes_address() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let mut transport = Transport::new(clock, data, delay, TransportTiming::default());

        transport.write_bytes(5, &[0xAA, 0x55]).unwrap();

        let wire = wire.borrow();
        assert_eq!(wire.frames[1], frame(&[0xC5, 0xAA, 0x55]));
    }

    #[test]
    fn test_malformed_writes_stay_silent() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let mut transport = Transport::new(clock, data, delay, TransportTiming::default());
        let writes_after_idle = wire.borrow().writes;

        assert_eq!(
            transport.write_bytes(16, &[0xFF]),
            Err(WriteError::AddressOutOfRange)
        );
        assert_eq!(transport.write_bytes(0, &[]), Err(WriteError::EmptyPayload));
        assert_eq!(
            transport.write_bytes(10, &[0xFF; 8]),
            Err(WriteError::PayloadTooLong)
        );

        let wire = wire.borrow();
        assert_eq!(wire.writes, writes_after_idle);
        assert_eq!(wire.holds, 0);
        assert!(wire.frames.is_empty());
    }

    #[test]
    fn test_power_on_sequence() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let mut transport = Transport::new(clock, data, delay, TransportTiming::default());

        transport.power_on();

        let wire = wire.borrow();
        assert_eq!(wire.frames.len(), 4);
        assert_eq!(wire.frames[0], frame(&[0x88]));
        assert_eq!(wire.frames[1], frame(&[0x40]));
        let mut blank = [0u8; 17];
        blank[0] = 0xC0;
        assert_eq!(wire.frames[2], frame(&blank));
        assert_eq!(wire.frames[3], frame(&[0x88]));
    }

    #[test]
    fn test_keeps_configured_timing() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let timing = TransportTiming {
            bit_hold_us: 7,
            start_hold_us: 3,
        };
        let transport = Transport::new(clock, data, delay, timing);

        assert_eq!(transport.timing(), &timing);
        assert_eq!(transport.timing().bit_hold(), 7);
    }

    #[test]
    fn test_zero_timing_still_holds() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let timing = TransportTiming {
            bit_hold_us: 0,
            start_hold_us: 0,
        };
        let mut transport = Transport::new(clock, data, delay, timing);

        // MockDelay rejects zero-length holds
        transport.send_frame(&CommandFrame::command(0x40));
        assert_eq!(wire.borrow().frames[0], frame(&[0x40]));
    }

    #[test]
    fn test_release_returns_pins() {
        let wire = RefCell::new(Wire::default());
        let (clock, data, delay) = attach(&wire);
        let transport = Transport::new(clock, data, delay, TransportTiming::default());

        let (clock, data, _delay) = transport.release();
        assert!(clock.is_set_high());
        assert!(data.is_set_high());
    }
}
