//! Recording test doubles for the two-wire link
//!
//! `Wire` watches both lines the way the controller would: a falling data
//! edge while the clock is high opens a frame, a rising one closes it, and
//! each rising clock edge inside a frame shifts in one bit, MSB first.
//! Trailing bits that do not make up a whole byte are dropped at close.

use core::cell::RefCell;

use dotmatrix_hal::{Delay, OutputPin};
use dotmatrix_protocol::MAX_FRAME_LEN;
use heapless::Vec;

/// Bytes of one decoded frame
pub type WireFrame = Vec<u8, MAX_FRAME_LEN>;

/// Decoded frames kept per test
pub const MAX_FRAMES: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clock,
    Data,
}

/// Shared state of both lines plus everything decoded from them
#[derive(Default)]
pub struct Wire {
    clock: bool,
    data: bool,
    in_frame: bool,
    bit_count: u8,
    shift: u8,
    current: WireFrame,
    /// Every pin write, level change or not
    pub writes: usize,
    /// Completed frames in wire order
    pub frames: Vec<WireFrame, MAX_FRAMES>,
    /// START seen while a frame was already open
    pub unterminated: usize,
    /// Microsecond holds requested
    pub holds: usize,
    /// Millisecond pauses requested
    pub pauses_ms: Vec<u32, MAX_FRAMES>,
}

impl Wire {
    pub fn level(&self, line: Line) -> bool {
        match line {
            Line::Clock => self.clock,
            Line::Data => self.data,
        }
    }

    fn drive(&mut self, line: Line, high: bool) {
        self.writes += 1;
        match line {
            Line::Clock => {
                if high && !self.clock && self.in_frame {
                    self.shift = (self.shift << 1) | self.data as u8;
                    self.bit_count += 1;
                    if self.bit_count == 8 {
                        self.current.push(self.shift).expect("frame too long");
                        self.bit_count = 0;
                        self.shift = 0;
                    }
                }
                self.clock = high;
            }
            Line::Data => {
                if self.clock && self.data && !high {
                    // START
                    if self.in_frame {
                        self.unterminated += 1;
                    }
                    self.in_frame = true;
                    self.current.clear();
                    self.bit_count = 0;
                    self.shift = 0;
                } else if self.clock && !self.data && high && self.in_frame {
                    // END
                    self.in_frame = false;
                    let frame = core::mem::take(&mut self.current);
                    self.frames.push(frame).expect("too many frames");
                }
                self.data = high;
            }
        }
    }

    /// True while a START has not been matched by an END
    pub fn frame_open(&self) -> bool {
        self.in_frame
    }
}

/// Output pin attached to one line of a `Wire`
pub struct MockPin<'a> {
    wire: &'a RefCell<Wire>,
    line: Line,
}

impl<'a> MockPin<'a> {
    pub fn new(wire: &'a RefCell<Wire>, line: Line) -> Self {
        Self { wire, line }
    }
}

impl OutputPin for MockPin<'_> {
    fn set_high(&mut self) {
        self.wire.borrow_mut().drive(self.line, true);
    }

    fn set_low(&mut self) {
        self.wire.borrow_mut().drive(self.line, false);
    }

    fn is_set_high(&self) -> bool {
        self.wire.borrow().level(self.line)
    }
}

/// Delay that records instead of waiting
pub struct MockDelay<'a> {
    wire: &'a RefCell<Wire>,
}

impl<'a> MockDelay<'a> {
    pub fn new(wire: &'a RefCell<Wire>) -> Self {
        Self { wire }
    }
}

impl Delay for MockDelay<'_> {
    fn delay_us(&mut self, us: u32) {
        assert!(us > 0, "zero-length hold");
        self.wire.borrow_mut().holds += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wire
            .borrow_mut()
            .pauses_ms
            .push(ms)
            .expect("too many pauses");
    }
}

/// Clock pin, data pin and delay sharing one wire
pub fn attach(wire: &RefCell<Wire>) -> (MockPin<'_>, MockPin<'_>, MockDelay<'_>) {
    (
        MockPin::new(wire, Line::Clock),
        MockPin::new(wire, Line::Data),
        MockDelay::new(wire),
    )
}
