//! GPIO pin abstractions
//!
//! The matrix link is write-only, so only outputs are modelled. Pin writes
//! are infallible at this level: the controller never acknowledges anything,
//! so a failed write could not be told apart from a successful one anyway.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Adapter from an `embedded-hal` 1.0 output pin
///
/// Errors reported by the wrapped pin are dropped. The last requested level
/// is tracked locally so `is_set_high` does not need a readable pin.
pub struct EhOutputPin<P> {
    pin: P,
    high: bool,
}

impl<P: embedded_hal::digital::OutputPin> EhOutputPin<P> {
    /// Wrap a pin, driving it low so the tracked level matches the hardware
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self { pin, high: false }
    }

    /// Give the wrapped pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPin for EhOutputPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
