//! Blocking delay abstraction
//!
//! Two resolutions are needed: microseconds for bit timing on the wire and
//! milliseconds for animation pacing.

use embedded_hal::delay::DelayNs;

/// Blocking delay provider
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

/// Adapter from an `embedded-hal` 1.0 delay
pub struct EhDelay<D>(D);

impl<D: DelayNs> EhDelay<D> {
    /// Wrap a delay provider
    pub fn new(delay: D) -> Self {
        Self(delay)
    }

    /// Give the wrapped delay back
    pub fn into_inner(self) -> D {
        self.0
    }
}

impl<D: DelayNs> Delay for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
