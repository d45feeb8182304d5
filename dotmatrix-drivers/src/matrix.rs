//! 8x16 LED matrix driver
//!
//! Owns the frame buffer and the transport. All drawing and scrolling comes
//! from [`MatrixDisplayExt`](dotmatrix_core::MatrixDisplayExt); this type
//! only knows how to push the buffer to the controller and how to wait.

use dotmatrix_core::config::MatrixConfig;
use dotmatrix_core::{FrameBuffer, MatrixDisplay, MatrixDisplayExt};
use dotmatrix_hal::{Delay, OutputPin};

use crate::transport::Transport;

/// Dot-matrix panel on two GPIO outputs
pub struct LedMatrix<CLK, DIO, D> {
    transport: Transport<CLK, DIO, D>,
    buffer: FrameBuffer,
    config: MatrixConfig,
}

impl<CLK, DIO, D> LedMatrix<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: Delay,
{
    /// Claim both pins, power the display on and blank it
    pub fn new(clock: CLK, data: DIO, delay: D) -> Self {
        Self::with_config(clock, data, delay, MatrixConfig::default())
    }

    /// Like [`new`](Self::new) with explicit timing and scroll defaults
    pub fn with_config(clock: CLK, data: DIO, delay: D, config: MatrixConfig) -> Self {
        let mut transport = Transport::new(clock, data, delay, config.timing);
        transport.power_on();
        debug!(
            "matrix ready: bit hold {} us, frame delay {} ms",
            config.timing.bit_hold(),
            config.scroll.frame_delay_ms
        );

        Self {
            transport,
            buffer: FrameBuffer::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Scroll `text` using the configured pacing and direction
    pub fn scroll(&mut self, text: &str) {
        let scroll = self.config.scroll;
        self.scroll_text_with(text, &scroll);
    }

    /// Direct access to the link, for raw writes
    pub fn transport_mut(&mut self) -> &mut Transport<CLK, DIO, D> {
        &mut self.transport
    }

    /// Stop driving the panel and give back the pins and delay
    ///
    /// The display keeps showing the last frame.
    pub fn release(self) -> (CLK, DIO, D) {
        self.transport.release()
    }
}

impl<CLK, DIO, D> MatrixDisplay for LedMatrix<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: Delay,
{
    fn frame_buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    fn frame_buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    fn refresh(&mut self) {
        self.transport.write_columns(self.buffer.columns());
    }

    fn pause_ms(&mut self, ms: u32) {
        self.transport.delay_ms(ms);
    }
}
