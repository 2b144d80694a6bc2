//! Display surface
//!
//! The configure-time composition of the flush pipeline: owns the strip
//! buffer pair and the transport, validates the geometry, and bounds
//! working memory to two strips regardless of display height. The
//! rendering side borrows the idle strip buffer, renders into it, and
//! flushes it back through the surface.

use super::area::Area;
use super::pipeline::FlushPipeline;
use super::strip::StripBufferPair;
use crate::config::{ConfigError, DisplayConfig};
use crate::traits::{PixelTransport, RenderEngine};

/// Partial-mode, double-buffered display surface
///
/// `N` is the byte capacity of each strip buffer; the configured
/// geometry must fit (`hor_res * strip_height * 2 <= N`).
pub struct DisplaySurface<T, const N: usize> {
    pipeline: FlushPipeline<T>,
    buffers: StripBufferPair<N>,
    config: DisplayConfig,
}

impl<T: PixelTransport, const N: usize> DisplaySurface<T, N> {
    /// Validate the geometry and set up the surface
    ///
    /// The rendering side must never request a region taller than one
    /// strip; `draw_buffer` hands out exactly one strip's worth of
    /// bytes, which enforces the bound structurally.
    pub fn configure(transport: T, config: DisplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.strip_bytes() > N {
            return Err(ConfigError::StripOverflow);
        }

        Ok(Self {
            pipeline: FlushPipeline::new(transport),
            buffers: StripBufferPair::new(),
            config,
        })
    }

    /// Configured display geometry
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The strip buffer eligible for rendering
    ///
    /// Always the buffer whose previous contents have been acknowledged;
    /// the borrow ends before the next flush, so the rendering engine
    /// never retains it across calls.
    pub fn draw_buffer(&mut self) -> &mut [u8] {
        let strip_bytes = self.config.strip_bytes();
        &mut self.buffers.draw_buffer()[..strip_bytes]
    }

    /// Flush a rendered region out of the current draw buffer
    ///
    /// Blocks until the transfer has retired, notifies the engine, then
    /// swaps buffers so the next render targets the other strip.
    pub fn flush<E: RenderEngine>(&mut self, area: Area, engine: &mut E) {
        let pixels = self.buffers.pending();
        self.pipeline.flush(area, pixels, engine);
        self.buffers.swap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    const TEST_CAP: usize = 16 * 4 * 2;

    /// Remembers the first pixel byte of every dispatched strip
    struct FirstByteTransport<'a> {
        seen: &'a RefCell<heapless::Vec<u8, 8>>,
    }

    impl PixelTransport for FirstByteTransport<'_> {
        fn wait_idle(&mut self) {}
        fn set_window(&mut self, _x1: u16, _y1: u16, _x2: u16, _y2: u16) {}
        fn write(&mut self, bytes: &[u8]) {
            self.seen.borrow_mut().push(bytes[0]).unwrap();
        }
    }

    struct CountingEngine {
        acks: u32,
    }

    impl RenderEngine for CountingEngine {
        fn flush_ready(&mut self) {
            self.acks += 1;
        }
    }

    fn test_config() -> DisplayConfig {
        DisplayConfig {
            hor_res: 16,
            ver_res: 16,
            strip_height: 4,
        }
    }

    #[test]
    fn test_configure_validates_geometry() {
        let seen = RefCell::new(heapless::Vec::new());

        let bad = DisplayConfig {
            strip_height: 0,
            ..test_config()
        };
        let result: Result<DisplaySurface<_, TEST_CAP>, _> =
            DisplaySurface::configure(FirstByteTransport { seen: &seen }, bad);
        assert!(matches!(result, Err(ConfigError::ZeroDimension)));

        let too_tall = DisplayConfig {
            strip_height: 5,
            ..test_config()
        };
        let result: Result<DisplaySurface<_, TEST_CAP>, _> =
            DisplaySurface::configure(FirstByteTransport { seen: &seen }, too_tall);
        assert!(matches!(result, Err(ConfigError::StripOverflow)));

        let result: Result<DisplaySurface<_, TEST_CAP>, _> =
            DisplaySurface::configure(FirstByteTransport { seen: &seen }, test_config());
        assert!(result.is_ok());
    }

    #[test]
    fn test_draw_buffer_is_one_strip() {
        let seen = RefCell::new(heapless::Vec::new());
        let mut surface: DisplaySurface<_, TEST_CAP> =
            DisplaySurface::configure(FirstByteTransport { seen: &seen }, test_config()).unwrap();

        assert_eq!(surface.draw_buffer().len(), 16 * 4 * 2);
    }

    #[test]
    fn test_flush_dispatches_rendered_buffer_and_alternates() {
        let seen = RefCell::new(heapless::Vec::new());
        let mut surface: DisplaySurface<_, TEST_CAP> =
            DisplaySurface::configure(FirstByteTransport { seen: &seen }, test_config()).unwrap();
        let mut engine = CountingEngine { acks: 0 };

        let strip = Area::new(0, 0, 15, 3);

        surface.draw_buffer().fill(0x11);
        surface.flush(strip, &mut engine);

        surface.draw_buffer().fill(0x22);
        surface.flush(strip, &mut engine);

        // Third render reuses the first buffer, now acknowledged.
        surface.draw_buffer().fill(0x33);
        surface.flush(strip, &mut engine);

        assert_eq!(seen.borrow().as_slice(), &[0x11, 0x22, 0x33]);
        assert_eq!(engine.acks, 3);
    }

    #[test]
    fn test_empty_region_still_acks() {
        let seen = RefCell::new(heapless::Vec::new());
        let mut surface: DisplaySurface<_, TEST_CAP> =
            DisplaySurface::configure(FirstByteTransport { seen: &seen }, test_config()).unwrap();
        let mut engine = CountingEngine { acks: 0 };

        surface.flush(Area::new(4, 0, 3, 3), &mut engine);

        assert!(seen.borrow().is_empty());
        assert_eq!(engine.acks, 1);
    }
}
