//! Strip canvas
//!
//! An embedded-graphics draw target over one strip buffer. The canvas
//! sits at a vertical offset inside the display, so the scene draws in
//! full-display coordinates and only the pixels that land on this
//! strip's rows are stored. Pixels are packed RGB565 big-endian, the
//! ST7789's native stream order.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Draw target over one strip buffer
pub struct StripCanvas<'a> {
    buf: &'a mut [u8],
    width: u16,
    y_offset: u16,
    height: u16,
}

impl<'a> StripCanvas<'a> {
    /// Wrap a strip buffer of `width * height * 2` bytes placed at
    /// display row `y_offset`
    pub fn new(buf: &'a mut [u8], width: u16, y_offset: u16, height: u16) -> Self {
        Self {
            buf,
            width,
            y_offset,
            height,
        }
    }
}

impl Dimensions for StripCanvas<'_> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(
            Point::new(0, self.y_offset as i32),
            Size::new(self.width as u32, self.height as u32),
        )
    }
}

impl DrawTarget for StripCanvas<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let x = point.x;
            let y = point.y - self.y_offset as i32;
            if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                continue;
            }

            let idx = (y as usize * self.width as usize + x as usize) * 2;
            let raw = color.into_storage().to_be_bytes();
            self.buf[idx] = raw[0];
            self.buf[idx + 1] = raw[1];
        }
        Ok(())
    }
}
