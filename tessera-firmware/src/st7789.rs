//! ST7789 TFT Display Driver
//!
//! Transport driver for 240x240 ST7789-based panels over SPI, speaking
//! RGB565 big-endian. Implements the core's `PixelTransport`: the window
//! commands and pixel writes land here, and `wait_idle` drains the SPI
//! shifter, which is what makes DC transitions and buffer reuse safe
//! while the FIFO tail is still going out on the wire.

use embassy_rp::gpio::Output;
use embassy_time::{Duration, Timer};
use embedded_hal::spi::SpiBus;

use tessera_core::traits::PixelTransport;

/// ST7789 commands
#[allow(dead_code)]
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// RGB565, 16 bits per pixel
const COLMOD_16BPP: u8 = 0x55;

/// ST7789 driver
///
/// The panel is the only device on its SPI bus, so CS is asserted once
/// at init and stays asserted; DC is the only per-transfer control line.
pub struct St7789<'d, SPI> {
    spi: SPI,
    dc: Output<'d>,
    cs: Output<'d>,
    rst: Output<'d>,
    bl: Output<'d>,
}

impl<'d, SPI> St7789<'d, SPI>
where
    SPI: SpiBus<u8>,
{
    /// Create a new ST7789 driver
    pub fn new(spi: SPI, dc: Output<'d>, cs: Output<'d>, rst: Output<'d>, bl: Output<'d>) -> Self {
        Self {
            spi,
            dc,
            cs,
            rst,
            bl,
        }
    }

    /// Initialize the panel
    ///
    /// Hardware reset, then the wake/format sequence with datasheet
    /// delays. Backlight comes on last so garbage RAM is never visible.
    pub async fn init(&mut self) -> Result<(), SPI::Error> {
        self.bl.set_low();

        self.rst.set_low();
        Timer::after(Duration::from_millis(50)).await;
        self.rst.set_high();
        Timer::after(Duration::from_millis(150)).await;

        self.cs.set_low();

        self.command(cmd::SWRESET)?;
        Timer::after(Duration::from_millis(150)).await;

        self.command(cmd::SLPOUT)?;
        Timer::after(Duration::from_millis(10)).await;

        self.command(cmd::COLMOD)?;
        self.data(&[COLMOD_16BPP])?;

        // Row-major, top-left origin, RGB order
        self.command(cmd::MADCTL)?;
        self.data(&[0x00])?;

        // IPS panel: inverted gamma is the normal display mode
        self.command(cmd::INVON)?;
        self.command(cmd::NORON)?;

        self.command(cmd::DISPON)?;
        Timer::after(Duration::from_millis(10)).await;

        self.bl.set_high();
        Ok(())
    }

    /// Send a command byte
    ///
    /// The shifter must be empty on both edges of the DC toggle: a byte
    /// still shifting out while DC moves is reinterpreted on the wire.
    fn command(&mut self, op: u8) -> Result<(), SPI::Error> {
        self.spi.flush()?;
        self.dc.set_low();
        self.spi.write(&[op])?;
        self.spi.flush()?;
        self.dc.set_high();
        Ok(())
    }

    /// Send parameter or pixel bytes
    fn data(&mut self, bytes: &[u8]) -> Result<(), SPI::Error> {
        self.spi.write(bytes)
    }

    /// Program the drawing window and open RAM for writing
    fn window(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) -> Result<(), SPI::Error> {
        let xs = x1.to_be_bytes();
        let xe = x2.to_be_bytes();
        self.command(cmd::CASET)?;
        self.data(&[xs[0], xs[1], xe[0], xe[1]])?;

        let ys = y1.to_be_bytes();
        let ye = y2.to_be_bytes();
        self.command(cmd::RASET)?;
        self.data(&[ys[0], ys[1], ye[0], ye[1]])?;

        self.command(cmd::RAMWR)
    }
}

// The transport contract is infallible by design: the panel never talks
// back and an exclusively owned blocking bus has no error path, so SPI
// results are discarded here.
impl<SPI> PixelTransport for St7789<'_, SPI>
where
    SPI: SpiBus<u8>,
{
    fn wait_idle(&mut self) {
        // write() returns with the FIFO tail still shifting out; BSY must
        // clear before the window moves or the caller reuses its buffer.
        self.spi.flush().ok();
    }

    fn set_window(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        self.window(x1, y1, x2, y2).ok();
    }

    fn write(&mut self, bytes: &[u8]) {
        self.data(bytes).ok();
    }
}
