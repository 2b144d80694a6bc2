//! Tessera - ST7789 button panel firmware
//!
//! Main firmware binary for the Raspberry Pi Pico carrying the panel:
//! four debounced tactile buttons and a 240x240 ST7789 TFT rendered
//! strip by strip through the double-buffered flush pipeline.

#![no_std]
#![no_main]

mod canvas;
mod config;
mod scene;
mod st7789;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Blocking, Spi};
use embassy_time::{Duration, Instant, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tessera_core::config::PanelConfig;
use tessera_core::flush::{Area, DisplaySurface};
use tessera_core::input::{ButtonPanel, Edge};
use tessera_core::traits::RenderEngine;

use crate::canvas::StripCanvas;
use crate::scene::Scene;
use crate::st7789::St7789;

/// Embedded panel configuration (compiled into firmware)
/// Edit panel.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../panel.toml");

/// Input polling and render interval
const POLL_INTERVAL_MS: u64 = 5;

/// Strip buffer capacity in bytes (240 px * 30 rows * 2 bytes each);
/// the panel.toml geometry must fit in this
const STRIP_BYTES: usize = 240 * 30 * 2;

type PanelTransport = St7789<'static, Spi<'static, SPI0, Blocking>>;
type PanelSurface = DisplaySurface<PanelTransport, STRIP_BYTES>;

// The surface carries both strip buffers (~29 KB); keep it out of the
// main task's stack.
static SURFACE: StaticCell<PanelSurface> = StaticCell::new();

/// Render-loop side of the flush handshake
///
/// Each acknowledged strip bumps the counter; the renderer only hands
/// out a buffer whose previous flush has been acked, which the surface
/// enforces by swapping on acknowledgement.
struct FlushTracker {
    acked: u32,
}

impl RenderEngine for FlushTracker {
    fn flush_ready(&mut self) {
        self.acked = self.acked.wrapping_add(1);
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tessera firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Parse the embedded configuration (syntax validated at build time)
    let cfg: PanelConfig = unwrap!(config::parse_config(EMBEDDED_CONFIG));
    info!(
        "Panel config: {}x{}, {} rows/strip, {} buttons",
        cfg.display.hor_res,
        cfg.display.ver_res,
        cfg.display.strip_height,
        cfg.buttons.len()
    );

    // SPI0 to the ST7789, TX only - the panel never talks back
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 62_500_000;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    let dc = Output::new(p.PIN_16, Level::Low);
    let cs = Output::new(p.PIN_17, Level::High);
    let rst = Output::new(p.PIN_20, Level::High);
    let bl = Output::new(p.PIN_21, Level::Low);

    let mut transport = St7789::new(spi, dc, cs, rst, bl);
    if let Err(e) = transport.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("ST7789 initialized");
    }

    let surface = SURFACE.init(unwrap!(DisplaySurface::configure(transport, cfg.display)));

    // Button inputs: pull-up, active low (pressed pulls the line to
    // ground). Lines are fixed by the board layout in config order.
    let pins = [
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
    ];

    let mut panel = unwrap!(ButtonPanel::from_config(&cfg));
    for i in 0..panel.len() {
        if let Some(button) = panel.get(i) {
            info!("Button {} on line {}", button.label(), button.line());
        }
    }

    let mut scene = Scene::new(cfg.buttons.iter().map(|b| b.label));
    let mut tracker = FlushTracker { acked: 0 };

    let started = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    info!("Entering main loop...");
    loop {
        ticker.next().await;
        let now_ms = started.elapsed().as_millis() as u32;

        // One update per channel per tick; edges drained right after, so
        // nothing is pending when the flags clear on the next pass.
        for (i, pin) in pins.iter().enumerate() {
            panel.update(i, pin.is_low(), now_ms);
        }

        while let Some(event) = panel.next_event() {
            match event.edge {
                Edge::Pressed => {
                    scene.press(event.label);
                    info!(
                        "Button {} pressed (count {})",
                        event.label,
                        scene.press_count()
                    );
                }
                Edge::Released => {
                    scene.release(event.label);
                    info!("Button {} released", event.label);
                }
            }
        }

        if scene.take_dirty() {
            render_frame(surface, &scene, &mut tracker);
            trace!("Frame rendered, {} strips acked total", tracker.acked);
        }
    }
}

/// Render the scene strip by strip through the surface
fn render_frame(surface: &mut PanelSurface, scene: &Scene, tracker: &mut FlushTracker) {
    let geometry = *surface.config();

    let mut y = 0u16;
    while y < geometry.ver_res {
        let rows = geometry.strip_height.min(geometry.ver_res - y);
        let area = Area::new(0, y, geometry.hor_res - 1, y + rows - 1);

        {
            let buf = &mut surface.draw_buffer()[..area.byte_len()];
            let mut canvas = StripCanvas::new(buf, geometry.hor_res, y, rows);
            // Canvas errors are Infallible
            let _ = scene.draw(&mut canvas);
        }

        surface.flush(area, tracker);
        y += rows;
    }
}
