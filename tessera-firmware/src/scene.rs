//! Demo status scene
//!
//! The panel's screen contents: a title, one status line per button,
//! and a running press counter. Drawn in full-display coordinates; the
//! strip canvas decides which pixels land in the current strip.

use core::fmt::Write as _;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::{String, Vec};

use tessera_core::config::MAX_BUTTONS;

const BG: Rgb565 = Rgb565::new(0, 14, 10);
const PANEL_BG: Rgb565 = Rgb565::new(3, 6, 3);
const PANEL_BORDER: Rgb565 = Rgb565::new(0, 42, 31);
const TEXT_DIM: Rgb565 = Rgb565::new(25, 51, 25);

/// What the panel currently shows
pub struct Scene {
    buttons: Vec<(char, bool), MAX_BUTTONS>,
    press_count: u32,
    dirty: bool,
}

impl Scene {
    /// Create a scene with one status line per label
    pub fn new(labels: impl Iterator<Item = char>) -> Self {
        let mut buttons = Vec::new();
        for label in labels.take(MAX_BUTTONS) {
            let _ = buttons.push((label, false));
        }
        Self {
            buttons,
            press_count: 0,
            dirty: true,
        }
    }

    /// Record a press edge
    pub fn press(&mut self, label: char) {
        self.set_state(label, true);
        self.press_count = self.press_count.wrapping_add(1);
    }

    /// Record a release edge
    pub fn release(&mut self, label: char) {
        self.set_state(label, false);
    }

    fn set_state(&mut self, label: char, pressed: bool) {
        for entry in self.buttons.iter_mut() {
            if entry.0 == label && entry.1 != pressed {
                entry.1 = pressed;
                self.dirty = true;
            }
        }
    }

    /// Total press edges seen
    pub fn press_count(&self) -> u32 {
        self.press_count
    }

    /// Take the dirty flag, clearing it
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// Draw the whole scene in display coordinates
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        target.clear(BG)?;

        let title = MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE);
        Text::new("Button Demo", Point::new(65, 26), title).draw(target)?;

        Rectangle::new(Point::new(20, 50), Size::new(200, 140))
            .into_styled(PrimitiveStyle::with_fill(PANEL_BG))
            .draw(target)?;
        Rectangle::new(Point::new(20, 50), Size::new(200, 140))
            .into_styled(PrimitiveStyle::with_stroke(PANEL_BORDER, 2))
            .draw(target)?;

        for (i, (label, pressed)) in self.buttons.iter().enumerate() {
            let mut line: String<24> = String::new();
            let state = if *pressed { "Pressed" } else { "Released" };
            let _ = write!(line, "{}: {}", label, state);

            let color = if *pressed { Rgb565::GREEN } else { TEXT_DIM };
            let style = MonoTextStyle::new(&FONT_6X10, color);
            Text::new(&line, Point::new(32, 72 + i as i32 * 30), style).draw(target)?;
        }

        let mut counter: String<32> = String::new();
        let _ = write!(counter, "Press count: {}", self.press_count);
        let style = MonoTextStyle::new(&FONT_6X10, Rgb565::GREEN);
        Text::new(&counter, Point::new(70, 226), style).draw(target)?;

        Ok(())
    }
}
