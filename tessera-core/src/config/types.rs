//! Configuration type definitions

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum input channels per panel
pub const MAX_BUTTONS: usize = 8;

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A display dimension or the strip height is zero
    ZeroDimension,
    /// One strip does not fit the fixed strip buffer capacity
    StripOverflow,
    /// More buttons configured than the fixed channel table holds
    TooManyButtons,
}

/// One input channel: label, hardware line, debounce window
///
/// The line identifier is opaque to the core; the firmware's GPIO layer
/// resolves it to a physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Display label (single character, e.g. 'A')
    pub label: char,
    /// Opaque hardware line identifier
    pub line: u8,
    /// Minimum stable duration before a state change is accepted (ms)
    pub debounce_ms: u32,
}

impl ButtonConfig {
    /// Create a channel config with the default debounce window
    pub const fn new(label: char, line: u8) -> Self {
        Self {
            label,
            line,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Display geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Horizontal resolution in pixels
    pub hor_res: u16,
    /// Vertical resolution in pixels
    pub ver_res: u16,
    /// Rows per strip buffer
    pub strip_height: u16,
}

impl DisplayConfig {
    /// Pixels held by one strip buffer
    pub const fn strip_pixels(&self) -> usize {
        self.hor_res as usize * self.strip_height as usize
    }

    /// Bytes held by one strip buffer (RGB565, two bytes per pixel)
    pub const fn strip_bytes(&self) -> usize {
        self.strip_pixels() * crate::flush::BYTES_PER_PIXEL
    }

    /// Check the geometry for zero dimensions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hor_res == 0 || self.ver_res == 0 || self.strip_height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hor_res: 240,
            ver_res: 240,
            strip_height: 30,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Display geometry
    pub display: DisplayConfig,
    /// Input channels
    pub buttons: Vec<ButtonConfig, MAX_BUTTONS>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_sizing() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.strip_pixels(), 240 * 30);
        assert_eq!(cfg.strip_bytes(), 240 * 30 * 2);
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let mut cfg = DisplayConfig::default();
        assert_eq!(cfg.validate(), Ok(()));

        cfg.strip_height = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDimension));

        let cfg = DisplayConfig {
            hor_res: 0,
            ..DisplayConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDimension));
    }

    #[test]
    fn test_button_config_default_window() {
        let cfg = ButtonConfig::new('A', 12);
        assert_eq!(cfg.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(cfg.label, 'A');
        assert_eq!(cfg.line, 12);
    }
}
