//! Minimal TOML parser for the panel configuration
//!
//! Handles only the subset needed for panel.toml: `key = integer` pairs,
//! `[display]` and `[button.<label>]` section headers, and comments.
//! Full TOML syntax and required sections are validated on the host at
//! build time (see build.rs), so errors here mean a broken build, not
//! bad user input at runtime.

use tessera_core::config::{ButtonConfig, PanelConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Invalid value for a known key
    InvalidValue,
    /// More button sections than the fixed channel table holds
    TooManyButtons,
}

/// Current parsing context
#[derive(Clone, Copy)]
enum Section {
    Root,
    Display,
    Button(char),
}

/// Parse panel.toml into a [`PanelConfig`]
pub fn parse_config(input: &str) -> Result<PanelConfig, ParseError> {
    let mut config = PanelConfig::default();
    let mut section = Section::Root;
    let mut current: Option<ButtonConfig> = None;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Section header: save the button being built, open the new one
        if line.starts_with('[') && line.ends_with(']') {
            save_button(&mut config, &mut current)?;
            section = parse_section_header(&line[1..line.len() - 1])?;
            if let Section::Button(label) = section {
                current = Some(ButtonConfig::new(label, 0));
            }
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidValue)?;
        let key = key.trim();
        let value = value.trim();

        match section {
            Section::Display => match key {
                "hor_res" => config.display.hor_res = parse_int(value)?,
                "ver_res" => config.display.ver_res = parse_int(value)?,
                "strip_height" => config.display.strip_height = parse_int(value)?,
                _ => {}
            },
            Section::Button(_) => {
                let button = current.as_mut().ok_or(ParseError::InvalidSection)?;
                match key {
                    "line" => button.line = parse_int(value)?,
                    "debounce_ms" => button.debounce_ms = parse_int(value)?,
                    _ => {}
                }
            }
            Section::Root => {}
        }
    }

    save_button(&mut config, &mut current)?;
    Ok(config)
}

/// Push a completed button section into the config
fn save_button(
    config: &mut PanelConfig,
    current: &mut Option<ButtonConfig>,
) -> Result<(), ParseError> {
    if let Some(button) = current.take() {
        config
            .buttons
            .push(button)
            .map_err(|_| ParseError::TooManyButtons)?;
    }
    Ok(())
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    let header = header.trim();

    if header == "display" {
        return Ok(Section::Display);
    }

    if let Some(name) = header.strip_prefix("button.") {
        let mut chars = name.trim().chars();
        let label = chars.next().ok_or(ParseError::InvalidSection)?;
        if chars.next().is_some() {
            return Err(ParseError::InvalidSection);
        }
        return Ok(Section::Button(label.to_ascii_uppercase()));
    }

    Err(ParseError::InvalidSection)
}

fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseError> {
    let parsed: u32 = value.parse().map_err(|_| ParseError::InvalidValue)?;
    T::try_from(parsed).map_err(|_| ParseError::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::config::DEFAULT_DEBOUNCE_MS;

    #[test]
    fn test_parse_section_header() {
        assert!(matches!(
            parse_section_header("display").unwrap(),
            Section::Display
        ));
        match parse_section_header("button.a").unwrap() {
            Section::Button(label) => assert_eq!(label, 'A'),
            _ => panic!("Wrong section type"),
        }
        assert!(parse_section_header("buttons").is_err());
        assert!(parse_section_header("button.ab").is_err());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config_str = r#"
# comment
[display]
hor_res = 240
ver_res = 240
strip_height = 30

[button.a]
line = 12

[button.b]
line = 13
debounce_ms = 25
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.display.hor_res, 240);
        assert_eq!(config.display.strip_height, 30);
        assert_eq!(config.buttons.len(), 2);
        assert_eq!(config.buttons[0].label, 'A');
        assert_eq!(config.buttons[0].line, 12);
        assert_eq!(config.buttons[0].debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.buttons[1].debounce_ms, 25);
    }

    #[test]
    fn test_parse_rejects_bad_value() {
        let config_str = "[display]\nhor_res = wide\n";
        assert!(matches!(
            parse_config(config_str),
            Err(ParseError::InvalidValue)
        ));
    }
}
