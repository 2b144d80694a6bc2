//! Build script for tessera-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate panel.toml at compile time
///
/// The firmware's runtime parser only handles the panel.toml subset and
/// trusts its input, so syntax and required sections are checked here on
/// the host where good error messages are cheap.
fn validate_config() {
    println!("cargo:rerun-if-changed=panel.toml");

    let content = fs::read_to_string("panel.toml")
        .expect("panel.toml not found - the firmware requires one next to Cargo.toml");

    let config: toml::Value = toml::from_str(&content)
        .unwrap_or_else(|e| panic!("panel.toml: invalid TOML syntax: {e}"));

    let display = config
        .get("display")
        .expect("panel.toml: missing [display] section");
    for key in ["hor_res", "ver_res", "strip_height"] {
        assert!(
            display.get(key).and_then(|v| v.as_integer()).is_some(),
            "panel.toml: [display] missing integer '{key}'"
        );
    }

    let buttons = config
        .get("button")
        .and_then(|b| b.as_table())
        .expect("panel.toml: at least one [button.<label>] section is required");
    for (name, button) in buttons {
        assert!(
            name.chars().count() == 1,
            "panel.toml: [button.{name}] label must be a single character"
        );
        assert!(
            button.get("line").and_then(|v| v.as_integer()).is_some(),
            "panel.toml: [button.{name}] missing integer 'line'"
        );
    }
}
