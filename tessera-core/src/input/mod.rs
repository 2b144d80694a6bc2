//! Input handling
//!
//! Converts raw, bouncy digital samples into clean edge-triggered events:
//! a per-channel debounce engine plus a fixed-capacity panel of labeled
//! channels.

pub mod debounce;
pub mod panel;

pub use debounce::Debouncer;
pub use panel::{Button, ButtonEvent, ButtonPanel, Edge};
