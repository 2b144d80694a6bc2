//! Configuration types
//!
//! Board-agnostic configuration for the panel. Fixed at construction
//! time; there is no dynamic reconfiguration surface.

pub mod types;

pub use types::*;
