//! Display flush pipeline
//!
//! Hands rendered pixel regions to the pixel transport while keeping the
//! strip buffer pair safe under asynchronous (DMA-style) completion. The
//! pipeline enforces the double-wait protocol; the surface owns the
//! buffers and the configure-time geometry.

pub mod area;
pub mod pipeline;
pub mod strip;
pub mod surface;

pub use area::Area;
pub use pipeline::FlushPipeline;
pub use strip::StripBufferPair;
pub use surface::DisplaySurface;

/// Bytes per pixel in the fixed RGB565 output format
pub const BYTES_PER_PIXEL: usize = 2;
