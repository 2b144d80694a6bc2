//! Flush protocol
//!
//! One flush hands one rendered region to the transport under a strict
//! happens-before order:
//!
//! wait_idle -> set_window -> write -> wait_idle -> flush_ready
//!
//! The first wait retires any transfer a previous flush dispatched, so a
//! new addressing window is never programmed under an active transfer.
//! The second wait guarantees that by the time the engine is told the
//! buffer is reusable, the bus has stopped reading it.

use super::area::Area;
use crate::traits::{PixelTransport, RenderEngine};

/// Strip flush pipeline
///
/// Sole owner of the transport: no other code path may touch the bus or
/// the addressing window between the two waits of any flush.
#[derive(Debug)]
pub struct FlushPipeline<T> {
    transport: T,
}

impl<T: PixelTransport> FlushPipeline<T> {
    /// Take ownership of the transport
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Flush one rendered region
    ///
    /// `pixels` must hold at least `area.byte_len()` bytes of RGB565 data
    /// and must not be mutated by the caller until this call returns;
    /// both are guaranteed by the rendering contract rather than checked
    /// here. Blocks until the transfer has fully retired, then notifies
    /// the engine exactly once.
    ///
    /// An empty region performs no window programming and no write, but
    /// still performs both waits and the notification, so the pipeline
    /// stays live.
    pub fn flush<E: RenderEngine>(&mut self, area: Area, pixels: &[u8], engine: &mut E) {
        self.transport.wait_idle();

        let len = area.byte_len();
        if len != 0 {
            self.transport.set_window(area.x1, area.y1, area.x2, area.y2);
            self.transport.write(&pixels[..len]);
        }

        self.transport.wait_idle();
        engine.flush_ready();
    }

    /// Shared access to the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consume the pipeline, returning the transport
    pub fn into_transport(self) -> T {
        self.transport
    }
}
