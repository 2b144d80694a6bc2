//! Pixel transport trait
//!
//! Abstracts the bus mechanism (SPI, typically DMA- or FIFO-backed) that
//! moves pixel bytes to the display controller asynchronously from the
//! processor.

/// Bus-level transport to the display controller
///
/// The transport and the display's addressing window are singleton
/// resources: at most one transfer is outstanding at any time, and the
/// flush pipeline is their sole legitimate mutator. All operations are
/// synchronous and infallible; a transport that never retires a transfer
/// stalls the caller indefinitely, which is handled (if at all) by a
/// watchdog outside this core.
pub trait PixelTransport {
    /// Block until any previously dispatched transfer has fully retired
    ///
    /// Must return immediately when nothing is outstanding.
    fn wait_idle(&mut self);

    /// Program the target window on the display controller
    ///
    /// Coordinates are inclusive on all four edges. Must only be called
    /// while the transport is idle.
    fn set_window(&mut self, x1: u16, y1: u16, x2: u16, y2: u16);

    /// Dispatch pixel bytes into the current window
    ///
    /// May return before the transfer has retired; completion is observed
    /// through [`wait_idle`](Self::wait_idle). The caller keeps `bytes`
    /// untouched until that wait returns.
    fn write(&mut self, bytes: &[u8]);
}
