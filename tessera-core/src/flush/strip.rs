//! Strip buffer pair
//!
//! Two fixed-capacity pixel buffers sized to hold a bounded number of
//! full display rows. One is the current draw target; the other held the
//! most recently dispatched strip. The pair is owned by the surface and
//! the rendering side only ever borrows the draw buffer for one strip.

/// Which buffer of the pair is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Slot {
    Front,
    Back,
}

/// Double buffer of `N` bytes per strip (RGB565, two bytes per pixel)
pub struct StripBufferPair<const N: usize> {
    front: [u8; N],
    back: [u8; N],
    /// Buffer currently eligible as render target
    draw: Slot,
}

impl<const N: usize> StripBufferPair<N> {
    /// Create a zeroed pair with `front` as the first draw target
    pub const fn new() -> Self {
        Self {
            front: [0; N],
            back: [0; N],
            draw: Slot::Front,
        }
    }

    /// Byte capacity of one strip buffer
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Mutable access to the current draw target
    pub fn draw_buffer(&mut self) -> &mut [u8] {
        match self.draw {
            Slot::Front => &mut self.front,
            Slot::Back => &mut self.back,
        }
    }

    /// Read-only view of the draw target, for dispatching its contents
    pub fn pending(&self) -> &[u8] {
        match self.draw {
            Slot::Front => &self.front,
            Slot::Back => &self.back,
        }
    }

    /// Make the other buffer the draw target
    ///
    /// Called after a dispatched strip has been acknowledged; the next
    /// render lands in the buffer that was not just written out.
    pub fn swap(&mut self) {
        self.draw = match self.draw {
            Slot::Front => Slot::Back,
            Slot::Back => Slot::Front,
        };
    }
}

impl<const N: usize> Default for StripBufferPair<N> {
    fn default() -> Self {
        Self::new()
    }
}
