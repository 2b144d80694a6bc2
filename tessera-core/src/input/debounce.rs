//! Debounce engine
//!
//! Level-triggered debounce filter: the stable state changes only after
//! the raw signal has held its new value for a full window, measured from
//! its most recent transition. Every raw change - however brief - resets
//! the window, so chatter of arbitrary sub-window frequency is rejected
//! while latency stays bounded to one window after the signal settles.

/// Debounce filter for one raw boolean input
///
/// Fed once per polling tick with an instantaneous, polarity-corrected
/// sample (`true` = actuated) and a monotonic millisecond tick count.
/// Tick arithmetic is wrapping, so the filter keeps working across
/// counter rollover.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Minimum stable duration before a change is accepted (ms)
    window_ms: u32,
    /// Last unfiltered sample
    raw: bool,
    /// Last state accepted as debounced
    stable: bool,
    /// Tick of the last observed raw change
    last_change_ms: u32,
    /// One-shot rising edge flag
    pressed: bool,
    /// One-shot falling edge flag
    released: bool,
}

impl Debouncer {
    /// Create a filter with the given debounce window
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            raw: false,
            stable: false,
            last_change_ms: 0,
            pressed: false,
            released: false,
        }
    }

    /// Feed one raw sample
    ///
    /// Both edge flags are cleared at the start of every call: a call
    /// yields at most the edges produced during that call, and an edge
    /// left unconsumed is gone on the next update. Callers that poll
    /// slower than they update will miss edges; that is the contract,
    /// not a defect.
    pub fn update(&mut self, raw: bool, now_ms: u32) {
        self.pressed = false;
        self.released = false;

        // Any raw change restarts the window, however brief the glitch.
        if raw != self.raw {
            self.last_change_ms = now_ms;
            self.raw = raw;
        }

        // Wrapping subtraction keeps the comparison valid across rollover.
        if now_ms.wrapping_sub(self.last_change_ms) >= self.window_ms && raw != self.stable {
            self.stable = raw;
            if raw {
                self.pressed = true;
            } else {
                self.released = true;
            }
        }
    }

    /// Current debounced state
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Take the rising edge flag, clearing it
    ///
    /// Each press edge is observed at most once, even under repeated
    /// polling between updates.
    pub fn consume_pressed(&mut self) -> bool {
        let edge = self.pressed;
        self.pressed = false;
        edge
    }

    /// Take the falling edge flag, clearing it
    pub fn consume_released(&mut self) -> bool {
        let edge = self.released;
        self.released = false;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let mut d = Debouncer::new(50);
        assert!(!d.is_pressed());
        assert!(!d.consume_pressed());
        assert!(!d.consume_released());
    }

    #[test]
    fn test_press_commits_after_window() {
        let mut d = Debouncer::new(50);

        d.update(true, 0);
        assert!(!d.is_pressed());
        assert!(!d.consume_pressed());

        d.update(true, 49);
        assert!(!d.is_pressed());

        d.update(true, 50);
        assert!(d.is_pressed());
        assert!(d.consume_pressed());
    }

    #[test]
    fn test_bounce_restarts_window() {
        // Raw goes true at t=0, bounces false at t=10, true at t=15 and
        // holds. The edge lands on the first update at or after t=65.
        let mut d = Debouncer::new(50);

        d.update(true, 0);
        d.update(false, 10);
        d.update(true, 15);

        d.update(true, 60);
        assert!(!d.is_pressed());
        assert!(!d.consume_pressed());

        d.update(true, 65);
        assert!(d.is_pressed());
        assert!(d.consume_pressed());

        // Exactly once.
        d.update(true, 70);
        assert!(!d.consume_pressed());
    }

    #[test]
    fn test_chatter_within_window_never_commits() {
        let mut d = Debouncer::new(50);

        // Toggle every 5 ms for a long time; no toggle-to-toggle gap
        // reaches the window, so the stable state never moves.
        let mut raw = false;
        for t in (0..1000).step_by(5) {
            raw = !raw;
            d.update(raw, t);
            assert!(!d.is_pressed());
            assert!(!d.consume_pressed());
            assert!(!d.consume_released());
        }
    }

    #[test]
    fn test_release_edge() {
        let mut d = Debouncer::new(50);

        d.update(true, 0);
        d.update(true, 50);
        assert!(d.consume_pressed());

        d.update(false, 100);
        assert!(d.is_pressed());
        d.update(false, 150);
        assert!(!d.is_pressed());
        assert!(d.consume_released());
        assert!(!d.consume_released());
    }

    #[test]
    fn test_edges_never_both_set() {
        let mut d = Debouncer::new(50);
        let samples = [
            (true, 0u32),
            (false, 10),
            (true, 15),
            (true, 65),
            (false, 70),
            (false, 200),
            (true, 201),
            (true, 300),
        ];

        for (raw, t) in samples {
            d.update(raw, t);
            let p = d.consume_pressed();
            let r = d.consume_released();
            assert!(!(p && r));
        }
    }

    #[test]
    fn test_consume_is_exactly_once() {
        let mut d = Debouncer::new(50);
        d.update(true, 0);
        d.update(true, 50);

        assert!(d.consume_pressed());
        assert!(!d.consume_pressed());
    }

    #[test]
    fn test_unconsumed_edge_clears_on_next_update() {
        let mut d = Debouncer::new(50);
        d.update(true, 0);
        d.update(true, 50);
        // Edge pending but not consumed.
        d.update(true, 55);
        assert!(!d.consume_pressed());
    }

    #[test]
    fn test_tick_wraparound() {
        let mut d = Debouncer::new(50);

        // Transition recorded just before the counter rolls over.
        d.update(true, u32::MAX - 9);
        assert!(!d.is_pressed());

        // 10 ms before rollover + 40 ms after = window elapsed.
        d.update(true, 40);
        assert!(d.is_pressed());
        assert!(d.consume_pressed());
    }

    #[test]
    fn test_zero_window_commits_immediately() {
        let mut d = Debouncer::new(0);
        d.update(true, 7);
        assert!(d.is_pressed());
        assert!(d.consume_pressed());
    }
}
