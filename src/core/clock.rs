//! Fixed-step accumulator that turns wall-clock frame time into simulation ticks.

use super::constants::MAX_FRAME_MS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    accumulated_ms: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt_ms` of elapsed time and return how many whole ticks are now due.
    ///
    /// `dt_ms` is clamped to [`MAX_FRAME_MS`] so a stall (suspended terminal, debugger)
    /// does not replay seconds of physics in one burst. The remainder carries over.
    pub fn advance(&mut self, dt_ms: u64, tick_ms: u64) -> u32 {
        let tick_ms = tick_ms.max(1);
        self.accumulated_ms += dt_ms.min(MAX_FRAME_MS);
        let due = self.accumulated_ms / tick_ms;
        self.accumulated_ms %= tick_ms;
        due as u32
    }

    pub fn pending_ms(&self) -> u64 {
        self.accumulated_ms
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_ticks() {
        let mut clock = Clock::new();
        assert_eq!(clock.advance(10, 16), 0);
        assert_eq!(clock.advance(10, 16), 1);
        assert_eq!(clock.pending_ms(), 4);
    }

    #[test]
    fn test_multiple_ticks_in_one_frame() {
        let mut clock = Clock::new();
        assert_eq!(clock.advance(50, 16), 3);
        assert_eq!(clock.pending_ms(), 2);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut clock = Clock::new();
        // 5 seconds of stall only simulates MAX_FRAME_MS worth of ticks
        assert_eq!(clock.advance(5_000, 16), (MAX_FRAME_MS / 16) as u32);
    }

    #[test]
    fn test_reset_drops_remainder() {
        let mut clock = Clock::new();
        clock.advance(15, 16);
        clock.reset();
        assert_eq!(clock.pending_ms(), 0);
        assert_eq!(clock.advance(1, 16), 0);
    }
}
