//! Frame clock: the single time source every animated object reads.

use std::time::Instant;

/// What an object sees when it is updated for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous tick (0.0 on the first tick).
    pub delta: f32,
    /// Monotonic frame counter, starting at 1 for the first tick.
    pub frame: u64,
}

impl FrameContext {
    /// Context for a fixed time, used when re-evaluating a scene at `t`.
    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            delta: 0.0,
            frame: 0,
        }
    }

    /// True when time advanced since the previous frame.
    ///
    /// Smoothed interaction values only step on advancing frames, so
    /// evaluating the same `t` twice yields the same transforms.
    pub fn advances(&self) -> bool {
        self.delta > 0.0
    }
}

/// Monotonic elapsed-time source, read once per rendered frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last_elapsed: f32,
    frame: u64,
}

impl FrameClock {
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            last_elapsed: 0.0,
            frame: 0,
        }
    }

    /// Advance to `now` and return the context for this frame.
    ///
    /// A `now` earlier than the previous tick is clamped so `elapsed`
    /// never decreases.
    pub fn tick(&mut self, now: Instant) -> FrameContext {
        let elapsed = now
            .saturating_duration_since(self.start)
            .as_secs_f32()
            .max(self.last_elapsed);
        let delta = elapsed - self.last_elapsed;
        self.last_elapsed = elapsed;
        self.frame += 1;
        FrameContext {
            elapsed,
            delta,
            frame: self.frame,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.last_elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn elapsed_is_monotonic() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let a = clock.tick(start + Duration::from_millis(500));
        let b = clock.tick(start + Duration::from_millis(200));
        assert!((a.elapsed - 0.5).abs() < 1e-4);
        assert_eq!(b.elapsed, a.elapsed);
        assert_eq!(b.delta, 0.0);
        assert_eq!(b.frame, 2);
    }

    #[test]
    fn delta_tracks_ticks() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        clock.tick(start + Duration::from_millis(100));
        let f = clock.tick(start + Duration::from_millis(116));
        assert!((f.delta - 0.016).abs() < 1e-4);
        assert!(f.advances());
    }

    #[test]
    fn fixed_context_does_not_advance() {
        assert!(!FrameContext::at(3.0).advances());
    }
}
