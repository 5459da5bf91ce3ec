use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the clock was created. Never decreases.
    pub elapsed: f64,

    /// Time since the previous tick, in seconds, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// `elapsed` is measured from a fixed start instant and is not affected by the
/// delta-time clamp, so animation stays in sync with wall time. Only `dt` is
/// clamped, to keep camera motion sane after stalls (debugger, minimize).
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Restarts delta measurement without touching `elapsed`.
    ///
    /// Useful when resuming from suspension.
    pub fn reset_delta(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let now = now.max(self.last);
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            elapsed: now.saturating_duration_since(self.start).as_secs_f64(),
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic_and_frames_count_up() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        let c = clock.tick();

        assert!(a.elapsed <= b.elapsed && b.elapsed <= c.elapsed);
        assert_eq!((a.frame_index, b.frame_index, c.frame_index), (0, 1, 2));
    }

    #[test]
    fn dt_is_clamped_but_elapsed_is_not() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(50));
        let start = clock.start;

        let ft = clock.tick_at(start + Duration::from_secs(2));
        assert!((ft.dt - 0.05).abs() < 1e-6);
        assert!((ft.elapsed - 2.0).abs() < 1e-9);

        let ft = clock.tick_at(start + Duration::from_secs(2));
        assert!((ft.dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn earlier_instant_does_not_rewind() {
        let mut clock = FrameClock::new();
        let start = clock.start;

        let later = clock.tick_at(start + Duration::from_millis(500));
        let earlier = clock.tick_at(start + Duration::from_millis(100));

        assert!(earlier.elapsed >= later.elapsed);
    }
}
