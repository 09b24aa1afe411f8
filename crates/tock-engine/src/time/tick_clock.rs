use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Fixed-interval frame pacing.
///
/// The clock is due immediately after construction. Once a frame is finished,
/// the next frame is due one `interval` after the finish time, so slow frames
/// push the schedule back instead of bunching up.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_due: Instant,
    frame_index: u64,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    /// Clock whose first frame is due at `start`.
    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_due: start,
            frame_index: 0,
        }
    }

    /// When the next frame should run.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next_due
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Starts a frame at `now` and returns its timing.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let ft = FrameTime {
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Marks the current frame finished at `now`; the next one is due after the interval.
    pub fn finish(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_millis(1000);

    #[test]
    fn due_immediately() {
        let start = Instant::now();
        let clock = TickClock::starting_at(SECOND, start);
        assert!(clock.is_due(start));
    }

    #[test]
    fn one_frame_per_interval() {
        let start = Instant::now();
        let mut clock = TickClock::starting_at(SECOND, start);

        // Simulate 10 ms polling over 3.5 s; count frames.
        let mut frames = 0;
        for step in 0..350u64 {
            let now = start + Duration::from_millis(step * 10);
            if clock.is_due(now) {
                clock.tick(now);
                clock.finish(now);
                frames += 1;
            }
        }
        assert_eq!(frames, 4); // t = 0, 1, 2, 3 s
    }

    #[test]
    fn not_due_until_interval_after_finish() {
        let start = Instant::now();
        let mut clock = TickClock::starting_at(SECOND, start);

        clock.tick(start);
        let finished = start + Duration::from_millis(40);
        clock.finish(finished);

        assert_eq!(clock.deadline(), finished + SECOND);
        assert!(!clock.is_due(start + SECOND));
        assert!(clock.is_due(finished + SECOND));
    }

    #[test]
    fn tick_reports_timestamp_and_index() {
        let start = Instant::now();
        let mut clock = TickClock::starting_at(SECOND, start);

        let first = clock.tick(start);
        assert_eq!(first.frame_index, 0);
        assert_eq!(first.now, start);

        let later = start + Duration::from_millis(1500);
        let second = clock.tick(later);
        assert_eq!(second.frame_index, 1);
        assert_eq!(second.now, later);
    }
}
