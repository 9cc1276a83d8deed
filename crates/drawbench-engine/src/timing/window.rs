use std::time::{Duration, Instant};

/// Accumulated submission time since `start`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimingWindow {
    start: Instant,
    frames: u32,
    cumulative_ms: f64,
}

impl TimingWindow {
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            frames: 0,
            cumulative_ms: 0.0,
        }
    }

    /// Discards everything accumulated and restarts at `now`.
    pub fn reset(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    /// Adds one frame's submission time.
    pub fn record(&mut self, elapsed_ms: f64) {
        self.frames += 1;
        self.cumulative_ms += elapsed_ms;
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn cumulative_ms(&self) -> f64 {
        self.cumulative_ms
    }

    /// Time since the window started; zero if `now` precedes it.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    /// Mean submission time per frame, `None` for an empty window.
    pub fn average_frame_ms(&self) -> Option<f64> {
        (self.frames > 0).then(|| self.cumulative_ms / self.frames as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates_and_reset_clears() {
        let t0 = Instant::now();
        let mut w = TimingWindow::new(t0);
        w.record(1.5);
        w.record(2.5);

        assert_eq!(w.frames(), 2);
        assert_eq!(w.cumulative_ms(), 4.0);
        assert_eq!(w.average_frame_ms(), Some(2.0));

        let t1 = t0 + Duration::from_millis(10);
        w.reset(t1);
        assert_eq!(w, TimingWindow::new(t1));
    }

    #[test]
    fn empty_window_has_no_average() {
        assert_eq!(TimingWindow::new(Instant::now()).average_frame_ms(), None);
    }

    #[test]
    fn age_saturates() {
        let t0 = Instant::now();
        let w = TimingWindow::new(t0 + Duration::from_secs(1));
        assert_eq!(w.age(t0), Duration::ZERO);
    }
}
