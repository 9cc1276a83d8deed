use std::time::{Duration, Instant};

use crate::render::DrawMode;

use super::{BenchReport, TimingWindow};

/// Upper bound of the draw-call count.
pub const MAX_DRAW_COUNT: u32 = 1_000_000;

/// Length of a reporting window.
pub const DEFAULT_REPORT_PERIOD: Duration = Duration::from_secs(1);

/// Drives the per-frame timing state machine.
///
/// Per tick (see [`run_frame`](Self::run_frame)):
/// 1. if the window is at least `period` old, emit a report and reset it;
/// 2. run the submission with the current draw count and mode;
/// 3. add the measured time to the window.
///
/// Changing the draw count or the draw mode resets the window immediately, so
/// every report describes a single configuration.
#[derive(Debug, Clone)]
pub struct TimingAggregator {
    window: TimingWindow,
    period: Duration,
    draw_count: u32,
    mode: DrawMode,
}

impl TimingAggregator {
    pub fn new(now: Instant, period: Duration, draw_count: u32, mode: DrawMode) -> Self {
        Self {
            window: TimingWindow::new(now),
            period,
            draw_count: draw_count.min(MAX_DRAW_COUNT),
            mode,
        }
    }

    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn window(&self) -> &TimingWindow {
        &self.window
    }

    /// Sets the draw count (clamped to [`MAX_DRAW_COUNT`]).
    ///
    /// Returns `true` if the value changed, in which case the in-progress
    /// window is discarded.
    pub fn set_draw_count(&mut self, draw_count: u32, now: Instant) -> bool {
        let draw_count = draw_count.min(MAX_DRAW_COUNT);
        if draw_count == self.draw_count {
            return false;
        }

        self.draw_count = draw_count;
        self.window.reset(now);
        true
    }

    /// Sets the draw mode. Returns `true` if it changed, in which case the
    /// in-progress window is discarded.
    pub fn set_mode(&mut self, mode: DrawMode, now: Instant) -> bool {
        if mode == self.mode {
            return false;
        }

        self.mode = mode;
        self.window.reset(now);
        true
    }

    /// Step 1 of a tick: closes the window if it is due.
    ///
    /// A due window that measured no frames is reset without a report.
    pub fn begin_frame(&mut self, now: Instant) -> Option<BenchReport> {
        if self.window.age(now) < self.period {
            return None;
        }

        let report = BenchReport::from_window(self.draw_count, self.mode, &self.window);
        self.window.reset(now);
        report
    }

    /// Step 3 of a tick: accounts one frame's submission time.
    pub fn end_frame(&mut self, elapsed_ms: f64) {
        self.window.record(elapsed_ms);
    }

    /// Runs a whole tick. `submit` receives the draw count and mode and returns
    /// the submission time in milliseconds.
    pub fn run_frame<F>(&mut self, now: Instant, submit: F) -> Option<BenchReport>
    where
        F: FnOnce(u32, DrawMode) -> f64,
    {
        let report = self.begin_frame(now);
        let elapsed_ms = submit(self.draw_count, self.mode);
        self.end_frame(elapsed_ms);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn report_after_one_second_at_constant_count() {
        let t0 = Instant::now();
        let mut agg = TimingAggregator::new(t0, DEFAULT_REPORT_PERIOD, 100, DrawMode::Direct);

        // 50 frames at 20 ms spacing: t = 0, 20, ..., 980.
        for i in 0..50u64 {
            let report = agg.run_frame(t0 + ms(i * 20), |n, mode| {
                assert_eq!(n, 100);
                assert_eq!(mode, DrawMode::Direct);
                0.5 + (i % 2) as f64 * 0.5
            });
            assert!(report.is_none());
        }

        assert_eq!(agg.window().frames(), 50);
        let total = agg.window().cumulative_ms();
        assert_eq!(total, 25.0 * 0.5 + 25.0 * 1.0);

        let report = agg
            .run_frame(t0 + ms(1000), |_, _| 2.0)
            .expect("window is due at 1000 ms");

        assert_eq!(report.frames, 50);
        assert_eq!(report.draw_count, 100);
        assert_eq!(report.avg_frame_ms, total / 50.0);
        assert_eq!(report.avg_call_ms, Some(total / 50.0 / 100.0));

        // The reporting tick itself opens the new window.
        assert_eq!(agg.window().start(), t0 + ms(1000));
        assert_eq!(agg.window().frames(), 1);
        assert_eq!(agg.window().cumulative_ms(), 2.0);
    }

    #[test]
    fn no_report_before_period_elapses() {
        let t0 = Instant::now();
        let mut agg = TimingAggregator::new(t0, DEFAULT_REPORT_PERIOD, 10, DrawMode::Direct);

        assert!(agg.run_frame(t0 + ms(999), |_, _| 1.0).is_none());
        assert_eq!(agg.window().frames(), 1);
    }

    #[test]
    fn draw_count_change_resets_immediately() {
        let t0 = Instant::now();
        let mut agg = TimingAggregator::new(t0, DEFAULT_REPORT_PERIOD, 10, DrawMode::Direct);
        agg.run_frame(t0, |_, _| 3.0);
        agg.run_frame(t0 + ms(16), |_, _| 3.0);

        let changed = agg.set_draw_count(20, t0 + ms(300));

        assert!(changed);
        assert_eq!(agg.draw_count(), 20);
        assert_eq!(agg.window().frames(), 0);
        assert_eq!(agg.window().cumulative_ms(), 0.0);
        assert_eq!(agg.window().start(), t0 + ms(300));

        // The next report is a full period after the change, not after t0.
        assert!(agg.run_frame(t0 + ms(1000), |_, _| 1.0).is_none());
        assert!(agg.run_frame(t0 + ms(1300), |_, _| 1.0).is_some());
    }

    #[test]
    fn same_draw_count_keeps_window() {
        let t0 = Instant::now();
        let mut agg = TimingAggregator::new(t0, DEFAULT_REPORT_PERIOD, 10, DrawMode::Direct);
        agg.run_frame(t0, |_, _| 3.0);

        assert!(!agg.set_draw_count(10, t0 + ms(5)));
        assert_eq!(agg.window().frames(), 1);
    }

    #[test]
    fn draw_count_is_clamped() {
        let t0 = Instant::now();
        let mut agg = TimingAggregator::new(t0, DEFAULT_REPORT_PERIOD, u32::MAX, DrawMode::Direct);
        assert_eq!(agg.draw_count(), MAX_DRAW_COUNT);

        assert!(!agg.set_draw_count(MAX_DRAW_COUNT + 1, t0));
        assert_eq!(agg.draw_count(), MAX_DRAW_COUNT);
    }

    #[test]
    fn due_window_without_frames_resets_silently() {
        let t0 = Instant::now();
        let mut agg = TimingAggregator::new(t0, DEFAULT_REPORT_PERIOD, 10, DrawMode::Direct);

        assert!(agg.begin_frame(t0 + ms(5000)).is_none());
        assert_eq!(agg.window().start(), t0 + ms(5000));
    }

    #[test]
    fn zero_draw_count_reports_frame_average_only() {
        let t0 = Instant::now();
        let mut agg = TimingAggregator::new(t0, DEFAULT_REPORT_PERIOD, 0, DrawMode::Direct);
        agg.run_frame(t0, |n, _| {
            assert_eq!(n, 0);
            0.25
        });

        let report = agg.begin_frame(t0 + ms(1000)).unwrap();
        assert_eq!(report.avg_frame_ms, 0.25);
        assert_eq!(report.avg_call_ms, None);
    }

    #[test]
    fn mode_change_mid_window_keeps_modes_apart() {
        let t0 = Instant::now();
        let mut agg = TimingAggregator::new(t0, DEFAULT_REPORT_PERIOD, 100, DrawMode::Direct);

        for i in 0..10u64 {
            agg.run_frame(t0 + ms(i * 10), |_, mode| {
                assert_eq!(mode, DrawMode::Direct);
                1.0
            });
        }

        assert!(agg.set_mode(DrawMode::Indirect, t0 + ms(100)));
        assert_eq!(agg.window().frames(), 0);
        assert_eq!(agg.window().start(), t0 + ms(100));

        for i in 0..10u64 {
            agg.run_frame(t0 + ms(100 + i * 10), |_, mode| {
                assert_eq!(mode, DrawMode::Indirect);
                9.0
            });
        }

        let report = agg.begin_frame(t0 + ms(1100)).unwrap();
        assert_eq!(report.mode, DrawMode::Indirect);
        assert_eq!(report.frames, 10);
        assert_eq!(report.avg_frame_ms, 9.0);
    }

    #[test]
    fn same_mode_keeps_window() {
        let t0 = Instant::now();
        let mut agg = TimingAggregator::new(t0, ms(100), 5, DrawMode::Indirect);
        agg.run_frame(t0, |_, _| 1.0);

        assert!(!agg.set_mode(DrawMode::Indirect, t0 + ms(50)));
        assert_eq!(agg.window().frames(), 1);

        let report = agg.begin_frame(t0 + ms(100)).unwrap();
        assert_eq!(report.mode, DrawMode::Indirect);
    }
}
