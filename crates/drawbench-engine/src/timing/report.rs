use std::fmt;

use crate::render::DrawMode;

use super::TimingWindow;

/// One reporting interval's averages.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BenchReport {
    pub draw_count: u32,
    pub mode: DrawMode,

    /// Frames measured in the interval.
    pub frames: u32,

    /// Mean submission time per frame (ms).
    pub avg_frame_ms: f64,

    /// Mean submission time per draw call (ms); `None` when `draw_count == 0`.
    pub avg_call_ms: Option<f64>,
}

impl BenchReport {
    /// Averages a closed window; `None` if it measured no frame.
    pub fn from_window(draw_count: u32, mode: DrawMode, window: &TimingWindow) -> Option<Self> {
        let avg_frame_ms = window.average_frame_ms()?;
        let avg_call_ms = (draw_count > 0).then(|| avg_frame_ms / draw_count as f64);

        Some(Self {
            draw_count,
            mode,
            frames: window.frames(),
            avg_frame_ms,
            avg_call_ms,
        })
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "draw calls: {} ({}), avg frame: {:.4} ms, avg per call: ",
            self.draw_count, self.mode, self.avg_frame_ms
        )?;
        match self.avg_call_ms {
            Some(ms) => write!(f, "{ms:.4} ms"),
            None => f.write_str("n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn window(frames: u32, total_ms: f64) -> TimingWindow {
        let mut w = TimingWindow::new(Instant::now());
        for _ in 0..frames {
            w.record(total_ms / frames as f64);
        }
        w
    }

    #[test]
    fn averages_divide_totals() {
        let r = BenchReport::from_window(100, DrawMode::Direct, &window(50, 25.0)).unwrap();
        assert_eq!(r.frames, 50);
        assert_eq!(r.avg_frame_ms, 0.5);
        assert_eq!(r.avg_call_ms, Some(0.005));
    }

    #[test]
    fn zero_draws_has_no_per_call_average() {
        let r = BenchReport::from_window(0, DrawMode::Direct, &window(10, 1.0)).unwrap();
        assert_eq!(r.avg_call_ms, None);
        assert!(r.to_string().ends_with("avg per call: n/a"));
    }

    #[test]
    fn empty_window_yields_no_report() {
        assert!(BenchReport::from_window(10, DrawMode::Indirect, &window(0, 0.0)).is_none());
    }

    #[test]
    fn display_uses_four_decimals() {
        let r = BenchReport::from_window(1000, DrawMode::Indirect, &window(4, 10.0)).unwrap();
        assert_eq!(
            r.to_string(),
            "draw calls: 1000 (indirect), avg frame: 2.5000 ms, avg per call: 0.0025 ms"
        );
    }
}
