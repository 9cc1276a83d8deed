//! Submission timing.
//!
//! The aggregator owns an explicit [`TimingWindow`] and is driven with
//! caller-supplied instants, so the whole state machine runs in tests without
//! a display loop.
//!
//! Averaging rule: windowed. Times are only summed per frame; averages are
//! computed once at the window boundary from the totals of that window. A
//! window never spans two draw counts or two draw modes.

mod aggregator;
mod report;
mod window;

pub use aggregator::{TimingAggregator, DEFAULT_REPORT_PERIOD, MAX_DRAW_COUNT};
pub use report::BenchReport;
pub use window::TimingWindow;
