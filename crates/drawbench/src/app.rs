use std::time::{Duration, Instant};

use drawbench_engine::core::{App, AppControl, FrameCtx};
use drawbench_engine::logging::REPORT_TARGET;
use drawbench_engine::paint::Rgb;
use drawbench_engine::render::{DrawMode, GradientRenderer};
use drawbench_engine::timing::TimingAggregator;

use crate::controls::{self, Control, PaletteCursor};

/// Startup parameters of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub draw_count: u32,
    pub mode: DrawMode,
    pub top: Rgb,
    pub bottom: Rgb,
    pub report_period: Duration,
}

/// Control-panel state read by every tick.
///
/// Draw count and mode live in the aggregator so that changing either one
/// starts a fresh window. Color changes are queued here and flushed to the
/// uniform buffer at the start of the next frame, where the device queue is
/// available.
#[derive(Debug)]
pub struct BenchState {
    pub timing: TimingAggregator,
    pub pending_top: Option<Rgb>,
    pub pending_bottom: Option<Rgb>,
    top_cursor: PaletteCursor,
    bottom_cursor: PaletteCursor,
}

impl BenchState {
    pub fn new(config: &BenchConfig, now: Instant) -> Self {
        Self {
            timing: TimingAggregator::new(now, config.report_period, config.draw_count, config.mode),
            pending_top: None,
            pending_bottom: None,
            top_cursor: PaletteCursor::default(),
            bottom_cursor: PaletteCursor::default(),
        }
    }

    /// Applies one control-panel action.
    pub fn apply(&mut self, control: Control, now: Instant, indirect_supported: bool) -> AppControl {
        match control {
            Control::Exit => return AppControl::Exit,

            Control::ToggleMode => {
                if indirect_supported {
                    let mode = self.timing.mode().toggled();
                    self.timing.set_mode(mode, now);
                    log::info!("draw mode: {mode}");
                } else {
                    log::warn!("indirect draws are not supported by this adapter");
                }
            }

            Control::CycleTop => {
                let color = self.top_cursor.advance();
                log::info!("top color: {color}");
                self.pending_top = Some(color);
            }
            Control::CycleBottom => {
                let color = self.bottom_cursor.advance();
                log::info!("bottom color: {color}");
                self.pending_bottom = Some(color);
            }

            Control::ScaleUp
            | Control::ScaleDown
            | Control::StepUp
            | Control::StepDown
            | Control::Zero => {
                let next = controls::step_draw_count(self.timing.draw_count(), control);
                if self.timing.set_draw_count(next, now) {
                    log::info!("draw count: {next}");
                }
            }
        }
        AppControl::Continue
    }

    /// Falls back to direct draws when the adapter cannot execute indirect ones.
    pub fn enforce_capabilities(&mut self, indirect_supported: bool, now: Instant) {
        if self.timing.mode().is_indirect() && !indirect_supported {
            log::warn!("indirect draws are not supported by this adapter; using direct draws");
            self.timing.set_mode(DrawMode::Direct, now);
        }
    }
}

/// The benchmark application: one gradient, N draw calls per frame.
pub struct DrawBench {
    renderer: GradientRenderer,
    state: BenchState,
    capabilities_checked: bool,
}

impl DrawBench {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            renderer: GradientRenderer::new(config.top, config.bottom),
            state: BenchState::new(&config, Instant::now()),
            capabilities_checked: false,
        }
    }
}

impl App for DrawBench {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let now = ctx.now;
        let indirect_supported = ctx.gpu.supports_indirect_draws();

        if !self.capabilities_checked {
            self.state.enforce_capabilities(indirect_supported, now);
            self.capabilities_checked = true;
        }

        for &key in &ctx.input_frame.keys_pressed {
            let Some(control) = controls::control_for(key) else { continue };
            if self.state.apply(control, now, indirect_supported) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        let state = &mut self.state;
        let renderer = &mut self.renderer;
        let rendered = ctx.render(|rctx, target| {
            renderer.set_uniforms(rctx.queue, state.pending_top.take(), state.pending_bottom.take());

            state
                .timing
                .run_frame(now, |draw_count, mode| renderer.draw(rctx, target, draw_count, mode))
        });

        match rendered {
            Ok(Some(report)) => {
                log::info!(target: REPORT_TARGET, "{report}");
                ctx.window.set_title(&format!("drawbench | {report}"));
                AppControl::Continue
            }
            Ok(None) => AppControl::Continue,
            Err(control) => control,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BenchConfig {
        BenchConfig {
            draw_count: 100,
            mode: DrawMode::Direct,
            top: Rgb::new(1.0, 1.0, 1.0),
            bottom: Rgb::new(0.0, 0.0, 0.0),
            report_period: Duration::from_secs(1),
        }
    }

    #[test]
    fn toggling_mode_starts_a_fresh_window() {
        let t0 = Instant::now();
        let mut state = BenchState::new(&config(), t0);
        state.timing.end_frame(1.0);

        let later = t0 + Duration::from_millis(250);
        state.apply(Control::ToggleMode, later, true);

        assert_eq!(state.timing.mode(), DrawMode::Indirect);
        assert_eq!(state.timing.window().frames(), 0);
        assert_eq!(state.timing.window().start(), later);
        assert!(state.pending_top.is_none());
        assert!(state.pending_bottom.is_none());
    }

    #[test]
    fn toggle_is_ignored_without_indirect_support() {
        let t0 = Instant::now();
        let mut state = BenchState::new(&config(), t0);
        state.timing.end_frame(1.0);

        state.apply(Control::ToggleMode, t0, false);
        assert_eq!(state.timing.mode(), DrawMode::Direct);
        assert_eq!(state.timing.window().frames(), 1);
    }

    #[test]
    fn draw_count_control_resets_window() {
        let t0 = Instant::now();
        let mut state = BenchState::new(&config(), t0);
        state.timing.end_frame(1.0);

        let later = t0 + Duration::from_millis(400);
        state.apply(Control::ScaleUp, later, true);

        assert_eq!(state.timing.draw_count(), 1000);
        assert_eq!(state.timing.window().frames(), 0);
        assert_eq!(state.timing.window().start(), later);
    }

    #[test]
    fn color_controls_queue_one_slot_each() {
        let t0 = Instant::now();
        let mut state = BenchState::new(&config(), t0);

        state.apply(Control::CycleTop, t0, true);
        assert!(state.pending_top.is_some());
        assert!(state.pending_bottom.is_none());

        state.apply(Control::CycleBottom, t0, true);
        assert!(state.pending_bottom.is_some());
    }

    #[test]
    fn color_controls_keep_window() {
        let t0 = Instant::now();
        let mut state = BenchState::new(&config(), t0);
        state.timing.end_frame(1.0);

        state.apply(Control::CycleTop, t0, true);
        assert_eq!(state.timing.window().frames(), 1);
    }

    #[test]
    fn exit_control_stops_the_loop() {
        let t0 = Instant::now();
        let mut state = BenchState::new(&config(), t0);
        assert_eq!(state.apply(Control::Exit, t0, true), AppControl::Exit);
    }

    #[test]
    fn unsupported_indirect_start_falls_back_to_direct() {
        let mut cfg = config();
        cfg.mode = DrawMode::Indirect;
        let t0 = Instant::now();
        let mut state = BenchState::new(&cfg, t0);

        state.enforce_capabilities(false, t0);
        assert_eq!(state.timing.mode(), DrawMode::Direct);
    }
}
