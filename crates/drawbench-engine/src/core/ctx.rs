use std::time::Instant;

use winit::window::Window;

use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::input::InputFrame;
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Window handle for the current frame.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input_frame: &'a InputFrame,

    /// Timestamp taken when the redraw started; drives the timing window.
    pub now: Instant,
}

impl FrameCtx<'_, '_> {
    /// Acquires the surface texture, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then presents.
    ///
    /// `draw` is responsible for submitting its commands. A surface error skips
    /// the frame and yields the directive the caller should return.
    pub fn render<F, R>(&mut self, draw: F) -> Result<R, AppControl>
    where
        F: FnOnce(&RenderCtx<'_>, RenderTarget<'_>) -> R,
    {
        let frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::warn!("surface error: {err}");
                return Err(match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        AppControl::Continue
                    }
                });
            }
        };

        let GpuFrame {
            surface_texture,
            view,
        } = frame;

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.gpu.supports_indirect_draws(),
        );
        let out = draw(&rctx, RenderTarget::new(&view));

        self.window.window.pre_present_notify();
        drop(view);
        surface_texture.present();

        Ok(out)
    }
}
