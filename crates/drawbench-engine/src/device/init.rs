/// Startup options for [`Gpu`](super::Gpu).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Requested swap behavior. Unsupported explicit modes fall back to FIFO.
    pub present_mode: wgpu::PresentMode,

    /// Use an sRGB swapchain format when the surface offers one.
    pub prefer_srgb: bool,

    /// Composite alpha; `None` takes the surface's first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Device limits. The benchmark needs nothing beyond the defaults.
    pub limits: wgpu::Limits,

    /// Frames the presentation engine may queue ahead (hint).
    pub frame_latency: u32,
}

impl GpuInit {
    pub fn with_present_mode(mut self, present_mode: wgpu::PresentMode) -> Self {
        self.present_mode = present_mode;
        self
    }
}

impl Default for GpuInit {
    /// Uncapped presentation so vblank waits do not bound the frame rate.
    fn default() -> Self {
        Self {
            present_mode: wgpu::PresentMode::AutoNoVsync,
            prefer_srgb: true,
            alpha_mode: None,
            limits: wgpu::Limits::default(),
            frame_latency: 2,
        }
    }
}
