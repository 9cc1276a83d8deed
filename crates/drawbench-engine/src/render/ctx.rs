/// Renderer-facing context (device/queue + surface format + capabilities).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,

    /// Whether `draw_indirect` may be used on this adapter.
    pub indirect_supported: bool,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        indirect_supported: bool,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            indirect_supported,
        }
    }
}

/// Target for drawing: the current frame's color view.
///
/// The command encoder is created by whoever records the pass, so that encoder
/// creation falls inside the measured submission.
pub struct RenderTarget<'a> {
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(color_view: &'a wgpu::TextureView) -> Self {
        Self { color_view }
    }
}
