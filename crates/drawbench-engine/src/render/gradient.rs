use std::ops::Range;

use crate::paint::Rgb;
use crate::render::indirect::IndirectDescriptor;
use crate::render::submit::{submit_frame, CommandSink, DrawMode, PassRecorder};
use crate::render::uniforms::{self, QueueTarget, DEFAULT_ALPHA, UNIFORM_SIZE};
use crate::render::{RenderCtx, RenderTarget};

/// Fixed GPU objects of the benchmark, created once per surface format.
pub struct GradientResources {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    indirect: IndirectDescriptor,
}

impl GradientResources {
    fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("drawbench gradient shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/gradient.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("drawbench gradient bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(UNIFORM_SIZE as u64),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("drawbench gradient pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("drawbench gradient pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("drawbench gradient ubo"),
            size: UNIFORM_SIZE as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("drawbench gradient bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let indirect = IndirectDescriptor::new(device);

        log::debug!(
            "gradient pipeline created for {format:?}; indirect args {:?}",
            indirect.args()
        );

        Self {
            pipeline,
            bind_group,
            uniform_buffer,
            indirect,
        }
    }
}

/// Full-screen gradient renderer used as the draw-call benchmark payload.
///
/// GPU objects are created lazily on the first frame and rebuilt only if the
/// surface format changes. The current color stops are cached so a rebuild
/// uploads the same gradient.
pub struct GradientRenderer {
    format: Option<wgpu::TextureFormat>,
    resources: Option<GradientResources>,

    top: Rgb,
    bottom: Rgb,
}

impl GradientRenderer {
    pub fn new(top: Rgb, bottom: Rgb) -> Self {
        Self {
            format: None,
            resources: None,
            top,
            bottom,
        }
    }

    /// Updates one or both color stops.
    ///
    /// Only the slot of a changed stop is written; nothing is written when both
    /// are `None` or before the uniform buffer exists (the cached stops are
    /// uploaded on creation).
    pub fn set_uniforms(&mut self, queue: &wgpu::Queue, top: Option<Rgb>, bottom: Option<Rgb>) {
        if let Some(c) = top {
            self.top = c;
        }
        if let Some(c) = bottom {
            self.bottom = c;
        }

        let Some(res) = self.resources.as_ref() else { return };
        let mut target = QueueTarget {
            queue,
            buffer: &res.uniform_buffer,
        };
        uniforms::set_uniforms(&mut target, top, bottom, DEFAULT_ALPHA);
    }

    /// Records and submits one benchmark frame into `target`.
    ///
    /// `Indirect` is issued as `Direct` on adapters that cannot execute
    /// indirect draws. Returns the submission time in milliseconds (see
    /// [`submit_frame`]).
    pub fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: RenderTarget<'_>,
        draw_count: u32,
        mode: DrawMode,
    ) -> f64 {
        let mode = mode.supported_by(ctx.indirect_supported);
        let resources = self.ensure_resources(ctx);
        let sink = GpuSink {
            device: ctx.device,
            queue: ctx.queue,
            view: target.color_view,
            resources,
            encoder: None,
        };
        submit_frame(sink, draw_count, mode)
    }

    fn ensure_resources(&mut self, ctx: &RenderCtx<'_>) -> &GradientResources {
        if self.format != Some(ctx.surface_format) {
            self.resources = None;
            self.format = Some(ctx.surface_format);
        }

        let (top, bottom) = (self.top, self.bottom);
        self.resources.get_or_insert_with(|| {
            let res = GradientResources::new(ctx.device, ctx.surface_format);
            let mut target = QueueTarget {
                queue: ctx.queue,
                buffer: &res.uniform_buffer,
            };
            uniforms::set_uniforms(&mut target, Some(top), Some(bottom), DEFAULT_ALPHA);
            res
        })
    }
}

/// wgpu-backed command sink for one frame.
struct GpuSink<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    view: &'a wgpu::TextureView,
    resources: &'a GradientResources,
    encoder: Option<wgpu::CommandEncoder>,
}

struct GpuPass<'p> {
    rpass: wgpu::RenderPass<'p>,
    resources: &'p GradientResources,
}

impl CommandSink for GpuSink<'_> {
    type Pass<'p>
        = GpuPass<'p>
    where
        Self: 'p;

    fn begin_pass(&mut self, clear: wgpu::Color) -> GpuPass<'_> {
        let encoder = self.encoder.insert(self.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("drawbench frame encoder"),
            },
        ));

        let rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("drawbench pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        GpuPass {
            rpass,
            resources: self.resources,
        }
    }

    fn submit(self) {
        if let Some(encoder) = self.encoder {
            self.queue.submit(std::iter::once(encoder.finish()));
        }
    }
}

impl PassRecorder for GpuPass<'_> {
    fn set_bind_group(&mut self, slot: u32) {
        self.rpass.set_bind_group(slot, &self.resources.bind_group, &[]);
    }

    fn set_pipeline(&mut self) {
        self.rpass.set_pipeline(&self.resources.pipeline);
    }

    fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>) {
        self.rpass.draw(vertices, instances);
    }

    fn draw_indirect(&mut self, offset: u64) {
        self.rpass.draw_indirect(self.resources.indirect.buffer(), offset);
    }
}
