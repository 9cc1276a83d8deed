//! Frame submitter: one render pass, `draw_count` identical draws, one submit.
//!
//! The pass recorder is a trait so the submission sequence can be checked
//! without a device. The wgpu implementation lives in `gradient.rs`.

use std::fmt;
use std::ops::Range;
use std::time::Instant;

use crate::render::indirect::DrawArgs;

/// Clear color of the benchmark pass (opaque black).
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// Vertex range of the single full-screen triangle.
pub const TRIANGLE_VERTICES: Range<u32> = 0..DrawArgs::TRIANGLE.vertex_count;

/// Instance range of a direct draw.
pub const SINGLE_INSTANCE: Range<u32> = 0..DrawArgs::TRIANGLE.instance_count;

/// How each draw call is issued.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DrawMode {
    /// `draw(0..3, 0..1)` with inline arguments.
    #[default]
    Direct,
    /// `draw_indirect` reading [`DrawArgs::TRIANGLE`] from the GPU buffer at offset 0.
    Indirect,
}

impl DrawMode {
    pub fn toggled(self) -> Self {
        match self {
            DrawMode::Direct => DrawMode::Indirect,
            DrawMode::Indirect => DrawMode::Direct,
        }
    }

    pub fn is_indirect(self) -> bool {
        self == DrawMode::Indirect
    }

    /// The mode actually usable on an adapter: indirect degrades to direct
    /// when `draw_indirect` cannot execute.
    pub fn supported_by(self, indirect_supported: bool) -> Self {
        match self {
            DrawMode::Indirect if !indirect_supported => DrawMode::Direct,
            mode => mode,
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrawMode::Direct => "direct",
            DrawMode::Indirect => "indirect",
        })
    }
}

/// An open render pass with the benchmark's fixed pipeline, bind group and
/// indirect buffer available. The pass ends when the value is dropped.
pub trait PassRecorder {
    fn set_bind_group(&mut self, slot: u32);
    fn set_pipeline(&mut self);
    fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>);
    fn draw_indirect(&mut self, offset: u64);
}

/// Records a frame's commands and submits them as one batch.
pub trait CommandSink {
    type Pass<'p>: PassRecorder
    where
        Self: 'p;

    /// Opens a render pass on the frame's color target, cleared to `clear`.
    fn begin_pass(&mut self, clear: wgpu::Color) -> Self::Pass<'_>;

    /// Finishes recording and enqueues the commands.
    fn submit(self);
}

/// Records and submits one benchmark frame.
///
/// Returns the wall-clock submission time in milliseconds: pass recording plus
/// the submit call, not GPU execution. Pipeline and bind group are bound once;
/// `draw_count == 0` still yields an (empty) pass and a submit.
pub fn submit_frame<S: CommandSink>(mut sink: S, draw_count: u32, mode: DrawMode) -> f64 {
    let start = Instant::now();

    {
        let mut pass = sink.begin_pass(CLEAR_COLOR);
        pass.set_bind_group(0);
        pass.set_pipeline();

        match mode {
            DrawMode::Direct => {
                for _ in 0..draw_count {
                    pass.draw(TRIANGLE_VERTICES, SINGLE_INSTANCE);
                }
            }
            DrawMode::Indirect => {
                for _ in 0..draw_count {
                    pass.draw_indirect(0);
                }
            }
        }
    }

    sink.submit();

    start.elapsed().as_secs_f64() * 1000.0
}
