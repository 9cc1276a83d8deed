//! GPU rendering subsystem.
//!
//! Everything the draw-call benchmark needs on the GPU side:
//! - `uniforms`: 32-byte gradient block and its partial-update writer
//! - `indirect`: the fixed `{3, 1, 0, 0}` indirect argument buffer
//! - `submit`: one pass, N draws, one submit, timed
//! - `gradient`: pipeline/bind group setup and the wgpu command sink

mod ctx;
pub mod gradient;
pub mod indirect;
pub mod submit;
pub mod uniforms;

pub use ctx::{RenderCtx, RenderTarget};
pub use gradient::GradientRenderer;
pub use indirect::{DrawArgs, IndirectDescriptor};
pub use submit::{submit_frame, CommandSink, DrawMode, PassRecorder};
pub use uniforms::{set_uniforms, QueueTarget, UniformTarget, UNIFORM_SIZE};
