//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the benchmark window, and wires them to the
//! GPU layer. One redraw is in flight at a time.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
