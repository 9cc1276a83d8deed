//! Drawbench engine crate.
//!
//! Owns the platform + GPU runtime pieces and the draw-call benchmark core
//! (uniform writer, indirect descriptor, frame submitter, timing aggregator).

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod paint;
pub mod render;
pub mod timing;
