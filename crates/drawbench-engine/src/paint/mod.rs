//! Color model for the gradient stops.

pub mod color;

pub use color::{Rgb, PALETTE};
