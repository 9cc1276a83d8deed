use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Straight (non-premultiplied) RGB color stop.
///
/// Channels are expected in `[0, 1]`. Alpha is not part of the stop; it is
/// supplied separately when the stop is encoded into the uniform block.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("expected a color like #rrggbb, got {s:?}");
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("invalid hex digits in color {s:?}"))
        };

        Ok(Self::from_u8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Clamps channels to `[0, 1]`; NaN becomes 0.
    #[inline]
    pub fn clamped(self) -> Self {
        let c = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self::new(c(self.r), c(self.g), c(self.b))
    }

    /// Channels plus `alpha`, in uniform slot order.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.clamped();
        let q = |v: f32| (v * 255.0).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x}", q(c.r), q(c.g), q(c.b))
    }
}

/// Fixed palette cycled through by the control panel.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(1.0, 0.0, 0.0),
    Rgb::new(1.0, 0.5, 0.0),
    Rgb::new(1.0, 1.0, 0.0),
    Rgb::new(0.0, 1.0, 0.0),
    Rgb::new(0.0, 1.0, 1.0),
    Rgb::new(0.0, 0.0, 1.0),
    Rgb::new(1.0, 0.0, 1.0),
    Rgb::new(1.0, 1.0, 1.0),
];
