use crate::metric::{Aggregation, DistanceMetric};
use serde::Serialize;

/// A 24-bit color with explicit channel fields.
///
/// Bit-level views needed by the bitwise metrics go through [`Rgb::packed`]
/// (`0x00RRGGBB` layout); everything else reads the channels directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the channels into the `0x00RRGGBB` integer layout.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Inverse of [`Rgb::packed`]; the top byte is ignored.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Perceptual brightness estimate (green-weighted squared channels).
    #[inline]
    pub fn brightness(self) -> u32 {
        let r = self.r as f64;
        let g = self.g as f64;
        let b = self.b as f64;
        (r * r * 0.241 + g * g * 0.691 + b * b * 0.068) as u32
    }

    /// Red/blue balance; positive values read as warm.
    #[inline]
    pub fn warmth(self) -> i32 {
        self.r as i32 - self.b as i32
    }
}

/// Compact summary of a finished growth run.
#[derive(Clone, Debug, Serialize)]
pub struct BloomResult {
    pub width: usize,
    pub height: usize,
    pub bits_per_channel: u8,
    pub seed: u64,
    pub metric: DistanceMetric,
    pub aggregation: Aggregation,
    /// Linear index of the randomly chosen first pixel.
    pub seed_index: usize,
    /// Grow steps executed after the seed placement (cells − 1 on success).
    pub steps: usize,
    pub latency_ms: f64,
}
