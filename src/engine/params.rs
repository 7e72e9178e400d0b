//! Run configuration for the growth engine.

use crate::metric::{Aggregation, DistanceMetric};
use crate::palette::{MAX_BITS, MIN_BITS};
use thiserror::Error;

/// Parameters fully determining one growth run.
#[derive(Clone, Debug)]
pub struct BloomParams {
    /// Bits per channel in [1, 8]; drives both the color-space size and the
    /// grid dimensions.
    pub bits_per_channel: u8,
    /// Seed for the placement-order shuffle and the first-pixel draw.
    pub seed: u64,
    /// Metric used for every scoring comparison of the run.
    pub metric: DistanceMetric,
    /// How per-neighbor distances combine into one frontier-cell score.
    pub aggregation: Aggregation,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            bits_per_channel: 4,
            seed: 1024,
            metric: DistanceMetric::default(),
            aggregation: Aggregation::default(),
        }
    }
}

impl BloomParams {
    /// Rejects configurations before any grid work begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BITS..=MAX_BITS).contains(&self.bits_per_channel) {
            return Err(ConfigError::BitsOutOfRange(self.bits_per_channel));
        }
        Ok(())
    }
}

/// Configuration rejected before any grid work begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bits per channel must be in [1, 8], got {0}")]
    BitsOutOfRange(u8),
    #[error("grid holds {cells} cells but the color space has {colors} colors")]
    SizeMismatch { cells: usize, colors: usize },
}
