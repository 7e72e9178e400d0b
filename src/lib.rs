#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod grid;
pub mod metric;
pub mod palette;
pub mod render;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: engine + results.
pub use crate::engine::{BloomEngine, BloomOutcome, BloomParams, ConfigError, GrowthError};
pub use crate::types::{BloomResult, Rgb};

// Detailed run report returned alongside the canvas.
pub use crate::diagnostics::{BloomDiagnostics, BloomReport};

// Metric selection shared by params and config files.
pub use crate::metric::{Aggregation, DistanceMetric};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use color_bloom::prelude::*;
///
/// # fn main() {
/// let params = BloomParams {
///     bits_per_channel: 3,
///     seed: 7,
///     ..Default::default()
/// };
/// let mut engine = BloomEngine::new(params).expect("valid params");
/// let outcome = engine.generate().expect("growth completed");
/// println!(
///     "{}x{} steps={}",
///     outcome.result.width, outcome.result.height, outcome.result.steps
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::engine::{BloomEngine, BloomParams};
    pub use crate::metric::{Aggregation, DistanceMetric};
    pub use crate::types::Rgb;
}
