//! Structured run diagnostics.
//!
//! Stage timings are wall-clock milliseconds measured with
//! `std::time::Instant`; counters describe the growth loop itself. The whole
//! report serializes to JSON for the demo tooling.

use crate::types::BloomResult;
use serde::Serialize;

/// Per-stage trace of one growth run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BloomDiagnostics {
    /// Color-space enumeration + shuffle.
    pub palette_ms: f64,
    /// Seed placement through frontier exhaustion.
    pub growth_ms: f64,
    /// Grow steps executed after the seed placement.
    pub steps: usize,
    /// Largest frontier observed during the run.
    pub peak_frontier: usize,
    /// Mean perceptual brightness of the finished canvas.
    pub mean_brightness: f64,
}

/// Serializable summary: compact result plus the stage trace.
#[derive(Clone, Debug, Serialize)]
pub struct BloomReport {
    pub result: BloomResult,
    pub trace: BloomDiagnostics,
}
