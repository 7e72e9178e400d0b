//! Frontier-growth placement engine.
//!
//! Overview
//! - Shuffles the full color space into a seeded placement order.
//! - Seeds the canvas at a random cell, then grows one pixel per step: every
//!   frontier cell is scored against the next color using the configured
//!   metric, and the best-scoring cell (lowest linear index on ties) wins.
//! - Frontier membership is maintained incrementally; the loop ends exactly
//!   when frontier and placement order run out together, anything else is an
//!   invariant violation.
//!
//! Modules
//! - [`params`] – run configuration and its validation.
//! - [`frontier`] – the ordered set of growth-boundary indices.
//! - `pipeline` – the main [`BloomEngine`] implementation.
//!
//! Key ideas
//! - Per-step scoring is embarrassingly parallel read-only work over the
//!   canvas; the selection reduces `(score, index)` pairs, which keeps the
//!   tie-break deterministic no matter how the scan is scheduled.
//! - A `(bits, seed, metric, aggregation)` tuple fully determines the final
//!   canvas, bit for bit.

pub mod frontier;
pub mod params;
mod pipeline;

pub use frontier::Frontier;
pub use params::{BloomParams, ConfigError};
pub use pipeline::{BloomEngine, BloomOutcome, DetailedBloom, GrowthError};
