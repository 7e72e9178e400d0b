//! Engine pipeline driving the growth end-to-end.
//!
//! The [`BloomEngine`] exposes a simple API: validate the parameters once,
//! then generate a finished canvas together with a compact result or a
//! detailed stage trace.
//!
//! Typical usage:
//! ```no_run
//! use color_bloom::{BloomEngine, BloomParams};
//!
//! # fn example() {
//! let mut engine = BloomEngine::new(BloomParams::default()).expect("valid params");
//! let outcome = engine.generate().expect("growth completed");
//! println!("steps={}", outcome.result.steps);
//! # }
//! ```

use super::frontier::Frontier;
use super::params::{BloomParams, ConfigError};
use crate::diagnostics::{BloomDiagnostics, BloomReport};
use crate::grid::{Canvas, GridLayout};
use crate::metric::{Aggregation, DistanceMetric};
use crate::palette::PlacementOrder;
use crate::types::{BloomResult, Rgb};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;
use thiserror::Error;

/// Fatal run failure. Configuration problems surface before any grid work;
/// the exhaustion variants indicate a broken invariant, never a routine
/// condition, and must not be swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrowthError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("frontier exhausted with {colors_left} colors left to place")]
    FrontierExhausted { colors_left: usize },
    #[error("color space exhausted with {frontier_len} frontier cells left")]
    ColorsExhausted { frontier_len: usize },
}

/// Finished canvas plus the compact run summary.
#[derive(Clone, Debug)]
pub struct BloomOutcome {
    pub canvas: Canvas,
    pub result: BloomResult,
}

/// Outcome plus the detailed stage trace.
#[derive(Clone, Debug)]
pub struct DetailedBloom {
    pub outcome: BloomOutcome,
    pub trace: BloomDiagnostics,
}

impl DetailedBloom {
    /// Serializable report without the canvas payload.
    pub fn report(&self) -> BloomReport {
        BloomReport {
            result: self.outcome.result.clone(),
            trace: self.trace.clone(),
        }
    }
}

/// Growth engine owning the grid state for the duration of a run.
pub struct BloomEngine {
    params: BloomParams,
}

impl BloomEngine {
    /// Creates an engine after validating the parameters.
    pub fn new(params: BloomParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &BloomParams {
        &self.params
    }

    /// Runs the full Seed → Grow loop, returning the compact outcome.
    pub fn generate(&mut self) -> Result<BloomOutcome, GrowthError> {
        Ok(self.generate_detailed()?.outcome)
    }

    /// Runs the full loop and additionally returns the stage trace.
    pub fn generate_detailed(&mut self) -> Result<DetailedBloom, GrowthError> {
        self.params.validate()?;
        let bits = self.params.bits_per_channel;
        let metric = self.params.metric;
        let aggregation = self.params.aggregation;
        let layout = GridLayout::for_bits(bits);
        debug!(
            "BloomEngine::generate start bits={} {}x{} metric={:?} aggregation={:?} seed={}",
            bits, layout.width, layout.height, metric, aggregation, self.params.seed
        );
        let total_start = Instant::now();

        // Re-seeding per run keeps repeated generate() calls reproducible.
        let mut rng = StdRng::seed_from_u64(self.params.seed);

        let palette_start = Instant::now();
        let order =
            PlacementOrder::generate(bits, &mut rng).ok_or(ConfigError::BitsOutOfRange(bits))?;
        let palette_ms = palette_start.elapsed().as_secs_f64() * 1000.0;
        if order.len() != layout.cells() {
            return Err(GrowthError::Config(ConfigError::SizeMismatch {
                cells: layout.cells(),
                colors: order.len(),
            }));
        }

        let growth_start = Instant::now();
        let mut state = GrowthState::new(layout);
        let colors = order.as_slice();
        let mut next_color = 0usize;

        // Seed: the first placement has no neighbor constraint.
        let seed_index = rng.gen_range(0..layout.cells());
        state.seed(seed_index, colors[next_color]);
        next_color += 1;
        debug!(
            "BloomEngine::seed index={} color=#{:06x} frontier={}",
            seed_index,
            colors[next_color - 1].packed(),
            state.frontier.len()
        );

        let mut steps = 0usize;
        while !state.frontier.is_empty() {
            if next_color == colors.len() {
                return Err(GrowthError::ColorsExhausted {
                    frontier_len: state.frontier.len(),
                });
            }
            let color = colors[next_color];
            next_color += 1;
            state.grow(color, metric, aggregation);
            steps += 1;
        }
        if next_color != colors.len() {
            return Err(GrowthError::FrontierExhausted {
                colors_left: colors.len() - next_color,
            });
        }
        let growth_ms = growth_start.elapsed().as_secs_f64() * 1000.0;

        let mean_brightness = mean_brightness(&state.canvas);
        let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "BloomEngine::generate done steps={} peak_frontier={} latency_ms={:.3}",
            steps, state.peak_frontier, latency_ms
        );

        let result = BloomResult {
            width: layout.width,
            height: layout.height,
            bits_per_channel: bits,
            seed: self.params.seed,
            metric,
            aggregation,
            seed_index,
            steps,
            latency_ms,
        };
        let trace = BloomDiagnostics {
            palette_ms,
            growth_ms,
            steps,
            peak_frontier: state.peak_frontier,
            mean_brightness,
        };
        Ok(DetailedBloom {
            outcome: BloomOutcome {
                canvas: state.canvas,
                result,
            },
            trace,
        })
    }
}

/// Grid/frontier pair mutated by exactly one placement per step.
struct GrowthState {
    layout: GridLayout,
    canvas: Canvas,
    frontier: Frontier,
    peak_frontier: usize,
}

impl GrowthState {
    fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            canvas: Canvas::new(layout),
            frontier: Frontier::new(),
            peak_frontier: 0,
        }
    }

    /// Places the first color at `index` and opens its neighborhood.
    fn seed(&mut self, index: usize, color: Rgb) {
        self.canvas.set(index, color);
        self.open_neighbors(index);
    }

    /// Places `color` on the best-scoring frontier cell and returns its
    /// index, or `None` when the frontier is empty.
    fn grow(&mut self, color: Rgb, metric: DistanceMetric, aggregation: Aggregation) -> Option<usize> {
        // Parallel read-only scan; the (score, index) reduction makes the
        // lowest-index tie-break independent of scheduling.
        let (_, best) = self
            .frontier
            .as_slice()
            .par_iter()
            .map(|&index| (self.score_cell(color, metric, aggregation, index), index))
            .min()?;
        self.canvas.set(best, color);
        self.frontier.remove(best);
        self.open_neighbors(best);
        Some(best)
    }

    /// Aggregated metric distance of `color` against the placed neighbors of
    /// the frontier cell at `index`. Unset neighbors are skipped.
    fn score_cell(
        &self,
        color: Rgb,
        metric: DistanceMetric,
        aggregation: Aggregation,
        index: usize,
    ) -> i64 {
        let mut min = i64::MAX;
        let mut acc = 0i64;
        let mut count = 0i64;
        for neighbor in self.layout.neighbor_indices(index) {
            let Some(placed) = self.canvas.get(neighbor) else {
                continue;
            };
            let d = metric.evaluate(color, placed);
            min = min.min(d);
            acc += d;
            count += 1;
        }
        match aggregation {
            Aggregation::Min => min,
            Aggregation::Mean => {
                if count == 0 {
                    0
                } else {
                    acc / count
                }
            }
        }
    }

    fn open_neighbors(&mut self, index: usize) {
        for neighbor in self.layout.neighbor_indices(index) {
            if !self.canvas.is_set(neighbor) {
                self.frontier.insert(neighbor);
            }
        }
        self.peak_frontier = self.peak_frontier.max(self.frontier.len());
    }
}

fn mean_brightness(canvas: &Canvas) -> f64 {
    let count = canvas.set_count();
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = canvas
        .pixels()
        .map(|(_, _, color)| color.brightness() as u64)
        .sum();
    sum as f64 / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_frontier_invariant(state: &GrowthState) {
        for index in 0..state.layout.cells() {
            if state.canvas.is_set(index) {
                assert!(
                    !state.frontier.contains(index),
                    "set cell {index} must not be on the frontier"
                );
                continue;
            }
            let touches_set = state
                .layout
                .neighbor_indices(index)
                .any(|n| state.canvas.is_set(n));
            assert_eq!(
                state.frontier.contains(index),
                touches_set,
                "frontier membership of unset cell {index}"
            );
        }
    }

    #[test]
    fn frontier_invariant_holds_after_every_step() {
        let layout = GridLayout::for_bits(1);
        let mut rng = StdRng::seed_from_u64(1024);
        let order = PlacementOrder::generate(1, &mut rng).unwrap();
        let colors = order.as_slice();

        let mut state = GrowthState::new(layout);
        state.seed(5, colors[0]);
        assert_frontier_invariant(&state);

        for &color in &colors[1..] {
            let placed = state.grow(color, DistanceMetric::Manhattan, Aggregation::Min);
            assert!(placed.is_some());
            assert_frontier_invariant(&state);
        }
        assert!(state.frontier.is_empty());
        assert!(state.canvas.is_complete());
    }

    #[test]
    fn grow_prefers_lowest_index_on_ties() {
        // One seeded corner pixel; scoring the same color against it gives
        // every frontier cell distance zero, so the tie-break must pick the
        // lowest linear index.
        let layout = GridLayout {
            width: 4,
            height: 4,
        };
        let mut state = GrowthState::new(layout);
        let color = Rgb::new(128, 128, 128);
        state.seed(5, color);
        let placed = state.grow(color, DistanceMetric::Euclidean, Aggregation::Min);
        assert_eq!(placed, Some(0));
    }

    #[test]
    fn grow_on_empty_frontier_returns_none() {
        let mut state = GrowthState::new(GridLayout {
            width: 2,
            height: 2,
        });
        assert_eq!(
            state.grow(Rgb::new(1, 2, 3), DistanceMetric::Euclidean, Aggregation::Min),
            None
        );
    }

    #[test]
    fn mean_aggregation_averages_neighbor_distances() {
        let layout = GridLayout {
            width: 3,
            height: 1,
        };
        let mut state = GrowthState::new(layout);
        state.seed(0, Rgb::new(0, 0, 0));
        state.canvas.set(2, Rgb::new(0, 0, 60));
        let candidate = Rgb::new(0, 0, 30);
        // index 1 neighbors both placed cells: distances 30 and 30 under
        // Manhattan, so min and mean agree here
        let score = state.score_cell(candidate, DistanceMetric::Manhattan, Aggregation::Mean, 1);
        assert_eq!(score, 30);
        let skewed = Rgb::new(0, 0, 10);
        let mean = state.score_cell(skewed, DistanceMetric::Manhattan, Aggregation::Mean, 1);
        let min = state.score_cell(skewed, DistanceMetric::Manhattan, Aggregation::Min, 1);
        assert_eq!(mean, (10 + 50) / 2);
        assert_eq!(min, 10);
    }
}
