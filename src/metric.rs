//! Color dissimilarity metrics scoring frontier candidates.
//!
//! Every metric is a pure function `(candidate, placed) -> i64`, non-negative,
//! lower = more similar. Symmetry is not part of the contract — callers pass
//! the candidate color first — although the per-channel difference family is
//! symmetric in practice. One metric is chosen at startup and used for every
//! comparison of a run.

use crate::types::Rgb;
use serde::{Deserialize, Serialize};

const RED_MASK: u32 = 0x00FF_0000;
const GREEN_MASK: u32 = 0x0000_FF00;
const BLUE_MASK: u32 = 0x0000_00FF;

/// Metric selection, config-addressable by kebab-case name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    /// Sum of squared per-channel differences.
    #[default]
    Euclidean,
    /// Squared-difference variant that ORs each packed value with the channel
    /// mask before shifting instead of masking. Kept for the glitch textures
    /// it produces.
    OrEuclidean,
    /// Maximum absolute per-channel difference.
    Chebyshev,
    /// Sum of absolute per-channel differences.
    Manhattan,
    /// p-norm of the per-channel differences with p = 3.
    Minkowski,
    /// Popcount of the XOR of the packed values; counts differing bits across
    /// all channels jointly.
    Hamming,
    /// Bitwise AND/OR ratio of the packed values, scaled to [0, 10000].
    Jaccard,
    /// Normalized sum of squared differences of per-channel square roots.
    Hellinger,
}

impl DistanceMetric {
    /// Scores the dissimilarity of `candidate` against `placed`.
    pub fn evaluate(self, candidate: Rgb, placed: Rgb) -> i64 {
        match self {
            Self::Euclidean => euclidean(candidate, placed),
            Self::OrEuclidean => or_euclidean(candidate, placed),
            Self::Chebyshev => chebyshev(candidate, placed),
            Self::Manhattan => manhattan(candidate, placed),
            Self::Minkowski => minkowski(candidate, placed),
            Self::Hamming => hamming(candidate, placed),
            Self::Jaccard => jaccard(candidate, placed),
            Self::Hellinger => hellinger(candidate, placed),
        }
    }
}

/// How per-neighbor distances combine into one frontier-cell score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aggregation {
    /// Distance to the most similar placed neighbor.
    #[default]
    Min,
    /// Integer mean distance over all placed neighbors.
    Mean,
}

#[inline]
fn channel_deltas(a: Rgb, b: Rgb) -> [i64; 3] {
    [
        a.r as i64 - b.r as i64,
        a.g as i64 - b.g as i64,
        a.b as i64 - b.b as i64,
    ]
}

fn euclidean(a: Rgb, b: Rgb) -> i64 {
    let [dr, dg, db] = channel_deltas(a, b);
    dr * dr + dg * dg + db * db
}

fn or_euclidean(a: Rgb, b: Rgb) -> i64 {
    let p = a.packed();
    let q = b.packed();
    let dr = ((p | RED_MASK) >> 16) as i64 - ((q | RED_MASK) >> 16) as i64;
    let dg = ((p | GREEN_MASK) >> 8) as i64 - ((q | GREEN_MASK) >> 8) as i64;
    let db = (p | BLUE_MASK) as i64 - (q | BLUE_MASK) as i64;
    dr * dr + dg * dg + db * db
}

fn chebyshev(a: Rgb, b: Rgb) -> i64 {
    let [dr, dg, db] = channel_deltas(a, b);
    dr.abs().max(dg.abs()).max(db.abs())
}

fn manhattan(a: Rgb, b: Rgb) -> i64 {
    let [dr, dg, db] = channel_deltas(a, b);
    dr.abs() + dg.abs() + db.abs()
}

fn minkowski(a: Rgb, b: Rgb) -> i64 {
    let [dr, dg, db] = channel_deltas(a, b).map(|d| d.unsigned_abs() as f64);
    (dr.powi(3) + dg.powi(3) + db.powi(3)).powf(1.0 / 3.0) as i64
}

fn hamming(a: Rgb, b: Rgb) -> i64 {
    (a.packed() ^ b.packed()).count_ones() as i64
}

fn jaccard(a: Rgb, b: Rgb) -> i64 {
    let and = (a.packed() & b.packed()) as f64;
    let or = (a.packed() | b.packed()) as f64;
    if or == 0.0 {
        // both colors are pure black, i.e. identical
        return 0;
    }
    (10_000.0 * and / or) as i64
}

fn hellinger(a: Rgb, b: Rgb) -> i64 {
    let [ar, ag, ab] = a.channels().map(|c| (c as f64).sqrt());
    let [br, bg, bb] = b.channels().map(|c| (c as f64).sqrt());
    let dr = ar - br;
    let dg = ag - bg;
    let db = ab - bb;
    let sum = dr * dr + dg * dg + db * db;
    (std::f64::consts::FRAC_1_SQRT_2 * sum.sqrt()) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIFFERENCE_METRICS: [DistanceMetric; 6] = [
        DistanceMetric::Euclidean,
        DistanceMetric::Chebyshev,
        DistanceMetric::Manhattan,
        DistanceMetric::Minkowski,
        DistanceMetric::Hamming,
        DistanceMetric::Hellinger,
    ];

    fn samples() -> Vec<Rgb> {
        vec![
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(64, 128, 192),
            Rgb::new(200, 17, 3),
            Rgb::new(1, 254, 100),
        ]
    }

    #[test]
    fn difference_metrics_vanish_on_identical_colors() {
        for metric in DIFFERENCE_METRICS {
            for c in samples() {
                assert_eq!(metric.evaluate(c, c), 0, "{metric:?} {c:?}");
            }
        }
    }

    #[test]
    fn difference_metrics_are_symmetric_and_non_negative() {
        for metric in DIFFERENCE_METRICS {
            for a in samples() {
                for b in samples() {
                    let d = metric.evaluate(a, b);
                    assert!(d >= 0, "{metric:?} {a:?} {b:?}");
                    assert_eq!(d, metric.evaluate(b, a), "{metric:?} {a:?} {b:?}");
                }
            }
        }
    }

    #[test]
    fn euclidean_sums_squared_channel_differences() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(13, 16, 30);
        assert_eq!(DistanceMetric::Euclidean.evaluate(a, b), 9 + 16);
    }

    #[test]
    fn chebyshev_and_manhattan_hand_values() {
        let a = Rgb::new(100, 50, 0);
        let b = Rgb::new(90, 80, 5);
        assert_eq!(DistanceMetric::Chebyshev.evaluate(a, b), 30);
        assert_eq!(DistanceMetric::Manhattan.evaluate(a, b), 10 + 30 + 5);
    }

    #[test]
    fn minkowski_sits_between_chebyshev_and_manhattan() {
        for a in samples() {
            for b in samples() {
                let mink = DistanceMetric::Minkowski.evaluate(a, b);
                let cheb = DistanceMetric::Chebyshev.evaluate(a, b);
                let manh = DistanceMetric::Manhattan.evaluate(a, b);
                // the float cube root may truncate one below the exact norm
                assert!(mink >= cheb - 1, "{a:?} {b:?} mink={mink} cheb={cheb}");
                assert!(mink <= manh, "{a:?} {b:?} mink={mink} manh={manh}");
            }
        }
    }

    #[test]
    fn hamming_counts_differing_bits() {
        let a = Rgb::new(0b1010_0000, 0, 1);
        let b = Rgb::new(0b0101_0000, 0, 0);
        assert_eq!(DistanceMetric::Hamming.evaluate(a, b), 5);
    }

    #[test]
    fn jaccard_ratio_endpoints() {
        let black = Rgb::new(0, 0, 0);
        assert_eq!(DistanceMetric::Jaccard.evaluate(black, black), 0);
        let c = Rgb::new(170, 85, 255);
        assert_eq!(DistanceMetric::Jaccard.evaluate(c, c), 10_000);
        let disjoint = Rgb::new(0b0101_0101, 0, 0);
        let other = Rgb::new(0b1010_1010, 0, 0);
        assert_eq!(DistanceMetric::Jaccard.evaluate(disjoint, other), 0);
    }

    #[test]
    fn or_euclidean_keeps_the_or_mask_quirk() {
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::new(0, 0, 0);
        // ORing saturates the masked channel, so a pure-red difference scores
        // through the leaked green/blue terms instead of the red one
        assert_eq!(DistanceMetric::OrEuclidean.evaluate(a, a), 0);
        assert!(
            DistanceMetric::OrEuclidean.evaluate(a, b) > DistanceMetric::Euclidean.evaluate(a, b)
        );
    }

    #[test]
    fn metric_names_deserialize_from_kebab_case() {
        let m: DistanceMetric = serde_json::from_str("\"or-euclidean\"").unwrap();
        assert_eq!(m, DistanceMetric::OrEuclidean);
        let m: DistanceMetric = serde_json::from_str("\"hellinger\"").unwrap();
        assert_eq!(m, DistanceMetric::Hellinger);
        let a: Aggregation = serde_json::from_str("\"mean\"").unwrap();
        assert_eq!(a, Aggregation::Mean);
        assert!(serde_json::from_str::<DistanceMetric>("\"cosine\"").is_err());
    }
}
