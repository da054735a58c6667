/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Randomness-deviation statistics over a byte buffer.
//!
//! Five independent metrics, each a pure function over `&[u8]`:
//!
//! | Metric | Ideal value | Range |
//! |--------|-------------|-------|
//! | [`shannon_entropy`] | 8.0 bits/byte | [0, 8] |
//! | [`runs_test`] | deviation 0 | deviation ≥ −1 |
//! | [`chi_squared`] | normalized 0 | normalized ≥ −1 |
//! | [`serial_correlation`] | 0 | [−1, 1] |
//! | [`monte_carlo_pi`] | deviation 0 | deviation ≥ 0 |
//!
//! This is not a randomness test suite. The metrics feed an anomaly score
//! and make no claim about passing NIST or Diehard batteries.
//!
//! # Alphabet
//!
//! The chi-squared test assumes exactly 256 equally likely byte values. With
//! fewer than 256 bytes per sample the test is still computed, but its
//! discriminating power degrades; it is not special-cased.
//!
//! # Invariants
//!
//! - No metric returns NaN. Degenerate inputs (empty, constant) resolve to
//!   explicit fallbacks.
//! - Serial correlation stays in [−1, 1].

use core::f64::consts::PI;

use tracing::{debug, trace, warn};

use crate::source::ByteSample;

/// Number of distinct byte values.
pub const ALPHABET: usize = 256;

/// Degrees of freedom of the 256-bucket chi-squared test.
const CHI_DOF: f64 = (ALPHABET - 1) as f64;

// ─── Result records ─────────────────────────────────────────────────────────

/// Runs test over above/below-median classification.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunsTest {
    /// Number of contiguous same-class runs.
    pub runs: usize,
    /// Longest run.
    pub max_run: usize,
    /// Expected run count for a random sequence, `(n + 1) / 2`.
    pub expected: f64,
    /// `(runs − expected) / expected`.
    pub deviation: f64,
}

impl RunsTest {
    /// Clustering signal: positive when bytes cluster instead of alternating.
    pub fn cluster_score(&self) -> f64 {
        -self.deviation
    }
}

/// Chi-squared goodness of fit against a uniform byte histogram.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChiSquared {
    /// Raw statistic.
    pub chi2: f64,
    /// `(chi2 − 255) / 255`, centred on the theoretical mean.
    pub normalized: f64,
}

/// Monte Carlo estimate of π from 16-bit coordinate pairs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarlo {
    /// `4 · inside / points`.
    pub pi_estimate: f64,
    /// Relative distance from π.
    pub deviation: f64,
}

/// All five metrics for one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntropyMetrics {
    /// Shannon entropy in bits per byte.
    pub shannon: f64,
    /// Runs test.
    pub runs: RunsTest,
    /// Chi-squared test.
    pub chi_squared: ChiSquared,
    /// Lag-1 serial correlation.
    pub serial_correlation: f64,
    /// Monte Carlo π estimate.
    pub monte_carlo: MonteCarlo,
}

impl EntropyMetrics {
    /// Compute every metric over `sample`.
    pub fn compute(sample: &ByteSample) -> Self {
        let bytes = sample.as_bytes();
        let metrics = Self {
            shannon: shannon_entropy(bytes),
            runs: runs_test(bytes),
            chi_squared: chi_squared(bytes),
            serial_correlation: serial_correlation(bytes),
            monte_carlo: monte_carlo_pi(bytes),
        };
        debug!(
            n = bytes.len(),
            shannon = metrics.shannon,
            chi2_norm = metrics.chi_squared.normalized,
            serial = metrics.serial_correlation,
            "entropy metrics computed"
        );
        metrics
    }
}

// ─── Metrics ────────────────────────────────────────────────────────────────

fn histogram(bytes: &[u8]) -> [usize; ALPHABET] {
    let mut counts = [0usize; ALPHABET];
    for &b in bytes {
        counts[b as usize] += 1;
    }
    counts
}

/// Shannon entropy `H = −Σ pᵢ log₂ pᵢ` over the observed byte frequencies.
///
/// Equals 8.0 only for a perfectly uniform histogram over all 256 values.
/// An empty buffer has entropy 0.
pub fn shannon_entropy(bytes: &[u8]) -> f64 {
    if bytes.is_empty() {
        return 0.0;
    }
    let n = bytes.len() as f64;
    let h: f64 = histogram(bytes)
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum();
    h.clamp(0.0, 8.0)
}

/// Runs test against the sample median.
///
/// Each byte is classed as above the median or below-or-equal. Even-length
/// samples use the mean of the two middle values as the median.
pub fn runs_test(bytes: &[u8]) -> RunsTest {
    let n = bytes.len();
    let expected = (n as f64 + 1.0) / 2.0;
    if n == 0 {
        return RunsTest { runs: 0, max_run: 0, expected, deviation: 0.0 };
    }

    let mut sorted = bytes.to_vec();
    sorted.sort_unstable();
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    } else {
        sorted[n / 2] as f64
    };

    let mut runs = 1usize;
    let mut current = 1usize;
    let mut max_run = 1usize;
    let mut prev_above = bytes[0] as f64 > median;
    for &b in &bytes[1..] {
        let above = b as f64 > median;
        if above == prev_above {
            current += 1;
        } else {
            runs += 1;
            current = 1;
            prev_above = above;
        }
        max_run = max_run.max(current);
    }

    let deviation = (runs as f64 - expected) / expected;
    trace!(runs, max_run, deviation, "runs test");
    RunsTest { runs, max_run, expected, deviation }
}

/// Chi-squared statistic over 256 byte-value buckets.
pub fn chi_squared(bytes: &[u8]) -> ChiSquared {
    if bytes.is_empty() {
        return ChiSquared { chi2: 0.0, normalized: 0.0 };
    }
    let expected = bytes.len() as f64 / ALPHABET as f64;
    let chi2: f64 = histogram(bytes)
        .iter()
        .map(|&observed| {
            let d = observed as f64 - expected;
            d * d / expected
        })
        .sum();
    ChiSquared { chi2, normalized: (chi2 - CHI_DOF) / CHI_DOF }
}

/// Pearson correlation between the sequence and itself shifted by one.
///
/// Returns 0 when either side has zero variance (constant input) or there
/// are fewer than two bytes.
pub fn serial_correlation(bytes: &[u8]) -> f64 {
    if bytes.len() < 2 {
        return 0.0;
    }
    let xs = &bytes[..bytes.len() - 1];
    let ys = &bytes[1..];
    let m = xs.len() as f64;

    let mean_x = xs.iter().map(|&b| b as f64).sum::<f64>() / m;
    let mean_y = ys.iter().map(|&b| b as f64).sum::<f64>() / m;

    let (mut cov, mut var_x, mut var_y) = (0.0f64, 0.0f64, 0.0f64);
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x as f64 - mean_x;
        let dy = y as f64 - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        warn!("zero-variance sample; serial correlation falls back to 0");
        return 0.0;
    }
    (cov / denom).clamp(-1.0, 1.0)
}

/// Monte Carlo π estimate from consecutive 4-byte groups.
///
/// Each group yields a point `(x, y)` from two big-endian 16-bit values
/// scaled to [0, 1). A trailing partial group is ignored. With no complete
/// group the estimate is 0 and the deviation is 1.
pub fn monte_carlo_pi(bytes: &[u8]) -> MonteCarlo {
    let mut points = 0usize;
    let mut inside = 0usize;
    for chunk in bytes.chunks_exact(4) {
        let x = u16::from_be_bytes([chunk[0], chunk[1]]) as f64 / 65536.0;
        let y = u16::from_be_bytes([chunk[2], chunk[3]]) as f64 / 65536.0;
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
        points += 1;
    }
    let pi_estimate = if points == 0 { 0.0 } else { 4.0 * inside as f64 / points as f64 };
    MonteCarlo {
        pi_estimate,
        deviation: (pi_estimate - PI).abs() / PI,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
