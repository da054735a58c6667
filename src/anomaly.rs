/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Reduction of [`EntropyMetrics`] to a single anomaly score and a direction.
//!
//! # Score
//!
//! Five deviation magnitudes are blended with fixed weights:
//!
//! | Component | Deviation | Weight |
//! |-----------|-----------|--------|
//! | Entropy | `|8 − H| / 8` | 0.20 |
//! | Runs | `|runs.deviation|` | 0.25 |
//! | Chi-squared | `|chi.normalized|` | 0.20 |
//! | Serial correlation | `|r|` | 0.15 |
//! | Monte Carlo | `mc.deviation` | 0.20 |
//!
//! The blend is multiplied by 3 and clamped to [0, 1]. Without the ×3 boost
//! realistic samples cluster near zero.
//!
//! # Direction
//!
//! Direction comes from fixed byte positions of the same sample, independent
//! of the statistics, so a bearing exists even when the score is low:
//!
//! ```text
//! bytes[0..2]  big-endian u16 / 65536 × 360  → angle (degrees)
//! bytes[2..4]  big-endian u16 / 65536        → magnitude
//! bytes[4] mod 8                             → action seed
//! bytes[5] → [−1, 1] + bias                  → polarity
//! ```
//!
//! # Invariants
//!
//! - `anomaly_score` and `magnitude` lie in [0, 1] for every input.
//! - Identical samples reduce to identical results; no hidden randomness.
//! - Polarity bias is asymmetric: +0.2 when the score exceeds 0.1, −0.1
//!   otherwise. A biased value of exactly 0 is positive.

use tracing::debug;

use crate::entropy::EntropyMetrics;
use crate::source::ByteSample;

/// Weights of the five deviation components (sum to 1.0).
pub const WEIGHT_ENTROPY: f64 = 0.20;
/// Runs-test weight.
pub const WEIGHT_RUNS: f64 = 0.25;
/// Chi-squared weight.
pub const WEIGHT_CHI_SQUARED: f64 = 0.20;
/// Serial-correlation weight.
pub const WEIGHT_SERIAL: f64 = 0.15;
/// Monte Carlo weight.
pub const WEIGHT_MONTE_CARLO: f64 = 0.20;

/// Sensitivity boost applied before clamping.
const SCORE_GAIN: f64 = 3.0;

/// Score above which the polarity bias turns positive.
const BIAS_THRESHOLD: f64 = 0.1;

/// Number of entries in the action table.
pub const ACTION_COUNT: u8 = 8;

// ─── Polarity ───────────────────────────────────────────────────────────────

/// Two-valued direction sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// Value ≥ 0.
    Positive,
    /// Value < 0.
    Negative,
}

impl Polarity {
    /// Sign of `value`, with 0 (and −0) resolving to [`Polarity::Positive`].
    pub fn from_signed(value: f64) -> Self {
        if value >= 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    /// +1 or −1.
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

/// Map a polarity seed byte to [−1, 1] and apply the score-dependent bias.
///
/// Returns the biased value and its polarity.
pub fn biased_polarity(seed_byte: u8, anomaly_score: f64) -> (f64, Polarity) {
    let seed = seed_byte as f64 / 255.0 * 2.0 - 1.0;
    let bias = if anomaly_score > BIAS_THRESHOLD { 0.2 } else { -0.1 };
    let raw = seed + bias;
    (raw, Polarity::from_signed(raw))
}

// ─── AnomalyResult ──────────────────────────────────────────────────────────

/// Anomaly score and byte-derived direction for one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnomalyResult {
    /// Clamped anomaly score in [0, 1].
    pub anomaly_score: f64,
    /// Bearing in degrees, [0, 360).
    pub angle_degrees: f64,
    /// Direction magnitude, [0, 1).
    pub magnitude: f64,
    /// Index into the action table, [0, 8).
    pub action_seed: u8,
    /// Sign of `polarity_raw`.
    pub polarity: Polarity,
    /// Biased polarity value before thresholding.
    pub polarity_raw: f64,
}

/// Unclamped weighted blend of the five deviations.
pub fn raw_anomaly(metrics: &EntropyMetrics) -> f64 {
    let entropy_dev = (8.0 - metrics.shannon).abs() / 8.0;
    WEIGHT_ENTROPY * entropy_dev
        + WEIGHT_RUNS * metrics.runs.deviation.abs()
        + WEIGHT_CHI_SQUARED * metrics.chi_squared.normalized.abs()
        + WEIGHT_SERIAL * metrics.serial_correlation.abs()
        + WEIGHT_MONTE_CARLO * metrics.monte_carlo.deviation
}

/// Final anomaly score: `clamp(raw × 3, 0, 1)`.
pub fn anomaly_score(metrics: &EntropyMetrics) -> f64 {
    let boosted = raw_anomaly(metrics) * SCORE_GAIN;
    if boosted.is_nan() {
        return 1.0;
    }
    boosted.clamp(0.0, 1.0)
}

impl AnomalyResult {
    /// Reduce `metrics` and derive the direction from `sample`.
    ///
    /// `metrics` must have been computed from `sample`.
    pub fn reduce(metrics: &EntropyMetrics, sample: &ByteSample) -> Self {
        let b = sample.as_bytes();
        let score = anomaly_score(metrics);

        let angle_degrees = u16::from_be_bytes([b[0], b[1]]) as f64 / 65536.0 * 360.0;
        let magnitude = u16::from_be_bytes([b[2], b[3]]) as f64 / 65536.0;
        let action_seed = b[4] % ACTION_COUNT;
        let (polarity_raw, polarity) = biased_polarity(b[5], score);

        debug!(
            score,
            angle = angle_degrees,
            action_seed,
            polarity = polarity.as_str(),
            "anomaly reduced"
        );

        Self {
            anomaly_score: score,
            angle_degrees,
            magnitude: magnitude.clamp(0.0, 1.0),
            action_seed,
            polarity,
            polarity_raw,
        }
    }

    /// Compute metrics and reduce in one step.
    pub fn from_sample(sample: &ByteSample) -> (EntropyMetrics, Self) {
        let metrics = EntropyMetrics::compute(sample);
        let result = Self::reduce(&metrics, sample);
        (metrics, result)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
