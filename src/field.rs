/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Composite field reading: entropy anomaly blended with cyclical modifiers.
//!
//! ```text
//! bio       = 0.2·physical + 0.3·emotional + 0.2·intellectual + 0.3·intuitive   (0 without birth date)
//! lunar     = (lunar_energy − 0.5) × 0.4
//! temporal  = (gate_energy − 0.5) × 0.3
//! entropy   = anomaly_score × (±1 by polarity) × 0.5
//! composite = 0.3·bio + lunar + temporal + entropy
//! ```
//!
//! # Invariants
//!
//! - A composite of exactly 0 reads as [`Polarity::Positive`].
//! - `magnitude = clamp(|composite| × 2.5, 0, 1)`.

use tracing::debug;

use crate::anomaly::{AnomalyResult, Polarity};
use crate::cycles::{Biorhythm, CycleState};

// ─── Weights ────────────────────────────────────────────────────────────────

const BIO_PHYSICAL: f64 = 0.2;
const BIO_EMOTIONAL: f64 = 0.3;
const BIO_INTELLECTUAL: f64 = 0.2;
const BIO_INTUITIVE: f64 = 0.3;

const BIO_SHARE: f64 = 0.3;
const LUNAR_GAIN: f64 = 0.4;
const TEMPORAL_GAIN: f64 = 0.3;
const ENTROPY_GAIN: f64 = 0.5;
const MAGNITUDE_GAIN: f64 = 2.5;

/// Weighted blend of the four biorhythm channels, in [−1, 1].
pub fn bio_composite(bio: Option<&Biorhythm>) -> f64 {
    bio.map_or(0.0, |b| {
        BIO_PHYSICAL * b.physical.value
            + BIO_EMOTIONAL * b.emotional.value
            + BIO_INTELLECTUAL * b.intellectual.value
            + BIO_INTUITIVE * b.intuitive.value
    })
}

// ─── FieldReading ───────────────────────────────────────────────────────────

/// Blended environmental reading.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldReading {
    /// Signed composite value.
    pub composite_value: f64,
    /// Sign of the composite; 0 is positive.
    pub polarity: Polarity,
    /// `clamp(|composite| × 2.5, 0, 1)`.
    pub magnitude: f64,
}

impl FieldReading {
    /// Compose one anomaly result with one cycle state.
    pub fn compose(anomaly: &AnomalyResult, cycles: &CycleState) -> Self {
        let bio = bio_composite(cycles.biorhythm.as_ref());
        let lunar = (cycles.lunar.energy - 0.5) * LUNAR_GAIN;
        let temporal = (cycles.gate.energy - 0.5) * TEMPORAL_GAIN;
        let entropy = anomaly.anomaly_score * anomaly.polarity.sign() * ENTROPY_GAIN;

        let composite_value = bio * BIO_SHARE + lunar + temporal + entropy;
        let reading = Self {
            composite_value,
            polarity: Polarity::from_signed(composite_value),
            magnitude: (composite_value.abs() * MAGNITUDE_GAIN).clamp(0.0, 1.0),
        };
        debug!(
            composite = composite_value,
            bio, lunar, temporal, entropy,
            polarity = reading.polarity.as_str(),
            "field composed"
        );
        reading
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
