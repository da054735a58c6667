/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Probe records: one complete directional-guidance reading.
//!
//! A probe bundles a fresh [`AnomalyResult`] (reduced from the larger probe
//! sample), its [`EntropyMetrics`], and the current [`FieldReading`] into an
//! immutable [`Probe`]. Generating a probe has no side effects; keeping a
//! history is the caller's job (see [`CompassSession`](crate::session::CompassSession)).

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::anomaly::{AnomalyResult, Polarity};
use crate::entropy::EntropyMetrics;
use crate::field::FieldReading;

// ─── Action ─────────────────────────────────────────────────────────────────

/// The eight suggested actions, indexed by `action_seed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Seed 0.
    Advance,
    /// Seed 1.
    Pause,
    /// Seed 2.
    TurnLeft,
    /// Seed 3.
    TurnRight,
    /// Seed 4.
    Retreat,
    /// Seed 5.
    Ascend,
    /// Seed 6.
    Explore,
    /// Seed 7.
    Observe,
}

impl Action {
    /// Table order.
    pub const ALL: [Action; 8] = [
        Action::Advance,
        Action::Pause,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Retreat,
        Action::Ascend,
        Action::Explore,
        Action::Observe,
    ];

    /// Action for a seed; wraps modulo 8.
    pub fn from_seed(seed: u8) -> Self {
        Self::ALL[seed as usize % Self::ALL.len()]
    }

    /// Short label.
    pub fn label(self) -> &'static str {
        match self {
            Action::Advance => "Advance",
            Action::Pause => "Pause",
            Action::TurnLeft => "Turn Left",
            Action::TurnRight => "Turn Right",
            Action::Retreat => "Retreat",
            Action::Ascend => "Ascend",
            Action::Explore => "Explore",
            Action::Observe => "Observe",
        }
    }

    /// One-line guidance.
    pub fn description(self) -> &'static str {
        match self {
            Action::Advance => "Move forward along the bearing without hesitation.",
            Action::Pause => "Stop where you are and let the moment settle.",
            Action::TurnLeft => "Take the next left, whatever it leads to.",
            Action::TurnRight => "Take the next right and follow it through.",
            Action::Retreat => "Go back the way you came and look again.",
            Action::Ascend => "Find higher ground: stairs, a hill, a rooftop.",
            Action::Explore => "Wander toward something you have never noticed.",
            Action::Observe => "Stay still and catalogue what is around you.",
        }
    }

    /// Glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Action::Advance => "⬆",
            Action::Pause => "⏸",
            Action::TurnLeft => "⬅",
            Action::TurnRight => "➡",
            Action::Retreat => "⬇",
            Action::Ascend => "⛰",
            Action::Explore => "🧭",
            Action::Observe => "👁",
        }
    }
}

// ─── Compass ────────────────────────────────────────────────────────────────

/// Sixteen compass points, clockwise from North.
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Width of one compass sector in degrees.
pub const SECTOR_DEGREES: f64 = 22.5;

/// Compass label for a bearing: `round(bearing / 22.5) mod 16`.
///
/// Sectors are centred on each point, so 359° reads as North.
pub fn compass_label(bearing_degrees: f64) -> &'static str {
    let sector = (bearing_degrees.rem_euclid(360.0) / SECTOR_DEGREES).round() as usize;
    COMPASS_POINTS[sector % COMPASS_POINTS.len()]
}

// ─── Confidence ─────────────────────────────────────────────────────────────

/// Strength band of the anomaly behind a probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Confidence {
    /// score ≤ 0.15.
    Weak,
    /// 0.15 < score ≤ 0.3.
    Moderate,
    /// score > 0.3.
    Strong,
}

impl Confidence {
    /// Classify with strict thresholds.
    pub fn from_score(anomaly_score: f64) -> Self {
        if anomaly_score > 0.3 {
            Confidence::Strong
        } else if anomaly_score > 0.15 {
            Confidence::Moderate
        } else {
            Confidence::Weak
        }
    }

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::Weak => "weak",
            Confidence::Moderate => "moderate",
            Confidence::Strong => "strong",
        }
    }
}

// ─── Probe ──────────────────────────────────────────────────────────────────

/// Raw and formatted entropy sub-metrics carried by a probe.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntropyDetail {
    /// Shannon entropy, bits per byte.
    pub shannon: f64,
    /// Normalized chi-squared.
    pub chi_squared: f64,
    /// Lag-1 serial correlation.
    pub serial_correlation: f64,
    /// Monte Carlo π deviation, percent.
    pub pi_deviation_pct: f64,
    /// Anomaly score, percent.
    pub anomaly_pct: f64,
    /// `shannon` to 4 decimals.
    pub shannon_text: String,
    /// `chi_squared` to 4 decimals.
    pub chi_squared_text: String,
    /// `serial_correlation` to 4 decimals.
    pub serial_correlation_text: String,
    /// `pi_deviation_pct` to 2 decimals with a percent sign.
    pub pi_deviation_text: String,
    /// `anomaly_pct` to 1 decimal with a percent sign.
    pub anomaly_text: String,
}

impl EntropyDetail {
    /// Snapshot the metrics behind `anomaly`.
    pub fn new(metrics: &EntropyMetrics, anomaly: &AnomalyResult) -> Self {
        let pi_deviation_pct = metrics.monte_carlo.deviation * 100.0;
        let anomaly_pct = anomaly.anomaly_score * 100.0;
        Self {
            shannon: metrics.shannon,
            chi_squared: metrics.chi_squared.normalized,
            serial_correlation: metrics.serial_correlation,
            pi_deviation_pct,
            anomaly_pct,
            shannon_text: format!("{:.4}", metrics.shannon),
            chi_squared_text: format!("{:.4}", metrics.chi_squared.normalized),
            serial_correlation_text: format!("{:.4}", metrics.serial_correlation),
            pi_deviation_text: format!("{:.2}%", pi_deviation_pct),
            anomaly_text: format!("{:.1}%", anomaly_pct),
        }
    }
}

/// One probe record. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Probe {
    /// User intention; `None` when empty.
    pub intention: Option<String>,
    /// Suggested action.
    pub action: Action,
    /// Bearing in degrees, [0, 360).
    pub bearing_degrees: f64,
    /// Bearing formatted to one decimal with a degree sign.
    pub bearing_text: String,
    /// Sixteen-point compass label.
    pub compass_label: String,
    /// Anomaly score of the probe sample.
    pub anomaly_strength: f64,
    /// Band of `anomaly_strength`.
    pub confidence: Confidence,
    /// Polarity of the probe sample.
    pub polarity: Polarity,
    /// Polarity of the current field reading.
    pub field_polarity: Polarity,
    /// Magnitude of the current field reading.
    pub field_magnitude: f64,
    /// Entropy metrics behind the probe.
    pub entropy: EntropyDetail,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

impl Probe {
    /// Assemble a probe from a fresh reduction and the current field.
    pub fn generate(
        intention: &str,
        metrics: &EntropyMetrics,
        anomaly: &AnomalyResult,
        field: &FieldReading,
        created_at: DateTime<Utc>,
    ) -> Self {
        let intention = intention.trim();
        let action = Action::from_seed(anomaly.action_seed);
        let probe = Self {
            intention: (!intention.is_empty()).then(|| intention.to_owned()),
            action,
            bearing_degrees: anomaly.angle_degrees,
            bearing_text: format!("{:.1}°", anomaly.angle_degrees),
            compass_label: compass_label(anomaly.angle_degrees).to_owned(),
            anomaly_strength: anomaly.anomaly_score,
            confidence: Confidence::from_score(anomaly.anomaly_score),
            polarity: anomaly.polarity,
            field_polarity: field.polarity,
            field_magnitude: field.magnitude,
            entropy: EntropyDetail::new(metrics, anomaly),
            created_at,
        };
        debug!(
            action = action.label(),
            bearing = probe.bearing_degrees,
            compass = %probe.compass_label,
            confidence = probe.confidence.as_str(),
            "probe generated"
        );
        probe
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
