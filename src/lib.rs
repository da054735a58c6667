//! # entropy-compass
//!
//! Entropy anomaly scoring, cyclical field composition and heuristic pattern
//! detection over random bytes.
//!
//! ---
//!
//! ## A compass that reads noise
//!
//! A sample of uniformly random bytes should look random. This crate measures
//! how far a sample strays from that ideal with five classical statistics,
//! folds the deviations into one anomaly score, and reads a direction straight
//! out of the sample's leading bytes.
//!
//! The score is then blended with slow deterministic cycles: biorhythms from a
//! birth date, the synodic lunar phase and a time-of-day gate. The result is a
//! signed field reading. A probe turns a larger fresh sample plus the current
//! field into a bearing, a compass point and one of eight suggested actions.
//!
//! Two small advisory scorers sit beside the pipeline: a two-option decision
//! rubric and a daily check-in score. A pattern detector looks over logged
//! events for time-of-day, theme, streak and acceleration patterns.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! ByteSource → ByteSample → EntropyMetrics → AnomalyResult ─┐
//!                                                          ├→ FieldReading → Probe
//!        now, BirthProfile → CycleState ───────────────────┘
//!
//! LogEvent[]      → detect_patterns → PatternReport
//! DecisionOption² → decide          → DecisionResult
//! DailyCheckIn    → surface_score   → SurfaceScore
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`source`] | [`ByteSource`], [`ByteSample`] | Random byte supply (OS, seeded, replay) |
//! | [`entropy`] | [`EntropyMetrics`] | Shannon, runs, χ², serial correlation, Monte Carlo π |
//! | [`anomaly`] | [`AnomalyResult`], [`Polarity`] | Weighted anomaly score and byte-derived direction |
//! | [`cycles`] | [`CycleState`] | Biorhythm, lunar phase, time gate, zodiac |
//! | [`field`] | [`FieldReading`] | Composite of anomaly and cycles |
//! | [`probe`] | [`Probe`], [`Action`] | Bearing, compass label, action, confidence |
//! | [`patterns`] | [`PatternReport`] | Heuristic patterns over logged events |
//! | [`decision`] | [`DecisionResult`] | Two-option rubric scoring |
//! | [`surface`] | [`SurfaceScore`] | Daily check-in score |
//! | [`session`] | [`CompassSession`] | Caller-owned scan/probe context |
//! | `snapshot` | `HistorySnapshot` | Serialisable probe history (requires `serde` feature) |
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` on every record type, plus the
//!   `snapshot` module.
//!
//! ## License
//!
//! Business Source License 1.1.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod config;
pub mod source;
pub mod entropy;
pub mod anomaly;
pub mod cycles;
pub mod field;
pub mod probe;
pub mod patterns;
pub mod decision;
pub mod surface;
pub mod session;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use anomaly::{AnomalyResult, Polarity};
pub use config::{BirthProfile, CompassConfig};
pub use cycles::CycleState;
pub use decision::{decide, DecisionOption, DecisionResult, Gut, Verdict};
pub use entropy::EntropyMetrics;
pub use error::{CompassError, Result};
pub use field::FieldReading;
pub use patterns::{detect_patterns, LogEvent, Pattern, PatternKind, PatternReport, Sentiment};
pub use probe::{Action, Confidence, Probe};
pub use session::{CompassSession, ScanReading};
pub use source::{ByteSample, ByteSource, ReplaySource, RngSource};
pub use surface::{surface_score, DailyCheckIn, SurfaceScore};
