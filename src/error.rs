//! Crate error type.
//!
//! Only input-precondition violations surface as errors. Degenerate numeric
//! cases (zero-variance correlation, single-bucket histograms) resolve to
//! explicit fallback values inside the metric functions, and the advisory
//! scorers are infallible by signature.

use thiserror::Error;

/// Errors returned by the entropy pipeline and its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompassError {
    /// A byte sample is too short for the statistics or direction derivation.
    #[error("byte sample of {len} bytes is too short (minimum {min})")]
    SampleTooShort {
        /// Length of the rejected sample.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },

    /// A replay source was built from an empty recording.
    #[error("replay source needs at least one recorded byte")]
    EmptyReplay,

    /// A configuration value is outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CompassError>;
