//! Pipeline configuration and the optional birth profile.

use core::time::Duration;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CompassError, Result};

/// Smallest routine scan sample: one expected observation per byte value.
pub const MIN_SCAN_SAMPLE_LEN: usize = 256;

/// Sample sizes and polling cadence for a [`CompassSession`](crate::session::CompassSession).
///
/// Default values:
/// - Routine scan: 1024 bytes.
/// - Probe: 4096 bytes. The larger sample trades latency for signal-to-noise
///   and is not interchangeable with the scan sample.
/// - Visual slice: 64 bytes retained from each scan.
/// - Scan interval: 3 seconds between caller-driven polls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompassConfig {
    /// Bytes drawn for every routine scan.
    pub scan_sample_len: usize,
    /// Bytes drawn for every probe.
    pub probe_sample_len: usize,
    /// Leading bytes of a scan sample kept for visualisation.
    pub visual_slice_len: usize,
    /// Minimum spacing between routine scans.
    pub scan_interval: Duration,
}

impl CompassConfig {
    /// Construct the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate sample sizes and cadence.
    pub fn validate(&self) -> Result<()> {
        if self.scan_sample_len < MIN_SCAN_SAMPLE_LEN {
            return Err(CompassError::InvalidConfig(
                "scan_sample_len must cover the 256-value byte alphabet",
            ));
        }
        if self.probe_sample_len < self.scan_sample_len {
            return Err(CompassError::InvalidConfig(
                "probe_sample_len must be >= scan_sample_len",
            ));
        }
        if self.visual_slice_len > self.scan_sample_len {
            return Err(CompassError::InvalidConfig(
                "visual_slice_len must be <= scan_sample_len",
            ));
        }
        if self.scan_interval.is_zero() {
            return Err(CompassError::InvalidConfig("scan_interval must be > 0"));
        }
        Ok(())
    }
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            scan_sample_len: 1024,
            probe_sample_len: 4096,
            visual_slice_len: 64,
            scan_interval: Duration::from_secs(3),
        }
    }
}

/// Optional birth data supplied by the user.
///
/// Only `date` feeds biorhythm and zodiac computation. `time` and `location`
/// are carried for the caller but not consumed here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthProfile {
    /// Calendar date of birth.
    pub date: NaiveDate,
    /// Time of birth, if known.
    pub time: Option<NaiveTime>,
    /// Free-text birth place, if known.
    pub location: Option<String>,
}

impl BirthProfile {
    /// A profile with only a birth date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            time: None,
            location: None,
        }
    }
}
