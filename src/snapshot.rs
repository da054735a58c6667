//! Serialisable probe-history snapshot for hand-off to a persistence layer.
//!
//! The crate stores nothing itself. A [`HistorySnapshot`] captures the probe
//! history of a live [`CompassSession`] so the caller can write it wherever it
//! keeps user data, and feed it back later as plain input.
//!
//! This module requires the `serde` feature.
//!
//! [`CompassSession`]: crate::session::CompassSession

use chrono::{DateTime, Utc};

use crate::probe::Probe;
use crate::session::CompassSession;
use crate::source::ByteSource;

/// Current snapshot format version.
pub const HISTORY_SNAPSHOT_VERSION: u16 = 1;

/// Probe history at one instant.
///
/// # Example
///
/// ```rust,ignore
/// let snapshot = HistorySnapshot::from_session(&session, Utc::now());
/// let json = serde_json::to_string(&snapshot).unwrap();
/// let restored: HistorySnapshot = serde_json::from_str(&json).unwrap();
/// ```
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct HistorySnapshot {
    /// Always [`HISTORY_SNAPSHOT_VERSION`] for new snapshots.
    pub version: u16,
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
    /// Probes, oldest first.
    pub probes: Vec<Probe>,
}

impl HistorySnapshot {
    /// Capture the probe history of `session`.
    pub fn from_session<S: ByteSource>(session: &CompassSession<S>, taken_at: DateTime<Utc>) -> Self {
        Self {
            version: HISTORY_SNAPSHOT_VERSION,
            taken_at,
            probes: session.history().cloned().collect(),
        }
    }

    /// Number of probes captured.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// True when no probes were captured.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// The most recent probe, if any.
    pub fn latest(&self) -> Option<&Probe> {
        self.probes.last()
    }
}
