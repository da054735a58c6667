/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Caller-owned session context for the scan → probe pipeline.
//!
//! A [`CompassSession`] holds everything that lives across ticks: the byte
//! source, the optional birth profile, the most recent [`ScanReading`], a
//! bounded probe history and today's cached check-in score. Nothing here is
//! global; drop the session to discard it.
//!
//! # Invariants
//!
//! - Every scan and every probe draws a fresh sample from the source.
//! - The probe history never exceeds [`PROBE_HISTORY_CAPACITY`]; the oldest
//!   probe is evicted first.
//! - Only the visual slice of a scan sample outlives the scan.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use heapless::Deque;
use tracing::debug;

use crate::anomaly::AnomalyResult;
use crate::config::{BirthProfile, CompassConfig};
use crate::cycles::CycleState;
use crate::entropy::EntropyMetrics;
use crate::error::Result;
use crate::field::FieldReading;
use crate::probe::Probe;
use crate::source::ByteSource;
use crate::surface::{surface_score, DailyCheckIn, SurfaceScore};

/// Maximum probes retained by a session.
pub const PROBE_HISTORY_CAPACITY: usize = 30;

// ─── ScanReading ────────────────────────────────────────────────────────────

/// Output of one routine scan tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReading {
    /// Statistics of the scan sample.
    pub metrics: EntropyMetrics,
    /// Reduction of `metrics`.
    pub anomaly: AnomalyResult,
    /// Cycles at `taken_at`, in the caller's local time.
    pub cycles: CycleState,
    /// Composite of `anomaly` and `cycles`.
    pub field: FieldReading,
    /// Leading bytes of the sample, for display.
    pub visual: Vec<u8>,
    /// Scan instant.
    pub taken_at: DateTime<Utc>,
}

// ─── CompassSession ─────────────────────────────────────────────────────────

/// Pipeline state for one user session.
pub struct CompassSession<S: ByteSource> {
    config: CompassConfig,
    source: S,
    birth: Option<BirthProfile>,
    latest: Option<ScanReading>,
    history: Deque<Probe, PROBE_HISTORY_CAPACITY>,
    check_in: Option<(NaiveDate, SurfaceScore)>,
}

impl<S: ByteSource> CompassSession<S> {
    /// Start a session. Fails if `config` does not validate.
    pub fn new(config: CompassConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            birth: None,
            latest: None,
            history: Deque::new(),
            check_in: None,
        })
    }

    /// Attach a birth profile; enables biorhythm and zodiac readings.
    pub fn with_birth(mut self, birth: BirthProfile) -> Self {
        self.birth = Some(birth);
        self
    }

    /// The attached birth profile, if any.
    pub fn birth(&self) -> Option<&BirthProfile> {
        self.birth.as_ref()
    }

    /// Session configuration.
    pub fn config(&self) -> &CompassConfig {
        &self.config
    }

    /// Run one full scan at `now` and keep it as the latest reading.
    ///
    /// Hour-of-day cycles use `now`'s own offset, so pass local time.
    pub fn scan<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<&ScanReading> {
        let sample = self.source.sample(self.config.scan_sample_len)?;
        let (metrics, anomaly) = AnomalyResult::from_sample(&sample);
        let cycles = CycleState::compute(now, self.birth.as_ref());
        let field = FieldReading::compose(&anomaly, &cycles);

        let reading = ScanReading {
            metrics,
            anomaly,
            cycles,
            field,
            visual: sample.visual_slice(self.config.visual_slice_len),
            taken_at: now.with_timezone(&Utc),
        };
        debug!(
            score = reading.anomaly.anomaly_score,
            composite = reading.field.composite_value,
            lunar = reading.cycles.lunar.phase.name(),
            gate = reading.cycles.gate.gate.name(),
            "scan complete"
        );
        Ok(self.latest.insert(reading))
    }

    /// True when no scan has run yet or the scan interval has elapsed.
    pub fn scan_due<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        let Some(latest) = &self.latest else {
            return true;
        };
        let elapsed = now.with_timezone(&Utc) - latest.taken_at;
        chrono::Duration::from_std(self.config.scan_interval)
            .map_or(false, |interval| elapsed >= interval)
    }

    /// Generate a probe for `intention` from a fresh, larger sample.
    ///
    /// Uses the field of the latest scan while it is within the scan
    /// interval; otherwise scans at `now` first. The probe is appended to the
    /// history and returned.
    pub fn probe<Tz: TimeZone>(&mut self, intention: &str, now: &DateTime<Tz>) -> Result<Probe> {
        let current = self
            .latest
            .as_ref()
            .filter(|_| !self.scan_due(now))
            .map(|r| r.field);
        let field = match current {
            Some(field) => field,
            None => self.scan(now)?.field,
        };

        let sample = self.source.sample(self.config.probe_sample_len)?;
        let (metrics, anomaly) = AnomalyResult::from_sample(&sample);
        let probe = Probe::generate(intention, &metrics, &anomaly, &field, now.with_timezone(&Utc));

        if self.history.is_full() {
            self.history.pop_front();
        }
        let _ = self.history.push_back(probe.clone());
        debug!(history = self.history.len(), "probe recorded");
        Ok(probe)
    }

    /// Probes generated in this session, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Probe> + '_ {
        self.history.iter()
    }

    /// Most recent scan, if any.
    pub fn latest(&self) -> Option<&ScanReading> {
        self.latest.as_ref()
    }

    /// Score and cache the check-in for `date`, replacing any earlier one.
    pub fn record_check_in(&mut self, date: NaiveDate, check_in: &DailyCheckIn) -> &SurfaceScore {
        let score = surface_score(check_in);
        debug!(%date, score = score.score, "check-in recorded");
        &self.check_in.insert((date, score)).1
    }

    /// Cached check-in score, only if it was recorded for `date`.
    pub fn check_in_for(&self, date: NaiveDate) -> Option<&SurfaceScore> {
        self.check_in
            .as_ref()
            .filter(|(recorded, _)| *recorded == date)
            .map(|(_, score)| score)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
