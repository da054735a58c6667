//! Time-of-day gates: nine fixed, contiguous windows over the local 24-hour clock.
//!
//! ```text
//! 0    3    5    7       10   12   14      17      20          24
//! |Mid |Thr |Dawn|Morning|Zen |Noon|Aftern.|Dusk   |Night       |
//! ```

use chrono::{DateTime, TimeZone, Timelike};

/// One of the nine time-of-day gates, in clock order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gate {
    /// [0, 3).
    Midnight,
    /// [3, 5).
    Threshold,
    /// [5, 7).
    Dawn,
    /// [7, 10).
    Morning,
    /// [10, 12).
    Zenith,
    /// [12, 14).
    Noon,
    /// [14, 17).
    Afternoon,
    /// [17, 20).
    Dusk,
    /// [20, 24).
    Night,
}

impl Gate {
    /// All gates in clock order.
    pub const ALL: [Gate; 9] = [
        Gate::Midnight,
        Gate::Threshold,
        Gate::Dawn,
        Gate::Morning,
        Gate::Zenith,
        Gate::Noon,
        Gate::Afternoon,
        Gate::Dusk,
        Gate::Night,
    ];

    /// Half-open `[start, end)` range in fractional hours.
    pub fn range(self) -> (f64, f64) {
        match self {
            Gate::Midnight => (0.0, 3.0),
            Gate::Threshold => (3.0, 5.0),
            Gate::Dawn => (5.0, 7.0),
            Gate::Morning => (7.0, 10.0),
            Gate::Zenith => (10.0, 12.0),
            Gate::Noon => (12.0, 14.0),
            Gate::Afternoon => (14.0, 17.0),
            Gate::Dusk => (17.0, 20.0),
            Gate::Night => (20.0, 24.0),
        }
    }

    /// Fixed energy of the gate, [0, 1].
    pub fn energy(self) -> f64 {
        match self {
            Gate::Midnight => 0.35,
            Gate::Threshold => 0.45,
            Gate::Dawn => 0.75,
            Gate::Morning => 0.80,
            Gate::Zenith => 0.70,
            Gate::Noon => 0.60,
            Gate::Afternoon => 0.55,
            Gate::Dusk => 0.70,
            Gate::Night => 0.40,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Gate::Midnight => "Midnight Gate",
            Gate::Threshold => "Threshold Gate",
            Gate::Dawn => "Dawn Gate",
            Gate::Morning => "Morning Gate",
            Gate::Zenith => "Zenith Gate",
            Gate::Noon => "Noon Gate",
            Gate::Afternoon => "Afternoon Gate",
            Gate::Dusk => "Dusk Gate",
            Gate::Night => "Night Gate",
        }
    }

    /// Descriptive text.
    pub fn description(self) -> &'static str {
        match self {
            Gate::Midnight => "Deep stillness. Signals surface from below.",
            Gate::Threshold => "The hour between. Thin boundaries, odd clarity.",
            Gate::Dawn => "First light. Fresh starts carry further.",
            Gate::Morning => "Rising energy. Move on what matters.",
            Gate::Zenith => "Sharp focus before the peak.",
            Gate::Noon => "Full exposure. Decide in daylight.",
            Gate::Afternoon => "Steady drift. Good for follow-through.",
            Gate::Dusk => "Turning inward. Notice what lingers.",
            Gate::Night => "Winding down. Reflect rather than push.",
        }
    }

    /// Whether `hour` falls in this gate's half-open range.
    pub fn contains(self, hour: f64) -> bool {
        let (start, end) = self.range();
        hour >= start && hour < end
    }

    /// First gate containing the fractional `hour`.
    ///
    /// Values outside [0, 24), including exactly 24.0, fall back to
    /// [`Gate::Midnight`].
    pub fn for_hour(hour: f64) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.contains(hour))
            .unwrap_or(Gate::Midnight)
    }
}

/// Gate and its energy at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateReading {
    /// Active gate.
    pub gate: Gate,
    /// Gate energy, [0, 1].
    pub energy: f64,
}

impl GateReading {
    /// Reading for a fractional local hour.
    pub fn for_hour(hour: f64) -> Self {
        let gate = Gate::for_hour(hour);
        Self { gate, energy: gate.energy() }
    }

    /// Reading for the wall-clock hour and minute of `now` in its own zone.
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::for_hour(now.hour() as f64 + now.minute() as f64 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_every_minute_matches_exactly_one_gate() {
        for minute in 0..(24 * 60) {
            let hour = minute as f64 / 60.0;
            let matches = Gate::ALL.iter().filter(|g| g.contains(hour)).count();
            assert_eq!(matches, 1, "hour {} matched {} gates", hour, matches);
        }
    }

    #[test]
    fn test_ranges_are_contiguous() {
        assert_eq!(Gate::ALL[0].range().0, 0.0);
        assert_eq!(Gate::ALL[8].range().1, 24.0);
        for pair in Gate::ALL.windows(2) {
            assert_eq!(pair[0].range().1, pair[1].range().0);
        }
    }

    #[test]
    fn test_boundaries_are_half_open() {
        assert_eq!(Gate::for_hour(2.999), Gate::Midnight);
        assert_eq!(Gate::for_hour(3.0), Gate::Threshold);
        assert_eq!(Gate::for_hour(12.0), Gate::Noon);
        assert_eq!(Gate::for_hour(23.99), Gate::Night);
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert_eq!(Gate::for_hour(24.0), Gate::Midnight);
        assert_eq!(Gate::for_hour(-0.5), Gate::Midnight);
        assert_eq!(Gate::for_hour(f64::NAN), Gate::Midnight);
    }

    #[test]
    fn test_energies_in_unit_interval() {
        for g in Gate::ALL {
            assert!((0.0..=1.0).contains(&g.energy()), "{:?}", g);
            assert!(!g.description().is_empty());
        }
    }

    #[test]
    fn test_reading_uses_hour_and_minute() {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 9, 59, 59).unwrap();
        let r = GateReading::at(&t);
        assert_eq!(r.gate, Gate::Morning);
        assert!((r.energy - 0.80).abs() < f64::EPSILON);

        let t = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(GateReading::at(&t).gate, Gate::Zenith);
    }
}
