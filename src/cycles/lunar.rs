//! Lunar phase from a fixed new-moon epoch.

use core::f64::consts::TAU;

use chrono::{DateTime, TimeZone};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_587_705_76;

/// Reference new moon: 2000-01-06 18:14 UTC, in Unix milliseconds.
pub const NEW_MOON_EPOCH_MS: i64 = 947_182_440_000;

const MS_PER_DAY: f64 = 86_400_000.0;

/// The eight equal-width phases of the synodic month, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonPhase {
    /// [0, 1/8) of the cycle.
    NewMoon,
    /// [1/8, 2/8).
    WaxingCrescent,
    /// [2/8, 3/8).
    FirstQuarter,
    /// [3/8, 4/8).
    WaxingGibbous,
    /// [4/8, 5/8).
    FullMoon,
    /// [5/8, 6/8).
    WaningGibbous,
    /// [6/8, 7/8).
    LastQuarter,
    /// [7/8, 1).
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Phase for a bucket index; wraps modulo 8.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Moon glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::FullMoon => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }

    /// Short qualitative reading.
    pub fn quality(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "Seeding: begin quietly",
            MoonPhase::WaxingCrescent => "Intention: gather momentum",
            MoonPhase::FirstQuarter => "Action: push through resistance",
            MoonPhase::WaxingGibbous => "Refinement: adjust and persist",
            MoonPhase::FullMoon => "Culmination: see what is revealed",
            MoonPhase::WaningGibbous => "Gratitude: share what you found",
            MoonPhase::LastQuarter => "Release: let go of what stalls",
            MoonPhase::WaningCrescent => "Rest: recover before the next cycle",
        }
    }
}

/// Lunar position at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarReading {
    /// Bucketed phase.
    pub phase: MoonPhase,
    /// `0.5 + 0.5 · sin(2π · fraction)`, in [0, 1].
    pub energy: f64,
    /// Days into the current cycle, [0, 29.53…).
    pub phase_day: f64,
}

impl LunarReading {
    /// Reading for a Unix timestamp in milliseconds.
    ///
    /// Instants before the epoch fold into the cycle with a Euclidean
    /// remainder, so `phase_day` is never negative.
    pub fn at_millis(unix_ms: i64) -> Self {
        let days_since = (unix_ms - NEW_MOON_EPOCH_MS) as f64 / MS_PER_DAY;
        let mut phase_day = days_since.rem_euclid(SYNODIC_MONTH_DAYS);
        if phase_day >= SYNODIC_MONTH_DAYS {
            phase_day = 0.0;
        }
        let fraction = phase_day / SYNODIC_MONTH_DAYS;
        let index = (fraction * 8.0).floor() as usize % 8;
        Self {
            phase: MoonPhase::from_index(index),
            energy: (0.5 + 0.5 * (fraction * TAU).sin()).clamp(0.0, 1.0),
            phase_day,
        }
    }

    /// Reading for a wall-clock instant in any time zone.
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::at_millis(now.timestamp_millis())
    }

    /// Fraction of the cycle elapsed, [0, 1).
    pub fn fraction(&self) -> f64 {
        self.phase_day / SYNODIC_MONTH_DAYS
    }
}
