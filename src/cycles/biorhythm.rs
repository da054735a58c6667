//! Biorhythm channels keyed to whole days since birth.

use core::f64::consts::TAU;

use chrono::{DateTime, NaiveDate, TimeZone};

const MS_PER_DAY: i64 = 86_400_000;

/// Sinusoidal channel with a fixed period.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiorhythmChannel {
    /// `sin(2π · days / cycle_length_days)`, in [−1, 1].
    pub value: f64,
    /// Period in days.
    pub cycle_length_days: u32,
}

impl BiorhythmChannel {
    fn at(days: i64, cycle_length_days: u32) -> Self {
        let value = (TAU * days as f64 / cycle_length_days as f64).sin();
        Self { value, cycle_length_days }
    }
}

/// The four channels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Biorhythm {
    /// 23-day channel.
    pub physical: BiorhythmChannel,
    /// 28-day channel.
    pub emotional: BiorhythmChannel,
    /// 33-day channel.
    pub intellectual: BiorhythmChannel,
    /// 38-day channel.
    pub intuitive: BiorhythmChannel,
    /// Whole days elapsed since birth (negative before birth).
    pub days_since_birth: i64,
}

impl Biorhythm {
    /// Physical period.
    pub const PHYSICAL_DAYS: u32 = 23;
    /// Emotional period.
    pub const EMOTIONAL_DAYS: u32 = 28;
    /// Intellectual period.
    pub const INTELLECTUAL_DAYS: u32 = 33;
    /// Intuitive period.
    pub const INTUITIVE_DAYS: u32 = 38;

    /// Channels for a given whole-day count.
    pub fn for_days(days_since_birth: i64) -> Self {
        Self {
            physical: BiorhythmChannel::at(days_since_birth, Self::PHYSICAL_DAYS),
            emotional: BiorhythmChannel::at(days_since_birth, Self::EMOTIONAL_DAYS),
            intellectual: BiorhythmChannel::at(days_since_birth, Self::INTELLECTUAL_DAYS),
            intuitive: BiorhythmChannel::at(days_since_birth, Self::INTUITIVE_DAYS),
            days_since_birth,
        }
    }

    /// Channels at `now` for a birth `date` taken as midnight UTC.
    ///
    /// Days are `floor((now − birth) / 86 400 000 ms)`.
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>, birth: NaiveDate) -> Self {
        let birth_ms = birth
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default();
        let days = (now.timestamp_millis() - birth_ms).div_euclid(MS_PER_DAY);
        Self::for_days(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_birth_day_is_zero_crossing() {
        let b = Biorhythm::for_days(0);
        for ch in [b.physical, b.emotional, b.intellectual, b.intuitive] {
            assert!(ch.value.abs() < 1e-12);
        }
    }

    #[test]
    fn test_cycle_lengths() {
        let b = Biorhythm::for_days(1);
        assert_eq!(b.physical.cycle_length_days, 23);
        assert_eq!(b.emotional.cycle_length_days, 28);
        assert_eq!(b.intellectual.cycle_length_days, 33);
        assert_eq!(b.intuitive.cycle_length_days, 38);
    }

    #[test]
    fn test_emotional_quarter_cycle_peak() {
        let b = Biorhythm::for_days(7);
        assert!((b.emotional.value - 1.0).abs() < 1e-12);
        let b = Biorhythm::for_days(21);
        assert!((b.emotional.value + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_values_bounded() {
        for days in -100..20_000 {
            let b = Biorhythm::for_days(days);
            for ch in [b.physical, b.emotional, b.intellectual, b.intuitive] {
                assert!((-1.0..=1.0).contains(&ch.value));
            }
        }
    }

    #[test]
    fn test_days_floor_from_midnight_utc() {
        let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let now = Utc.with_ymd_and_hms(1990, 1, 8, 23, 59, 0).unwrap();
        assert_eq!(Biorhythm::at(&now, birth).days_since_birth, 7);

        let before = Utc.with_ymd_and_hms(1989, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(Biorhythm::at(&before, birth).days_since_birth, -1);
    }
}
