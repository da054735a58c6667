/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Cyclical environment: biorhythm, lunar phase, time-of-day gate, zodiac.
//!
//! | Submodule | Key types | Needs birth date |
//! |-----------|-----------|------------------|
//! | [`biorhythm`] | [`Biorhythm`] | yes |
//! | [`lunar`] | [`LunarReading`], [`MoonPhase`] | no |
//! | [`gate`] | [`GateReading`], [`Gate`] | no |
//! | [`zodiac`] | [`ZodiacSign`] | yes |
//!
//! A [`CycleState`] is recomputed on every request from `(now, birth)` and is
//! never persisted. Birth-derived fields are `None` when no birth date is
//! supplied; they are omitted, not zeroed.
//!
//! Hour-of-day logic uses the wall-clock hour of the supplied `DateTime` in
//! its own zone. No time-zone normalisation is performed.

pub mod biorhythm;
pub mod gate;
pub mod lunar;
pub mod zodiac;

use chrono::{DateTime, TimeZone};
use tracing::trace;

pub use biorhythm::{Biorhythm, BiorhythmChannel};
pub use gate::{Gate, GateReading};
pub use lunar::{LunarReading, MoonPhase, SYNODIC_MONTH_DAYS};
pub use zodiac::{Element, ZodiacSign};

use crate::config::BirthProfile;

/// Snapshot of every cycle at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleState {
    /// Present only with a birth date.
    pub biorhythm: Option<Biorhythm>,
    /// Lunar phase and energy.
    pub lunar: LunarReading,
    /// Active time-of-day gate.
    pub gate: GateReading,
    /// Present only with a birth date.
    pub zodiac: Option<ZodiacSign>,
}

impl CycleState {
    /// Compute all cycles for `now`, with birth-derived fields when `birth` is given.
    pub fn compute<Tz: TimeZone>(now: &DateTime<Tz>, birth: Option<&BirthProfile>) -> Self {
        let state = Self {
            biorhythm: birth.map(|b| Biorhythm::at(now, b.date)),
            lunar: LunarReading::at(now),
            gate: GateReading::at(now),
            zodiac: birth.map(|b| ZodiacSign::from_date(b.date)),
        };
        trace!(
            lunar = state.lunar.phase.name(),
            gate = state.gate.gate.name(),
            has_birth = birth.is_some(),
            "cycle state computed"
        );
        state
    }
}
