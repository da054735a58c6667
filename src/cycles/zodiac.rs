//! Sun sign from a birth date.
//!
//! Ranges are inclusive at both ends. Capricorn spans the year boundary and
//! is listed twice (Dec 22–31 and Jan 1–19); both entries name the same sign.

use chrono::{Datelike, NaiveDate};

/// The twelve sun signs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZodiacSign {
    /// Mar 21 – Apr 19.
    Aries,
    /// Apr 20 – May 20.
    Taurus,
    /// May 21 – Jun 20.
    Gemini,
    /// Jun 21 – Jul 22.
    Cancer,
    /// Jul 23 – Aug 22.
    Leo,
    /// Aug 23 – Sep 22.
    Virgo,
    /// Sep 23 – Oct 22.
    Libra,
    /// Oct 23 – Nov 21.
    Scorpio,
    /// Nov 22 – Dec 21.
    Sagittarius,
    /// Dec 22 – Jan 19.
    Capricorn,
    /// Jan 20 – Feb 18.
    Aquarius,
    /// Feb 19 – Mar 20.
    Pisces,
}

/// Classical element of a sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// Aries, Leo, Sagittarius.
    Fire,
    /// Taurus, Virgo, Capricorn.
    Earth,
    /// Gemini, Libra, Aquarius.
    Air,
    /// Cancer, Scorpio, Pisces.
    Water,
}

/// `(sign, (start month, start day), (end month, end day))`, calendar order.
const RANGES: [(ZodiacSign, (u32, u32), (u32, u32)); 13] = [
    (ZodiacSign::Capricorn, (1, 1), (1, 19)),
    (ZodiacSign::Aquarius, (1, 20), (2, 18)),
    (ZodiacSign::Pisces, (2, 19), (3, 20)),
    (ZodiacSign::Aries, (3, 21), (4, 19)),
    (ZodiacSign::Taurus, (4, 20), (5, 20)),
    (ZodiacSign::Gemini, (5, 21), (6, 20)),
    (ZodiacSign::Cancer, (6, 21), (7, 22)),
    (ZodiacSign::Leo, (7, 23), (8, 22)),
    (ZodiacSign::Virgo, (8, 23), (9, 22)),
    (ZodiacSign::Libra, (9, 23), (10, 22)),
    (ZodiacSign::Scorpio, (10, 23), (11, 21)),
    (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    (ZodiacSign::Capricorn, (12, 22), (12, 31)),
];

impl ZodiacSign {
    /// Sign for a `(month, day)` pair; `None` if no range contains it.
    pub fn from_month_day(month: u32, day: u32) -> Option<Self> {
        RANGES
            .iter()
            .find(|(_, start, end)| (month, day) >= *start && (month, day) <= *end)
            .map(|(sign, _, _)| *sign)
    }

    /// Sign for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        // Every valid calendar date falls in one of the ranges.
        Self::from_month_day(date.month(), date.day()).unwrap_or(ZodiacSign::Capricorn)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Astrological glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }

    /// Element of the sign.
    pub fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }
}
