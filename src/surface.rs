//! Daily check-in "surface" score.
//!
//! Tiered bands per dimension plus flat flag bonuses, clamped to [0, 100]:
//!
//! | Input | Bands |
//! |-------|-------|
//! | novelty (0–10) | ≥ 8 → +30, ≥ 5 → +20, ≥ 2 → +10 |
//! | weak ties | ≥ 3 → +25, ≥ 1 → +15 |
//! | strong ties | ≥ 2 → +15, ≥ 1 → +10 |
//! | said yes / noticed / shared publicly | +10 each |

/// Upper bound of the score.
pub const MAX_SURFACE_SCORE: u32 = 100;

/// Upper bound of the novelty rating.
pub const MAX_NOVELTY: u8 = 10;

/// One day's self-report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyCheckIn {
    /// Self-rated novelty of the day, 0–10. Larger values count as 10.
    pub novelty: u8,
    /// Interactions with acquaintances or strangers.
    pub weak_ties: u32,
    /// Interactions with close friends or family.
    pub strong_ties: u32,
    /// Said yes to an unplanned invitation.
    pub said_yes: bool,
    /// Noticed something unusual.
    pub noticed: bool,
    /// Shared something publicly.
    pub shared_publicly: bool,
}

/// Score with its contributing factors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceScore {
    /// Total, [0, 100].
    pub score: u32,
    /// One string per contributing band or flag.
    pub factors: Vec<String>,
}

/// Score a check-in.
pub fn surface_score(check_in: &DailyCheckIn) -> SurfaceScore {
    let mut score = 0u32;
    let mut factors = Vec::new();
    let mut add = |points: u32, factor: String| {
        score += points;
        factors.push(factor);
    };

    match check_in.novelty.min(MAX_NOVELTY) {
        n if n >= 8 => add(30, format!("High novelty ({}/10)", n)),
        n if n >= 5 => add(20, format!("Moderate novelty ({}/10)", n)),
        n if n >= 2 => add(10, format!("Some novelty ({}/10)", n)),
        _ => {}
    }
    match check_in.weak_ties {
        n if n >= 3 => add(25, format!("{} weak-tie connections", n)),
        n if n >= 1 => add(15, format!("{} weak-tie connection(s)", n)),
        _ => {}
    }
    match check_in.strong_ties {
        n if n >= 2 => add(15, format!("{} strong-tie connections", n)),
        n if n >= 1 => add(10, "1 strong-tie connection".to_owned()),
        _ => {}
    }
    if check_in.said_yes {
        add(10, "Said yes to the unexpected".to_owned());
    }
    if check_in.noticed {
        add(10, "Noticed something new".to_owned());
    }
    if check_in.shared_publicly {
        add(10, "Shared publicly".to_owned());
    }

    SurfaceScore { score: score.min(MAX_SURFACE_SCORE), factors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_check_in_scores_zero() {
        let s = surface_score(&DailyCheckIn::default());
        assert_eq!(s.score, 0);
        assert!(s.factors.is_empty());
    }

    #[test]
    fn test_bands_are_tiered() {
        let base = DailyCheckIn::default();
        let novelty = |n| surface_score(&DailyCheckIn { novelty: n, ..base.clone() }).score;
        assert_eq!(novelty(1), 0);
        assert_eq!(novelty(2), 10);
        assert_eq!(novelty(5), 20);
        assert_eq!(novelty(8), 30);
        assert_eq!(novelty(10), 30);

        let weak = |n| surface_score(&DailyCheckIn { weak_ties: n, ..base.clone() }).score;
        assert_eq!(weak(0), 0);
        assert_eq!(weak(1), 15);
        assert_eq!(weak(3), 25);
        assert_eq!(weak(50), 25);

        let strong = |n| surface_score(&DailyCheckIn { strong_ties: n, ..base.clone() }).score;
        assert_eq!(strong(1), 10);
        assert_eq!(strong(2), 15);
    }

    #[test]
    fn test_novelty_above_ten_counts_as_ten() {
        let s = surface_score(&DailyCheckIn { novelty: 200, ..DailyCheckIn::default() });
        assert_eq!(s.score, 30);
        assert_eq!(s.factors, vec!["High novelty (10/10)"]);
    }

    #[test]
    fn test_maximum_is_clamped_to_100() {
        let s = surface_score(&DailyCheckIn {
            novelty: 10,
            weak_ties: 9,
            strong_ties: 9,
            said_yes: true,
            noticed: true,
            shared_publicly: true,
        });
        assert_eq!(s.score, 100);
        assert_eq!(s.factors.len(), 6);
    }

    #[test]
    fn test_flags_add_factors_in_order() {
        let s = surface_score(&DailyCheckIn {
            said_yes: true,
            shared_publicly: true,
            ..DailyCheckIn::default()
        });
        assert_eq!(s.score, 20);
        assert_eq!(s.factors, vec!["Said yes to the unexpected", "Shared publicly"]);
    }
}
