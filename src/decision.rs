//! Two-option decision scoring on a fixed rubric.
//!
//! | Attribute | Points |
//! |-----------|--------|
//! | novel / familiar | +25 / +5 |
//! | meets someone new | +20 |
//! | crowd | +10 |
//! | reversible / irreversible | +15 / +5 |
//! | opens doors | +20 |
//! | closes doors | −10 |
//! | gut: excited / anxious / neutral / dread | +15 / +10 / 0 / −5 |
//!
//! A difference under 10 points is reported as near-equal.

use core::fmt;

use tracing::debug;

/// Margin below which options are near-equal.
pub const NEAR_EQUAL_MARGIN: i32 = 10;

/// Gut reaction to an option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gut {
    /// +15.
    Excited,
    /// +10: nerves often mark growth.
    Anxious,
    /// 0.
    #[default]
    Neutral,
    /// −5.
    Dread,
}

/// One side of a decision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionOption {
    /// Free-text name of the option.
    pub label: String,
    /// Something not done before.
    pub is_novel: bool,
    /// Involves meeting new people.
    pub meets_new: bool,
    /// Involves a crowd.
    pub crowd: bool,
    /// Can be undone.
    pub reversible: bool,
    /// Opens further possibilities.
    pub opens: bool,
    /// Closes off possibilities.
    pub closes: bool,
    /// Gut reaction.
    pub gut: Gut,
}

impl DecisionOption {
    /// Option with the given label and every attribute false/neutral.
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }
}

/// Score and rationale for one option.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionScore {
    /// Option label.
    pub label: String,
    /// Summed points.
    pub score: i32,
    /// One note per contributing factor, in rubric order.
    pub notes: Vec<String>,
}

/// Outcome of the comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// `|diff| < 10`.
    NearEqual,
    /// One option leads by `margin` points.
    Favors {
        /// Label of the higher-scoring option.
        label: String,
        /// Absolute score difference.
        margin: i32,
    },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::NearEqual => write!(f, "Near-equal: either path works. Flip a coin and commit."),
            Verdict::Favors { label, margin } => {
                write!(f, "{} leads by {} points", label, margin)
            }
        }
    }
}

/// Full comparison result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionResult {
    /// First option.
    pub a: OptionScore,
    /// Second option.
    pub b: OptionScore,
    /// `a.score − b.score`.
    pub diff: i32,
    /// Comparative verdict.
    pub verdict: Verdict,
}

/// Score one option on the rubric.
pub fn score_option(option: &DecisionOption) -> OptionScore {
    let mut score = 0i32;
    let mut notes = Vec::new();
    let mut add = |points: i32, note: &str| {
        score += points;
        notes.push(format!("{}{} {}", if points >= 0 { "+" } else { "" }, points, note));
    };

    if option.is_novel {
        add(25, "new experience");
    } else {
        add(5, "familiar ground");
    }
    if option.meets_new {
        add(20, "meets new people");
    }
    if option.crowd {
        add(10, "crowd energy");
    }
    if option.reversible {
        add(15, "reversible");
    } else {
        add(5, "irreversible commitment");
    }
    if option.opens {
        add(20, "opens doors");
    }
    if option.closes {
        add(-10, "closes doors");
    }
    match option.gut {
        Gut::Excited => add(15, "gut says excited"),
        Gut::Anxious => add(10, "gut says anxious (growth edge)"),
        Gut::Dread => add(-5, "gut says dread"),
        Gut::Neutral => {}
    }

    OptionScore { label: option.label.clone(), score, notes }
}

/// Score both options and compare them.
pub fn decide(a: &DecisionOption, b: &DecisionOption) -> DecisionResult {
    let a = score_option(a);
    let b = score_option(b);
    let diff = a.score - b.score;
    let verdict = if diff.abs() < NEAR_EQUAL_MARGIN {
        Verdict::NearEqual
    } else {
        let leader = if diff > 0 { &a } else { &b };
        Verdict::Favors { label: leader.label.clone(), margin: diff.abs() }
    };
    debug!(a = a.score, b = b.score, diff, "decision scored");
    DecisionResult { a, b, diff, verdict }
}
