/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Pattern detection over a user's event log.
//!
//! Four independent checks run over the full history on every call; there is
//! no incremental state. Results come back in fixed evaluation order, not
//! sorted by strength:
//!
//! | Check | Fires when | Strength |
//! |-------|-----------|----------|
//! | Temporal | busiest day segment holds ≥ 2 events | `count / total` |
//! | Thematic | most common category appears ≥ 2 times | `count / total` |
//! | Streak | longest same-polarity run ≥ 3 | `run / total` |
//! | Acceleration | ≥ 4 events, mean of last 3 gaps < half the mean gap | 0.8 |
//!
//! Events must arrive in timestamp order; the detector does not sort them.
//! Hour-of-day uses each timestamp's own offset.
//!
//! # Tie-breaks
//!
//! - Temporal: earliest segment in night → morning → afternoon → evening order.
//! - Thematic: the category seen first.
//! - Streak: the earlier run; a later run must be strictly longer to replace it.
//!   Runs are counted over all three sentiments, so neutral entries form their
//!   own runs and break positive or negative ones.

use chrono::{DateTime, FixedOffset, Timelike};
use hashbrown::HashMap;
use tracing::debug;

/// Fewer events than this yields an empty report.
pub const MIN_EVENTS: usize = 3;

/// Message returned with an empty report on short input.
pub const NEED_MORE_DATA: &str = "Log at least 3 entries to reveal patterns";

const ACCELERATION_STRENGTH: f64 = 0.8;

// ─── Input ──────────────────────────────────────────────────────────────────

/// Tone of a logged event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sentiment {
    /// Good outcome.
    Positive,
    /// Bad outcome.
    Negative,
    /// Neither.
    Neutral,
}

/// One user-logged event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEvent {
    /// Free text.
    pub text: String,
    /// Tone.
    pub polarity: Sentiment,
    /// Optional user category.
    pub category: Option<String>,
    /// When it happened, in the user's local offset.
    pub timestamp: DateTime<FixedOffset>,
}

impl LogEvent {
    /// Construct an uncategorised event.
    pub fn new(text: impl Into<String>, polarity: Sentiment, timestamp: DateTime<FixedOffset>) -> Self {
        Self { text: text.into(), polarity, category: None, timestamp }
    }

    /// Attach a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// Kind of detected pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternKind {
    /// Time-of-day clustering.
    Temporal,
    /// Repeated category.
    Thematic,
    /// Same-polarity run.
    Streak,
    /// Logging frequency speeding up.
    Acceleration,
}

/// A detected pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    /// Kind.
    pub kind: PatternKind,
    /// Human-readable finding.
    pub label: String,
    /// What to try next.
    pub suggestion: String,
    /// Share of the history supporting the finding, [0, 1].
    pub strength: f64,
}

/// Result of one detection pass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternReport {
    /// Patterns in evaluation order.
    pub patterns: Vec<Pattern>,
    /// Set when the history was too short to analyse.
    pub message: Option<String>,
}

/// Quarter of the day by local hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DaySegment {
    /// Before 06:00.
    Night,
    /// 06:00–11:59.
    Morning,
    /// 12:00–17:59.
    Afternoon,
    /// 18:00 onward.
    Evening,
}

impl DaySegment {
    /// Segments in tie-break order.
    pub const ALL: [DaySegment; 4] = [
        DaySegment::Night,
        DaySegment::Morning,
        DaySegment::Afternoon,
        DaySegment::Evening,
    ];

    /// Segment for an hour in 0..24.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 6 {
            DaySegment::Night
        } else if hour < 12 {
            DaySegment::Morning
        } else if hour < 18 {
            DaySegment::Afternoon
        } else {
            DaySegment::Evening
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            DaySegment::Night => "night",
            DaySegment::Morning => "morning",
            DaySegment::Afternoon => "afternoon",
            DaySegment::Evening => "evening",
        }
    }
}

// ─── Detection ──────────────────────────────────────────────────────────────

/// Run all four checks over `events`.
///
/// Never fails: fewer than [`MIN_EVENTS`] events returns an empty list with
/// [`NEED_MORE_DATA`].
pub fn detect_patterns(events: &[LogEvent]) -> PatternReport {
    if events.len() < MIN_EVENTS {
        return PatternReport {
            patterns: Vec::new(),
            message: Some(NEED_MORE_DATA.to_owned()),
        };
    }

    let patterns: Vec<Pattern> = [
        temporal_pattern(events),
        thematic_pattern(events),
        streak_pattern(events),
        acceleration_pattern(events),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!(events = events.len(), found = patterns.len(), "pattern detection complete");
    PatternReport { patterns, message: None }
}

fn temporal_pattern(events: &[LogEvent]) -> Option<Pattern> {
    let mut counts = [0usize; 4];
    for e in events {
        let segment = DaySegment::from_hour(e.timestamp.hour());
        counts[segment as usize] += 1;
    }

    // Strict > keeps the earliest segment on ties.
    let best = (1..counts.len()).fold(0, |best, i| if counts[i] > counts[best] { i } else { best });
    let count = counts[best];
    if count < 2 {
        return None;
    }

    let segment = DaySegment::ALL[best];
    Some(Pattern {
        kind: PatternKind::Temporal,
        label: format!("{} of {} entries happen in the {}", count, events.len(), segment.name()),
        suggestion: format!(
            "Your {} hours seem charged. Plan something deliberate for that window.",
            segment.name()
        ),
        strength: count as f64 / events.len() as f64,
    })
}

fn thematic_pattern(events: &[LogEvent]) -> Option<Pattern> {
    // category → (count, first index)
    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, category) in events.iter().enumerate().filter_map(|(i, e)| e.category.as_deref().map(|c| (i, c))) {
        tally.entry(category).or_insert((0, i)).0 += 1;
    }

    let (category, (count, _)) = tally
        .into_iter()
        .max_by(|(_, (ca, fa)), (_, (cb, fb))| ca.cmp(cb).then(fb.cmp(fa)))?;
    if count < 2 {
        return None;
    }

    Some(Pattern {
        kind: PatternKind::Thematic,
        label: format!("\"{}\" keeps coming up ({} entries)", category, count),
        suggestion: format!("Look closer at {}: something there wants attention.", category),
        strength: count as f64 / events.len() as f64,
    })
}

fn streak_pattern(events: &[LogEvent]) -> Option<Pattern> {
    let mut longest = 0usize;
    let mut longest_polarity = Sentiment::Neutral;
    let mut current = 0usize;
    let mut current_polarity: Option<Sentiment> = None;

    for e in events {
        if current_polarity == Some(e.polarity) {
            current += 1;
        } else {
            current = 1;
            current_polarity = Some(e.polarity);
        }
        if current > longest {
            longest = current;
            longest_polarity = e.polarity;
        }
    }

    if longest < 3 {
        return None;
    }

    let (tone, suggestion) = match longest_polarity {
        Sentiment::Positive => ("positive", "You are on a run. Keep saying yes while it lasts."),
        Sentiment::Negative => ("negative", "A rough stretch. Change one variable and see if it breaks."),
        Sentiment::Neutral => ("neutral", "A flat stretch. Try one thing that could tip the day either way."),
    };
    Some(Pattern {
        kind: PatternKind::Streak,
        label: format!("{} {} entries in a row", longest, tone),
        suggestion: suggestion.to_owned(),
        strength: longest as f64 / events.len() as f64,
    })
}

fn acceleration_pattern(events: &[LogEvent]) -> Option<Pattern> {
    if events.len() < 4 {
        return None;
    }
    let gaps: Vec<f64> = events
        .windows(2)
        .map(|w| (w[1].timestamp - w[0].timestamp).num_milliseconds() as f64)
        .collect();

    let overall = gaps.iter().sum::<f64>() / gaps.len() as f64;
    let recent = gaps[gaps.len() - 3..].iter().sum::<f64>() / 3.0;
    if !(overall > 0.0 && recent < overall * 0.5) {
        return None;
    }

    Some(Pattern {
        kind: PatternKind::Acceleration,
        label: "Entries are arriving faster than usual".to_owned(),
        suggestion: "Something is building. Slow down and note what changed.".to_owned(),
        strength: ACCELERATION_STRENGTH,
    })
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, day, hour, 0, 0)
            .unwrap()
    }

    fn ev(polarity: Sentiment, day: u32, hour: u32) -> LogEvent {
        LogEvent::new("entry", polarity, at(day, hour))
    }

    #[test]
    fn test_short_history_is_empty_with_message() {
        for n in 0..3 {
            let events: Vec<LogEvent> = (0..n).map(|i| ev(Sentiment::Positive, 1 + i, 9)).collect();
            let report = detect_patterns(&events);
            assert!(report.patterns.is_empty());
            assert_eq!(report.message.as_deref(), Some(NEED_MORE_DATA));
        }
    }

    #[test]
    fn test_day_segments() {
        assert_eq!(DaySegment::from_hour(0), DaySegment::Night);
        assert_eq!(DaySegment::from_hour(5), DaySegment::Night);
        assert_eq!(DaySegment::from_hour(6), DaySegment::Morning);
        assert_eq!(DaySegment::from_hour(12), DaySegment::Afternoon);
        assert_eq!(DaySegment::from_hour(18), DaySegment::Evening);
        assert_eq!(DaySegment::from_hour(23), DaySegment::Evening);
    }

    #[test]
    fn test_temporal_top_bucket() {
        let events = vec![
            ev(Sentiment::Neutral, 1, 8),
            ev(Sentiment::Neutral, 2, 9),
            ev(Sentiment::Neutral, 3, 20),
        ];
        let p = temporal_pattern(&events).unwrap();
        assert!(p.label.contains("morning"));
        assert!((p.strength - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_temporal_needs_two_in_bucket() {
        let events = vec![
            ev(Sentiment::Neutral, 1, 2),
            ev(Sentiment::Neutral, 2, 8),
            ev(Sentiment::Neutral, 3, 14),
        ];
        assert!(temporal_pattern(&events).is_none());
    }

    #[test]
    fn test_temporal_tie_prefers_earlier_segment() {
        let events = vec![
            ev(Sentiment::Neutral, 1, 20),
            ev(Sentiment::Neutral, 2, 21),
            ev(Sentiment::Neutral, 3, 7),
            ev(Sentiment::Neutral, 4, 8),
        ];
        assert!(temporal_pattern(&events).unwrap().label.contains("morning"));
    }

    #[test]
    fn test_thematic_first_seen_wins_tie() {
        let events = vec![
            ev(Sentiment::Neutral, 1, 9).with_category("travel"),
            ev(Sentiment::Neutral, 2, 9).with_category("work"),
            ev(Sentiment::Neutral, 3, 9).with_category("work"),
            ev(Sentiment::Neutral, 4, 9).with_category("travel"),
        ];
        let p = thematic_pattern(&events).unwrap();
        assert!(p.label.contains("travel"), "{}", p.label);
        assert!((p.strength - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_thematic_ignores_missing_and_singletons() {
        let events = vec![
            ev(Sentiment::Neutral, 1, 9),
            ev(Sentiment::Neutral, 2, 9).with_category("a"),
            ev(Sentiment::Neutral, 3, 9).with_category("b"),
        ];
        assert!(thematic_pattern(&events).is_none());
    }

    #[test]
    fn test_streak_four_positive_then_negative() {
        let mut events: Vec<LogEvent> = (1..=4).map(|d| ev(Sentiment::Positive, d, 9)).collect();
        events.push(ev(Sentiment::Negative, 5, 9));
        let p = streak_pattern(&events).unwrap();
        assert_eq!(p.kind, PatternKind::Streak);
        assert!((p.strength - 0.8).abs() < 1e-12);
        assert!(p.label.starts_with("4 positive"));
    }

    #[test]
    fn test_streak_tie_keeps_earlier_run() {
        let polarities = [
            Sentiment::Negative,
            Sentiment::Negative,
            Sentiment::Negative,
            Sentiment::Positive,
            Sentiment::Positive,
            Sentiment::Positive,
        ];
        let events: Vec<LogEvent> = polarities
            .iter()
            .enumerate()
            .map(|(i, &p)| ev(p, 1 + i as u32, 9))
            .collect();
        let p = streak_pattern(&events).unwrap();
        assert!(p.label.contains("negative"), "{}", p.label);
    }

    #[test]
    fn test_neutral_interrupts_positive_run() {
        let events = vec![
            ev(Sentiment::Positive, 1, 9),
            ev(Sentiment::Positive, 2, 9),
            ev(Sentiment::Neutral, 3, 9),
            ev(Sentiment::Positive, 4, 9),
            ev(Sentiment::Positive, 5, 9),
        ];
        assert!(streak_pattern(&events).is_none());
    }

    #[test]
    fn test_neutral_run_is_a_streak() {
        let events: Vec<LogEvent> = (1..=4).map(|d| ev(Sentiment::Neutral, d, 9)).collect();
        let p = streak_pattern(&events).unwrap();
        assert!((p.strength - 1.0).abs() < 1e-12, "got {}", p.strength);
        assert!(p.label.starts_with("4 neutral"), "{}", p.label);
        assert!(p.suggestion.starts_with("A flat stretch"));
    }

    #[test]
    fn test_neutral_run_between_signed_entries() {
        let events = vec![
            ev(Sentiment::Positive, 1, 9),
            ev(Sentiment::Neutral, 2, 9),
            ev(Sentiment::Neutral, 3, 9),
            ev(Sentiment::Neutral, 4, 9),
            ev(Sentiment::Negative, 5, 9),
            ev(Sentiment::Negative, 6, 9),
        ];
        let p = streak_pattern(&events).unwrap();
        assert!(p.label.starts_with("3 neutral"), "{}", p.label);
        assert!((p.strength - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_acceleration_fires_on_recent_burst() {
        let base = at(1, 0);
        let offsets_h = [0i64, 48, 96, 144, 145, 146, 147];
        let events: Vec<LogEvent> = offsets_h
            .iter()
            .map(|&h| LogEvent::new("x", Sentiment::Neutral, base + Duration::hours(h)))
            .collect();
        let p = acceleration_pattern(&events).unwrap();
        assert_eq!(p.strength, 0.8);
    }

    #[test]
    fn test_acceleration_needs_four_events_and_a_speedup() {
        let events: Vec<LogEvent> = (1..=3).map(|d| ev(Sentiment::Neutral, d, 9)).collect();
        assert!(acceleration_pattern(&events).is_none());

        let steady: Vec<LogEvent> = (1..=8).map(|d| ev(Sentiment::Neutral, d, 9)).collect();
        assert!(acceleration_pattern(&steady).is_none());

        // Identical timestamps: zero mean gap never fires.
        let frozen: Vec<LogEvent> = (0..5).map(|_| ev(Sentiment::Neutral, 1, 9)).collect();
        assert!(acceleration_pattern(&frozen).is_none());
    }

    #[test]
    fn test_all_checks_fire_in_fixed_order() {
        let base = at(1, 8);
        let offsets_h = [0i64, 48, 96, 144, 145, 146, 147];
        let events: Vec<LogEvent> = offsets_h
            .iter()
            .map(|&h| {
                LogEvent::new("x", Sentiment::Positive, base + Duration::hours(h)).with_category("work")
            })
            .collect();
        let report = detect_patterns(&events);
        let kinds: Vec<PatternKind> = report.patterns.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PatternKind::Temporal,
                PatternKind::Thematic,
                PatternKind::Streak,
                PatternKind::Acceleration
            ]
        );
        assert!(report.message.is_none());
        for p in &report.patterns {
            assert!((0.0..=1.0).contains(&p.strength));
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let events: Vec<LogEvent> = (1..=5).map(|d| ev(Sentiment::Positive, d, 9)).collect();
        let before = events.clone();
        let _ = detect_patterns(&events);
        assert_eq!(events, before);
    }
}
