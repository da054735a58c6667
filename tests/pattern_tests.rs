//! Integration tests for pattern detection over event logs.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use entropy_compass::patterns::NEED_MORE_DATA;
use entropy_compass::{detect_patterns, LogEvent, PatternKind, Sentiment};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn at(day: u32, hour: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 4, day, hour, 0, 0)
        .unwrap()
}

fn event(polarity: Sentiment, day: u32, hour: u32) -> LogEvent {
    LogEvent::new("entry", polarity, at(day, hour))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[test]
fn test_short_history_returns_message() {
    for n in 0..3u32 {
        let events: Vec<_> = (0..n).map(|i| event(Sentiment::Positive, 1 + i, 9)).collect();
        let report = detect_patterns(&events);
        assert!(report.patterns.is_empty(), "n = {}", n);
        assert_eq!(report.message.as_deref(), Some(NEED_MORE_DATA));
    }
}

#[test]
fn test_four_positive_then_negative_is_streak() {
    let hours = [2, 9, 15, 21, 3];
    let polarities = [
        Sentiment::Positive,
        Sentiment::Positive,
        Sentiment::Positive,
        Sentiment::Positive,
        Sentiment::Negative,
    ];
    let events: Vec<_> = polarities
        .iter()
        .zip(hours)
        .enumerate()
        .map(|(i, (p, h))| event(*p, 1 + i as u32, h))
        .collect();

    let report = detect_patterns(&events);
    assert!(report.message.is_none());
    let streak = report
        .patterns
        .iter()
        .find(|p| p.kind == PatternKind::Streak)
        .expect("streak pattern");
    assert!((streak.strength - 0.8).abs() < 1e-12, "got {}", streak.strength);
    assert!(streak.label.contains("positive"));
}

#[test]
fn test_two_of_five_share_category() {
    let events = vec![
        event(Sentiment::Positive, 1, 2).with_category("work"),
        event(Sentiment::Negative, 2, 9).with_category("family"),
        event(Sentiment::Neutral, 3, 15).with_category("work"),
        event(Sentiment::Positive, 4, 21),
        event(Sentiment::Negative, 5, 3).with_category("health"),
    ];
    let report = detect_patterns(&events);
    let thematic = report
        .patterns
        .iter()
        .find(|p| p.kind == PatternKind::Thematic)
        .expect("thematic pattern");
    assert!((thematic.strength - 0.4).abs() < 1e-12, "got {}", thematic.strength);
    assert!(thematic.label.contains("work"));
}

#[test]
fn test_evening_cluster_and_acceleration() {
    let start = at(1, 19);
    let offsets_hours = [0i64, 72, 144, 216, 217, 218, 219];
    let events: Vec<_> = offsets_hours
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let polarity = if i % 2 == 0 { Sentiment::Positive } else { Sentiment::Negative };
            LogEvent::new("out", polarity, start + Duration::hours(*h))
        })
        .collect();

    let report = detect_patterns(&events);
    let kinds: Vec<_> = report.patterns.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, vec![PatternKind::Temporal, PatternKind::Acceleration]);

    let temporal = &report.patterns[0];
    assert!(temporal.label.contains("evening"), "label: {}", temporal.label);
    assert!((report.patterns[1].strength - 0.8).abs() < 1e-12);
}

#[test]
fn test_neutral_entries_break_streaks() {
    let events = vec![
        event(Sentiment::Positive, 1, 9),
        event(Sentiment::Positive, 2, 9),
        event(Sentiment::Neutral, 3, 9),
        event(Sentiment::Positive, 4, 9),
        event(Sentiment::Positive, 5, 9),
    ];
    let report = detect_patterns(&events);
    assert!(report.patterns.iter().all(|p| p.kind != PatternKind::Streak));
}

#[test]
fn test_four_neutral_entries_form_a_streak() {
    let events: Vec<_> = (1..=4).map(|d| event(Sentiment::Neutral, d, 9 + d)).collect();
    let report = detect_patterns(&events);
    let streak = report
        .patterns
        .iter()
        .find(|p| p.kind == PatternKind::Streak)
        .expect("streak pattern");
    assert!((streak.strength - 1.0).abs() < 1e-12, "got {}", streak.strength);
    assert!(streak.label.contains("neutral"), "label: {}", streak.label);
}
