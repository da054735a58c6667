//! Integration tests for the decision rubric and the daily check-in score.

use chrono::{NaiveDate, Utc};
use entropy_compass::decision::score_option;
use entropy_compass::{
    decide, surface_score, CompassConfig, CompassSession, DailyCheckIn, DecisionOption, Gut,
    RngSource, Verdict,
};

// ─── Decision ────────────────────────────────────────────────────────────────

#[test]
fn test_bold_option_beats_blank_by_85() {
    let a = DecisionOption {
        label: "Move abroad".into(),
        is_novel: true,
        meets_new: true,
        crowd: false,
        reversible: true,
        opens: true,
        closes: false,
        gut: Gut::Excited,
    };
    let b = DecisionOption::new("Stay put");

    let result = decide(&a, &b);
    assert_eq!(result.a.score, 95);
    assert_eq!(result.b.score, 10);
    assert_eq!(result.diff, 85);
    match &result.verdict {
        Verdict::Favors { label, margin } => {
            assert_eq!(label, "Move abroad");
            assert_eq!(*margin, 85);
        }
        other => panic!("expected a winner, got {:?}", other),
    }
}

#[test]
fn test_notes_follow_rubric_order() {
    let option = DecisionOption {
        is_novel: true,
        crowd: true,
        reversible: true,
        closes: true,
        gut: Gut::Anxious,
        ..DecisionOption::new("Festival")
    };
    let scored = score_option(&option);
    assert_eq!(scored.score, 25 + 10 + 15 - 10 + 10);
    assert_eq!(
        scored.notes,
        vec![
            "+25 new experience",
            "+10 crowd energy",
            "+15 reversible",
            "-10 closes doors",
            "+10 gut says anxious (growth edge)",
        ]
    );
}

#[test]
fn test_close_scores_are_near_equal() {
    let a = DecisionOption { opens: true, ..DecisionOption::new("A") };
    let b = DecisionOption { meets_new: true, gut: Gut::Dread, ..DecisionOption::new("B") };
    let result = decide(&a, &b);
    assert_eq!(result.diff, 5);
    assert_eq!(result.verdict, Verdict::NearEqual);
}

// ─── Surface ─────────────────────────────────────────────────────────────────

#[test]
fn test_surface_score_mid_day() {
    let s = surface_score(&DailyCheckIn {
        novelty: 6,
        weak_ties: 2,
        strong_ties: 1,
        said_yes: false,
        noticed: true,
        shared_publicly: false,
    });
    assert_eq!(s.score, 20 + 15 + 10 + 10);
    assert_eq!(s.factors.len(), 4);
}

#[test]
fn test_session_caches_todays_check_in() {
    let mut session = CompassSession::new(CompassConfig::default(), RngSource::seeded(3)).unwrap();
    let today: NaiveDate = Utc::now().date_naive();
    assert!(session.check_in_for(today).is_none());

    let check_in = DailyCheckIn { novelty: 10, weak_ties: 4, ..DailyCheckIn::default() };
    let recorded = session.record_check_in(today, &check_in).clone();
    assert_eq!(recorded.score, 55);
    assert_eq!(session.check_in_for(today), Some(&recorded));
}
