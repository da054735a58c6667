//! # Entropy compass walkthrough
//!
//! Runs a few scan ticks on the OS generator, asks one probe, then feeds a
//! small event log, a decision and a check-in through the advisory scorers.
//!
//! Set `RUST_LOG=entropy_compass=debug` to watch the pipeline trace.

use chrono::{Duration, FixedOffset, Local, NaiveDate, TimeZone};
use tracing_subscriber::{fmt, EnvFilter};

use entropy_compass::{
    decide, detect_patterns, BirthProfile, CompassConfig, CompassSession, DailyCheckIn,
    DecisionOption, Gut, LogEvent, RngSource, Sentiment,
};

// ── Display helpers ───────────────────────────────────────────────────────────

fn bar(v: f64) -> String {
    let filled = (v.clamp(0.0, 1.0) * 20.0).round() as usize;
    let empty = 20usize.saturating_sub(filled);
    format!("[{}{}] {:.2}", "█".repeat(filled), "░".repeat(empty), v)
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().take(16).map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" ")
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(true).init();

    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║  Entropy Compass: scan, probe, patterns, decide                      ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    let birth = BirthProfile::from_date(NaiveDate::from_ymd_opt(1990, 6, 15).ok_or("bad date")?);
    let mut session = CompassSession::new(CompassConfig::default(), RngSource::os())?.with_birth(birth);

    // ── Scans ────────────────────────────────────────────────────────────────
    println!("▶  SCANS (one per {:?} of simulated time)\n", session.config().scan_interval);

    let start = Local::now();
    for tick in 0..4i64 {
        let now = start + Duration::seconds(tick * 3);
        let r = session.scan(&now)?;
        println!(
            "  tick {}  anomaly {}  field {:+.3} ({})  {} / {}",
            tick,
            bar(r.anomaly.anomaly_score),
            r.field.composite_value,
            r.field.polarity.as_str(),
            r.cycles.lunar.phase.name(),
            r.cycles.gate.gate.name(),
        );
        println!("          bytes {}", hex(&r.visual));
    }
    if let Some(bio) = session.latest().and_then(|r| r.cycles.biorhythm) {
        println!(
            "\n  biorhythm day {}: physical {:+.2} emotional {:+.2} intellectual {:+.2} intuitive {:+.2}",
            bio.days_since_birth,
            bio.physical.value,
            bio.emotional.value,
            bio.intellectual.value,
            bio.intuitive.value,
        );
    }

    // ── Probe ────────────────────────────────────────────────────────────────
    println!("\n▶  PROBE\n");

    let probe = session.probe("Where should I walk today?", &Local::now())?;
    println!("  {} {}  ({})", probe.action.icon(), probe.action.label(), probe.action.description());
    println!("  bearing {} {}", probe.bearing_text, probe.compass_label);
    println!(
        "  confidence {}  anomaly {}  polarity {}",
        probe.confidence.as_str(),
        probe.entropy.anomaly_text,
        probe.polarity.as_str()
    );
    println!(
        "  shannon {}  χ² {}  serial {}  π dev {}",
        probe.entropy.shannon_text,
        probe.entropy.chi_squared_text,
        probe.entropy.serial_correlation_text,
        probe.entropy.pi_deviation_text
    );

    // ── Patterns ─────────────────────────────────────────────────────────────
    println!("\n▶  PATTERNS\n");

    let tz = FixedOffset::east_opt(0).ok_or("bad offset")?;
    let t0 = tz.with_ymd_and_hms(2024, 4, 1, 19, 0, 0).single().ok_or("bad time")?;
    let log = [
        (0, Sentiment::Positive, "work"),
        (48, Sentiment::Positive, "friends"),
        (96, Sentiment::Positive, "work"),
        (144, Sentiment::Positive, "work"),
        (145, Sentiment::Negative, "health"),
        (146, Sentiment::Neutral, "friends"),
    ];
    let events: Vec<LogEvent> = log
        .iter()
        .map(|(h, p, c)| LogEvent::new("entry", *p, t0 + Duration::hours(*h)).with_category(*c))
        .collect();
    let report = detect_patterns(&events);
    for p in &report.patterns {
        println!("  {:?}: {} {}", p.kind, p.label, bar(p.strength));
        println!("      {}", p.suggestion);
    }

    // ── Decision ─────────────────────────────────────────────────────────────
    println!("\n▶  DECISION\n");

    let a = DecisionOption {
        is_novel: true,
        meets_new: true,
        reversible: true,
        opens: true,
        gut: Gut::Excited,
        ..DecisionOption::new("Join the climbing club")
    };
    let b = DecisionOption { gut: Gut::Neutral, ..DecisionOption::new("Usual evening in") };
    let result = decide(&a, &b);
    for side in [&result.a, &result.b] {
        println!("  {:<24} {:>3}  {}", side.label, side.score, side.notes.join(", "));
    }
    println!("  verdict: {}", result.verdict);

    // ── Check-in ─────────────────────────────────────────────────────────────
    println!("\n▶  CHECK-IN\n");

    let today = Local::now().date_naive();
    let score = session.record_check_in(
        today,
        &DailyCheckIn { novelty: 7, weak_ties: 2, strong_ties: 1, noticed: true, ..DailyCheckIn::default() },
    );
    println!("  surface {}/100: {}", score.score, score.factors.join("; "));

    Ok(())
}
