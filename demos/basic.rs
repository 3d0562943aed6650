//! Basic example: scoring a handful of deliveries
//!
//! This example demonstrates:
//! - Starting an innings snapshot
//! - Validating raw store events at the boundary
//! - Applying balls and reading the replacement snapshot

use crease::*;

fn main() -> Result<(), ScoreError> {
    // Innings start: all counters zero, openers at the crease
    let mut score = LiveScore::new("IND", "rohit", "gill");

    // Events as the store would deliver them
    let raw_balls = vec![
        RawBallEvent { runs: 0, kind: "legal".to_string() },
        RawBallEvent { runs: 4, kind: "legal".to_string() },
        RawBallEvent { runs: 1, kind: "WD".to_string() },
        RawBallEvent { runs: 1, kind: "legal".to_string() },
        RawBallEvent { runs: 0, kind: "W".to_string() },
    ];

    println!("Scoring {} deliveries:\n", raw_balls.len());
    for raw in raw_balls {
        // Unknown type tokens and negative runs fail here, not mid-score
        let event = BallEvent::try_from(raw)?;
        let outcome = score.apply(&event);

        println!(
            "  {} ov  {:>2}/{}  ball: {} {}",
            outcome.entry.overs,
            outcome.score.runs,
            outcome.score.wickets,
            event.runs,
            event.kind,
        );
        if let Some(dismissed) = &outcome.entry.dismissed {
            println!(
                "       out: {} ({} off {})",
                dismissed.batter, dismissed.stats.runs, dismissed.stats.balls
            );
        }
        score = outcome.score;
    }

    println!("\n=== Scorecard ===");
    println!(
        "{}: {}/{} in {} overs",
        score.batting_team, score.runs, score.wickets, score.overs
    );
    println!(
        "on strike: {} ({} off {})",
        score.striker, score.striker_stats.runs, score.striker_stats.balls
    );
    println!(
        "at the other end: {} ({} off {})",
        score.non_striker, score.non_striker_stats.runs, score.non_striker_stats.balls
    );

    let feed: Vec<String> = score.recent_display().iter().map(|t| t.to_string()).collect();
    println!("recent: {}", feed.join(" "));

    Ok(())
}
