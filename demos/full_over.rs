//! Full over example: over completion and strike rotation
//!
//! This example demonstrates:
//! - The six-ball over cycle and the end-of-over change of ends
//! - Wides and no-balls not consuming a ball of the over
//! - The history entries the caller would append per ball

use crease::*;

fn main() {
    let mut score = LiveScore::new("AUS", "head", "smith");
    let mut history: Vec<LogEntry> = Vec::new();

    let over = vec![
        BallEvent::new(0, BallKind::Legal),
        BallEvent::new(2, BallKind::Legal),
        BallEvent::new(0, BallKind::Wide), // re-bowled
        BallEvent::new(6, BallKind::NoBall), // free runs, re-bowled
        BallEvent::new(1, BallKind::Legal),
        BallEvent::new(0, BallKind::LegBye),
        BallEvent::new(4, BallKind::Legal),
        BallEvent::new(1, BallKind::Legal), // sixth legal ball
    ];

    for event in &over {
        println!(
            "striker {:<6} faces: {} {}",
            score.striker.to_string(),
            event.runs,
            event.kind
        );
        let outcome = score.apply(event);
        history.push(outcome.entry);
        score = outcome.score;
    }

    // Eight deliveries, six of them legal: exactly one over bowled.
    println!("\nafter the over: {}/{} in {} overs", score.runs, score.wickets, score.overs);
    println!(
        "bowler: {}-{} in {} overs",
        score.bowler_stats.wickets, score.bowler_stats.runs, score.bowler_stats.overs
    );

    // The single off the last ball and the change of ends cancel out.
    println!("on strike for the next over: {}", score.striker);

    println!("\nhistory ({} entries):", history.len());
    for entry in &history {
        println!("  {}", serde_json::to_string(entry).expect("log entries serialize"));
    }
}
