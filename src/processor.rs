//! Ball processor module.
//!
//! The single entry point for scoring: [`process`] maps the current live
//! score and one ball event to the replacement snapshot and a history
//! entry. Pure and deterministic: the input snapshot is cloned, never
//! mutated, and the same inputs always produce the same outputs, so the
//! function is safe to call from anywhere as long as the caller serializes
//! balls per match (single writer).

use crate::event::{BallEvent, BallKind};
use crate::log::{DismissedBatter, LogEntry};
use crate::score::{BatterStats, LiveScore};
use crate::token::BallToken;
use serde::{Deserialize, Serialize};

/// The result of scoring one ball: the replacement snapshot and the
/// history entry to append.
///
/// The caller must swap in `score` and append `entry` in one transaction;
/// the engine itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallOutcome {
    /// The replacement live score.
    pub score: LiveScore,
    /// The history entry for this ball.
    pub entry: LogEntry,
}

/// Score one ball.
///
/// The steps run in a fixed order; later steps read the mutations of
/// earlier ones (the dismissal capture, for instance, includes the ball
/// faced on the dismissal itself).
///
/// 1. Team total: the runs plus the one-run wide/no-ball penalty.
/// 2. Ball faced by the striker (everything except a wide).
/// 3. Batter credit: off-the-bat runs only, on legal deliveries and
///    no-balls, with boundary counting at exactly 4 and 6.
/// 4. Bowler's conceded runs: the penalty-inclusive total, except byes
///    and leg-byes.
/// 5. Over progression for everything but wides and no-balls; the sixth
///    legal ball rolls both over counters and changes ends.
/// 6. Wicket: increment the fall counters, capture the dismissed figures
///    for the log, reset the striker's block for the incoming batter.
/// 7. Strike rotation on an odd run count, independent of the end-of-over
///    rotation (both on one ball is two swaps and nets out).
/// 8. Append the display token to the recent-balls feed.
/// 9. Emit the history entry with the post-update overs.
///
/// # Examples
///
/// ```rust
/// use crease::{process, BallEvent, BallKind, LiveScore};
///
/// let score = LiveScore::new("IND", "rohit", "gill");
/// let outcome = process(&score, &BallEvent::new(1, BallKind::Wide));
///
/// // 1 run completed plus the wide penalty; no ball of the over used.
/// assert_eq!(outcome.score.runs, 2);
/// assert_eq!(outcome.score.overs.to_string(), "0.0");
/// ```
pub fn process(score: &LiveScore, event: &BallEvent) -> BallOutcome {
    let mut next = score.clone();
    let kind = event.kind;

    // 1. Team total, penalty included.
    let total_runs = event.runs + u32::from(kind.has_penalty_run());
    next.runs += total_runs;

    // 2. Ball faced.
    if kind.counts_ball_faced() {
        next.striker_stats.face_ball();
    }

    // 3. Batter credit: the off-the-bat runs, not the penalty total.
    if kind.credits_batter() {
        next.striker_stats.credit(event.runs);
    }

    // 4. Bowler's conceded runs.
    if kind.charges_bowler() {
        next.bowler_stats.concede(total_runs);
    }

    // 5. Over progression; the bowler's counter decides the rollover.
    if kind.counts_toward_over() {
        let (bowler_overs, over_done) = next.bowler_stats.overs.advance();
        next.bowler_stats.overs = bowler_overs;
        if over_done {
            next.overs = next.overs.next_over();
            next.swap_strike();
        } else {
            let (team_overs, _) = next.overs.advance();
            next.overs = team_overs;
        }
    }

    // 6. Wicket.
    let mut dismissed = None;
    if kind == BallKind::Wicket {
        next.wickets += 1;
        next.bowler_stats.take_wicket();
        dismissed = Some(DismissedBatter {
            batter: next.striker.clone(),
            stats: next.striker_stats,
        });
        next.striker_stats = BatterStats::default();
        if let Some(incoming) = &event.incoming_batter {
            next.striker = incoming.clone();
        }
    }

    // 7. Odd runs rotate the strike.
    if event.runs % 2 == 1 {
        next.swap_strike();
    }

    // 8. Display token.
    next.recent_balls.push(BallToken::for_ball(kind, event.runs));

    // 9. History entry carries the post-update overs.
    let entry = LogEntry {
        event: event.clone(),
        overs: next.overs,
        dismissed,
    };

    BallOutcome { score: next, entry }
}
