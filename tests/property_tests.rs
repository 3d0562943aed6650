use crease::*;
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = BallKind> {
    prop_oneof![
        Just(BallKind::Legal),
        Just(BallKind::Wide),
        Just(BallKind::NoBall),
        Just(BallKind::Wicket),
        Just(BallKind::Bye),
        Just(BallKind::LegBye),
    ]
}

fn any_event() -> impl Strategy<Value = BallEvent> {
    (0u32..=6, any_kind()).prop_map(|(runs, kind)| BallEvent::new(runs, kind))
}

fn score_all(events: &[BallEvent]) -> LiveScore {
    let mut score = LiveScore::new("IND", "a", "b");
    for event in events {
        score = score.apply(event).score;
    }
    score
}

proptest! {
    /// Team runs always equal the event totals: runs plus one penalty per
    /// wide or no-ball.
    #[test]
    fn team_runs_match_event_totals(events in prop::collection::vec(any_event(), 0..80)) {
        let expected: u32 = events
            .iter()
            .map(|e| e.runs + u32::from(e.kind.has_penalty_run()))
            .sum();
        prop_assert_eq!(score_all(&events).runs, expected);
    }

    /// Wickets equal the number of wicket events, whatever else happened.
    #[test]
    fn wickets_count_wicket_events(events in prop::collection::vec(any_event(), 0..80)) {
        let expected = events.iter().filter(|e| e.kind == BallKind::Wicket).count();
        prop_assert_eq!(usize::from(score_all(&events).wickets), expected);
    }

    /// Every event appends exactly one feed token.
    #[test]
    fn feed_length_equals_event_count(events in prop::collection::vec(any_event(), 0..80)) {
        prop_assert_eq!(score_all(&events).recent_balls.len(), events.len());
    }

    /// Legal balls bowled equal the events that count toward the over, the
    /// ball digit never reaches 6, and team and bowler counters stay in
    /// lockstep when one bowler bowls the whole spell.
    #[test]
    fn over_counters_track_legal_balls(events in prop::collection::vec(any_event(), 0..80)) {
        let legal = events.iter().filter(|e| e.kind.counts_toward_over()).count() as u32;
        let score = score_all(&events);
        prop_assert_eq!(score.overs.total_balls(), legal);
        prop_assert_eq!(score.bowler_stats.overs, score.overs);
        prop_assert!(score.overs.balls() <= 5);
    }

    /// Balls faced by the two blocks at the crease plus those archived
    /// with dismissals account for every non-wide delivery: a block is
    /// only ever zeroed after its figures were captured into a log entry.
    #[test]
    fn balls_faced_account_for_non_wides(events in prop::collection::vec(any_event(), 0..80)) {
        let mut score = LiveScore::new("IND", "a", "b");
        let mut archived = 0u32;
        for event in &events {
            let outcome = score.apply(event);
            if let Some(dismissed) = &outcome.entry.dismissed {
                archived += dismissed.stats.balls;
            }
            score = outcome.score;
        }
        let faced = events.iter().filter(|e| e.kind.counts_ball_faced()).count() as u32;
        prop_assert_eq!(
            score.striker_stats.balls + score.non_striker_stats.balls + archived,
            faced
        );
    }

    /// The bowler concedes exactly the penalty-inclusive totals of the
    /// deliveries that charge the bowler.
    #[test]
    fn bowler_runs_match_charged_totals(events in prop::collection::vec(any_event(), 0..80)) {
        let expected: u32 = events
            .iter()
            .filter(|e| e.kind.charges_bowler())
            .map(|e| e.runs + u32::from(e.kind.has_penalty_run()))
            .sum();
        prop_assert_eq!(score_all(&events).bowler_stats.runs, expected);
    }

    /// Without incoming-batter annotations the two identities at the
    /// crease are always the two openers, in some order.
    #[test]
    fn crease_identities_are_preserved(events in prop::collection::vec(any_event(), 0..80)) {
        let score = score_all(&events);
        let mut at_crease = [score.striker.as_str(), score.non_striker.as_str()];
        at_crease.sort_unstable();
        prop_assert_eq!(at_crease, ["a", "b"]);
    }

    /// A single legal delivery rotates the strike exactly when the run
    /// count is odd (no over boundary involved).
    #[test]
    fn single_legal_ball_swap_parity(runs in 0u32..=6) {
        let score = LiveScore::new("IND", "a", "b");
        let outcome = score.apply(&BallEvent::new(runs, BallKind::Legal));
        if runs % 2 == 1 {
            prop_assert_eq!(outcome.score.striker.as_str(), "b");
        } else {
            prop_assert_eq!(outcome.score.striker.as_str(), "a");
        }
    }

    /// The wire decimal encoding round-trips for every representable
    /// over count.
    #[test]
    fn over_count_wire_round_trip(completed in 0u16..1000, balls in 0u8..=5) {
        let overs = OverCount::new(completed, balls);
        prop_assert_eq!(OverCount::from_wire(overs.to_wire()).unwrap(), overs);
        let json = serde_json::to_string(&overs).unwrap();
        let back: OverCount = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, overs);
    }

    /// Scoring is deterministic and never mutates its input.
    #[test]
    fn process_is_pure(events in prop::collection::vec(any_event(), 1..20)) {
        let score = score_all(&events[..events.len() - 1]);
        let last = &events[events.len() - 1];
        let before = score.clone();
        let first = score.apply(last);
        let second = score.apply(last);
        prop_assert_eq!(&score, &before);
        prop_assert_eq!(first, second);
    }
}
