//! Live score snapshot module.
//!
//! `LiveScore` is the mutable snapshot owned by a match record: team total,
//! wickets, overs, the two batters at the crease with their stat blocks,
//! the current bowler's figures, and the recent-balls feed. The engine
//! replaces it wholesale after each ball; the caller persists the
//! replacement. Field names serialize in the hosted store's camelCase wire
//! form.

use crate::event::BallEvent;
use crate::ident::{PlayerId, TeamId};
use crate::overs::OverCount;
use crate::processor::{process, BallOutcome};
use crate::token::BallToken;
use serde::{Deserialize, Serialize};

/// How many recent-ball tokens scoreboards display.
pub const RECENT_DISPLAY_WINDOW: usize = 6;

/// A batter's cumulative figures for the innings.
///
/// # Examples
///
/// ```rust
/// use crease::BatterStats;
///
/// let mut stats = BatterStats::default();
/// stats.face_ball();
/// stats.credit(4);
/// assert_eq!(stats.runs, 4);
/// assert_eq!(stats.balls, 1);
/// assert_eq!(stats.fours, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterStats {
    /// Runs scored off the bat.
    pub runs: u32,
    /// Balls faced (everything except wides).
    pub balls: u32,
    /// Boundary fours hit.
    pub fours: u32,
    /// Sixes hit.
    pub sixes: u32,
}

impl BatterStats {
    /// Count one ball faced.
    pub fn face_ball(&mut self) {
        self.balls += 1;
    }

    /// Credit runs scored off the bat, counting boundaries.
    ///
    /// The boundary counters increment only on exactly 4 or 6: four runs
    /// all-run and a boundary four both read the same on the scorecard.
    pub fn credit(&mut self, runs: u32) {
        self.runs += runs;
        if runs == 4 {
            self.fours += 1;
        }
        if runs == 6 {
            self.sixes += 1;
        }
    }
}

/// The current bowler's cumulative figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlerStats {
    /// Runs conceded (excludes byes and leg-byes).
    pub runs: u32,
    /// Overs bowled.
    pub overs: OverCount,
    /// Wickets taken.
    pub wickets: u8,
}

impl BowlerStats {
    /// Charge conceded runs against the bowler.
    pub fn concede(&mut self, runs: u32) {
        self.runs += runs;
    }

    /// Count one wicket taken.
    pub fn take_wicket(&mut self) {
        self.wickets += 1;
    }
}

/// The live score snapshot for the innings in progress.
///
/// Replaced wholesale after each ball: [`LiveScore::apply`] returns a new
/// snapshot and never mutates the one it was called on. The caller is
/// responsible for serializing calls per match (single writer) and for
/// atomically swapping in the replacement alongside the history append.
///
/// # Examples
///
/// ```rust
/// use crease::{BallEvent, BallKind, LiveScore};
///
/// let score = LiveScore::new("IND", "rohit", "gill");
/// let outcome = score.apply(&BallEvent::new(4, BallKind::Legal));
///
/// assert_eq!(outcome.score.runs, 4);
/// assert_eq!(outcome.score.overs.to_string(), "0.1");
/// assert_eq!(score.runs, 0); // the input snapshot is untouched
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveScore {
    /// The team currently batting.
    pub batting_team: TeamId,
    /// Team total for the innings.
    pub runs: u32,
    /// Batters dismissed. The ten-wicket bound is the caller's to enforce.
    pub wickets: u8,
    /// Overs bowled by the team.
    pub overs: OverCount,
    /// The batter on strike.
    pub striker: PlayerId,
    /// The batter at the non-striker's end.
    pub non_striker: PlayerId,
    /// The striker's figures.
    pub striker_stats: BatterStats,
    /// The non-striker's figures.
    pub non_striker_stats: BatterStats,
    /// The current bowler's figures.
    pub bowler_stats: BowlerStats,
    /// Append-only feed of display tokens, one per ball. Scoreboards show
    /// the last [`RECENT_DISPLAY_WINDOW`] via [`LiveScore::recent_display`].
    pub recent_balls: Vec<BallToken>,
}

impl LiveScore {
    /// An innings-start snapshot: all counters zero, empty feed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crease::LiveScore;
    ///
    /// let score = LiveScore::new("IND", "rohit", "gill");
    /// assert_eq!(score.runs, 0);
    /// assert_eq!(score.overs.to_string(), "0.0");
    /// assert!(score.recent_balls.is_empty());
    /// ```
    pub fn new(
        batting_team: impl Into<TeamId>,
        striker: impl Into<PlayerId>,
        non_striker: impl Into<PlayerId>,
    ) -> Self {
        Self {
            batting_team: batting_team.into(),
            runs: 0,
            wickets: 0,
            overs: OverCount::default(),
            striker: striker.into(),
            non_striker: non_striker.into(),
            striker_stats: BatterStats::default(),
            non_striker_stats: BatterStats::default(),
            bowler_stats: BowlerStats::default(),
            recent_balls: Vec::new(),
        }
    }

    /// Score one ball. Method-form convenience over [`process`].
    pub fn apply(&self, event: &BallEvent) -> BallOutcome {
        process(self, event)
    }

    /// Swap which batter is on strike, identities and stat blocks together.
    ///
    /// Triggered by an odd number of runs run, and by the change of ends at
    /// an over boundary. Both triggering on the same ball nets out.
    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
        std::mem::swap(&mut self.striker_stats, &mut self.non_striker_stats);
    }

    /// The last six balls of the feed, oldest first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crease::{BallEvent, BallKind, LiveScore};
    ///
    /// let mut score = LiveScore::new("IND", "rohit", "gill");
    /// for _ in 0..8 {
    ///     score = score.apply(&BallEvent::new(1, BallKind::Legal)).score;
    /// }
    /// assert_eq!(score.recent_balls.len(), 8);
    /// assert_eq!(score.recent_display().len(), 6);
    /// ```
    pub fn recent_display(&self) -> &[BallToken] {
        let start = self.recent_balls.len().saturating_sub(RECENT_DISPLAY_WINDOW);
        &self.recent_balls[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot_is_empty() {
        let score = LiveScore::new("IND", "rohit", "gill");
        assert_eq!(score.runs, 0);
        assert_eq!(score.wickets, 0);
        assert_eq!(score.overs, OverCount::default());
        assert_eq!(score.striker_stats, BatterStats::default());
        assert_eq!(score.bowler_stats.overs.total_balls(), 0);
        assert!(score.recent_balls.is_empty());
    }

    #[test]
    fn test_batter_stats_boundary_counting() {
        let mut stats = BatterStats::default();
        stats.credit(4);
        stats.credit(6);
        stats.credit(3);
        assert_eq!(stats.runs, 13);
        assert_eq!(stats.fours, 1);
        assert_eq!(stats.sixes, 1);
    }

    #[test]
    fn test_swap_strike_moves_stats_with_identity() {
        let mut score = LiveScore::new("IND", "rohit", "gill");
        score.striker_stats.credit(4);
        score.swap_strike();
        assert_eq!(score.striker.as_str(), "gill");
        assert_eq!(score.striker_stats, BatterStats::default());
        assert_eq!(score.non_striker_stats.runs, 4);
        score.swap_strike();
        assert_eq!(score.striker.as_str(), "rohit");
        assert_eq!(score.striker_stats.runs, 4);
    }

    #[test]
    fn test_recent_display_truncates_to_window() {
        let mut score = LiveScore::new("IND", "rohit", "gill");
        assert!(score.recent_display().is_empty());
        for n in 0..9 {
            score.recent_balls.push(BallToken::Runs(n));
        }
        let window = score.recent_display();
        assert_eq!(window.len(), RECENT_DISPLAY_WINDOW);
        assert_eq!(window[0], BallToken::Runs(3));
        assert_eq!(window[5], BallToken::Runs(8));
    }

    #[test]
    fn test_serde_uses_store_field_names() {
        let score = LiveScore::new("IND", "rohit", "gill");
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["battingTeam"], "IND");
        assert!(json.get("strikerStats").is_some());
        assert!(json.get("nonStrikerStats").is_some());
        assert!(json.get("bowlerStats").is_some());
        assert!(json.get("recentBalls").is_some());
        let back: LiveScore = serde_json::from_value(json).unwrap();
        assert_eq!(back, score);
    }
}
