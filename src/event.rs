//! Ball event module.
//!
//! A `BallEvent` describes a single delivery: how many runs were completed
//! by running (or off the bat) and what kind of delivery it was. Events are
//! immutable inputs; the engine never modifies or stores them beyond the
//! log entry it emits.
//!
//! `RawBallEvent` is the untyped form as a wire or store delivers it, and
//! must be validated into a `BallEvent` before scoring.

use crate::error::ScoreError;
use crate::ident::PlayerId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of a delivery.
///
/// This is a closed enumeration; the wire tokens are the short codes a
/// scorebook uses (`legal`, `WD`, `NB`, `W`, `B`, `LB`). Each kind carries
/// its own attribution rules, exposed as predicates so the scoring steps
/// read as the rulebook does.
///
/// # Examples
///
/// ```rust
/// use crease::BallKind;
///
/// let wide: BallKind = "WD".parse().unwrap();
/// assert_eq!(wide, BallKind::Wide);
/// assert!(!wide.counts_toward_over());
/// assert!("XYZ".parse::<BallKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallKind {
    /// An ordinary legal delivery.
    #[serde(rename = "legal")]
    Legal,
    /// Wide: out of the batter's reach. One penalty run, no ball faced,
    /// does not count toward the over.
    #[serde(rename = "WD")]
    Wide,
    /// No-ball (e.g. overstepping). One penalty run, counts as a ball
    /// faced, does not count toward the over.
    #[serde(rename = "NB")]
    NoBall,
    /// A wicket fell on this delivery.
    #[serde(rename = "W")]
    Wicket,
    /// Bye: runs scored without bat contact, credited to the team only.
    #[serde(rename = "B")]
    Bye,
    /// Leg-bye: runs off the batter's body, credited to the team only.
    #[serde(rename = "LB")]
    LegBye,
}

impl BallKind {
    /// The wire/scorebook token for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            BallKind::Legal => "legal",
            BallKind::Wide => "WD",
            BallKind::NoBall => "NB",
            BallKind::Wicket => "W",
            BallKind::Bye => "B",
            BallKind::LegBye => "LB",
        }
    }

    /// Whether this delivery adds the one-run illegal-delivery penalty.
    pub fn has_penalty_run(self) -> bool {
        matches!(self, BallKind::Wide | BallKind::NoBall)
    }

    /// Whether the striker faces a ball on this delivery.
    ///
    /// Everything except a wide counts as a ball faced.
    pub fn counts_ball_faced(self) -> bool {
        !matches!(self, BallKind::Wide)
    }

    /// Whether the runs are credited to the striker's personal tally.
    ///
    /// Only runs off the bat count: ordinary deliveries and no-balls.
    pub fn credits_batter(self) -> bool {
        matches!(self, BallKind::Legal | BallKind::NoBall)
    }

    /// Whether the runs are charged against the bowler.
    ///
    /// Byes and leg-byes are team extras the bowler did not concede.
    pub fn charges_bowler(self) -> bool {
        !matches!(self, BallKind::Bye | BallKind::LegBye)
    }

    /// Whether this delivery counts toward the six-ball over.
    ///
    /// Wides and no-balls must be re-bowled and do not advance the over.
    pub fn counts_toward_over(self) -> bool {
        !matches!(self, BallKind::Wide | BallKind::NoBall)
    }
}

impl FromStr for BallKind {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legal" => Ok(BallKind::Legal),
            "WD" => Ok(BallKind::Wide),
            "NB" => Ok(BallKind::NoBall),
            "W" => Ok(BallKind::Wicket),
            "B" => Ok(BallKind::Bye),
            "LB" => Ok(BallKind::LegBye),
            other => Err(ScoreError::InvalidBallType(other.to_string())),
        }
    }
}

impl std::fmt::Display for BallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single delivery, as supplied by the scorer.
///
/// `runs` is the number of runs completed by running (or all-run/boundary
/// runs off the bat); the wide/no-ball penalty run is *not* included here,
/// the engine adds it. Typically 0–6 but not structurally bounded.
///
/// # Examples
///
/// ```rust
/// use crease::{BallEvent, BallKind};
///
/// let four = BallEvent::new(4, BallKind::Legal);
/// let wicket = BallEvent::new(0, BallKind::Wicket)
///     .with_incoming_batter("next-batter");
/// assert_eq!(four.runs, 4);
/// assert!(wicket.incoming_batter.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallEvent {
    /// Runs completed by running or scored off the bat.
    pub runs: u32,
    /// The kind of delivery.
    #[serde(rename = "type")]
    pub kind: BallKind,
    /// Identity of the batter replacing a dismissed striker.
    ///
    /// Only meaningful on a `Wicket` event. `None` keeps the striker
    /// identity in place as a stand-in for the incoming batter, matching
    /// callers that select the new batter after the ball is recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_batter: Option<PlayerId>,
}

impl BallEvent {
    /// Create a new event with no incoming-batter annotation.
    pub fn new(runs: u32, kind: BallKind) -> Self {
        Self {
            runs,
            kind,
            incoming_batter: None,
        }
    }

    /// Attach the identity of the batter replacing a dismissed striker.
    pub fn with_incoming_batter(mut self, batter: impl Into<PlayerId>) -> Self {
        self.incoming_batter = Some(batter.into());
        self
    }
}

/// An unvalidated event as the wire or store delivers it.
///
/// The original system applied events like these directly, silently
/// treating unknown type tokens as ordinary legal deliveries. Validation
/// into a [`BallEvent`] rejects them instead.
///
/// # Examples
///
/// ```rust
/// use crease::{BallEvent, RawBallEvent, ScoreError};
///
/// let ok = RawBallEvent { runs: 1, kind: "WD".to_string() };
/// assert!(BallEvent::try_from(ok).is_ok());
///
/// let bad = RawBallEvent { runs: -2, kind: "legal".to_string() };
/// assert_eq!(
///     BallEvent::try_from(bad),
///     Err(ScoreError::NegativeRuns(-2)),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBallEvent {
    /// Run count as delivered; may be negative in malformed input.
    pub runs: i64,
    /// Ball-type token as delivered; may be outside the closed set.
    #[serde(rename = "type")]
    pub kind: String,
}

impl TryFrom<RawBallEvent> for BallEvent {
    type Error = ScoreError;

    fn try_from(raw: RawBallEvent) -> Result<Self, Self::Error> {
        if raw.runs < 0 {
            return Err(ScoreError::NegativeRuns(raw.runs));
        }
        let kind: BallKind = raw.kind.parse()?;
        Ok(BallEvent::new(raw.runs as u32, kind))
    }
}
