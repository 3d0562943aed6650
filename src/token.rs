//! Recent-ball display tokens.
//!
//! Each delivery appends one short token to the live score's recent-balls
//! feed: the run count as a plain number, or `WD` / `NB` / `W` for wides,
//! no-balls, and wickets. Scoreboards render the last six.

use crate::event::BallKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A display token for one ball of the recent-balls feed.
///
/// Token precedence: a wicket or a wide always shows as `W` / `WD`, since
/// neither can carry boundary runs off the bat. For deliveries the bat can
/// reach (legal, no-ball, byes), a run count of exactly 4 or 6 shows as the
/// boundary number; a non-boundary no-ball shows as `NB`; anything else
/// shows the plain run count.
///
/// # Examples
///
/// ```rust
/// use crease::{BallKind, BallToken};
///
/// assert_eq!(BallToken::for_ball(BallKind::Legal, 4).to_string(), "4");
/// assert_eq!(BallToken::for_ball(BallKind::Wide, 4).to_string(), "WD");
/// assert_eq!(BallToken::for_ball(BallKind::NoBall, 6).to_string(), "6");
/// assert_eq!(BallToken::for_ball(BallKind::NoBall, 1).to_string(), "NB");
/// assert_eq!(BallToken::for_ball(BallKind::Wicket, 0).to_string(), "W");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallToken {
    /// Plain run count (includes the boundary numbers 4 and 6).
    Runs(u32),
    /// Wide.
    Wide,
    /// No-ball without boundary runs off the bat.
    NoBall,
    /// Wicket.
    Wicket,
}

impl BallToken {
    /// Compute the token for a delivery.
    pub fn for_ball(kind: BallKind, runs: u32) -> Self {
        match kind {
            BallKind::Wicket => BallToken::Wicket,
            BallKind::Wide => BallToken::Wide,
            BallKind::NoBall if runs == 4 || runs == 6 => BallToken::Runs(runs),
            BallKind::NoBall => BallToken::NoBall,
            BallKind::Legal | BallKind::Bye | BallKind::LegBye => BallToken::Runs(runs),
        }
    }
}

impl fmt::Display for BallToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallToken::Runs(n) => write!(f, "{n}"),
            BallToken::Wide => write!(f, "WD"),
            BallToken::NoBall => write!(f, "NB"),
            BallToken::Wicket => write!(f, "W"),
        }
    }
}

impl Serialize for BallToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BallToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "WD" => Ok(BallToken::Wide),
            "NB" => Ok(BallToken::NoBall),
            "W" => Ok(BallToken::Wicket),
            other => other
                .parse::<u32>()
                .map(BallToken::Runs)
                .map_err(|_| serde::de::Error::custom(format!("unknown ball token: {other:?}"))),
        }
    }
}
