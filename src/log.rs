//! Match history log entries.
//!
//! Every scored ball emits one `LogEntry`: the original event augmented
//! with the overs count at which it occurred, plus the dismissed batter's
//! final figures when a wicket fell. History is append-only and owned by
//! the caller; entries are never mutated after creation.

use crate::event::BallEvent;
use crate::ident::PlayerId;
use crate::overs::OverCount;
use crate::score::BatterStats;
use serde::{Deserialize, Serialize};

/// The identity and final figures of a dismissed batter.
///
/// Captured before the striker's stat block is reset for the incoming
/// batter, so the caller can archive the completed innings; the live
/// snapshot alone no longer carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissedBatter {
    /// Who was dismissed.
    pub batter: PlayerId,
    /// Their figures at the moment of dismissal.
    pub stats: BatterStats,
}

/// One ball of the immutable match history.
///
/// Serializes as the original event's fields with the post-update `overs`
/// alongside, matching the store's history records.
///
/// # Examples
///
/// ```rust
/// use crease::{BallEvent, BallKind, LiveScore};
///
/// let score = LiveScore::new("IND", "rohit", "gill");
/// let outcome = score.apply(&BallEvent::new(4, BallKind::Legal));
///
/// assert_eq!(outcome.entry.event.runs, 4);
/// assert_eq!(outcome.entry.overs.to_string(), "0.1");
/// assert!(outcome.entry.dismissed.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The event exactly as supplied.
    #[serde(flatten)]
    pub event: BallEvent,
    /// The overs count after this ball was applied.
    pub overs: OverCount,
    /// The dismissed batter's final figures, when this ball took a wicket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissed: Option<DismissedBatter>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::BallKind;

    #[test]
    fn test_entry_serializes_as_augmented_event() {
        let entry = LogEntry {
            event: BallEvent::new(4, BallKind::Legal),
            overs: OverCount::new(0, 1),
            dismissed: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["runs"], 4);
        assert_eq!(json["type"], "legal");
        assert_eq!(json["overs"], 0.1);
        assert!(json.get("dismissed").is_none());
    }

    #[test]
    fn test_dismissal_round_trips() {
        let entry = LogEntry {
            event: BallEvent::new(0, BallKind::Wicket),
            overs: OverCount::new(3, 4),
            dismissed: Some(DismissedBatter {
                batter: "rohit".into(),
                stats: BatterStats {
                    runs: 37,
                    balls: 25,
                    fours: 5,
                    sixes: 1,
                },
            }),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
