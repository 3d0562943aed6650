//! # crease - Deterministic Ball-by-Ball Cricket Scoring Engine
//!
//! A scoring engine for cricket matches that provides:
//! - **Deterministic** scoring (same input → same output)
//! - **Pure** state transitions (the input snapshot is never mutated)
//! - **Complete attribution** (team, batter, bowler, and over accounting
//!   per delivery kind)
//! - **History-friendly** output (one immutable log entry per ball)
//!
//! ## Core Concepts
//!
//! ### Scoring Pipeline
//!
//! Each ball flows through a single transition:
//!
//! ```text
//! [LiveScore] + [BallEvent] → [LiveScore'] + [LogEntry]
//! ```
//!
//! 1. **LiveScore** is the snapshot the match record owns
//! 2. **BallEvent** describes one delivery (runs + kind)
//! 3. The caller atomically swaps in the new snapshot and appends the
//!    log entry; the engine performs no I/O
//!
//! ### Key Features
//!
//! - **Extras handling**: wides and no-balls add the penalty run and do
//!   not consume a ball of the over; byes and leg-byes bypass batter and
//!   bowler tallies
//! - **Strike rotation**: odd runs and over boundaries change ends,
//!   independently (both on one ball nets out)
//! - **Integer over counting**: overs are a `(completed, balls)` pair
//!   internally; the base-6 "floor.ball" decimal exists only at the
//!   display and serde boundaries
//! - **Hardened input boundary**: unrecognized ball-type tokens and
//!   negative run counts are rejected, never silently scored
//!
//! ## Example
//!
//! ```rust
//! use crease::{BallEvent, BallKind, LiveScore};
//!
//! let score = LiveScore::new("IND", "rohit", "gill");
//!
//! // A boundary four off a legal delivery.
//! let outcome = score.apply(&BallEvent::new(4, BallKind::Legal));
//! assert_eq!(outcome.score.runs, 4);
//! assert_eq!(outcome.score.overs.to_string(), "0.1");
//! assert_eq!(outcome.score.striker_stats.fours, 1);
//!
//! // A wide: one penalty run, the over does not advance.
//! let outcome = outcome.score.apply(&BallEvent::new(0, BallKind::Wide));
//! assert_eq!(outcome.score.runs, 5);
//! assert_eq!(outcome.score.overs.to_string(), "0.1");
//! ```
//!
//! ## Modules
//!
//! - [`ident`] - Player and team identifier types
//! - [`overs`] - Integer-pair over counting
//! - [`event`] - Ball events and the raw-input validation boundary
//! - [`token`] - Recent-ball display tokens
//! - [`score`] - The live score snapshot and stat blocks
//! - [`log`] - Immutable history entries
//! - [`processor`] - The ball-scoring transition
//! - [`error`] - Error types

pub mod error;
pub mod event;
pub mod ident;
pub mod log;
pub mod overs;
pub mod processor;
pub mod score;
pub mod token;

// Re-export main types for convenience
pub use error::ScoreError;
pub use event::{BallEvent, BallKind, RawBallEvent};
pub use ident::{PlayerId, TeamId};
pub use log::{DismissedBatter, LogEntry};
pub use overs::OverCount;
pub use processor::{process, BallOutcome};
pub use score::{BatterStats, BowlerStats, LiveScore, RECENT_DISPLAY_WINDOW};
pub use token::BallToken;
