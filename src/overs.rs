//! Over counting module.
//!
//! Provides the `OverCount` type, an integer pair of completed overs and
//! legal balls bowled in the current over. The hosted-store wire format
//! encodes overs as a base-6 "floor.ball" decimal (e.g. `12.4` = 12 overs
//! and 4 balls); that encoding only exists at the display and serde
//! boundaries. All arithmetic happens on the integer pair, so repeated
//! ball-by-ball increments cannot accumulate floating-point drift.

use crate::error::ScoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Completed overs plus legal balls bowled in the current over.
///
/// The ball count is a 6-state cycle: counting the sixth legal ball rolls
/// it back to 0 and increments the completed-over count. The fractional
/// digit of the wire encoding therefore never reaches 6.
///
/// # Examples
///
/// ```rust
/// use crease::OverCount;
///
/// let overs = OverCount::new(4, 5);
/// assert_eq!(overs.to_string(), "4.5");
///
/// // The sixth ball carries into a new over.
/// let (overs, rolled) = overs.advance();
/// assert!(rolled);
/// assert_eq!(overs, OverCount::new(5, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverCount {
    /// Fully completed overs.
    completed: u16,
    /// Legal balls bowled in the current over, always in [0,5].
    balls: u8,
}

impl OverCount {
    /// Create a new `OverCount`.
    ///
    /// # Panics
    ///
    /// Panics if `balls` is 6 or more; a full over is represented by
    /// incrementing `completed`, never by a ball count of 6.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crease::OverCount;
    ///
    /// let overs = OverCount::new(12, 4);
    /// assert_eq!(overs.completed(), 12);
    /// assert_eq!(overs.balls(), 4);
    /// ```
    pub fn new(completed: u16, balls: u8) -> Self {
        assert!(balls <= 5, "ball count must be in [0,5], got {balls}");
        Self { completed, balls }
    }

    /// Fully completed overs.
    pub fn completed(self) -> u16 {
        self.completed
    }

    /// Legal balls bowled in the current over, in [0,5].
    pub fn balls(self) -> u8 {
        self.balls
    }

    /// Total legal balls bowled, across all overs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crease::OverCount;
    ///
    /// assert_eq!(OverCount::new(2, 3).total_balls(), 15);
    /// ```
    pub fn total_balls(self) -> u32 {
        u32::from(self.completed) * 6 + u32::from(self.balls)
    }

    /// Count one legal ball.
    ///
    /// Returns the new count and whether this ball completed the over.
    /// On the sixth ball the count rolls to the next over: the ball digit
    /// resets to 0 and the completed-over count increments.
    pub fn advance(self) -> (Self, bool) {
        if self.balls == 5 {
            (self.next_over(), true)
        } else {
            (
                Self {
                    completed: self.completed,
                    balls: self.balls + 1,
                },
                false,
            )
        }
    }

    /// The start of the following over (`completed + 1`, ball digit 0).
    pub fn next_over(self) -> Self {
        Self {
            completed: self.completed + 1,
            balls: 0,
        }
    }

    /// Decode from the base-6 decimal wire form (`completed + balls/10`).
    ///
    /// Fails with [`ScoreError::InvalidOvers`] when the value is negative,
    /// too large, or its fractional digit is not in [0,5].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crease::OverCount;
    ///
    /// let overs = OverCount::from_wire(12.4).unwrap();
    /// assert_eq!(overs, OverCount::new(12, 4));
    ///
    /// assert!(OverCount::from_wire(3.6).is_err());
    /// assert!(OverCount::from_wire(-1.0).is_err());
    /// ```
    pub fn from_wire(value: f64) -> Result<Self, ScoreError> {
        if !value.is_finite() || value < 0.0 || value >= f64::from(u16::MAX) {
            return Err(ScoreError::InvalidOvers(value));
        }
        let completed = value.trunc() as u16;
        let digit = ((value - value.trunc()) * 10.0).round() as u8;
        if digit > 5 {
            return Err(ScoreError::InvalidOvers(value));
        }
        Ok(Self {
            completed,
            balls: digit,
        })
    }

    /// Encode to the base-6 decimal wire form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crease::OverCount;
    ///
    /// assert_eq!(OverCount::new(12, 4).to_wire(), 12.4);
    /// ```
    pub fn to_wire(self) -> f64 {
        f64::from(self.completed) + f64::from(self.balls) / 10.0
    }
}

impl fmt::Display for OverCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.completed, self.balls)
    }
}

impl FromStr for OverCount {
    type Err = ScoreError;

    /// Parse the `"completed.balls"` display form.
    ///
    /// A bare integer (`"12"`) is accepted as a whole number of overs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScoreError::UnparseableOvers(s.to_string());
        let (whole, digit) = match s.split_once('.') {
            Some((whole, frac)) => {
                if frac.len() != 1 {
                    return Err(invalid());
                }
                (whole, frac.parse::<u8>().map_err(|_| invalid())?)
            }
            None => (s, 0),
        };
        let completed = whole.parse::<u16>().map_err(|_| invalid())?;
        if digit > 5 {
            return Err(invalid());
        }
        Ok(Self {
            completed,
            balls: digit,
        })
    }
}

impl Serialize for OverCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OverCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        OverCount::from_wire(value).map_err(serde::de::Error::custom)
    }
}
