//! Error types for scoring.
//!
//! All errors that can occur while validating raw scoring input are
//! represented by the `ScoreError` enum. The transition function itself is
//! total: once an event has passed validation, scoring a ball cannot fail.

use thiserror::Error;

/// Errors that can occur while validating scoring input.
///
/// # Examples
///
/// ```rust
/// use crease::ScoreError;
///
/// let err = ScoreError::InvalidBallType("XYZ".to_string());
/// println!("{}", err); // "Unrecognized ball type: XYZ"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    /// A raw event carried a ball-type token outside the closed set
    /// `legal | WD | NB | W | B | LB`.
    ///
    /// The original store silently treated such events as ordinary legal
    /// deliveries; here they are rejected at the boundary instead.
    #[error("Unrecognized ball type: {0}")]
    InvalidBallType(String),

    /// A raw event carried a negative run count.
    #[error("Negative run count: {0}")]
    NegativeRuns(i64),

    /// A wire-format overs value was negative, out of range, or carried a
    /// fractional digit of 6 or more (the ball digit is always in [0,5]).
    #[error("Invalid overs value: {0}")]
    InvalidOvers(f64),

    /// An overs string did not match the `"completed.balls"` display form.
    #[error("Unparseable overs string: {0:?}")]
    UnparseableOvers(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScoreError::InvalidBallType("XYZ".to_string());
        assert!(err.to_string().contains("XYZ"));
    }

    #[test]
    fn test_negative_runs_display() {
        let err = ScoreError::NegativeRuns(-3);
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_invalid_overs_display() {
        let err = ScoreError::InvalidOvers(3.6);
        assert!(err.to_string().contains("3.6"));
    }
}
