//! Identifier module.
//!
//! Provides the `PlayerId` and `TeamId` types, interned string identifiers
//! for batters/bowlers and teams. Both use `Arc<str>` for memory efficiency
//! and fast comparison; the engine never interprets their contents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned string identifier for a player (batter or bowler).
///
/// Uses `Arc<str>` so cloning an id shares the underlying allocation.
/// The scoring engine treats ids as opaque; they typically hold whatever
/// key the surrounding application uses for the player record.
///
/// # Examples
///
/// ```rust
/// use crease::PlayerId;
///
/// let striker = PlayerId::from_str("rohit");
///
/// // Can be created from string slices or owned strings
/// let s2: PlayerId = "rohit".into();
/// let s3: PlayerId = String::from("rohit").into();
///
/// assert_eq!(striker, s2);
/// assert_eq!(striker, s3);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlayerId(Arc<str>);

impl Serialize for PlayerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PlayerId::from(s))
    }
}

impl PlayerId {
    /// Create a new `PlayerId` from a string slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crease::PlayerId;
    ///
    /// let id = PlayerId::from_str("kohli");
    /// assert_eq!(id.as_str(), "kohli");
    /// ```
    pub fn from_str(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `PlayerId`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interned string identifier for a team.
///
/// Same representation and conversions as [`PlayerId`], kept as a distinct
/// type so a team id cannot be handed to an API expecting a player.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TeamId(Arc<str>);

impl Serialize for TeamId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TeamId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TeamId::from(s))
    }
}

impl TeamId {
    /// Create a new `TeamId` from a string slice.
    pub fn from_str(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `TeamId`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for TeamId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
