//! Identifier types for EuroLeague entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for EuroLeague club codes (three-letter TLA, e.g. `MAD`).
///
/// Club codes are the primary identity for teams and the reference used by
/// games and standings; keeping them behind a newtype prevents mixing them
/// up with other strings.
///
/// # Examples
///
/// ```rust
/// use courtside::TeamCode;
///
/// let code: TeamCode = "mad".parse().unwrap();
/// assert_eq!(code.as_str(), "MAD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamCode(pub String);

impl TeamCode {
    /// Create a new TeamCode from a feed-provided value, as-is.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the underlying code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamCode {
    type Err = std::convert::Infallible;

    /// User input is normalized to the feed's uppercase convention.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().to_uppercase()))
    }
}

/// Type-safe wrapper for game identifiers as issued by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
