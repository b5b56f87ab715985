//! Season codes in the feed's `E2025` notation.

use crate::error::{CourtsideError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season codes.
///
/// The feeds API addresses seasons as a competition letter followed by the
/// starting year, e.g. `E2025` for the 2025-26 EuroLeague season. A bare
/// year is accepted from the command line and normalized.
///
/// # Examples
///
/// ```rust
/// use courtside::SeasonCode;
///
/// let season: SeasonCode = "2025".parse().unwrap();
/// assert_eq!(season.as_str(), "E2025");
/// assert_eq!(season.year(), 2025);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonCode(String);

impl SeasonCode {
    /// Build a season code from a starting year.
    pub fn from_year(year: u16) -> Self {
        Self(format!("E{year}"))
    }

    /// Get the code as the feed expects it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Starting year of the season.
    pub fn year(&self) -> u16 {
        // Constructors guarantee the last four characters are digits.
        self.0
            .get(self.0.len().saturating_sub(4)..)
            .and_then(|year| year.parse().ok())
            .unwrap_or_default()
    }
}

impl Default for SeasonCode {
    fn default() -> Self {
        Self::from_year(2025)
    }
}

impl fmt::Display for SeasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonCode {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(year) = s.parse::<u16>() {
            return Ok(Self::from_year(year));
        }
        if !s.is_ascii() {
            return Err(CourtsideError::InvalidSeason {
                code: s.to_string(),
            });
        }
        let (prefix, year) = s.split_at(s.len().saturating_sub(4));
        if !prefix.is_empty()
            && prefix.chars().all(|c| c.is_ascii_alphabetic())
            && year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
        {
            Ok(Self(format!("{}{}", prefix.to_uppercase(), year)))
        } else {
            Err(CourtsideError::InvalidSeason {
                code: s.to_string(),
            })
        }
    }
}
