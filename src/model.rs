//! Domain records as consumed by the presentation layer.
//!
//! These are the in-memory shapes the commands render. They carry typed
//! identifiers, enums instead of feed strings, and the derived standings
//! figures; how they are persisted is the concern of [`crate::storage`] and
//! the conversions live in [`crate::mapper`].

use crate::cli::types::{GameId, TeamCode};
use crate::error::CourtsideError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A EuroLeague club.
///
/// Created and updated only by sync; the favorite flag is the one field a
/// user can change, through an explicit partial update on the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub code: TeamCode,
    pub name: String,
    pub short_name: String,
    pub city: String,
    pub country: String,
    pub logo_url: String,
    pub founded: Option<u16>,
    pub coach: Option<String>,
    pub is_favorite: bool,
}

/// Lifecycle of a scheduled game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Live,
    Finished,
    Postponed,
    Cancelled,
}

impl GameStatus {
    /// Map a raw feed status to the enum. The feed uses several spellings
    /// per state and adds new ones occasionally, so unknown values fall
    /// back to `Scheduled` rather than failing the whole payload.
    pub fn from_feed_code(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "live" | "playing" => GameStatus::Live,
            "finished" | "closed" | "result" => GameStatus::Finished,
            "postponed" => GameStatus::Postponed,
            "cancelled" => GameStatus::Cancelled,
            _ => GameStatus::Scheduled,
        }
    }

    /// Whether the feed score fields are meaningful for this status.
    pub fn has_score(&self) -> bool {
        matches!(self, GameStatus::Live | GameStatus::Finished)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::Live => "live",
            GameStatus::Finished => "finished",
            GameStatus::Postponed => "postponed",
            GameStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for GameStatus {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(GameStatus::Scheduled),
            "live" => Ok(GameStatus::Live),
            "finished" => Ok(GameStatus::Finished),
            "postponed" => Ok(GameStatus::Postponed),
            "cancelled" => Ok(GameStatus::Cancelled),
            _ => Err(CourtsideError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Competition phase a game or standing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Regular,
    Playoffs,
    FinalFour,
}

impl Phase {
    /// Feed phase-type codes: `RS`, `PO`, `FF`. Anything else is treated as
    /// regular season.
    pub fn from_feed_code(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "PO" => Phase::Playoffs,
            "FF" | "F4" => Phase::FinalFour,
            _ => Phase::Regular,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Regular => "regular",
            Phase::Playoffs => "playoffs",
            Phase::FinalFour => "final-four",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Phase {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regular" | "rs" => Ok(Phase::Regular),
            "playoffs" | "po" => Ok(Phase::Playoffs),
            "final-four" | "ff" | "f4" => Ok(Phase::FinalFour),
            _ => Err(CourtsideError::InvalidPhase {
                value: s.to_string(),
            }),
        }
    }
}

/// A scheduled, live, or completed game.
///
/// Holds non-owning references to both clubs by code; the store does not
/// enforce them. Scores are `None` until the game is live or finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub home: TeamCode,
    pub away: TeamCode,
    pub tipoff: NaiveDateTime,
    pub venue: String,
    pub round: u32,
    pub status: GameStatus,
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub phase: Phase,
}

impl Game {
    /// `97-93`-style score line, if the game has one.
    pub fn score_line(&self) -> Option<String> {
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) => Some(format!("{}-{}", h, a)),
            _ => None,
        }
    }

    /// True when the given club plays in this game, home or away.
    pub fn involves(&self, code: &TeamCode) -> bool {
        self.home == *code || self.away == *code
    }
}

/// A club's line in the league table, keyed by club and phase.
///
/// Win percentage and point differential are derived from the counters, not
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team: TeamCode,
    pub phase: Phase,
    pub position: u32,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub points_for: u32,
    pub points_against: u32,
}

impl Standing {
    /// Wins over games played, as a percentage. Zero before any game has
    /// been played.
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }

    /// Points scored minus points conceded.
    pub fn point_difference(&self) -> i32 {
        self.points_for as i32 - self.points_against as i32
    }
}

/// Court positions as the roster feed codes them (1..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerPosition {
    Guard,
    Forward,
    Center,
}

impl PlayerPosition {
    pub fn from_feed_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PlayerPosition::Guard),
            2 => Some(PlayerPosition::Forward),
            3 => Some(PlayerPosition::Center),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerPosition::Guard => "guard",
            PlayerPosition::Forward => "forward",
            PlayerPosition::Center => "center",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlayerPosition {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guard" => Ok(PlayerPosition::Guard),
            "forward" => Ok(PlayerPosition::Forward),
            "center" => Ok(PlayerPosition::Center),
            _ => Err(CourtsideError::InvalidPosition {
                value: s.to_string(),
            }),
        }
    }
}

/// A roster member of a club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub team: TeamCode,
    pub code: String,
    pub name: String,
    pub jersey: Option<u8>,
    pub position: Option<PlayerPosition>,
    pub height_cm: Option<u16>,
    pub country: Option<String>,
    pub headshot_url: Option<String>,
}
