//! Data models for the storage layer
//!
//! Rows are kept deliberately close to the SQL schema: string codes, string
//! enums, string timestamps. The conversions to domain records live in
//! [`crate::mapper`].

use serde::{Deserialize, Serialize};

/// Club row in the `teams` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRow {
    pub code: String,
    pub name: String,
    pub short_name: String,
    pub city: String,
    pub country: String,
    pub logo_url: String,
    pub founded: Option<u16>,
    pub coach: Option<String>,
    pub is_favorite: bool,
}

/// Game row in the `games` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRow {
    pub id: String,
    pub home_code: String,
    pub away_code: String,
    /// `%Y-%m-%dT%H:%M:%S`, sorts chronologically as text.
    pub tipoff: String,
    pub venue: String,
    pub round: u32,
    pub status: String,
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub phase: String,
}

/// League-table row in the `standings` table, keyed by (team, phase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_code: String,
    pub phase: String,
    pub position: u32,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub points_for: u32,
    pub points_against: u32,
}

/// Roster row in the `players` table, keyed by `{team_code}_{code}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: String,
    pub team_code: String,
    pub code: String,
    pub name: String,
    pub jersey: Option<u8>,
    pub position: Option<String>,
    pub height_cm: Option<u16>,
    pub country: Option<String>,
    pub headshot_url: Option<String>,
}
