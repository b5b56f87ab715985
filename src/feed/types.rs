//! Transport records as delivered by the EuroLeague feeds API.
//!
//! Field names follow the wire casing via `serde(rename)`. Only the fields
//! the mapper consumes are modeled; everything else in the payload is
//! ignored during deserialization. `Default` is derived so test doubles can
//! build payloads with struct-update syntax.

use serde::Deserialize;

/// Envelope of the games endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Vec<GameDto>,
}

/// One game as scheduled or played.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameDto {
    pub id: String,
    #[serde(rename = "phaseType", default)]
    pub phase_type: PhaseTypeDto,
    #[serde(default)]
    pub round: RoundDto,
    /// ISO timestamp, e.g. `2025-09-30T18:00:00.000Z`.
    pub date: String,
    pub status: String,
    /// Minute counter while live; transport-only, dropped by the mapper.
    #[serde(default)]
    pub minute: Option<u32>,
    pub home: GameTeamDto,
    pub away: GameTeamDto,
    #[serde(default)]
    pub venue: Option<VenueDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhaseTypeDto {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundDto {
    #[serde(default)]
    pub round: u32,
    #[serde(default)]
    pub name: String,
}

/// Club as embedded in a game, including its current score.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameTeamDto {
    pub code: String,
    pub name: String,
    #[serde(rename = "abbreviatedName", default)]
    pub abbreviated_name: Option<String>,
    /// Zero for games that have not started.
    #[serde(default)]
    pub score: u32,
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Option<ImageUrlsDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageUrlsDto {
    #[serde(default)]
    pub crest: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Envelope of the standings endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub data: Vec<StandingDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingDto {
    pub club: ClubDto,
    pub position: u32,
    #[serde(rename = "gamesPlayed")]
    pub games_played: u32,
    #[serde(rename = "gamesWon")]
    pub games_won: u32,
    #[serde(rename = "gamesLost")]
    pub games_lost: u32,
    #[serde(rename = "pointsFor")]
    pub points_for: u32,
    #[serde(rename = "pointsAgainst")]
    pub points_against: u32,
    /// Redundant with the counters; transport-only, recomputed on read.
    #[serde(rename = "pointsDifference", default)]
    pub points_difference: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubDto {
    pub code: String,
    pub name: String,
    #[serde(rename = "abbreviatedName", default)]
    pub abbreviated_name: Option<String>,
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Option<ImageUrlsDto>,
}

/// One entry of the club roster endpoint, player or staff.
///
/// The endpoint returns a bare JSON array of these.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterEntryDto {
    pub person: PersonDto,
    /// `J` for players, `E` for coaching staff.
    #[serde(rename = "type", default)]
    pub member_type: String,
    #[serde(rename = "typeName", default)]
    pub type_name: String,
    /// Jersey number, as a string on the wire.
    #[serde(default)]
    pub dorsal: Option<String>,
    /// 1 = guard, 2 = forward, 3 = center.
    #[serde(default)]
    pub position: Option<u8>,
    #[serde(rename = "positionName", default)]
    pub position_name: Option<String>,
    #[serde(default)]
    pub images: Option<PersonImagesDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonDto {
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(rename = "jerseyName", default)]
    pub jersey_name: Option<String>,
    #[serde(default)]
    pub country: Option<CountryDto>,
    /// Centimeters.
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub images: Option<PersonImagesDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryDto {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonImagesDto {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub headshot: Option<String>,
}
