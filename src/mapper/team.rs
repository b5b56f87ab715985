//! Team conversions.
//!
//! The feed has no standalone club list; clubs are collected from the games
//! payload the way the original web client did it, with the home venue used
//! to place a club in a city and a name heuristic for the country.

use crate::cli::types::TeamCode;
use crate::feed::types::{GameDto, GameTeamDto};
use crate::model::Team;
use crate::storage::models::TeamRow;
use std::collections::BTreeMap;

const UNKNOWN: &str = "Unknown";

/// (name fragment, country) pairs for clubs whose names carry their city.
const COUNTRY_HINTS: &[(&str, &str)] = &[
    ("istanbul", "Turkey"),
    ("monaco", "Monaco"),
    ("vitoria", "Spain"),
    ("gasteiz", "Spain"),
    ("belgrade", "Serbia"),
    ("dubai", "UAE"),
    ("milan", "Italy"),
    ("barcelona", "Spain"),
    ("munich", "Germany"),
    ("tel aviv", "Israel"),
    ("villeurbanne", "France"),
    ("athens", "Greece"),
    ("paris", "France"),
    ("madrid", "Spain"),
    ("valencia", "Spain"),
    ("bologna", "Italy"),
    ("kaunas", "Lithuania"),
];

/// Collect the unique clubs referenced by a games payload, sorted by code.
///
/// A club seen only as a visitor gets `Unknown` for its city until a home
/// game fills it in.
pub fn collect_from_games(games: &[GameDto]) -> Vec<Team> {
    let mut by_code: BTreeMap<String, Team> = BTreeMap::new();
    for game in games {
        let home_city = city_from_venue(game.venue.as_ref().map(|v| v.name.as_str()));
        upsert(&mut by_code, &game.home, Some(home_city));
        upsert(&mut by_code, &game.away, None);
    }
    by_code.into_values().collect()
}

fn upsert(by_code: &mut BTreeMap<String, Team>, dto: &GameTeamDto, city: Option<String>) {
    match by_code.get_mut(&dto.code) {
        Some(existing) => {
            if let Some(city) = city {
                if existing.city == UNKNOWN && city != UNKNOWN {
                    existing.city = city;
                }
            }
        }
        None => {
            by_code.insert(dto.code.clone(), from_game_team(dto, city));
        }
    }
}

/// Build a club record from its embedded form in a game.
pub fn from_game_team(dto: &GameTeamDto, city: Option<String>) -> Team {
    Team {
        code: TeamCode::new(&dto.code),
        name: dto.name.clone(),
        short_name: dto
            .abbreviated_name
            .clone()
            .unwrap_or_else(|| dto.code.clone()),
        city: city.unwrap_or_else(|| UNKNOWN.to_string()),
        country: country_from_name(&dto.name),
        logo_url: dto
            .image_urls
            .as_ref()
            .and_then(|urls| urls.crest.clone())
            .unwrap_or_default(),
        founded: None,
        coach: None,
        is_favorite: false,
    }
}

/// Extract the city from an `"Arena, City"` venue string.
pub fn city_from_venue(venue: Option<&str>) -> String {
    let venue = match venue {
        Some(v) if !v.trim().is_empty() => v,
        _ => return UNKNOWN.to_string(),
    };
    let mut parts = venue.splitn(2, ',');
    let first = parts.next().unwrap_or(venue);
    match parts.next() {
        Some(city) if !city.trim().is_empty() => city.trim().to_string(),
        _ => first.trim().to_string(),
    }
}

/// Best-effort country from the club name.
pub fn country_from_name(name: &str) -> String {
    let lower = name.to_lowercase();
    COUNTRY_HINTS
        .iter()
        .find(|(fragment, _)| lower.contains(fragment))
        .map(|(_, country)| (*country).to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn to_row(team: &Team) -> TeamRow {
    TeamRow {
        code: team.code.as_str().to_string(),
        name: team.name.clone(),
        short_name: team.short_name.clone(),
        city: team.city.clone(),
        country: team.country.clone(),
        logo_url: team.logo_url.clone(),
        founded: team.founded,
        coach: team.coach.clone(),
        is_favorite: team.is_favorite,
    }
}

pub fn from_row(row: &TeamRow) -> Team {
    Team {
        code: TeamCode::new(&row.code),
        name: row.name.clone(),
        short_name: row.short_name.clone(),
        city: row.city.clone(),
        country: row.country.clone(),
        logo_url: row.logo_url.clone(),
        founded: row.founded,
        coach: row.coach.clone(),
        is_favorite: row.is_favorite,
    }
}
