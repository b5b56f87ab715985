//! Roster entry conversions.

use crate::cli::types::TeamCode;
use crate::error::Result;
use crate::feed::types::RosterEntryDto;
use crate::model::{Player, PlayerPosition};
use crate::storage::models::PlayerRow;

/// Roster entry type code for players; coaching staff is `E`.
const PLAYER_TYPE: &str = "J";

/// Build a domain player from a roster entry.
///
/// Returns `None` for staff entries and for entries the feed ships without
/// a person code, which cannot be keyed.
pub fn from_feed(team: &TeamCode, entry: &RosterEntryDto) -> Option<Player> {
    if entry.member_type != PLAYER_TYPE {
        return None;
    }
    let code = entry.person.code.clone()?;

    let headshot_url = entry
        .images
        .as_ref()
        .or(entry.person.images.as_ref())
        .and_then(|images| images.headshot.clone().or_else(|| images.profile.clone()));

    Some(Player {
        team: team.clone(),
        code,
        name: entry.person.name.clone(),
        jersey: entry
            .dorsal
            .as_deref()
            .and_then(|dorsal| dorsal.trim().parse().ok()),
        position: entry.position.and_then(PlayerPosition::from_feed_code),
        height_cm: entry.person.height,
        country: entry.person.country.as_ref().map(|c| c.name.clone()),
        headshot_url,
    })
}

pub fn to_row(player: &Player) -> PlayerRow {
    PlayerRow {
        id: format!("{}_{}", player.team.as_str(), player.code),
        team_code: player.team.as_str().to_string(),
        code: player.code.clone(),
        name: player.name.clone(),
        jersey: player.jersey,
        position: player.position.map(|p| p.to_string()),
        height_cm: player.height_cm,
        country: player.country.clone(),
        headshot_url: player.headshot_url.clone(),
    }
}

pub fn from_row(row: &PlayerRow) -> Result<Player> {
    Ok(Player {
        team: TeamCode::new(&row.team_code),
        code: row.code.clone(),
        name: row.name.clone(),
        jersey: row.jersey,
        position: row.position.as_deref().map(str::parse).transpose()?,
        height_cm: row.height_cm,
        country: row.country.clone(),
        headshot_url: row.headshot_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::{CountryDto, PersonDto, PersonImagesDto};

    fn roster_entry(member_type: &str, code: Option<&str>) -> RosterEntryDto {
        RosterEntryDto {
            person: PersonDto {
                code: code.map(str::to_string),
                name: "Campazzo, Facundo".to_string(),
                country: Some(CountryDto {
                    code: "ARG".to_string(),
                    name: "Argentina".to_string(),
                }),
                height: Some(179),
                images: Some(PersonImagesDto {
                    profile: Some("https://img.example/campazzo.jpg".to_string()),
                    headshot: None,
                }),
                ..Default::default()
            },
            member_type: member_type.to_string(),
            type_name: if member_type == "J" { "Player" } else { "Coach" }.to_string(),
            dorsal: Some("7".to_string()),
            position: Some(1),
            position_name: Some("Guard".to_string()),
            images: None,
        }
    }

    #[test]
    fn maps_player_entries() {
        let team = TeamCode::new("MAD");
        let player = from_feed(&team, &roster_entry("J", Some("002661"))).unwrap();
        assert_eq!(player.code, "002661");
        assert_eq!(player.jersey, Some(7));
        assert_eq!(player.position, Some(PlayerPosition::Guard));
        assert_eq!(player.height_cm, Some(179));
        assert_eq!(player.country.as_deref(), Some("Argentina"));
        assert_eq!(
            player.headshot_url.as_deref(),
            Some("https://img.example/campazzo.jpg")
        );
    }

    #[test]
    fn skips_staff_and_unkeyed_entries() {
        let team = TeamCode::new("MAD");
        assert!(from_feed(&team, &roster_entry("E", Some("C0001"))).is_none());
        assert!(from_feed(&team, &roster_entry("J", None)).is_none());
    }

    #[test]
    fn non_numeric_dorsal_is_dropped() {
        let team = TeamCode::new("MAD");
        let mut entry = roster_entry("J", Some("002661"));
        entry.dorsal = Some("00*".to_string());
        let player = from_feed(&team, &entry).unwrap();
        assert_eq!(player.jersey, None);
    }

    #[test]
    fn row_round_trip_preserves_all_fields() {
        let team = TeamCode::new("MAD");
        let player = from_feed(&team, &roster_entry("J", Some("002661"))).unwrap();
        let row = to_row(&player);
        assert_eq!(row.id, "MAD_002661");
        assert_eq!(from_row(&row).unwrap(), player);
    }
}
