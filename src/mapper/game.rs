//! Game conversions.

use crate::cli::types::{GameId, TeamCode};
use crate::error::{CourtsideError, Result};
use crate::feed::types::GameDto;
use crate::model::{Game, GameStatus, Phase};
use crate::storage::models::GameRow;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Tipoff format in the games table; sorts chronologically as text.
pub const STORED_TIPOFF_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Datetime spellings seen on the wire, most common first.
const FEED_TIPOFF_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a feed timestamp like `2025-09-30T18:00:00.000Z`.
pub fn parse_feed_tipoff(value: &str) -> Result<NaiveDateTime> {
    for format in FEED_TIPOFF_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    // Date-only fixtures exist before the schedule is confirmed.
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(CourtsideError::InvalidDate {
        value: value.to_string(),
    })
}

/// Build a domain game from the wire record.
///
/// Scores are only carried over for live and finished games, so a
/// scheduled game always reads as unplayed no matter what the feed put in
/// the score fields. Quarter clocks, referees, and broadcast data are
/// dropped here.
pub fn from_feed(dto: &GameDto) -> Result<Game> {
    let status = GameStatus::from_feed_code(&dto.status);
    let (home_score, away_score) = if status.has_score() {
        (Some(dto.home.score as u16), Some(dto.away.score as u16))
    } else {
        (None, None)
    };

    Ok(Game {
        id: GameId::new(&dto.id),
        home: TeamCode::new(&dto.home.code),
        away: TeamCode::new(&dto.away.code),
        tipoff: parse_feed_tipoff(&dto.date)?,
        venue: dto
            .venue
            .as_ref()
            .map(|v| v.name.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "TBD".to_string()),
        round: dto.round.round,
        status,
        home_score,
        away_score,
        phase: Phase::from_feed_code(&dto.phase_type.code),
    })
}

pub fn to_row(game: &Game) -> GameRow {
    GameRow {
        id: game.id.as_str().to_string(),
        home_code: game.home.as_str().to_string(),
        away_code: game.away.as_str().to_string(),
        tipoff: game.tipoff.format(STORED_TIPOFF_FORMAT).to_string(),
        venue: game.venue.clone(),
        round: game.round,
        status: game.status.to_string(),
        home_score: game.home_score,
        away_score: game.away_score,
        phase: game.phase.to_string(),
    }
}

pub fn from_row(row: &GameRow) -> Result<Game> {
    let tipoff = NaiveDateTime::parse_from_str(&row.tipoff, STORED_TIPOFF_FORMAT).map_err(|_| {
        CourtsideError::InvalidDate {
            value: row.tipoff.clone(),
        }
    })?;
    Ok(Game {
        id: GameId::new(&row.id),
        home: TeamCode::new(&row.home_code),
        away: TeamCode::new(&row.away_code),
        tipoff,
        venue: row.venue.clone(),
        round: row.round,
        status: row.status.parse()?,
        home_score: row.home_score,
        away_score: row.away_score,
        phase: row.phase.parse()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::{GameTeamDto, PhaseTypeDto, RoundDto, VenueDto};

    fn feed_game(status: &str, home_score: u32, away_score: u32) -> GameDto {
        GameDto {
            id: "E2025_153".to_string(),
            phase_type: PhaseTypeDto {
                code: "RS".to_string(),
                name: "Regular Season".to_string(),
            },
            round: RoundDto {
                round: 17,
                name: "Round 17".to_string(),
            },
            date: "2025-12-19T20:30:00.000Z".to_string(),
            status: status.to_string(),
            home: GameTeamDto {
                code: "MAD".to_string(),
                name: "Real Madrid".to_string(),
                score: home_score,
                ..Default::default()
            },
            away: GameTeamDto {
                code: "PAN".to_string(),
                name: "Panathinaikos Athens".to_string(),
                score: away_score,
                ..Default::default()
            },
            venue: Some(VenueDto {
                name: "WiZink Center, Madrid".to_string(),
                code: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn parses_feed_timestamps() {
        let tipoff = parse_feed_tipoff("2025-09-30T18:00:00.000Z").unwrap();
        assert_eq!(tipoff.format("%Y-%m-%d %H:%M").to_string(), "2025-09-30 18:00");

        let date_only = parse_feed_tipoff("2025-09-30").unwrap();
        assert_eq!(date_only.format("%H:%M:%S").to_string(), "00:00:00");

        assert!(parse_feed_tipoff("next tuesday").is_err());
    }

    #[test]
    fn scheduled_games_carry_no_score() {
        // The feed reports zeros for unplayed games; they must not become 0-0.
        let game = from_feed(&feed_game("confirmed", 0, 0)).unwrap();
        assert_eq!(game.status, GameStatus::Scheduled);
        assert_eq!(game.home_score, None);
        assert_eq!(game.away_score, None);
    }

    #[test]
    fn finished_games_keep_their_score() {
        let game = from_feed(&feed_game("result", 97, 93)).unwrap();
        assert_eq!(game.status, GameStatus::Finished);
        assert_eq!(game.home_score, Some(97));
        assert_eq!(game.away_score, Some(93));
        assert_eq!(game.round, 17);
        assert_eq!(game.phase, Phase::Regular);
        assert_eq!(game.venue, "WiZink Center, Madrid");
    }

    #[test]
    fn missing_venue_becomes_tbd() {
        let mut dto = feed_game("confirmed", 0, 0);
        dto.venue = None;
        assert_eq!(from_feed(&dto).unwrap().venue, "TBD");
    }

    #[test]
    fn row_round_trip_preserves_all_fields() {
        let game = from_feed(&feed_game("result", 80, 75)).unwrap();
        let row = to_row(&game);
        assert_eq!(from_row(&row).unwrap(), game);
        assert_eq!(to_row(&from_row(&row).unwrap()), row);
    }

    #[test]
    fn from_row_rejects_corrupt_rows() {
        let mut row = to_row(&from_feed(&feed_game("confirmed", 0, 0)).unwrap());
        row.status = "done".to_string();
        assert!(from_row(&row).is_err());

        let mut row2 = to_row(&from_feed(&feed_game("confirmed", 0, 0)).unwrap());
        row2.tipoff = "not a date".to_string();
        assert!(from_row(&row2).is_err());
    }
}
