//! Standing conversions.

use crate::cli::types::TeamCode;
use crate::error::Result;
use crate::feed::types::StandingDto;
use crate::model::{Phase, Standing};
use crate::storage::models::StandingRow;

/// Build a domain standing from the wire record.
///
/// The feed's `pointsDifference` is dropped; the domain derives it from the
/// counters so the two can never disagree. The standings endpoint does not
/// tag a phase, so the caller supplies it.
pub fn from_feed(dto: &StandingDto, phase: Phase) -> Standing {
    Standing {
        team: TeamCode::new(&dto.club.code),
        phase,
        position: dto.position,
        played: dto.games_played,
        won: dto.games_won,
        lost: dto.games_lost,
        points_for: dto.points_for,
        points_against: dto.points_against,
    }
}

pub fn to_row(standing: &Standing) -> StandingRow {
    StandingRow {
        team_code: standing.team.as_str().to_string(),
        phase: standing.phase.to_string(),
        position: standing.position,
        played: standing.played,
        won: standing.won,
        lost: standing.lost,
        points_for: standing.points_for,
        points_against: standing.points_against,
    }
}

pub fn from_row(row: &StandingRow) -> Result<Standing> {
    Ok(Standing {
        team: TeamCode::new(&row.team_code),
        phase: row.phase.parse()?,
        position: row.position,
        played: row.played,
        won: row.won,
        lost: row.lost,
        points_for: row.points_for,
        points_against: row.points_against,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::ClubDto;

    fn feed_standing() -> StandingDto {
        StandingDto {
            club: ClubDto {
                code: "PAN".to_string(),
                name: "Panathinaikos Athens".to_string(),
                abbreviated_name: Some("PAO".to_string()),
                image_urls: None,
            },
            position: 2,
            games_played: 10,
            games_won: 8,
            games_lost: 2,
            points_for: 850,
            points_against: 801,
            // Deliberately inconsistent with the counters.
            points_difference: 999,
        }
    }

    #[test]
    fn from_feed_recomputes_differential() {
        let standing = from_feed(&feed_standing(), Phase::Regular);
        assert_eq!(standing.team.as_str(), "PAN");
        assert_eq!(standing.position, 2);
        assert_eq!(standing.point_difference(), 49);
        assert_eq!(standing.win_percentage(), 80.0);
    }

    #[test]
    fn row_round_trip_preserves_all_fields() {
        let standing = from_feed(&feed_standing(), Phase::Playoffs);
        let row = to_row(&standing);
        assert_eq!(row.phase, "playoffs");
        assert_eq!(from_row(&row).unwrap(), standing);
        assert_eq!(to_row(&from_row(&row).unwrap()), row);
    }
}
