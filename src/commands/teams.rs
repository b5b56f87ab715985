//! Club listing.

use super::CommandContext;
use crate::cli::types::SeasonCode;
use crate::error::Result;
use crate::mapper;
use crate::model::Team;

pub async fn handle_teams(
    season: Option<SeasonCode>,
    country: Option<String>,
    favorites: bool,
    as_json: bool,
) -> Result<()> {
    let mut ctx = CommandContext::new(season)?;
    ctx.ensure_synced().await?;

    let rows = if favorites {
        ctx.db.favorite_teams()?
    } else {
        ctx.db.teams_ordered()?
    };

    let mut teams: Vec<Team> = rows.iter().map(mapper::team::from_row).collect();
    if let Some(country) = country {
        let wanted = country.to_lowercase();
        teams.retain(|team| team.country.to_lowercase() == wanted);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
        return Ok(());
    }

    if teams.is_empty() {
        println!("No teams cached; try `courtside sync`");
        return Ok(());
    }

    for team in teams {
        let marker = if team.is_favorite { "★" } else { " " };
        println!(
            "{} {:<4} {:<32} {:<16} {}",
            marker,
            team.code.as_str(),
            team.name,
            team.city,
            team.country
        );
    }

    Ok(())
}
