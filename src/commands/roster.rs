//! Club roster display, fetched per team and cached.

use super::CommandContext;
use crate::cli::types::{SeasonCode, TeamCode};
use crate::error::{CourtsideError, Result};
use crate::mapper;
use crate::model::Player;
use crate::sync::SyncCoordinator;

pub async fn handle_roster(
    season: Option<SeasonCode>,
    team: TeamCode,
    refresh: bool,
    as_json: bool,
) -> Result<()> {
    let mut ctx = CommandContext::new(season)?;
    ctx.ensure_synced().await?;

    let club = ctx
        .db
        .team_by_code(team.as_str())?
        .ok_or_else(|| CourtsideError::TeamNotFound {
            code: team.as_str().to_string(),
        })?;

    // Rosters are fetched lazily, one club at a time.
    if refresh || ctx.db.roster(team.as_str())?.is_empty() {
        println!("Fetching roster for {}...", club.name);
        let mut coordinator = SyncCoordinator::new(&ctx.feed, &mut ctx.db, ctx.season.clone());
        let count = coordinator.refresh_roster(&team).await?;
        println!("✓ Cached {} players", count);
    }

    let players = ctx
        .db
        .roster(team.as_str())?
        .iter()
        .map(mapper::player::from_row)
        .collect::<Result<Vec<Player>>>()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players listed for {}", club.name);
        return Ok(());
    }

    println!("{} — {} players", club.name, players.len());
    for player in players {
        let jersey = player
            .jersey
            .map(|j| format!("#{j}"))
            .unwrap_or_else(|| "--".to_string());
        let position = player
            .position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let height = player
            .height_cm
            .map(|cm| format!("{cm} cm"))
            .unwrap_or_default();
        println!(
            "{:>4} {:<28} {:<8} {:<8} {}",
            jersey,
            player.name,
            position,
            height,
            player.country.unwrap_or_default()
        );
    }

    Ok(())
}
