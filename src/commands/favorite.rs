//! Favorite-club toggling.

use super::CommandContext;
use crate::cli::types::{SeasonCode, TeamCode};
use crate::error::{CourtsideError, Result};

/// Set or clear the favorite mark on one club.
///
/// This is the one user-driven mutation of cached data and is modeled as a
/// targeted partial update rather than a row rewrite.
pub async fn handle_favorite(
    season: Option<SeasonCode>,
    team: TeamCode,
    unset: bool,
) -> Result<()> {
    let mut ctx = CommandContext::new(season)?;
    ctx.ensure_synced().await?;

    let matched = ctx.db.set_favorite(team.as_str(), !unset)?;
    if !matched {
        return Err(CourtsideError::TeamNotFound {
            code: team.as_str().to_string(),
        });
    }

    if unset {
        println!("✓ {} removed from favorites", team);
    } else {
        println!("★ {} added to favorites", team);
    }
    Ok(())
}
