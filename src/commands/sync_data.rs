//! Manual cache refresh.

use super::CommandContext;
use crate::cli::types::SeasonCode;
use crate::error::Result;
use crate::sync::{SyncCoordinator, SyncState};

/// Refresh the local cache from the feed.
///
/// Without `--force` this only syncs when the cache is unpopulated or
/// empty, mirroring what every read command does implicitly.
pub async fn handle_sync(season: Option<SeasonCode>, force: bool, clear_db: bool) -> Result<()> {
    let mut ctx = CommandContext::new(season)?;

    if clear_db {
        println!("Clearing all cached data...");
        ctx.db.clear_all_data()?;
        println!("✓ Cache cleared");
    }

    let mut coordinator = SyncCoordinator::new(&ctx.feed, &mut ctx.db, ctx.season.clone());

    let summary = if force {
        Some(coordinator.sync().await?)
    } else {
        coordinator.sync_if_needed().await?
    };

    match summary {
        Some(summary) => {
            println!(
                "✓ Synced {}: {} teams, {} games, {} standings",
                ctx.season, summary.teams, summary.games, summary.standings
            );
        }
        None => {
            let state = SyncState::load(&ctx.db)?;
            match state.last_synced_at {
                Some(stamp) => println!(
                    "Cache is fresh (last synced {}); use --force to refetch",
                    stamp.format("%Y-%m-%d %H:%M UTC")
                ),
                None => println!("Cache is fresh; use --force to refetch"),
            }
        }
    }

    Ok(())
}
