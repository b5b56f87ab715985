//! Command implementations for the courtside CLI

pub mod favorite;
pub mod roster;
pub mod schedule;
pub mod standings;
pub mod sync_data;
pub mod teams;

use crate::cli::types::SeasonCode;
use crate::error::Result;
use crate::feed::FeedClient;
use crate::storage::LeagueDatabase;
use crate::sync::SyncCoordinator;
use crate::SEASON_ENV_VAR;

/// Pick the season from the CLI flag, the environment, or the default.
pub fn resolve_season(season: Option<SeasonCode>) -> Result<SeasonCode> {
    if let Some(season) = season {
        return Ok(season);
    }
    if let Ok(value) = std::env::var(SEASON_ENV_VAR) {
        return value.parse();
    }
    Ok(SeasonCode::default())
}

/// Context containing the resources every command needs.
pub struct CommandContext {
    pub season: SeasonCode,
    pub db: LeagueDatabase,
    pub feed: FeedClient,
}

impl CommandContext {
    /// Resolve the season and open the local cache.
    pub fn new(season: Option<SeasonCode>) -> Result<Self> {
        let season = resolve_season(season)?;
        let db = LeagueDatabase::new()?;
        Ok(Self {
            season,
            db,
            feed: FeedClient::new(),
        })
    }

    /// Sync before a read when the cache is unpopulated or empty.
    pub async fn ensure_synced(&mut self) -> Result<()> {
        let mut coordinator =
            SyncCoordinator::new(&self.feed, &mut self.db, self.season.clone());
        if let Some(summary) = coordinator.sync_if_needed().await? {
            println!(
                "✓ Cache populated: {} teams, {} games, {} standings",
                summary.teams, summary.games, summary.standings
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn explicit_season_wins() {
        // Never consults the environment.
        let season = resolve_season(Some("E2024".parse().unwrap())).unwrap();
        assert_eq!(season.as_str(), "E2024");
    }

    // Env-var fallbacks live in one test; the variable is process-global.
    #[test]
    fn season_resolution_falls_back_to_env_then_default() {
        env::remove_var(SEASON_ENV_VAR);
        assert_eq!(resolve_season(None).unwrap(), SeasonCode::default());

        env::set_var(SEASON_ENV_VAR, "E2023");
        assert_eq!(resolve_season(None).unwrap().as_str(), "E2023");

        env::set_var(SEASON_ENV_VAR, "last year");
        assert!(resolve_season(None).is_err());

        env::remove_var(SEASON_ENV_VAR);
    }
}
