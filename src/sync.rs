//! Sync coordination between the remote feed and the local cache.
//!
//! The coordinator owns the decision of *whether* to refresh (a persisted
//! populated flag plus the cached game count) and the refresh itself:
//! fetch, map everything up front, then swap the cached season in a single
//! transaction. A fetch or parse failure therefore never leaves the store
//! half-written.

use crate::cli::types::{SeasonCode, TeamCode};
use crate::error::{CourtsideError, Result};
use crate::feed::FeedSource;
use crate::mapper;
use crate::model::Phase;
use crate::storage::{LeagueDatabase, META_DATA_POPULATED, META_LAST_SYNCED_AT};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{info, warn};

/// Persisted sync flags, read from and written to the store's `meta` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncState {
    pub populated: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl SyncState {
    /// Load the flags from the store. Missing or unreadable values read as
    /// "never synced".
    pub fn load(db: &LeagueDatabase) -> Result<Self> {
        let populated = db
            .get_meta(META_DATA_POPULATED)?
            .map(|value| value == "1")
            .unwrap_or(false);
        let last_synced_at = db
            .get_meta(META_LAST_SYNCED_AT)?
            .and_then(|value| DateTime::parse_from_rfc3339(&value).ok())
            .map(|dt| dt.with_timezone(&Utc));
        Ok(Self {
            populated,
            last_synced_at,
        })
    }
}

/// Outcome of a successful sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub teams: usize,
    pub games: usize,
    pub standings: usize,
    pub synced_at: DateTime<Utc>,
}

/// Drives fetch → map → replace against one season.
pub struct SyncCoordinator<'a, F> {
    feed: &'a F,
    db: &'a mut LeagueDatabase,
    season: SeasonCode,
}

impl<'a, F: FeedSource> SyncCoordinator<'a, F> {
    pub fn new(feed: &'a F, db: &'a mut LeagueDatabase, season: SeasonCode) -> Self {
        Self { feed, db, season }
    }

    /// A refresh is due when the cache was never populated or holds no
    /// games.
    pub fn is_sync_needed(&self) -> Result<bool> {
        let state = SyncState::load(self.db)?;
        if !state.populated {
            return Ok(true);
        }
        Ok(self.db.game_count()? == 0)
    }

    /// Fetch the season from the feed and replace the cached teams, games,
    /// and standings.
    ///
    /// All remote payloads are fetched and mapped before the store is
    /// touched; any fetch or parse failure surfaces as an error with the
    /// cache left exactly as it was. On success the populated flag and the
    /// sync timestamp are written in the same transaction as the rows.
    pub async fn sync(&mut self) -> Result<SyncSummary> {
        info!(season = %self.season, "starting full sync");

        let game_dtos = self.feed.fetch_games(&self.season).await?;
        if game_dtos.is_empty() {
            warn!(season = %self.season, "feed returned no games");
            return Err(CourtsideError::EmptyFeed { what: "games" });
        }
        let standing_dtos = self.feed.fetch_standings(&self.season).await?;

        let teams = mapper::team::collect_from_games(&game_dtos);
        if teams.is_empty() {
            return Err(CourtsideError::EmptyFeed { what: "teams" });
        }
        let games = game_dtos
            .iter()
            .map(mapper::game::from_feed)
            .collect::<Result<Vec<_>>>()?;
        // The standings endpoint serves the regular-season table.
        let standings: Vec<_> = standing_dtos
            .iter()
            .map(|dto| mapper::standing::from_feed(dto, Phase::Regular))
            .collect();

        let team_rows: Vec<_> = teams.iter().map(mapper::team::to_row).collect();
        let game_rows: Vec<_> = games.iter().map(mapper::game::to_row).collect();
        let standing_rows: Vec<_> = standings.iter().map(mapper::standing::to_row).collect();

        let synced_at = Utc::now();
        self.db.replace_snapshot(
            &team_rows,
            &game_rows,
            &standing_rows,
            &synced_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;

        let summary = SyncSummary {
            teams: team_rows.len(),
            games: game_rows.len(),
            standings: standing_rows.len(),
            synced_at,
        };
        info!(
            teams = summary.teams,
            games = summary.games,
            standings = summary.standings,
            "sync complete"
        );
        Ok(summary)
    }

    /// Run [`Self::sync`] only when [`Self::is_sync_needed`] says so.
    pub async fn sync_if_needed(&mut self) -> Result<Option<SyncSummary>> {
        if self.is_sync_needed()? {
            Ok(Some(self.sync().await?))
        } else {
            Ok(None)
        }
    }

    /// Clear the populated flag so the next check forces a refresh.
    pub fn invalidate(&mut self) -> Result<()> {
        self.db.set_meta(META_DATA_POPULATED, "0")?;
        Ok(())
    }

    /// Fetch one club's roster and replace its cached rows. Staff entries
    /// are filtered out. Returns the number of players cached.
    pub async fn refresh_roster(&mut self, team: &TeamCode) -> Result<usize> {
        let entries = self.feed.fetch_roster(&self.season, team).await?;
        let players: Vec<_> = entries
            .iter()
            .filter_map(|entry| mapper::player::from_feed(team, entry))
            .collect();
        let rows: Vec<_> = players.iter().map(mapper::player::to_row).collect();
        self.db.replace_roster(team.as_str(), &rows)?;
        info!(team = %team, players = rows.len(), "roster refreshed");
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_state_defaults_to_never_synced() {
        let db = LeagueDatabase::new_in_memory().unwrap();
        let state = SyncState::load(&db).unwrap();
        assert!(!state.populated);
        assert!(state.last_synced_at.is_none());
    }

    #[test]
    fn sync_state_reads_back_written_flags() {
        let mut db = LeagueDatabase::new_in_memory().unwrap();
        db.set_meta(META_DATA_POPULATED, "1").unwrap();
        db.set_meta(META_LAST_SYNCED_AT, "2025-10-03T08:15:00Z").unwrap();

        let state = SyncState::load(&db).unwrap();
        assert!(state.populated);
        let stamp = state.last_synced_at.unwrap();
        assert_eq!(stamp.to_rfc3339_opts(SecondsFormat::Secs, true), "2025-10-03T08:15:00Z");
    }

    #[test]
    fn unreadable_timestamp_reads_as_none() {
        let mut db = LeagueDatabase::new_in_memory().unwrap();
        db.set_meta(META_LAST_SYNCED_AT, "yesterday-ish").unwrap();

        let state = SyncState::load(&db).unwrap();
        assert!(state.last_synced_at.is_none());
    }
}
