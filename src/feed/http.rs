//! HTTP access to the EuroLeague feeds API.

use crate::cli::types::{SeasonCode, TeamCode};
use crate::error::Result;
use crate::feed::types::{GameDto, GamesResponse, RosterEntryDto, StandingDto, StandingsResponse};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use tracing::{debug, warn};

/// Base path for the EuroLeague feeds v2 API.
pub const FEEDS_BASE_URL: &str = "https://feeds.incrowdsports.com/provider/euroleague-feeds/v2";

/// The feed only serves games per round; the regular season has 38.
pub const REGULAR_SEASON_ROUNDS: u32 = 38;

const FEED_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 courtside";

/// Source of transport records for the sync coordinator.
///
/// Implemented by [`FeedClient`] against the real API and by scripted
/// doubles in tests, so sync behavior is testable without a network.
#[allow(async_fn_in_trait)]
pub trait FeedSource {
    /// All games of the season, every round of the regular season.
    async fn fetch_games(&self, season: &SeasonCode) -> Result<Vec<GameDto>>;

    /// Current league table for the season.
    async fn fetch_standings(&self, season: &SeasonCode) -> Result<Vec<StandingDto>>;

    /// Roster of one club, players and staff mixed.
    async fn fetch_roster(&self, season: &SeasonCode, team: &TeamCode)
        -> Result<Vec<RosterEntryDto>>;
}

/// Feeds API client.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: String,
}

impl FeedClient {
    pub fn new() -> Self {
        Self::with_base_url(FEEDS_BASE_URL)
    }

    /// Point the client at a different host, e.g. a local stub server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!(url, "feed request");
        let body = self
            .client
            .get(url)
            .header(USER_AGENT, FEED_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for FeedClient {
    async fn fetch_games(&self, season: &SeasonCode) -> Result<Vec<GameDto>> {
        let mut games = Vec::new();
        for round in 1..=REGULAR_SEASON_ROUNDS {
            let url = format!(
                "{}/competitions/E/seasons/{}/games?phaseTypeCode=RS&roundNumber={}",
                self.base_url,
                season.as_str(),
                round
            );
            let body = self.get_text(&url).await?;
            let response: GamesResponse = serde_json::from_str(&body)?;
            if response.data.is_empty() {
                // Rounds past the published calendar come back empty.
                warn!(round, "round has no games yet");
            }
            debug!(round, count = response.data.len(), "round fetched");
            games.extend(response.data);
        }
        Ok(games)
    }

    async fn fetch_standings(&self, season: &SeasonCode) -> Result<Vec<StandingDto>> {
        let url = format!(
            "{}/competitions/E/seasons/{}/standings",
            self.base_url,
            season.as_str()
        );
        let body = self.get_text(&url).await?;
        let response: StandingsResponse = serde_json::from_str(&body)?;
        Ok(response.data)
    }

    async fn fetch_roster(
        &self,
        season: &SeasonCode,
        team: &TeamCode,
    ) -> Result<Vec<RosterEntryDto>> {
        let url = format!(
            "{}/competitions/E/seasons/{}/clubs/{}/people",
            self.base_url,
            season.as_str(),
            team.as_str()
        );
        let body = self.get_text(&url).await?;
        // This endpoint returns a bare array rather than an envelope.
        let entries: Vec<RosterEntryDto> = serde_json::from_str(&body)?;
        Ok(entries)
    }
}
