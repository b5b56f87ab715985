//! EuroLeague Basketball CLI Library
//!
//! A Rust library for following EuroLeague basketball from the terminal,
//! backed by a local SQLite cache that is kept in step with the public
//! EuroLeague JSON feeds.
//!
//! ## Features
//!
//! - **Schedule Browsing**: Full season calendar with round, team, status,
//!   and date filters
//! - **Standings**: Per-phase league tables with derived win percentage and
//!   point differential
//! - **Team Rosters**: Player lists fetched per club and cached locally
//! - **Favorites**: Mark clubs as favorites and filter by them
//! - **Offline First**: All reads come from the local cache; the network is
//!   only touched when a sync is due or explicitly requested
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtside::{feed::FeedClient, storage::LeagueDatabase, sync::SyncCoordinator, SeasonCode};
//!
//! # async fn example() -> courtside::Result<()> {
//! let feed = FeedClient::new();
//! let mut db = LeagueDatabase::new()?;
//! let mut coordinator = SyncCoordinator::new(&feed, &mut db, SeasonCode::default());
//!
//! if coordinator.is_sync_needed()? {
//!     let summary = coordinator.sync().await?;
//!     println!("cached {} games", summary.games);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the season once to avoid passing it in every command:
//! ```bash
//! export COURTSIDE_SEASON=E2025
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod feed;
pub mod mapper;
pub mod model;
pub mod storage;
pub mod sync;

// Re-export commonly used types
pub use cli::types::{GameId, SeasonCode, TeamCode};
pub use error::{CourtsideError, Result};
pub use model::{Game, GameStatus, Phase, Player, Standing, Team};

pub const SEASON_ENV_VAR: &str = "COURTSIDE_SEASON";
