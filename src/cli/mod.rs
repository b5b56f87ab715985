//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use types::{SeasonCode, TeamCode};

use crate::model::{GameStatus, Phase};

/// Season selection shared by every command.
#[derive(Debug, Args)]
pub struct SeasonArg {
    /// Season code, e.g. `E2025` (or set `COURTSIDE_SEASON`).
    #[clap(long, short)]
    pub season: Option<SeasonCode>,
}

#[derive(Debug, Parser)]
#[clap(name = "courtside", about = "EuroLeague basketball from your terminal")]
pub struct Courtside {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Refresh the local cache from the EuroLeague feeds.
    ///
    /// Runs automatically before any read when the cache is empty; use
    /// `--force` to refetch regardless.
    Sync {
        #[clap(flatten)]
        season: SeasonArg,

        /// Sync even if the cache looks fresh.
        #[clap(long)]
        force: bool,

        /// Clear all cached data before fetching (useful for starting fresh).
        #[clap(long)]
        clear_db: bool,
    },

    /// List clubs.
    Teams {
        #[clap(flatten)]
        season: SeasonArg,

        /// Only clubs from this country.
        #[clap(long)]
        country: Option<String>,

        /// Only clubs marked as favorites.
        #[clap(long)]
        favorites: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the season schedule.
    Schedule {
        #[clap(flatten)]
        season: SeasonArg,

        /// Single round, e.g. `-r 17`.
        #[clap(long, short)]
        round: Option<u32>,

        /// Games of one club (home or away), by code: `-t MAD`.
        #[clap(long, short)]
        team: Option<TeamCode>,

        /// Filter by status: scheduled, live, finished, postponed, cancelled.
        #[clap(long)]
        status: Option<GameStatus>,

        /// Games on one day, `YYYY-MM-DD`.
        #[clap(long)]
        date: Option<NaiveDate>,

        /// Filter by phase: regular, playoffs, final-four.
        #[clap(long)]
        phase: Option<Phase>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the league table.
    Standings {
        #[clap(flatten)]
        season: SeasonArg,

        /// Phase of the table to show.
        #[clap(long, default_value_t = Phase::Regular)]
        phase: Phase,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a club's roster, fetching it on first use.
    Roster {
        #[clap(flatten)]
        season: SeasonArg,

        /// Club code, e.g. `MAD`.
        team: TeamCode,

        /// Refetch from the feed even if a roster is cached.
        #[clap(long)]
        refresh: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Mark a club as a favorite (or unmark it).
    Favorite {
        #[clap(flatten)]
        season: SeasonArg,

        /// Club code, e.g. `MAD`.
        team: TeamCode,

        /// Remove the favorite mark instead of setting it.
        #[clap(long)]
        unset: bool,
    },
}
