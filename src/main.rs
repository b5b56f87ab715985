//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use courtside::{
    cli::{Commands, Courtside},
    commands::{
        favorite::handle_favorite,
        roster::handle_roster,
        schedule::{handle_schedule, ScheduleParams},
        standings::handle_standings,
        sync_data::handle_sync,
        teams::handle_teams,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("courtside=warn")),
        )
        .with_target(false)
        .try_init();

    let app = Courtside::parse();

    match app.command {
        Commands::Sync {
            season,
            force,
            clear_db,
        } => handle_sync(season.season, force, clear_db).await?,

        Commands::Teams {
            season,
            country,
            favorites,
            json,
        } => handle_teams(season.season, country, favorites, json).await?,

        Commands::Schedule {
            season,
            round,
            team,
            status,
            date,
            phase,
            json,
        } => {
            handle_schedule(ScheduleParams {
                season: season.season,
                round,
                team,
                status,
                date,
                phase,
                as_json: json,
            })
            .await?
        }

        Commands::Standings {
            season,
            phase,
            json,
        } => handle_standings(season.season, phase, json).await?,

        Commands::Roster {
            season,
            team,
            refresh,
            json,
        } => handle_roster(season.season, team, refresh, json).await?,

        Commands::Favorite {
            season,
            team,
            unset,
        } => handle_favorite(season.season, team, unset).await?,
    }

    Ok(())
}
