//! Season schedule browsing.

use super::CommandContext;
use crate::cli::types::{SeasonCode, TeamCode};
use crate::error::Result;
use crate::mapper;
use crate::model::{Game, GameStatus, Phase};
use chrono::NaiveDate;

/// Filters for the schedule listing, straight from the CLI.
#[derive(Debug, Default)]
pub struct ScheduleParams {
    pub season: Option<SeasonCode>,
    pub round: Option<u32>,
    pub team: Option<TeamCode>,
    pub status: Option<GameStatus>,
    pub date: Option<NaiveDate>,
    pub phase: Option<Phase>,
    pub as_json: bool,
}

pub async fn handle_schedule(params: ScheduleParams) -> Result<()> {
    let mut ctx = CommandContext::new(params.season)?;
    ctx.ensure_synced().await?;

    let games = ctx
        .db
        .games_ordered()?
        .iter()
        .map(mapper::game::from_row)
        .collect::<Result<Vec<_>>>()?;

    let games: Vec<Game> = games
        .into_iter()
        .filter(|game| params.round.map_or(true, |round| game.round == round))
        .filter(|game| params.team.as_ref().map_or(true, |team| game.involves(team)))
        .filter(|game| params.status.map_or(true, |status| game.status == status))
        .filter(|game| params.date.map_or(true, |date| game.tipoff.date() == date))
        .filter(|game| params.phase.map_or(true, |phase| game.phase == phase))
        .collect();

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&games)?);
        return Ok(());
    }

    if games.is_empty() {
        println!("No games match");
        return Ok(());
    }

    for game in games {
        let result = match game.score_line() {
            Some(line) => line,
            None => "   -   ".to_string(),
        };
        println!(
            "R{:02}  {}  {:<4} vs {:<4} {:>7}  [{}]  {}",
            game.round,
            game.tipoff.format("%Y-%m-%d %H:%M"),
            game.home.as_str(),
            game.away.as_str(),
            result,
            game.status,
            game.venue
        );
    }

    Ok(())
}
