//! League table rendering.

use super::CommandContext;
use crate::cli::types::SeasonCode;
use crate::error::Result;
use crate::mapper;
use crate::model::{Phase, Standing};
use serde::Serialize;

/// One rendered line of the table, counters plus the derived figures.
#[derive(Debug, Serialize)]
pub struct StandingLine {
    pub position: u32,
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub win_percentage: f64,
    pub point_difference: i32,
    pub points_for: u32,
    pub points_against: u32,
}

impl From<&Standing> for StandingLine {
    fn from(standing: &Standing) -> Self {
        Self {
            position: standing.position,
            team: standing.team.as_str().to_string(),
            played: standing.played,
            won: standing.won,
            lost: standing.lost,
            win_percentage: standing.win_percentage(),
            point_difference: standing.point_difference(),
            points_for: standing.points_for,
            points_against: standing.points_against,
        }
    }
}

pub async fn handle_standings(
    season: Option<SeasonCode>,
    phase: Phase,
    as_json: bool,
) -> Result<()> {
    let mut ctx = CommandContext::new(season)?;
    ctx.ensure_synced().await?;

    let standings = ctx
        .db
        .standings_by_phase(&phase.to_string())?
        .iter()
        .map(mapper::standing::from_row)
        .collect::<Result<Vec<_>>>()?;

    let lines: Vec<StandingLine> = standings.iter().map(StandingLine::from).collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    if lines.is_empty() {
        println!("No standings cached for the {} phase", phase);
        return Ok(());
    }

    println!(
        "{:>3}  {:<4} {:>2} {:>3} {:>3} {:>6} {:>5} {:>5} {:>5}",
        "POS", "TEAM", "GP", "W", "L", "W%", "+/-", "PF", "PA"
    );
    for line in lines {
        println!(
            "{:>3}  {:<4} {:>2} {:>3} {:>3} {:>5.1}% {:>+5} {:>5} {:>5}",
            line.position,
            line.team,
            line.played,
            line.won,
            line.lost,
            line.win_percentage,
            line.point_difference,
            line.points_for,
            line.points_against
        );
    }

    Ok(())
}
