//! Basic database query operations

use super::{models::*, schema::LeagueDatabase};
use anyhow::Result;
use rusqlite::{params, Row, Transaction};

/// Meta key for the "cache has been populated at least once" flag.
pub const META_DATA_POPULATED: &str = "data_populated";
/// Meta key for the RFC 3339 timestamp of the last successful sync.
pub const META_LAST_SYNCED_AT: &str = "last_synced_at";

impl LeagueDatabase {
    // ---- teams ----------------------------------------------------------

    /// Bulk insert teams, replacing any row with the same code.
    pub fn upsert_teams(&mut self, teams: &[TeamRow]) -> Result<()> {
        let tx = self.conn.transaction()?;
        Self::insert_teams_tx(&tx, teams)?;
        tx.commit()?;
        Ok(())
    }

    fn insert_teams_tx(tx: &Transaction<'_>, teams: &[TeamRow]) -> Result<()> {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO teams
             (code, name, short_name, city, country, logo_url, founded, coach, is_favorite)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )?;
        for team in teams {
            stmt.execute(params![
                team.code,
                team.name,
                team.short_name,
                team.city,
                team.country,
                team.logo_url,
                team.founded,
                team.coach,
                team.is_favorite
            ])?;
        }
        Ok(())
    }

    /// All teams, ordered by name.
    pub fn teams_ordered(&self) -> Result<Vec<TeamRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT code, name, short_name, city, country, logo_url, founded, coach, is_favorite
             FROM teams ORDER BY name ASC",
        )?;
        let rows = stmt.query_map([], |row| Self::row_to_team(row))?;
        collect_rows(rows)
    }

    /// Zero-or-one lookup by club code.
    pub fn team_by_code(&self, code: &str) -> Result<Option<TeamRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT code, name, short_name, city, country, logo_url, founded, coach, is_favorite
             FROM teams WHERE code = ?",
        )?;
        optional_row(stmt.query_row(params![code], |row| Self::row_to_team(row)))
    }

    /// Teams the user marked as favorites, ordered by name.
    pub fn favorite_teams(&self) -> Result<Vec<TeamRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT code, name, short_name, city, country, logo_url, founded, coach, is_favorite
             FROM teams WHERE is_favorite = 1 ORDER BY name ASC",
        )?;
        let rows = stmt.query_map([], |row| Self::row_to_team(row))?;
        collect_rows(rows)
    }

    /// Flip the favorite flag for one club. Returns false when no row
    /// matched the code.
    pub fn set_favorite(&mut self, code: &str, is_favorite: bool) -> Result<bool> {
        let affected = self.conn.execute(
            "UPDATE teams SET is_favorite = ? WHERE code = ?",
            params![is_favorite, code],
        )?;
        Ok(affected > 0)
    }

    // ---- games ----------------------------------------------------------

    /// Bulk insert games, replacing any row with the same id.
    pub fn upsert_games(&mut self, games: &[GameRow]) -> Result<()> {
        let tx = self.conn.transaction()?;
        Self::insert_games_tx(&tx, games)?;
        tx.commit()?;
        Ok(())
    }

    fn insert_games_tx(tx: &Transaction<'_>, games: &[GameRow]) -> Result<()> {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO games
             (id, home_code, away_code, tipoff, venue, round, status,
              home_score, away_score, phase)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )?;
        for game in games {
            stmt.execute(params![
                game.id,
                game.home_code,
                game.away_code,
                game.tipoff,
                game.venue,
                game.round,
                game.status,
                game.home_score,
                game.away_score,
                game.phase
            ])?;
        }
        Ok(())
    }

    /// All games in tipoff order.
    pub fn games_ordered(&self) -> Result<Vec<GameRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, home_code, away_code, tipoff, venue, round, status,
                    home_score, away_score, phase
             FROM games ORDER BY tipoff ASC, id ASC",
        )?;
        let rows = stmt.query_map([], |row| Self::row_to_game(row))?;
        collect_rows(rows)
    }

    /// Zero-or-one lookup by game id.
    pub fn game_by_id(&self, id: &str) -> Result<Option<GameRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, home_code, away_code, tipoff, venue, round, status,
                    home_score, away_score, phase
             FROM games WHERE id = ?",
        )?;
        optional_row(stmt.query_row(params![id], |row| Self::row_to_game(row)))
    }

    /// Number of cached games; the sync-needed check keys off this.
    pub fn game_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))?;
        Ok(count)
    }

    // ---- standings ------------------------------------------------------

    /// Bulk insert standings, replacing any row with the same (team, phase).
    pub fn upsert_standings(&mut self, standings: &[StandingRow]) -> Result<()> {
        let tx = self.conn.transaction()?;
        Self::insert_standings_tx(&tx, standings)?;
        tx.commit()?;
        Ok(())
    }

    fn insert_standings_tx(tx: &Transaction<'_>, standings: &[StandingRow]) -> Result<()> {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO standings
             (team_code, phase, position, played, won, lost, points_for, points_against)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )?;
        for standing in standings {
            stmt.execute(params![
                standing.team_code,
                standing.phase,
                standing.position,
                standing.played,
                standing.won,
                standing.lost,
                standing.points_for,
                standing.points_against
            ])?;
        }
        Ok(())
    }

    /// League table for one phase, ordered by position.
    pub fn standings_by_phase(&self, phase: &str) -> Result<Vec<StandingRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_code, phase, position, played, won, lost, points_for, points_against
             FROM standings WHERE phase = ? ORDER BY position ASC",
        )?;
        let rows = stmt.query_map(params![phase], |row| Self::row_to_standing(row))?;
        collect_rows(rows)
    }

    // ---- players --------------------------------------------------------

    /// Replace the cached roster of one club with a fresh fetch.
    pub fn replace_roster(&mut self, team_code: &str, players: &[PlayerRow]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM players WHERE team_code = ?", params![team_code])?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO players
                 (id, team_code, code, name, jersey, position, height_cm, country, headshot_url)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for player in players {
                stmt.execute(params![
                    player.id,
                    player.team_code,
                    player.code,
                    player.name,
                    player.jersey,
                    player.position,
                    player.height_cm,
                    player.country,
                    player.headshot_url
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Cached roster of one club, jersey order with the unnumbered last.
    pub fn roster(&self, team_code: &str) -> Result<Vec<PlayerRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, team_code, code, name, jersey, position, height_cm, country, headshot_url
             FROM players WHERE team_code = ?
             ORDER BY jersey IS NULL, jersey ASC, name ASC",
        )?;
        let rows = stmt.query_map(params![team_code], |row| Self::row_to_player(row))?;
        collect_rows(rows)
    }

    // ---- meta -----------------------------------------------------------

    pub fn get_meta(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM meta WHERE key = ?")?;
        optional_row(stmt.query_row(params![key], |row| row.get(0)))
    }

    pub fn set_meta(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO meta (key, value) VALUES (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }

    // ---- bulk operations ------------------------------------------------

    /// Swap the whole cached season in one transaction: clear teams, games,
    /// and standings, insert the fresh rows, and stamp the populated flag
    /// and sync timestamp. Readers never see data without the matching
    /// flags.
    pub fn replace_snapshot(
        &mut self,
        teams: &[TeamRow],
        games: &[GameRow],
        standings: &[StandingRow],
        synced_at: &str,
    ) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM standings", [])?;
        tx.execute("DELETE FROM games", [])?;
        tx.execute("DELETE FROM teams", [])?;
        Self::insert_teams_tx(&tx, teams)?;
        Self::insert_games_tx(&tx, games)?;
        Self::insert_standings_tx(&tx, standings)?;
        tx.execute(
            "INSERT OR REPLACE INTO meta (key, value) VALUES (?, ?)",
            params![META_DATA_POPULATED, "1"],
        )?;
        tx.execute(
            "INSERT OR REPLACE INTO meta (key, value) VALUES (?, ?)",
            params![META_LAST_SYNCED_AT, synced_at],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Clear every table (useful for starting fresh).
    pub fn clear_all_data(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM players", [])?;
        tx.execute("DELETE FROM standings", [])?;
        tx.execute("DELETE FROM games", [])?;
        tx.execute("DELETE FROM teams", [])?;
        tx.execute("DELETE FROM meta", [])?;
        tx.commit()?;
        Ok(())
    }

    // ---- row mapping ----------------------------------------------------

    pub(crate) fn row_to_team(row: &Row) -> rusqlite::Result<TeamRow> {
        Ok(TeamRow {
            code: row.get(0)?,
            name: row.get(1)?,
            short_name: row.get(2)?,
            city: row.get(3)?,
            country: row.get(4)?,
            logo_url: row.get(5)?,
            founded: row.get(6)?,
            coach: row.get(7)?,
            is_favorite: row.get(8)?,
        })
    }

    pub(crate) fn row_to_game(row: &Row) -> rusqlite::Result<GameRow> {
        Ok(GameRow {
            id: row.get(0)?,
            home_code: row.get(1)?,
            away_code: row.get(2)?,
            tipoff: row.get(3)?,
            venue: row.get(4)?,
            round: row.get(5)?,
            status: row.get(6)?,
            home_score: row.get(7)?,
            away_score: row.get(8)?,
            phase: row.get(9)?,
        })
    }

    pub(crate) fn row_to_standing(row: &Row) -> rusqlite::Result<StandingRow> {
        Ok(StandingRow {
            team_code: row.get(0)?,
            phase: row.get(1)?,
            position: row.get(2)?,
            played: row.get(3)?,
            won: row.get(4)?,
            lost: row.get(5)?,
            points_for: row.get(6)?,
            points_against: row.get(7)?,
        })
    }

    pub(crate) fn row_to_player(row: &Row) -> rusqlite::Result<PlayerRow> {
        Ok(PlayerRow {
            id: row.get(0)?,
            team_code: row.get(1)?,
            code: row.get(2)?,
            name: row.get(3)?,
            jersey: row.get(4)?,
            position: row.get(5)?,
            height_cm: row.get(6)?,
            country: row.get(7)?,
            headshot_url: row.get(8)?,
        })
    }
}

fn optional_row<T>(result: rusqlite::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn collect_rows<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
) -> Result<Vec<T>> {
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
