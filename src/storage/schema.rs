//! Database connection and schema management

use crate::error::CourtsideError;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Connection manager for the local league cache.
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
}

impl LeagueDatabase {
    /// Open the per-user database and ensure tables exist.
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the cache directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::with_path(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    pub fn with_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening league database");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| CourtsideError::Store {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("courtside").join("league.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                code TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                short_name TEXT NOT NULL,
                city TEXT NOT NULL,
                country TEXT NOT NULL,
                logo_url TEXT NOT NULL,
                founded INTEGER,
                coach TEXT,
                is_favorite INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS games (
                id TEXT PRIMARY KEY,
                home_code TEXT NOT NULL,
                away_code TEXT NOT NULL,
                tipoff TEXT NOT NULL,
                venue TEXT NOT NULL,
                round INTEGER NOT NULL,
                status TEXT NOT NULL,
                home_score INTEGER,
                away_score INTEGER,
                phase TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS standings (
                team_code TEXT NOT NULL,
                phase TEXT NOT NULL,
                position INTEGER NOT NULL,
                played INTEGER NOT NULL,
                won INTEGER NOT NULL,
                lost INTEGER NOT NULL,
                points_for INTEGER NOT NULL,
                points_against INTEGER NOT NULL,
                PRIMARY KEY (team_code, phase)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id TEXT PRIMARY KEY,
                team_code TEXT NOT NULL,
                code TEXT NOT NULL,
                name TEXT NOT NULL,
                jersey INTEGER,
                position TEXT,
                height_cm INTEGER,
                country TEXT,
                headshot_url TEXT
            )",
            [],
        )?;

        // Sync flags and other small persisted state
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_games_tipoff ON games(tipoff)",
            [],
        )?;
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_games_home ON games(home_code)",
            [],
        )?;
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_games_away ON games(away_code)",
            [],
        )?;
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_standings_position
             ON standings(phase, position)",
            [],
        )?;
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_code)",
            [],
        )?;

        Ok(())
    }
}
