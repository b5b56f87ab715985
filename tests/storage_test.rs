//! Unit tests for storage functionality

use courtside::storage::{
    GameRow, LeagueDatabase, PlayerRow, StandingRow, TeamRow, META_DATA_POPULATED,
    META_LAST_SYNCED_AT,
};

fn create_test_db() -> LeagueDatabase {
    LeagueDatabase::new_in_memory().unwrap()
}

fn team_row(code: &str, name: &str) -> TeamRow {
    TeamRow {
        code: code.to_string(),
        name: name.to_string(),
        short_name: code.to_string(),
        city: "Unknown".to_string(),
        country: "Unknown".to_string(),
        logo_url: String::new(),
        founded: None,
        coach: None,
        is_favorite: false,
    }
}

fn game_row(id: &str, tipoff: &str, round: u32) -> GameRow {
    GameRow {
        id: id.to_string(),
        home_code: "MAD".to_string(),
        away_code: "BAR".to_string(),
        tipoff: tipoff.to_string(),
        venue: "WiZink Center".to_string(),
        round,
        status: "scheduled".to_string(),
        home_score: None,
        away_score: None,
        phase: "regular".to_string(),
    }
}

fn standing_row(code: &str, position: u32) -> StandingRow {
    StandingRow {
        team_code: code.to_string(),
        phase: "regular".to_string(),
        position,
        played: 10,
        won: 11 - position,
        lost: 10 - (11 - position),
        points_for: 800,
        points_against: 780,
    }
}

fn player_row(team: &str, code: &str, name: &str, jersey: Option<u8>) -> PlayerRow {
    PlayerRow {
        id: format!("{team}_{code}"),
        team_code: team.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        jersey,
        position: Some("guard".to_string()),
        height_cm: Some(190),
        country: Some("Spain".to_string()),
        headshot_url: None,
    }
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_database_reopens_from_path() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("league.db");

    {
        let mut db = LeagueDatabase::with_path(&path).unwrap();
        db.upsert_teams(&[team_row("MAD", "Real Madrid")]).unwrap();
    }

    let db = LeagueDatabase::with_path(&path).unwrap();
    let teams = db.teams_ordered().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].code, "MAD");
}

#[test]
fn test_upsert_teams_replaces_on_conflict() {
    let mut db = create_test_db();

    db.upsert_teams(&[team_row("MAD", "Real Madrid")]).unwrap();

    let mut updated = team_row("MAD", "Real Madrid Baloncesto");
    updated.city = "Madrid".to_string();
    db.upsert_teams(&[updated.clone()]).unwrap();

    let teams = db.teams_ordered().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0], updated);
}

#[test]
fn test_upsert_teams_is_idempotent() {
    let mut db = create_test_db();
    let rows = vec![team_row("MAD", "Real Madrid"), team_row("BAR", "FC Barcelona")];

    db.upsert_teams(&rows).unwrap();
    let first = db.teams_ordered().unwrap();

    db.upsert_teams(&rows).unwrap();
    let second = db.teams_ordered().unwrap();

    assert_eq!(first, second);
    assert_eq!(second.len(), 2);
}

#[test]
fn test_teams_ordered_by_name() {
    let mut db = create_test_db();
    db.upsert_teams(&[
        team_row("PAN", "Panathinaikos"),
        team_row("BAR", "FC Barcelona"),
        team_row("MAD", "Real Madrid"),
    ])
    .unwrap();

    let names: Vec<String> = db
        .teams_ordered()
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["FC Barcelona", "Panathinaikos", "Real Madrid"]);
}

#[test]
fn test_favorite_flag_scenario() {
    let mut db = create_test_db();
    db.upsert_teams(&[team_row("MAD", "Real Madrid")]).unwrap();
    assert!(!db.team_by_code("MAD").unwrap().unwrap().is_favorite);

    let matched = db.set_favorite("MAD", true).unwrap();
    assert!(matched);
    assert!(db.team_by_code("MAD").unwrap().unwrap().is_favorite);

    let favorites = db.favorite_teams().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].code, "MAD");

    let matched = db.set_favorite("MAD", false).unwrap();
    assert!(matched);
    assert!(db.favorite_teams().unwrap().is_empty());
}

#[test]
fn test_set_favorite_unknown_team_matches_nothing() {
    let mut db = create_test_db();
    assert!(!db.set_favorite("XXX", true).unwrap());
}

#[test]
fn test_games_ordered_by_tipoff() {
    let mut db = create_test_db();
    db.upsert_games(&[
        game_row("g3", "2025-12-19T20:30:00", 17),
        game_row("g1", "2025-10-03T19:00:00", 1),
        game_row("g2", "2025-10-10T20:45:00", 2),
    ])
    .unwrap();

    let ids: Vec<String> = db
        .games_ordered()
        .unwrap()
        .into_iter()
        .map(|g| g.id)
        .collect();
    assert_eq!(ids, vec!["g1", "g2", "g3"]);
    assert_eq!(db.game_count().unwrap(), 3);
}

#[test]
fn test_game_by_id() {
    let mut db = create_test_db();
    db.upsert_games(&[game_row("g1", "2025-10-03T19:00:00", 1)])
        .unwrap();

    assert!(db.game_by_id("g1").unwrap().is_some());
    assert!(db.game_by_id("missing").unwrap().is_none());
}

#[test]
fn test_upsert_games_is_idempotent() {
    let mut db = create_test_db();
    let rows = vec![
        game_row("g1", "2025-10-03T19:00:00", 1),
        game_row("g2", "2025-10-10T20:45:00", 2),
    ];

    db.upsert_games(&rows).unwrap();
    db.upsert_games(&rows).unwrap();

    assert_eq!(db.games_ordered().unwrap(), rows);
}

#[test]
fn test_standings_ordered_by_position() {
    let mut db = create_test_db();
    db.upsert_standings(&[
        standing_row("PAN", 3),
        standing_row("MAD", 1),
        standing_row("BAR", 2),
    ])
    .unwrap();

    let table = db.standings_by_phase("regular").unwrap();
    let positions: Vec<u32> = table.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(table[0].team_code, "MAD");
}

#[test]
fn test_standings_keyed_by_team_and_phase() {
    let mut db = create_test_db();
    let mut playoff = standing_row("MAD", 1);
    playoff.phase = "playoffs".to_string();

    db.upsert_standings(&[standing_row("MAD", 4), playoff]).unwrap();

    assert_eq!(db.standings_by_phase("regular").unwrap().len(), 1);
    assert_eq!(db.standings_by_phase("playoffs").unwrap().len(), 1);
    assert!(db.standings_by_phase("final-four").unwrap().is_empty());
}

#[test]
fn test_replace_roster_touches_only_target_team() {
    let mut db = create_test_db();
    db.replace_roster(
        "MAD",
        &[
            player_row("MAD", "p1", "Campazzo, Facundo", Some(7)),
            player_row("MAD", "p2", "Tavares, Walter", Some(22)),
        ],
    )
    .unwrap();
    db.replace_roster("BAR", &[player_row("BAR", "p3", "Punter, Kevin", Some(0))])
        .unwrap();

    // Refreshing MAD replaces its rows and leaves BAR alone.
    db.replace_roster("MAD", &[player_row("MAD", "p4", "Hezonja, Mario", Some(8))])
        .unwrap();

    let mad = db.roster("MAD").unwrap();
    assert_eq!(mad.len(), 1);
    assert_eq!(mad[0].code, "p4");
    assert_eq!(db.roster("BAR").unwrap().len(), 1);
}

#[test]
fn test_roster_orders_by_jersey_with_unnumbered_last() {
    let mut db = create_test_db();
    db.replace_roster(
        "MAD",
        &[
            player_row("MAD", "p1", "Zeta", Some(23)),
            player_row("MAD", "p2", "Alpha", None),
            player_row("MAD", "p3", "Mid", Some(4)),
        ],
    )
    .unwrap();

    let codes: Vec<String> = db.roster("MAD").unwrap().into_iter().map(|p| p.code).collect();
    assert_eq!(codes, vec!["p3", "p1", "p2"]);
}

#[test]
fn test_meta_roundtrip() {
    let mut db = create_test_db();
    assert!(db.get_meta("missing").unwrap().is_none());

    db.set_meta(META_DATA_POPULATED, "1").unwrap();
    assert_eq!(db.get_meta(META_DATA_POPULATED).unwrap().as_deref(), Some("1"));

    db.set_meta(META_DATA_POPULATED, "0").unwrap();
    assert_eq!(db.get_meta(META_DATA_POPULATED).unwrap().as_deref(), Some("0"));
}

#[test]
fn test_replace_snapshot_swaps_and_stamps() {
    let mut db = create_test_db();
    db.upsert_teams(&[team_row("OLD", "Stale Club")]).unwrap();
    db.upsert_games(&[game_row("old", "2024-01-01T00:00:00", 1)])
        .unwrap();
    db.set_favorite("OLD", true).unwrap();

    db.replace_snapshot(
        &[team_row("MAD", "Real Madrid")],
        &[game_row("g1", "2025-10-03T19:00:00", 1)],
        &[standing_row("MAD", 1)],
        "2025-10-03T08:15:00Z",
    )
    .unwrap();

    // Old rows (and their favorite marks) are bulk-cleared by a resync.
    assert!(db.team_by_code("OLD").unwrap().is_none());
    assert!(db.game_by_id("old").unwrap().is_none());
    assert_eq!(db.teams_ordered().unwrap().len(), 1);
    assert_eq!(db.game_count().unwrap(), 1);
    assert_eq!(db.standings_by_phase("regular").unwrap().len(), 1);
    assert_eq!(db.get_meta(META_DATA_POPULATED).unwrap().as_deref(), Some("1"));
    assert_eq!(
        db.get_meta(META_LAST_SYNCED_AT).unwrap().as_deref(),
        Some("2025-10-03T08:15:00Z")
    );
}

#[test]
fn test_clear_all_data() {
    let mut db = create_test_db();
    db.replace_snapshot(
        &[team_row("MAD", "Real Madrid")],
        &[game_row("g1", "2025-10-03T19:00:00", 1)],
        &[standing_row("MAD", 1)],
        "2025-10-03T08:15:00Z",
    )
    .unwrap();
    db.replace_roster("MAD", &[player_row("MAD", "p1", "Campazzo, Facundo", Some(7))])
        .unwrap();

    db.clear_all_data().unwrap();

    assert!(db.teams_ordered().unwrap().is_empty());
    assert_eq!(db.game_count().unwrap(), 0);
    assert!(db.standings_by_phase("regular").unwrap().is_empty());
    assert!(db.roster("MAD").unwrap().is_empty());
    assert!(db.get_meta(META_DATA_POPULATED).unwrap().is_none());
}
