//! Unit tests for season filtering

use super::*;
use crate::roster::types::{RosterPlayer, SeasonStats};

fn entry(season: u16, playoffs: bool, pts: f64) -> SeasonStats {
    SeasonStats {
        season: Season::new(season),
        playoffs,
        pts,
        ast: 5.0,
        orb: 2.0,
        drb: 8.0,
        stl: 1.0,
        blk: 3.0,
        min: 100.0,
        gp: 4,
    }
}

fn named(name: &str, stats: Vec<SeasonStats>) -> RosterPlayer {
    RosterPlayer {
        name: Some(name.to_string()),
        first_name: None,
        last_name: None,
        stats,
    }
}

#[test]
fn test_records_filter_season_and_playoffs() {
    let roster = RosterFile {
        players: vec![
            named(
                "Alpha",
                vec![
                    entry(2024, false, 1.0),
                    entry(2025, false, 2.0),
                    entry(2025, true, 3.0),
                ],
            ),
            named("Beta", vec![entry(2025, true, 4.0)]),
            named("Gamma", vec![entry(2025, false, 5.0)]),
        ],
    };

    let records = records_from_roster(&roster, Season::new(2025));
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Alpha");
    assert_eq!(records[0].points, 2.0);
    assert_eq!(records[1].name, "Gamma");
    assert_eq!(records[1].points, 5.0);
}

#[test]
fn test_records_sum_rebounds() {
    let roster = RosterFile {
        players: vec![named("Alpha", vec![entry(2025, false, 1.0)])],
    };

    let records = records_from_roster(&roster, Season::new(2025));
    assert_eq!(records[0].rebounds, 10.0);
    assert_eq!(records[0].assists, 5.0);
    assert_eq!(records[0].steals, 1.0);
    assert_eq!(records[0].blocks, 3.0);
    assert_eq!(records[0].minutes, 100.0);
    assert_eq!(records[0].games, 4);
}

#[test]
fn test_multiple_regular_season_entries_each_produce_a_row() {
    // Mid-season trades show up as separate regular-season entries.
    let roster = RosterFile {
        players: vec![named(
            "Traded",
            vec![entry(2025, false, 10.0), entry(2025, false, 20.0)],
        )],
    };

    let records = records_from_roster(&roster, Season::new(2025));
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.name == "Traded"));
}

#[test]
fn test_no_matching_season_is_empty() {
    let roster = RosterFile {
        players: vec![named("Alpha", vec![entry(2019, false, 1.0)])],
    };

    assert!(records_from_roster(&roster, Season::new(2025)).is_empty());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_season_records(
        Path::new("/definitely/not/here/roster.json"),
        Season::default(),
    );
    match result {
        Err(crate::StatsError::Io(_)) => (),
        other => panic!("Expected Io error, got {:?}", other),
    }
}
