//! Helpers shared by the plot and leaders commands.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{
    error::StatsError, roster::load_season_records, stats::PlayerRecord, Result, Season,
    DEFAULT_ROSTER_FILE, ROSTER_FILE_ENV_VAR,
};

/// Pick the roster file: explicit path, then `NBA_STATS_ROSTER_FILE`, then
/// the default file name in the working directory.
pub fn resolve_roster_path(file: Option<PathBuf>) -> PathBuf {
    file.or_else(|| {
        std::env::var(ROSTER_FILE_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_FILE))
}

/// Load the regular-season records for `season`, failing when none match.
pub fn load_records(path: &Path, season: Season) -> Result<Vec<PlayerRecord>> {
    let records = load_season_records(path, season)?;
    if records.is_empty() {
        warn!(path = %path.display(), season = season.as_u16(), "no matching stat entries");
        return Err(StatsError::NoRecords {
            season: season.as_u16(),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_roster_path_explicit_wins() {
        let path = resolve_roster_path(Some(PathBuf::from("custom.json")));
        assert_eq!(path, PathBuf::from("custom.json"));
    }

    #[test]
    fn test_load_records_empty_season_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, r#"{"players": [{"name": "Solo", "stats": []}]}"#).unwrap();

        match load_records(&path, Season::new(2025)) {
            Err(StatsError::NoRecords { season }) => assert_eq!(season, 2025),
            other => panic!("Expected NoRecords error, got {:?}", other),
        }
    }
}
