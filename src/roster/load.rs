//! Roster file loading and season filtering.

use std::path::Path;

use tracing::{debug, info};

use crate::{
    cli::types::Season,
    roster::types::RosterFile,
    stats::record::PlayerRecord,
    Result,
};

#[cfg(test)]
mod tests;

/// Read a roster export and flatten the regular-season entries for `season`.
///
/// Missing files and malformed JSON propagate as errors. An empty result is
/// not an error here; callers decide what to do with it.
pub fn load_season_records(path: &Path, season: Season) -> Result<Vec<PlayerRecord>> {
    debug!(path = %path.display(), "reading roster file");
    let contents = std::fs::read_to_string(path)?;
    let roster: RosterFile = serde_json::from_str(&contents)?;

    let records = records_from_roster(&roster, season);
    info!(
        players = roster.players.len(),
        records = records.len(),
        season = season.as_u16(),
        "loaded roster"
    );
    Ok(records)
}

/// One record per stat entry matching `season` with the playoff flag unset,
/// in file order.
pub fn records_from_roster(roster: &RosterFile, season: Season) -> Vec<PlayerRecord> {
    let mut records = Vec::new();
    for player in &roster.players {
        let name = player.display_name();
        for s in &player.stats {
            if s.season == season && !s.playoffs {
                records.push(PlayerRecord::from_season_stats(name.clone(), s));
            }
        }
    }
    records
}
