use crate::cli::types::Season;
use serde::{Deserialize, Serialize};


/// Top-level envelope of a roster export
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterFile {
    pub players: Vec<RosterPlayer>,
}

/// Player entry from a roster export
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterPlayer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub stats: Vec<SeasonStats>,
}

impl RosterPlayer {
    /// Display name, falling back to "first last" when `name` is absent or empty.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!(
                "{} {}",
                self.first_name.as_deref().unwrap_or(""),
                self.last_name.as_deref().unwrap_or("")
            )
            .trim()
            .to_string(),
        }
    }
}

/// Counting stats for one season split (regular season or playoffs)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeasonStats {
    pub season: Season,
    pub playoffs: bool,
    pub pts: f64,
    pub ast: f64,
    /// Offensive rebounds
    pub orb: f64,
    /// Defensive rebounds
    pub drb: f64,
    pub stl: f64,
    pub blk: f64,
    pub min: f64,
    pub gp: u32,
}
