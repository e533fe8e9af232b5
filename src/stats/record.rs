use crate::cli::types::Stat;
use crate::roster::types::SeasonStats;
use serde::Serialize;

/// Flat per-player row for one regular season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub points: f64,
    pub assists: f64,
    /// Offensive plus defensive rebounds
    pub rebounds: f64,
    pub steals: f64,
    pub blocks: f64,
    pub minutes: f64,
    pub games: u32,
}

impl PlayerRecord {
    pub fn from_season_stats(name: String, s: &SeasonStats) -> Self {
        Self {
            name,
            points: s.pts,
            assists: s.ast,
            rebounds: s.orb + s.drb,
            steals: s.stl,
            blocks: s.blk,
            minutes: s.min,
            games: s.gp,
        }
    }

    /// Season total for the given stat column.
    pub fn value(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Points => self.points,
            Stat::Assists => self.assists,
            Stat::Rebounds => self.rebounds,
            Stat::Steals => self.steals,
            Stat::Blocks => self.blocks,
        }
    }

    /// Season total divided by games played. Zero games yields a
    /// non-finite value.
    pub fn per_game(&self, stat: Stat) -> f64 {
        per_game(self.value(stat), self.games)
    }
}

pub fn per_game(total: f64, games: u32) -> f64 {
    total / games as f64
}
