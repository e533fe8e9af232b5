use std::cmp::Ordering;

use serde::Serialize;

use crate::{cli::types::Stat, stats::record::PlayerRecord};


/// One ranked row of the per-game leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leader {
    /// 1-based rank
    pub rank: usize,
    /// Position of the source row in the record list
    #[serde(skip)]
    pub index: usize,
    pub name: String,
    pub per_game: f64,
    pub total: f64,
    pub games: u32,
}

/// Descending order on per-game rate with `NaN` after every number.
fn cmp_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Rank every record by per-game `stat` and keep the first `n`.
///
/// The sort is stable, so ties keep their row order.
pub fn rank_leaders(records: &[PlayerRecord], stat: Stat, n: usize) -> Vec<Leader> {
    let mut rates: Vec<(usize, f64)> = records
        .iter()
        .enumerate()
        .map(|(i, r)| (i, r.per_game(stat)))
        .collect();
    rates.sort_by(|a, b| cmp_descending(a.1, b.1));

    rates
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(pos, (index, per_game))| {
            let record = &records[index];
            Leader {
                rank: pos + 1,
                index,
                name: record.name.clone(),
                per_game,
                total: record.value(stat),
                games: record.games,
            }
        })
        .collect()
}
