//! Leaders command: per-game leaderboard on stdout.

use std::path::PathBuf;

use crate::{
    cli::types::{Season, Stat},
    stats::{rank_leaders, Leader},
    Result,
};

use super::{load_records, resolve_roster_path};

/// Configuration parameters for the leaders command.
#[derive(Debug, Clone)]
pub struct LeadersParams {
    pub file: Option<PathBuf>,
    pub season: Season,
    pub stat: String,
    pub top: usize,
    pub as_json: bool,
}

/// Handle the leaders command.
///
/// Returns the ranked leaders, or `None` when the stat is not recognised.
pub fn handle_leaders(params: LeadersParams) -> Result<Option<Vec<Leader>>> {
    let path = resolve_roster_path(params.file);
    let records = load_records(&path, params.season)?;

    let Some(stat) = Stat::from_choice(&params.stat) else {
        println!("Invalid stat choice.");
        return Ok(None);
    };

    let leaders = rank_leaders(&records, stat, params.top);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&leaders)?); // tarpaulin::skip
    } else {
        println!("{} leaders, {} season", stat.per_game_label(), params.season.span());
        for l in &leaders {
            // tarpaulin::skip - console output
            println!(
                "{:>3}. {} {:.2} ({} in {} games)",
                l.rank, l.name, l.per_game, l.total, l.games
            );
        }
    }

    Ok(Some(leaders))
}
