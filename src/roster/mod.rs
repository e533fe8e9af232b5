//! Roster export parsing and season filtering.

pub mod load;
pub mod types;

pub use load::{load_season_records, records_from_roster};
pub use types::{RosterFile, RosterPlayer, SeasonStats};
