//! NBA Season Stats Library
//!
//! Loads a roster export, ranks players by per-game production and draws a
//! two-panel chart: a per-game leaderboard and minutes played against season
//! totals with the leaders and a few reference players labelled.
//!
//! ## Features
//!
//! - **Season Filtering**: Regular-season entries for one season, flattened to one row each
//! - **Per-game Leaders**: Stable ranking of Points, Assists, Rebounds, Steals or Blocks per game
//! - **Annotated Scatter**: Leaders and reference players labelled, with overlapping labels pushed apart
//! - **SVG Output**: The figure is written to a file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::{commands::load_records, plot::{plot_stat, PlotOptions}, Season, Stat};
//! use std::path::Path;
//!
//! # fn example() -> nba_stats::Result<()> {
//! let records = load_records(Path::new("2025-26.NBA.Roster.json"), Season::new(2025))?;
//! let summary = plot_stat(&records, Stat::Points, &PlotOptions::default())?;
//! println!("{} leaders plotted", summary.leaders.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a roster file without passing `--file` every time:
//! ```bash
//! export NBA_STATS_ROSTER_FILE=~/data/2025-26.NBA.Roster.json
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod plot;
pub mod roster;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{Season, Stat};
pub use error::{Result, StatsError};
pub use stats::{Leader, PlayerRecord};

pub const ROSTER_FILE_ENV_VAR: &str = "NBA_STATS_ROSTER_FILE";
pub const DEFAULT_ROSTER_FILE: &str = "2025-26.NBA.Roster.json";
pub const DEFAULT_OUTPUT_FILE: &str = "nba_stats.svg";
pub const DEFAULT_TOP_N: usize = 10;
