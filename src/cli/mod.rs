//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::Season;

/// Roster and season selection shared between commands
#[derive(Debug, Args, Default)]
pub struct CommonArgs {
    /// Roster JSON file (or set `NBA_STATS_ROSTER_FILE` env var).
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// Season start year or span (e.g. 2025 or 2025-26).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Number of per-game leaders to rank.
    #[clap(long, short, default_value_t = crate::DEFAULT_TOP_N)]
    pub top: usize,

    /// Log progress to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plot per-game leaders and minutes vs. season totals.
    ///
    /// Prompts for the stat when `--stat` is not given. Writes a two-panel
    /// SVG figure.
    Plot {
        #[clap(flatten)]
        common: CommonArgs,

        /// Stat to plot: Points, Assists, Rebounds, Steals or Blocks.
        #[clap(long)]
        stat: Option<String>,

        /// Player always labelled and highlighted (repeatable). Defaults to
        /// LeBron James and Stephen Curry.
        #[clap(long = "reference", short = 'r')]
        references: Option<Vec<String>>,

        /// Where to write the figure.
        #[clap(long, short, default_value = crate::DEFAULT_OUTPUT_FILE)]
        output: PathBuf,
    },

    /// Print the per-game leaders for a stat.
    Leaders {
        #[clap(flatten)]
        common: CommonArgs,

        /// Stat to rank: Points, Assists, Rebounds, Steals or Blocks.
        #[clap(long)]
        stat: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA season leaders and efficiency charts")]
pub struct NbaStats {
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl Commands {
    /// Command run when no subcommand is given: interactive plot with defaults.
    pub fn default_plot() -> Self {
        Commands::Plot {
            common: CommonArgs {
                top: crate::DEFAULT_TOP_N,
                ..CommonArgs::default()
            },
            stat: None,
            references: None,
            output: PathBuf::from(crate::DEFAULT_OUTPUT_FILE),
        }
    }

    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Plot { common, .. } | Commands::Leaders { common, .. } => common,
        }
    }
}
