//! Plot command: leader bars plus annotated minutes scatter.
//!
//! Loads the season, asks for a stat when none was passed, validates it and
//! writes the figure. An unknown stat is reported to the user and is not an
//! error.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::types::{Season, Stat},
    plot::{plot_stat, PlotOptions, PlotSummary},
    Result,
};

use super::{load_records, prompt::prompt_for_stat, resolve_roster_path};

/// Configuration parameters for the plot command.
#[derive(Debug, Clone)]
pub struct PlotParams {
    pub file: Option<PathBuf>,
    pub season: Season,
    /// Raw stat text; prompts when `None`.
    pub stat: Option<String>,
    pub top: usize,
    /// Reference players; the built-in pair when `None`.
    pub references: Option<Vec<String>>,
    pub output: PathBuf,
}

#[derive(Debug)]
pub enum PlotOutcome {
    Rendered(PlotSummary),
    /// The normalized input matched no stat; nothing was drawn.
    InvalidChoice(String),
}

/// Handle the plot command
pub fn handle_plot(params: PlotParams) -> Result<PlotOutcome> {
    let path = resolve_roster_path(params.file);
    let records = load_records(&path, params.season)?;

    let raw = match params.stat {
        Some(stat) => stat,
        None => prompt_for_stat()?, // tarpaulin::skip - terminal input
    };

    let Some(stat) = Stat::from_choice(&raw) else {
        println!("Invalid stat choice.");
        return Ok(PlotOutcome::InvalidChoice(raw));
    };

    let mut options = PlotOptions {
        output: params.output,
        top_n: params.top,
        ..PlotOptions::default()
    };
    if let Some(references) = params.references {
        options.references = references;
    }

    info!(records = records.len(), stat = %stat, "plotting");
    let summary = plot_stat(&records, stat, &options)?;
    println!("✓ Chart written to {}", summary.output.display());

    Ok(PlotOutcome::Rendered(summary))
}
