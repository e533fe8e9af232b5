//! Leaderboard and efficiency charts.
//!
//! [`plot_stat`] ranks the per-game leaders, picks the scatter points to
//! label, lays the labels out and writes the two-panel SVG figure.

pub mod annotate;
pub mod layout;
pub mod render;


use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::types::Stat,
    stats::{rank_leaders, Leader, PlayerRecord},
    Result,
};

pub use annotate::{select_annotations, Annotation};
pub use layout::{declutter, DeclutterOptions, LabelBox, PlacedLabel, Rect};
pub use render::{render_svg, Figure};

/// Players labelled and highlighted on every scatter plot.
pub const DEFAULT_REFERENCE_PLAYERS: [&str; 2] = ["LeBron James", "Stephen Curry"];

#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub output: PathBuf,
    /// Figure size in pixels.
    pub size: (u32, u32),
    pub top_n: usize,
    pub references: Vec<String>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(crate::DEFAULT_OUTPUT_FILE),
            size: (1500, 600),
            top_n: crate::DEFAULT_TOP_N,
            references: DEFAULT_REFERENCE_PLAYERS.map(String::from).to_vec(),
        }
    }
}

/// What was drawn, for reporting back to the user.
#[derive(Debug, Clone)]
pub struct PlotSummary {
    pub output: PathBuf,
    pub leaders: Vec<Leader>,
    pub annotations: Vec<Annotation>,
}

/// Rank, annotate and render `stat` for `records`.
pub fn plot_stat(
    records: &[PlayerRecord],
    stat: Stat,
    options: &PlotOptions,
) -> Result<PlotSummary> {
    let leaders = rank_leaders(records, stat, options.top_n);
    let annotations = select_annotations(records, stat, &leaders, &options.references);

    let figure = Figure {
        records,
        stat,
        leaders: &leaders,
        annotations: &annotations,
        top_n: options.top_n,
    };
    render_svg(&figure, &options.output, options.size)?;
    info!(
        output = %options.output.display(),
        stat = %stat,
        labels = annotations.len(),
        "rendered figure"
    );

    Ok(PlotSummary {
        output: options.output.clone(),
        leaders,
        annotations,
    })
}
