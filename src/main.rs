//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use nba_stats::{
    cli::{Commands, NbaStats},
    commands::{
        leaders::{handle_leaders, LeadersParams},
        plot::{handle_plot, PlotParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI.
fn main() -> Result<()> {
    let app = NbaStats::parse();
    let command = app.command.unwrap_or_else(Commands::default_plot);
    init_logging(command.common().verbose);

    match command {
        Commands::Plot {
            common,
            stat,
            references,
            output,
        } => {
            handle_plot(PlotParams {
                file: common.file,
                season: common.season,
                stat,
                top: common.top,
                references,
                output,
            })?;
        }

        Commands::Leaders { common, stat, json } => {
            handle_leaders(LeadersParams {
                file: common.file,
                season: common.season,
                stat,
                top: common.top,
                as_json: json,
            })?;
        }
    }

    Ok(())
}
