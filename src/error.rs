//! Error types for the NBA stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read input: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Season span {input} must cover consecutive years, e.g. 2025-26")]
    InvalidSeasonSpan { input: String },

    #[error("Invalid stat: {input}")]
    InvalidStat { input: String },

    #[error("No regular-season records found for season {season}")]
    NoRecords { season: u16 },

    #[error("Plotting failed: {message}")]
    Plot { message: String },
}

impl StatsError {
    /// Wrap any plotting backend error.
    pub fn plot<E: std::fmt::Display>(err: E) -> Self {
        StatsError::Plot {
            message: err.to_string(),
        }
    }
}
