//! Command implementations for the NBA stats CLI

pub mod common;
pub mod leaders;
pub mod plot;
pub mod prompt;

pub use common::{load_records, resolve_roster_path};
