//! Type-safe wrappers and enums for roster stat data.

pub mod stat;
pub mod time;


pub use stat::Stat;
pub use time::Season;
