//! Derived per-game metrics and leaderboard ranking.

pub mod leaders;
pub mod record;

pub use leaders::{rank_leaders, Leader};
pub use record::{per_game, PlayerRecord};
