//! Plottable stat columns and user-input normalization.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Counting stats that can be ranked and plotted.
///
/// # Examples
///
/// ```rust
/// use nba_stats::Stat;
///
/// assert_eq!(Stat::from_choice("  rebounds "), Some(Stat::Rebounds));
/// assert_eq!(Stat::Points.per_game_label(), "Points Per Game");
/// assert_eq!(Stat::from_choice("Minutes"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Points,
    Assists,
    Rebounds,
    Steals,
    Blocks,
}

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::Points,
        Stat::Assists,
        Stat::Rebounds,
        Stat::Steals,
        Stat::Blocks,
    ];

    /// Column name as shown to the user.
    pub fn name(&self) -> &'static str {
        match self {
            Stat::Points => "Points",
            Stat::Assists => "Assists",
            Stat::Rebounds => "Rebounds",
            Stat::Steals => "Steals",
            Stat::Blocks => "Blocks",
        }
    }

    pub fn per_game_label(&self) -> String {
        format!("{} Per Game", self.name())
    }

    /// Normalize free-text input (trim + title case) and match it exactly
    /// against the stat names.
    pub fn from_choice(raw: &str) -> Option<Self> {
        let normalized = title_case(raw.trim());
        Stat::ALL.into_iter().find(|s| s.name() == normalized)
    }

    /// Comma-separated list of every stat name, for prompts and help text.
    pub fn available() -> String {
        Stat::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Stat {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::from_choice(s).ok_or_else(|| StatsError::InvalidStat {
            input: s.to_string(),
        })
    }
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
///
/// Any non-alphabetic character starts a new word, so `"three-point"`
/// becomes `"Three-Point"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
