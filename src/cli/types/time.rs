//! Season type for roster stat entries.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Starting year of an NBA season.
///
/// Roster exports key stat entries by the year the season tips off, so the
/// 2025-26 season (`2025-26.NBA.Roster.json`) is stored as `2025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The season as written in roster file names, e.g. `2025-26`.
    pub fn span(&self) -> String {
        format!("{}-{:02}", self.0, (u32::from(self.0) + 1) % 100)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts a plain starting year (`2025`) or a span (`2025-26`).
impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let Some((start, end)) = s.split_once('-') else {
            return Ok(Self(s.parse()?));
        };

        let season = Self(start.parse()?);
        if season.span() != format!("{}-{}", start, end) {
            return Err(StatsError::InvalidSeasonSpan {
                input: s.to_string(),
            });
        }
        Ok(season)
    }
}
