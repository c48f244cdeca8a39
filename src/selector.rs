//! Filter and sort selectors.
//!
//! Selectors are closed enums inside the crate. Raw strings only appear at the
//! edges: [`FromStr`] rejects unknown values (CLI, config), while
//! `from_attribute` falls back to the neutral selector for values read off
//! page controls.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::CompanionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSelector {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
    /// Recipes that take at most `QUICK_MAX_MINUTES`
    Quick,
}

impl FilterSelector {
    pub const ALL: [FilterSelector; 5] = [
        FilterSelector::All,
        FilterSelector::Easy,
        FilterSelector::Medium,
        FilterSelector::Hard,
        FilterSelector::Quick,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterSelector::All => "all",
            FilterSelector::Easy => "easy",
            FilterSelector::Medium => "medium",
            FilterSelector::Hard => "hard",
            FilterSelector::Quick => "quick",
        }
    }

    /// Parse a `data-filter` attribute value. Unknown values mean `All`.
    pub fn from_attribute(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!("Unknown filter '{}', showing all recipes", value);
            FilterSelector::All
        })
    }
}

impl FromStr for FilterSelector {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterSelector::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| CompanionError::UnknownFilter(s.to_string()))
    }
}

impl fmt::Display for FilterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortSelector {
    #[default]
    None,
    /// Alphabetical by title
    Name,
    /// Fastest first
    Time,
}

impl SortSelector {
    pub const ALL: [SortSelector; 3] = [SortSelector::None, SortSelector::Name, SortSelector::Time];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortSelector::None => "none",
            SortSelector::Name => "name",
            SortSelector::Time => "time",
        }
    }

    /// Parse a `data-sort` attribute value. Unknown values mean `None`.
    pub fn from_attribute(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!("Unknown sort '{}', keeping original order", value);
            SortSelector::None
        })
    }
}

impl FromStr for SortSelector {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortSelector::ALL
            .into_iter()
            .find(|o| o.as_str() == s.trim())
            .ok_or_else(|| CompanionError::UnknownSort(s.to_string()))
    }
}

impl fmt::Display for SortSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
