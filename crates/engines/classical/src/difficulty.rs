//! Named difficulty levels and the search parameters they map to.

use std::time::Duration;

use chess_core::SearchLimits;
use tracing::debug;

/// Search depth and time budget for a named difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub name: &'static str,
    /// Plies searched, at least 1
    pub depth: u8,
    /// Wall-clock budget in milliseconds, always positive
    pub time_budget_ms: u64,
}

impl DifficultyProfile {
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits::depth_and_time(self.depth, self.time_budget())
    }
}

pub const PROFILES: [DifficultyProfile; 4] = [
    DifficultyProfile {
        name: "easy",
        depth: 1,
        time_budget_ms: 500,
    },
    DifficultyProfile {
        name: "medium",
        depth: 2,
        time_budget_ms: 1000,
    },
    DifficultyProfile {
        name: "hard",
        depth: 3,
        time_budget_ms: 2000,
    },
    DifficultyProfile {
        name: "expert",
        depth: 4,
        time_budget_ms: 3000,
    },
];

/// Profile used for any name not in [`PROFILES`].
pub const DEFAULT_PROFILE: DifficultyProfile = PROFILES[1];

/// Look up a difficulty by exact name, falling back to [`DEFAULT_PROFILE`].
///
/// An unknown name is not an error.
pub fn resolve(name: &str) -> DifficultyProfile {
    match PROFILES.iter().find(|p| p.name == name) {
        Some(profile) => *profile,
        None => {
            debug!(name, fallback = DEFAULT_PROFILE.name, "unknown difficulty");
            DEFAULT_PROFILE
        }
    }
}

/// Names of all recognised difficulties, easiest first.
pub fn names() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.name)
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
