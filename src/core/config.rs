//! Game configuration.
//!
//! The rules themselves are fixed; configuration only covers what a host
//! legitimately varies between games: the RNG seed. The player-count range
//! and dice are constants exposed here so a presentation layer can validate
//! its prompts against the same contract the engine enforces.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 3;

/// Most players a game can start with (one per character).
pub const MAX_PLAYERS: usize = 6;

/// Faces on the single movement die.
pub const DIE_SIDES: u8 = 6;

/// Valid player counts, inclusive.
#[must_use]
pub const fn player_count_range() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

/// Valid movement rolls, inclusive.
#[must_use]
pub const fn roll_range() -> RangeInclusive<u8> {
    1..=DIE_SIDES
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the game's single RNG.
    pub seed: u64,
}

impl GameConfig {
    /// Configuration with an explicit seed, for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed }
    }

    /// Replace the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    /// Seeds from the wall clock, so casual games differ from run to run.
    fn default() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self { seed }
    }
}
