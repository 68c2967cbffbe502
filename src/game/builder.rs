//! Seating players and starting a game.

use crate::core::{GameConfig, SetupError};
use crate::pieces::CharacterName;

use super::Game;

/// Builder for a [`Game`].
///
/// ```
/// use rust_cluedo::game::GameBuilder;
/// use rust_cluedo::pieces::CharacterName;
///
/// let game = GameBuilder::new()
///     .seat("Ann", CharacterName::MissScarlett)
///     .seat("Bo", CharacterName::ColonelMustard)
///     .seat("Cy", CharacterName::MrsWhite)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(game.player_count(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    seats: Vec<(String, CharacterName)>,
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next seat.
    pub fn seat(mut self, name: impl Into<String>, character: CharacterName) -> Self {
        self.seats.push((name.into(), character));
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Characters still free for the next seat, in fixed order.
    pub fn available_characters(&self) -> Vec<CharacterName> {
        let taken: Vec<_> = self.seats.iter().map(|(_, c)| *c).collect();
        available_characters(&taken)
    }

    /// Build the game and run setup.
    pub fn build(self) -> Result<Game, SetupError> {
        Game::start(self.seats, self.config)
    }
}

/// Characters not in `taken`, in fixed order.
pub fn available_characters(taken: &[CharacterName]) -> Vec<CharacterName> {
    CharacterName::ALL
        .into_iter()
        .filter(|c| !taken.contains(c))
        .collect()
}
