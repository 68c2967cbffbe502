//! A seated player.

use serde::{Deserialize, Serialize};

use super::names::CharacterName;
use crate::cards::{Card, Hand};

/// A player: a name, the character they play, their hand, and whether they
/// are still in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    character: CharacterName,
    hand: Hand,
    alive: bool,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, character: CharacterName) -> Self {
        Self {
            name: name.into(),
            character,
            hand: Hand::new(),
            alive: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn character(&self) -> CharacterName {
        self.character
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn deal(&mut self, card: Card) {
        self.hand.deal(card);
    }

    /// Mark the player eliminated. Returns `false` if they already were.
    pub(crate) fn die(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Piece, WeaponName};

    #[test]
    fn test_die_transitions_once() {
        let mut player = Player::new("Ann", CharacterName::MrsPeacock);
        assert!(player.is_alive());
        assert!(player.die());
        assert!(!player.is_alive());
        assert!(!player.die());
    }

    #[test]
    fn test_deal_adds_to_hand() {
        let mut player = Player::new("Bo", CharacterName::ReverendGreen);
        player.deal(Card::new(Piece::Weapon(WeaponName::Dagger), false));
        assert_eq!(player.hand().len(), 1);
        assert!(player.hand().contains(WeaponName::Dagger));
        assert_eq!(player.name(), "Bo");
        assert_eq!(player.character(), CharacterName::ReverendGreen);
    }
}
