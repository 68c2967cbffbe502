//! How a game ends.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Named the full solution in an accusation.
    SolvedBy(PlayerId),
    /// Every other player was eliminated by false accusations.
    LastStanding(PlayerId),
}

impl GameResult {
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match self {
            GameResult::SolvedBy(p) | GameResult::LastStanding(p) => *p,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::SolvedBy(p) => write!(f, "{} solved the murder", p),
            GameResult::LastStanding(p) => write!(f, "{} is the last player standing", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::SolvedBy(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let standing = GameResult::LastStanding(PlayerId::new(2));
        assert_eq!(standing.winner(), PlayerId::new(2));
        assert_eq!(standing.to_string(), "Seat 2 is the last player standing");
    }
}
