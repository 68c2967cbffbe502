//! Accepted commands, recorded for replay and debugging.
//!
//! Only commands the engine accepted are recorded; rejected requests leave
//! no trace. Replaying the log against a game built from the same seed and
//! seats reproduces the same state.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::{Cell, Direction};
use crate::pieces::{CharacterName, RoomName, WeaponName};

/// A command the engine accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The turn's die roll.
    Roll { value: u8 },

    /// One step in a direction (corridor step, room entry, or unambiguous exit).
    Move { direction: Direction },

    /// Leaving a room through a chosen exit.
    Exit { direction: Direction, exit: Cell },

    SecretPassage { to: RoomName },

    Hypothesize {
        character: CharacterName,
        weapon: WeaponName,
        room: RoomName,
    },

    /// A respondent's answer. Which card was shown stays private to the
    /// asker and is not logged.
    Dispute {
        respondent: PlayerId,
        disproved: bool,
    },

    Accuse {
        character: CharacterName,
        weapon: WeaponName,
        room: RoomName,
        correct: bool,
    },

    ViewHand,

    EndTurn,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action (the respondent, for disputes).
    pub player: PlayerId,

    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(1),
            Action::Exit {
                direction: Direction::Up,
                exit: Cell::new(18, 12),
            },
            4,
            2,
        );
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
