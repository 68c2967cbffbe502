//! Accusations against the envelope.

use serde::{Deserialize, Serialize};

use crate::cards::Solution;
use crate::pieces::{CharacterName, RoomName, WeaponName};

/// A final guess at all three solution components. Unlike a hypothesis the
/// room is free to choose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accusation {
    pub room: RoomName,
    pub character: CharacterName,
    pub weapon: WeaponName,
}

impl Accusation {
    #[must_use]
    pub fn new(room: RoomName, character: CharacterName, weapon: WeaponName) -> Self {
        Self {
            room,
            character,
            weapon,
        }
    }

    /// Compare against the envelope, character first, then weapon, then room.
    #[must_use]
    pub fn judge(&self, solution: &Solution) -> AccusationOutcome {
        match solution.first_mismatch(self.character, self.weapon, self.room) {
            None => AccusationOutcome::Correct,
            Some(_) => AccusationOutcome::Wrong,
        }
    }
}

/// Result of an accusation. A wrong accusation reveals nothing about which
/// component was wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccusationOutcome {
    /// The accuser wins.
    Correct,
    /// The accuser is eliminated.
    Wrong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge() {
        let solution = Solution::new(
            CharacterName::ColonelMustard,
            WeaponName::Candlestick,
            RoomName::Kitchen,
        );
        let right = Accusation::new(
            RoomName::Kitchen,
            CharacterName::ColonelMustard,
            WeaponName::Candlestick,
        );
        assert_eq!(right.judge(&solution), AccusationOutcome::Correct);

        let wrong_room = Accusation {
            room: RoomName::Study,
            ..right
        };
        assert_eq!(wrong_room.judge(&solution), AccusationOutcome::Wrong);

        let wrong_weapon = Accusation {
            weapon: WeaponName::Rope,
            ..right
        };
        assert_eq!(wrong_weapon.judge(&solution), AccusationOutcome::Wrong);
    }
}
