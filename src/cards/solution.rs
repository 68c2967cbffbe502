//! The secret envelope.

use serde::{Deserialize, Serialize};

use crate::pieces::{CharacterName, Piece, PieceKind, RoomName, WeaponName};

/// The three hidden cards: who, with what, where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    pub character: CharacterName,
    pub weapon: WeaponName,
    pub room: RoomName,
}

impl Solution {
    #[must_use]
    pub fn new(character: CharacterName, weapon: WeaponName, room: RoomName) -> Self {
        Self {
            character,
            weapon,
            room,
        }
    }

    /// The solution pieces in envelope order: character, weapon, room.
    #[must_use]
    pub fn pieces(&self) -> [Piece; 3] {
        [
            Piece::Character(self.character),
            Piece::Weapon(self.weapon),
            Piece::Room(self.room),
        ]
    }

    #[must_use]
    pub fn contains(&self, piece: Piece) -> bool {
        self.pieces().contains(&piece)
    }

    /// The first component of a guess that differs from the solution,
    /// checked in envelope order. `None` means the guess is correct.
    #[must_use]
    pub fn first_mismatch(
        &self,
        character: CharacterName,
        weapon: WeaponName,
        room: RoomName,
    ) -> Option<PieceKind> {
        if character != self.character {
            Some(PieceKind::Character)
        } else if weapon != self.weapon {
            Some(PieceKind::Weapon)
        } else if room != self.room {
            Some(PieceKind::Room)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with the {} in the {}", self.character, self.weapon, self.room)
    }
}
