//! Entity model: the fixed named pieces and their mutable tokens.
//!
//! - [`CharacterName`], [`WeaponName`], [`RoomName`]: closed sets with
//!   per-variant constant data
//! - [`Character`], [`Weapon`], [`Room`]: the mutable tokens and room
//!   occupancy lists
//! - [`Piece`]: a sum over the three name sets, so a card can wrap any of them
//! - [`Player`]: a seated player with their character and hand

pub mod names;
pub mod player;
pub mod room;
pub mod token;

pub use names::{CharacterName, RoomName, WeaponName};
pub use player::Player;
pub use room::Room;
pub use token::{Character, Location, Weapon};

use serde::{Deserialize, Serialize};

/// Which of the three sets a [`Piece`] comes from.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum PieceKind {
    Character,
    Weapon,
    Room,
}

/// Any named piece of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Piece {
    Character(CharacterName),
    Weapon(WeaponName),
    Room(RoomName),
}

impl Piece {
    /// Total number of pieces: 6 characters, 6 weapons, 9 rooms.
    pub const COUNT: usize = 21;

    /// Every piece: characters, then weapons, then rooms, each in fixed order.
    pub fn all() -> impl Iterator<Item = Piece> {
        CharacterName::ALL
            .into_iter()
            .map(Piece::Character)
            .chain(WeaponName::ALL.into_iter().map(Piece::Weapon))
            .chain(RoomName::ALL.into_iter().map(Piece::Room))
    }

    #[must_use]
    pub fn kind(self) -> PieceKind {
        match self {
            Piece::Character(_) => PieceKind::Character,
            Piece::Weapon(_) => PieceKind::Weapon,
            Piece::Room(_) => PieceKind::Room,
        }
    }

    /// Display name of the underlying piece.
    #[must_use]
    pub fn name(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Character(c) => std::fmt::Display::fmt(c, f),
            Piece::Weapon(w) => std::fmt::Display::fmt(w, f),
            Piece::Room(r) => std::fmt::Display::fmt(r, f),
        }
    }
}

impl From<CharacterName> for Piece {
    fn from(name: CharacterName) -> Self {
        Piece::Character(name)
    }
}

impl From<WeaponName> for Piece {
    fn from(name: WeaponName) -> Self {
        Piece::Weapon(name)
    }
}

impl From<RoomName> for Piece {
    fn from(name: RoomName) -> Self {
        Piece::Room(name)
    }
}
