//! The fixed sets of characters, weapons and rooms.
//!
//! Each set is a closed enum carrying its per-variant constant data (start
//! cells, board symbols, grid codes) in `match` tables, so adding or missing
//! a variant is a compile error rather than a runtime lookup failure.

use serde::{Deserialize, Serialize};

use crate::board::Cell;

/// The six suspects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
)]
pub enum CharacterName {
    #[strum(to_string = "Miss Scarlett")]
    MissScarlett,
    #[strum(to_string = "Professor Plum")]
    ProfessorPlum,
    #[strum(to_string = "Mrs. Peacock")]
    MrsPeacock,
    #[strum(to_string = "Mrs. White")]
    MrsWhite,
    #[strum(to_string = "Reverend Green")]
    ReverendGreen,
    #[strum(to_string = "Colonel Mustard")]
    ColonelMustard,
}

impl CharacterName {
    /// All characters in their fixed order.
    pub const ALL: [CharacterName; 6] = [
        CharacterName::MissScarlett,
        CharacterName::ProfessorPlum,
        CharacterName::MrsPeacock,
        CharacterName::MrsWhite,
        CharacterName::ReverendGreen,
        CharacterName::ColonelMustard,
    ];

    /// Position in the fixed order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The corridor cell this character's token starts on.
    #[must_use]
    pub const fn start(self) -> Cell {
        match self {
            CharacterName::MissScarlett => Cell::new(25, 7),
            CharacterName::ProfessorPlum => Cell::new(20, 23),
            CharacterName::MrsPeacock => Cell::new(7, 23),
            CharacterName::MrsWhite => Cell::new(1, 14),
            CharacterName::ReverendGreen => Cell::new(1, 9),
            CharacterName::ColonelMustard => Cell::new(18, 0),
        }
    }
}

/// The six weapons.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
)]
pub enum WeaponName {
    Candlestick,
    Dagger,
    #[strum(to_string = "Lead Pipe")]
    LeadPipe,
    Revolver,
    Rope,
    Spanner,
}

impl WeaponName {
    /// All weapons in their fixed order.
    pub const ALL: [WeaponName; 6] = [
        WeaponName::Candlestick,
        WeaponName::Dagger,
        WeaponName::LeadPipe,
        WeaponName::Revolver,
        WeaponName::Rope,
        WeaponName::Spanner,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter marker used when drawing the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            WeaponName::Candlestick => 'C',
            WeaponName::Dagger => 'D',
            WeaponName::LeadPipe => 'P',
            WeaponName::Revolver => 'G',
            WeaponName::Rope => 'R',
            WeaponName::Spanner => 'S',
        }
    }
}

/// The nine rooms of the mansion.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
)]
pub enum RoomName {
    Kitchen,
    Ballroom,
    Conservatory,
    #[strum(to_string = "Billiard Room")]
    BilliardRoom,
    #[strum(to_string = "Dining Room")]
    DiningRoom,
    Library,
    Hall,
    Lounge,
    Study,
}

impl RoomName {
    /// All rooms in their fixed order.
    pub const ALL: [RoomName; 9] = [
        RoomName::Kitchen,
        RoomName::Ballroom,
        RoomName::Conservatory,
        RoomName::BilliardRoom,
        RoomName::DiningRoom,
        RoomName::Library,
        RoomName::Hall,
        RoomName::Lounge,
        RoomName::Study,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The code marking this room's cells in the board grid.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            RoomName::Kitchen => b'K',
            RoomName::Ballroom => b'B',
            RoomName::Conservatory => b'C',
            RoomName::BilliardRoom => b'I',
            RoomName::DiningRoom => b'D',
            RoomName::Library => b'L',
            RoomName::Hall => b'H',
            RoomName::Lounge => b'O',
            RoomName::Study => b'S',
        }
    }

    /// Inverse of [`RoomName::code`].
    #[must_use]
    pub const fn from_code(code: u8) -> Option<RoomName> {
        match code {
            b'K' => Some(RoomName::Kitchen),
            b'B' => Some(RoomName::Ballroom),
            b'C' => Some(RoomName::Conservatory),
            b'I' => Some(RoomName::BilliardRoom),
            b'D' => Some(RoomName::DiningRoom),
            b'L' => Some(RoomName::Library),
            b'H' => Some(RoomName::Hall),
            b'O' => Some(RoomName::Lounge),
            b'S' => Some(RoomName::Study),
            _ => None,
        }
    }
}
