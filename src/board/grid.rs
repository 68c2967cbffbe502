//! The static floor plan.
//!
//! One byte per cell:
//!
//! | Code | Meaning |
//! |---|---|
//! | `x` | empty (outside the playable area) |
//! | `.` | corridor |
//! | `K B C I D L H O S` | a room, see [`RoomName::code`] |
//! | `\` | the Kitchen / Study passage corners |
//! | `/` | the Conservatory / Lounge passage corners |

use serde::{Deserialize, Serialize};

use super::geometry::{COLS, ROWS};
use crate::pieces::RoomName;

pub(crate) const GRID: [&str; ROWS] = [
    r"xxxxxxxxxxxxxxxxxxxxxxxx",
    r"xxxxxxxxx.xxxx.xxxxxxxxx",
    r"KKKKK\x...BBBB...xCCCCC/",
    r"KKKKKK..BBBBBBBB..CCCCCC",
    r"KKKKKK..BBBBBBBB..CCCCCC",
    r"KKKKKK..BBBBBBBB..CCCCCC",
    r"KKKKKK..BBBBBBBB...CCCCx",
    r"xKKKKK..BBBBBBBB........",
    r"........BBBBBBBB.......x",
    r"x.................IIIIII",
    r"DDDDD.............IIIIII",
    r"DDDDDDDD..xxxxx...IIIIII",
    r"DDDDDDDD..xxxxx...IIIIII",
    r"DDDDDDDD..xxxxx...IIIIII",
    r"DDDDDDDD..xxxxx........x",
    r"DDDDDDDD..xxxxx...LLLLLx",
    r"DDDDDDDD..xxxxx..LLLLLLL",
    r"x.........xxxxx..LLLLLLL",
    r".................LLLLLLL",
    r"x........HHHHHH...LLLLLx",
    r"/OOOOOO..HHHHHH.........",
    r"OOOOOOO..HHHHHH........x",
    r"OOOOOOO..HHHHHH..SSSSSS\",
    r"OOOOOOO..HHHHHH..SSSSSSS",
    r"OOOOOOO..HHHHHH..SSSSSSS",
    r"OOOOOOx.xHHHHHHx.xSSSSSS",
];

/// One of the two diagonal secret passages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Passage {
    /// Kitchen (north-west) to Study (south-east).
    KitchenStudy,
    /// Conservatory (north-east) to Lounge (south-west).
    ConservatoryLounge,
}

impl Passage {
    pub const ALL: [Passage; 2] = [Passage::KitchenStudy, Passage::ConservatoryLounge];

    /// The two rooms this passage links.
    #[must_use]
    pub const fn rooms(self) -> (RoomName, RoomName) {
        match self {
            Passage::KitchenStudy => (RoomName::Kitchen, RoomName::Study),
            Passage::ConservatoryLounge => (RoomName::Conservatory, RoomName::Lounge),
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Passage::KitchenStudy => b'\\',
            Passage::ConservatoryLounge => b'/',
        }
    }

    /// The room on the far side of this passage from `room`, if `room` is one
    /// of its ends.
    #[must_use]
    pub fn other_end(self, room: RoomName) -> Option<RoomName> {
        let (a, b) = self.rooms();
        if room == a {
            Some(b)
        } else if room == b {
            Some(a)
        } else {
            None
        }
    }
}

/// What occupies a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Corridor,
    Room(RoomName),
    Passage(Passage),
}

impl CellKind {
    /// Decode a grid byte. Returns `None` for bytes outside the code table.
    #[must_use]
    pub fn from_code(code: u8) -> Option<CellKind> {
        match code {
            b'x' => Some(CellKind::Empty),
            b'.' => Some(CellKind::Corridor),
            b'\\' => Some(CellKind::Passage(Passage::KitchenStudy)),
            b'/' => Some(CellKind::Passage(Passage::ConservatoryLounge)),
            other => RoomName::from_code(other).map(CellKind::Room),
        }
    }

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            CellKind::Empty => b'x',
            CellKind::Corridor => b'.',
            CellKind::Room(room) => room.code(),
            CellKind::Passage(passage) => passage.code(),
        }
    }

    #[must_use]
    pub fn is_corridor(self) -> bool {
        matches!(self, CellKind::Corridor)
    }

    /// The room this cell belongs to, if it is a room cell.
    #[must_use]
    pub fn room(self) -> Option<RoomName> {
        match self {
            CellKind::Room(room) => Some(room),
            _ => None,
        }
    }
}

/// Raw byte at `(row, col)`. Callers bounds-check first.
pub(crate) fn code_at(row: usize, col: usize) -> u8 {
    GRID[row].as_bytes()[col]
}

/// Every `(row, col, byte)` of the grid in row-major order.
pub(crate) fn codes() -> impl Iterator<Item = (usize, usize, u8)> {
    (0..ROWS).flat_map(|row| (0..COLS).map(move |col| (row, col, code_at(row, col))))
}
