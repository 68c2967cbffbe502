//! Board topology: static spatial queries over the mansion floor plan.
//!
//! Nothing here mutates. The grid, the room layouts and the passage links
//! are fixed tables; token positions live in [`crate::core::GameState`].
//!
//! ## Example
//!
//! ```
//! use rust_cluedo::board::{Board, Cell, CellKind};
//! use rust_cluedo::pieces::RoomName;
//!
//! let board = Board::new();
//! assert_eq!(board.cell_at(8, 4).unwrap(), CellKind::Corridor);
//! assert_eq!(board.cell_at(7, 4).unwrap(), CellKind::Room(RoomName::Kitchen));
//! assert!(board.is_doorway(RoomName::Kitchen, Cell::new(8, 4), Cell::new(7, 4)));
//! assert_eq!(board.connection(RoomName::Kitchen), Some(RoomName::Study));
//! assert!(board.cell_at(26, 0).is_err());
//! ```

pub mod geometry;
pub mod grid;
pub mod layout;

pub use geometry::{Cell, Direction, COLS, ROWS};
pub use grid::{CellKind, Passage};
pub use layout::{LayoutCell, RoomLayout};

use smallvec::SmallVec;

use crate::core::SetupError;
use crate::pieces::RoomName;

/// Errors from board queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("unknown grid code {code:?} at ({row}, {col})")]
    UnknownCode { code: char, row: usize, col: usize },
}

/// Read-only view of the fixed board.
///
/// Zero-sized; every query reads the static tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board;

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Board
    }

    /// What the grid holds at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<CellKind, BoardError> {
        if row >= ROWS || col >= COLS {
            return Err(BoardError::OutOfBounds { row, col });
        }
        let code = grid::code_at(row, col);
        CellKind::from_code(code).ok_or(BoardError::UnknownCode {
            code: code as char,
            row,
            col,
        })
    }

    /// [`Board::cell_at`] for a [`Cell`].
    pub fn kind(&self, cell: Cell) -> Result<CellKind, BoardError> {
        self.cell_at(cell.row as usize, cell.col as usize)
    }

    /// The room a grid code stands for.
    #[must_use]
    pub fn room_for_code(&self, code: u8) -> Option<RoomName> {
        RoomName::from_code(code)
    }

    /// The fixed layout of `room`.
    #[must_use]
    pub fn layout(&self, room: RoomName) -> RoomLayout {
        RoomLayout::of(room)
    }

    /// True iff stepping from `from` into `to` crosses one of `room`'s doors
    /// from the correct side.
    #[must_use]
    pub fn is_doorway(&self, room: RoomName, from: Cell, to: Cell) -> bool {
        RoomLayout::of(room).is_doorway(from, to)
    }

    /// Corridor cells reachable by leaving `room` in `direction`.
    #[must_use]
    pub fn exits(&self, room: RoomName, direction: Direction) -> SmallVec<[Cell; 2]> {
        RoomLayout::of(room).exits(direction)
    }

    /// The room linked to `room` by a secret passage, if any.
    #[must_use]
    pub fn connection(&self, room: RoomName) -> Option<RoomName> {
        Passage::ALL.iter().find_map(|p| p.other_end(room))
    }

    /// Every `(cell, kind)` in row-major order: the full grid contents.
    ///
    /// [`Board::verify`] rejects any byte that does not decode, so after
    /// setup this yields all `ROWS * COLS` cells.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellKind)> {
        grid::codes().filter_map(|(row, col, code)| {
            CellKind::from_code(code).map(|kind| (Cell::new(row as u8, col as u8), kind))
        })
    }

    /// Check that the static tables agree with each other: every grid byte
    /// decodes, every layout cell marked inside or door lies on that room's
    /// grid cells (or a passage corner), and every door opens onto a corridor.
    pub fn verify(&self) -> Result<(), SetupError> {
        for (row, col, code) in grid::codes() {
            if CellKind::from_code(code).is_none() {
                return Err(SetupError::BoardTable(BoardError::UnknownCode {
                    code: code as char,
                    row,
                    col,
                }));
            }
        }

        for room in RoomName::ALL {
            let layout = RoomLayout::of(room);
            for (cell, kind) in layout.cells() {
                let kind = kind.ok_or(SetupError::RoomLayout { room, cell })?;
                if kind == LayoutCell::Outside {
                    continue;
                }
                let on_grid = self.kind(cell).map_err(SetupError::BoardTable)?;
                let belongs = match on_grid {
                    CellKind::Room(r) => r == room,
                    CellKind::Passage(p) => p.other_end(room).is_some(),
                    _ => false,
                };
                if !belongs {
                    return Err(SetupError::RoomLayout { room, cell });
                }
            }

            for (door, direction) in layout.doors() {
                let outside = door
                    .step(direction)
                    .ok_or(SetupError::DoorOpensOffBoard { room, door })?;
                if !self.kind(outside).map_err(SetupError::BoardTable)?.is_corridor() {
                    return Err(SetupError::DoorOpensOffBoard { room, door });
                }
            }
        }

        for passage in Passage::ALL {
            let (a, b) = passage.rooms();
            if self.connection(a) != Some(b) || self.connection(b) != Some(a) {
                return Err(SetupError::MissingRoom(a));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_verify() {
        assert_eq!(Board::new().verify(), Ok(()));
    }

    #[test]
    fn test_cells_cover_grid() {
        let board = Board::new();
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), ROWS * COLS);
        for (cell, kind) in &cells {
            assert_eq!(board.cell_at(cell.row as usize, cell.col as usize), Ok(*kind));
        }
        assert_eq!(cells[0].0, Cell::new(0, 0));
        assert_eq!(cells[COLS].0, Cell::new(1, 0));
    }

    #[test]
    fn test_cell_at_bounds() {
        let board = Board::new();
        assert_eq!(
            board.cell_at(ROWS, 0),
            Err(BoardError::OutOfBounds { row: ROWS, col: 0 })
        );
        assert_eq!(
            board.cell_at(0, COLS),
            Err(BoardError::OutOfBounds { row: 0, col: COLS })
        );
        assert_eq!(board.cell_at(0, 0), Ok(CellKind::Empty));
    }

    #[test]
    fn test_passage_cells() {
        let board = Board::new();
        assert_eq!(
            board.cell_at(2, 5),
            Ok(CellKind::Passage(Passage::KitchenStudy))
        );
        assert_eq!(
            board.cell_at(20, 0),
            Ok(CellKind::Passage(Passage::ConservatoryLounge))
        );
    }

    #[test]
    fn test_connections() {
        let board = Board::new();
        assert_eq!(board.connection(RoomName::Study), Some(RoomName::Kitchen));
        assert_eq!(board.connection(RoomName::Conservatory), Some(RoomName::Lounge));
        assert_eq!(board.connection(RoomName::Lounge), Some(RoomName::Conservatory));
        for room in [
            RoomName::Ballroom,
            RoomName::BilliardRoom,
            RoomName::DiningRoom,
            RoomName::Library,
            RoomName::Hall,
        ] {
            assert_eq!(board.connection(room), None);
        }
    }

    #[test]
    fn test_room_for_code() {
        let board = Board::new();
        assert_eq!(board.room_for_code(b'O'), Some(RoomName::Lounge));
        assert_eq!(board.room_for_code(b'x'), None);
    }

    #[test]
    fn test_start_cells_are_corridors() {
        let board = Board::new();
        for character in crate::pieces::CharacterName::ALL {
            assert_eq!(board.kind(character.start()), Ok(CellKind::Corridor));
        }
    }

    #[test]
    fn test_lounge_wall_is_not_a_doorway() {
        let board = Board::new();
        assert_eq!(board.cell_at(24, 6), Ok(CellKind::Room(RoomName::Lounge)));
        assert!(!board.is_doorway(RoomName::Lounge, Cell::new(24, 7), Cell::new(24, 6)));
        assert!(board.is_doorway(RoomName::Lounge, Cell::new(19, 6), Cell::new(20, 6)));
    }
}
