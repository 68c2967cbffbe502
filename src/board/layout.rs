//! Per-room layouts: which cells are inside each room and where its doors are.
//!
//! Each layout is a small rectangle anchored at the room's origin in the
//! global grid. Layout bytes:
//!
//! - `x` outside the room
//! - `#` inside the room
//! - `^ > v <` a door cell, tagged with the direction a token leaves by
//!
//! A door tagged `d` is left by stepping `d` onto the corridor cell beyond
//! it, and entered from that same corridor cell by stepping the opposite way.

use smallvec::SmallVec;

use super::geometry::{Cell, Direction};
use crate::pieces::RoomName;

/// Decoded layout byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutCell {
    Outside,
    Inside,
    Door(Direction),
}

impl LayoutCell {
    #[must_use]
    pub fn from_code(code: u8) -> Option<LayoutCell> {
        match code {
            b'x' => Some(LayoutCell::Outside),
            b'#' => Some(LayoutCell::Inside),
            b'^' => Some(LayoutCell::Door(Direction::Up)),
            b'>' => Some(LayoutCell::Door(Direction::Right)),
            b'v' => Some(LayoutCell::Door(Direction::Down)),
            b'<' => Some(LayoutCell::Door(Direction::Left)),
            _ => None,
        }
    }
}

/// A room's rectangular sub-layout and its offset into the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomLayout {
    pub room: RoomName,
    pub origin: Cell,
    rows: &'static [&'static str],
}

impl RoomLayout {
    /// The fixed layout for `room`.
    #[must_use]
    pub fn of(room: RoomName) -> RoomLayout {
        let (origin, rows): (Cell, &'static [&'static str]) = match room {
            RoomName::Kitchen => (
                Cell::new(2, 0),
                &["######", "######", "######", "######", "######", "x###v#"],
            ),
            RoomName::Ballroom => (
                Cell::new(2, 8),
                &[
                    "xx####xx", "########", "########", "########", "<######>", "########",
                    "#v####v#",
                ],
            ),
            RoomName::Conservatory => (
                Cell::new(2, 18),
                &["######", "######", "######", "v#####", "x####x"],
            ),
            RoomName::BilliardRoom => (
                Cell::new(9, 18),
                &["######", "<#####", "######", "######", "####v#"],
            ),
            RoomName::DiningRoom => (
                Cell::new(10, 0),
                &[
                    "#####xxx", "########", "########", "#######>", "########", "########",
                    "######v#",
                ],
            ),
            RoomName::Library => (
                Cell::new(15, 17),
                &["x##^##x", "#######", "<######", "#######", "x#####x"],
            ),
            RoomName::Hall => (
                Cell::new(19, 9),
                &[
                    "##^^##", "######", "#####>", "######", "######", "######", "######",
                ],
            ),
            RoomName::Lounge => (
                Cell::new(20, 0),
                &["######^", "#######", "#######", "#######", "#######", "######x"],
            ),
            RoomName::Study => (
                Cell::new(22, 17),
                &["^######", "#######", "#######", "x######"],
            ),
        };
        RoomLayout { room, origin, rows }
    }

    /// Rows of the layout rectangle.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Columns of the layout rectangle.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Every cell of the rectangle with its decoded layout byte, in global
    /// coordinates. Bytes outside the code table decode as `None`.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Option<LayoutCell>)> + '_ {
        let origin = self.origin;
        self.rows.iter().enumerate().flat_map(move |(dr, row)| {
            row.bytes().enumerate().map(move |(dc, code)| {
                let cell = Cell::new(origin.row + dr as u8, origin.col + dc as u8);
                (cell, LayoutCell::from_code(code))
            })
        })
    }

    /// Layout byte at a global cell, or `None` if the cell lies outside the
    /// rectangle.
    #[must_use]
    pub fn at(&self, cell: Cell) -> Option<LayoutCell> {
        let dr = cell.row.checked_sub(self.origin.row)? as usize;
        let dc = cell.col.checked_sub(self.origin.col)? as usize;
        let code = *self.rows.get(dr)?.as_bytes().get(dc)?;
        LayoutCell::from_code(code)
    }

    /// Door cells with their exit directions.
    pub fn doors(&self) -> impl Iterator<Item = (Cell, Direction)> + '_ {
        self.cells().filter_map(|(cell, kind)| match kind {
            Some(LayoutCell::Door(direction)) => Some((cell, direction)),
            _ => None,
        })
    }

    /// Corridor cells a token lands on when leaving by `direction`. Most
    /// rooms have at most one; the Hall has two facing up and the Ballroom
    /// two facing down.
    #[must_use]
    pub fn exits(&self, direction: Direction) -> SmallVec<[Cell; 2]> {
        self.doors()
            .filter(|(_, d)| *d == direction)
            .filter_map(|(door, d)| door.step(d))
            .collect()
    }

    /// True if stepping from `from` to `to` crosses one of this room's doors
    /// inward: `to` is a door cell and `from` lies directly outside it in the
    /// door's tagged direction.
    #[must_use]
    pub fn is_doorway(&self, from: Cell, to: Cell) -> bool {
        match self.at(to) {
            Some(LayoutCell::Door(direction)) => to.step(direction) == Some(from),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitchen_doorway() {
        let kitchen = RoomLayout::of(RoomName::Kitchen);
        assert!(kitchen.is_doorway(Cell::new(8, 4), Cell::new(7, 4)));
        assert!(!kitchen.is_doorway(Cell::new(8, 3), Cell::new(7, 3)));
        // Sideways into a door cell does not count.
        assert!(!kitchen.is_doorway(Cell::new(7, 5), Cell::new(7, 4)));
    }

    #[test]
    fn test_hall_has_two_up_exits() {
        let hall = RoomLayout::of(RoomName::Hall);
        let exits = hall.exits(Direction::Up);
        assert_eq!(exits.as_slice(), &[Cell::new(18, 11), Cell::new(18, 12)]);
        assert_eq!(hall.exits(Direction::Right).as_slice(), &[Cell::new(21, 15)]);
        assert!(hall.exits(Direction::Down).is_empty());
    }

    #[test]
    fn test_ballroom_has_two_down_exits() {
        let ballroom = RoomLayout::of(RoomName::Ballroom);
        assert_eq!(
            ballroom.exits(Direction::Down).as_slice(),
            &[Cell::new(9, 9), Cell::new(9, 14)]
        );
        assert_eq!(ballroom.exits(Direction::Left).as_slice(), &[Cell::new(6, 7)]);
        assert_eq!(ballroom.exits(Direction::Right).as_slice(), &[Cell::new(6, 16)]);
    }

    #[test]
    fn test_door_counts() {
        let doors = |room| RoomLayout::of(room).doors().count();
        assert_eq!(doors(RoomName::Kitchen), 1);
        assert_eq!(doors(RoomName::Ballroom), 4);
        assert_eq!(doors(RoomName::Hall), 3);
        assert_eq!(doors(RoomName::Study), 1);
        let total: usize = RoomName::ALL.iter().map(|r| doors(*r)).sum();
        assert_eq!(total, 17);
    }

    #[test]
    fn test_layouts_are_rectangular() {
        for room in RoomName::ALL {
            let layout = RoomLayout::of(room);
            assert!(layout.height() > 0);
            assert_eq!(layout.cells().count(), layout.height() * layout.width());
            assert!(layout.cells().all(|(_, kind)| kind.is_some()));
        }
    }

    #[test]
    fn test_at_outside_rectangle() {
        let study = RoomLayout::of(RoomName::Study);
        assert_eq!(study.at(Cell::new(0, 0)), None);
        assert_eq!(study.at(Cell::new(22, 17)), Some(LayoutCell::Door(Direction::Up)));
        assert_eq!(study.at(Cell::new(25, 17)), Some(LayoutCell::Outside));
    }
}
