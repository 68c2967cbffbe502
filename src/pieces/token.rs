//! Movable pieces: character and weapon tokens.

use serde::{Deserialize, Serialize};

use super::names::{CharacterName, RoomName, WeaponName};
use crate::board::Cell;
use crate::core::PlayerId;

/// Where a character token is.
///
/// Exactly one variant is active, so a token can never be both on a
/// corridor cell and inside a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Corridor(Cell),
    Room(RoomName),
    /// Removed from play after its owner was eliminated.
    OffBoard,
}

/// A character token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: CharacterName,
    location: Location,
    owner: Option<PlayerId>,
}

impl Character {
    /// A token standing on its start cell, not yet owned.
    #[must_use]
    pub fn new(name: CharacterName) -> Self {
        Self {
            name,
            location: Location::Corridor(name.start()),
            owner: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> CharacterName {
        self.name
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// The corridor cell, if the token is in a corridor.
    #[must_use]
    pub fn cell(&self) -> Option<Cell> {
        match self.location {
            Location::Corridor(cell) => Some(cell),
            _ => None,
        }
    }

    /// The room, if the token is inside one.
    #[must_use]
    pub fn room(&self) -> Option<RoomName> {
        match self.location {
            Location::Room(room) => Some(room),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_on_board(&self) -> bool {
        self.location != Location::OffBoard
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }

    /// Move along the corridor.
    pub(crate) fn step_to(&mut self, cell: Cell) {
        self.location = Location::Corridor(cell);
    }

    pub(crate) fn enter_room(&mut self, room: RoomName) {
        self.location = Location::Room(room);
    }

    /// Leave the current room onto the corridor cell `exit`.
    pub(crate) fn leave_room(&mut self, exit: Cell) {
        self.location = Location::Corridor(exit);
    }

    pub(crate) fn remove_from_board(&mut self) {
        self.location = Location::OffBoard;
    }
}

/// A weapon token. Weapons only ever sit in rooms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: WeaponName,
    room: RoomName,
}

impl Weapon {
    #[must_use]
    pub fn new(name: WeaponName, room: RoomName) -> Self {
        Self { name, room }
    }

    #[must_use]
    pub fn name(&self) -> WeaponName {
        self.name
    }

    #[must_use]
    pub fn room(&self) -> RoomName {
        self.room
    }

    pub(crate) fn move_to_room(&mut self, room: RoomName) {
        self.room = room;
    }
}
