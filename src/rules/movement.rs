//! Movement validation.
//!
//! [`check_step`] decides whether one step is legal without touching the
//! state; [`apply_step`] carries out a step that `check_step` produced.
//! Splitting the two keeps rejected moves free of side effects.
//!
//! Rules, in precedence order:
//!
//! 1. A corridor step that would leave the grid is rejected.
//! 2. Corridor to corridor is allowed only onto a free cell.
//! 3. From inside a room, the token leaves through a door facing the step
//!    direction onto the corridor cell beyond it. Several such doors need an
//!    explicit choice of exit. The exit cell must be free.
//! 4. Corridor into a room is allowed only through a doorway, from the side
//!    the door faces, and never into the room the turn started in.
//! 5. Anything else (empty cells, passage corners) is blocked.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, CellKind, Direction};
use crate::core::{GameError, GameState, InvariantError, MoveError};
use crate::pieces::{CharacterName, Location, RoomName};

/// A validated single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Corridor cell to corridor cell.
    Corridor { from: Cell, to: Cell },
    /// Through a doorway into a room.
    Enter { from: Cell, room: RoomName },
    /// Out of a room onto a corridor cell.
    Exit { room: RoomName, to: Cell },
}

impl Step {
    /// The room entered by this step, if any.
    #[must_use]
    pub fn entered_room(&self) -> Option<RoomName> {
        match self {
            Step::Enter { room, .. } => Some(*room),
            _ => None,
        }
    }

    /// The corridor cell the token ends on, if it stays in the corridors.
    #[must_use]
    pub fn destination(&self) -> Option<Cell> {
        match self {
            Step::Corridor { to, .. } | Step::Exit { to, .. } => Some(*to),
            Step::Enter { .. } => None,
        }
    }
}

/// Validate one step of `character` in `direction`.
///
/// `exit` picks among several exits when leaving a room and is ignored in
/// corridors. `origin` is the room the character started the turn in.
pub fn check_step(
    board: &Board,
    state: &GameState,
    character: CharacterName,
    direction: Direction,
    exit: Option<Cell>,
    origin: Option<RoomName>,
) -> Result<Step, GameError> {
    match state.character(character).location() {
        Location::OffBoard => Err(MoveError::OffBoard(character).into()),
        Location::Room(room) => check_exit(board, state, room, direction, exit),
        Location::Corridor(from) => check_corridor_step(board, state, from, direction, origin),
    }
}

fn check_exit(
    board: &Board,
    state: &GameState,
    room: RoomName,
    direction: Direction,
    exit: Option<Cell>,
) -> Result<Step, GameError> {
    let exits = board.exits(room, direction);
    let to = match (exit, exits.as_slice()) {
        (_, []) => return Err(MoveError::NoDoorway { room, direction }.into()),
        (Some(cell), candidates) => {
            if !candidates.contains(&cell) {
                return Err(MoveError::NotAnExit {
                    room,
                    direction,
                    cell,
                }
                .into());
            }
            cell
        }
        (None, [only]) => *only,
        (None, _) => {
            return Err(MoveError::AmbiguousExit {
                room,
                direction,
                exits: exits.clone(),
            }
            .into())
        }
    };

    if let Some(by) = state.occupant_at(to) {
        return Err(MoveError::Occupied { cell: to, by }.into());
    }
    Ok(Step::Exit { room, to })
}

fn check_corridor_step(
    board: &Board,
    state: &GameState,
    from: Cell,
    direction: Direction,
    origin: Option<RoomName>,
) -> Result<Step, GameError> {
    let to = from
        .step(direction)
        .ok_or(MoveError::OutOfBounds { from, direction })?;

    match board.kind(to).map_err(InvariantError::from)? {
        CellKind::Corridor => match state.occupant_at(to) {
            Some(by) => Err(MoveError::Occupied { cell: to, by }.into()),
            None => Ok(Step::Corridor { from, to }),
        },
        CellKind::Room(room) => {
            if !board.is_doorway(room, from, to) {
                return Err(MoveError::NotADoorway { room, from }.into());
            }
            if origin == Some(room) {
                return Err(MoveError::ReenterOrigin { room }.into());
            }
            Ok(Step::Enter { from, room })
        }
        CellKind::Empty | CellKind::Passage(_) => Err(MoveError::Blocked { from, to }.into()),
    }
}

/// Carry out a validated step.
pub fn apply_step(state: &mut GameState, character: CharacterName, step: Step) {
    match step {
        Step::Corridor { to, .. } | Step::Exit { to, .. } => state.place_in_corridor(character, to),
        Step::Enter { room, .. } => state.place_in_room(character, room),
    }
}
