//! Error taxonomy.
//!
//! Each concern has its own error enum. [`GameError`] wraps them all and
//! classifies each by [`ErrorSeverity`]:
//!
//! - **Recoverable**: a player asked for something the rules forbid. Nothing
//!   changed; the same player may try again. ([`MoveError`], [`ActionError`],
//!   [`DisputeError`])
//! - **Fatal**: construction failed or the state broke an invariant. The game
//!   cannot continue. ([`SetupError`], [`InvariantError`])

use smallvec::SmallVec;

use super::player::PlayerId;
use crate::board::{BoardError, Cell, Direction};
use crate::pieces::{CharacterName, Piece, RoomName, WeaponName};

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Rejected before any mutation; re-prompt the same player.
    Recoverable,
    /// Abort the game.
    Fatal,
}

impl ErrorSeverity {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Fatal => "fatal",
        }
    }

    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// An illegal single step.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("moving {direction} from {from} leaves the board")]
    OutOfBounds { from: Cell, direction: Direction },

    #[error("{cell} is occupied by {by}")]
    Occupied { cell: Cell, by: CharacterName },

    #[error("{to} cannot be entered from {from}")]
    Blocked { from: Cell, to: Cell },

    #[error("no door into the {room} from {from}")]
    NotADoorway { room: RoomName, from: Cell },

    #[error("the {room} has no door facing {direction}")]
    NoDoorway { room: RoomName, direction: Direction },

    #[error("the {room} has {} doors facing {direction}; choose one", .exits.len())]
    AmbiguousExit {
        room: RoomName,
        direction: Direction,
        exits: SmallVec<[Cell; 2]>,
    },

    #[error("{cell} is not an exit of the {room} facing {direction}")]
    NotAnExit {
        room: RoomName,
        direction: Direction,
        cell: Cell,
    },

    #[error("cannot re-enter the {room} in the same turn")]
    ReenterOrigin { room: RoomName },

    #[error("{0} is not on the board")]
    OffBoard(CharacterName),
}

/// A command that is not available right now.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("roll the die first")]
    NotRolled,

    #[error("the die has already been rolled this turn")]
    AlreadyRolled,

    #[error("roll of {value} is outside 1..={max}")]
    InvalidRoll { value: u8, max: u8 },

    #[error("no moves left this turn")]
    NoMovesLeft,

    #[error("not in a room")]
    NotInRoom,

    #[error("already made a hypothesis this turn")]
    AlreadyHypothesized,

    #[error("the {room} has no secret passage")]
    NoSecretPassage { room: RoomName },

    #[error("the secret passage is only available before moving out of the starting room")]
    PassageClosed,

    #[error("waiting for {respondent} to answer a hypothesis")]
    InquiryPending { respondent: PlayerId },

    #[error("no hypothesis is awaiting an answer")]
    NoInquiry,

    #[error("the game is over")]
    GameOver,
}

/// An invalid answer to a hypothesis.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DisputeError {
    #[error("{respondent} does not hold {piece}")]
    NotHeld { respondent: PlayerId, piece: Piece },

    #[error("{respondent} holds a matching card and must show it")]
    MustDisclose { respondent: PlayerId },
}

/// A construction-time failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{count} players; a game needs 3 to 6")]
    PlayerCount { count: usize },

    #[error("{0} was chosen by more than one player")]
    DuplicateCharacter(CharacterName),

    #[error("player in seat {seat} has an empty name")]
    EmptyName { seat: usize },

    #[error("room {0} is missing from the board")]
    MissingRoom(RoomName),

    #[error("layout of the {room} disagrees with the grid at {cell}")]
    RoomLayout { room: RoomName, cell: Cell },

    #[error("door of the {room} at {door} does not open onto a corridor")]
    DoorOpensOffBoard { room: RoomName, door: Cell },

    #[error(transparent)]
    BoardTable(BoardError),

    #[error("ran out of cards during setup")]
    DeckExhausted,
}

/// A state that the rules should make unreachable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("no players are alive")]
    NoPlayersAlive,

    #[error("{0} belongs to a live player but is not on the board")]
    CharacterOffBoard(CharacterName),

    #[error("occupancy at {cell} disagrees with {character}'s position")]
    OccupancyDesync { cell: Cell, character: CharacterName },

    #[error("occupant list of the {room} disagrees with {character}'s position")]
    RoomDesync { room: RoomName, character: CharacterName },

    #[error("the {0} is not listed in exactly its own room")]
    WeaponDesync(WeaponName),

    #[error("{player} holds {piece} but the deck disagrees")]
    HandDesync { player: PlayerId, piece: Piece },

    #[error("unknown seat {0}")]
    UnknownPlayer(PlayerId),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Any error the engine reports.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Dispute(#[from] DisputeError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

impl GameError {
    #[must_use]
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GameError::Move(_) | GameError::Action(_) | GameError::Dispute(_) => {
                ErrorSeverity::Recoverable
            }
            GameError::Setup(_) | GameError::Invariant(_) => ErrorSeverity::Fatal,
        }
    }

    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.severity().is_recoverable()
    }
}
