//! # rust-cluedo
//!
//! A deterministic game-state engine for the classic murder-mystery
//! deduction board game: three to six players move tokens around a fixed
//! 24x26 mansion, make hypotheses that other players must dispute, and win
//! by accusing the right character, weapon and room.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every command is checked in full before any
//!    state changes. A rejected command returns a recoverable error and
//!    leaves the game exactly as it was.
//!
//! 2. **Presentation-agnostic**: no input parsing or rendering. A front end
//!    drives [`game::Game`] and reads its queries.
//!
//! 3. **Seeded randomness**: setup and dice go through one ChaCha8 stream,
//!    so a seed reproduces a whole game.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, RNG, configuration, errors
//! - `board`: the static grid, room layouts, doors and passages
//! - `pieces`: named characters, weapons and rooms, and their tokens
//! - `cards`: the deck, envelope solution and hands
//! - `rules`: movement checks, the turn state machine, game results
//! - `resolver`: hypothesis disputes and accusations
//! - `game`: the command and query facade

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod pieces;
pub mod resolver;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, DisputeError, ErrorSeverity, GameConfig, GameError,
    GameRng, GameState, InvariantError, MoveError, PlayerId, PlayerMap, SetupError,
};

pub use crate::board::{Board, BoardError, Cell, CellKind, Direction};

pub use crate::pieces::{
    Character, CharacterName, Location, Piece, PieceKind, Player, Room, RoomName, Weapon,
    WeaponName,
};

pub use crate::cards::{Card, Hand, Solution};

pub use crate::rules::{GameResult, Step, TurnContext, TurnOption, TurnPhase};

pub use crate::resolver::{
    AccusationOutcome, DisputeChoice, FirstMatch, Hypothesis, Inquiry, InquiryStatus, Respondent,
};

pub use crate::game::{Game, GameBuilder};
