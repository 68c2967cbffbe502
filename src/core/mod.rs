//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. `GameState` is the single
//! owned aggregate; the rules, resolver and game facade all operate on it.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, DIE_SIDES, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{
    ActionError, DisputeError, ErrorSeverity, GameError, InvariantError, MoveError, SetupError,
};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;
