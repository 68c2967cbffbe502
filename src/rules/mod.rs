//! Game rules: movement legality, turn bookkeeping and game results.
//!
//! - `movement`: validate and apply single steps
//! - `turn`: the per-turn context, phase and action menu
//! - `engine`: how a game ends

pub mod engine;
pub mod movement;
pub mod turn;

pub use engine::GameResult;
pub use movement::{apply_step, check_step, Step};
pub use turn::{TurnContext, TurnOption, TurnPhase};
