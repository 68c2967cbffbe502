//! Cards, hands, the solution envelope and deck setup.
//!
//! ## Key Types
//!
//! - `Card`: one piece plus its solution flag
//! - `Hand`: a player's dealt cards
//! - `Solution`: the three envelope cards
//! - `Deck`: the 21-card pack, the face-up leftovers and who holds what

pub mod card;
pub mod deck;
pub mod solution;

pub use card::{Card, CardHolder, Hand};
pub use deck::{Deck, Setup};
pub use solution::Solution;
