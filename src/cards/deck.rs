//! Deck construction and game setup.
//!
//! Setup runs once per game, in this order:
//!
//! 1. Draw the solution: one character, one weapon and one room, each by an
//!    independent uniform draw.
//! 2. Build the 21-card pack and flag the three solution cards.
//! 3. Scatter the six weapons into six distinct rooms (draw without
//!    replacement over the nine rooms).
//! 4. Deal the 18 remaining cards round-robin in seat order, each card drawn
//!    at random from what is left, while at least one full round remains.
//!    Whatever is left over is laid face up.
//!
//! Every draw comes from the game's [`GameRng`], so a seed fixes the whole
//! setup.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::card::{Card, CardHolder, Hand};
use super::solution::Solution;
use crate::core::{config, GameRng, PlayerId, PlayerMap, SetupError};
use crate::pieces::{CharacterName, Piece, RoomName, WeaponName};

/// The full pack after setup, with an index from each piece to its holder.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    holders: FxHashMap<Piece, CardHolder>,
    face_up: Vec<Card>,
    solution: Solution,
}

/// Everything setup produces.
#[derive(Clone, Debug)]
pub struct Setup {
    pub deck: Deck,
    pub hands: PlayerMap<Hand>,
    /// The room each weapon starts in, indexed by [`WeaponName::index`].
    pub weapon_rooms: [RoomName; 6],
}

impl Deck {
    /// Run the full setup for `player_count` seats.
    pub fn setup(player_count: usize, rng: &mut GameRng) -> Result<Setup, SetupError> {
        if !config::player_count_range().contains(&player_count) {
            return Err(SetupError::PlayerCount {
                count: player_count,
            });
        }

        let solution = Self::draw_solution(rng);
        let weapon_rooms = Self::scatter_weapons(rng)?;

        let cards: Vec<Card> = Piece::all()
            .map(|piece| Card::new(piece, solution.contains(piece)))
            .collect();

        let mut holders: FxHashMap<Piece, CardHolder> = FxHashMap::default();
        for piece in solution.pieces() {
            holders.insert(piece, CardHolder::Envelope);
        }

        let mut pool: Vec<Card> = cards.iter().copied().filter(|c| !c.is_solution()).collect();
        let mut hands: PlayerMap<Hand> = PlayerMap::new(player_count, |_| Hand::new());

        while pool.len() >= player_count {
            for player in PlayerId::all(player_count) {
                let card = rng.draw(&mut pool).ok_or(SetupError::DeckExhausted)?;
                holders.insert(card.piece(), CardHolder::Player(player));
                hands[player].deal(card);
            }
        }

        for card in &pool {
            holders.insert(card.piece(), CardHolder::FaceUp);
        }
        // Keep face-up cards in pack order rather than draw order.
        let face_up: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|c| holders.get(&c.piece()) == Some(&CardHolder::FaceUp))
            .collect();

        debug!(
            players = player_count,
            hand_size = hands[PlayerId::new(0)].len(),
            face_up = face_up.len(),
            "dealt cards"
        );

        Ok(Setup {
            deck: Deck {
                cards,
                holders,
                face_up,
                solution,
            },
            hands,
            weapon_rooms,
        })
    }

    fn draw_solution(rng: &mut GameRng) -> Solution {
        let character = CharacterName::ALL[rng.index(CharacterName::ALL.len())];
        let weapon = WeaponName::ALL[rng.index(WeaponName::ALL.len())];
        let room = RoomName::ALL[rng.index(RoomName::ALL.len())];
        Solution::new(character, weapon, room)
    }

    fn scatter_weapons(rng: &mut GameRng) -> Result<[RoomName; 6], SetupError> {
        let mut rooms = RoomName::ALL.to_vec();
        let mut placed = [RoomName::Kitchen; 6];
        for weapon in WeaponName::ALL {
            placed[weapon.index()] = rng.draw(&mut rooms).ok_or(SetupError::DeckExhausted)?;
        }
        Ok(placed)
    }

    /// All 21 cards in pack order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards nobody was dealt, visible to every player.
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        &self.face_up
    }

    /// Who holds the card for `piece`. Reveals the solution, so it is not
    /// part of the public surface.
    pub(crate) fn holder(&self, piece: Piece) -> Option<CardHolder> {
        self.holders.get(&piece).copied()
    }

    pub(crate) fn solution(&self) -> &Solution {
        &self.solution
    }
}
