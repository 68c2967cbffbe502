//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Once;

use rust_cluedo::cards::Solution;
use rust_cluedo::game::{Game, GameBuilder};
use rust_cluedo::pieces::{CharacterName, Piece, RoomName, WeaponName};
use rust_cluedo::PlayerId;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary. Filter with
/// `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

const SEATS: [(&str, CharacterName); 6] = [
    ("Ann", CharacterName::MissScarlett),
    ("Bo", CharacterName::ProfessorPlum),
    ("Cy", CharacterName::MrsPeacock),
    ("Di", CharacterName::MrsWhite),
    ("Ed", CharacterName::ReverendGreen),
    ("Flo", CharacterName::ColonelMustard),
];

/// A started game with `players` seats, Miss Scarlett in seat 0.
pub fn game(players: usize, seed: u64) -> Game {
    init_tracing();
    SEATS[..players]
        .iter()
        .fold(GameBuilder::new().seed(seed), |b, (name, c)| b.seat(*name, *c))
        .build()
        .expect("valid seats")
}

/// Who holds `piece`: a seat, or `None` for the envelope and face-up cards.
pub fn holder(game: &Game, piece: Piece) -> Option<PlayerId> {
    game.players()
        .iter()
        .find(|(_, p)| p.hand().contains(piece))
        .map(|(id, _)| id)
}

/// The envelope, worked out from every hand plus the face-up cards.
pub fn solution(game: &Game) -> Solution {
    let visible = |piece: Piece| {
        holder(game, piece).is_some() || game.face_up().iter().any(|c| c.piece() == piece)
    };
    let character = CharacterName::ALL
        .into_iter()
        .find(|c| !visible(Piece::Character(*c)))
        .expect("one character missing");
    let weapon = WeaponName::ALL
        .into_iter()
        .find(|w| !visible(Piece::Weapon(*w)))
        .expect("one weapon missing");
    let room = RoomName::ALL
        .into_iter()
        .find(|r| !visible(Piece::Room(*r)))
        .expect("one room missing");
    Solution::new(character, weapon, room)
}

/// An accusation that is certainly wrong: the right character and weapon in
/// a room some player holds.
pub fn wrong_accusation(game: &Game) -> (RoomName, CharacterName, WeaponName) {
    let s = solution(game);
    let room = RoomName::ALL
        .into_iter()
        .find(|r| *r != s.room)
        .expect("nine rooms");
    (room, s.character, s.weapon)
}

/// Every player rolls `1` and passes until it is `player`'s turn again.
pub fn pass_until(game: &mut Game, player: PlayerId) {
    while game.current_player() != player {
        game.begin_turn_with_roll(1).expect("roll");
        game.end_turn().expect("end turn");
    }
}
