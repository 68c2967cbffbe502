//! Game setup: seating, the deal, the envelope and initial token placement.

mod common;

use std::collections::HashSet;

use rust_cluedo::game::{available_characters, GameBuilder};
use rust_cluedo::pieces::{CharacterName, Location, Piece, RoomName, WeaponName};
use rust_cluedo::{PlayerId, SetupError, TurnPhase};

use common::{game, holder, solution};

#[test]
fn test_player_counts() {
    for players in 3..=6 {
        let game = game(players, 42);
        assert_eq!(game.player_count(), players);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
    }
}

#[test]
fn test_rejects_bad_player_counts() {
    let two = GameBuilder::new()
        .seat("Ann", CharacterName::MissScarlett)
        .seat("Bo", CharacterName::MrsWhite)
        .seed(1)
        .build()
        .unwrap_err();
    assert_eq!(two, SetupError::PlayerCount { count: 2 });
    assert!(!two.to_string().is_empty());

    let seven = CharacterName::ALL
        .into_iter()
        .chain([CharacterName::MissScarlett])
        .enumerate()
        .fold(GameBuilder::new().seed(1), |b, (i, c)| b.seat(format!("P{i}"), c))
        .build()
        .unwrap_err();
    assert_eq!(seven, SetupError::PlayerCount { count: 7 });
}

#[test]
fn test_rejects_duplicate_character() {
    let err = GameBuilder::new()
        .seat("Ann", CharacterName::MissScarlett)
        .seat("Bo", CharacterName::MrsWhite)
        .seat("Cy", CharacterName::MissScarlett)
        .seed(1)
        .build()
        .unwrap_err();
    assert_eq!(err, SetupError::DuplicateCharacter(CharacterName::MissScarlett));
}

#[test]
fn test_rejects_empty_name() {
    let err = GameBuilder::new()
        .seat("Ann", CharacterName::MissScarlett)
        .seat("  ", CharacterName::MrsWhite)
        .seat("Cy", CharacterName::MrsPeacock)
        .seed(1)
        .build()
        .unwrap_err();
    assert_eq!(err, SetupError::EmptyName { seat: 1 });
}

#[test]
fn test_deal_partitions_the_pack() {
    for players in 3..=6 {
        let game = game(players, 7 + players as u64);
        let envelope = solution(&game);

        let mut seen = HashSet::new();
        for (_, player) in game.players().iter() {
            for card in player.hand().cards() {
                assert!(seen.insert(card.piece()), "{} dealt twice", card);
                assert!(!card.is_solution());
            }
        }
        for card in game.face_up() {
            assert!(seen.insert(card.piece()));
        }
        for piece in envelope.pieces() {
            assert!(seen.insert(piece));
        }
        assert_eq!(seen.len(), Piece::COUNT);
    }
}

#[test]
fn test_hand_sizes_are_equal() {
    // 18 dealable cards: leftovers go face up.
    for (players, size, face_up) in [(3, 6, 0), (4, 4, 2), (5, 3, 3), (6, 3, 0)] {
        let game = game(players, 99);
        for (_, player) in game.players().iter() {
            assert_eq!(player.hand().len(), size);
        }
        assert_eq!(game.face_up().len(), face_up);
    }
}

#[test]
fn test_same_seed_same_setup() {
    let a = game(4, 1234);
    let b = game(4, 1234);
    assert_eq!(solution(&a), solution(&b));
    for player in PlayerId::all(4) {
        assert_eq!(a.hand(player), b.hand(player));
    }
    for weapon in WeaponName::ALL {
        assert_eq!(a.weapon(weapon).room(), b.weapon(weapon).room());
    }
}

#[test]
fn test_solution_not_held() {
    let game = game(5, 5);
    let envelope = solution(&game);
    for piece in envelope.pieces() {
        assert_eq!(holder(&game, piece), None);
        assert!(game.face_up().iter().all(|c| c.piece() != piece));
    }
    // Hidden while the game runs.
    assert_eq!(game.solution(), None);
}

#[test]
fn test_weapons_in_distinct_rooms() {
    let game = game(3, 17);
    let rooms: HashSet<RoomName> = WeaponName::ALL
        .into_iter()
        .map(|w| game.weapon(w).room())
        .collect();
    assert_eq!(rooms.len(), 6);
    for weapon in WeaponName::ALL {
        let room = game.weapon(weapon).room();
        assert!(game.room(room).contains_weapon(weapon));
    }
}

#[test]
fn test_tokens_start_on_their_cells() {
    let game = game(3, 3);
    for name in CharacterName::ALL {
        let character = game.character(name);
        assert_eq!(character.location(), Location::Corridor(name.start()));
        assert_eq!(game.occupant_at(name.start()), Some(name));
    }
    assert_eq!(
        game.character(CharacterName::MissScarlett).owner(),
        Some(PlayerId::new(0))
    );
    assert_eq!(game.character(CharacterName::ColonelMustard).owner(), None);
}

#[test]
fn test_available_characters_in_fixed_order() {
    assert_eq!(available_characters(&[]), CharacterName::ALL.to_vec());
    let free = available_characters(&[CharacterName::ProfessorPlum, CharacterName::ColonelMustard]);
    assert_eq!(
        free,
        vec![
            CharacterName::MissScarlett,
            CharacterName::MrsPeacock,
            CharacterName::MrsWhite,
            CharacterName::ReverendGreen,
        ]
    );
}

#[test]
fn test_invariants_hold_after_setup() {
    for seed in 0..20 {
        let game = game(3 + (seed as usize % 4), seed);
        assert_eq!(game.state().check_invariants(), Ok(()));
    }
}
