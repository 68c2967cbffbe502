//! Turn sequencing: rolling, the action menu, passages and the history log.

mod common;

use rust_cluedo::board::Direction;
use rust_cluedo::pieces::{CharacterName, RoomName, WeaponName};
use rust_cluedo::{Action, ActionError, PlayerId, TurnOption, TurnPhase};

use common::{game, pass_until, wrong_accusation};

/// Scarlett into the Lounge over her first two turns.
fn scarlett_to_lounge(game: &mut rust_cluedo::Game) {
    game.begin_turn_with_roll(6).unwrap();
    for _ in 0..6 {
        game.attempt_move(Direction::Up).unwrap();
    }
    game.end_turn().unwrap();
    pass_until(game, PlayerId::new(0));
    game.begin_turn_with_roll(2).unwrap();
    game.attempt_move(Direction::Left).unwrap();
    game.attempt_move(Direction::Down).unwrap();
}

#[test]
fn test_same_seed_same_rolls() {
    let rolls = |seed| {
        let mut game = game(4, seed);
        (0..8)
            .map(|_| {
                let roll = game.roll_and_begin_turn().unwrap();
                game.end_turn().unwrap();
                roll
            })
            .collect::<Vec<_>>()
    };
    let first = rolls(77);
    assert_eq!(first, rolls(77));
    assert!(first.iter().all(|r| (1..=6).contains(r)));
}

#[test]
fn test_turn_order_wraps() {
    let mut game = game(4, 1);
    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(game.current_player());
        game.begin_turn_with_roll(1).unwrap();
        game.end_turn().unwrap();
    }
    assert_eq!(
        seen,
        [0, 1, 2, 3, 0].map(PlayerId::new).to_vec()
    );
    assert_eq!(game.dice(), None);
    assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
}

#[test]
fn test_menu_follows_phase() {
    let mut game = game(3, 2);
    assert_eq!(
        game.available_actions(),
        vec![TurnOption::Roll, TurnOption::Accuse, TurnOption::ViewHand]
    );

    game.begin_turn_with_roll(1).unwrap();
    assert_eq!(game.phase(), TurnPhase::Moving);
    assert_eq!(
        game.available_actions(),
        vec![
            TurnOption::Move,
            TurnOption::Accuse,
            TurnOption::ViewHand,
            TurnOption::EndTurn
        ]
    );

    game.attempt_move(Direction::Up).unwrap();
    assert_eq!(game.phase(), TurnPhase::ActionChoice);
    assert_eq!(
        game.available_actions(),
        vec![TurnOption::Accuse, TurnOption::ViewHand, TurnOption::EndTurn]
    );
}

#[test]
fn test_menu_in_room() {
    let mut game = game(3, 3);
    scarlett_to_lounge(&mut game);
    assert_eq!(
        game.available_actions(),
        vec![
            TurnOption::Hypothesize,
            TurnOption::Accuse,
            TurnOption::ViewHand,
            TurnOption::EndTurn
        ]
    );
    game.end_turn().unwrap();
    pass_until(&mut game, PlayerId::new(0));

    game.begin_turn_with_roll(4).unwrap();
    assert!(game.available_actions().contains(&TurnOption::SecretPassage));
    assert!(game.available_actions().contains(&TurnOption::Move));
}

#[test]
fn test_secret_passage() {
    let mut game = game(3, 4);
    scarlett_to_lounge(&mut game);
    // Entering the room used up the roll.
    assert_eq!(game.take_secret_passage(), Err(ActionError::PassageClosed.into()));
    game.end_turn().unwrap();
    pass_until(&mut game, PlayerId::new(0));

    assert_eq!(game.take_secret_passage(), Err(ActionError::NotRolled.into()));
    game.begin_turn_with_roll(3).unwrap();
    assert_eq!(game.take_secret_passage(), Ok(RoomName::Conservatory));
    let scarlett = game.character(CharacterName::MissScarlett);
    assert_eq!(scarlett.room(), Some(RoomName::Conservatory));
    assert!(!game.room(RoomName::Lounge).contains_character(CharacterName::MissScarlett));
    assert_eq!(game.remaining(), 0);
    assert_eq!(
        game.history().last().map(|r| r.action.clone()),
        Some(Action::SecretPassage {
            to: RoomName::Conservatory
        })
    );
}

#[test]
fn test_one_hypothesis_per_turn() {
    let mut game = game(3, 5);
    scarlett_to_lounge(&mut game);

    game.hypothesize(CharacterName::MrsWhite, WeaponName::Rope)
        .unwrap();
    let pending = game.pending_inquiry().map(|i| i.respondent());
    if let Some(Some(respondent)) = pending {
        // Nobody else may act until the inquiry is answered.
        assert_eq!(
            game.end_turn(),
            Err(ActionError::InquiryPending { respondent }.into())
        );
        assert_eq!(game.phase(), TurnPhase::Inquiry);
        assert!(game.available_actions().is_empty());
        game.resolve_inquiry(&mut rust_cluedo::FirstMatch).unwrap();
    }
    assert!(game.pending_inquiry().is_none());
    assert!(game.last_inquiry().is_some());
    assert_eq!(
        game.hypothesize(CharacterName::MrsWhite, WeaponName::Rope),
        Err(ActionError::AlreadyHypothesized.into())
    );
    assert!(!game.available_actions().contains(&TurnOption::Hypothesize));
}

#[test]
fn test_hypothesis_summons_pieces() {
    let mut game = game(3, 6);
    scarlett_to_lounge(&mut game);

    game.hypothesize(CharacterName::ReverendGreen, WeaponName::Dagger)
        .unwrap();
    let green = game.character(CharacterName::ReverendGreen);
    assert_eq!(green.room(), Some(RoomName::Lounge));
    assert_eq!(game.weapon(WeaponName::Dagger).room(), RoomName::Lounge);
    assert!(game.room(RoomName::Lounge).contains_weapon(WeaponName::Dagger));
    assert_eq!(game.occupant_at(CharacterName::ReverendGreen.start()), None);
    assert_eq!(game.state().check_invariants(), Ok(()));
}

#[test]
fn test_history_records_accepted_commands_only() {
    let mut game = game(3, 7);
    assert!(game.history().is_empty());
    let _ = game.end_turn();
    assert!(game.history().is_empty());

    game.begin_turn_with_roll(2).unwrap();
    game.attempt_move(Direction::Up).unwrap();
    let _ = game.attempt_move(Direction::Left);
    game.view_hand().unwrap();
    game.end_turn().unwrap();

    let actions: Vec<_> = game.history().iter().map(|r| r.action.clone()).collect();
    assert_eq!(
        actions,
        vec![
            Action::Roll { value: 2 },
            Action::Move {
                direction: Direction::Up
            },
            Action::ViewHand,
            Action::EndTurn,
        ]
    );
    let sequences: Vec<_> = game.history().iter().map(|r| r.sequence).collect();
    assert!(sequences.windows(2).all(|w| w[0] < w[1]));
    assert!(game.history().iter().all(|r| r.turn == 1 && r.player == PlayerId::new(0)));
}

#[test]
fn test_accuse_before_rolling() {
    let mut game = game(3, 8);
    let (room, character, weapon) = wrong_accusation(&game);
    game.accuse(room, character, weapon).unwrap();
    assert_eq!(game.current_player(), PlayerId::new(1));
    assert_eq!(game.dice(), None);
}

#[test]
fn test_summoned_token_moves_like_native() {
    let mut game = game(3, 9);
    scarlett_to_lounge(&mut game);
    game.hypothesize(CharacterName::ProfessorPlum, WeaponName::Rope)
        .unwrap();
    game.resolve_inquiry(&mut rust_cluedo::FirstMatch).unwrap();
    game.end_turn().unwrap();

    game.begin_turn_with_roll(1).unwrap();
    let summoned = game.attempt_move(Direction::Left).unwrap_err();
    game.end_turn().unwrap();
    pass_until(&mut game, PlayerId::new(0));

    game.begin_turn_with_roll(1).unwrap();
    let native = game.attempt_move(Direction::Left).unwrap_err();
    assert_eq!(summoned, native);
}
