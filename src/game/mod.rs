//! The game facade: the command and query surface a presentation layer
//! drives.
//!
//! `Game` owns the [`GameState`] and the current [`TurnContext`], checks
//! every command against the turn rules before touching the state, and
//! records accepted commands in the action history. Rejected commands return
//! a recoverable [`GameError`] and change nothing.
//!
//! ## Example
//!
//! ```
//! use rust_cluedo::game::GameBuilder;
//! use rust_cluedo::board::Direction;
//! use rust_cluedo::pieces::CharacterName;
//!
//! let mut game = GameBuilder::new()
//!     .seat("Ann", CharacterName::MissScarlett)
//!     .seat("Bo", CharacterName::ProfessorPlum)
//!     .seat("Cy", CharacterName::MrsPeacock)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! game.begin_turn_with_roll(1).unwrap();
//! game.attempt_move(Direction::Up).unwrap();
//! assert_eq!(game.remaining(), 0);
//! game.end_turn().unwrap();
//! ```

pub mod builder;

pub use builder::{available_characters, GameBuilder};

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, error, info};

use crate::board::{Board, Cell, Direction};
use crate::cards::{Card, Hand, Solution};
use crate::core::{
    config, Action, ActionError, ActionRecord, DisputeError, GameConfig, GameError, GameRng,
    GameState, InvariantError, PlayerId, PlayerMap, SetupError, DIE_SIDES,
};
use crate::pieces::{Character, CharacterName, Player, Room, RoomName, Weapon, WeaponName};
use crate::resolver::{
    Accusation, AccusationOutcome, DisputeChoice, Hypothesis, Inquiry, InquiryStatus, Respondent,
};
use crate::rules::{apply_step, check_step, GameResult, Step, TurnContext, TurnOption, TurnPhase};

/// Invalid answers tolerated from one respondent before
/// [`Game::resolve_inquiry`] hands the error back to its caller.
pub const MAX_DISPUTE_ATTEMPTS: usize = 8;

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    state: GameState,
    current: PlayerId,
    turn: TurnContext,
    inquiry: Option<Inquiry>,
    last_inquiry: Option<InquiryStatus>,
    result: Option<GameResult>,
}

impl Game {
    /// Seat the players and set up the board, the envelope and the deal.
    ///
    /// Seat 0 takes the first turn.
    pub fn start(
        seats: Vec<(String, CharacterName)>,
        config: GameConfig,
    ) -> Result<Self, SetupError> {
        let state = GameState::new(seats, GameRng::new(config.seed))?;
        let first = PlayerId::new(0);
        let origin = state
            .player(first)
            .and_then(|p| state.character(p.character()).room());

        info!(players = state.player_count(), "game started");
        Ok(Self {
            board: Board::new(),
            state,
            current: first,
            turn: TurnContext::new(first, origin),
            inquiry: None,
            last_inquiry: None,
            result: None,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        self.state.players()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn turn(&self) -> &TurnContext {
        &self.turn
    }

    /// This turn's die roll, once rolled.
    #[must_use]
    pub fn dice(&self) -> Option<u8> {
        self.turn.roll()
    }

    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.turn.remaining()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.result.is_some() {
            TurnPhase::GameOver
        } else if self.inquiry.is_some() {
            TurnPhase::Inquiry
        } else {
            self.turn.phase()
        }
    }

    /// The character on a corridor cell, if any.
    #[must_use]
    pub fn occupant_at(&self, cell: Cell) -> Option<CharacterName> {
        self.state.occupant_at(cell)
    }

    #[must_use]
    pub fn room(&self, name: RoomName) -> &Room {
        self.state.room(name)
    }

    #[must_use]
    pub fn character(&self, name: CharacterName) -> &Character {
        self.state.character(name)
    }

    #[must_use]
    pub fn weapon(&self, name: WeaponName) -> &Weapon {
        self.state.weapon(name)
    }

    /// A player's hand. Showing it only to its owner is the caller's job.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.state.player(player).map(Player::hand)
    }

    /// Leftover cards everyone may see.
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        self.state.face_up()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The envelope contents, available only once the game is over.
    #[must_use]
    pub fn solution(&self) -> Option<Solution> {
        self.result.map(|_| *self.state.solution())
    }

    /// The inquiry waiting for answers, if any.
    #[must_use]
    pub fn pending_inquiry(&self) -> Option<&Inquiry> {
        self.inquiry.as_ref()
    }

    /// How the most recent hypothesis was resolved.
    #[must_use]
    pub fn last_inquiry(&self) -> Option<InquiryStatus> {
        self.last_inquiry
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        self.state.history()
    }

    /// The commands the current player may issue now. Empty while an
    /// inquiry waits for respondents or once the game is over.
    #[must_use]
    pub fn available_actions(&self) -> Vec<TurnOption> {
        if self.result.is_some() || self.inquiry.is_some() {
            return Vec::new();
        }
        let current = self
            .state
            .player(self.current)
            .and_then(|p| self.state.character(p.character()).room());
        let connection = current.and_then(|room| self.board.connection(room));
        self.turn.options(current, connection)
    }

    // === Turn commands ===

    /// Roll the die and start moving.
    ///
    /// Checks first whether only one player is left; if so the game ends
    /// with them as the winner and the roll is refused.
    pub fn roll_and_begin_turn(&mut self) -> Result<u8, GameError> {
        self.ensure_active()?;
        self.check_last_standing()?;
        if self.turn.has_rolled() {
            return Err(ActionError::AlreadyRolled.into());
        }
        let value = self.state.rng_mut().roll_die(DIE_SIDES);
        self.begin_turn(value)
    }

    /// Start moving with a roll made outside the engine.
    pub fn begin_turn_with_roll(&mut self, value: u8) -> Result<u8, GameError> {
        self.ensure_active()?;
        self.check_last_standing()?;
        if !config::roll_range().contains(&value) {
            return Err(ActionError::InvalidRoll {
                value,
                max: DIE_SIDES,
            }
            .into());
        }
        self.begin_turn(value)
    }

    fn begin_turn(&mut self, value: u8) -> Result<u8, GameError> {
        self.turn.set_roll(value)?;
        self.state.record(self.current, Action::Roll { value });
        info!(player = %self.current, roll = value, "rolled");
        Ok(value)
    }

    /// Take one step. Leaving a room with several exits in `direction`
    /// needs [`Game::attempt_exit`].
    pub fn attempt_move(&mut self, direction: Direction) -> Result<Step, GameError> {
        self.ensure_active()?;
        self.turn.require_moves()?;
        let mover = self.current_character()?;
        let step = check_step(
            &self.board,
            &self.state,
            mover,
            direction,
            None,
            self.turn.origin(),
        )
        .inspect_err(|err| debug!(%mover, %direction, %err, "move rejected"))?;
        Ok(self.take_step(mover, step, Action::Move { direction }))
    }

    /// Leave the current room in `direction` through the chosen exit cell.
    pub fn attempt_exit(&mut self, direction: Direction, exit: Cell) -> Result<Step, GameError> {
        self.ensure_active()?;
        self.turn.require_moves()?;
        let mover = self.current_character()?;
        if self.state.character(mover).room().is_none() {
            return Err(ActionError::NotInRoom.into());
        }
        let step = check_step(
            &self.board,
            &self.state,
            mover,
            direction,
            Some(exit),
            self.turn.origin(),
        )
        .inspect_err(|err| debug!(%mover, %direction, %err, "exit rejected"))?;
        Ok(self.take_step(mover, step, Action::Exit { direction, exit }))
    }

    fn take_step(&mut self, mover: CharacterName, step: Step, action: Action) -> Step {
        apply_step(&mut self.state, mover, step);
        self.turn.consume_step();
        if step.entered_room().is_some() {
            self.turn.end_movement();
        }
        self.state.record(self.current, action);
        debug!(%mover, ?step, remaining = self.turn.remaining(), "stepped");
        step
    }

    /// Use the current room's secret passage. Ends movement for the turn.
    pub fn take_secret_passage(&mut self) -> Result<RoomName, GameError> {
        self.ensure_active()?;
        let mover = self.current_character()?;
        let current = self.state.character(mover).room();
        let connection = current.and_then(|room| self.board.connection(room));
        let target = self.turn.require_passage(current, connection)?;

        self.state.place_in_room(mover, target);
        self.turn.end_movement();
        self.state
            .record(self.current, Action::SecretPassage { to: target });
        debug!(%mover, to = %target, "took secret passage");
        Ok(target)
    }

    /// Name a character and weapon in the current room.
    ///
    /// Both are moved into the room, movement ends, and an inquiry opens
    /// with the seat after the current player.
    pub fn hypothesize(
        &mut self,
        character: CharacterName,
        weapon: WeaponName,
    ) -> Result<InquiryStatus, GameError> {
        self.ensure_active()?;
        let mover = self.current_character()?;
        let room = self
            .turn
            .require_hypothesis(self.state.character(mover).room())?;

        self.state.place_in_room(character, room);
        self.state.place_weapon(weapon, room);
        self.turn.mark_hypothesized();
        self.state.record(
            self.current,
            Action::Hypothesize {
                character,
                weapon,
                room,
            },
        );

        let hypothesis = Hypothesis::new(character, weapon, room);
        info!(player = %self.current, %hypothesis, "hypothesis");

        let inquiry = Inquiry::new(self.current, hypothesis, self.state.player_count());
        let status = inquiry.status();
        if status.is_resolved() {
            self.last_inquiry = Some(status);
        } else {
            self.inquiry = Some(inquiry);
        }
        Ok(status)
    }

    /// Answer the pending inquiry for the respondent being asked.
    ///
    /// An invalid answer is rejected and the same respondent is asked again.
    pub fn respond(&mut self, choice: DisputeChoice) -> Result<InquiryStatus, GameError> {
        if self.result.is_some() {
            return Err(ActionError::GameOver.into());
        }
        let inquiry = self.inquiry.as_mut().ok_or(ActionError::NoInquiry)?;
        let respondent = inquiry.respondent().ok_or(ActionError::NoInquiry)?;
        let hand = self
            .state
            .player(respondent)
            .ok_or(InvariantError::UnknownPlayer(respondent))?
            .hand();

        let status = inquiry
            .respond(hand, choice)
            .inspect_err(|err| debug!(%respondent, %choice, %err, "dispute rejected"))?;

        let disproved = matches!(status, InquiryStatus::Disproved { .. });
        self.state
            .record(respondent, Action::Dispute { respondent, disproved });

        if status.is_resolved() {
            self.inquiry = None;
            self.last_inquiry = Some(status);
            match status {
                InquiryStatus::Disproved { by, .. } => {
                    info!(asker = %self.current, %by, "hypothesis disproved")
                }
                _ => info!(asker = %self.current, "hypothesis undisputed"),
            }
        }
        Ok(status)
    }

    /// Drive the pending inquiry to its end, asking `respondent` for each
    /// answer and feeding back rejected ones.
    ///
    /// Gives up with the last [`DisputeError`] after
    /// [`MAX_DISPUTE_ATTEMPTS`] invalid answers in a row from one player;
    /// the inquiry stays open and may be resumed.
    pub fn resolve_inquiry<R>(&mut self, respondent: &mut R) -> Result<InquiryStatus, GameError>
    where
        R: Respondent + ?Sized,
    {
        let mut rejected: Option<DisputeError> = None;
        let mut attempts = 0;
        loop {
            let inquiry = self.inquiry.as_ref().ok_or(ActionError::NoInquiry)?;
            let Some(asked) = inquiry.respondent() else {
                return Ok(inquiry.status());
            };
            let hand = self
                .state
                .player(asked)
                .ok_or(InvariantError::UnknownPlayer(asked))?
                .hand();
            let choice = respondent.choose(asked, hand, inquiry.hypothesis(), rejected.as_ref());

            match self.respond(choice) {
                Ok(status) if status.is_resolved() => return Ok(status),
                Ok(_) => {
                    rejected = None;
                    attempts = 0;
                }
                Err(GameError::Dispute(err)) => {
                    attempts += 1;
                    if attempts >= MAX_DISPUTE_ATTEMPTS {
                        return Err(err.into());
                    }
                    rejected = Some(err);
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// Accuse: name the room, the character and the weapon.
    ///
    /// A correct accusation wins the game. A wrong one eliminates the
    /// current player without revealing the solution, and ends their turn.
    pub fn accuse(
        &mut self,
        room: RoomName,
        character: CharacterName,
        weapon: WeaponName,
    ) -> Result<AccusationOutcome, GameError> {
        self.ensure_active()?;
        let accusation = Accusation::new(room, character, weapon);
        let outcome = accusation.judge(self.state.solution());

        self.state.record(
            self.current,
            Action::Accuse {
                character,
                weapon,
                room,
                correct: outcome == AccusationOutcome::Correct,
            },
        );
        info!(player = %self.current, %room, %character, %weapon, ?outcome, "accusation");

        match outcome {
            AccusationOutcome::Correct => self.declare(GameResult::SolvedBy(self.current)),
            AccusationOutcome::Wrong => {
                self.state
                    .eliminate_player(self.current)
                    .map_err(|err| self.invariant(err))?;
                self.advance_turn()?;
            }
        }
        Ok(outcome)
    }

    /// Look at the current player's own hand.
    pub fn view_hand(&mut self) -> Result<&Hand, GameError> {
        self.ensure_active()?;
        let player = self.current;
        self.state.record(player, Action::ViewHand);
        self.state
            .player(player)
            .map(Player::hand)
            .ok_or_else(|| InvariantError::UnknownPlayer(player).into())
    }

    /// Pass play to the next player still in the game.
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;
        if !self.turn.has_rolled() {
            return Err(ActionError::NotRolled.into());
        }
        self.state.record(self.current, Action::EndTurn);
        self.advance_turn()
    }

    // === Internals ===

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(ActionError::GameOver.into());
        }
        if let Some(respondent) = self.inquiry.as_ref().and_then(Inquiry::respondent) {
            return Err(ActionError::InquiryPending { respondent }.into());
        }
        Ok(())
    }

    fn current_character(&self) -> Result<CharacterName, GameError> {
        let player = self
            .state
            .player(self.current)
            .ok_or_else(|| self.invariant(InvariantError::UnknownPlayer(self.current)))?;
        let character = player.character();
        if !self.state.character(character).is_on_board() {
            return Err(self.invariant(InvariantError::CharacterOffBoard(character)));
        }
        Ok(character)
    }

    fn invariant(&self, err: InvariantError) -> GameError {
        error!(turn = self.state.turn_number(), %err, "invariant violated");
        err.into()
    }

    fn alive(&self) -> SmallVec<[PlayerId; 6]> {
        self.state.alive_players().collect()
    }

    fn check_last_standing(&mut self) -> Result<(), GameError> {
        match self.alive().as_slice() {
            [] => Err(self.invariant(InvariantError::NoPlayersAlive)),
            [only] => {
                self.declare(GameResult::LastStanding(*only));
                Err(ActionError::GameOver.into())
            }
            _ => Ok(()),
        }
    }

    fn advance_turn(&mut self) -> Result<(), GameError> {
        let alive = self.alive();
        match alive.as_slice() {
            [] => return Err(self.invariant(InvariantError::NoPlayersAlive)),
            [only] => {
                self.declare(GameResult::LastStanding(*only));
                return Ok(());
            }
            _ => {}
        }

        let next = self
            .current
            .others_in_order(self.state.player_count())
            .find(|p| alive.contains(p))
            .ok_or_else(|| self.invariant(InvariantError::NoPlayersAlive))?;

        self.current = next;
        self.state.advance_turn();
        let origin = self
            .state
            .player(next)
            .and_then(|p| self.state.character(p.character()).room());
        self.turn = TurnContext::new(next, origin);
        info!(player = %next, turn = self.state.turn_number(), "turn started");
        Ok(())
    }

    fn declare(&mut self, result: GameResult) {
        self.inquiry = None;
        self.result = Some(result);
        info!(%result, "game over");
    }
}
