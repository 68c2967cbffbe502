//! Per-turn bookkeeping and the action menu.
//!
//! A turn runs `AwaitingRoll -> Moving -> ActionChoice -> EndTurn`, with a
//! hypothesis opening an `Inquiry` phase until the dispute resolves. An
//! accusation may come at any point and always ends the turn.

use serde::{Deserialize, Serialize};

use crate::core::{ActionError, PlayerId};
use crate::pieces::RoomName;

/// Where the current turn stands.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum TurnPhase {
    AwaitingRoll,
    /// Rolled with steps left.
    Moving,
    /// Movement over; hypothesis, accusation, or end of turn remain.
    ActionChoice,
    /// A hypothesis is waiting for respondents.
    Inquiry,
    GameOver,
}

/// A command the current player may issue.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum TurnOption {
    Roll,
    Move,
    Hypothesize,
    Accuse,
    ViewHand,
    SecretPassage,
    EndTurn,
}

/// State of the turn in progress. Created when the turn starts and dropped
/// when it ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    player: PlayerId,
    roll: Option<u8>,
    remaining: u8,
    /// The room the character stood in when the turn began.
    origin: Option<RoomName>,
    hypothesized: bool,
}

impl TurnContext {
    #[must_use]
    pub fn new(player: PlayerId, origin: Option<RoomName>) -> Self {
        Self {
            player,
            roll: None,
            remaining: 0,
            origin,
            hypothesized: false,
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The die value, once rolled.
    #[must_use]
    pub fn roll(&self) -> Option<u8> {
        self.roll
    }

    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    #[must_use]
    pub fn origin(&self) -> Option<RoomName> {
        self.origin
    }

    #[must_use]
    pub fn has_rolled(&self) -> bool {
        self.roll.is_some()
    }

    #[must_use]
    pub fn has_hypothesized(&self) -> bool {
        self.hypothesized
    }

    pub(crate) fn set_roll(&mut self, value: u8) -> Result<(), ActionError> {
        if self.has_rolled() {
            return Err(ActionError::AlreadyRolled);
        }
        self.roll = Some(value);
        self.remaining = value;
        Ok(())
    }

    /// Use one step of the budget.
    pub(crate) fn consume_step(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Close the movement phase.
    pub(crate) fn end_movement(&mut self) {
        self.remaining = 0;
    }

    pub(crate) fn mark_hypothesized(&mut self) {
        self.hypothesized = true;
        self.end_movement();
    }

    /// Check that a step may be taken now.
    pub fn require_moves(&self) -> Result<(), ActionError> {
        if !self.has_rolled() {
            return Err(ActionError::NotRolled);
        }
        if self.remaining == 0 {
            return Err(ActionError::NoMovesLeft);
        }
        Ok(())
    }

    /// Whether the secret passage out of `current` may be taken, given the
    /// room the character is in and whether that room has a passage.
    pub fn require_passage(
        &self,
        current: Option<RoomName>,
        connection: Option<RoomName>,
    ) -> Result<RoomName, ActionError> {
        if !self.has_rolled() {
            return Err(ActionError::NotRolled);
        }
        let room = current.ok_or(ActionError::NotInRoom)?;
        let target = connection.ok_or(ActionError::NoSecretPassage { room })?;
        if self.origin != Some(room) || self.remaining == 0 {
            return Err(ActionError::PassageClosed);
        }
        Ok(target)
    }

    /// Whether a hypothesis may be made from `current`.
    pub fn require_hypothesis(&self, current: Option<RoomName>) -> Result<RoomName, ActionError> {
        if !self.has_rolled() {
            return Err(ActionError::NotRolled);
        }
        if self.hypothesized {
            return Err(ActionError::AlreadyHypothesized);
        }
        current.ok_or(ActionError::NotInRoom)
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.roll {
            None => TurnPhase::AwaitingRoll,
            Some(_) if self.remaining > 0 => TurnPhase::Moving,
            Some(_) => TurnPhase::ActionChoice,
        }
    }

    /// The menu to offer, given the character's current room and its
    /// passage link.
    #[must_use]
    pub fn options(&self, current: Option<RoomName>, connection: Option<RoomName>) -> Vec<TurnOption> {
        let mut options = Vec::new();
        if !self.has_rolled() {
            options.push(TurnOption::Roll);
        }
        if self.require_moves().is_ok() {
            options.push(TurnOption::Move);
        }
        if self.require_hypothesis(current).is_ok() {
            options.push(TurnOption::Hypothesize);
        }
        options.push(TurnOption::Accuse);
        options.push(TurnOption::ViewHand);
        if self.require_passage(current, connection).is_ok() {
            options.push(TurnOption::SecretPassage);
        }
        if self.has_rolled() {
            options.push(TurnOption::EndTurn);
        }
        options
    }
}
