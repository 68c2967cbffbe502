//! Answering dispute prompts.
//!
//! A presentation layer implements [`Respondent`] to put each prompt in
//! front of the right player. [`Game::resolve_inquiry`] drives an inquiry to
//! the end, feeding rejected answers back so the same player can try again.
//!
//! [`Game::resolve_inquiry`]: crate::game::Game::resolve_inquiry

use crate::cards::Hand;
use crate::core::{DisputeError, PlayerId};

use super::inquiry::{DisputeChoice, Hypothesis};

/// Something that can answer a dispute prompt on behalf of a player.
pub trait Respondent {
    /// Choose an answer for `respondent`, who holds `hand`.
    ///
    /// `rejected` carries the error from this respondent's previous invalid
    /// answer, if any.
    fn choose(
        &mut self,
        respondent: PlayerId,
        hand: &Hand,
        hypothesis: &Hypothesis,
        rejected: Option<&DisputeError>,
    ) -> DisputeChoice;
}

/// Answers every prompt with the first held match, in character, weapon,
/// room order, and declines when nothing matches. Never gives an invalid
/// answer.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMatch;

impl Respondent for FirstMatch {
    fn choose(
        &mut self,
        _respondent: PlayerId,
        hand: &Hand,
        hypothesis: &Hypothesis,
        _rejected: Option<&DisputeError>,
    ) -> DisputeChoice {
        let pieces = hypothesis.pieces();
        let first = hand.matching(&pieces).next();
        first.map_or(DisputeChoice::None, DisputeChoice::for_piece)
    }
}

impl<F> Respondent for F
where
    F: FnMut(PlayerId, &Hand, &Hypothesis, Option<&DisputeError>) -> DisputeChoice,
{
    fn choose(
        &mut self,
        respondent: PlayerId,
        hand: &Hand,
        hypothesis: &Hypothesis,
        rejected: Option<&DisputeError>,
    ) -> DisputeChoice {
        self(respondent, hand, hypothesis, rejected)
    }
}
