//! The dispute protocol for a hypothesis.
//!
//! Every other player is asked in seating order, starting with the seat
//! after the asker and wrapping around. Each respondent must either show
//! one card naming a piece of the hypothesis, or decline. A respondent may
//! decline only if they hold none of the three cards, and may show only a
//! card they hold. The first card shown ends the inquiry; if everyone
//! declines, the hypothesis is undisputed.
//!
//! Invalid answers are rejected without advancing, so the same respondent
//! is asked again.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Hand;
use crate::core::{DisputeError, PlayerId};
use crate::pieces::{CharacterName, Piece, RoomName, WeaponName};

/// A hypothesis: this character, with this weapon, in this room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hypothesis {
    pub character: CharacterName,
    pub weapon: WeaponName,
    pub room: RoomName,
}

impl Hypothesis {
    #[must_use]
    pub fn new(character: CharacterName, weapon: WeaponName, room: RoomName) -> Self {
        Self {
            character,
            weapon,
            room,
        }
    }

    /// The named pieces: character, weapon, room.
    #[must_use]
    pub fn pieces(&self) -> [Piece; 3] {
        [
            Piece::Character(self.character),
            Piece::Weapon(self.weapon),
            Piece::Room(self.room),
        ]
    }
}

impl std::fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with the {} in the {}", self.character, self.weapon, self.room)
    }
}

/// A respondent's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum DisputeChoice {
    Room,
    Character,
    Weapon,
    /// Decline to dispute.
    None,
}

impl DisputeChoice {
    /// The piece this choice would show for `hypothesis`.
    #[must_use]
    pub fn piece(self, hypothesis: &Hypothesis) -> Option<Piece> {
        match self {
            DisputeChoice::Room => Some(Piece::Room(hypothesis.room)),
            DisputeChoice::Character => Some(Piece::Character(hypothesis.character)),
            DisputeChoice::Weapon => Some(Piece::Weapon(hypothesis.weapon)),
            DisputeChoice::None => None,
        }
    }

    /// The choice that shows `piece`.
    #[must_use]
    pub fn for_piece(piece: Piece) -> DisputeChoice {
        match piece {
            Piece::Character(_) => DisputeChoice::Character,
            Piece::Weapon(_) => DisputeChoice::Weapon,
            Piece::Room(_) => DisputeChoice::Room,
        }
    }
}

/// Where an inquiry stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryStatus {
    /// Waiting for this player to answer.
    Asking(PlayerId),
    /// `by` showed `card` to the asker. Nobody further is asked.
    Disproved { by: PlayerId, card: Piece },
    /// Every respondent validly declined.
    Undisputed,
}

impl InquiryStatus {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, InquiryStatus::Asking(_))
    }
}

/// An inquiry in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    asker: PlayerId,
    hypothesis: Hypothesis,
    respondents: SmallVec<[PlayerId; 5]>,
    cursor: usize,
    status: InquiryStatus,
}

impl Inquiry {
    /// Open an inquiry. Respondents are every other seat, in order from the
    /// seat after `asker`.
    #[must_use]
    pub fn new(asker: PlayerId, hypothesis: Hypothesis, player_count: usize) -> Self {
        let respondents: SmallVec<[PlayerId; 5]> = asker.others_in_order(player_count).collect();
        let status = match respondents.first() {
            Some(first) => InquiryStatus::Asking(*first),
            None => InquiryStatus::Undisputed,
        };
        Self {
            asker,
            hypothesis,
            respondents,
            cursor: 0,
            status,
        }
    }

    #[must_use]
    pub fn asker(&self) -> PlayerId {
        self.asker
    }

    #[must_use]
    pub fn hypothesis(&self) -> &Hypothesis {
        &self.hypothesis
    }

    #[must_use]
    pub fn status(&self) -> InquiryStatus {
        self.status
    }

    /// The player who must answer next, if the inquiry is still open.
    #[must_use]
    pub fn respondent(&self) -> Option<PlayerId> {
        match self.status {
            InquiryStatus::Asking(p) => Some(p),
            _ => None,
        }
    }

    /// Players who have answered validly so far, in order.
    #[must_use]
    pub fn answered(&self) -> &[PlayerId] {
        let end = match self.status {
            InquiryStatus::Asking(_) => self.cursor,
            InquiryStatus::Disproved { .. } => self.cursor + 1,
            InquiryStatus::Undisputed => self.respondents.len(),
        };
        &self.respondents[..end]
    }

    /// Answer for the current respondent, whose hand is `hand`.
    ///
    /// On an invalid answer nothing changes and the same respondent is
    /// still being asked. Answering a resolved inquiry returns its status.
    pub fn respond(
        &mut self,
        hand: &Hand,
        choice: DisputeChoice,
    ) -> Result<InquiryStatus, DisputeError> {
        let InquiryStatus::Asking(respondent) = self.status else {
            return Ok(self.status);
        };

        match choice.piece(&self.hypothesis) {
            Some(piece) => {
                if !hand.contains(piece) {
                    return Err(DisputeError::NotHeld { respondent, piece });
                }
                debug!(%respondent, "hypothesis disproved");
                self.status = InquiryStatus::Disproved {
                    by: respondent,
                    card: piece,
                };
            }
            None => {
                let pieces = self.hypothesis.pieces();
                if hand.matching(&pieces).next().is_some() {
                    return Err(DisputeError::MustDisclose { respondent });
                }
                debug!(%respondent, "respondent declined");
                self.cursor += 1;
                self.status = match self.respondents.get(self.cursor) {
                    Some(next) => InquiryStatus::Asking(*next),
                    None => InquiryStatus::Undisputed,
                };
            }
        }
        Ok(self.status)
    }
}
