//! Cards and hands.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::pieces::Piece;

/// A card: one piece plus whether it is part of the secret solution.
///
/// The flag is set once at setup and never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    piece: Piece,
    is_solution: bool,
}

impl Card {
    #[must_use]
    pub fn new(piece: Piece, is_solution: bool) -> Self {
        Self { piece, is_solution }
    }

    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub fn is_solution(&self) -> bool {
        self.is_solution
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.piece, f)
    }
}

/// Who holds a card after setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardHolder {
    Player(PlayerId),
    /// Left over after the deal, visible to everyone.
    FaceUp,
    /// Sealed in the solution envelope.
    Envelope,
}

/// A player's hand. Membership is fixed once the deal completes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 6]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn deal(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True if this hand holds the card for `piece`.
    #[must_use]
    pub fn contains(&self, piece: impl Into<Piece>) -> bool {
        let piece = piece.into();
        self.cards.iter().any(|c| c.piece == piece)
    }

    /// The held cards among `pieces`, in the order given.
    pub fn matching<'a>(&'a self, pieces: &'a [Piece]) -> impl Iterator<Item = Piece> + 'a {
        pieces.iter().copied().filter(move |p| self.contains(*p))
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
