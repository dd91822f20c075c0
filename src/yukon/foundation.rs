//! The foundations, built upward by suit.

use crate::card::{Card, KING, SUITS, Suit};
use crate::error::MoveError;

/// The four per-suit foundations.
///
/// Each suit builds strictly upward from its Ace; the board is solved when
/// every foundation reaches its King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Foundation {
    tops: [Option<Card>; 4],
}

impl Foundation {
    /// Creates an empty foundation.
    #[must_use]
    pub const fn new() -> Self {
        Self { tops: [None; 4] }
    }

    /// Returns the current top card of a suit's foundation.
    #[must_use]
    pub const fn top(&self, suit: Suit) -> Option<Card> {
        self.tops[suit as usize]
    }

    /// Returns whether the card may be built next: an Ace starts its suit,
    /// any other card requires its suit's top to be exactly one rank lower.
    #[must_use]
    pub fn can_build(&self, card: Card) -> bool {
        match card.lower() {
            None => self.top(card.suit()).is_none(),
            Some(lower) => self.top(card.suit()) == Some(lower),
        }
    }

    /// Builds the card onto its suit's foundation.
    ///
    /// # Errors
    ///
    /// Returns an error if the card may not be built; the foundation is
    /// unchanged.
    pub fn build(&mut self, card: Card) -> Result<(), MoveError> {
        if !self.can_build(card) {
            return Err(MoveError::CannotBuild);
        }
        self.tops[card.suit() as usize] = Some(card);
        Ok(())
    }

    /// Returns whether every suit has been built up to its King.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        SUITS
            .iter()
            .all(|&suit| matches!(self.top(suit), Some(card) if card.rank() == KING))
    }
}
