//! A hand of cards in cribbage.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// A hand of cards, always kept sorted by (rank, suit).
///
/// The `is_crib` flag marks the dealer's crib, which scores flushes
/// differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    is_crib: bool,
}

impl Hand {
    /// Creates a hand from dealt cards.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self::with_crib(cards, false)
    }

    /// Creates a crib hand from discarded cards.
    #[must_use]
    pub fn crib(cards: Vec<Card>) -> Self {
        Self::with_crib(cards, true)
    }

    fn with_crib(mut cards: Vec<Card>, is_crib: bool) -> Self {
        cards.sort_unstable();
        Self { cards, is_crib }
    }

    /// Returns the cards in the hand, sorted by (rank, suit).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether this hand is a crib.
    #[must_use]
    pub const fn is_crib(&self) -> bool {
        self.is_crib
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Adds a card to the hand, keeping it sorted.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.cards.sort_unstable();
    }

    /// Removes a card from the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the hand; the hand is unchanged.
    pub fn discard(&mut self, card: Card) -> Result<Card, HandError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(HandError::CardNotInHand)?;
        Ok(self.cards.remove(index))
    }
}
