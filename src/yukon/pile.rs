//! A tableau pile.

use alloc::vec::Vec;

use crate::card::{Card, KING};
use crate::error::MoveError;

/// A pile of cards with a trailing run of face-up cards.
///
/// Cards are ordered bottom to top. The number of visible cards never
/// exceeds the pile length; every mutating operation re-establishes this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
    visible: usize,
}

impl Pile {
    /// Creates a pile with the given trailing face-up count.
    ///
    /// # Errors
    ///
    /// Returns an error if `visible` exceeds the number of cards.
    pub fn new(cards: Vec<Card>, visible: usize) -> Result<Self, MoveError> {
        if visible > cards.len() {
            return Err(MoveError::VisibleExceedsPile);
        }
        Ok(Self { cards, visible })
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of face-up cards at the top of the pile.
    #[must_use]
    pub const fn visible(&self) -> usize {
        self.visible
    }

    /// Returns every card in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up cards, bottom first.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        &self.cards[self.cards.len() - self.visible..]
    }

    /// Finds a card, returning its row index and whether it is face up.
    #[must_use]
    pub fn find(&self, card: Card) -> Option<(usize, bool)> {
        self.cards
            .iter()
            .position(|&c| c == card)
            .map(|row| (row, row >= self.cards.len() - self.visible))
    }

    fn check_pop(&self, count: usize) -> Result<(), MoveError> {
        if count > self.cards.len() {
            return Err(MoveError::NotEnoughCards);
        }
        if count > self.visible {
            return Err(MoveError::NotEnoughVisible);
        }
        Ok(())
    }

    /// Returns the top `count` cards without removing them, bottom first.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` exceeds the pile length or the visible
    /// count.
    pub fn peek_top(&self, count: usize) -> Result<&[Card], MoveError> {
        self.check_pop(count)?;
        Ok(&self.cards[self.cards.len() - count..])
    }

    /// Removes and returns the top `count` cards, bottom first.
    ///
    /// Popping turns up at most one new card: the visible count drops by
    /// `count` but stays at least 1 while cards remain, and becomes 0 when
    /// the pile empties.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` exceeds the pile length or the visible
    /// count; the pile is unchanged.
    pub fn pop_cards(&mut self, count: usize) -> Result<Vec<Card>, MoveError> {
        self.check_pop(count)?;
        let popped = self.cards.split_off(self.cards.len() - count);
        self.visible = (self.visible - count).max(1);
        if self.cards.is_empty() {
            self.visible = 0;
        }
        Ok(popped)
    }

    /// Returns whether the cards may be placed on this pile: the incoming
    /// bottom card must be one rank below the pile's top card and of the
    /// opposite color, or a King onto an empty pile.
    #[must_use]
    pub fn can_add(&self, cards: &[Card]) -> bool {
        let Some(&bottom) = cards.first() else {
            return false;
        };
        match self.cards.last() {
            Some(&top) => bottom.rank() + 1 == top.rank() && bottom.opposite_color(top),
            None => bottom.rank() == KING,
        }
    }

    /// Places the cards on top of the pile, all face up.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards may not be placed; the pile is
    /// unchanged.
    pub fn add_cards(&mut self, cards: Vec<Card>) -> Result<(), MoveError> {
        if !self.can_add(&cards) {
            return Err(MoveError::CannotPlace);
        }
        self.visible += cards.len();
        self.cards.extend(cards);
        Ok(())
    }
}
