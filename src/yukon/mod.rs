//! Yukon solitaire board engine.
//!
//! A board is seven tableau piles dealt from a shuffled 52-card deck plus
//! four per-suit foundations. Unlike Klondike there is no stock: any group
//! of face-up cards may move between piles as a unit, as long as the
//! group's bottom card continues the destination pile.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE};
use crate::error::{DeckError, MoveError};

mod foundation;
mod pile;

pub use foundation::Foundation;
pub use pile::Pile;

/// Number of tableau piles.
pub const PILE_COUNT: usize = 7;

/// Cards dealt to each pile, leftmost pile first.
const PILE_SIZES: [usize; PILE_COUNT] = [1, 6, 7, 8, 9, 10, 11];
/// Face-up cards per pile at deal time.
const PILE_VISIBLE: [usize; PILE_COUNT] = [1, 5, 5, 5, 5, 5, 5];

/// The position of a card in the tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Index of the pile, leftmost is 0.
    pub pile: usize,
    /// Row within the pile, bottom is 0.
    pub row: usize,
}

/// A Yukon board: seven tableau piles and the foundations.
///
/// Every move is all-or-nothing: a rejected move leaves the board exactly
/// as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    piles: Vec<Pile>,
    foundation: Foundation,
}

impl Board {
    /// Deals a new board from a 52-card deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck does not hold exactly 52 cards.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the deal sizes always satisfy the pile visibility invariant"
    )]
    pub fn new(deck: &[Card]) -> Result<Self, DeckError> {
        if deck.len() != DECK_SIZE {
            return Err(DeckError::WrongDeckSize(deck.len()));
        }
        let mut piles = Vec::with_capacity(PILE_COUNT);
        let mut dealt = 0;
        for (size, visible) in PILE_SIZES.into_iter().zip(PILE_VISIBLE) {
            let cards = deck[dealt..dealt + size].to_vec();
            dealt += size;
            piles.push(Pile::new(cards, visible).expect("deal keeps visible <= pile size"));
        }
        Ok(Self {
            piles,
            foundation: Foundation::new(),
        })
    }

    /// Returns the tableau piles, leftmost first.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Returns the foundations.
    #[must_use]
    pub const fn foundation(&self) -> &Foundation {
        &self.foundation
    }

    /// Returns whether every foundation has been built up to its King.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.foundation.is_complete()
    }

    /// Finds a face-up card in the tableau.
    #[must_use]
    pub fn locate(&self, card: Card) -> Option<Location> {
        self.piles.iter().enumerate().find_map(|(pile, p)| {
            p.find(card)
                .and_then(|(row, face_up)| face_up.then_some(Location { pile, row }))
        })
    }

    /// Moves the top `count` face-up cards from one pile onto another as a
    /// unit. `None` moves every face-up card.
    ///
    /// # Errors
    ///
    /// Returns an error if either index names no pile, the source cannot
    /// give up that many cards, or the cards do not continue the
    /// destination; nothing moves on error.
    #[expect(
        clippy::missing_panics_doc,
        reason = "placement is verified before the pop, so the add cannot fail"
    )]
    pub fn move_cards(
        &mut self,
        from: usize,
        to: usize,
        count: Option<usize>,
    ) -> Result<(), MoveError> {
        if from >= self.piles.len() || to >= self.piles.len() {
            return Err(MoveError::NoSuchPile);
        }
        if from == to {
            return Err(MoveError::CannotPlace);
        }
        let count = count.unwrap_or_else(|| self.piles[from].visible());
        let moving = self.piles[from].peek_top(count)?;
        if !self.piles[to].can_add(moving) {
            return Err(MoveError::CannotPlace);
        }
        let cards = self.piles[from].pop_cards(count)?;
        // can_add was checked against these exact cards.
        self.piles[to]
            .add_cards(cards)
            .expect("placement was verified before the pop");
        Ok(())
    }

    /// Moves the face-up group starting at `location` onto another pile.
    ///
    /// # Errors
    ///
    /// As for [`Board::move_cards`].
    pub fn move_from(&mut self, location: Location, to: usize) -> Result<(), MoveError> {
        let pile = self.piles.get(location.pile).ok_or(MoveError::NoSuchPile)?;
        if location.row >= pile.len() {
            return Err(MoveError::NotEnoughCards);
        }
        let count = pile.len() - location.row;
        self.move_cards(location.pile, to, Some(count))
    }

    /// Moves the top card of a pile onto the foundation.
    ///
    /// # Errors
    ///
    /// Returns an error if the index names no pile, the pile has no face-up
    /// card, or the card does not continue its suit's foundation; nothing
    /// moves on error.
    pub fn move_to_foundation(&mut self, from: usize) -> Result<(), MoveError> {
        if from >= self.piles.len() {
            return Err(MoveError::NoSuchPile);
        }
        let card = self.piles[from].peek_top(1)?[0];
        if !self.foundation.can_build(card) {
            return Err(MoveError::CannotBuild);
        }
        let _ = self.piles[from].pop_cards(1)?;
        self.foundation.build(card)
    }

    /// Builds every available card onto the foundations, sweeping the piles
    /// until a full pass makes no move. Returns how many cards were built.
    pub fn build_foundations(&mut self) -> usize {
        let mut built = 0;
        loop {
            let mut progressed = false;
            for index in 0..self.piles.len() {
                if !self.piles[index].is_empty() && self.move_to_foundation(index).is_ok() {
                    progressed = true;
                    built += 1;
                }
            }
            if !progressed {
                break;
            }
        }
        built
    }
}
