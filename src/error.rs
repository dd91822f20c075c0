//! Error types for engine operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("rank {rank} is out of range 1..=13")]
    InvalidRank {
        /// The rejected rank.
        rank: u8,
    },
}

/// Errors that can occur parsing a card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token does not look like a card at all.
    #[error("unrecognized card token `{0}`")]
    UnknownToken(String),
    /// The rank part of the token names no rank.
    #[error("unrecognized rank `{0}`")]
    UnknownRank(String),
    /// The suit character names no suit.
    #[error("unrecognized suit `{0}`")]
    UnknownSuit(char),
    /// No candidate card has the named rank.
    #[error("no card of rank `{0}` to choose from")]
    NoSuchRank(String),
    /// More than one candidate card has the named rank.
    #[error("rank `{0}` is ambiguous, more than one card matches")]
    AmbiguousRank(String),
}

/// Errors that can occur mutating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is not in the hand.
    #[error("card is not in the hand")]
    CardNotInHand,
}

/// Errors that can occur playing a card during pegging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The play would push the running count past 31.
    #[error("cannot play a card that would exceed 31")]
    ExceedsThirtyOne,
}

/// Errors that can occur ranking discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// Discard ranking requires exactly six cards.
    #[error("discard ranking requires a 6-card hand, got {0}")]
    WrongHandSize(usize),
    /// No starter cards remain to average over.
    #[error("no remaining cards to draw a starter from")]
    NoRemainingCards,
}

/// Errors that can occur dealing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A Yukon deal requires a full 52-card deck.
    #[error("a deal requires 52 cards, got {0}")]
    WrongDeckSize(usize),
}

/// Errors that can occur moving cards on a Yukon board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The pile index does not name a tableau pile.
    #[error("no such pile")]
    NoSuchPile,
    /// The pile holds fewer cards than requested.
    #[error("not enough cards in the pile")]
    NotEnoughCards,
    /// The request reaches below the face-up cards.
    #[error("cannot move more cards than are visible")]
    NotEnoughVisible,
    /// The cards do not continue the destination pile.
    #[error("cards cannot be placed on this pile")]
    CannotPlace,
    /// The card does not continue its suit's foundation.
    #[error("card cannot be built on the foundation")]
    CannotBuild,
    /// A pile cannot have more visible cards than cards.
    #[error("visible count exceeds pile size")]
    VisibleExceedsPile,
}
