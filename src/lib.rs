//! Cribbage and Yukon solitaire rules engines with optional `no_std` support.
//!
//! The crate provides the deterministic rules layer for two card games over
//! a standard 52-card deck: cribbage ([`scoring`], [`pegging`], and
//! [`discard`] ranking) and Yukon solitaire (the [`yukon`] board). Engines
//! compute legal moves, scores, and state transitions; input parsing,
//! rendering, and opponent strategy belong to the caller.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, Hand, Suit, score_hand};
//!
//! # fn main() -> Result<(), cribrs::CardError> {
//! // The highest-scoring hand in cribbage.
//! let hand = Hand::new(vec![
//!     Card::new(Suit::Spades, 5)?,
//!     Card::new(Suit::Clubs, 5)?,
//!     Card::new(Suit::Diamonds, 5)?,
//!     Card::new(Suit::Hearts, 11)?,
//! ]);
//! let starter = Card::new(Suit::Hearts, 5)?;
//! assert_eq!(score_hand(&hand, starter).total(), 29);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
mod crib_table;
pub mod discard;
pub mod error;
pub mod hand;
pub mod pegging;
pub mod scoring;
pub mod yukon;

// Re-export main types
pub use card::{
    ACE, Card, DECK_SIZE, JACK, KING, QUEEN, SUITS, Suit, parse_rank, resolve_card_token,
    rest_of_deck, shuffled_deck, standard_deck,
};
pub use discard::{Discard, rank_discards, score_discard};
pub use error::{
    CardError, DeckError, DiscardError, HandError, MoveError, ParseCardError, PlayError,
};
pub use hand::Hand;
pub use pegging::{PeggingScore, PlayedCard, Player, PlayerScores, Plays};
pub use scoring::{HandScore, Score, score_hand};
pub use yukon::{Board, Foundation, Location, PILE_COUNT, Pile};
