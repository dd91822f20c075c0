//! Card types, token parsing, and deck utilities.

use alloc::string::String;
use alloc::vec::Vec;

use core::cmp::Ordering;
use core::str::FromStr;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::{CardError, ParseCardError};

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// All four suits, in their canonical order.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

impl Suit {
    /// Returns whether the suit is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// A playing card.
///
/// Cards are pure values: equality and ordering are by (rank, suit), and a
/// deck contains exactly one card per (suit, rank) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank is outside `1..=13`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank { rank });
        }
        Ok(Self { suit, rank })
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the count value of the card in cribbage: face cards count 10,
    /// everything else counts its rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        if self.rank > 10 { 10 } else { self.rank }
    }

    /// Returns whether the card is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    /// Returns whether the two cards are different colors.
    #[must_use]
    pub const fn opposite_color(self, other: Self) -> bool {
        self.is_red() != other.is_red()
    }

    /// Returns the card of the same suit one rank lower, or `None` for an Ace.
    #[must_use]
    pub const fn lower(self) -> Option<Self> {
        if self.rank == ACE {
            None
        } else {
            Some(Self {
                suit: self.suit,
                rank: self.rank - 1,
            })
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.rank, self.suit).cmp(&(other.rank, other.suit))
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a rank-then-suit token such as `"AS"`, `"10D"`, `"TD"`, or `"kh"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let Some((split, suit_char)) = token.char_indices().last() else {
            return Err(ParseCardError::UnknownToken(String::from(token)));
        };
        if split == 0 {
            return Err(ParseCardError::UnknownToken(String::from(token)));
        }
        let suit = parse_suit(suit_char)?;
        let rank = parse_rank(&token[..split])?;
        Self::new(suit, rank).map_err(|_| ParseCardError::UnknownToken(String::from(token)))
    }
}

/// Parses a rank token: `A`, `T`, `J`, `Q`, `K`, or a number in `1..=13`,
/// case-insensitive.
///
/// Interface layers use this to resolve bare-rank input against a hand when
/// the suit is unambiguous.
///
/// # Errors
///
/// Returns an error carrying the token if it names no rank.
pub fn parse_rank(token: &str) -> Result<u8, ParseCardError> {
    for (name, rank) in [("A", ACE), ("T", 10), ("J", JACK), ("Q", QUEEN), ("K", KING)] {
        if token.eq_ignore_ascii_case(name) {
            return Ok(rank);
        }
    }
    match token.parse::<u8>() {
        Ok(rank @ ACE..=KING) => Ok(rank),
        _ => Err(ParseCardError::UnknownRank(String::from(token))),
    }
}

/// Resolves a card token against a set of candidate cards.
///
/// A full rank-then-suit token parses directly. A bare rank token resolves
/// to the candidate of that rank when exactly one exists, so interface
/// layers can accept `"7"` against a hand holding a single seven.
///
/// # Errors
///
/// Returns an error if the token names no rank, no candidate has the rank,
/// or more than one candidate does.
pub fn resolve_card_token(token: &str, candidates: &[Card]) -> Result<Card, ParseCardError> {
    if let Ok(card) = token.parse::<Card>() {
        return Ok(card);
    }
    let rank = parse_rank(token)?;
    let mut matching = candidates.iter().copied().filter(|c| c.rank() == rank);
    let Some(card) = matching.next() else {
        return Err(ParseCardError::NoSuchRank(String::from(token)));
    };
    if matching.next().is_some() {
        return Err(ParseCardError::AmbiguousRank(String::from(token)));
    }
    Ok(card)
}

fn parse_suit(c: char) -> Result<Suit, ParseCardError> {
    match c.to_ascii_uppercase() {
        'H' => Ok(Suit::Hearts),
        'D' => Ok(Suit::Diamonds),
        'C' => Ok(Suit::Clubs),
        'S' => Ok(Suit::Spades),
        _ => Err(ParseCardError::UnknownSuit(c)),
    }
}

/// Builds a fresh 52-card deck in suit-then-rank order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in SUITS {
        for rank in ACE..=KING {
            cards.push(Card { suit, rank });
        }
    }
    cards
}

/// Builds a 52-card deck shuffled with the given seed.
#[must_use]
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cards = standard_deck();
    cards.shuffle(&mut rng);
    cards
}

/// Returns the cards of a standard deck not present in `used`.
#[must_use]
pub fn rest_of_deck(used: &[Card]) -> Vec<Card> {
    standard_deck()
        .into_iter()
        .filter(|card| !used.contains(card))
        .collect()
}
