//! Discard ranking for the cribbage deal.
//!
//! After the deal each player keeps four of six cards. Every possible
//! two-card discard is scored by the expected value of the kept hand over
//! all possible starters, plus the expected value of the discarded pair in
//! the crib.

use alloc::vec::Vec;

use crate::card::Card;
use crate::crib_table;
use crate::error::DiscardError;
use crate::hand::Hand;
use crate::scoring::score_hand;

/// One candidate discard from a six-card deal.
#[derive(Debug, Clone, PartialEq)]
pub struct Discard {
    /// The four cards kept.
    pub hand: Hand,
    /// The two cards sent to the crib.
    pub discarded: [Card; 2],
    /// Mean score of the kept hand over every possible starter.
    pub hand_score: f64,
    /// Expected crib value of the discarded pair, negative when the crib is
    /// the opponent's.
    pub crib_score: f64,
}

impl Discard {
    /// Returns the combined expected value used for ranking.
    #[must_use]
    pub fn expected_total(&self) -> f64 {
        self.hand_score + self.crib_score
    }
}

/// Returns the expected crib value of a discarded pair of cards.
///
/// Looked up from a precomputed table by the two discarded ranks; the value
/// counts against the player when the crib is the opponent's.
#[must_use]
pub fn score_discard(discard: [Card; 2], players_crib: bool) -> f64 {
    crib_table::expected_value(discard[0].rank(), discard[1].rank(), players_crib)
}

/// Ranks all fifteen two-card discards from a six-card hand, best first.
///
/// Each discard's kept hand is scored against every card in `remaining` as
/// the starter and the scores averaged; the crib expectation of the
/// discarded pair is added. Ties keep enumeration order.
///
/// # Errors
///
/// Returns an error if the hand does not hold exactly six cards or if
/// `remaining` is empty.
#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for deck-sized counts"
)]
pub fn rank_discards(
    hand: &Hand,
    remaining: &[Card],
    players_crib: bool,
) -> Result<Vec<Discard>, DiscardError> {
    let cards = hand.cards();
    if cards.len() != 6 {
        return Err(DiscardError::WrongHandSize(cards.len()));
    }
    if remaining.is_empty() {
        return Err(DiscardError::NoRemainingCards);
    }

    let mut discards = Vec::with_capacity(15);
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let discarded = [cards[i], cards[j]];
            let kept = Hand::new(
                cards
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &card)| card)
                    .collect(),
            );
            let total: u32 = remaining
                .iter()
                .map(|&starter| score_hand(&kept, starter).total())
                .sum();
            discards.push(Discard {
                hand: kept,
                discarded,
                hand_score: f64::from(total) / remaining.len() as f64,
                crib_score: score_discard(discarded, players_crib),
            });
        }
    }
    // Stable sort keeps enumeration order on ties.
    discards.sort_by(|a, b| b.expected_total().total_cmp(&a.expected_total()));
    Ok(discards)
}
