//! Cribbage hand scoring.
//!
//! A hand is scored together with the shared starter card. Every category
//! reports both its point total and the literal card groupings that earned
//! it, so an interface layer can explain the score.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Card, JACK};
use crate::hand::Hand;

/// Points awarded for one scoring category, with the card groupings that
/// earned them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Score {
    /// Point total for the category.
    pub total: u32,
    /// The card groupings that earned the points.
    pub combinations: Vec<Vec<Card>>,
}

impl Score {
    const fn none() -> Self {
        Self {
            total: 0,
            combinations: Vec::new(),
        }
    }
}

/// Full category breakdown for a scored hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandScore {
    /// Two points per distinct subset summing to fifteen.
    pub fifteens: Score,
    /// Two points per distinct equal-rank pair.
    pub pairs: Score,
    /// The single maximal run, duplicates multiplying.
    pub runs: Score,
    /// Four points for a hand flush, five including the starter.
    pub flush: Score,
    /// One point for the Jack matching the starter's suit.
    pub his_nobs: Score,
}

impl HandScore {
    /// Returns the total score across all categories.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.fifteens.total
            + self.pairs.total
            + self.runs.total
            + self.flush.total
            + self.his_nobs.total
    }
}

/// Scores a cribbage hand against the starter card.
///
/// Pure function: the same hand and starter always produce the same score.
/// Hand size is the caller's contract; any size is scored by the same rules.
#[must_use]
pub fn score_hand(hand: &Hand, starter: Card) -> HandScore {
    HandScore {
        fifteens: score_fifteens(hand, starter),
        pairs: score_pairs(hand, starter),
        runs: score_runs(hand, starter),
        flush: score_flush(hand, starter),
        his_nobs: score_his_nobs(hand, starter),
    }
}

fn with_starter(hand: &Hand, starter: Card) -> Vec<Card> {
    let mut cards = hand.cards().to_vec();
    cards.push(starter);
    cards
}

/// Scores the fifteens: every subset of two or more cards whose count
/// values sum to fifteen is worth two points.
#[must_use]
pub fn score_fifteens(hand: &Hand, starter: Card) -> Score {
    let cards = with_starter(hand, starter);
    let mut combinations = Vec::new();
    for mask in 0_u32..(1 << cards.len()) {
        if mask.count_ones() < 2 {
            continue;
        }
        let subset: Vec<Card> = cards
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, &card)| card)
            .collect();
        if subset.iter().map(|c| u32::from(c.value())).sum::<u32>() == 15 {
            combinations.push(subset);
        }
    }
    Score {
        total: 2 * combinations.len() as u32,
        combinations,
    }
}

/// Scores the pairs: every unordered equal-rank pair is worth two points,
/// so k of a kind scores `2 * C(k, 2)`.
#[must_use]
pub fn score_pairs(hand: &Hand, starter: Card) -> Score {
    let cards = with_starter(hand, starter);
    let mut combinations = Vec::new();
    for (i, &first) in cards.iter().enumerate() {
        for &second in &cards[i + 1..] {
            if first.rank() == second.rank() {
                combinations.push(vec![first, second]);
            }
        }
    }
    Score {
        total: 2 * combinations.len() as u32,
        combinations,
    }
}

/// Scores the runs: the longest run of three or more consecutive ranks,
/// with duplicated ranks multiplying the score.
///
/// Ranks are scanned ascending and consecutive-or-equal ranks accumulate
/// into a single group; the first group of three or more distinct ranks is
/// scored. A legal five-card hand holds at most one run family, so this
/// single-region scan is complete for cribbage; it does not generalize to
/// larger hands.
#[must_use]
pub fn score_runs(hand: &Hand, starter: Card) -> Score {
    let mut cards = with_starter(hand, starter);
    cards.sort_unstable_by_key(|c| c.rank());

    let mut group = vec![cards[0]];
    for &card in &cards[1..] {
        let last = group[group.len() - 1].rank();
        if card.rank() == last + 1 || card.rank() == last {
            group.push(card);
        } else {
            if let Some(score) = run_score(&group) {
                return score;
            }
            group = vec![card];
        }
    }
    run_score(&group).unwrap_or_else(Score::none)
}

/// Scores a group of consecutive-or-equal ranks, or `None` if it spans
/// fewer than three distinct ranks.
fn run_score(group: &[Card]) -> Option<Score> {
    // Per-rank multiplicities; the group is sorted by rank.
    let mut counts = vec![1_u32];
    for pair in group.windows(2) {
        if pair[0].rank() == pair[1].rank() {
            let last = counts.len() - 1;
            counts[last] += 1;
        } else {
            counts.push(1);
        }
    }
    let length = counts.len() as u32;
    if length < 3 {
        return None;
    }
    let multiplier: u32 = counts.iter().product();
    Some(Score {
        total: length * multiplier,
        combinations: vec![group.to_vec()],
    })
}

/// Scores the flush: five points when the whole hand and the starter share
/// a suit, four when only the hand does. A crib scores nothing for a
/// four-card flush.
#[must_use]
pub fn score_flush(hand: &Hand, starter: Card) -> Score {
    let cards = hand.cards();
    if !cards.is_empty() && cards.iter().all(|c| c.suit() == starter.suit()) {
        return Score {
            total: 5,
            combinations: vec![with_starter(hand, starter)],
        };
    }
    if !hand.is_crib() {
        if let Some(&first) = cards.first() {
            if cards.iter().all(|c| c.suit() == first.suit()) {
                return Score {
                    total: 4,
                    combinations: vec![cards.to_vec()],
                };
            }
        }
    }
    Score::none()
}

/// Scores his nobs: one point for a Jack in hand matching the starter's
/// suit, at most once.
#[must_use]
pub fn score_his_nobs(hand: &Hand, starter: Card) -> Score {
    for &card in hand.cards() {
        if card.rank() == JACK && card.suit() == starter.suit() {
            return Score {
                total: 1,
                combinations: vec![vec![card, starter]],
            };
        }
    }
    Score::none()
}
