//! Cribbage pegging: the play phase, where cards are played alternately
//! against a running count capped at 31.

use alloc::vec::Vec;

use core::ops::Index;

use crate::card::Card;
use crate::error::PlayError;

/// A player in a two-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The first player.
    One,
    /// The second player.
    Two,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A single card played by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    /// Who played the card.
    pub player: Player,
    /// The card played.
    pub card: Card,
}

/// Point breakdown for a single pegging event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeggingScore {
    /// Two points for bringing the count to exactly 15.
    pub fifteen: u32,
    /// Two points for bringing the count to exactly 31.
    pub thirty_one: u32,
    /// One point awarded when the opponent says go.
    pub go: u32,
    /// 2, 6, or 12 points for 2, 3, or 4 consecutive same-rank plays.
    pub pair: u32,
    /// Run length when the play keeps the last plays consecutive.
    pub run: u32,
}

impl PeggingScore {
    /// A score worth nothing.
    pub const ZERO: Self = Self {
        fifteen: 0,
        thirty_one: 0,
        go: 0,
        pair: 0,
        run: 0,
    };

    /// Returns the total points across all categories.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.fifteen + self.thirty_one + self.go + self.pair + self.run
    }
}

/// Per-player point breakdown returned by a pegging operation.
///
/// A play credits only the acting player; a go credits only the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerScores([PeggingScore; 2]);

impl PlayerScores {
    /// Zero points for both players.
    pub const ZERO: Self = Self([PeggingScore::ZERO; 2]);

    fn crediting(player: Player, score: PeggingScore) -> Self {
        let mut scores = Self::ZERO;
        scores.0[player.index()] = score;
        scores
    }
}

impl Index<Player> for PlayerScores {
    type Output = PeggingScore;

    fn index(&self, player: Player) -> &PeggingScore {
        &self.0[player.index()]
    }
}

/// The cards in play during one pegging round.
///
/// Tracks the append-only play sequence, the running count (never allowed
/// past 31), the current run window, the go flags, and the points each
/// player has pegged this round.
#[derive(Debug, Clone, Default)]
pub struct Plays {
    played: Vec<PlayedCard>,
    count: u8,
    points: [u32; 2],
    run_window: Vec<PlayedCard>,
    gos: [bool; 2],
}

impl Plays {
    /// Creates an empty pegging round.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            played: Vec::new(),
            count: 0,
            points: [0; 2],
            run_window: Vec::new(),
            gos: [false; 2],
        }
    }

    /// Returns the current running count.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Returns the points a player has pegged this round.
    #[must_use]
    pub const fn points(&self, player: Player) -> u32 {
        self.points[player.index()]
    }

    /// Returns every play so far, in order.
    #[must_use]
    pub fn plays(&self) -> &[PlayedCard] {
        &self.played
    }

    /// Returns the cards a player has played so far, in play order.
    #[must_use]
    pub fn cards_played_by(&self, player: Player) -> Vec<Card> {
        self.played
            .iter()
            .filter(|p| p.player == player)
            .map(|p| p.card)
            .collect()
    }

    /// Scores a prospective play without mutating any state.
    ///
    /// Lets a strategy layer pick among legal plays.
    ///
    /// # Errors
    ///
    /// Returns an error if the play would push the count past 31.
    pub fn preview(&self, card: Card) -> Result<PeggingScore, PlayError> {
        self.score_play(card).map(|(score, _)| score)
    }

    /// Plays a card for a player and credits the points it scores.
    ///
    /// Reaching exactly 31 resets the count, the run window, and both go
    /// flags for the next stretch of play.
    ///
    /// # Errors
    ///
    /// Returns an error if the play would push the count past 31; no state
    /// changes.
    pub fn play(&mut self, player: Player, card: Card) -> Result<PlayerScores, PlayError> {
        let (score, extends_run) = self.score_play(card)?;
        let played = PlayedCard { player, card };

        self.played.push(played);
        if extends_run {
            self.run_window.push(played);
        } else {
            // The new play and its predecessor seed the next window.
            let start = self.played.len().saturating_sub(2);
            self.run_window = self.played[start..].to_vec();
        }
        self.count += card.value();
        self.points[player.index()] += score.total();

        if self.count == 31 {
            self.gos = [false; 2];
            self.count = 0;
            self.run_window.clear();
        }

        Ok(PlayerScores::crediting(player, score))
    }

    /// Declares that a player cannot play under 31.
    ///
    /// The first declaration in a stretch awards the opponent one point. If
    /// the opponent has already declared, both flags clear and the count and
    /// run window reset with no score. Re-declaring is a no-op.
    pub fn go(&mut self, player: Player) -> PlayerScores {
        let opponent = player.opponent();
        if self.gos[opponent.index()] {
            self.gos = [false; 2];
            self.count = 0;
            self.run_window.clear();
            return PlayerScores::ZERO;
        }
        if !self.gos[player.index()] {
            self.gos[player.index()] = true;
            self.points[opponent.index()] += 1;
            let score = PeggingScore {
                go: 1,
                ..PeggingScore::ZERO
            };
            return PlayerScores::crediting(opponent, score);
        }
        PlayerScores::ZERO
    }

    /// Scores a play against the current state, also reporting whether it
    /// extends the run window.
    fn score_play(&self, card: Card) -> Result<(PeggingScore, bool), PlayError> {
        let new_count = self.count + card.value();
        if new_count > 31 {
            return Err(PlayError::ExceedsThirtyOne);
        }

        let mut score = PeggingScore::ZERO;
        if new_count == 15 {
            score.fifteen = 2;
        }
        if new_count == 31 {
            score.thirty_one = 2;
        }

        // Pairs chain over the immediately preceding same-rank plays.
        let same_rank = self
            .played
            .iter()
            .rev()
            .take_while(|p| p.card.rank() == card.rank())
            .count();
        score.pair = match same_rank {
            0 => 0,
            1 => 2,
            2 => 6,
            _ => 12,
        };

        // A run extends when the window plus this card sorts into
        // consecutive ranks, regardless of play order.
        let mut extends_run = false;
        if !self.run_window.is_empty() {
            let mut ranks: Vec<u8> = self.run_window.iter().map(|p| p.card.rank()).collect();
            ranks.push(card.rank());
            ranks.sort_unstable();
            if ranks.windows(2).all(|pair| pair[1] == pair[0] + 1) {
                extends_run = true;
                if ranks.len() >= 3 {
                    score.run = ranks.len() as u32;
                }
            }
        }

        Ok((score, extends_run))
    }
}
