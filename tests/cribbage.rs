//! Cribbage engine integration tests.

use cribrs::{
    Card, CardError, DiscardError, Hand, HandError, ParseCardError, PeggingScore, PlayError,
    Player, PlayerScores, Plays, Suit, rank_discards, resolve_card_token, rest_of_deck,
    score_discard, score_hand, scoring, shuffled_deck, standard_deck,
};

fn c(token: &str) -> Card {
    token.parse().unwrap()
}

fn hand(tokens: &[&str]) -> Hand {
    Hand::new(tokens.iter().map(|t| c(t)).collect())
}

fn crib(tokens: &[&str]) -> Hand {
    Hand::crib(tokens.iter().map(|t| c(t)).collect())
}

fn zero_scores(scores: PlayerScores) {
    assert_eq!(scores[Player::One], PeggingScore::ZERO);
    assert_eq!(scores[Player::Two], PeggingScore::ZERO);
}

#[test]
fn card_construction_validates_rank() {
    assert!(Card::new(Suit::Hearts, 1).is_ok());
    assert!(Card::new(Suit::Hearts, 13).is_ok());
    assert_eq!(
        Card::new(Suit::Hearts, 0).unwrap_err(),
        CardError::InvalidRank { rank: 0 }
    );
    assert_eq!(
        Card::new(Suit::Spades, 14).unwrap_err(),
        CardError::InvalidRank { rank: 14 }
    );
}

#[test]
fn card_ordering_is_rank_then_suit() {
    let mut cards = vec![c("KS"), c("AH"), c("2D"), c("2H"), c("AS")];
    cards.sort();
    assert_eq!(cards, vec![c("AH"), c("AS"), c("2H"), c("2D"), c("KS")]);
}

#[test]
fn card_values_and_lower() {
    assert_eq!(c("AH").value(), 1);
    assert_eq!(c("9H").value(), 9);
    assert_eq!(c("TH").value(), 10);
    assert_eq!(c("JH").value(), 10);
    assert_eq!(c("KH").value(), 10);

    assert_eq!(c("2C").lower(), Some(c("AC")));
    assert_eq!(c("KD").lower(), Some(c("QD")));
    assert_eq!(c("AS").lower(), None);
}

#[test]
fn card_token_parsing() {
    assert_eq!(c("AS"), Card::new(Suit::Spades, 1).unwrap());
    assert_eq!(c("10D"), Card::new(Suit::Diamonds, 10).unwrap());
    assert_eq!(c("TD"), c("10D"));
    assert_eq!(c("kh"), Card::new(Suit::Hearts, 13).unwrap());
    assert_eq!(c(" 5h "), Card::new(Suit::Hearts, 5).unwrap());
    assert_eq!(c("13S"), c("KS"));

    assert!(matches!(
        "S".parse::<Card>(),
        Err(ParseCardError::UnknownToken(_))
    ));
    assert!(matches!(
        "1X".parse::<Card>(),
        Err(ParseCardError::UnknownSuit('X'))
    ));
    assert!(matches!(
        "14H".parse::<Card>(),
        Err(ParseCardError::UnknownRank(_))
    ));
    assert!(matches!(
        "".parse::<Card>(),
        Err(ParseCardError::UnknownToken(_))
    ));
}

#[test]
fn card_token_resolution_against_a_hand() {
    let held = [c("7H"), c("5D"), c("5S"), c("KC")];

    // A bare rank picks the only matching card.
    assert_eq!(resolve_card_token("7", &held).unwrap(), c("7H"));
    assert_eq!(resolve_card_token("K", &held).unwrap(), c("KC"));
    // A full token is taken at face value.
    assert_eq!(resolve_card_token("5D", &held).unwrap(), c("5D"));

    assert!(matches!(
        resolve_card_token("5", &held),
        Err(ParseCardError::AmbiguousRank(_))
    ));
    assert!(matches!(
        resolve_card_token("9", &held),
        Err(ParseCardError::NoSuchRank(_))
    ));
    assert!(matches!(
        resolve_card_token("X", &held),
        Err(ParseCardError::UnknownRank(_))
    ));
}

#[test]
fn deck_factory_and_rest_of_deck() {
    let deck = standard_deck();
    assert_eq!(deck.len(), 52);
    let mut unique = deck.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 52);

    let used = [c("AH"), c("KS")];
    let rest = rest_of_deck(&used);
    assert_eq!(rest.len(), 50);
    assert!(!rest.contains(&c("AH")));
    assert!(!rest.contains(&c("KS")));

    // Shuffling is deterministic per seed.
    assert_eq!(shuffled_deck(7), shuffled_deck(7));
    assert_ne!(shuffled_deck(7), shuffled_deck(8));
    let mut sorted = shuffled_deck(7);
    sorted.sort();
    unique.sort();
    assert_eq!(sorted, unique);
}

#[test]
fn hand_stays_sorted_and_discards() {
    let mut hand = hand(&["KS", "AH", "7D", "7H"]);
    assert_eq!(hand.cards(), &[c("AH"), c("7H"), c("7D"), c("KS")]);

    hand.add(c("3C"));
    assert_eq!(hand.cards()[1], c("3C"));
    assert_eq!(hand.len(), 5);

    let discarded = hand.discard(c("7D")).unwrap();
    assert_eq!(discarded, c("7D"));
    assert!(!hand.contains(c("7D")));
    assert_eq!(
        hand.discard(c("7D")).unwrap_err(),
        HandError::CardNotInHand
    );
    assert_eq!(hand.len(), 4);

    assert!(!hand.is_crib());
    assert!(crib(&["AH"]).is_crib());
}

#[test]
fn fifteens_scoring() {
    let no_fifteens = scoring::score_fifteens(&hand(&["AH", "AD", "AS", "AC"]), c("2H"));
    assert_eq!(no_fifteens.total, 0);
    assert!(no_fifteens.combinations.is_empty());

    // The 29 hand: eight distinct ways to make fifteen.
    let best = scoring::score_fifteens(&hand(&["JH", "5D", "5S", "5C"]), c("5H"));
    assert_eq!(best.total, 16);
    assert_eq!(best.combinations.len(), 8);

    assert_eq!(
        scoring::score_fifteens(&hand(&["6H", "7D", "8S", "9C"]), c("5H")).total,
        4
    );
    assert_eq!(
        scoring::score_fifteens(&hand(&["3H", "3D", "4S", "5C"]), c("6H")).total,
        4
    );
    assert_eq!(
        scoring::score_fifteens(&hand(&["JH", "JD", "5S", "AC"]), c("5H")).total,
        8
    );
}

#[test]
fn pairs_scoring() {
    // k of a kind scores 2 * C(k, 2).
    assert_eq!(
        scoring::score_pairs(&hand(&["AH", "AD", "AS", "AC"]), c("2H")).total,
        12
    );
    assert_eq!(
        scoring::score_pairs(&hand(&["AH", "AD", "AS", "5C"]), c("JH")).total,
        6
    );
    assert_eq!(
        scoring::score_pairs(&hand(&["AH", "AD", "AS", "5C"]), c("5H")).total,
        8
    );
    assert_eq!(
        scoring::score_pairs(&hand(&["JH", "8D", "7S", "6C"]), c("JD")).total,
        2
    );
    assert_eq!(
        scoring::score_pairs(&hand(&["JH", "8D", "8S", "6C"]), c("6H")).total,
        4
    );
    assert_eq!(
        scoring::score_pairs(&hand(&["JH", "QD", "KS", "10C"]), c("AH")).total,
        0
    );
}

#[test]
fn flush_scoring() {
    assert_eq!(
        scoring::score_flush(&hand(&["JH", "QD", "KS", "10C"]), c("AH")).total,
        0
    );
    // Four of a suit split across hand and starter is not a flush.
    assert_eq!(
        scoring::score_flush(&hand(&["JH", "QH", "KH", "AD"]), c("10H")).total,
        0
    );
    assert_eq!(
        scoring::score_flush(&hand(&["JH", "QH", "KH", "AH"]), c("10D")).total,
        4
    );
    assert_eq!(
        scoring::score_flush(&hand(&["JH", "QH", "KH", "AH"]), c("10H")).total,
        5
    );
    // A crib flush requires the starter to match.
    assert_eq!(
        scoring::score_flush(&crib(&["JH", "QH", "KH", "AH"]), c("10H")).total,
        5
    );
    assert_eq!(
        scoring::score_flush(&crib(&["JH", "QH", "KH", "AH"]), c("10D")).total,
        0
    );
    // Starter suit matching only some of the hand is not a flush.
    assert_eq!(
        scoring::score_flush(&hand(&["7S", "10D", "KH", "KC"]), c("9S")).total,
        0
    );
}

#[test]
fn his_nobs_scoring() {
    assert_eq!(
        scoring::score_his_nobs(&hand(&["JS", "QD", "KS", "10C"]), c("AH")).total,
        0
    );
    let nobs = scoring::score_his_nobs(&hand(&["JH", "QD", "KS", "10C"]), c("AH"));
    assert_eq!(nobs.total, 1);
    assert_eq!(nobs.combinations, vec![vec![c("JH"), c("AH")]]);
    assert_eq!(
        scoring::score_his_nobs(&crib(&["JH", "QD", "KS", "10C"]), c("5H")).total,
        1
    );
    assert_eq!(
        scoring::score_his_nobs(&crib(&["AS", "QD", "JS", "10C"]), c("5D")).total,
        0
    );
}

#[test]
fn runs_scoring() {
    assert_eq!(
        scoring::score_runs(&hand(&["AH", "3D", "5S", "6C"]), c("9H")).total,
        0
    );
    assert_eq!(
        scoring::score_runs(&hand(&["3H", "4D", "5S", "7C"]), c("9H")).total,
        3
    );
    // Duplicated ranks multiply the run.
    assert_eq!(
        scoring::score_runs(&hand(&["3H", "4D", "5S", "4C"]), c("9H")).total,
        6
    );
    assert_eq!(
        scoring::score_runs(&hand(&["3H", "4D", "5S", "7C"]), c("3H")).total,
        6
    );
    assert_eq!(
        scoring::score_runs(&hand(&["3H", "4D", "5S", "6C"]), c("AH")).total,
        4
    );
    assert_eq!(
        scoring::score_runs(&hand(&["3H", "4D", "5S", "6C"]), c("4H")).total,
        8
    );
    assert_eq!(
        scoring::score_runs(&hand(&["3H", "4D", "5S", "6C"]), c("7H")).total,
        5
    );
    // Triple run of three.
    assert_eq!(
        scoring::score_runs(&hand(&["3H", "4D", "4S", "4C"]), c("5H")).total,
        9
    );
    // Double double run of three.
    assert_eq!(
        scoring::score_runs(&hand(&["3H", "4D", "4S", "5C"]), c("3D")).total,
        12
    );
}

#[test]
fn score_hand_totals_and_breakdown() {
    let best = hand(&["JH", "5D", "5S", "5C"]);
    let scores = score_hand(&best, c("5H"));
    assert_eq!(scores.fifteens.total, 16);
    assert_eq!(scores.pairs.total, 12);
    assert_eq!(scores.runs.total, 0);
    assert_eq!(scores.flush.total, 0);
    assert_eq!(scores.his_nobs.total, 1);
    assert_eq!(scores.total(), 29);
}

#[test]
fn score_hand_is_idempotent() {
    let cards = hand(&["3H", "4D", "4S", "5C"]);
    let first = score_hand(&cards, c("6H"));
    let second = score_hand(&cards, c("6H"));
    assert_eq!(first, second);
}

#[test]
fn pegging_fifteen() {
    let mut plays = Plays::new();
    zero_scores(plays.play(Player::One, c("KH")).unwrap());

    let scores = plays.play(Player::Two, c("5H")).unwrap();
    assert_eq!(scores[Player::One], PeggingScore::ZERO);
    assert_eq!(scores[Player::Two].fifteen, 2);
    assert_eq!(scores[Player::Two].total(), 2);
    assert_eq!(plays.points(Player::Two), 2);
    assert_eq!(plays.count(), 15);
}

#[test]
fn pegging_pair_chain() {
    let mut plays = Plays::new();
    zero_scores(plays.play(Player::One, c("6H")).unwrap());

    let scores = plays.play(Player::Two, c("6D")).unwrap();
    assert_eq!(scores[Player::Two].pair, 2);

    let scores = plays.play(Player::One, c("6S")).unwrap();
    assert_eq!(scores[Player::One].pair, 6);

    let scores = plays.play(Player::Two, c("6C")).unwrap();
    assert_eq!(scores[Player::Two].pair, 12);
}

#[test]
fn pegging_thirty_one_resets() {
    let mut plays = Plays::new();
    zero_scores(plays.play(Player::One, c("KH")).unwrap());
    zero_scores(plays.play(Player::Two, c("10D")).unwrap());
    zero_scores(plays.play(Player::One, c("KS")).unwrap());

    let scores = plays.play(Player::Two, c("AD")).unwrap();
    assert_eq!(scores[Player::Two].thirty_one, 2);
    assert_eq!(scores[Player::Two].total(), 2);
    assert_eq!(plays.count(), 0);
}

#[test]
fn pegging_rejects_past_thirty_one() {
    let mut plays = Plays::new();
    plays.play(Player::One, c("KH")).unwrap();
    plays.play(Player::Two, c("10D")).unwrap();
    plays.play(Player::One, c("KS")).unwrap();
    assert_eq!(plays.count(), 30);

    // Rejected with no state change.
    assert_eq!(
        plays.play(Player::Two, c("2H")).unwrap_err(),
        PlayError::ExceedsThirtyOne
    );
    assert_eq!(plays.count(), 30);
    assert_eq!(plays.plays().len(), 3);
    assert_eq!(plays.points(Player::Two), 0);

    let scores = plays.play(Player::Two, c("AH")).unwrap();
    assert_eq!(scores[Player::Two].thirty_one, 2);
}

#[test]
fn pegging_runs() {
    let mut plays = Plays::new();
    zero_scores(plays.play(Player::One, c("3H")).unwrap());
    zero_scores(plays.play(Player::Two, c("4D")).unwrap());

    let scores = plays.play(Player::One, c("5S")).unwrap();
    assert_eq!(scores[Player::One].run, 3);

    let scores = plays.play(Player::Two, c("2S")).unwrap();
    assert_eq!(scores[Player::Two].run, 4);
}

#[test]
fn pegging_run_out_of_play_order() {
    let mut plays = Plays::new();
    zero_scores(plays.play(Player::One, c("3H")).unwrap());
    zero_scores(plays.play(Player::Two, c("5S")).unwrap());

    let scores = plays.play(Player::One, c("4D")).unwrap();
    assert_eq!(scores[Player::One].run, 3);

    let scores = plays.play(Player::Two, c("2S")).unwrap();
    assert_eq!(scores[Player::Two].run, 4);
}

#[test]
fn pegging_no_run_when_not_consecutive() {
    let mut plays = Plays::new();
    zero_scores(plays.play(Player::One, c("3H")).unwrap());
    zero_scores(plays.play(Player::Two, c("5S")).unwrap());
    zero_scores(plays.play(Player::One, c("2S")).unwrap());
    zero_scores(plays.play(Player::Two, c("4D")).unwrap());
}

#[test]
fn pegging_preview_does_not_mutate() {
    let mut plays = Plays::new();
    plays.play(Player::One, c("KH")).unwrap();

    let preview = plays.preview(c("5H")).unwrap();
    assert_eq!(preview.fifteen, 2);
    assert_eq!(plays.count(), 10);
    assert_eq!(plays.plays().len(), 1);
    assert_eq!(plays.points(Player::Two), 0);

    // Past 22 a ten-card no longer fits under 31.
    plays.play(Player::Two, c("10D")).unwrap();
    plays.play(Player::One, c("2S")).unwrap();
    assert_eq!(plays.count(), 22);
    assert_eq!(
        plays.preview(c("KD")).unwrap_err(),
        PlayError::ExceedsThirtyOne
    );
    assert_eq!(plays.count(), 22);
    assert_eq!(plays.plays().len(), 3);
}

#[test]
fn pegging_go_awards_opponent() {
    let mut plays = Plays::new();
    plays.play(Player::One, c("KH")).unwrap();

    let scores = plays.go(Player::One);
    assert_eq!(scores[Player::One], PeggingScore::ZERO);
    assert_eq!(scores[Player::Two].go, 1);
    assert_eq!(plays.points(Player::Two), 1);

    // Re-declaring is a no-op.
    zero_scores(plays.go(Player::One));
    assert_eq!(plays.points(Player::Two), 1);

    // Opponent's go after both are stuck resets the stretch.
    zero_scores(plays.go(Player::Two));
    assert_eq!(plays.count(), 0);
    assert_eq!(plays.points(Player::One), 0);
    assert_eq!(plays.points(Player::Two), 1);
}

#[test]
fn pegging_tracks_cards_played() {
    let mut plays = Plays::new();
    plays.play(Player::One, c("3H")).unwrap();
    plays.play(Player::Two, c("4D")).unwrap();
    plays.play(Player::One, c("5S")).unwrap();

    assert_eq!(plays.cards_played_by(Player::One), vec![c("3H"), c("5S")]);
    assert_eq!(plays.cards_played_by(Player::Two), vec![c("4D")]);
    assert_eq!(plays.plays().len(), 3);
}

#[test]
fn discard_ranking_enumerates_and_sorts() {
    let dealt = hand(&["5H", "5D", "JS", "4C", "7D", "KH"]);
    let remaining = rest_of_deck(dealt.cards());
    assert_eq!(remaining.len(), 46);

    let discards = rank_discards(&dealt, &remaining, true).unwrap();
    assert_eq!(discards.len(), 15);

    for pair in discards.windows(2) {
        assert!(pair[0].expected_total() >= pair[1].expected_total());
    }
    for discard in &discards {
        assert_eq!(discard.hand.len(), 4);
        // Kept and discarded cards partition the dealt six.
        for &card in discard.hand.cards() {
            assert!(dealt.contains(card));
            assert!(!discard.discarded.contains(&card));
        }
        assert!(discard.crib_score > 0.0);
    }
}

#[test]
fn discard_hand_score_matches_average() {
    let dealt = hand(&["5H", "5D", "JS", "4C", "7D", "KH"]);
    // A small starter pool keeps the averages easy to recompute.
    let remaining = [c("AS"), c("6D"), c("10C"), c("QH")];

    let discards = rank_discards(&dealt, &remaining, true).unwrap();
    for discard in &discards {
        let total: u32 = remaining
            .iter()
            .map(|&starter| score_hand(&discard.hand, starter).total())
            .sum();
        let mean = f64::from(total) / remaining.len() as f64;
        assert!((discard.hand_score - mean).abs() < 1e-9);
    }
}

#[test]
fn discard_crib_value_signs_and_symmetry() {
    let pair = [c("5H"), c("5D")];
    assert!(score_discard(pair, true) > 0.0);
    assert!(score_discard(pair, false) < 0.0);
    assert_eq!(
        score_discard([c("2H"), c("3D")], true),
        score_discard([c("3D"), c("2H")], true)
    );

    let dealt = hand(&["5H", "5D", "JS", "4C", "7D", "KH"]);
    let remaining = rest_of_deck(dealt.cards());
    let to_opponent = rank_discards(&dealt, &remaining, false).unwrap();
    for discard in &to_opponent {
        assert!(discard.crib_score < 0.0);
    }
}

#[test]
fn discard_ranking_errors() {
    let five_cards = hand(&["5H", "5D", "JS", "4C", "7D"]);
    assert_eq!(
        rank_discards(&five_cards, &[c("AS")], true).unwrap_err(),
        DiscardError::WrongHandSize(5)
    );

    let six_cards = hand(&["5H", "5D", "JS", "4C", "7D", "KH"]);
    assert_eq!(
        rank_discards(&six_cards, &[], true).unwrap_err(),
        DiscardError::NoRemainingCards
    );
}
