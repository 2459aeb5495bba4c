//! Round state machine tests.
//!
//! These drive `TwentyOneGame` through whole rounds:
//! - Dealing, player and dealer turns, resolution, replay
//! - Deck/hand partition of the 52 cards
//! - Deterministic replay from a seed

use std::collections::HashSet;

use proptest::prelude::*;

use twenty_one::{
    play_round, Card, DealerStep, Deck, GameError, Outcome, Phase, Rank, Side, StandOn, Suit,
    TwentyOneBuilder, TwentyOneGame, DECK_SIZE,
};

fn scripted(draws: &[Card]) -> TwentyOneGame {
    TwentyOneBuilder::new()
        .first_deck(Deck::with_top(draws))
        .build(42)
}

fn assert_partition(game: &TwentyOneGame) {
    let cards = game.cards_in_play();
    let unique: HashSet<_> = cards.iter().collect();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
}

/// Player busts at 23 before the dealer acts; the dealer wins on 5.
#[test]
fn test_player_bust_dealer_wins_without_acting() {
    let mut game = scripted(&[
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Three, Suit::Spades),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Clubs),
    ]);

    game.deal().unwrap();
    game.hit().unwrap();

    assert_eq!(game.player().hand_value(), 23);
    assert!(game.player().is_busted());
    assert_eq!(game.phase(), Phase::Resolution);
    assert!(matches!(game.dealer_step(), Err(GameError::WrongPhase { .. })));

    assert_eq!(game.resolve().unwrap(), Outcome::Winner(Side::Dealer));
    assert_eq!(game.dealer().hand_value(), 5);
}

/// Dealer on 16 draws at least once more before standing.
#[test]
fn test_dealer_hits_sixteen() {
    let mut game = scripted(&[
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Clubs),
    ]);

    game.deal().unwrap();
    assert_eq!(game.dealer().hand_value(), 16);
    game.stand().unwrap();

    assert_eq!(
        game.dealer_step().unwrap(),
        DealerStep::Hit(Card::new(Rank::Ace, Suit::Clubs))
    );
    // 16 + Ace: 11 would bust, so the Ace counts 1.
    assert_eq!(game.dealer().hand_value(), 17);
    assert_eq!(game.dealer_step().unwrap(), DealerStep::Stand);
    assert_eq!(game.resolve().unwrap(), Outcome::Tie);
}

#[test]
fn test_full_session_keeps_partition_each_phase() {
    let mut game = TwentyOneBuilder::new().build(2024);
    let policy = StandOn::new(17);

    for round in 1..=10 {
        assert_eq!(game.round(), round);
        assert_partition(&game);

        play_round(&mut game, &policy).unwrap();
        assert_partition(&game);
        assert!(game.deck().remaining() < DECK_SIZE);

        game.replay(true).unwrap();
        assert!(game.player().hand().is_empty());
        assert!(game.dealer().hand().is_empty());
        assert_eq!(game.deck().remaining(), DECK_SIZE);
    }
}

#[test]
fn test_same_seed_same_rounds() {
    let policy = StandOn::new(15);
    let mut a = TwentyOneBuilder::new().build(77);
    let mut b = TwentyOneBuilder::new().build(77);

    for _ in 0..5 {
        let outcome_a = play_round(&mut a, &policy).unwrap();
        let outcome_b = play_round(&mut b, &policy).unwrap();

        assert_eq!(outcome_a, outcome_b);
        assert_eq!(a.player().hand(), b.player().hand());
        assert_eq!(a.dealer().hand(), b.dealer().hand());

        a.replay(true).unwrap();
        b.replay(true).unwrap();
    }
}

#[test]
fn test_dealer_never_stands_below_threshold() {
    for seed in 0..50 {
        let mut game = TwentyOneBuilder::new().dealer_stands_on(17).build(seed);
        game.deal().unwrap();
        game.stand().unwrap();
        game.play_dealer().unwrap();

        let dealer = game.dealer();
        assert!(dealer.is_busted() || dealer.hand_value() >= 17, "seed {seed}");
    }
}

#[test]
fn test_exhausted_deck_reports_empty_deck() {
    let mut deck = Deck::new(&mut twenty_one::GameRng::new(1));
    for _ in 0..DECK_SIZE {
        deck.draw().unwrap();
    }
    assert_eq!(deck.draw(), Err(twenty_one::EmptyDeckError));

    let mut game = TwentyOneBuilder::new().first_deck(deck).build(1);
    assert!(matches!(game.deal(), Err(GameError::EmptyDeck(_))));
}

proptest! {
    #[test]
    fn fresh_deck_draws_52_unique(seed in any::<u64>()) {
        let mut deck = Deck::new(&mut twenty_one::GameRng::new(seed));
        let mut seen = HashSet::new();
        while let Ok(card) = deck.draw() {
            prop_assert!(seen.insert(card));
        }
        prop_assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn hits_keep_partition(seed in any::<u64>(), hits in 0usize..6) {
        let mut game = TwentyOneBuilder::new().build(seed);
        game.deal().unwrap();

        for _ in 0..hits {
            if game.phase() != Phase::PlayerTurn {
                break;
            }
            game.hit().unwrap();
        }

        let mut cards = game.cards_in_play();
        cards.sort_unstable();
        let mut full = Deck::full_set();
        full.sort_unstable();
        prop_assert_eq!(cards, full);
    }

    #[test]
    fn player_bust_always_loses(seed in any::<u64>()) {
        let mut game = TwentyOneBuilder::new().build(seed);
        game.deal().unwrap();
        while game.phase() == Phase::PlayerTurn {
            game.hit().unwrap();
        }

        prop_assert!(game.player().is_busted());
        prop_assert_eq!(game.resolve().unwrap(), Outcome::Winner(Side::Dealer));
    }
}
