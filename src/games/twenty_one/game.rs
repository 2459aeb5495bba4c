//! Twenty-one game implementation.

use log::{debug, info};

use crate::cards::{Card, Deck};
use crate::core::{EmptyDeckError, GameConfig, GameError, GameRng, Phase, Side, SideMap};
use crate::participant::Participant;
use crate::rules::{determine_winner, DealerRule, HitPolicy, Outcome};

/// A player's choice on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

/// What the dealer did with one step of its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealerStep {
    /// Drew this card.
    Hit(Card),
    /// Reached the threshold and stood.
    Stand,
}

/// One table: a deck, a player, a dealer, and the round state machine.
#[derive(Clone, Debug)]
pub struct TwentyOneGame {
    config: GameConfig,
    dealer_rule: DealerRule,
    rng: GameRng,
    deck: Deck,
    participants: SideMap<Participant>,
    phase: Phase,
    outcome: Option<Outcome>,
    round: u32,
}

/// Builder for creating a TwentyOneGame.
#[derive(Clone, Debug, Default)]
pub struct TwentyOneBuilder {
    config: GameConfig,
    first_deck: Option<Deck>,
}

impl TwentyOneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dealer_stands_on(mut self, value: u32) -> Self {
        self.config.dealer_stands_on = value;
        self
    }

    pub fn dealer_skips_when_ahead(mut self, enabled: bool) -> Self {
        self.config.dealer_skips_when_ahead = enabled;
        self
    }

    /// Use `deck` for the first round instead of a shuffled one.
    ///
    /// Later rounds always get a freshly shuffled deck.
    pub fn first_deck(mut self, deck: Deck) -> Self {
        self.first_deck = Some(deck);
        self
    }

    /// Build the game, ready to deal the first round.
    pub fn build(self, seed: u64) -> TwentyOneGame {
        let mut rng = GameRng::new(seed);
        let deck = match self.first_deck {
            Some(deck) => deck,
            None => Deck::new(&mut rng.fork()),
        };
        info!(
            "new table (seed {}, dealer stands on {})",
            seed, self.config.dealer_stands_on
        );

        TwentyOneGame {
            dealer_rule: DealerRule::new(self.config.dealer_stands_on),
            config: self.config,
            rng,
            deck,
            participants: SideMap::new(Participant::new),
            phase: Phase::Dealing,
            outcome: None,
            round: 1,
        }
    }
}

impl TwentyOneGame {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 1-based round counter.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn participant(&self, side: Side) -> &Participant {
        &self.participants[side]
    }

    #[must_use]
    pub fn player(&self) -> &Participant {
        &self.participants[Side::Player]
    }

    #[must_use]
    pub fn dealer(&self) -> &Participant {
        &self.participants[Side::Dealer]
    }

    /// Outcome of the current round, once resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Every card at the table: the undrawn deck followed by both hands.
    ///
    /// Always a permutation of the 52-card set.
    #[must_use]
    pub fn cards_in_play(&self) -> Vec<Card> {
        let mut cards = self.deck.cards().to_vec();
        for (_, participant) in self.participants.iter() {
            cards.extend_from_slice(participant.hand().cards());
        }
        cards
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!("round {}: {} -> {}", self.round, self.phase, phase);
        self.phase = phase;
    }

    /// Deal the opening cards: all of the player's, then all of the dealer's.
    ///
    /// Fails with `EmptyDeck` before drawing anything if the deck cannot
    /// cover the whole deal.
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Dealing)?;

        let needed = Side::ALL.len() * self.config.initial_cards;
        if self.deck.remaining() < needed {
            return Err(EmptyDeckError.into());
        }

        for side in Side::ALL {
            for _ in 0..self.config.initial_cards {
                self.participants[side].hit(&mut self.deck)?;
            }
        }
        info!(
            "round {} dealt: player {}, dealer {}",
            self.round,
            self.player().hand_value(),
            self.dealer().hand_value()
        );

        if self.player().is_busted() {
            self.enter(Phase::Resolution);
        } else {
            self.enter(Phase::PlayerTurn);
        }
        Ok(())
    }

    /// Player draws one card. Busting ends the turn and skips the dealer.
    pub fn hit(&mut self) -> Result<Card, GameError> {
        self.expect_phase(Phase::PlayerTurn)?;

        let card = self.participants[Side::Player].hit(&mut self.deck)?;
        if self.player().is_busted() {
            self.enter(Phase::Resolution);
        }
        Ok(card)
    }

    /// Player ends their turn.
    pub fn stand(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::PlayerTurn)?;

        if self.config.dealer_skips_when_ahead
            && self.dealer().hand_value() > self.player().hand_value()
        {
            debug!("dealer already ahead, skipping dealer turn");
            self.enter(Phase::Resolution);
        } else {
            self.enter(Phase::DealerTurn);
        }
        Ok(())
    }

    /// Apply a player decision. Returns the drawn card on a hit.
    pub fn apply(&mut self, decision: Decision) -> Result<Option<Card>, GameError> {
        match decision {
            Decision::Hit => self.hit().map(Some),
            Decision::Stand => self.stand().map(|()| None),
        }
    }

    /// One dealer action: hit below the threshold, otherwise stand.
    ///
    /// The turn ends (phase moves to `Resolution`) on a stand or a bust.
    pub fn dealer_step(&mut self) -> Result<DealerStep, GameError> {
        self.expect_phase(Phase::DealerTurn)?;

        if !self.dealer_rule.should_hit(self.dealer().hand()) {
            self.enter(Phase::Resolution);
            return Ok(DealerStep::Stand);
        }

        let card = self.participants[Side::Dealer].hit(&mut self.deck)?;
        if self.dealer().is_busted() {
            self.enter(Phase::Resolution);
        }
        Ok(DealerStep::Hit(card))
    }

    /// Run the dealer's whole turn. Returns the cards it drew.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, GameError> {
        self.expect_phase(Phase::DealerTurn)?;

        let mut drawn = Vec::new();
        while self.phase == Phase::DealerTurn {
            if let DealerStep::Hit(card) = self.dealer_step()? {
                drawn.push(card);
            }
        }
        Ok(drawn)
    }

    /// Decide the round.
    pub fn resolve(&mut self) -> Result<Outcome, GameError> {
        self.expect_phase(Phase::Resolution)?;

        let outcome = determine_winner(self.player().hand(), self.dealer().hand());
        info!(
            "round {} resolved: {:?} (player {}, dealer {})",
            self.round,
            outcome,
            self.player().hand_value(),
            self.dealer().hand_value()
        );
        self.outcome = Some(outcome);
        self.enter(Phase::Replay);
        Ok(outcome)
    }

    /// Start another round, or end the game.
    pub fn replay(&mut self, again: bool) -> Result<(), GameError> {
        self.expect_phase(Phase::Replay)?;

        if again {
            self.reset();
        } else {
            self.enter(Phase::End);
        }
        Ok(())
    }

    /// Empty both hands and shuffle a new deck for the next round.
    fn reset(&mut self) {
        for (_, participant) in self.participants.iter_mut() {
            participant.clear_hand();
        }
        self.deck = Deck::new(&mut self.rng.fork());
        self.outcome = None;
        self.round += 1;
        self.enter(Phase::Dealing);
    }
}
