//! Interactive session: drives `TwentyOneGame` from a line source and
//! writes the table to an output sink.

use std::io::Write;

use log::info;

use super::input::{parse_yes_no, prompt, LineSource};
use super::render;
use crate::core::{GameError, Phase};
use crate::games::twenty_one::{DealerStep, Decision, SessionStats, TwentyOneGame};
use crate::rules::Outcome;

const HIT_OR_STAY: &str = "\nHit or stay?";
const HIT_OR_STAY_RETRY: &str = "That is not a valid option. Try again.";
const PLAY_AGAIN: &str = "Would you like to play again? (y/n)";
const PLAY_AGAIN_RETRY: &str = "Sorry, must be y or n.";

/// A game wired to an input source and an output sink.
pub struct Session<S, W> {
    game: TwentyOneGame,
    input: S,
    output: W,
    stats: SessionStats,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(game: TwentyOneGame, input: S, output: W) -> Self {
        Self {
            game,
            input,
            output,
            stats: SessionStats::new(),
        }
    }

    #[must_use]
    pub fn game(&self) -> &TwentyOneGame {
        &self.game
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Play rounds until the user declines a replay or input runs out at
    /// the replay question.
    pub fn run(mut self) -> Result<SessionStats, GameError> {
        writeln!(self.output, "{}", render::welcome())?;

        loop {
            self.play_round()?;
            let again = self.ask_play_again()?;
            self.game.replay(again)?;
            if !again {
                break;
            }
            writeln!(self.output, "The game has been reset. Let's play again!\n")?;
        }

        writeln!(self.output, "{}", render::goodbye(&self.stats))?;
        self.output.flush()?;
        info!("session over after {} rounds", self.stats.rounds);
        Ok(self.stats)
    }

    /// Play one round from the deal to the announced result.
    pub fn play_round(&mut self) -> Result<Outcome, GameError> {
        self.game.deal()?;
        writeln!(self.output, "{}", render::opening_hands(&self.game))?;
        writeln!(self.output, "\n{}", render::hand_values(&self.game))?;

        self.player_turn()?;
        if self.game.phase() == Phase::DealerTurn {
            self.dealer_turn()?;
        }

        let outcome = self.game.resolve()?;
        self.stats.record(
            outcome,
            self.game.player().is_busted(),
            self.game.dealer().is_busted(),
        );

        writeln!(self.output, "\n{}", render::hand_values(&self.game))?;
        writeln!(self.output, "--")?;
        writeln!(self.output, "{}", render::outcome(&self.game, outcome))?;
        writeln!(self.output, "{}", self.stats)?;
        Ok(outcome)
    }

    fn player_turn(&mut self) -> Result<(), GameError> {
        while self.game.phase() == Phase::PlayerTurn {
            let decision = prompt(
                &mut self.input,
                &mut self.output,
                HIT_OR_STAY,
                HIT_OR_STAY_RETRY,
                str::parse::<Decision>,
            )?;

            if let Some(card) = self.game.apply(decision)? {
                writeln!(self.output, "{}", render::drawn_card(card))?;
                if !self.game.player().is_busted() {
                    writeln!(self.output, "\n{}", render::new_hand(self.game.player()))?;
                    writeln!(self.output, "\n{}", render::hand_values(&self.game))?;
                }
            }
        }
        Ok(())
    }

    fn dealer_turn(&mut self) -> Result<(), GameError> {
        writeln!(self.output, "\n-- Dealer's Turn --")?;
        while self.game.phase() == Phase::DealerTurn {
            if let DealerStep::Hit(card) = self.game.dealer_step()? {
                writeln!(self.output, "{}", render::drawn_card(card))?;
            }
        }
        Ok(())
    }

    /// End of input here counts as "no".
    fn ask_play_again(&mut self) -> Result<bool, GameError> {
        match prompt(
            &mut self.input,
            &mut self.output,
            PLAY_AGAIN,
            PLAY_AGAIN_RETRY,
            parse_yes_no,
        ) {
            Err(GameError::InputClosed) => Ok(false),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck, Rank, Suit};
    use crate::core::Side;
    use crate::games::twenty_one::TwentyOneBuilder;

    fn scripted_game() -> TwentyOneGame {
        TwentyOneBuilder::new()
            .first_deck(Deck::with_top(&[
                Card::new(Rank::Ten, Suit::Spades),
                Card::new(Rank::Six, Suit::Spades),
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Seven, Suit::Hearts),
                Card::new(Rank::Three, Suit::Spades),
            ]))
            .build(5)
    }

    #[test]
    fn test_single_round_session() {
        let input = "hmm\nhit\nstay\nn\n".as_bytes();
        let mut output = Vec::new();

        let stats = Session::new(scripted_game(), input, &mut output).run().unwrap();

        assert_eq!(stats.rounds, 1);
        assert_eq!(stats.wins[Side::Player], 1);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("WELCOME TO 21"));
        assert!(text.contains("That is not a valid option. Try again."));
        assert!(text.contains("Card drawn: 3 of ♠."));
        assert!(text.contains("Your hand value: 19 || Dealer's hand value: 17"));
        assert!(text.contains("-- Dealer's Turn --"));
        assert!(text.contains("The winner is: player!"));
        assert!(text.contains("THANK YOU FOR PLAYING 21!"));
    }

    #[test]
    fn test_replay_then_quit() {
        let input = "stay\nmaybe\ny\nstay\nN\n".as_bytes();
        let mut output = Vec::new();

        let stats = Session::new(scripted_game(), input, &mut output).run().unwrap();

        assert_eq!(stats.rounds, 2);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Sorry, must be y or n."));
        assert!(text.contains("The game has been reset."));
    }

    #[test]
    fn test_input_closed_at_replay_ends_session() {
        let input = "stay\n".as_bytes();
        let mut output = Vec::new();

        let stats = Session::new(scripted_game(), input, &mut output).run().unwrap();
        assert_eq!(stats.rounds, 1);
    }

    #[test]
    fn test_input_closed_mid_turn() {
        let input = "".as_bytes();
        let mut output = Vec::new();

        let result = Session::new(scripted_game(), input, &mut output).run();
        assert!(matches!(result, Err(GameError::InputClosed)));
    }
}
