//! Text rendering for the console session.
//!
//! Plain functions from game state to display strings. Nothing here writes
//! to a terminal; the session decides where the text goes.

use crate::cards::Card;
use crate::core::Side;
use crate::games::twenty_one::{SessionStats, TwentyOneGame};
use crate::participant::Participant;
use crate::rules::Outcome;

pub fn welcome() -> String {
    [
        "==========================================",
        "||                                      ||",
        "||     WELCOME TO 21: THE CARD GAME!    ||",
        "||                                      ||",
        "==========================================",
        "Get ready to test your luck and skill!",
        "Can you beat the dealer and score 21?",
        "",
    ]
    .join("\n")
}

pub fn goodbye(stats: &SessionStats) -> String {
    [
        "==========================================",
        "||                                      ||",
        "||      THANK YOU FOR PLAYING 21!       ||",
        "||                                      ||",
        "==========================================",
        stats.to_string().as_str(),
        "Goodbye, and see you soon!",
    ]
    .join("\n")
}

/// One card per line.
pub fn hand(participant: &Participant) -> String {
    participant
        .hand()
        .cards()
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn opening_hands(game: &TwentyOneGame) -> String {
    format!(
        "The player's first cards are:\n{}\n--\nThe dealer's first cards are:\n{}",
        hand(game.player()),
        hand(game.dealer())
    )
}

pub fn hand_values(game: &TwentyOneGame) -> String {
    format!(
        "Your hand value: {} || Dealer's hand value: {}",
        game.player().hand_value(),
        game.dealer().hand_value()
    )
}

pub fn drawn_card(card: Card) -> String {
    format!("-- Drawing Card --\nCard drawn: {card}.")
}

pub fn new_hand(participant: &Participant) -> String {
    format!("New hand:\n--\n{}", hand(participant))
}

pub fn outcome(game: &TwentyOneGame, outcome: Outcome) -> String {
    if game.player().is_busted() {
        format!("Because you busted, the winner is the {}!", Side::Dealer)
    } else if game.dealer().is_busted() {
        "Because the dealer busted, you are the winner!".to_string()
    } else {
        match outcome {
            Outcome::Winner(side) => format!("The winner is: {side}!"),
            Outcome::Tie => "It's a tie!".to_string(),
        }
    }
}
