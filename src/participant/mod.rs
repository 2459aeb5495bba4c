//! Participants and their hands.
//!
//! Player and dealer share one `Participant` type; the `Side` tells them
//! apart and the rules that drive each side live in `rules::policy`.

mod hand;
mod participant;

pub use hand::{hand_value, Hand};
pub use participant::Participant;
