//! Unattended play.
//!
//! Runs whole rounds with a `HitPolicy` standing in for the human, for
//! simulation runs and for exercising the state machine end to end.

use log::info;

use super::game::{TwentyOneBuilder, TwentyOneGame};
use super::stats::SessionStats;
use crate::core::{GameConfig, GameError, Phase};
use crate::rules::{HitPolicy, Outcome};

/// Play the current round from `Dealing` through `Resolution`.
///
/// Leaves the game in `Replay`.
pub fn play_round<P: HitPolicy>(game: &mut TwentyOneGame, player: &P) -> Result<Outcome, GameError> {
    game.deal()?;

    while game.phase() == Phase::PlayerTurn {
        if player.should_hit(game.player().hand()) {
            game.hit()?;
        } else {
            game.stand()?;
        }
    }

    if game.phase() == Phase::DealerTurn {
        game.play_dealer()?;
    }

    game.resolve()
}

/// Play `rounds` rounds on a fresh table and tally the outcomes.
pub fn simulate<P: HitPolicy>(
    config: GameConfig,
    player: &P,
    rounds: u32,
    seed: u64,
) -> Result<SessionStats, GameError> {
    let mut game = TwentyOneBuilder::new().config(config).build(seed);
    let mut stats = SessionStats::new();

    for round in 1..=rounds {
        let outcome = play_round(&mut game, player)?;
        stats.record(outcome, game.player().is_busted(), game.dealer().is_busted());
        game.replay(round < rounds)?;
    }

    info!("simulated {} rounds: {}", stats.rounds, stats);
    Ok(stats)
}
