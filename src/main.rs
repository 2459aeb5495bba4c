use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use twenty_one::{
    simulate, GameConfig, GameError, Session, Side, StandOn, TwentyOneBuilder, DEALER_STANDS_ON,
    DECK_SIZE, INITIAL_CARDS,
};

/// Play twenty-one against the dealer.
#[derive(Debug, Parser)]
#[command(name = "twenty-one", version, about)]
struct Args {
    /// Seed for deck shuffling; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// The dealer hits below this value.
    #[arg(long, default_value_t = DEALER_STANDS_ON)]
    dealer_stands_on: u32,

    /// Cards dealt to each side at the start of a round.
    #[arg(
        long,
        default_value_t = INITIAL_CARDS as u8,
        value_parser = clap::value_parser!(u8).range(1..=(DECK_SIZE / 2) as i64),
    )]
    initial_cards: u8,

    /// The dealer skips its turn when the player stands behind it.
    #[arg(long)]
    dealer_skips_when_ahead: bool,

    /// Play this many rounds unattended and print the tally.
    #[arg(long, value_name = "ROUNDS")]
    simulate: Option<u32>,

    /// Automated player hits below this value (with --simulate).
    #[arg(long, default_value_t = DEALER_STANDS_ON)]
    player_stands_on: u32,

    /// Debug logging to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run(args: Args) -> Result<(), GameError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("using seed {seed}");

    let config = GameConfig::new()
        .with_dealer_stands_on(args.dealer_stands_on)
        .with_initial_cards(usize::from(args.initial_cards))
        .with_dealer_skips_when_ahead(args.dealer_skips_when_ahead);

    if let Some(rounds) = args.simulate {
        let stats = simulate(config, &StandOn::new(args.player_stands_on), rounds, seed)?;
        println!("{stats}");
        println!(
            "Player win rate: {:.1}% || Dealer win rate: {:.1}%",
            stats.win_rate(Side::Player) * 100.0,
            stats.win_rate(Side::Dealer) * 100.0
        );
        return Ok(());
    }

    let game = TwentyOneBuilder::new().config(config).build(seed);
    let stdin = io::stdin();
    Session::new(game, stdin.lock(), io::stdout().lock()).run()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GameError::InputClosed) => {
            warn!("input closed, leaving the table");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
