//! Self-play demo: two random automated players, with occasional skills.

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use skill_gomoku::core::{EngineConfig, EngineError, GameRng, PlayerMap};
use skill_gomoku::driver::{AutoPlayer, Difficulty, DriverOutcome, RandomProvider};
use skill_gomoku::{Controller, PlaceOutcome};

/// Chance per turn that a player tries a skill before moving.
const SKILL_PROBABILITY: f64 = 0.1;

/// Play one game between two automated players.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for providers and skill choices
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Difficulty tag sent with every request (easy, hard, super_hard)
    #[arg(long, default_value = "easy")]
    difficulty: Difficulty,

    /// Stop after this many placements
    #[arg(long, default_value_t = 225)]
    max_turns: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(error) = run(&args) {
        tracing::error!(%error, "self-play failed");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), EngineError> {
    info!(seed = args.seed, difficulty = %args.difficulty, max_turns = args.max_turns, "starting self-play");

    let mut game = Controller::new(EngineConfig::default().with_seed(args.seed))?;
    let config = game.config().clone();
    let mut players = PlayerMap::new(|p| AutoPlayer::for_config(p, args.difficulty, &config));

    // Forks 1 and 2 of the seed are the players' fallback streams
    let mut rng = GameRng::new(config.seed);
    let _ = (rng.fork(), rng.fork());
    let mut providers = PlayerMap::new(|p| RandomProvider::new(p.to_string(), rng.fork()));

    for turn in 0..args.max_turns {
        try_skill(&mut game, &mut rng)?;

        let mover = game.state().current_player();
        let outcome = players[mover].play_turn(&mut providers[mover], &mut game)?;
        match outcome {
            Some(DriverOutcome::Played {
                outcome: PlaceOutcome::Won { winner, line },
                ..
            }) => {
                info!(turn, %winner, line = ?line.as_slice(), "game over");
                println!("{}", game.state().board());
                return Ok(());
            }
            Some(DriverOutcome::NoMoveAvailable) => {
                info!(turn, "board full, no winner");
                return Ok(());
            }
            Some(_) => {}
            None => warn!(turn, player = %mover, "engine not waiting on a move"),
        }
    }

    info!(max_turns = args.max_turns, "turn limit reached");
    println!("{}", game.state().board());
    Ok(())
}

/// Occasionally invoke the first available skill that needs no target and
/// resolve it at once.
fn try_skill(game: &mut Controller, rng: &mut GameRng) -> Result<(), EngineError> {
    if !rng.gen_bool(SKILL_PROBABILITY) {
        return Ok(());
    }
    let catalog = *game.catalog();
    let Some(skill) = game
        .available_skills()
        .into_iter()
        .find(|&skill| !catalog.get(skill).requires_target)
    else {
        return Ok(());
    };

    let player = game.state().current_player();
    game.invoke_skill(skill, None)?;
    let outcome = game.resolve_pending()?;
    info!(%player, %skill, ?outcome, "skill used");
    Ok(())
}
