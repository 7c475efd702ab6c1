//! Random-vs-random self-play driver.
//!
//! Run with:
//! `cargo run --release --bin random_match -- --games 20 --seed 7`
//! `RUST_LOG=debug cargo run --bin random_match -- --games 1 --show-board`

use clap::Parser;

use position_engine::engines::engine_random::RandomPlayer;
use position_engine::errors::EngineError;
use position_engine::utils::match_harness::{game_seeds, play_match, MatchConfig, MatchSeriesStats};
use position_engine::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(name = "random-match", version, about = "Play random players against each other")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Base seed; game i uses seed + i
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Stop a game after this many plies
    #[arg(long, default_value_t = 300)]
    max_plies: u16,

    /// Print the final board and move list of every game
    #[arg(long, default_value_t = false)]
    show_board: bool,
}

fn main() -> Result<(), EngineError> {
    env_logger::init();
    let args = Args::parse();

    let config = MatchConfig {
        max_plies: args.max_plies,
        seed: args.seed,
        verbose: args.show_board,
    };

    let mut stats = MatchSeriesStats::default();
    for game in 0..args.games {
        let (seed, black_seed) = game_seeds(&config, game);
        let mut white = RandomPlayer::seeded(seed);
        let mut black = RandomPlayer::seeded(black_seed);

        let result = play_match(&mut white, &mut black, &config)?;
        println!(
            "game {}/{} seed={} result={:?} plies={}",
            game + 1,
            args.games,
            seed,
            result.outcome,
            result.played_moves_lan.len()
        );
        if args.show_board {
            println!("{}", result.played_moves_lan.join(" "));
            println!("{}\n", render_game_state(&result.final_state));
        }
        stats.record(&result);
    }

    println!("{}", stats.report());
    Ok(())
}
