use clap::Parser;
use holdem_sim::stats::run_batch;
use holdem_sim::table::MAX_PLAYERS;

/// Simulate Hold'em games and report street-leader and starting-hand
/// win-rate statistics.
#[derive(Parser, Debug)]
#[command(name = "holdem-sim", version, about)]
struct Args {
    /// Number of games to simulate.
    #[arg(long, default_value_t = 1000)]
    games: u64,

    /// Players seated per game (1..=22).
    #[arg(long, default_value_t = 5)]
    players: usize,

    /// Seed for a reproducible batch; omit for a random one.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.players == 0 || args.players > MAX_PLAYERS {
        eprintln!("--players must be between 1 and {MAX_PLAYERS}");
        std::process::exit(2);
    }

    match run_batch(args.games, args.players, args.seed) {
        Ok(summary) => println!("{summary}"),
        Err(err) => {
            eprintln!("simulation failed: {err}");
            std::process::exit(1);
        }
    }
}
