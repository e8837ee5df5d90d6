use crate::deck::Deck;
use crate::table::{GameRecord, Table, TableError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Cross-game tallies. All merging is plain counting, so batches could be
/// combined by summing fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: u64,
    /// Games where the street's leader went on to win the river.
    pub deal_leader_held: u64,
    pub flop_leader_held: u64,
    pub turn_leader_held: u64,
    /// Games where at least one player held the trait pre-flop.
    pub ace_high_games: u64,
    pub pocket_pair_games: u64,
    pub suited_games: u64,
    /// Games where the river winner held the trait pre-flop.
    pub ace_high_wins: u64,
    pub pocket_pair_wins: u64,
    pub suited_wins: u64,
}

impl Summary {
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        self.deal_leader_held += u64::from(game.deal_leader_held());
        self.flop_leader_held += u64::from(game.flop_leader_held());
        self.turn_leader_held += u64::from(game.turn_leader_held());
        self.ace_high_games += u64::from(!game.traits.ace_high.is_empty());
        self.pocket_pair_games += u64::from(!game.traits.pocket_pair.is_empty());
        self.suited_games += u64::from(!game.traits.suited.is_empty());
        self.ace_high_wins += u64::from(game.winner_was_ace_high());
        self.pocket_pair_wins += u64::from(game.winner_was_pocket_pair());
        self.suited_wins += u64::from(game.winner_was_suited());
    }

    /// Fraction of recorded games, or 0.0 before any game is recorded.
    pub fn share(&self, count: u64) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "games: {}", self.games)?;
        writeln!(
            f,
            "deal leader won river:  {:6} ({:.1}%)",
            self.deal_leader_held,
            100.0 * self.share(self.deal_leader_held)
        )?;
        writeln!(
            f,
            "flop leader won river:  {:6} ({:.1}%)",
            self.flop_leader_held,
            100.0 * self.share(self.flop_leader_held)
        )?;
        writeln!(
            f,
            "turn leader won river:  {:6} ({:.1}%)",
            self.turn_leader_held,
            100.0 * self.share(self.turn_leader_held)
        )?;
        writeln!(
            f,
            "ace-high holder won:    {:6} ({:.1}%, dealt in {} games)",
            self.ace_high_wins,
            100.0 * self.share(self.ace_high_wins),
            self.ace_high_games
        )?;
        writeln!(
            f,
            "pocket-pair holder won: {:6} ({:.1}%, dealt in {} games)",
            self.pocket_pair_wins,
            100.0 * self.share(self.pocket_pair_wins),
            self.pocket_pair_games
        )?;
        write!(
            f,
            "suited holder won:      {:6} ({:.1}%, dealt in {} games)",
            self.suited_wins,
            100.0 * self.share(self.suited_wins),
            self.suited_games
        )
    }
}

/// Run `games` independent games of `players` players, each over a freshly
/// shuffled deck, and tally the results. With a seed the whole batch is
/// reproducible; without one the thread RNG shuffles.
///
/// Any table error aborts the batch: these are contract violations
/// (bad configuration), not recoverable per-game failures.
pub fn run_batch(games: u64, players: usize, seed: Option<u64>) -> Result<Summary, TableError> {
    let mut seeded = seed.map(ChaCha8Rng::seed_from_u64);
    let mut summary = Summary::default();

    for _ in 0..games {
        let mut deck = Deck::standard();
        match seeded.as_mut() {
            Some(rng) => deck.shuffle_with(rng),
            None => deck.shuffle_with(&mut rand::rng()),
        }
        let record = Table::new(players, deck)?.run_one_game()?;
        log::debug!("{record}");
        summary.record(&record);
    }

    Ok(summary)
}
