//! holdem-sim: Hold'em hand evaluation and table simulation
//!
//! Goals:
//! - Classify 5-card hands into categories with a total, kicker-aware order
//! - Simulate multi-street games (deal, flop, turn, river) over many players
//!   and record the leading player per street
//! - No panics for invalid input; use `Result` for contract violations
//!
//! ## Quick start: who leads each street?
//! ```
//! use holdem_sim::deck::Deck;
//! use holdem_sim::table::Table;
//!
//! let mut deck = Deck::standard();
//! deck.shuffle_seeded(42);
//! let record = Table::new(5, deck).unwrap().run_one_game().unwrap();
//! assert!(record.river_winner < 5);
//! assert_eq!(record.pot_winner(), record.river_winner);
//! ```
//!
//! ## Evaluate a hand from text
//! ```
//! use holdem_sim::evaluator::Category;
//! use holdem_sim::hand::Hand;
//!
//! let hand: Hand = "8C 8S 8D 8H 7S".parse().unwrap();
//! assert_eq!(hand.category(), Category::FourOfAKind);
//! ```
//!
//! ## CLI
//! Run a batch of simulated games with:
//! ```sh
//! cargo run --bin holdem-sim -- --games 1000 --players 5
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod selector;
pub mod stats;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
