use crate::cards::{Card, Rank};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_mini, Category, Evaluation};
use crate::hand::{HandError, HoleCards};
use crate::selector::{best_hand, SelectError};
use std::fmt;

/// 2N hole cards + 3 burns + 5 community cards must fit in one 52-card deck:
/// 2N + 8 <= 52. At 22 players the deck is consumed exactly.
pub const MAX_PLAYERS: usize = 22;

/// Table lifecycle stages; transitions are strictly forward, one game per
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Stage {
    Empty,
    Dealt,
    Flopped,
    Turned,
    Rivered,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("player count must be between 1 and {MAX_PLAYERS}, got {0}")]
    PlayerCount(usize),
    #[error("{action} is not legal at stage {stage:?}")]
    OutOfOrder { action: &'static str, stage: Stage },
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error("invalid hole cards: {0}")]
    Hole(#[from] HandError),
}

/// One seated player; hole cards are dealt once per game and never replaced.
#[derive(Debug, Clone)]
pub struct Player {
    hole: Option<HoleCards>,
}

impl Player {
    pub fn hole(&self) -> Option<&HoleCards> {
        self.hole.as_ref()
    }
}

/// Leading player index per street, set once when the street's ranking
/// completes and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreetWinners {
    pub deal: Option<usize>,
    pub flop: Option<usize>,
    pub turn: Option<usize>,
    pub river: Option<usize>,
}

/// Player indices holding notable pre-flop hands, recorded during the
/// pre-flop ranking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreflopTraits {
    /// Players whose highest hole card is an ace.
    pub ace_high: Vec<usize>,
    /// Players holding a pocket pair.
    pub pocket_pair: Vec<usize>,
    /// Players whose hole cards share a suit.
    pub suited: Vec<usize>,
}

/// Everything the aggregator needs from one completed game.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GameRecord {
    pub hole_cards: Vec<HoleCards>,
    pub community: Vec<Card>,
    pub deal_winner: usize,
    pub flop_winner: usize,
    pub turn_winner: usize,
    pub river_winner: usize,
    pub traits: PreflopTraits,
}

impl GameRecord {
    /// The river winner takes the pot.
    pub fn pot_winner(&self) -> usize {
        self.river_winner
    }

    pub fn deal_leader_held(&self) -> bool {
        self.deal_winner == self.river_winner
    }

    pub fn flop_leader_held(&self) -> bool {
        self.flop_winner == self.river_winner
    }

    pub fn turn_leader_held(&self) -> bool {
        self.turn_winner == self.river_winner
    }

    pub fn winner_was_ace_high(&self) -> bool {
        self.traits.ace_high.contains(&self.river_winner)
    }

    pub fn winner_was_pocket_pair(&self) -> bool {
        self.traits.pocket_pair.contains(&self.river_winner)
    }

    pub fn winner_was_suited(&self) -> bool {
        self.traits.suited.contains(&self.river_winner)
    }
}

impl fmt::Display for GameRecord {
    /// One line per game: hole cards per player, colon-joined community
    /// cards, the four street winners, then the three leader-held flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hole in &self.hole_cards {
            write!(f, "{hole} ")?;
        }
        let community: Vec<String> = self.community.iter().map(Card::to_string).collect();
        write!(
            f,
            "{} {} {} {} {} {} {} {}",
            community.join(":"),
            self.deal_winner,
            self.flop_winner,
            self.turn_winner,
            self.river_winner,
            u8::from(self.deal_leader_held()),
            u8::from(self.flop_leader_held()),
            u8::from(self.turn_leader_held()),
        )
    }
}

/// One table, one game: deal, then flop/turn/river with a burn before each
/// reveal, ranking all players after every street.
#[derive(Debug)]
pub struct Table {
    players: Vec<Player>,
    community: Vec<Card>,
    burnt: Vec<Card>,
    deck: Deck,
    stage: Stage,
    winners: StreetWinners,
    traits: PreflopTraits,
}

impl Table {
    /// Seat `players` players over a (usually pre-shuffled) deck.
    pub fn new(players: usize, deck: Deck) -> Result<Self, TableError> {
        if players == 0 || players > MAX_PLAYERS {
            return Err(TableError::PlayerCount(players));
        }
        Ok(Self {
            players: vec![Player { hole: None }; players],
            community: Vec::with_capacity(5),
            burnt: Vec::with_capacity(3),
            deck,
            stage: Stage::Empty,
            winners: StreetWinners::default(),
            traits: PreflopTraits::default(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn winners(&self) -> &StreetWinners {
        &self.winners
    }

    pub fn preflop_traits(&self) -> &PreflopTraits {
        &self.traits
    }

    fn expect_stage(&self, action: &'static str, stage: Stage) -> Result<(), TableError> {
        if self.stage != stage {
            return Err(TableError::OutOfOrder { action, stage: self.stage });
        }
        Ok(())
    }

    fn burn_card(&mut self) -> Result<(), TableError> {
        let card = self.deck.draw()?;
        self.burnt.push(card);
        Ok(())
    }

    fn hole(&self, seat: usize) -> Result<&HoleCards, TableError> {
        self.players[seat]
            .hole
            .as_ref()
            .ok_or(TableError::OutOfOrder { action: "rank_players", stage: self.stage })
    }

    /// Deal two rounds of one card per player, round-robin.
    pub fn deal(&mut self) -> Result<(), TableError> {
        self.expect_stage("deal", Stage::Empty)?;

        let mut drawn: Vec<[Option<Card>; 2]> = vec![[None; 2]; self.players.len()];
        for round in 0..2 {
            for seat in drawn.iter_mut() {
                seat[round] = Some(self.deck.draw()?);
            }
        }
        for (player, cards) in self.players.iter_mut().zip(drawn) {
            if let [Some(a), Some(b)] = cards {
                player.hole = Some(HoleCards::try_new(a, b)?);
            }
        }

        self.stage = Stage::Dealt;
        Ok(())
    }

    /// Burn one card, reveal the three flop cards.
    pub fn flop(&mut self) -> Result<(), TableError> {
        self.expect_stage("flop", Stage::Dealt)?;
        self.burn_card()?;
        for _ in 0..3 {
            let card = self.deck.draw()?;
            self.community.push(card);
        }
        self.stage = Stage::Flopped;
        Ok(())
    }

    /// Burn one card, reveal the turn card.
    pub fn turn(&mut self) -> Result<(), TableError> {
        self.expect_stage("turn", Stage::Flopped)?;
        self.burn_card()?;
        let card = self.deck.draw()?;
        self.community.push(card);
        self.stage = Stage::Turned;
        Ok(())
    }

    /// Burn one card, reveal the river card.
    pub fn river(&mut self) -> Result<(), TableError> {
        self.expect_stage("river", Stage::Turned)?;
        self.burn_card()?;
        let card = self.deck.draw()?;
        self.community.push(card);
        self.stage = Stage::Rivered;
        Ok(())
    }

    /// Rank all players, best hand first. Pre-flop uses the 2-card mini
    /// evaluator and records the ace-high / pocket-pair / suited trait sets;
    /// later streets select each player's best 5-card hand. Ties keep seat
    /// order, so the lower seat leads.
    pub fn rank_players(&mut self, pre_flop: bool) -> Result<Vec<usize>, TableError> {
        if self.stage == Stage::Empty {
            return Err(TableError::OutOfOrder { action: "rank_players", stage: self.stage });
        }

        let mut ranked: Vec<(usize, Evaluation)> = Vec::with_capacity(self.players.len());
        if pre_flop {
            self.traits = PreflopTraits::default();
            for seat in 0..self.players.len() {
                let hole = *self.hole(seat)?;
                let eval = evaluate_mini(hole.first(), hole.second());
                if hole.high_rank() == Rank::Ace {
                    self.traits.ace_high.push(seat);
                }
                if eval.category == Category::Pair {
                    self.traits.pocket_pair.push(seat);
                }
                if hole.is_suited() {
                    self.traits.suited.push(seat);
                }
                ranked.push((seat, eval));
            }
        } else {
            for seat in 0..self.players.len() {
                let hole = *self.hole(seat)?;
                let eval = best_hand(&hole, &self.community)?;
                ranked.push((seat, eval));
            }
        }

        // Stable sort: equal evaluations keep ascending seat order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(ranked.into_iter().map(|(seat, _)| seat).collect())
    }

    fn leader(order: &[usize]) -> Result<usize, TableError> {
        order.first().copied().ok_or(TableError::PlayerCount(0))
    }

    /// Run one full game: deal and rank pre-flop, then flop, turn, and river
    /// with a ranking after each, recording the leading player per street.
    /// Consumes the table; a fresh deck and table are required per game.
    pub fn run_one_game(mut self) -> Result<GameRecord, TableError> {
        self.deal()?;
        let order = self.rank_players(true)?;
        self.winners.deal = Some(Self::leader(&order)?);

        self.flop()?;
        let order = self.rank_players(false)?;
        self.winners.flop = Some(Self::leader(&order)?);

        self.turn()?;
        let order = self.rank_players(false)?;
        self.winners.turn = Some(Self::leader(&order)?);

        self.river()?;
        let order = self.rank_players(false)?;
        self.winners.river = Some(Self::leader(&order)?);

        log::debug!(
            "street winners: deal={:?} flop={:?} turn={:?} river={:?}",
            self.winners.deal,
            self.winners.flop,
            self.winners.turn,
            self.winners.river
        );

        let mut hole_cards = Vec::with_capacity(self.players.len());
        for seat in 0..self.players.len() {
            hole_cards.push(*self.hole(seat)?);
        }
        let winners = self.winners;
        let missing = TableError::OutOfOrder { action: "record", stage: self.stage };
        Ok(GameRecord {
            hole_cards,
            community: self.community,
            deal_winner: winners.deal.ok_or_else(|| missing.clone())?,
            flop_winner: winners.flop.ok_or_else(|| missing.clone())?,
            turn_winner: winners.turn.ok_or_else(|| missing.clone())?,
            river_winner: winners.river.ok_or(missing)?,
            traits: self.traits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    /// Deck that yields `draws` in order (first listed card drawn first).
    fn rigged_deck(draws: &str) -> Deck {
        let mut cards = parse_cards(draws).unwrap();
        cards.reverse();
        Deck::from_cards(cards)
    }

    #[test]
    fn player_count_bounds() {
        assert!(matches!(Table::new(0, Deck::standard()), Err(TableError::PlayerCount(0))));
        assert!(matches!(Table::new(23, Deck::standard()), Err(TableError::PlayerCount(23))));
        assert!(Table::new(22, Deck::standard()).is_ok());
    }

    #[test]
    fn deal_is_round_robin_over_two_rounds() {
        // Draw order: P0 As, P1 Kd, then P0 Ah, P1 Qd.
        let mut table = Table::new(2, rigged_deck("As Kd Ah Qd")).unwrap();
        table.deal().unwrap();
        assert_eq!(table.players()[0].hole().unwrap().to_string(), "As:Ah");
        assert_eq!(table.players()[1].hole().unwrap().to_string(), "Kd:Qd");
        assert_eq!(table.stage(), Stage::Dealt);
    }

    #[test]
    fn streets_are_strictly_ordered() {
        let mut table = Table::new(2, Deck::new(true)).unwrap();
        assert!(matches!(table.flop(), Err(TableError::OutOfOrder { action: "flop", .. })));
        assert!(matches!(
            table.rank_players(true),
            Err(TableError::OutOfOrder { action: "rank_players", .. })
        ));
        table.deal().unwrap();
        assert!(matches!(table.deal(), Err(TableError::OutOfOrder { action: "deal", .. })));
        assert!(matches!(table.turn(), Err(TableError::OutOfOrder { action: "turn", .. })));
        table.flop().unwrap();
        assert!(matches!(table.river(), Err(TableError::OutOfOrder { action: "river", .. })));
        table.turn().unwrap();
        table.river().unwrap();
        assert_eq!(table.stage(), Stage::Rivered);
        assert_eq!(table.community().len(), 5);
    }

    #[test]
    fn full_game_consumes_two_n_plus_eight_cards() {
        for n in [1, 2, 5, 9, 22] {
            let mut table = Table::new(n, Deck::new(true)).unwrap();
            table.deal().unwrap();
            table.flop().unwrap();
            table.turn().unwrap();
            table.river().unwrap();
            assert_eq!(table.deck.len(), 52 - (2 * n + 8));
            assert_eq!(table.burnt.len(), 3);
            assert_eq!(table.community.len(), 5);
        }
    }

    #[test]
    fn too_many_draws_exhaust_the_deck() {
        let short = Deck::from_cards(parse_cards("As Kd Qh Jc").unwrap());
        let mut table = Table::new(5, short).unwrap();
        assert!(matches!(table.deal(), Err(TableError::Deck(DeckError::Empty))));
    }

    #[test]
    fn preflop_ranking_records_traits() {
        // P0 pocket aces, P1 suited K/Q, P2 unsuited ace-high junk.
        let mut table = Table::new(3, rigged_deck("As Kd Ac Ah Qd 7s")).unwrap();
        table.deal().unwrap();
        let order = table.rank_players(true).unwrap();
        assert_eq!(order[0], 0);
        let traits = table.preflop_traits();
        assert_eq!(traits.ace_high, vec![0, 2]);
        assert_eq!(traits.pocket_pair, vec![0]);
        assert_eq!(traits.suited, vec![1]);
    }

    #[test]
    fn preflop_ties_keep_seat_order() {
        // Both players hold K/Q offsuit: identical mini evaluations.
        let mut table = Table::new(2, rigged_deck("Kd Kh Qs Qc")).unwrap();
        table.deal().unwrap();
        let order = table.rank_players(true).unwrap();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn fixed_game_produces_expected_street_winners() {
        // P0: As Ah (pocket aces). P1: Kd Qd (suited).
        // Burn 2c; flop Ad 7s 2h -> P0 trips.
        // Burn 3c; turn Jd       -> P0 still leads.
        // Burn 3h; river Td      -> P1 rivers a royal flush.
        let deck = rigged_deck("As Kd Ah Qd 2c Ad 7s 2h 3c Jd 3h Td");
        let record = Table::new(2, deck).unwrap().run_one_game().unwrap();

        assert_eq!(record.deal_winner, 0);
        assert_eq!(record.flop_winner, 0);
        assert_eq!(record.turn_winner, 0);
        assert_eq!(record.river_winner, 1);
        assert_eq!(record.pot_winner(), 1);

        assert!(!record.deal_leader_held());
        assert!(!record.flop_leader_held());
        assert!(!record.turn_leader_held());

        assert_eq!(record.traits.ace_high, vec![0]);
        assert_eq!(record.traits.pocket_pair, vec![0]);
        assert_eq!(record.traits.suited, vec![1]);
        assert!(!record.winner_was_ace_high());
        assert!(!record.winner_was_pocket_pair());
        assert!(record.winner_was_suited());
    }

    #[test]
    fn game_record_display_matches_the_dump_format() {
        let deck = rigged_deck("As Kd Ah Qd 2c Ad 7s 2h 3c Jd 3h Td");
        let record = Table::new(2, deck).unwrap().run_one_game().unwrap();
        assert_eq!(record.to_string(), "As:Ah Kd:Qd Ad:7s:2h:Jd:Td 0 0 0 1 0 0 0");
    }
}
