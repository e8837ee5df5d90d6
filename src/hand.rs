use crate::cards::{parse_cards, Card, Rank, Suit};
use crate::evaluator::{classify_five, evaluate_mini, Evaluation, RankProfile};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand holds exactly 2 or 5 cards, got {0}")]
    CardCount(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// An unordered set of 2 (mini) or 5 (full) cards, with the rank-count
/// profile and evaluation computed once at construction.
///
/// ```
/// use holdem_sim::evaluator::Category;
/// use holdem_sim::hand::Hand;
///
/// let hand: Hand = "AC 2S 3C 4H 5S".parse().unwrap();
/// assert_eq!(hand.category(), Category::Straight);
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    profile: RankProfile,
    evaluation: Evaluation,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Result<Self, HandError> {
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateCards);
        }

        let profile = RankProfile::of_cards(&cards);
        let evaluation = match cards.as_slice() {
            &[a, b] => evaluate_mini(a, b),
            &[a, b, c, d, e] => classify_five(&[a, b, c, d, e], profile.clone()),
            other => return Err(HandError::CardCount(other.len())),
        };

        Ok(Self { cards, profile, evaluation })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.cards.iter().map(|c| c.rank())
    }

    pub fn suits(&self) -> impl Iterator<Item = Suit> + '_ {
        self.cards.iter().map(|c| c.suit())
    }

    /// The (rank, count) profile, sorted by (count desc, rank desc).
    pub fn profile(&self) -> &RankProfile {
        &self.profile
    }

    /// The comparable evaluation; ordering is total within one hand size.
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn category(&self) -> crate::evaluator::Category {
        self.evaluation.category
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::new(cards)
    }
}

/// A player's two private hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    /// Highest of the two ranks.
    pub fn high_rank(&self) -> Rank {
        self.0.rank().max(self.1.rank())
    }

    /// Both cards share a rank (a pocket pair).
    pub fn is_pocket_pair(&self) -> bool {
        self.0.rank() == self.1.rank()
    }

    /// Both cards share a suit.
    pub fn is_suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0, self.1)
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}
