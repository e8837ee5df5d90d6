pub(crate) mod combinations;
mod profile;
mod straight;

pub use profile::RankProfile;

use crate::cards::Card;
use core::cmp::Ordering;

/// Poker hand category from weakest to strongest. The enum ordinal is the
/// coarse score bucket; same-category ties fall through to the rank-count
/// profile comparison. An explicit ranking rather than combined per-predicate
/// bit shifts, so overlapping predicates (a flush that is also a straight)
/// cannot produce ambiguous scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Evaluated hand strength: category plus the tie-break profile.
///
/// Ordering is total within one evaluator family (full 5-card hands, or
/// 2-card mini hands): category first, then element-wise profile ranks.
/// For a wheel straight the ace is demoted in the tie-break profile so the
/// wheel ranks below every other straight.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    tiebreak: RankProfile,
}

impl Evaluation {
    pub fn tiebreak(&self) -> &RankProfile {
        &self.tiebreak
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Evaluate exactly five cards.
///
/// ```
/// use holdem_sim::cards::parse_cards;
/// use holdem_sim::evaluator::{evaluate_five, Category};
///
/// let cards: [_; 5] = parse_cards("AC 2S 3C 4H 5S").unwrap().try_into().unwrap();
/// assert_eq!(evaluate_five(&cards).category, Category::Straight);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    classify_five(cards, RankProfile::of_cards(cards))
}

/// Evaluate a 2-card mini hand: `Pair` when both ranks match, `HighCard`
/// otherwise. Used for pre-flop ranking, before any community cards exist.
pub fn evaluate_mini(first: Card, second: Card) -> Evaluation {
    let category =
        if first.rank() == second.rank() { Category::Pair } else { Category::HighCard };
    let tiebreak = RankProfile::of_ranks([first.rank(), second.rank()]);
    Evaluation { category, tiebreak }
}

/// Classify five cards given their precomputed profile. The independent
/// predicates of the category definitions collapse into one priority chain,
/// checked strongest first.
pub(crate) fn classify_five(cards: &[Card; 5], profile: RankProfile) -> Evaluation {
    let ranks = [
        cards[0].rank(),
        cards[1].rank(),
        cards[2].rank(),
        cards[3].rank(),
        cards[4].rank(),
    ];
    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight::detect(&ranks);

    let (_, head_count) = profile.head();

    let category = match (flush, straight, head_count, profile.distinct()) {
        (true, Some(_), _, _) => Category::StraightFlush,
        (_, _, 4, _) => Category::FourOfAKind,
        (_, _, 3, 2) => Category::FullHouse,
        (true, None, _, _) => Category::Flush,
        (false, Some(_), _, _) => Category::Straight,
        (_, _, 3, 3) => Category::ThreeOfAKind,
        (_, _, 2, 3) => Category::TwoPair,
        (_, _, 2, 4) => Category::Pair,
        _ => Category::HighCard,
    };

    let tiebreak = match straight {
        Some(s) if s.ace_plays_low() => profile.demote_ace(),
        _ => profile,
    };

    Evaluation { category, tiebreak }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> Evaluation {
        let cards: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
        evaluate_five(&cards)
    }

    #[test]
    fn classifies_every_category() {
        assert_eq!(eval("AS KS QS JS TS").category, Category::StraightFlush);
        assert_eq!(eval("KC KD KH KS 2S").category, Category::FourOfAKind);
        assert_eq!(eval("TC TD TH 2S 2H").category, Category::FullHouse);
        assert_eq!(eval("AH 9H 7H 3H 2H").category, Category::Flush);
        assert_eq!(eval("AC 2D 3H 4S 5C").category, Category::Straight);
        assert_eq!(eval("QC QD QH 9S 2C").category, Category::ThreeOfAKind);
        assert_eq!(eval("JC JD 9C 9H 2S").category, Category::TwoPair);
        assert_eq!(eval("AH AD TS 9C 2D").category, Category::Pair);
        assert_eq!(eval("AH KD 7S 5C 2D").category, Category::HighCard);
    }

    #[test]
    fn straight_flush_beats_four_of_a_kind() {
        assert!(eval("6H 5H 4H 3H 2H") > eval("AC AD AH AS KS"));
    }

    #[test]
    fn wheel_straight_flush_stays_a_straight_flush() {
        let e = eval("AH 2H 3H 4H 5H");
        assert_eq!(e.category, Category::StraightFlush);
        assert!(e < eval("6S 5S 4S 3S 2S"));
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        assert!(eval("AC 2D 3H 4S 5C") < eval("6C 5D 4H 3S 2C"));
    }

    #[test]
    fn quad_rank_breaks_quad_ties() {
        assert!(eval("9C 9D 9H 9S AC") > eval("8C 8D 8H 8S AD"));
    }

    #[test]
    fn kicker_breaks_pair_ties() {
        assert!(eval("JS JH AD 9C 3S") > eval("JC JD AS 8C 3H"));
    }

    #[test]
    fn identical_structure_is_a_tie() {
        assert_eq!(eval("JS JH 9D 7C 3S").cmp(&eval("JC JD 9S 7H 3C")), Ordering::Equal);
    }

    #[test]
    fn mini_hand_pair_and_high_card() {
        let cards = parse_cards("8C 8S").unwrap();
        let pair = evaluate_mini(cards[0], cards[1]);
        assert_eq!(pair.category, Category::Pair);

        let cards = parse_cards("AC KS").unwrap();
        let high = evaluate_mini(cards[0], cards[1]);
        assert_eq!(high.category, Category::HighCard);

        assert!(pair > high);
    }

    #[test]
    fn mini_pairs_order_by_rank() {
        let aces = parse_cards("AC AS").unwrap();
        let twos = parse_cards("2C 2S").unwrap();
        assert!(evaluate_mini(aces[0], aces[1]) > evaluate_mini(twos[0], twos[1]));
    }
}
