use crate::cards::Card;
use crate::evaluator::combinations::Combinations;
use crate::evaluator::{evaluate_five, Evaluation};
use crate::hand::HoleCards;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectError {
    #[error("best-hand selection needs at least 3 community cards, got {0}")]
    InsufficientCommunityCards(usize),
}

/// Select a player's best five-card hand: both hole cards plus every 3-card
/// combination from the community pool, keeping the maximum evaluation.
/// Invoked from the flop onward; pre-flop ranking uses the mini evaluator
/// directly. At most C(5,3) = 10 evaluations.
///
/// ```
/// use holdem_sim::cards::parse_cards;
/// use holdem_sim::evaluator::Category;
/// use holdem_sim::hand::HoleCards;
/// use holdem_sim::selector::best_hand;
///
/// let hole: HoleCards = "Kd Qd".parse().unwrap();
/// let community = parse_cards("Ad 7s 2h Jd Td").unwrap();
/// let best = best_hand(&hole, &community).unwrap();
/// assert_eq!(best.category, Category::StraightFlush);
/// ```
pub fn best_hand(hole: &HoleCards, community: &[Card]) -> Result<Evaluation, SelectError> {
    if community.len() < 3 {
        return Err(SelectError::InsufficientCommunityCards(community.len()));
    }

    let mut best: Option<Evaluation> = None;
    for [i, j, k] in Combinations::<3>::new(community.len()) {
        let five = [hole.first(), hole.second(), community[i], community[j], community[k]];
        let eval = evaluate_five(&five);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    // The pool has >= 3 cards, so at least one combination was evaluated.
    best.ok_or(SelectError::InsufficientCommunityCards(community.len()))
}
