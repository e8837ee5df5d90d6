use crate::cards::Rank;

/// A detected straight and its top rank. The only Five-high straight is the
/// wheel (A-2-3-4-5), where the ace plays low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Straight {
    pub top: Rank,
}

impl Straight {
    pub fn ace_plays_low(self) -> bool {
        self.top == Rank::Five
    }
}

/// Detect a run of 5 consecutive distinct ranks, or the wheel.
/// Input may be in any order.
pub fn detect(ranks: &[Rank; 5]) -> Option<Straight> {
    let mut sorted = *ranks;
    sorted.sort_by(|a, b| b.cmp(a));

    let consecutive = (0..4).all(|i| sorted[i].value() == sorted[i + 1].value() + 1);
    if consecutive {
        return Some(Straight { top: sorted[0] });
    }

    let wheel = sorted
        == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
    if wheel {
        return Some(Straight { top: Rank::Five });
    }

    None
}
