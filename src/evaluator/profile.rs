use crate::cards::{Card, Rank};
use core::cmp::Ordering;

/// Rank-count profile of a hand: one `(rank, count)` entry per distinct rank,
/// sorted by (count desc, rank desc). Computed once at construction and
/// immutable thereafter.
///
/// Example: AAAKQ profiles as `[(A, 3), (K, 1), (Q, 1)]`.
///
/// Because every distinct rank appears, singleton kickers participate in the
/// element-wise tie-break, so same-category comparisons are kicker-exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankProfile {
    entries: Vec<(Rank, u8)>,
}

impl RankProfile {
    pub fn of_cards(cards: &[Card]) -> Self {
        Self::of_ranks(cards.iter().map(|c| c.rank()))
    }

    pub fn of_ranks<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }

        let mut entries: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { entries }
    }

    pub fn entries(&self) -> &[(Rank, u8)] {
        &self.entries
    }

    /// The most frequent (and within equal counts, highest) rank entry.
    /// A profile is never empty: hands hold at least one card.
    pub fn head(&self) -> (Rank, u8) {
        self.entries[0]
    }

    /// Number of distinct ranks in the hand.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Ranks that appear exactly once, in descending order.
    pub fn kickers(&self) -> impl Iterator<Item = Rank> + '_ {
        self.entries.iter().filter(|(_, n)| *n == 1).map(|(r, _)| *r)
    }

    /// A copy with any ace entry moved to the tail. Used when the ace plays
    /// low (the wheel straight), so the Five leads the tie-break instead.
    pub(crate) fn demote_ace(&self) -> Self {
        let mut entries = self.entries.clone();
        if let Some(pos) = entries.iter().position(|(r, _)| *r == Rank::Ace) {
            let ace = entries.remove(pos);
            entries.push(ace);
        }
        Self { entries }
    }
}

impl Ord for RankProfile {
    /// Element-wise comparison at matching profile positions, rank first;
    /// the first differing position decides. Equal-length identical profiles
    /// compare equal. Length breaks remaining ties so the order is total and
    /// agrees with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        for ((ra, ca), (rb, cb)) in self.entries.iter().zip(other.entries.iter()) {
            match ra.cmp(rb).then(ca.cmp(cb)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.entries.len().cmp(&other.entries.len())
    }
}

impl PartialOrd for RankProfile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
