/// Lazy iterator over all k-combinations of indices `0..n`, in lexicographic
/// order. `K` is a compile-time constant because every caller knows its
/// combination width; `n` stays a runtime value (the community pool grows
/// from 3 to 5 across streets).
///
/// If `n < K` the iterator is empty.
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    done: bool,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { n, indices, done: n < K }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Advance to the next combination: bump the rightmost index that has
        // room, then reset everything to its right.
        let mut i = K - 1;
        loop {
            if self.indices[i] < self.n - (K - i) {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn three_choose_three_is_a_single_combination() {
        let combos: Vec<[usize; 3]> = Combinations::new(3).collect();
        assert_eq!(combos, vec![[0, 1, 2]]);
    }

    #[test]
    fn four_choose_three_yields_four() {
        let combos: Vec<[usize; 3]> = Combinations::new(4).collect();
        assert_eq!(combos, vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
    }

    #[test]
    fn five_choose_three_yields_ten_in_lex_order() {
        let combos: Vec<[usize; 3]> = Combinations::new(5).collect();
        assert_eq!(combos.len(), 10);
        assert_eq!(combos.first(), Some(&[0, 1, 2]));
        assert_eq!(combos.last(), Some(&[2, 3, 4]));
        for w in combos.windows(2) {
            assert!(w[0] < w[1], "not lexicographic: {:?} before {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn all_indices_valid_and_strictly_ascending() {
        for combo in Combinations::<3>::new(5) {
            assert!(combo.iter().all(|&i| i < 5));
            assert!(combo[0] < combo[1] && combo[1] < combo[2]);
        }
    }

    #[test]
    fn no_duplicate_combinations() {
        let mut seen = HashSet::new();
        for combo in Combinations::<3>::new(5) {
            assert!(seen.insert(combo), "duplicate: {combo:?}");
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn too_small_pool_yields_nothing() {
        let mut iter = Combinations::<3>::new(2);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iterator_exhausts_and_stays_exhausted() {
        let mut iter = Combinations::<3>::new(4);
        for _ in 0..4 {
            assert!(iter.next().is_some());
        }
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
