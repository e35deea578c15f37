//! Longest strictly increasing subsequence (LIS).
//!
//! The quadratic table stores, per position `i`, the length of the longest
//! increasing subsequence ending at `i` and the predecessor that produced it.
//! The compact strategy is patience sorting: the smallest tail value of every
//! subsequence length found so far, searched with binary search.

use crate::table::Memo;
use crate::traits::{DpProblem, Reconstruct};
use crate::utils::{is_subsequence, lower_bound};

#[derive(Clone, Debug)]
pub struct LisProblem<'a, T> {
    sequence: &'a [T],
}

/// Quadratic DP table plus its decision trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LisTable {
    /// `lengths[i]`: longest increasing subsequence ending at `i`.
    pub lengths: Vec<u32>,
    /// `predecessors[i]`: previous index of that subsequence, if any.
    pub predecessors: Vec<Option<usize>>,
}

impl<'a, T: Clone + Ord> LisProblem<'a, T> {
    pub fn new(sequence: &'a [T]) -> Self {
        Self { sequence }
    }

    /// Patience sorting with an explicit predecessor array.
    ///
    /// `tails[k]` holds the index of the smallest tail among increasing
    /// subsequences of length `k + 1`; each element records the tail it
    /// extended, so the subsequence is recovered in O(n log n) overall.
    pub fn patience_with_sequence(&self) -> (u32, Vec<T>) {
        let seq = self.sequence;
        let mut tail_values: Vec<&T> = Vec::new();
        let mut tail_indices: Vec<usize> = Vec::new();
        let mut predecessors: Vec<Option<usize>> = vec![None; seq.len()];

        for (i, x) in seq.iter().enumerate() {
            let pos = lower_bound(&tail_values, &x);
            if pos > 0 {
                predecessors[i] = Some(tail_indices[pos - 1]);
            }
            if pos == tail_values.len() {
                tail_values.push(x);
                tail_indices.push(i);
            } else {
                tail_values[pos] = x;
                tail_indices[pos] = i;
            }
        }

        let mut rev = Vec::with_capacity(tail_indices.len());
        let mut cursor = tail_indices.last().copied();
        while let Some(i) = cursor {
            rev.push(seq[i].clone());
            cursor = predecessors[i];
        }
        rev.reverse();
        (tail_indices.len() as u32, rev)
    }

    fn memo_ending_at(&self, memo: &mut [Memo<u32>], i: usize) -> u32 {
        if let Memo::Computed(v) = memo[i] {
            return v;
        }
        let mut best = 1;
        for j in 0..i {
            if self.sequence[j] < self.sequence[i] {
                best = best.max(self.memo_ending_at(memo, j) + 1);
            }
        }
        memo[i] = Memo::Computed(best);
        best
    }
}

impl<'a, T: Clone + Ord> DpProblem for LisProblem<'a, T> {
    type Value = u32;
    type Table = LisTable;

    fn name(&self) -> &'static str {
        "lis"
    }

    fn recursion_depth(&self) -> usize {
        self.sequence.len()
    }

    fn fill_table(&self) -> LisTable {
        let seq = self.sequence;
        let n = seq.len();
        let mut lengths = vec![1u32; n];
        let mut predecessors = vec![None; n];
        for i in 1..n {
            for j in 0..i {
                // Strict improvement keeps the first j reaching the max.
                if seq[j] < seq[i] && lengths[j] + 1 > lengths[i] {
                    lengths[i] = lengths[j] + 1;
                    predecessors[i] = Some(j);
                }
            }
        }
        LisTable {
            lengths,
            predecessors,
        }
    }

    fn table_value(&self, table: &LisTable) -> u32 {
        table.lengths.iter().copied().max().unwrap_or(0)
    }

    fn solve_compact(&self) -> u32 {
        let mut tails: Vec<&T> = Vec::new();
        for x in self.sequence {
            let pos = lower_bound(&tails, &x);
            if pos == tails.len() {
                tails.push(x);
            } else {
                tails[pos] = x;
            }
        }
        tails.len() as u32
    }

    fn solve_memoized(&self) -> u32 {
        let mut memo = vec![Memo::Unset; self.sequence.len()];
        (0..self.sequence.len())
            .map(|i| self.memo_ending_at(&mut memo, i))
            .max()
            .unwrap_or(0)
    }
}

impl<'a, T: Clone + Ord> Reconstruct for LisProblem<'a, T> {
    type Solution = Vec<T>;

    fn reconstruct(&self, table: &LisTable) -> Option<Vec<T>> {
        let best = self.table_value(table);
        let mut cursor = table.lengths.iter().position(|&l| l == best);
        let mut rev = Vec::with_capacity(best as usize);
        while let Some(i) = cursor {
            rev.push(self.sequence[i].clone());
            cursor = table.predecessors[i];
        }
        rev.reverse();
        Some(rev)
    }

    fn replay(&self, solution: &Vec<T>) -> Option<u32> {
        let increasing = solution.windows(2).all(|w| w[0] < w[1]);
        (increasing && is_subsequence(solution, self.sequence)).then_some(solution.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: [i32; 8] = [10, 9, 2, 5, 3, 7, 101, 18];

    fn lengths(seq: &[i32]) -> [u32; 3] {
        let p = LisProblem::new(seq);
        [p.solve_tabulated(), p.solve_compact(), p.solve_memoized()]
    }

    #[test]
    fn reference_sequence() {
        assert_eq!(lengths(&REFERENCE), [4; 3]);
        let p = LisProblem::new(&REFERENCE);
        assert_eq!(p.reconstruct(&p.fill_table()), Some(vec![2, 5, 7, 101]));
        assert_eq!(p.patience_with_sequence(), (4, vec![2, 3, 7, 18]));
    }

    #[test]
    fn degenerate_sequences() {
        assert_eq!(lengths(&[]), [0; 3]);
        assert_eq!(lengths(&[7, 7, 7, 7, 7]), [1; 3]);
        assert_eq!(lengths(&[5, 4, 3, 2, 1]), [1; 3]);
        assert_eq!(lengths(&[1, 2, 3, 4]), [4; 3]);
        let p = LisProblem::<i32>::new(&[]);
        assert_eq!(p.reconstruct(&p.fill_table()), Some(vec![]));
        assert_eq!(p.patience_with_sequence(), (0, vec![]));
    }

    #[test]
    fn van_der_corput_sequence() {
        let seq = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
        assert_eq!(lengths(&seq), [6; 3]);
        let p = LisProblem::new(&seq);
        let (len, witness) = p.patience_with_sequence();
        assert_eq!(p.replay(&witness), Some(len));
    }

    #[test]
    fn first_predecessor_wins_ties() {
        // 2 extends either 1 or 0 to length 2; the scan records index 0.
        let p = LisProblem::new(&[1, 0, 2]);
        let table = p.fill_table();
        assert_eq!(table.lengths, vec![1, 1, 2]);
        assert_eq!(table.predecessors, vec![None, None, Some(0)]);
        assert_eq!(p.reconstruct(&table), Some(vec![1, 2]));
    }

    #[test]
    fn replay_requires_strictly_increasing_subsequence() {
        let p = LisProblem::new(&REFERENCE);
        assert_eq!(p.replay(&vec![2, 3, 7, 101]), Some(4));
        assert_eq!(p.replay(&vec![2, 2]), None);
        assert_eq!(p.replay(&vec![7, 5]), None);
        assert_eq!(p.replay(&vec![1, 2]), None);
    }
}
