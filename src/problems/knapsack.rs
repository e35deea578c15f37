//! 0/1 knapsack.
//!
//! Layers are item prefixes (0..=n) and columns are capacities (0..=W); the
//! cell `(i, w)` holds the best value achievable with the first `i` items
//! under capacity `w`. Each item is taken at most once.
//!
//! Row 0 is the only base case. Capacity 0 is an ordinary column so that
//! zero-weight items (always worth taking) are counted identically by all
//! three strategies.

use crate::error::DpError;
use crate::table::{Grid, Memo};
use crate::traits::{DpProblem, Reconstruct};

#[derive(Clone, Debug)]
pub struct KnapsackProblem<'a> {
    weights: &'a [usize],
    values: &'a [u64],
    capacity: usize,
}

/// Ascending 0-based indices of the selected items.
pub type KnapsackSelection = Vec<usize>;

impl<'a> KnapsackProblem<'a> {
    pub fn new(weights: &'a [usize], values: &'a [u64], capacity: usize) -> Result<Self, DpError> {
        if weights.len() != values.len() {
            return Err(DpError::MismatchedLengths {
                weights: weights.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Combined weight of `items`, or `None` if an index is out of range.
    pub fn total_weight(&self, items: &[usize]) -> Option<usize> {
        items
            .iter()
            .try_fold(0usize, |acc, &i| self.weights.get(i).map(|w| acc + w))
    }

    /// Value of cell `(i, w)` given row `i - 1`.
    #[inline]
    fn transition(&self, item: usize, w: usize, prev_row: impl Fn(usize) -> u64) -> u64 {
        let exclude = prev_row(w);
        let weight = self.weights[item];
        if weight <= w {
            exclude.max(self.values[item] + prev_row(w - weight))
        } else {
            exclude
        }
    }

    fn memo_cell(&self, memo: &mut Grid<Memo<u64>>, i: usize, w: usize) -> u64 {
        if i == 0 {
            return 0;
        }
        if let Memo::Computed(v) = memo[(i, w)] {
            return v;
        }
        let exclude = self.memo_cell(memo, i - 1, w);
        let weight = self.weights[i - 1];
        let best = if weight <= w {
            exclude.max(self.values[i - 1] + self.memo_cell(memo, i - 1, w - weight))
        } else {
            exclude
        };
        memo[(i, w)] = Memo::Computed(best);
        best
    }
}

impl<'a> DpProblem for KnapsackProblem<'a> {
    type Value = u64;
    type Table = Grid<u64>;

    fn name(&self) -> &'static str {
        "knapsack"
    }

    fn recursion_depth(&self) -> usize {
        self.len()
    }

    fn fill_table(&self) -> Self::Table {
        let n = self.len();
        let mut dp = Grid::new(n + 1, self.capacity + 1, 0u64);
        for i in 1..=n {
            for w in 0..=self.capacity {
                let v = self.transition(i - 1, w, |c| dp[(i - 1, c)]);
                dp[(i, w)] = v;
            }
        }
        dp
    }

    fn table_value(&self, table: &Self::Table) -> u64 {
        table.get(self.len(), self.capacity).copied().unwrap_or(0)
    }

    fn solve_compact(&self) -> u64 {
        let mut dp = vec![0u64; self.capacity + 1];
        for (&weight, &value) in self.weights.iter().zip(self.values) {
            if weight > self.capacity {
                continue;
            }
            // Descending so dp[w - weight] still refers to the previous item row.
            for w in (weight..=self.capacity).rev() {
                dp[w] = dp[w].max(dp[w - weight] + value);
            }
        }
        dp[self.capacity]
    }

    fn solve_memoized(&self) -> u64 {
        let mut memo = Grid::new(self.len() + 1, self.capacity + 1, Memo::Unset);
        self.memo_cell(&mut memo, self.len(), self.capacity)
    }
}

impl<'a> Reconstruct for KnapsackProblem<'a> {
    type Solution = KnapsackSelection;

    fn reconstruct(&self, table: &Self::Table) -> Option<KnapsackSelection> {
        let mut w = self.capacity;
        let mut picked = Vec::new();
        for i in (1..=self.len()).rev() {
            // Equal value means the item could be left out; prefer that.
            if table[(i, w)] != table[(i - 1, w)] {
                picked.push(i - 1);
                w -= self.weights[i - 1];
            }
        }
        picked.reverse();
        Some(picked)
    }

    fn replay(&self, solution: &KnapsackSelection) -> Option<u64> {
        let distinct = solution.windows(2).all(|p| p[0] < p[1]);
        if !distinct || self.total_weight(solution)? > self.capacity {
            return None;
        }
        Some(solution.iter().map(|&i| self.values[i]).sum())
    }
}
