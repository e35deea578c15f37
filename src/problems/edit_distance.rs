//! Levenshtein edit distance with unit costs.
//!
//! The cell `(i, j)` holds the number of single-symbol edits needed to turn
//! `source[..i]` into `target[..j]`. Borders are pure deletions / insertions.
//!
//! Reconstruction re-inspects the table rather than storing decision
//! pointers: each step is O(1) and the full table is already in hand.

use crate::table::{Grid, Memo};
use crate::traits::{DpProblem, Reconstruct};

#[derive(Clone, Debug)]
pub struct EditDistanceProblem<'a, T> {
    source: &'a [T],
    target: &'a [T],
}

/// One step of an edit script, in alignment order.
///
/// Positions index the original `source` and `target`. For an insertion,
/// `source_pos` is the source index the new symbol is placed before.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOp<T> {
    Keep {
        source_pos: usize,
        target_pos: usize,
        symbol: T,
    },
    Replace {
        source_pos: usize,
        target_pos: usize,
        from: T,
        to: T,
    },
    Delete {
        source_pos: usize,
        symbol: T,
    },
    Insert {
        source_pos: usize,
        target_pos: usize,
        symbol: T,
    },
}

impl<T> EditOp<T> {
    /// 0 for `Keep`, 1 for every real edit.
    pub fn cost(&self) -> u32 {
        match self {
            EditOp::Keep { .. } => 0,
            _ => 1,
        }
    }
}

/// Apply an edit script to `source`, producing the edited sequence.
///
/// Returns `None` if the script does not walk `source` left to right or
/// names a symbol that is not at the stated position.
pub fn apply_edits<T: Clone + PartialEq>(source: &[T], ops: &[EditOp<T>]) -> Option<Vec<T>> {
    let mut out = Vec::with_capacity(source.len());
    let mut cursor = 0usize;
    for op in ops {
        match op {
            EditOp::Keep {
                source_pos, symbol, ..
            }
            | EditOp::Delete { source_pos, symbol } => {
                if *source_pos != cursor || source.get(cursor)? != symbol {
                    return None;
                }
                if matches!(op, EditOp::Keep { .. }) {
                    out.push(symbol.clone());
                }
                cursor += 1;
            }
            EditOp::Replace {
                source_pos, from, to, ..
            } => {
                if *source_pos != cursor || source.get(cursor)? != from {
                    return None;
                }
                out.push(to.clone());
                cursor += 1;
            }
            EditOp::Insert {
                source_pos, symbol, ..
            } => {
                if *source_pos != cursor {
                    return None;
                }
                out.push(symbol.clone());
            }
        }
    }
    (cursor == source.len()).then_some(out)
}

impl<'a, T: Clone + Eq> EditDistanceProblem<'a, T> {
    pub fn new(source: &'a [T], target: &'a [T]) -> Self {
        Self { source, target }
    }

    /// Normalized similarity in `[0, 1]`: `1 - distance / max(len)`.
    ///
    /// Two empty sequences are identical (1.0).
    pub fn similarity(&self) -> f64 {
        let longest = self.source.len().max(self.target.len());
        if longest == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.solve_compact()) / longest as f64
    }

    fn memo_cell(&self, memo: &mut Grid<Memo<u32>>, i: usize, j: usize) -> u32 {
        if i == 0 {
            return j as u32;
        }
        if j == 0 {
            return i as u32;
        }
        if let Memo::Computed(v) = memo[(i, j)] {
            return v;
        }
        let d = if self.source[i - 1] == self.target[j - 1] {
            self.memo_cell(memo, i - 1, j - 1)
        } else {
            let delete = self.memo_cell(memo, i - 1, j);
            let insert = self.memo_cell(memo, i, j - 1);
            let replace = self.memo_cell(memo, i - 1, j - 1);
            1 + delete.min(insert).min(replace)
        };
        memo[(i, j)] = Memo::Computed(d);
        d
    }
}

impl<'a, T: Clone + Eq> DpProblem for EditDistanceProblem<'a, T> {
    type Value = u32;
    type Table = Grid<u32>;

    fn name(&self) -> &'static str {
        "edit_distance"
    }

    fn recursion_depth(&self) -> usize {
        self.source.len() + self.target.len()
    }

    fn fill_table(&self) -> Self::Table {
        let m = self.source.len();
        let n = self.target.len();
        let mut dp = Grid::new(m + 1, n + 1, 0u32);
        for i in 0..=m {
            dp[(i, 0)] = i as u32;
        }
        for j in 0..=n {
            dp[(0, j)] = j as u32;
        }
        for i in 1..=m {
            for j in 1..=n {
                dp[(i, j)] = if self.source[i - 1] == self.target[j - 1] {
                    dp[(i - 1, j - 1)]
                } else {
                    1 + dp[(i - 1, j)].min(dp[(i, j - 1)]).min(dp[(i - 1, j - 1)])
                };
            }
        }
        dp
    }

    fn table_value(&self, table: &Self::Table) -> u32 {
        table
            .get(self.source.len(), self.target.len())
            .copied()
            .unwrap_or(0)
    }

    fn solve_compact(&self) -> u32 {
        // Unit costs make the distance symmetric, so roll over the shorter side.
        let (short, long) = if self.source.len() <= self.target.len() {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        };
        let m = short.len();
        let mut prev: Vec<u32> = (0..=m as u32).collect();
        let mut curr = vec![0u32; m + 1];

        for (j, cl) in long.iter().enumerate() {
            curr[0] = j as u32 + 1;
            for i in 1..=m {
                curr[i] = if short[i - 1] == *cl {
                    prev[i - 1]
                } else {
                    1 + prev[i].min(curr[i - 1]).min(prev[i - 1])
                };
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        prev[m]
    }

    fn solve_memoized(&self) -> u32 {
        let m = self.source.len();
        let n = self.target.len();
        let mut memo = Grid::new(m + 1, n + 1, Memo::Unset);
        self.memo_cell(&mut memo, m, n)
    }
}

impl<'a, T: Clone + Eq> Reconstruct for EditDistanceProblem<'a, T> {
    type Solution = Vec<EditOp<T>>;

    fn reconstruct(&self, table: &Self::Table) -> Option<Vec<EditOp<T>>> {
        let (s, t) = (self.source, self.target);
        let mut i = s.len();
        let mut j = t.len();
        let mut rev_ops = Vec::with_capacity(i.max(j));

        while i > 0 || j > 0 {
            let op = if i == 0 {
                EditOp::Insert {
                    source_pos: 0,
                    target_pos: j - 1,
                    symbol: t[j - 1].clone(),
                }
            } else if j == 0 {
                EditOp::Delete {
                    source_pos: i - 1,
                    symbol: s[i - 1].clone(),
                }
            } else if s[i - 1] == t[j - 1] {
                EditOp::Keep {
                    source_pos: i - 1,
                    target_pos: j - 1,
                    symbol: s[i - 1].clone(),
                }
            } else {
                let delete = table[(i - 1, j)];
                let insert = table[(i, j - 1)];
                let replace = table[(i - 1, j - 1)];
                let best = delete.min(insert).min(replace);
                // Tie order: replace, delete, insert.
                if replace == best {
                    EditOp::Replace {
                        source_pos: i - 1,
                        target_pos: j - 1,
                        from: s[i - 1].clone(),
                        to: t[j - 1].clone(),
                    }
                } else if delete == best {
                    EditOp::Delete {
                        source_pos: i - 1,
                        symbol: s[i - 1].clone(),
                    }
                } else {
                    EditOp::Insert {
                        source_pos: i,
                        target_pos: j - 1,
                        symbol: t[j - 1].clone(),
                    }
                }
            };
            match op {
                EditOp::Keep { .. } | EditOp::Replace { .. } => {
                    i -= 1;
                    j -= 1;
                }
                EditOp::Delete { .. } => i -= 1,
                EditOp::Insert { .. } => j -= 1,
            }
            rev_ops.push(op);
        }

        rev_ops.reverse();
        Some(rev_ops)
    }

    fn replay(&self, solution: &Vec<EditOp<T>>) -> Option<u32> {
        let edited = apply_edits(self.source, solution)?;
        (edited == self.target).then(|| solution.iter().map(EditOp::cost).sum())
    }
}
