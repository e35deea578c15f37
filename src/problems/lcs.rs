//! Longest Common Subsequence (LCS).
//!
//! The cell `(i, j)` holds the LCS length of `a[..i]` and `b[..j]`. Any empty
//! prefix has length 0.
//!
//! Two reconstruction paths are offered: re-inspecting the value table
//! ([`Reconstruct::reconstruct`]) and following an explicit decision trace
//! recorded during the fill ([`LcsProblem::fill_decisions`]). Both apply the
//! same tie rule (skip from `a` when up and left are equal) and therefore
//! return the same subsequence.

use crate::table::{Grid, Memo};
use crate::traits::{DpProblem, Reconstruct};
use crate::utils::is_subsequence;

#[derive(Clone, Debug)]
pub struct LcsProblem<'a, T> {
    a: &'a [T],
    b: &'a [T],
}

/// Which neighbour produced a cell's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LcsStep {
    /// Symbols matched; extends the diagonal.
    Diagonal,
    /// Skips `a[i-1]`.
    #[default]
    Up,
    /// Skips `b[j-1]`.
    Left,
}

/// One line of an LCS-based diff between `a` and `b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffOp<T> {
    Common { a_pos: usize, b_pos: usize, symbol: T },
    Removed { a_pos: usize, symbol: T },
    Added { b_pos: usize, symbol: T },
}

impl<'a, T: Clone + Eq> LcsProblem<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self { a, b }
    }

    /// Fill the value table together with a per-cell decision trace.
    pub fn fill_decisions(&self) -> (Grid<u32>, Grid<LcsStep>) {
        let m = self.a.len();
        let n = self.b.len();
        let mut dp = Grid::new(m + 1, n + 1, 0u32);
        let mut steps = Grid::new(m + 1, n + 1, LcsStep::default());
        for i in 1..=m {
            for j in 1..=n {
                let (v, step) = if self.a[i - 1] == self.b[j - 1] {
                    (dp[(i - 1, j - 1)] + 1, LcsStep::Diagonal)
                } else if dp[(i - 1, j)] >= dp[(i, j - 1)] {
                    (dp[(i - 1, j)], LcsStep::Up)
                } else {
                    (dp[(i, j - 1)], LcsStep::Left)
                };
                dp[(i, j)] = v;
                steps[(i, j)] = step;
            }
        }
        (dp, steps)
    }

    /// Follow a decision trace from `(m, n)` back to an empty prefix.
    pub fn reconstruct_from_decisions(&self, steps: &Grid<LcsStep>) -> Vec<T> {
        let mut i = self.a.len();
        let mut j = self.b.len();
        let mut rev = Vec::new();
        while i > 0 && j > 0 {
            match steps[(i, j)] {
                LcsStep::Diagonal => {
                    rev.push(self.a[i - 1].clone());
                    i -= 1;
                    j -= 1;
                }
                LcsStep::Up => i -= 1,
                LcsStep::Left => j -= 1,
            }
        }
        rev.reverse();
        rev
    }

    /// Line diff derived from a full value table.
    ///
    /// Within a run of changes, removals are listed before additions.
    pub fn diff(&self, table: &Grid<u32>) -> Vec<DiffOp<T>> {
        let (a, b) = (self.a, self.b);
        let mut i = a.len();
        let mut j = b.len();
        let mut rev = Vec::with_capacity(i + j);
        while i > 0 || j > 0 {
            if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
                rev.push(DiffOp::Common {
                    a_pos: i - 1,
                    b_pos: j - 1,
                    symbol: a[i - 1].clone(),
                });
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table[(i, j - 1)] >= table[(i - 1, j)]) {
                rev.push(DiffOp::Added {
                    b_pos: j - 1,
                    symbol: b[j - 1].clone(),
                });
                j -= 1;
            } else {
                rev.push(DiffOp::Removed {
                    a_pos: i - 1,
                    symbol: a[i - 1].clone(),
                });
                i -= 1;
            }
        }
        rev.reverse();
        rev
    }

    fn memo_cell(&self, memo: &mut Grid<Memo<u32>>, i: usize, j: usize) -> u32 {
        if i == 0 || j == 0 {
            return 0;
        }
        if let Memo::Computed(v) = memo[(i, j)] {
            return v;
        }
        let v = if self.a[i - 1] == self.b[j - 1] {
            self.memo_cell(memo, i - 1, j - 1) + 1
        } else {
            let up = self.memo_cell(memo, i - 1, j);
            let left = self.memo_cell(memo, i, j - 1);
            up.max(left)
        };
        memo[(i, j)] = Memo::Computed(v);
        v
    }
}

impl<'a, T: Clone + Eq> DpProblem for LcsProblem<'a, T> {
    type Value = u32;
    type Table = Grid<u32>;

    fn name(&self) -> &'static str {
        "lcs"
    }

    fn recursion_depth(&self) -> usize {
        self.a.len() + self.b.len()
    }

    fn fill_table(&self) -> Self::Table {
        let m = self.a.len();
        let n = self.b.len();
        let mut dp = Grid::new(m + 1, n + 1, 0u32);
        for i in 1..=m {
            for j in 1..=n {
                dp[(i, j)] = if self.a[i - 1] == self.b[j - 1] {
                    dp[(i - 1, j - 1)] + 1
                } else {
                    dp[(i - 1, j)].max(dp[(i, j - 1)])
                };
            }
        }
        dp
    }

    fn table_value(&self, table: &Self::Table) -> u32 {
        table.get(self.a.len(), self.b.len()).copied().unwrap_or(0)
    }

    fn solve_compact(&self) -> u32 {
        let (short, long) = if self.a.len() <= self.b.len() {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        let m = short.len();
        let mut prev = vec![0u32; m + 1];
        let mut curr = vec![0u32; m + 1];

        for cl in long {
            for i in 1..=m {
                curr[i] = if short[i - 1] == *cl {
                    prev[i - 1] + 1
                } else {
                    prev[i].max(curr[i - 1])
                };
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        prev[m]
    }

    fn solve_memoized(&self) -> u32 {
        let m = self.a.len();
        let n = self.b.len();
        let mut memo = Grid::new(m + 1, n + 1, Memo::Unset);
        self.memo_cell(&mut memo, m, n)
    }
}

impl<'a, T: Clone + Eq> Reconstruct for LcsProblem<'a, T> {
    type Solution = Vec<T>;

    fn reconstruct(&self, table: &Self::Table) -> Option<Vec<T>> {
        let mut i = self.a.len();
        let mut j = self.b.len();
        let mut rev = Vec::with_capacity(table.last().copied().unwrap_or(0) as usize);
        while i > 0 && j > 0 {
            if self.a[i - 1] == self.b[j - 1] {
                rev.push(self.a[i - 1].clone());
                i -= 1;
                j -= 1;
            } else if table[(i - 1, j)] >= table[(i, j - 1)] {
                i -= 1;
            } else {
                j -= 1;
            }
        }
        rev.reverse();
        Some(rev)
    }

    fn replay(&self, solution: &Vec<T>) -> Option<u32> {
        (is_subsequence(solution, self.a) && is_subsequence(solution, self.b))
            .then_some(solution.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcs_string(a: &str, b: &str) -> (u32, String) {
        let p = LcsProblem::new(a.as_bytes(), b.as_bytes());
        let table = p.fill_table();
        let seq = p.reconstruct(&table).unwrap_or_default();
        (p.table_value(&table), String::from_utf8(seq).unwrap())
    }

    #[test]
    fn last_row_matches_full_table() {
        for (a, b) in [("", ""), ("A", ""), ("", "A"), ("A", "A"), ("A", "B")] {
            let p = LcsProblem::new(a.as_bytes(), b.as_bytes());
            assert_eq!(p.solve_compact(), p.solve_tabulated(), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn abcde_ace() {
        assert_eq!(lcs_string("abcde", "ace"), (3, "ace".to_string()));
        let p = LcsProblem::new(b"abcde", b"ace");
        assert_eq!(p.solve_compact(), 3);
        assert_eq!(p.solve_memoized(), 3);
    }

    #[test]
    fn reference_pairs() {
        assert_eq!(lcs_string("AGGTAB", "GXTXAYB"), (4, "GTAB".to_string()));
        assert_eq!(lcs_string("ABC", "AC"), (2, "AC".to_string()));
        assert_eq!(lcs_string("ABC", "DEF"), (0, String::new()));
        assert_eq!(lcs_string("", "ABC"), (0, String::new()));
    }

    #[test]
    fn e2e_dna_pair() {
        let s = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
        let t = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";
        let p = LcsProblem::new(s, t);
        assert_eq!(p.solve_tabulated(), 20);
        assert_eq!(p.solve_compact(), 20);
        assert_eq!(p.solve_memoized(), 20);
        let seq = p.reconstruct(&p.fill_table()).unwrap();
        assert_eq!(p.replay(&seq), Some(20));
    }

    #[test]
    fn ties_skip_from_a_first() {
        // "ab" vs "ba": both "a" and "b" are optimal; skipping a's last
        // symbol first leaves "a".
        assert_eq!(lcs_string("ab", "ba"), (1, "a".to_string()));
    }

    #[test]
    fn decision_trace_agrees_with_table_walk() {
        let p = LcsProblem::new(b"AGGTABQQZ", b"GXTXAYBZQ");
        let (dp, steps) = p.fill_decisions();
        assert_eq!(dp, p.fill_table());
        assert_eq!(p.reconstruct_from_decisions(&steps), p.reconstruct(&dp).unwrap());
    }

    #[test]
    fn diff_lists_removals_before_additions() {
        let p = LcsProblem::new(b"abc", b"axc");
        let ops = p.diff(&p.fill_table());
        assert_eq!(
            ops,
            vec![
                DiffOp::Common { a_pos: 0, b_pos: 0, symbol: b'a' },
                DiffOp::Removed { a_pos: 1, symbol: b'b' },
                DiffOp::Added { b_pos: 1, symbol: b'x' },
                DiffOp::Common { a_pos: 2, b_pos: 2, symbol: b'c' },
            ]
        );
    }

    #[test]
    fn replay_rejects_non_common_sequences() {
        let p = LcsProblem::new(b"abcde", b"ace");
        assert_eq!(p.replay(&b"ae".to_vec()), Some(2));
        assert_eq!(p.replay(&b"ea".to_vec()), None);
        assert_eq!(p.replay(&b"b".to_vec()), None);
    }
}
