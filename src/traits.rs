//! Core trait definitions for table-solvable dynamic programs.
//!
//! Each problem family implements [`DpProblem`] for a struct capturing one
//! fixed instance (weights, sequences, denominations). The trait encodes the
//! three interchangeable solving strategies:
//! - bottom-up tabulation into a full table,
//! - a space-optimized form that keeps only what the next step needs,
//! - top-down memoized recursion over a table of [`Memo`](crate::table::Memo) slots.
//!
//! Families whose optimum has a concrete witness (selected items, an edit
//! script, a subsequence, a coin multiset) also implement [`Reconstruct`].
//! Reconstruction always reads the FULL table; compact forms discard the
//! history it needs.

use std::fmt::Debug;

/// A fixed dynamic-programming instance.
///
/// All three strategies must return the same value for every instance.
/// Tables are owned by the call that builds them; nothing is cached on
/// `self` between calls.
pub trait DpProblem {
    /// Optimal scalar value.
    type Value: Copy + PartialEq + Debug;

    /// Completed full table, including any decision trace the family records.
    type Table;

    /// Stable family name, used in logs and probe output.
    fn name(&self) -> &'static str;

    /// Worst-case call depth of [`solve_memoized`](Self::solve_memoized).
    ///
    /// The memoized strategy recurses once per index step, so instances
    /// whose depth exceeds what the thread stack can hold must be solved
    /// bottom-up instead. Nothing checks this at runtime.
    fn recursion_depth(&self) -> usize;

    /// Fill the full table in dependency order without recursion.
    fn fill_table(&self) -> Self::Table;

    /// Read the optimum from a table produced by [`fill_table`](Self::fill_table).
    fn table_value(&self, table: &Self::Table) -> Self::Value;

    /// Space-optimized bottom-up solve. Cannot be reconstructed.
    fn solve_compact(&self) -> Self::Value;

    /// Top-down recursion with memoization.
    fn solve_memoized(&self) -> Self::Value;

    /// Tabulate and return the optimum.
    fn solve_tabulated(&self) -> Self::Value {
        let table = self.fill_table();
        self.table_value(&table)
    }
}

/// Recovery of an optimal solution from a completed full table.
pub trait Reconstruct: DpProblem {
    /// Problem-specific witness of the optimum.
    type Solution;

    /// Backtrack from the terminal cell to a base case.
    ///
    /// Returns `None` only when the instance has no feasible solution
    /// (an unreachable coin amount); every other family always yields one.
    fn reconstruct(&self, table: &Self::Table) -> Option<Self::Solution>;

    /// Evaluate `solution` against this instance.
    ///
    /// Returns `None` if the solution is not feasible here. For a solution
    /// produced by [`reconstruct`](Self::reconstruct) this equals the
    /// tabulated optimum.
    fn replay(&self, solution: &Self::Solution) -> Option<Self::Value>;
}
