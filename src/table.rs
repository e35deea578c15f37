//! Dense tables used by the solvers.
//!
//! A [`Grid`] is allocated once per solve, filled in a fixed traversal order
//! and either discarded or handed to a reconstructor. [`Memo`] marks cells a
//! top-down solver has not reached yet.

use std::ops::{Index, IndexMut};

/// Row-major 2-D table with dimensions fixed at allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Allocate a `rows x cols` table with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked access.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Terminal cell `(rows-1, cols-1)`, the full-problem answer for every
    /// table in this crate.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.cells.last()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols, "cell ({row},{col}) out of bounds");
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols, "cell ({row},{col}) out of bounds");
        &mut self.cells[row * self.cols + col]
    }
}

/// Memo slot for top-down solvers.
///
/// `Unset` is out of band for every value type, so a computed `None`
/// (e.g. an unreachable coin amount) is still distinguishable from a cell
/// that has not been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Memo<T> {
    #[default]
    Unset,
    Computed(T),
}

impl<T: Copy> Memo<T> {
    #[inline]
    pub fn get(self) -> Option<T> {
        match self {
            Memo::Unset => None,
            Memo::Computed(v) => Some(v),
        }
    }
}
