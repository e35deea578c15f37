//! Classic optimal-substructure solvers.
//!
//! This crate solves five textbook dynamic programs, each by three
//! interchangeable strategies that must agree on the optimum:
//! - **tabulated**: bottom-up fill of the full table,
//! - **compact**: the space-optimized form (rolling rows, a 1-D array, or
//!   patience sorting),
//! - **memoized**: top-down recursion over explicit `Unset` memo slots.
//!
//! Where the optimum has a concrete witness, the full table is backtracked
//! to recover it.
//!
//! ## Core idea
//! 1. Build a problem instance (constructors validate their input).
//! 2. Run it through a [`DpEngine`] with the [`Strategy`] you need.
//! 3. For a witness, call [`DpEngine::run_with_solution`], which always
//!    tabulates and hands the table to the reconstructor.
//!
//! ## Quick start
//! ```
//! use classic_dp::{DpEngine, problems::knapsack::KnapsackProblem};
//!
//! let weights: [usize; 4] = [6, 4, 3, 2];
//! let values: [u64; 4] = [30, 20, 14, 16];
//! let problem = KnapsackProblem::new(&weights, &values, 7).unwrap();
//! let (best, items) = DpEngine::new(problem).run_with_solution();
//! assert_eq!(best, 36);
//! assert_eq!(items, Some(vec![1, 3]));
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains:
//! - 0/1 knapsack
//! - Levenshtein edit distance (with edit scripts and a similarity score)
//! - Longest common subsequence (with decision trace and diff)
//! - Longest increasing subsequence (quadratic and patience sorting)
//! - Coin change (fewest coins, number of combinations, number of orderings)
//!
//! Every solve is single-threaded and owns its tables; the memoized strategy
//! recurses once per index step, so check
//! [`DpProblem::recursion_depth`] before choosing it for large inputs.

pub mod builder;
pub mod engine;
pub mod error;
pub mod problems;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::DpEngineBuilder;
pub use crate::engine::{DpEngine, Strategy};
pub use crate::error::DpError;
pub use crate::traits::{DpProblem, Reconstruct};
