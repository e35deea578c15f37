//! Problem families.
//!
//! Each module implements [`DpProblem`](crate::traits::DpProblem) for one
//! classic recurrence, and [`Reconstruct`](crate::traits::Reconstruct) where
//! the optimum has a concrete witness:
//! - [`knapsack`]       : 0/1 knapsack, selected items.
//! - [`edit_distance`]  : Levenshtein distance, edit script.
//! - [`lcs`]            : longest common subsequence, the subsequence and a diff.
//! - [`lis`]            : longest strictly increasing subsequence.
//! - [`coin_change`]    : fewest coins (with the coin multiset) and number of ways.

pub mod coin_change;
pub mod edit_distance;
pub mod knapsack;
pub mod lcs;
pub mod lis;
