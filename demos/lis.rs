//! Example: longest increasing subsequence, quadratic table vs patience sorting.
//!
//! Run with:
//! `cargo run --example lis`

use classic_dp::{problems::lis::LisProblem, DpEngine, Strategy};

fn main() {
    let seq = [10, 9, 2, 5, 3, 7, 101, 18];
    let problem = LisProblem::new(&seq);

    let (len, table_witness) = DpEngine::new(problem.clone()).run_with_solution();
    println!("Sequence: {seq:?}");
    println!("LIS length (table): {len}");
    println!("Witness from table: {:?}", table_witness.unwrap_or_default());

    let compact = DpEngine::with_strategy(problem.clone(), Strategy::Compact).run();
    let (patience_len, patience_witness) = problem.patience_with_sequence();
    println!("LIS length (patience): {compact}");
    println!("Witness from patience sorting: {patience_witness:?} (length {patience_len})");
}
