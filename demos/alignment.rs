//! Example: edit scripts and LCS diffs between two strings.
//!
//! Run with:
//! `cargo run --example alignment [-- <source> <target>]`

use classic_dp::{
    problems::{
        edit_distance::{EditDistanceProblem, EditOp},
        lcs::{DiffOp, LcsProblem},
    },
    DpEngine, DpProblem,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let source = args.next().unwrap_or_else(|| "kitten".to_string());
    let target = args.next().unwrap_or_else(|| "sitting".to_string());
    let s: Vec<char> = source.chars().collect();
    let t: Vec<char> = target.chars().collect();

    let edit = EditDistanceProblem::new(&s, &t);
    println!("similarity({source:?}, {target:?}) = {:.3}", edit.similarity());
    let (distance, script) = DpEngine::new(edit).run_with_solution();
    println!("Edit distance: {distance}");
    for op in script.unwrap_or_default() {
        match op {
            EditOp::Keep { .. } => {}
            EditOp::Replace { source_pos, from, to, .. } => {
                println!("  replace {from:?} at {source_pos} with {to:?}")
            }
            EditOp::Delete { source_pos, symbol } => {
                println!("  delete {symbol:?} at {source_pos}")
            }
            EditOp::Insert { source_pos, symbol, .. } => {
                println!("  insert {symbol:?} before {source_pos}")
            }
        }
    }

    let lcs = LcsProblem::new(&s, &t);
    let (len, common) = DpEngine::new(lcs.clone()).run_with_solution();
    let common: String = common.unwrap_or_default().into_iter().collect();
    println!("LCS length: {len}");
    println!("LCS: {common}");

    let diff = lcs.diff(&lcs.fill_table());
    let rendered: String = diff
        .iter()
        .map(|op| match op {
            DiffOp::Common { symbol, .. } => format!("{symbol}"),
            DiffOp::Removed { symbol, .. } => format!("[-{symbol}]"),
            DiffOp::Added { symbol, .. } => format!("{{+{symbol}}}"),
        })
        .collect();
    println!("Diff: {rendered}");
}
