//! Example: 0/1 knapsack with item reconstruction.
//!
//! Run with:
//! `cargo run --example knapsack`

use classic_dp::{problems::knapsack::KnapsackProblem, DpEngine, Strategy};

fn main() {
    let weights: [usize; 4] = [6, 4, 3, 2];
    let values: [u64; 4] = [30, 20, 14, 16];
    let capacity = 7;

    let problem = match KnapsackProblem::new(&weights, &values, capacity) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("invalid instance: {err}");
            std::process::exit(1);
        }
    };

    for strategy in Strategy::ALL {
        let engine = DpEngine::with_strategy(problem.clone(), strategy);
        println!("{strategy:>9}: best value {}", engine.run());
    }

    let (best, items) = DpEngine::new(problem).run_with_solution();
    let items = items.unwrap_or_default();
    println!("Best value: {best}");
    for &i in &items {
        println!("  take item {i} (weight {}, value {})", weights[i], values[i]);
    }
    let used: usize = items.iter().map(|&i| weights[i]).sum();
    println!("Capacity used: {used}/{capacity}");
}
