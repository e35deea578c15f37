//! Example: fewest coins, and how many ways to pay.
//!
//! Run with:
//! `cargo run --example coin_change [-- <amount>]`

use classic_dp::{
    problems::coin_change::{CoinChangeProblem, CoinWaysProblem},
    DpEngine, DpError,
};

fn main() -> Result<(), DpError> {
    let coins = [1, 2, 5];
    let amount = std::env::args()
        .nth(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(11);

    let (count, used) = DpEngine::new(CoinChangeProblem::new(&coins, amount)?).run_with_solution();
    match (count, used) {
        (Some(n), Some(used)) => println!("{amount} = {used:?} ({n} coins)"),
        _ => println!("{amount} cannot be paid with {coins:?}"),
    }

    let ways = CoinWaysProblem::new(&coins, amount)?;
    let orderings = ways.count_permutations();
    let combos = DpEngine::new(ways).run();
    println!("Combinations: {combos}");
    println!("Ordered sequences: {orderings}");

    let unreachable = CoinChangeProblem::new(&[2], 3)?;
    println!("3 from [2]: {:?}", DpEngine::new(unreachable).run());
    Ok(())
}
