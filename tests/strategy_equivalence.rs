use classic_dp::{
    problems::{
        coin_change::{CoinChangeProblem, CoinWaysProblem},
        edit_distance::EditDistanceProblem,
        knapsack::KnapsackProblem,
        lcs::LcsProblem,
        lis::LisProblem,
    },
    DpEngine, DpProblem, Strategy,
};
use proptest::prelude::*;

fn all_strategies<P: DpProblem>(problem: P) -> Vec<P::Value> {
    let engine = DpEngine::new(problem);
    Strategy::ALL
        .iter()
        .map(|&s| engine.run_strategy(s))
        .collect()
}

fn brute_force_knapsack(items: &[(usize, u64)], capacity: usize) -> u64 {
    let n = items.len();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let (mut w, mut v) = (0usize, 0u64);
        for (i, &(wi, vi)) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                w += wi;
                v += vi;
            }
        }
        if w <= capacity {
            best = best.max(v);
        }
    }
    best
}

fn brute_force_min_coins(coins: &[usize], amount: usize) -> Option<u32> {
    if amount == 0 {
        return Some(0);
    }
    coins
        .iter()
        .filter(|&&c| c <= amount)
        .filter_map(|&c| brute_force_min_coins(coins, amount - c).map(|n| n + 1))
        .min()
}

proptest! {
    #[test]
    fn knapsack_strategies_agree_with_brute_force(
        items in prop::collection::vec((0usize..15, 0u64..50), 0..10),
        capacity in 0usize..40,
    ) {
        let (weights, values): (Vec<usize>, Vec<u64>) = items.iter().copied().unzip();
        let problem = KnapsackProblem::new(&weights, &values, capacity).unwrap();
        let expected = brute_force_knapsack(&items, capacity);
        for v in all_strategies(problem) {
            prop_assert_eq!(v, expected);
        }
    }

    #[test]
    fn edit_distance_strategies_agree(a in "[abc]{0,12}", b in "[abc]{0,12}") {
        let values = all_strategies(EditDistanceProblem::new(a.as_bytes(), b.as_bytes()));
        prop_assert!(values.windows(2).all(|w| w[0] == w[1]));
        let longest = a.len().max(b.len()) as u32;
        prop_assert!(values[0] <= longest);
    }

    #[test]
    fn edit_distance_is_symmetric(a in "[ACGT]{0,10}", b in "[ACGT]{0,10}") {
        let forward = DpEngine::new(EditDistanceProblem::new(a.as_bytes(), b.as_bytes())).run();
        let backward = DpEngine::new(EditDistanceProblem::new(b.as_bytes(), a.as_bytes())).run();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn lcs_strategies_agree(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        let values = all_strategies(LcsProblem::new(a.as_bytes(), b.as_bytes()));
        prop_assert!(values.windows(2).all(|w| w[0] == w[1]));
        prop_assert!(values[0] as usize <= a.len().min(b.len()));
    }

    #[test]
    fn lcs_and_edit_distance_bound_each_other(a in "[ab]{0,10}", b in "[ab]{0,10}") {
        let lcs = DpEngine::new(LcsProblem::new(a.as_bytes(), b.as_bytes())).run() as usize;
        let dist = DpEngine::new(EditDistanceProblem::new(a.as_bytes(), b.as_bytes())).run() as usize;
        // Deleting and inserting around a common subsequence is always a valid script.
        prop_assert!(dist <= a.len() + b.len() - 2 * lcs);
    }

    #[test]
    fn lis_strategies_agree(seq in prop::collection::vec(-20i32..20, 0..30)) {
        let problem = LisProblem::new(&seq);
        let (patience_len, patience_seq) = problem.patience_with_sequence();
        let values = all_strategies(problem);
        prop_assert!(values.iter().all(|&v| v == patience_len));
        prop_assert_eq!(patience_seq.len(), patience_len as usize);
    }

    #[test]
    fn min_coins_strategies_agree_with_brute_force(
        coins in prop::collection::vec(1usize..8, 0..4),
        amount in 0usize..25,
    ) {
        let expected = brute_force_min_coins(&coins, amount);
        let problem = CoinChangeProblem::new(&coins, amount).unwrap();
        for v in all_strategies(problem) {
            prop_assert_eq!(v, expected);
        }
    }

    #[test]
    fn coin_ways_strategies_agree(
        coins in prop::collection::btree_set(1usize..10, 0..5),
        amount in 0usize..40,
    ) {
        let coins: Vec<usize> = coins.into_iter().collect();
        let values = all_strategies(CoinWaysProblem::new(&coins, amount).unwrap());
        prop_assert!(values.windows(2).all(|w| w[0] == w[1]));
    }
}

#[test]
fn cross_check_agrees_on_every_family() {
    let weights: [usize; 3] = [1, 3, 4];
    let values: [u64; 3] = [15, 20, 30];
    let knapsack = KnapsackProblem::new(&weights, &values, 4).unwrap();
    assert_eq!(DpEngine::new(knapsack).cross_check(), Ok(35));

    let edit = EditDistanceProblem::new(b"sunday", b"saturday");
    assert_eq!(DpEngine::new(edit).cross_check(), Ok(3));

    let lcs = LcsProblem::new(b"ABCBDAB", b"BDCABA");
    assert_eq!(DpEngine::new(lcs).cross_check(), Ok(4));

    let seq = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
    assert_eq!(DpEngine::new(LisProblem::new(&seq)).cross_check(), Ok(6));

    let coins = [1, 3, 4];
    let min = CoinChangeProblem::new(&coins, 6).unwrap();
    assert_eq!(DpEngine::new(min).cross_check(), Ok(Some(2)));
    let ways = CoinWaysProblem::new(&coins, 6).unwrap();
    assert_eq!(DpEngine::new(ways).cross_check(), Ok(4));
}
