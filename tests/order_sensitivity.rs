use classic_dp::{problems::coin_change::CoinWaysProblem, DpEngine};
use proptest::prelude::*;

fn combinations_and_permutations(coins: &[usize], amount: usize) -> (u64, u64) {
    let problem = CoinWaysProblem::new(coins, amount).unwrap();
    let perms = problem.count_permutations();
    (DpEngine::new(problem).run(), perms)
}

#[test]
fn reference_orderings() {
    // {1,1,1,1} {1,1,2} {2,2}  vs  1111 112 121 211 22
    assert_eq!(combinations_and_permutations(&[1, 2], 4), (3, 5));
    // 5, 2+2+1, 2+1+1+1, 1*5
    assert_eq!(combinations_and_permutations(&[1, 2, 5], 5), (4, 9));
}

#[test]
fn single_denomination_has_no_reorderings() {
    for amount in [0, 3, 9, 12] {
        let (combos, perms) = combinations_and_permutations(&[3], amount);
        assert_eq!(combos, perms);
    }
}

#[test]
fn unreachable_amount_counts_zero_both_ways() {
    assert_eq!(combinations_and_permutations(&[2, 4], 7), (0, 0));
}

proptest! {
    #[test]
    fn orderings_never_fewer_than_multisets(
        coins in prop::collection::btree_set(1usize..12, 0..5),
        amount in 0usize..50,
    ) {
        let coins: Vec<usize> = coins.into_iter().collect();
        let (combos, perms) = combinations_and_permutations(&coins, amount);
        prop_assert!(perms >= combos);
    }

    #[test]
    fn two_distinct_coins_summed_are_reorderable(a in 1usize..15, b in 1usize..15) {
        prop_assume!(a != b);
        // a+b has at least the multiset {a, b}, which has two orderings.
        let (combos, perms) = combinations_and_permutations(&[a, b], a + b);
        prop_assert!(perms > combos);
    }

    #[test]
    fn denomination_order_does_not_change_combinations(
        coins in prop::collection::vec(1usize..10, 0..5),
        amount in 0usize..40,
    ) {
        let mut reversed = coins.clone();
        reversed.reverse();
        let forward = combinations_and_permutations(&coins, amount);
        let backward = combinations_and_permutations(&reversed, amount);
        prop_assert_eq!(forward, backward);
    }
}
