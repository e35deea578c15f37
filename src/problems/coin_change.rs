//! Coin change over unlimited coins of each denomination.
//!
//! Two formulations share the instance shape `(coins, amount)`:
//! - [`CoinChangeProblem`]: fewest coins summing to `amount`. Unreachable
//!   amounts are `None`, never a numeric sentinel.
//! - [`CoinWaysProblem`]: number of coin multisets summing to `amount`.
//!
//! Way counts grow combinatorially and are held in `u64`. With the usual
//! small denominations (`1, 2, 5, 10, 25, 50`) every amount up to several
//! tens of thousands fits; beyond that callers must cap the amount, since
//! overflow is not detected. [`CoinWaysProblem::count_permutations`] grows
//! much faster: with denominations 1 and 2 alone it overflows `u64` just
//! past an amount of 90.

use crate::error::DpError;
use crate::table::{Grid, Memo};
use crate::traits::{DpProblem, Reconstruct};

fn validate(coins: &[usize]) -> Result<(), DpError> {
    match coins.iter().position(|&c| c == 0) {
        Some(index) => Err(DpError::ZeroDenomination { index }),
        None => Ok(()),
    }
}

#[derive(Clone, Debug)]
pub struct CoinChangeProblem<'a> {
    coins: &'a [usize],
    amount: usize,
}

/// Fewest-coins table with the decision trace used for reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinTable {
    /// `counts[a]`: fewest coins summing to `a`, `None` if unreachable.
    pub counts: Vec<Option<u32>>,
    /// `last_coin[a]`: denomination that produced `counts[a]`.
    pub last_coin: Vec<Option<usize>>,
}

impl<'a> CoinChangeProblem<'a> {
    pub fn new(coins: &'a [usize], amount: usize) -> Result<Self, DpError> {
        validate(coins)?;
        Ok(Self { coins, amount })
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    /// Best count for `a` given the already-final counts of smaller amounts.
    ///
    /// Returns the count and the coin that achieved it. Coins are scanned in
    /// the given order and only a strict improvement replaces the incumbent.
    fn best_step(&self, a: usize, counts: impl Fn(usize) -> Option<u32>) -> Option<(u32, usize)> {
        let mut best: Option<(u32, usize)> = None;
        for &coin in self.coins {
            if coin > a {
                continue;
            }
            if let Some(c) = counts(a - coin) {
                if best.map_or(true, |(b, _)| c + 1 < b) {
                    best = Some((c + 1, coin));
                }
            }
        }
        best
    }

    fn memo_amount(&self, memo: &mut [Memo<Option<u32>>], a: usize) -> Option<u32> {
        if a == 0 {
            return Some(0);
        }
        if let Memo::Computed(v) = memo[a] {
            return v;
        }
        let mut best: Option<u32> = None;
        for &coin in self.coins {
            if coin <= a {
                if let Some(c) = self.memo_amount(memo, a - coin) {
                    best = Some(best.map_or(c + 1, |b| b.min(c + 1)));
                }
            }
        }
        memo[a] = Memo::Computed(best);
        best
    }
}

impl<'a> DpProblem for CoinChangeProblem<'a> {
    type Value = Option<u32>;
    type Table = CoinTable;

    fn name(&self) -> &'static str {
        "coin_change_min"
    }

    fn recursion_depth(&self) -> usize {
        self.coins
            .iter()
            .min()
            .map_or(0, |&smallest| self.amount / smallest)
    }

    fn fill_table(&self) -> CoinTable {
        let mut counts = vec![None; self.amount + 1];
        let mut last_coin = vec![None; self.amount + 1];
        counts[0] = Some(0);
        for a in 1..=self.amount {
            if let Some((c, coin)) = self.best_step(a, |x| counts[x]) {
                counts[a] = Some(c);
                last_coin[a] = Some(coin);
            }
        }
        CoinTable { counts, last_coin }
    }

    fn table_value(&self, table: &CoinTable) -> Option<u32> {
        table.counts.get(self.amount).copied().flatten()
    }

    fn solve_compact(&self) -> Option<u32> {
        let mut counts = vec![None; self.amount + 1];
        counts[0] = Some(0);
        for a in 1..=self.amount {
            counts[a] = self.best_step(a, |x| counts[x]).map(|(c, _)| c);
        }
        counts[self.amount]
    }

    fn solve_memoized(&self) -> Option<u32> {
        let mut memo = vec![Memo::Unset; self.amount + 1];
        self.memo_amount(&mut memo, self.amount)
    }
}

impl<'a> Reconstruct for CoinChangeProblem<'a> {
    /// Coins used, ascending.
    type Solution = Vec<usize>;

    fn reconstruct(&self, table: &CoinTable) -> Option<Vec<usize>> {
        self.table_value(table)?;
        let mut used = Vec::new();
        let mut remaining = self.amount;
        while remaining > 0 {
            let coin = table.last_coin[remaining]?;
            used.push(coin);
            remaining -= coin;
        }
        used.sort_unstable();
        Some(used)
    }

    fn replay(&self, solution: &Vec<usize>) -> Option<Option<u32>> {
        let known = solution.iter().all(|c| self.coins.contains(c));
        let total: usize = solution.iter().sum();
        (known && total == self.amount).then_some(Some(solution.len() as u32))
    }
}

#[derive(Clone, Debug)]
pub struct CoinWaysProblem<'a> {
    coins: &'a [usize],
    amount: usize,
}

impl<'a> CoinWaysProblem<'a> {
    pub fn new(coins: &'a [usize], amount: usize) -> Result<Self, DpError> {
        validate(coins)?;
        Ok(Self { coins, amount })
    }

    /// Number of ordered coin sequences summing to `amount`.
    ///
    /// Amounts run in the outer loop, so `1+2` and `2+1` count separately.
    /// Never smaller than the combination count.
    pub fn count_permutations(&self) -> u64 {
        let mut dp = vec![0u64; self.amount + 1];
        dp[0] = 1;
        for a in 1..=self.amount {
            for &coin in self.coins {
                if coin <= a {
                    dp[a] += dp[a - coin];
                }
            }
        }
        dp[self.amount]
    }

    fn memo_cell(&self, memo: &mut Grid<Memo<u64>>, i: usize, a: usize) -> u64 {
        if a == 0 {
            return 1;
        }
        if i == 0 {
            return 0;
        }
        if let Memo::Computed(v) = memo[(i, a)] {
            return v;
        }
        let coin = self.coins[i - 1];
        let mut ways = self.memo_cell(memo, i - 1, a);
        if coin <= a {
            ways += self.memo_cell(memo, i, a - coin);
        }
        memo[(i, a)] = Memo::Computed(ways);
        ways
    }
}

impl<'a> DpProblem for CoinWaysProblem<'a> {
    type Value = u64;
    /// `(coin prefix, amount)` table: row `i` counts multisets over the first `i` coins.
    type Table = Grid<u64>;

    fn name(&self) -> &'static str {
        "coin_change_ways"
    }

    fn recursion_depth(&self) -> usize {
        self.coins.len() + self.amount
    }

    fn fill_table(&self) -> Grid<u64> {
        let k = self.coins.len();
        let mut ways = Grid::new(k + 1, self.amount + 1, 0u64);
        ways[(0, 0)] = 1;
        for i in 1..=k {
            let coin = self.coins[i - 1];
            for a in 0..=self.amount {
                let mut w = ways[(i - 1, a)];
                if coin <= a {
                    w += ways[(i, a - coin)];
                }
                ways[(i, a)] = w;
            }
        }
        ways
    }

    fn table_value(&self, table: &Grid<u64>) -> u64 {
        table.last().copied().unwrap_or(0)
    }

    fn solve_compact(&self) -> u64 {
        let mut dp = vec![0u64; self.amount + 1];
        dp[0] = 1;
        // Coins outer, amounts inner: each multiset is counted once.
        for &coin in self.coins {
            for a in coin..=self.amount {
                dp[a] += dp[a - coin];
            }
        }
        dp[self.amount]
    }

    fn solve_memoized(&self) -> u64 {
        let k = self.coins.len();
        let mut memo = Grid::new(k + 1, self.amount + 1, Memo::Unset);
        self.memo_cell(&mut memo, k, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_coins(coins: &[usize], amount: usize) -> [Option<u32>; 3] {
        let p = CoinChangeProblem::new(coins, amount).unwrap();
        [p.solve_tabulated(), p.solve_compact(), p.solve_memoized()]
    }

    fn ways(coins: &[usize], amount: usize) -> [u64; 3] {
        let p = CoinWaysProblem::new(coins, amount).unwrap();
        [p.solve_tabulated(), p.solve_compact(), p.solve_memoized()]
    }

    #[test]
    fn eleven_from_one_two_five() {
        assert_eq!(min_coins(&[1, 2, 5], 11), [Some(3); 3]);
        let p = CoinChangeProblem::new(&[1, 2, 5], 11).unwrap();
        let used = p.reconstruct(&p.fill_table()).unwrap();
        assert_eq!(used, vec![1, 5, 5]);
        assert_eq!(p.replay(&used), Some(Some(3)));
    }

    #[test]
    fn first_coin_reaching_the_minimum_is_recorded() {
        // 2+4 and 3+3 both use two coins; only a strict improvement
        // replaces the coin recorded first.
        for coins in [[2, 3, 4], [4, 3, 2]] {
            let p = CoinChangeProblem::new(&coins, 6).unwrap();
            let table = p.fill_table();
            assert_eq!(p.table_value(&table), Some(2));
            assert_eq!(p.reconstruct(&table), Some(vec![2, 4]));
        }
    }

    #[test]
    fn unreachable_amount_is_none() {
        assert_eq!(min_coins(&[2], 3), [None; 3]);
        let p = CoinChangeProblem::new(&[2], 3).unwrap();
        assert_eq!(p.reconstruct(&p.fill_table()), None);
        assert_eq!(min_coins(&[], 4), [None; 3]);
    }

    #[test]
    fn zero_amount() {
        assert_eq!(min_coins(&[1], 0), [Some(0); 3]);
        assert_eq!(ways(&[1, 2, 5], 0), [1; 3]);
        assert_eq!(ways(&[], 0), [1; 3]);
        let p = CoinChangeProblem::new(&[3], 0).unwrap();
        assert_eq!(p.reconstruct(&p.fill_table()), Some(vec![]));
    }

    #[test]
    fn unsorted_denominations() {
        assert_eq!(min_coins(&[2, 5, 10, 1], 27), [Some(4); 3]);
    }

    #[test]
    fn zero_denomination_rejected() {
        assert_eq!(
            CoinChangeProblem::new(&[1, 0], 5).unwrap_err(),
            DpError::ZeroDenomination { index: 1 }
        );
        assert!(CoinWaysProblem::new(&[0], 5).is_err());
    }

    #[test]
    fn counting_ways() {
        assert_eq!(ways(&[1, 2, 5], 5), [4; 3]);
        assert_eq!(ways(&[2, 3, 5], 10), [4; 3]);
        assert_eq!(ways(&[10], 10), [1; 3]);
        assert_eq!(ways(&[2, 4], 8), [3; 3]);
        assert_eq!(ways(&[], 5), [0; 3]);
    }

    #[test]
    fn permutations_count_orderings() {
        let p = CoinWaysProblem::new(&[1, 2], 3).unwrap();
        // {1,1,1} {1,2}  vs  1+1+1, 1+2, 2+1
        assert_eq!(p.solve_compact(), 2);
        assert_eq!(p.count_permutations(), 3);
    }

    #[test]
    fn replay_checks_denominations_and_total() {
        let p = CoinChangeProblem::new(&[1, 2, 5], 11).unwrap();
        assert_eq!(p.replay(&vec![5, 5, 1]), Some(Some(3)));
        assert_eq!(p.replay(&vec![5, 5]), None);
        assert_eq!(p.replay(&vec![10, 1]), None);
    }
}
