//! Error type shared by every solver family.
//!
//! Invalid instances are rejected by the problem constructors before any
//! table is allocated. An unreachable coin amount is *not* an error: it is a
//! legitimate optimum reported as `None`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError {
    /// Knapsack weights and values must describe the same items.
    #[error("weights and values differ in length: {weights} weights, {values} values")]
    MismatchedLengths { weights: usize, values: usize },

    /// Coin denominations must be positive.
    #[error("coin denomination at index {index} is zero")]
    ZeroDenomination { index: usize },

    /// Two solving strategies returned different optima for one instance.
    #[error("strategies disagree for {problem}: {detail}")]
    StrategyMismatch {
        problem: &'static str,
        detail: String,
    },

    #[error("unknown strategy '{0}' (expected memoized, tabulated or compact)")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::DpError;

    #[test]
    fn messages_name_the_offending_input() {
        let err = DpError::MismatchedLengths {
            weights: 3,
            values: 2,
        };
        assert_eq!(
            err.to_string(),
            "weights and values differ in length: 3 weights, 2 values"
        );
        assert_eq!(
            DpError::ZeroDenomination { index: 1 }.to_string(),
            "coin denomination at index 1 is zero"
        );
    }
}
