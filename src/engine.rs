//! Strategy-driven solver engine.
//!
//! [`DpEngine`] owns one problem instance and runs it through a selected
//! [`Strategy`]. It is completely generic over implementations of
//! [`DpProblem`]; reconstruction is available when the problem also
//! implements [`Reconstruct`].

use std::fmt;
use std::str::FromStr;

use crate::error::DpError;
use crate::traits::{DpProblem, Reconstruct};

/// How an engine computes the optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Top-down recursion over memo slots. Depth is bounded by
    /// [`DpProblem::recursion_depth`]; unsuitable for very large inputs.
    Memoized,
    /// Bottom-up fill of the full table.
    #[default]
    Tabulated,
    /// Space-optimized bottom-up form (rolling rows, 1-D arrays, patience sorting).
    Compact,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Memoized, Strategy::Tabulated, Strategy::Compact];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Memoized => "memoized",
            Strategy::Tabulated => "tabulated",
            Strategy::Compact => "compact",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memoized" | "top-down" => Ok(Strategy::Memoized),
            "tabulated" | "table" | "bottom-up" => Ok(Strategy::Tabulated),
            "compact" | "rolling" => Ok(Strategy::Compact),
            _ => Err(DpError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Solver engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use classic_dp::{DpEngine, problems::lcs::LcsProblem};
///
/// let problem = LcsProblem::new(b"abcde", b"ace");
/// let engine = DpEngine::new(problem);
/// let (len, lcs) = engine.run_with_solution();
/// assert_eq!(len, 3);
/// assert_eq!(lcs.as_deref(), Some(&b"ace"[..]));
/// ```
pub struct DpEngine<P: DpProblem> {
    problem: P,
    strategy: Strategy,
}

impl<P: DpProblem> DpEngine<P> {
    /// Create an engine using the default (tabulated) strategy.
    pub fn new(problem: P) -> Self {
        Self::with_strategy(problem, Strategy::default())
    }

    pub fn with_strategy(problem: P, strategy: Strategy) -> Self {
        Self { problem, strategy }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Compute the optimum with the configured strategy.
    pub fn run(&self) -> P::Value {
        self.run_strategy(self.strategy)
    }

    /// Compute the optimum with an explicit strategy, ignoring the configured one.
    pub fn run_strategy(&self, strategy: Strategy) -> P::Value {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("dp_run", problem = self.problem.name(), %strategy);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let value = match strategy {
            Strategy::Memoized => self.problem.solve_memoized(),
            Strategy::Tabulated => self.problem.solve_tabulated(),
            Strategy::Compact => self.problem.solve_compact(),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?value, "solved");

        value
    }

    /// Run every strategy and require identical optima.
    ///
    /// Returns the agreed value, or [`DpError::StrategyMismatch`] naming the
    /// first strategy that disagrees with the tabulated result.
    pub fn cross_check(&self) -> Result<P::Value, DpError> {
        let reference = self.run_strategy(Strategy::Tabulated);
        for strategy in [Strategy::Compact, Strategy::Memoized] {
            let value = self.run_strategy(strategy);
            if value != reference {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    problem = self.problem.name(),
                    %strategy,
                    ?value,
                    ?reference,
                    "strategy mismatch"
                );
                return Err(DpError::StrategyMismatch {
                    problem: self.problem.name(),
                    detail: format!("tabulated={reference:?}, {strategy}={value:?}"),
                });
            }
        }
        Ok(reference)
    }
}

impl<P: Reconstruct> DpEngine<P> {
    /// Fill the full table, read the optimum and backtrack a witness.
    ///
    /// Always tabulates regardless of the configured strategy. The solution
    /// is `None` only when the instance has no feasible solution.
    pub fn run_with_solution(&self) -> (P::Value, Option<P::Solution>) {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("dp_run_with_solution", problem = self.problem.name());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("fill_table");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.problem.fill_table()
        };
        let value = self.problem.table_value(&table);

        let solution = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("reconstruct");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.problem.reconstruct(&table)
        };

        (value, solution)
    }
}
