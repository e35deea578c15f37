use crate::engine::{DpEngine, Strategy};
use crate::traits::DpProblem;

pub struct DpEngineBuilder<P: DpProblem> {
    problem: P,
    strategy: Option<Strategy>,
}

impl<P: DpProblem> DpEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            strategy: None,
        }
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn build(self) -> DpEngine<P> {
        match self.strategy {
            Some(s) => DpEngine::with_strategy(self.problem, s),
            None => DpEngine::new(self.problem),
        }
    }
}
