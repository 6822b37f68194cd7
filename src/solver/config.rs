/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Cache generated expressions per sub-sequence within one search
    pub memoize: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { memoize: true }
    }
}
