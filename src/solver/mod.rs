mod config;
mod core;
mod errors;

pub use self::core::ExpressionSolver;
pub use config::SolverConfig;
pub use errors::SolverError;

#[cfg(test)]
mod tests;
