use thiserror::Error;

use charge_solvers::equation::brent;

use crate::ConfigError;

/// Errors that can occur while estimating the charging time.
#[derive(Debug, Error)]
pub enum ChargeError {
    #[error("invalid charging config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid solver config: {0}")]
    SolverConfig(#[from] brent::ConfigError),

    #[error("solver failed: {0}")]
    Solver(#[from] brent::Error),
}
