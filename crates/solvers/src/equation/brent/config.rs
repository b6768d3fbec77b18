use thiserror::Error;

/// Configuration for the Brent solver.
///
/// A single tolerance governs both stopping rules: bracket width and
/// residual magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a Brent solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with a validated iteration cap and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tolerance` is not a finite
    /// positive number.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance for bracket width and residual convergence.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
