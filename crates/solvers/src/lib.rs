//! Numerical solvers built on the `charge-core` traits.
//!
//! - [`equation`] — root finding for [`EquationProblem`]s
//!
//! [`EquationProblem`]: charge_core::EquationProblem

pub mod equation;
