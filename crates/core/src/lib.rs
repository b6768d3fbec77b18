//! Core traits and types shared by the charge-time solvers and models.
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`EquationProblem`] — adapts solver variables to model inputs and
//!   computes residuals from outputs
//! - [`FnModel`] and [`ZeroOutput`] — wrap a plain `f64 -> f64` function
//!   as a model and problem pair

mod model;
mod observer;
mod problems;

pub use model::{FnModel, Model, Snapshot};
pub use observer::Observer;
pub use problems::{EquationProblem, ZeroOutput};
