//! Brent's method for bracketed scalar root finding.
//!
//! # Algorithm
//!
//! Brent's method keeps a bracket `[a, b]` whose residuals differ in sign,
//! with `b` always holding the smaller residual magnitude. Each iteration
//! proposes a candidate by inverse quadratic interpolation through the
//! bracket endpoints and the previous `b`, falling back to a secant step when
//! those residuals are not distinct. The candidate is rejected in favor of
//! bisection whenever it leaves the interval between `(3a + b) / 4` and `b`,
//! fails to shrink fast enough relative to earlier steps, or when earlier
//! steps were already below tolerance.
//!
//! # Convergence
//!
//! The solver stops with [`Status::Converged`] when either
//! - the bracket width `|b - a|` drops below the tolerance, returning the most
//!   recent candidate (or `b` if no candidate has been evaluated yet), or
//! - the candidate residual magnitude drops below the tolerance.
//!
//! If neither happens within the iteration cap, the last candidate is
//! returned with [`Status::MaxIters`]. This is not an error; the caller
//! decides whether to trust the estimate.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluated candidate, after the residual
//! is known and before the bracket is updated. Endpoint evaluations during
//! setup do not emit events. Observers can return [`Action::StopEarly`] to
//! halt with the just-evaluated candidate.

mod action;
mod config;
mod error;
mod event;
mod point;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Step};
pub use point::Point;
pub use solution::{Solution, Status};

use charge_core::{EquationProblem, FnModel, Model, Observer, ZeroOutput};

/// Finds a root of the equation using Brent's method.
///
/// The bracket endpoints may be given in either order, but their residuals
/// must have strictly opposite signs.
/// See the [module docs](self) for convergence rules and observer events.
///
/// # Errors
///
/// Returns an error if the bracket does not straddle a root, a residual is
/// non-finite, or the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    search::search(model, problem, bracket, config, observer)
}

/// Runs Brent's method without observation.
///
/// # Errors
///
/// Returns an error if the bracket does not straddle a root, a residual is
/// non-finite, or the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Finds a root of a plain scalar function `f`.
///
/// This is a convenience wrapper around [`solve`] that treats the function
/// value as the residual.
///
/// # Errors
///
/// Returns an error if `f(a)` and `f(b)` do not have opposite signs or the
/// function returns a non-finite value.
pub fn find_root<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
    Obs: for<'a> Observer<Event<'a, f64, f64>, Action>,
{
    solve(&FnModel::new(f), &ZeroOutput, bracket, config, observer)
}
