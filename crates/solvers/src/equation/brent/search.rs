use charge_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

use super::{Action, Config, Error, Event, Point, Solution, Status, state::State};

/// Core Brent iteration shared by the public entry points.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let [left, right] = bracket;
    if let Some(value) = bracket.into_iter().find(|value| !value.is_finite()) {
        return Err(Error::NonFiniteBracket { value });
    }

    let left_eval = evaluate_finite(model, problem, left)?;
    let right_eval = evaluate_finite(model, problem, right)?;
    let left_point = Point::from(&left_eval);
    let right_point = Point::from(&right_eval);

    if !left_point.has_opposite_sign(&right_point) {
        return Err(Error::InvalidBracket {
            left,
            right,
            left_residual: left_point.residual,
            right_residual: right_point.residual,
        });
    }

    let mut state = State::new(left_point, right_point);

    // Stands in for the latest candidate until one has been evaluated.
    let mut latest = if left_point.residual.abs() < right_point.residual.abs() {
        left_eval
    } else {
        right_eval
    };

    let tolerance = config.tolerance();

    for iter in 1..=config.max_iters() {
        if state.is_bracket_converged(tolerance) {
            return Ok(Solution::from_eval(latest, Status::Converged, iter));
        }

        let bracket = state.bracket();
        let (x, step) = state.next_candidate(tolerance);
        let eval = evaluate_finite(model, problem, x)?;
        let point = Point::from(&eval);

        log::debug!(
            "brent iter {iter}: {step:?} step to x = {x}, residual = {}",
            point.residual
        );

        let event = Event {
            iter,
            step,
            bracket,
            eval: &eval,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
                }
            }
        }

        state.update(point);

        if point.is_residual_converged(tolerance) {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        latest = eval;
    }

    log::warn!(
        "brent reached {} iterations without converging; last estimate x = {}",
        config.max_iters(),
        latest.x[0]
    );

    Ok(Solution::from_eval(
        latest,
        Status::MaxIters,
        config.max_iters(),
    ))
}

/// Evaluates the problem at `x`, rejecting non-finite residuals.
fn evaluate_finite<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [x])?;

    let residual = eval.residuals[0];
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }

    Ok(eval)
}
