use thiserror::Error;

use charge_core::{EquationProblem, Model, Snapshot};

/// The result of evaluating an equation problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct input or compute residuals.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of an equation problem.
///
/// This function maps `x` to model input, calls the model, then computes
/// residuals from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or residual computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residuals = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residuals,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use charge_core::{FnModel, ZeroOutput};

    #[derive(Debug, Error)]
    #[error("negative input {0}")]
    struct NegativeInput(f64);

    /// Problem that refuses negative solver variables.
    struct NonNegative;

    impl EquationProblem<1> for NonNegative {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            if x[0] < 0.0 {
                Err(NegativeInput(x[0]))
            } else {
                Ok(x[0])
            }
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
            Ok([*output])
        }
    }

    #[derive(Debug, Error)]
    #[error("model is offline")]
    struct Offline;

    struct OfflineModel;

    impl Model for OfflineModel {
        type Input = f64;
        type Output = f64;
        type Error = Offline;

        fn call(&self, _input: &f64) -> Result<f64, Self::Error> {
            Err(Offline)
        }
    }

    #[test]
    fn captures_input_output_and_residual() {
        let model = FnModel::new(|x: f64| x * x - 2.0);

        let eval = evaluate(&model, &ZeroOutput, [3.0]).expect("infallible");

        assert_relative_eq!(eval.x[0], 3.0);
        assert_relative_eq!(eval.residuals[0], 7.0);
        assert_relative_eq!(eval.snapshot.input, 3.0);
        assert_relative_eq!(eval.snapshot.output, 7.0);
    }

    #[test]
    fn reports_problem_failure() {
        let model = FnModel::new(|x: f64| x);

        let result = evaluate(&model, &NonNegative, [-1.0]);

        assert!(matches!(result, Err(EvalError::Problem(NegativeInput(_)))));
    }

    #[test]
    fn reports_model_failure() {
        let result: Result<_, EvalError<Offline, Infallible>> =
            evaluate(&OfflineModel, &ZeroOutput, [1.0]);

        assert!(matches!(result, Err(EvalError::Model(Offline))));
    }
}
