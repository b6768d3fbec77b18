/// Defines an equation problem to be solved.
///
/// An equation problem maps solver variables to a model input,
/// then computes residuals from the model input and output.
/// Solvers drive those residuals toward zero.
///
/// The const generic `N` is the number of solver variables and residuals.
/// For example, `N = 1` represents a scalar root-finding problem.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}

/// A scalar problem whose residual is the model output itself.
///
/// Pairs with a `Model<Input = f64, Output = f64>` to find `x` where the
/// model returns zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroOutput;

impl EquationProblem<1> for ZeroOutput {
    type Input = f64;
    type Output = f64;
    type Error = std::convert::Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*output])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn zero_output_passes_values_through() {
        let problem = ZeroOutput;

        let input = problem.input(&[2.5]).expect("infallible");
        assert_relative_eq!(input, 2.5);

        let [residual] = problem.residuals(&input, &-0.75).expect("infallible");
        assert_relative_eq!(residual, -0.75);
    }
}
