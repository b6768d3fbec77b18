use crate::equation::Evaluation;

/// How a candidate point was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Inverse quadratic interpolation through `a`, `b`, and the previous `b`.
    InverseQuadratic,

    /// Linear interpolation between the bracket endpoints.
    Secant,

    /// Midpoint of the bracket, used when interpolation is rejected.
    Bisection,
}

/// Iteration event emitted by the Brent solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// How the candidate was chosen.
    pub step: Step,

    /// Search bracket the candidate was drawn from, ordered low to high.
    pub bracket: [f64; 2],

    /// Evaluation at the candidate.
    pub eval: &'a Evaluation<I, O, 1>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the candidate x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x[0]
    }

    /// Returns the residual at the candidate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residuals[0]
    }
}
