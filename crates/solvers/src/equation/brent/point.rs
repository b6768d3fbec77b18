use crate::equation::Evaluation;

/// A point with its evaluated residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The residual at x.
    pub residual: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }

    /// Returns true if the residual magnitude is below `tolerance`.
    #[must_use]
    pub fn is_residual_converged(&self, tolerance: f64) -> bool {
        self.residual.abs() < tolerance
    }

    /// Returns true if the residuals of `self` and `other` are strictly opposite in sign.
    ///
    /// An exact zero on either side is not opposite.
    #[must_use]
    pub fn has_opposite_sign(&self, other: &Point) -> bool {
        self.residual != 0.0
            && other.residual != 0.0
            && self.residual.signum() != other.residual.signum()
    }
}

impl<I, O> From<&Evaluation<I, O, 1>> for Point {
    fn from(eval: &Evaluation<I, O, 1>) -> Self {
        Self::new(eval.x[0], eval.residuals[0])
    }
}
