use std::mem;

use super::{Point, Step};

/// Bracket and step history for Brent's method.
///
/// `a` and `b` bracket the root with `|b.residual| <= |a.residual|`, so `b` is
/// always the current best estimate. `c` is the previous `b` and `d` the value
/// before that, which is unset until the first update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct State {
    a: Point,
    b: Point,
    c: Point,
    d: Option<f64>,
    bisected: bool,
}

impl State {
    /// Creates the initial state from two endpoints with opposite residual signs.
    pub(super) fn new(a: Point, b: Point) -> Self {
        let (a, b) = best_last(a, b);
        Self {
            a,
            b,
            c: a,
            d: None,
            bisected: true,
        }
    }

    /// Returns the current best estimate.
    #[cfg(test)]
    pub(super) fn best(&self) -> Point {
        self.b
    }

    /// Returns the current bracket, ordered low to high.
    pub(super) fn bracket(&self) -> [f64; 2] {
        if self.a.x <= self.b.x {
            [self.a.x, self.b.x]
        } else {
            [self.b.x, self.a.x]
        }
    }

    /// Returns true if the bracket is narrower than `tolerance`.
    pub(super) fn is_bracket_converged(&self, tolerance: f64) -> bool {
        (self.b.x - self.a.x).abs() < tolerance
    }

    /// Picks the next candidate and records whether it came from bisection.
    pub(super) fn next_candidate(&mut self, tolerance: f64) -> (f64, Step) {
        let (s, step) = self.interpolate();

        if self.needs_bisection(s, tolerance) {
            self.bisected = true;
            (0.5 * (self.a.x + self.b.x), Step::Bisection)
        } else {
            self.bisected = false;
            (s, step)
        }
    }

    /// Shifts history and shrinks the bracket around an evaluated candidate.
    pub(super) fn update(&mut self, candidate: Point) {
        self.d = Some(self.c.x);
        self.c = self.b;

        if self.a.has_opposite_sign(&candidate) {
            self.b = candidate;
        } else {
            self.a = candidate;
        }

        if self.a.residual.abs() < self.b.residual.abs() {
            mem::swap(&mut self.a, &mut self.b);
        }
    }

    #[allow(clippy::float_cmp)]
    fn interpolate(&self) -> (f64, Step) {
        let Self { a, b, c, .. } = *self;
        let (fa, fb, fc) = (a.residual, b.residual, c.residual);

        if fa != fc && fb != fc {
            let s = a.x * fb * fc / ((fa - fb) * (fa - fc))
                + b.x * fa * fc / ((fb - fa) * (fb - fc))
                + c.x * fa * fb / ((fc - fa) * (fc - fb));
            (s, Step::InverseQuadratic)
        } else {
            (b.x - fb * (b.x - a.x) / (fb - fa), Step::Secant)
        }
    }

    /// Returns true if an interpolated candidate should be replaced by bisection.
    fn needs_bisection(&self, s: f64, tolerance: f64) -> bool {
        let quarter = 0.25 * (3.0 * self.a.x + self.b.x);
        let (low, high) = if quarter <= self.b.x {
            (quarter, self.b.x)
        } else {
            (self.b.x, quarter)
        };

        // Also catches a NaN candidate.
        if !(low..=high).contains(&s) {
            return true;
        }

        // Size of the step before last: |b - c| after a bisection, |c - d| otherwise.
        let previous = match self.d {
            Some(d) if !self.bisected => (self.c.x - d).abs(),
            _ => (self.b.x - self.c.x).abs(),
        };

        (s - self.b.x).abs() >= 0.5 * previous || previous < tolerance
    }
}

/// Orders two points so the one with the smaller residual magnitude comes last.
fn best_last(a: Point, b: Point) -> (Point, Point) {
    if a.residual.abs() < b.residual.abs() {
        (b, a)
    } else {
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn new_puts_best_estimate_last() {
        let state = State::new(Point::new(0.0, -0.5), Point::new(4.0, 3.0));

        assert_relative_eq!(state.best().x, 0.0);
        assert_eq!(state.bracket(), [0.0, 4.0]);
    }

    #[test]
    fn first_step_uses_secant() {
        // c starts equal to a, so inverse quadratic interpolation is unavailable.
        let mut state = State::new(Point::new(0.0, -1.0), Point::new(2.0, 3.0));
        let (s, step) = state.next_candidate(1e-9);

        assert_eq!(step, Step::Secant);
        assert_relative_eq!(s, 0.5);
    }

    #[test]
    fn bisects_when_candidate_leaves_quarter_interval() {
        // Candidates must lie between (3a + b) / 4 = 0.25 and b = 1.0.
        let state = State::new(Point::new(0.0, -1.0), Point::new(1.0, 1.0));

        assert!(state.needs_bisection(-0.1, 1e-12));
        assert!(state.needs_bisection(0.2, 1e-12));
        assert!(state.needs_bisection(1.1, 1e-12));
        assert!(state.needs_bisection(f64::NAN, 1e-12));
        assert!(!state.needs_bisection(0.9, 1e-12));
    }

    #[test]
    fn quarter_interval_is_ordered_when_a_exceeds_b() {
        // Here (3a + b) / 4 = 0.75 lies above b = 0.0.
        let state = State::new(Point::new(1.0, 1.0), Point::new(0.0, -0.5));
        assert_relative_eq!(state.best().x, 0.0);

        assert!(!state.needs_bisection(0.3, 1e-12));
        assert!(state.needs_bisection(-0.1, 1e-12));
        assert!(state.needs_bisection(0.8, 1e-12));
    }

    #[test]
    fn bisects_when_previous_step_below_tolerance() {
        let mut loose = State::new(Point::new(0.0, -1.0), Point::new(1.0, 0.5));
        let (s, step) = loose.next_candidate(10.0);
        assert_eq!(step, Step::Bisection);
        assert_relative_eq!(s, 0.5);

        let mut tight = State::new(Point::new(0.0, -1.0), Point::new(1.0, 0.5));
        let (s, step) = tight.next_candidate(1e-9);
        assert_eq!(step, Step::Secant);
        assert_relative_eq!(s, 2.0 / 3.0);
    }

    #[test]
    fn update_keeps_sign_change_and_best_last() {
        let mut state = State::new(Point::new(0.0, -4.0), Point::new(3.0, 5.0));
        state.update(Point::new(2.0, 1.0));

        // Root now lies in [0, 2]; 2.0 has the smaller residual.
        assert_eq!(state.bracket(), [0.0, 2.0]);
        assert_relative_eq!(state.best().x, 2.0);
        assert!(state.a.residual * state.b.residual < 0.0);
        assert_relative_eq!(state.c.x, 0.0);
        assert_eq!(state.d, Some(3.0));
    }

    #[test]
    fn update_replaces_same_sign_endpoint() {
        let mut state = State::new(Point::new(0.0, -4.0), Point::new(3.0, 5.0));
        state.update(Point::new(1.0, -2.0));

        assert_eq!(state.bracket(), [1.0, 3.0]);
        assert_relative_eq!(state.best().x, 1.0);
        assert!(state.a.residual * state.b.residual < 0.0);
    }

    #[test]
    fn update_keeps_sign_change_with_tiny_residuals() {
        let mut state = State::new(Point::new(0.0, -2e-200), Point::new(3.0, 4e-200));
        state.update(Point::new(1.0, -1e-200));

        assert_eq!(state.bracket(), [1.0, 3.0]);
        assert_relative_eq!(state.best().x, 1.0);
        assert!(state.a.has_opposite_sign(&state.b));
    }

    #[test]
    fn bracket_convergence_uses_absolute_width() {
        let state = State::new(Point::new(1.0, 1.0), Point::new(1.0 - 1e-7, -1.0));

        assert!(state.is_bracket_converged(1e-6));
        assert!(!state.is_bracket_converged(1e-8));
    }
}
