use charge_solvers::equation::brent::{Solution, Status};
use uom::si::f64::{ElectricPotential, Time};

/// Outcome of a charging time estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeReport {
    /// Estimated time to reach the target voltage.
    pub time: Time,

    /// Cell voltage at the estimated time.
    pub voltage: ElectricPotential,

    /// Absolute difference between the reached and target voltages.
    pub deviation: ElectricPotential,

    /// Solver iterations used.
    pub iters: usize,

    /// Whether the solver converged.
    pub status: Status,
}

impl ChargeReport {
    /// Builds a report from the solution at the target voltage.
    pub(crate) fn new(
        solution: Solution<Time, ElectricPotential>,
        target: ElectricPotential,
    ) -> Self {
        let Solution {
            status,
            snapshot,
            iters,
            ..
        } = solution;

        Self {
            time: snapshot.input,
            voltage: snapshot.output,
            deviation: (snapshot.output - target).abs(),
            iters,
            status,
        }
    }

    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
