use std::convert::Infallible;

use charge_core::EquationProblem;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Time},
    time::second,
};

/// Finds the charging time at which the cell reaches a target voltage.
///
/// The solver variable is time in seconds and the residual is the voltage
/// above target, in volts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetVoltage {
    target: ElectricPotential,
}

impl TargetVoltage {
    /// Creates a problem that drives the cell voltage to `target`.
    #[must_use]
    pub fn new(target: ElectricPotential) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for TargetVoltage {
    type Input = Time;
    type Output = ElectricPotential;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Time, Self::Error> {
        Ok(Time::new::<second>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Time,
        voltage: &ElectricPotential,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(*voltage - self.target).get::<volt>()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn maps_seconds_to_time() {
        let problem = TargetVoltage::new(ElectricPotential::new::<volt>(4.0));
        let time = problem.input(&[90.0]).expect("infallible");
        assert_relative_eq!(time.get::<second>(), 90.0);
    }

    #[test]
    fn residual_is_voltage_above_target() {
        let problem = TargetVoltage::new(ElectricPotential::new::<volt>(4.0));
        let time = Time::new::<second>(0.0);

        let [below] = problem
            .residuals(&time, &ElectricPotential::new::<volt>(3.5))
            .expect("infallible");
        let [above] = problem
            .residuals(&time, &ElectricPotential::new::<volt>(4.1))
            .expect("infallible");

        assert_relative_eq!(below, -0.5);
        assert_relative_eq!(above, 0.1, epsilon = 1e-12);
    }
}
