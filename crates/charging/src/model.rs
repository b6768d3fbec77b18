use std::convert::Infallible;

use charge_core::Model;
use uom::si::{
    f64::{ElectricPotential, Frequency, Time},
    frequency::hertz,
    time::second,
};

/// Exponential charging curve of a battery cell.
///
/// The terminal voltage approaches `max_voltage` as `V(t) = V_max · (1 − e^(−k·t))`,
/// where `k` is the charging `rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargingModel {
    max_voltage: ElectricPotential,
    rate: Frequency,
}

impl ChargingModel {
    /// Creates a charging model with the given asymptotic voltage and rate.
    #[must_use]
    pub fn new(max_voltage: ElectricPotential, rate: Frequency) -> Self {
        Self { max_voltage, rate }
    }
}

impl Model for ChargingModel {
    type Input = Time;
    type Output = ElectricPotential;
    type Error = Infallible;

    fn call(&self, time: &Time) -> Result<ElectricPotential, Self::Error> {
        let exponent = self.rate.get::<hertz>() * time.get::<second>();
        Ok(self.max_voltage * (1.0 - (-exponent).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::electric_potential::volt;

    fn cell() -> ChargingModel {
        ChargingModel::new(
            ElectricPotential::new::<volt>(4.2),
            Frequency::new::<hertz>(0.03),
        )
    }

    #[test]
    fn starts_empty() {
        let voltage = cell().call(&Time::new::<second>(0.0)).expect("infallible");
        assert_relative_eq!(voltage.get::<volt>(), 0.0);
    }

    #[test]
    fn one_time_constant() {
        // After t = 1/k the cell reaches 1 − 1/e of its maximum.
        let voltage = cell()
            .call(&Time::new::<second>(1.0 / 0.03))
            .expect("infallible");
        let expected = 4.2 * (1.0 - (-1.0_f64).exp());
        assert_relative_eq!(voltage.get::<volt>(), expected, epsilon = 1e-12);
    }

    #[test]
    fn approaches_max_voltage() {
        let voltage = cell()
            .call(&Time::new::<second>(1_000.0))
            .expect("infallible");
        assert_relative_eq!(voltage.get::<volt>(), 4.2, epsilon = 1e-9);
    }
}
