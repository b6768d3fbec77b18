use thiserror::Error;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Frequency, Time},
    frequency::hertz,
    time::second,
};

/// Charging parameters and solver limits.
///
/// The default describes a phone cell charging toward 4.2 V at 0.03 s⁻¹,
/// searched for the 4.0 V crossing between 30 s and 120 s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeConfig {
    /// Voltage the cell approaches as charging time grows.
    pub max_voltage: ElectricPotential,

    /// Voltage whose crossing time is sought.
    pub target_voltage: ElectricPotential,

    /// Charging rate constant `k`.
    pub rate: Frequency,

    /// Time bracket expected to contain the crossing.
    pub bracket: [Time; 2],

    /// Tolerance on both the bracket width (seconds) and the residual (volts).
    pub tolerance: f64,

    /// Maximum number of solver iterations.
    pub max_iters: usize,
}

/// Errors that can occur when validating a charging config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_voltage must be finite and positive")]
    MaxVoltage,

    #[error("target_voltage must lie strictly between zero and max_voltage")]
    TargetVoltage,

    #[error("rate must be finite and positive")]
    Rate,

    #[error("bracket endpoints must be finite")]
    Bracket,
}

impl Default for ChargeConfig {
    fn default() -> Self {
        Self {
            max_voltage: ElectricPotential::new::<volt>(4.2),
            target_voltage: ElectricPotential::new::<volt>(4.0),
            rate: Frequency::new::<hertz>(0.03),
            bracket: [Time::new::<second>(30.0), Time::new::<second>(120.0)],
            tolerance: 1e-5,
            max_iters: 50,
        }
    }
}

impl ChargeConfig {
    /// Validates the charging parameters.
    ///
    /// Solver limits are validated separately when the solver config is built.
    ///
    /// # Errors
    ///
    /// Returns an error if a voltage or the rate is out of range, or if a
    /// bracket endpoint is not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_voltage = self.max_voltage.get::<volt>();
        if !max_voltage.is_finite() || max_voltage <= 0.0 {
            return Err(ConfigError::MaxVoltage);
        }

        let target_voltage = self.target_voltage.get::<volt>();
        if !(target_voltage > 0.0 && target_voltage < max_voltage) {
            return Err(ConfigError::TargetVoltage);
        }

        let rate = self.rate.get::<hertz>();
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::Rate);
        }

        if !self.bracket.iter().all(|t| t.get::<second>().is_finite()) {
            return Err(ConfigError::Bracket);
        }

        Ok(())
    }
}
