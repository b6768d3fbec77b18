//! Battery charging time estimation.
//!
//! A cell charging from empty follows `V(t) = V_max · (1 − e^(−k·t))`.
//! [`charge_time`] finds the time at which `V(t)` reaches a target voltage by
//! running Brent's method on `V(t) − V_target` over a time bracket.

mod config;
mod error;
mod model;
mod problem;
mod report;

pub use config::{ChargeConfig, ConfigError};
pub use error::ChargeError;
pub use model::ChargingModel;
pub use problem::TargetVoltage;
pub use report::ChargeReport;

use charge_core::Observer;
use charge_solvers::equation::brent;
use uom::si::{
    f64::{ElectricPotential, Time},
    time::second,
};

/// Iteration event emitted while solving for the charging time.
pub type ChargeEvent<'a> = brent::Event<'a, Time, ElectricPotential>;

/// Finds the time at which the charging voltage reaches the configured target.
///
/// The observer receives one [`ChargeEvent`] per Brent iteration and may stop
/// the solve early with [`brent::Action::StopEarly`].
///
/// # Errors
///
/// Returns an error if the config is invalid or the time bracket does not
/// straddle the target voltage.
pub fn charge_time<Obs>(
    config: &ChargeConfig,
    observer: Obs,
) -> Result<ChargeReport, ChargeError>
where
    Obs: for<'a> Observer<ChargeEvent<'a>, brent::Action>,
{
    config.validate()?;
    let solver_config = brent::Config::new(config.max_iters, config.tolerance)?;

    let model = ChargingModel::new(config.max_voltage, config.rate);
    let problem = TargetVoltage::new(config.target_voltage);
    let bracket = config.bracket.map(|time| time.get::<second>());

    let solution = brent::solve(&model, &problem, bracket, &solver_config, observer)?;

    Ok(ChargeReport::new(solution, config.target_voltage))
}
