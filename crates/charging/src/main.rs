//! Prints the time a phone battery takes to charge to its target voltage.
//!
//! ```sh
//! cargo run --bin charge-time
//! ```

use anyhow::{Context, Result};
use charge_solvers::equation::brent::Action;
use charge_time::{ChargeConfig, ChargeEvent, ChargeReport, charge_time};
use uom::si::{electric_potential::volt, frequency::hertz, time::second};

fn main() -> Result<()> {
    let config = ChargeConfig::default();
    print_banner(&config);

    println!("\n=== Iterations ===");
    println!("iter\t t (s)\t\t V - V_target (V)\t step");
    let trace = |event: &ChargeEvent<'_>| -> Option<Action> {
        println!(
            "{}\t {:.6}\t {:.6}\t\t {:?}",
            event.iter,
            event.x(),
            event.residual(),
            event.step
        );
        None
    };

    let report = charge_time(&config, trace).context("could not estimate charging time")?;

    if !report.is_converged() {
        println!(
            "Warning: reached {} iterations without converging.",
            report.iters
        );
    }
    print_report(&report);

    Ok(())
}

fn print_banner(config: &ChargeConfig) {
    let [start, end] = config.bracket;

    println!("=========================================");
    println!(" Phone battery charging time estimate");
    println!("          using Brent's method");
    println!("=========================================");
    println!("\nParameters:");
    println!(
        "- Max voltage (V_max)       : {:.2} V",
        config.max_voltage.get::<volt>()
    );
    println!(
        "- Target voltage (V_target) : {:.2} V",
        config.target_voltage.get::<volt>()
    );
    println!(
        "- Charging rate (k)         : {:.3} s^-1",
        config.rate.get::<hertz>()
    );
    println!(
        "- Initial time bracket      : [{:.1}, {:.1}] s",
        start.get::<second>(),
        end.get::<second>()
    );
    println!("- Tolerance                 : {:.0e}", config.tolerance);
    println!("- Max iterations            : {}", config.max_iters);
}

fn print_report(report: &ChargeReport) {
    println!("\n=== Result ===");
    println!(
        "- Charging time needed      : {:.6} s",
        report.time.get::<second>()
    );
    println!(
        "- Voltage reached           : {:.6} V",
        report.voltage.get::<volt>()
    );
    println!(
        "- Difference from target    : {:.6} V",
        report.deviation.get::<volt>()
    );
    println!("- Iterations                : {}", report.iters);
}
