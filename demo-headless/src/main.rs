use clap::Parser;
use flight_calc_core::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, MetersPerSecondSquared,
    ReportLine, Scenario, Seconds,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Flight kinematics calculator with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "flight-calc")]
#[command(about = "Velocity, distance and remaining fuel for a single flight leg", long_about = None)]
struct Args {
    /// Scenario file (JSON, camelCase fields) to start from instead of the built-in scenario
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Initial velocity in km/h
    #[arg(long, allow_hyphen_values = true)]
    initial_velocity: Option<f64>,

    /// Acceleration in m/s²
    #[arg(short, long, allow_hyphen_values = true)]
    acceleration: Option<f64>,

    /// Elapsed time in seconds
    #[arg(short, long, allow_hyphen_values = true)]
    time: Option<f64>,

    /// Initial distance in km
    #[arg(long, allow_hyphen_values = true)]
    initial_distance: Option<f64>,

    /// Initial fuel in kg
    #[arg(long, allow_hyphen_values = true)]
    initial_fuel: Option<f64>,

    /// Fuel burn rate in kg/s
    #[arg(long, allow_hyphen_values = true)]
    fuel_burn_rate: Option<f64>,

    /// Evaluate the three calculations concurrently
    #[arg(short, long)]
    parallel: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let scenario = build_scenario(args)?;
    debug!(?scenario, parallel = args.parallel, "Scenario ready");

    let print = |line: ReportLine| println!("{line}");
    if args.parallel {
        scenario.evaluate_parallel().report(print)?;
    } else {
        scenario.run(print)?;
    }

    Ok(())
}

/// Start from the scenario file (or the built-in scenario) and apply any
/// per-field overrides given on the command line.
fn build_scenario(args: &Args) -> Result<Scenario, Box<dyn Error>> {
    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };

    if let Some(v) = args.initial_velocity {
        scenario.initial_velocity = KilometersPerHour::new(v);
    }
    if let Some(a) = args.acceleration {
        scenario.acceleration = MetersPerSecondSquared::new(a);
    }
    if let Some(t) = args.time {
        scenario.time = Seconds::new(t);
    }
    if let Some(d) = args.initial_distance {
        scenario.initial_distance = Kilometers::new(d);
    }
    if let Some(f) = args.initial_fuel {
        scenario.initial_fuel = Kilograms::new(f);
    }
    if let Some(r) = args.fuel_burn_rate {
        scenario.fuel_burn_rate = KilogramsPerSecond::new(r);
    }

    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_uses_reference_scenario() {
        let args = Args::try_parse_from(["flight-calc"]).unwrap();
        assert_eq!(build_scenario(&args).unwrap(), Scenario::default());
    }

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let args = Args::try_parse_from([
            "flight-calc",
            "--time",
            "60",
            "--acceleration",
            "-9.5",
            "--fuel-burn-rate",
            "2",
        ])
        .unwrap();
        let scenario = build_scenario(&args).unwrap();

        assert_eq!(*scenario.time, 60.0);
        assert_eq!(*scenario.acceleration, -9.5);
        assert_eq!(*scenario.fuel_burn_rate, 2.0);
        assert_eq!(scenario.initial_velocity, Scenario::default().initial_velocity);
    }

    #[test]
    fn test_missing_scenario_file_is_an_error() {
        let args =
            Args::try_parse_from(["flight-calc", "--scenario", "/nonexistent/scenario.json"])
                .unwrap();
        assert!(build_scenario(&args).is_err());
    }
}
