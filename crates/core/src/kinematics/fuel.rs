//! Remaining fuel after a constant-rate burn

use crate::core_types::units::{Kilograms, KilogramsPerSecond, Seconds};
use crate::error::KinematicsError;
use crate::kinematics::input::{ensure_finite, number_field};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Inputs for [`calc_remaining_fuel`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct FuelParams {
    /// Fuel on board at the start (kg)
    pub initial_fuel: Kilograms,
    /// Burn rate (kg/s)
    pub fuel_burn_rate: KilogramsPerSecond,
    /// Burn duration (s)
    pub time: Seconds,
}

impl FuelParams {
    pub fn new(initial_fuel: Kilograms, fuel_burn_rate: KilogramsPerSecond, time: Seconds) -> Self {
        Self {
            initial_fuel,
            fuel_burn_rate,
            time,
        }
    }

    fn validate(&self) -> Result<(), KinematicsError> {
        ensure_finite("initialFuel", *self.initial_fuel)?;
        ensure_finite("fuelBurnRate", *self.fuel_burn_rate)?;
        ensure_finite("time", *self.time)?;
        Ok(())
    }
}

// Deserialization goes through the same field checks as `TryFrom<&Value>`
impl TryFrom<Value> for FuelParams {
    type Error = KinematicsError;

    fn try_from(object: Value) -> Result<Self, Self::Error> {
        Self::try_from(&object)
    }
}

impl TryFrom<&Value> for FuelParams {
    type Error = KinematicsError;

    fn try_from(object: &Value) -> Result<Self, Self::Error> {
        Ok(Self::new(
            Kilograms::new(number_field(object, "initialFuel")?),
            KilogramsPerSecond::new(number_field(object, "fuelBurnRate")?),
            Seconds::new(number_field(object, "time")?),
        ))
    }
}

/// Calculate the fuel left after burning at `fuel_burn_rate` for `time`.
///
/// The result is not clamped. A burn that outlasts the tank returns a
/// negative mass, which callers treat as a depletion failure.
///
/// Only the inputs are validated. Finite inputs whose result overflows `f64`
/// come back as an infinite value, or NaN when two overflowed terms cancel
/// (`inf - inf`).
///
/// # Errors
/// Returns [`KinematicsError::InvalidArgument`] if any input is NaN or infinite.
pub fn calc_remaining_fuel(params: FuelParams) -> Result<Kilograms, KinematicsError> {
    params.validate()?;

    let consumed = params.fuel_burn_rate * params.time;
    let remaining = params.initial_fuel - consumed;

    debug!(
        initial_kg = *params.initial_fuel,
        burn_rate = *params.fuel_burn_rate,
        time = *params.time,
        remaining_kg = *remaining,
        "Computed remaining fuel"
    );
    if remaining.is_depleted() {
        warn!(
            deficit_kg = -*remaining,
            "Burn duration exceeds available fuel"
        );
    }

    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(f: f64, r: f64, t: f64) -> FuelParams {
        FuelParams::new(Kilograms::new(f), KilogramsPerSecond::new(r), Seconds::new(t))
    }

    #[test]
    fn test_one_hour_at_half_kg_per_second() {
        let fuel = calc_remaining_fuel(params(5000.0, 0.5, 3600.0)).unwrap();
        assert_eq!(*fuel, 3200.0);
    }

    #[test]
    fn test_overburn_goes_negative() {
        let fuel = calc_remaining_fuel(params(100.0, 2.0, 60.0)).unwrap();
        assert_eq!(*fuel, -20.0);
        assert!(fuel.is_depleted());
    }

    #[test]
    fn test_exact_burnout_is_zero() {
        let fuel = calc_remaining_fuel(params(1800.0, 0.5, 3600.0)).unwrap();
        assert_eq!(*fuel, 0.0);
        assert!(!fuel.is_depleted());
    }

    #[test]
    fn test_nan_burn_rate_rejected() {
        let err = calc_remaining_fuel(params(1.0, f64::NAN, 1.0)).unwrap_err();
        assert_eq!(err.parameter(), "fuelBurnRate");
    }
}
