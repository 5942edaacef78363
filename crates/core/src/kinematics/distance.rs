//! New distance at constant velocity
//!
//! Displacement uses the initial velocity only. Acceleration has no term
//! here (no `½·a·t²`), so this is a constant-velocity estimate.

use crate::core_types::units::{Kilometers, KilometersPerHour, Seconds};
use crate::error::KinematicsError;
use crate::kinematics::input::{ensure_finite, number_field};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Inputs for [`calc_new_distance`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct DistanceParams {
    /// Distance already covered (km)
    pub initial_distance: Kilometers,
    /// Velocity held for the whole interval (km/h)
    pub initial_velocity: KilometersPerHour,
    /// Elapsed time (s)
    pub time: Seconds,
}

impl DistanceParams {
    pub fn new(
        initial_distance: Kilometers,
        initial_velocity: KilometersPerHour,
        time: Seconds,
    ) -> Self {
        Self {
            initial_distance,
            initial_velocity,
            time,
        }
    }

    fn validate(&self) -> Result<(), KinematicsError> {
        ensure_finite("initialDistance", *self.initial_distance)?;
        ensure_finite("initialVelocity", *self.initial_velocity)?;
        ensure_finite("time", *self.time)?;
        Ok(())
    }
}

// Deserialization goes through the same field checks as `TryFrom<&Value>`
impl TryFrom<Value> for DistanceParams {
    type Error = KinematicsError;

    fn try_from(object: Value) -> Result<Self, Self::Error> {
        Self::try_from(&object)
    }
}

impl TryFrom<&Value> for DistanceParams {
    type Error = KinematicsError;

    fn try_from(object: &Value) -> Result<Self, Self::Error> {
        Ok(Self::new(
            Kilometers::new(number_field(object, "initialDistance")?),
            KilometersPerHour::new(number_field(object, "initialVelocity")?),
            Seconds::new(number_field(object, "time")?),
        ))
    }
}

/// Calculate the distance reached after travelling for `time`.
///
/// `d = d₀ + v₀·t`, evaluated in meters and reported in kilometers.
///
/// Only the inputs are validated. Finite inputs whose result overflows `f64`
/// come back as an infinite value, or NaN when two overflowed terms cancel
/// (`inf - inf`).
///
/// # Errors
/// Returns [`KinematicsError::InvalidArgument`] if any input is NaN or infinite.
pub fn calc_new_distance(params: DistanceParams) -> Result<Kilometers, KinematicsError> {
    params.validate()?;

    let velocity = params.initial_velocity.to_mps();
    let new_distance = params.initial_distance.to_meters() + velocity * params.time;
    let result = new_distance.to_kilometers();

    debug!(
        initial_km = *params.initial_distance,
        velocity_kmh = *params.initial_velocity,
        time = *params.time,
        new_km = *result,
        "Computed new distance"
    );

    Ok(result)
}
