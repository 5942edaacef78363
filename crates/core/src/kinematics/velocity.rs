//! New velocity after constant acceleration
//!
//! The input velocity is in km/h while the acceleration is in m/s², so the
//! velocity is converted to m/s, advanced by `a × t`, and converted back.

use crate::core_types::units::{KilometersPerHour, MetersPerSecondSquared, Seconds};
use crate::error::KinematicsError;
use crate::kinematics::input::{ensure_finite, number_field};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Inputs for [`calc_new_velocity`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct VelocityParams {
    /// Initial velocity (km/h)
    pub initial_velocity: KilometersPerHour,
    /// Acceleration (m/s²)
    pub acceleration: MetersPerSecondSquared,
    /// Time the acceleration is applied for (s)
    pub time: Seconds,
}

impl VelocityParams {
    pub fn new(
        initial_velocity: KilometersPerHour,
        acceleration: MetersPerSecondSquared,
        time: Seconds,
    ) -> Self {
        Self {
            initial_velocity,
            acceleration,
            time,
        }
    }

    fn validate(&self) -> Result<(), KinematicsError> {
        ensure_finite("initialVelocity", *self.initial_velocity)?;
        ensure_finite("acceleration", *self.acceleration)?;
        ensure_finite("time", *self.time)?;
        Ok(())
    }
}

// Deserialization goes through the same field checks as `TryFrom<&Value>`
impl TryFrom<Value> for VelocityParams {
    type Error = KinematicsError;

    fn try_from(object: Value) -> Result<Self, Self::Error> {
        Self::try_from(&object)
    }
}

impl TryFrom<&Value> for VelocityParams {
    type Error = KinematicsError;

    fn try_from(object: &Value) -> Result<Self, Self::Error> {
        Ok(Self::new(
            KilometersPerHour::new(number_field(object, "initialVelocity")?),
            MetersPerSecondSquared::new(number_field(object, "acceleration")?),
            Seconds::new(number_field(object, "time")?),
        ))
    }
}

/// Calculate the velocity reached after accelerating for `time`.
///
/// `v = v₀ + a·t`, evaluated in m/s and reported in km/h.
///
/// Only the inputs are validated. Finite inputs whose result overflows `f64`
/// come back as an infinite value, or NaN when two overflowed terms cancel
/// (`inf - inf`).
///
/// # Errors
/// Returns [`KinematicsError::InvalidArgument`] if any input is NaN or infinite.
pub fn calc_new_velocity(params: VelocityParams) -> Result<KilometersPerHour, KinematicsError> {
    params.validate()?;

    let initial = params.initial_velocity.to_mps();
    let new_velocity = initial + params.acceleration * params.time;
    let result = new_velocity.to_kmh();

    debug!(
        initial_kmh = *params.initial_velocity,
        acceleration = *params.acceleration,
        time = *params.time,
        new_kmh = *result,
        "Computed new velocity"
    );

    Ok(result)
}
