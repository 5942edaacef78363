//! Flight scenario: the inputs shared by the three calculators
//!
//! A `Scenario` holds one value per input parameter. `Scenario::default()` is
//! the reference scenario (10000 km/h, 3 m/s² for one hour, 5000 kg of fuel
//! burning at 0.5 kg/s). Scenarios can also be read from and written to JSON
//! files using the same camelCase field names as the calculator inputs.

use crate::core_types::units::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, MetersPerSecondSquared, Seconds,
};
use crate::error::{KinematicsError, ScenarioError};
use crate::kinematics::input::number_field;
use crate::kinematics::{
    calc_new_distance, calc_new_velocity, calc_remaining_fuel, DistanceParams, FuelParams,
    VelocityParams,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// Input parameters for one evaluation of all three calculators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct Scenario {
    /// Initial velocity (km/h)
    pub initial_velocity: KilometersPerHour,
    /// Acceleration (m/s²)
    pub acceleration: MetersPerSecondSquared,
    /// Elapsed time, shared by all three calculations (s)
    pub time: Seconds,
    /// Initial distance (km)
    pub initial_distance: Kilometers,
    /// Initial fuel (kg)
    pub initial_fuel: Kilograms,
    /// Fuel burn rate (kg/s)
    pub fuel_burn_rate: KilogramsPerSecond,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            initial_velocity: KilometersPerHour::new(10000.0),
            acceleration: MetersPerSecondSquared::new(3.0),
            time: Seconds::HOUR,
            initial_distance: Kilometers::new(0.0),
            initial_fuel: Kilograms::new(5000.0),
            fuel_burn_rate: KilogramsPerSecond::new(0.5),
        }
    }
}

impl Scenario {
    pub fn velocity_params(&self) -> VelocityParams {
        VelocityParams::new(self.initial_velocity, self.acceleration, self.time)
    }

    pub fn distance_params(&self) -> DistanceParams {
        DistanceParams::new(self.initial_distance, self.initial_velocity, self.time)
    }

    pub fn fuel_params(&self) -> FuelParams {
        FuelParams::new(self.initial_fuel, self.fuel_burn_rate, self.time)
    }

    /// Parse a scenario from JSON text
    ///
    /// # Errors
    /// Returns `ParseFailed` for malformed JSON and `InvalidArgument` when a
    /// field is missing or not a finite number.
    pub fn from_json_str(contents: &str) -> Result<Self, ScenarioError> {
        let value: Value =
            serde_json::from_str(contents).map_err(|e| ScenarioError::ParseFailed(e.to_string()))?;

        Ok(Self::try_from(&value)?)
    }

    /// Load a scenario from a JSON file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid JSON, or has a
    /// missing or non-numeric field
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|e| ScenarioError::LoadFailed(e.to_string()))?;

        let scenario = Self::from_json_str(&contents)?;
        info!(path = %path.display(), "Loaded scenario");
        Ok(scenario)
    }

    /// Save the scenario to a JSON file
    ///
    /// # Errors
    /// Returns error if the scenario cannot be serialized or the file cannot be written
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScenarioError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ScenarioError::SerializeFailed(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ScenarioError::SaveFailed(e.to_string()))?;

        Ok(())
    }

    /// Run the three calculators in order (velocity, distance, fuel), handing
    /// each result to `emit` as soon as it is available.
    ///
    /// A failing calculation stops the run. Lines emitted before it stay
    /// emitted.
    ///
    /// # Errors
    /// Returns the first [`KinematicsError`] raised by a calculator.
    pub fn run(&self, mut emit: impl FnMut(ReportLine)) -> Result<(), KinematicsError> {
        info!(scenario = ?self, "Running scenario");

        emit(ReportLine::Velocity(calc_new_velocity(self.velocity_params())?));
        emit(ReportLine::Distance(calc_new_distance(self.distance_params())?));
        emit(ReportLine::Fuel(calc_remaining_fuel(self.fuel_params())?));

        Ok(())
    }

    /// Evaluate the three calculators concurrently.
    ///
    /// The calculations share no state, so the results are identical to
    /// [`Scenario::run`]; use [`ScenarioResults::report`] to emit them in the
    /// same fixed order.
    pub fn evaluate_parallel(&self) -> ScenarioResults {
        info!(scenario = ?self, "Evaluating scenario in parallel");

        let (velocity, (distance, fuel)) = rayon::join(
            || calc_new_velocity(self.velocity_params()),
            || {
                rayon::join(
                    || calc_new_distance(self.distance_params()),
                    || calc_remaining_fuel(self.fuel_params()),
                )
            },
        );

        ScenarioResults {
            velocity,
            distance,
            fuel,
        }
    }
}

// Deserialization goes through the same field checks as `TryFrom<&Value>`
impl TryFrom<Value> for Scenario {
    type Error = KinematicsError;

    fn try_from(object: Value) -> Result<Self, Self::Error> {
        Self::try_from(&object)
    }
}

impl TryFrom<&Value> for Scenario {
    type Error = KinematicsError;

    fn try_from(object: &Value) -> Result<Self, Self::Error> {
        Ok(Self {
            initial_velocity: KilometersPerHour::new(number_field(object, "initialVelocity")?),
            acceleration: MetersPerSecondSquared::new(number_field(object, "acceleration")?),
            time: Seconds::new(number_field(object, "time")?),
            initial_distance: Kilometers::new(number_field(object, "initialDistance")?),
            initial_fuel: Kilograms::new(number_field(object, "initialFuel")?),
            fuel_burn_rate: KilogramsPerSecond::new(number_field(object, "fuelBurnRate")?),
        })
    }
}

/// Results of [`Scenario::evaluate_parallel`]
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResults {
    pub velocity: Result<KilometersPerHour, KinematicsError>,
    pub distance: Result<Kilometers, KinematicsError>,
    pub fuel: Result<Kilograms, KinematicsError>,
}

impl ScenarioResults {
    /// Emit the results in the fixed order velocity, distance, fuel, stopping
    /// at the first error.
    ///
    /// # Errors
    /// Returns the first failed calculation in report order.
    pub fn report(self, mut emit: impl FnMut(ReportLine)) -> Result<(), KinematicsError> {
        emit(ReportLine::Velocity(self.velocity?));
        emit(ReportLine::Distance(self.distance?));
        emit(ReportLine::Fuel(self.fuel?));
        Ok(())
    }
}

/// One line of the scenario report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportLine {
    Velocity(KilometersPerHour),
    Distance(Kilometers),
    Fuel(Kilograms),
}

impl ReportLine {
    pub fn label(&self) -> &'static str {
        match self {
            ReportLine::Velocity(_) => "Corrected New Velocity",
            ReportLine::Distance(_) => "Corrected New Distance",
            ReportLine::Fuel(_) => "Corrected Remaining Fuel",
        }
    }
}

// Unit types render "<value to 2 decimals> <unit>"
impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Velocity(v) => write!(f, "{}: {v}", self.label()),
            ReportLine::Distance(d) => write!(f, "{}: {d}", self.label()),
            ReportLine::Fuel(m) => write!(f, "{}: {m}", self.label()),
        }
    }
}
