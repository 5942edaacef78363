//! Flight Calculation Core Library
//!
//! Single-shot kinematics for a vehicle in flight: the velocity reached under
//! constant acceleration, the distance covered at constant velocity, and the
//! fuel remaining after a constant-rate burn.
//!
//! ## Overview
//!
//! - Semantic unit newtypes (km/h, m/s, m/s², s, km, m, kg, kg/s) keep
//!   incompatible quantities apart at compile time
//! - Each calculator validates its inputs and returns
//!   [`KinematicsError::InvalidArgument`] instead of a NaN or silently wrong value
//! - [`Scenario`] bundles the shared inputs, loads them from JSON, and reports
//!   the three results in a fixed order
//!
//! ```
//! use flight_calc_core::{calc_remaining_fuel, FuelParams, Kilograms, KilogramsPerSecond, Seconds};
//!
//! let fuel = calc_remaining_fuel(FuelParams::new(
//!     Kilograms::new(5000.0),
//!     KilogramsPerSecond::new(0.5),
//!     Seconds::HOUR,
//! ))?;
//! assert_eq!(fuel.to_string(), "3200.00 kg");
//! # Ok::<(), flight_calc_core::KinematicsError>(())
//! ```

// Core types and utilities
pub mod core_types;

pub mod error;
pub mod kinematics;
pub mod scenario;

// Re-export core types
pub use core_types::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, Meters, MetersPerSecond,
    MetersPerSecondSquared, Seconds,
};

pub use error::{KinematicsError, ScenarioError};
pub use kinematics::{
    calc_new_distance, calc_new_velocity, calc_remaining_fuel, DistanceParams, FuelParams,
    VelocityParams,
};
pub use scenario::{ReportLine, Scenario, ScenarioResults};
