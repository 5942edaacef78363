//! Kinematics calculators
//!
//! Three independent, stateless functions:
//! - [`calc_new_velocity`]: velocity after constant acceleration
//! - [`calc_new_distance`]: distance after travelling at constant velocity
//! - [`calc_remaining_fuel`]: fuel left after a constant-rate burn
//!
//! Each takes a parameter struct with three named fields and returns a unit
//! value, or [`KinematicsError::InvalidArgument`](crate::error::KinematicsError)
//! when an input is not a finite number. Parameter structs can also be built
//! from loosely-typed JSON via `TryFrom<&serde_json::Value>`.

pub mod distance;
pub mod fuel;
pub(crate) mod input;
pub mod velocity;

pub use distance::{calc_new_distance, DistanceParams};
pub use fuel::{calc_remaining_fuel, FuelParams};
pub use velocity::{calc_new_velocity, VelocityParams};
