//! Semantic unit types for the flight kinematics calculators
//!
//! Newtype wrappers keep incompatible quantities apart at compile time, so a
//! km/h reading cannot be handed to a function expecting m/s, or a burn rate
//! passed where a mass is expected.
//!
//! # Design Philosophy
//! - Every type wraps `f64` (reported values are rounded to 2 decimals, and
//!   the scenario constants reach tens of thousands)
//! - Constructors do not validate ranges: finiteness is checked by the
//!   calculators, which report `InvalidArgument` instead of panicking
//! - Cross-type products follow dimensional analysis
//!   (m/s² × s = m/s, m/s × s = m, kg/s × s = kg)
//! - Input and reported types have total ordering via `Ord` (NaN sorts
//!   greater than all values) and serialize as bare numbers
//! - `Meters` and `MetersPerSecond` are intermediate units only
//!
//! # Usage
//! ```
//! use flight_calc_core::core_types::units::{KilometersPerHour, MetersPerSecond};
//!
//! let cruise = KilometersPerHour::new(36.0);
//! let mps: MetersPerSecond = cruise.into();
//! assert!((*mps - 10.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Mul, Sub};

/// Meters in one kilometer
const METERS_PER_KILOMETER: f64 = 1000.0;

/// Seconds in one hour
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Compare f64 values with total ordering using `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Render `value` with exactly two decimals.
///
/// Rounding is done on the exact binary value. Exact ties (values whose
/// third decimal is a trailing 5, e.g. `10.125`) round away from zero, and
/// negative zero renders as `0.00`.
pub(crate) fn two_decimals(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    // A two-decimal tie is an odd multiple of 1/8; `x × 8` is exact
    let eighths = magnitude * 8.0;
    let magnitude = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        // Step just past the tie so the formatter rounds up
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };

    let digits = format!("{magnitude:.2}");
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

// ============================================================================
// VELOCITY TYPES
// ============================================================================

/// Velocity in kilometers per hour (external reporting unit)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

impl Eq for KilometersPerHour {}

impl PartialOrd for KilometersPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilometersPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilometersPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilometersPerHour {
    /// Create a new `KilometersPerHour` value.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilometersPerHour(value)
    }

    /// Convert to m/s (`v × 1000 / 3600`)
    #[inline]
    #[must_use]
    pub fn to_mps(self) -> MetersPerSecond {
        MetersPerSecond(self.0 * METERS_PER_KILOMETER / SECONDS_PER_HOUR)
    }
}

impl From<KilometersPerHour> for MetersPerSecond {
    fn from(k: KilometersPerHour) -> MetersPerSecond {
        k.to_mps()
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", two_decimals(self.0))
    }
}

/// Velocity in meters per second (internal computation unit)
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl Deref for MetersPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecond {
    /// Convert to km/h (`v × 3600 / 1000`)
    #[inline]
    #[must_use]
    pub fn to_kmh(self) -> KilometersPerHour {
        KilometersPerHour(self.0 * SECONDS_PER_HOUR / METERS_PER_KILOMETER)
    }
}

impl Add for MetersPerSecond {
    type Output = MetersPerSecond;
    fn add(self, rhs: MetersPerSecond) -> MetersPerSecond {
        MetersPerSecond(self.0 + rhs.0)
    }
}

// Cross-type operation: velocity × time = distance
impl Mul<Seconds> for MetersPerSecond {
    type Output = Meters;
    fn mul(self, rhs: Seconds) -> Meters {
        Meters(self.0 * rhs.0)
    }
}

// ============================================================================
// ACCELERATION
// ============================================================================

/// Acceleration in meters per second squared (negative values decelerate)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerSecondSquared(f64);

impl Eq for MetersPerSecondSquared {}

impl PartialOrd for MetersPerSecondSquared {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MetersPerSecondSquared {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MetersPerSecondSquared {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecondSquared {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecondSquared(value)
    }
}

// Cross-type operation: acceleration × time = velocity change
impl Mul<Seconds> for MetersPerSecondSquared {
    type Output = MetersPerSecond;
    fn mul(self, rhs: Seconds) -> MetersPerSecond {
        MetersPerSecond(self.0 * rhs.0)
    }
}

// ============================================================================
// TIME
// ============================================================================

/// Time duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Seconds(f64);

impl Eq for Seconds {}

impl PartialOrd for Seconds {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Seconds {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Seconds {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Seconds {
    /// One hour
    pub const HOUR: Seconds = Seconds(SECONDS_PER_HOUR);

    /// Create a new duration in seconds
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Seconds(value)
    }
}

// ============================================================================
// DISTANCE TYPES
// ============================================================================

/// Distance in meters (internal computation unit)
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Meters(f64);

impl Meters {
    /// Convert to kilometers
    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / METERS_PER_KILOMETER)
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

/// Distance in kilometers (external reporting unit)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

impl Eq for Kilometers {}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilometers {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilometers {
    /// Create a new `Kilometers` value.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }

    /// Convert to meters
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * METERS_PER_KILOMETER)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", two_decimals(self.0))
    }
}

// ============================================================================
// MASS TYPES
// ============================================================================

/// Mass in kilograms
///
/// Unlike most mass quantities this one is allowed to go negative: remaining
/// fuel below zero means the burn outlasted the tank.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilograms(f64);

impl Eq for Kilograms {}

impl PartialOrd for Kilograms {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilograms {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilograms {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilograms {
    /// Create a new mass in kilograms
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilograms(value)
    }

    /// True when the mass is below zero (fuel exhausted before the burn ended)
    #[inline]
    #[must_use]
    pub fn is_depleted(self) -> bool {
        self.0 < 0.0
    }
}

impl Sub for Kilograms {
    type Output = Kilograms;
    fn sub(self, rhs: Kilograms) -> Kilograms {
        // No floor at zero: callers read negative fuel as a failure signal
        Kilograms(self.0 - rhs.0)
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", two_decimals(self.0))
    }
}

/// Mass flow rate in kilograms per second (fuel burn rate)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilogramsPerSecond(f64);

impl Eq for KilogramsPerSecond {}

impl PartialOrd for KilogramsPerSecond {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilogramsPerSecond {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilogramsPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilogramsPerSecond {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilogramsPerSecond(value)
    }
}

// Cross-type operation: burn rate × time = mass consumed
impl Mul<Seconds> for KilogramsPerSecond {
    type Output = Kilograms;
    fn mul(self, rhs: Seconds) -> Kilograms {
        Kilograms(self.0 * rhs.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kmh_to_mps_and_back() {
        let mps = KilometersPerHour(36.0).to_mps();
        assert!((mps.0 - 10.0).abs() < 1e-9);
        assert!((mps.to_kmh().0 - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_km_to_meters_and_back() {
        let m = Kilometers(2.5).to_meters();
        assert!((m.0 - 2500.0).abs() < 1e-9);
        assert!((m.to_kilometers().0 - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_acceleration_times_time_equals_velocity() {
        let dv: MetersPerSecond = MetersPerSecondSquared(3.0) * Seconds(10.0);
        assert!((dv.0 - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_times_time_equals_distance() {
        let distance: Meters = MetersPerSecond(10.0) * Seconds(5.0);
        assert!((distance.0 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_burn_rate_times_time_equals_mass() {
        let burned: Kilograms = KilogramsPerSecond(0.5) * Seconds::HOUR;
        assert!((burned.0 - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_kilograms_subtraction_allows_negative() {
        let remaining = Kilograms(100.0) - Kilograms(250.0);
        assert_eq!(remaining.0, -150.0);
        assert!(remaining.is_depleted());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(KilometersPerHour(48880.0).to_string(), "48880.00 km/h");
        assert_eq!(Kilometers(10000.0).to_string(), "10000.00 km");
        assert_eq!(Kilograms(3200.0).to_string(), "3200.00 kg");
        assert_eq!(Kilograms(-12.5).to_string(), "-12.50 kg");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(Kilograms(10.125).to_string(), "10.13 kg");
        assert_eq!(Kilometers(0.125).to_string(), "0.13 km");
        assert_eq!(KilometersPerHour(2.375).to_string(), "2.38 km/h");
        assert_eq!(Kilograms(-10.125).to_string(), "-10.13 kg");
        assert_eq!(two_decimals(1.875), "1.88");
        assert_eq!(two_decimals(0.625), "0.63");
    }

    #[test]
    fn test_inexact_decimals_round_on_binary_value() {
        // 2.675 and 1.005 are stored just below the tie
        assert_eq!(two_decimals(2.675), "2.67");
        assert_eq!(two_decimals(1.005), "1.00");
        assert_eq!(two_decimals(0.126), "0.13");
        assert_eq!(two_decimals(0.124), "0.12");
    }

    #[test]
    fn test_negative_zero_renders_unsigned() {
        assert_eq!(KilometersPerHour(-0.0).to_string(), "0.00 km/h");
        assert_eq!(Kilograms(-0.0).to_string(), "0.00 kg");
        // A small negative value keeps its sign
        assert_eq!(two_decimals(-0.001), "-0.00");
    }

    #[test]
    fn test_non_finite_rendering() {
        assert_eq!(two_decimals(f64::NAN), "NaN");
        assert_eq!(two_decimals(f64::INFINITY), "Infinity");
        assert_eq!(two_decimals(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_total_ordering_places_nan_last() {
        let mut speeds = [
            KilometersPerHour(f64::NAN),
            KilometersPerHour(5.0),
            KilometersPerHour(-1.0),
        ];
        speeds.sort();
        assert_eq!(speeds[0], KilometersPerHour(-1.0));
        assert_eq!(speeds[1], KilometersPerHour(5.0));
        assert!(speeds[2].is_nan());
    }

    #[test]
    fn test_serde_transparent_number() {
        let json = serde_json::to_string(&Seconds(3600.0)).unwrap();
        assert_eq!(json, "3600.0");
        let back: KilogramsPerSecond = serde_json::from_str("0.5").unwrap();
        assert_eq!(back, KilogramsPerSecond(0.5));
    }
}
