//! Error types for the kinematics calculators and scenario loading

use std::fmt;

/// Message shared by every rejected calculator input.
pub const INVALID_ARGUMENT_MESSAGE: &str =
    "Invalid input parameter types. All parameters must be numbers.";

/// Errors raised by the kinematics calculators.
///
/// There is a single kind: a required parameter was missing, was not a
/// number, or was a number that is not finite (NaN or infinite).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KinematicsError {
    /// A parameter failed validation
    InvalidArgument {
        /// Parameter name as it appears in the structured input (camelCase)
        parameter: &'static str,
        /// Description of what was supplied instead of a finite number
        found: String,
    },
}

impl KinematicsError {
    /// Create an `InvalidArgument` error for the named parameter.
    ///
    /// # Arguments
    /// * `parameter` - The parameter that failed validation (e.g., `"initialVelocity"`)
    /// * `found` - What was supplied instead (e.g., `"NaN"`, `"missing"`)
    pub fn invalid_argument(parameter: &'static str, found: impl Into<String>) -> Self {
        KinematicsError::InvalidArgument {
            parameter,
            found: found.into(),
        }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            KinematicsError::InvalidArgument { parameter, .. } => parameter,
        }
    }
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::InvalidArgument { parameter, found } => {
                let message = INVALID_ARGUMENT_MESSAGE.trim_end_matches('.');
                write!(f, "{message} ({parameter}: {found})")
            }
        }
    }
}

impl std::error::Error for KinematicsError {}

/// Errors that can occur while loading or saving a scenario file
#[derive(Debug)]
pub enum ScenarioError {
    /// Failed to read the file
    LoadFailed(String),
    /// File contents are not valid JSON
    ParseFailed(String),
    /// Failed to serialize the scenario
    SerializeFailed(String),
    /// Failed to write the file
    SaveFailed(String),
    /// A scenario field is missing or not a number
    InvalidArgument(KinematicsError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::LoadFailed(msg) => write!(f, "Failed to load scenario: {msg}"),
            ScenarioError::ParseFailed(msg) => write!(f, "Failed to parse scenario: {msg}"),
            ScenarioError::SerializeFailed(msg) => {
                write!(f, "Failed to serialize scenario: {msg}")
            }
            ScenarioError::SaveFailed(msg) => write!(f, "Failed to save scenario: {msg}"),
            ScenarioError::InvalidArgument(err) => write!(f, "Invalid scenario: {err}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::InvalidArgument(err) => Some(err),
            _ => None,
        }
    }
}

impl From<KinematicsError> for ScenarioError {
    fn from(err: KinematicsError) -> Self {
        ScenarioError::InvalidArgument(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_argument_message_names_contract_and_parameter() {
        let err = KinematicsError::invalid_argument("acceleration", "NaN");
        let msg = err.to_string();
        assert!(msg.contains("All parameters must be numbers"));
        assert!(msg.contains("acceleration: NaN"));
        assert_eq!(err.parameter(), "acceleration");
    }

    #[test]
    fn test_scenario_error_wraps_source() {
        let err: ScenarioError = KinematicsError::invalid_argument("time", "missing").into();
        assert!(err.to_string().starts_with("Invalid scenario: "));
        assert!(err.source().is_some());

        let load = ScenarioError::LoadFailed("no such file".to_string());
        assert!(load.source().is_none());
    }
}
