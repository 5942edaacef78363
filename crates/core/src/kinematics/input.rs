//! Input validation shared by the calculators

use crate::error::KinematicsError;
use serde_json::Value;
use tracing::warn;

/// Reject NaN and infinite inputs.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        warn!(parameter, value, "Rejected non-finite calculator input");
        Err(KinematicsError::invalid_argument(parameter, value.to_string()))
    }
}

/// Pull a finite number out of a loosely-typed JSON object.
///
/// Missing fields, `null`, booleans, strings (even numeric-looking ones like
/// `"10000"`), arrays and objects are all rejected.
pub(crate) fn number_field(
    object: &Value,
    parameter: &'static str,
) -> Result<f64, KinematicsError> {
    let Some(field) = object.get(parameter) else {
        warn!(parameter, "Calculator input is missing");
        return Err(KinematicsError::invalid_argument(parameter, "missing"));
    };

    match field.as_f64() {
        Some(value) => ensure_finite(parameter, value),
        None => {
            let found = describe(field);
            warn!(parameter, found = %found, "Rejected non-numeric calculator input");
            Err(KinematicsError::invalid_argument(parameter, found))
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
        Value::Number(n) => format!("unrepresentable number {n}"),
    }
}
