//! Request-body validation for `POST /ideas`.

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::ideas::models::UserProfile;

/// Wire names of the profile fields, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "age",
    "location",
    "strengths",
    "enjoys",
    "skillset",
    "hoursPerWeek",
    "seedBudget",
];

pub const NOT_AN_OBJECT: &str = "Request body must be a JSON object";

pub fn missing_fields_message() -> String {
    format!("Missing required fields: {}", REQUIRED_FIELDS.join(", "))
}

/// Parses a request body into a `UserProfile`.
///
/// The body may be the profile object itself or a JSON string containing it.
/// Text fields must be non-empty; numeric fields only need to be non-null.
pub fn parse_profile(body: &[u8]) -> Result<UserProfile, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::Validation(NOT_AN_OBJECT.to_string()))?;

    // Double-encoded body: a JSON string holding the object.
    let value = match value {
        Value::String(inner) => serde_json::from_str::<Value>(&inner)
            .map_err(|_| AppError::Validation(NOT_AN_OBJECT.to_string()))?,
        other => other,
    };

    let Value::Object(fields) = value else {
        return Err(AppError::Validation(NOT_AN_OBJECT.to_string()));
    };

    let all_present = REQUIRED_FIELDS
        .iter()
        .all(|&name| fields.get(name).is_some_and(is_present));
    if !all_present {
        return Err(AppError::Validation(missing_fields_message()));
    }

    Ok(UserProfile {
        age: field(&fields, "age"),
        location: text_field(&fields, "location"),
        strengths: text_field(&fields, "strengths"),
        enjoys: text_field(&fields, "enjoys"),
        skillset: text_field(&fields, "skillset"),
        hours_per_week: field(&fields, "hoursPerWeek"),
        seed_budget: field(&fields, "seedBudget"),
    })
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn field(fields: &Map<String, Value>, name: &str) -> Value {
    fields.get(name).cloned().unwrap_or(Value::Null)
}

/// Text fields sent as non-strings (e.g. a number) are rendered as their JSON text.
fn text_field(fields: &Map<String, Value>, name: &str) -> String {
    match fields.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
