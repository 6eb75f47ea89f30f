//! Small request-handling helpers

use serde_json::Value;

/// Names from `fields` that are not keys of `obj`.
///
/// Anything other than a JSON object is missing every field.
pub fn get_missing_fields(obj: &Value, fields: &[&str]) -> Vec<String> {
    match obj.as_object() {
        Some(map) => fields
            .iter()
            .filter(|field| !map.contains_key(**field))
            .map(|field| field.to_string())
            .collect(),
        None => fields.iter().map(|field| field.to_string()).collect(),
    }
}

/// Round to 12 significant digits, dropping binary floating-point noise
/// such as `0.1 + 0.2 = 0.30000000000000004`.
pub fn strip(number: f64) -> f64 {
    if !number.is_finite() {
        return number;
    }
    format!("{:.11e}", number).parse().unwrap_or(number)
}

/// Whether `value` is present, non-empty and one of `collection`
pub fn check_value_in_collection<'a>(
    value: Option<&str>,
    collection: impl IntoIterator<Item = &'a str>,
) -> bool {
    match value {
        Some(value) if !value.is_empty() => collection.into_iter().any(|item| item == value),
        _ => false,
    }
}
