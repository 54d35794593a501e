//! Lenient accessors over untrusted model JSON. Every function returns a
//! value (possibly empty) instead of failing, so schema normalisation stays
//! total.

use serde_json::{Map, Value};

fn first<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find(|v| !v.is_null())
}

pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    first(value, keys).and_then(text_of)
}

pub fn string_or(value: &Value, keys: &[&str], default: &str) -> String {
    string_field(value, keys)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn f64_field(value: &Value, keys: &[&str]) -> Option<f64> {
    match first(value, keys)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}

pub fn u32_field(value: &Value, keys: &[&str]) -> Option<u32> {
    f64_field(value, keys)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round().min(f64::from(u32::MAX)) as u32)
}

pub fn array_field<'a>(value: &'a Value, keys: &[&str]) -> &'a [Value] {
    first(value, keys)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn object_field(value: &Value, keys: &[&str]) -> Map<String, Value> {
    first(value, keys)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Flattens a list of strings or objects into display strings.
pub fn string_list(value: &Value, keys: &[&str]) -> Vec<String> {
    array_field(value, keys)
        .iter()
        .filter_map(|item| {
            text_of(item).or_else(|| string_field(item, &["description", "message", "title", "text"]))
        })
        .filter(|s| !s.is_empty())
        .collect()
}
