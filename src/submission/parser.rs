use serde_json::map::Entry;
use serde_json::{Map, Value};

/// Parse a request body based on Content-Type header.
///
/// Only JSON and urlencoded bodies are read. Any other (or missing) content
/// type yields an empty object, which then fails field validation.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let media_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mt| mt.trim().to_ascii_lowercase())
        .unwrap_or_default();

    match media_type.as_str() {
        "application/json" => parse_json(body),
        "application/x-www-form-urlencoded" => Ok(parse_form_urlencoded(body)),
        _ => Ok(Value::Object(Map::new())),
    }
}

/// Strict JSON: the top level must be an object or an array. An empty body
/// is an empty object.
fn parse_json(body: &[u8]) -> Result<Value, String> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    match body.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') | Some(b'[') => {}
        _ => return Err("Invalid JSON: expected an object or array".to_string()),
    }

    serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
}

/// Repeated keys, and keys written as `key[]`, collect into an array.
fn parse_form_urlencoded(body: &[u8]) -> Value {
    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body) {
        let mut key = k.into_owned();
        let is_list = key.ends_with("[]");
        if is_list {
            key.truncate(key.len() - 2);
        }
        let value = Value::String(v.into_owned());

        match map.entry(key) {
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
            Entry::Vacant(slot) => {
                slot.insert(if is_list { Value::Array(vec![value]) } else { value });
            }
        }
    }
    Value::Object(map)
}
