use serde_json::Value as JsonValue;

const MESSAGE_KEYS: [&str; 3] = ["detail", "error", "message"];

/// Pulls a human-readable message out of an error response body.
///
/// Looks at `detail`, `error` and `message` in that order, then falls back to
/// the first string of the first field-error list (`{"name": ["..."]}`).
pub fn extract_message(body: &str) -> Option<String> {
    let value: JsonValue = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in MESSAGE_KEYS {
        if let Some(msg) = object.get(key).and_then(non_empty_str) {
            return Some(msg);
        }
    }

    object.values().find_map(|field| match field {
        JsonValue::Array(items) => items.iter().find_map(non_empty_str),
        _ => None,
    })
}

fn non_empty_str(value: &JsonValue) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
