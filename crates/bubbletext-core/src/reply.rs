use serde_json::Value;

use crate::error::ReplyError;

/// Fallback error text when a failed request carries no usable `error`.
pub const REQUEST_FAILED: &str = "Request failed";

/// Picks the text to show for a successful chat reply.
///
/// A usable `answer` field wins. Otherwise the whole reply is shown as
/// pretty-printed JSON with its original key order.
pub fn reply_text(body: &str) -> Result<String, ReplyError> {
    let reply: Value = serde_json::from_str(body)?;
    if let Some(answer) = reply.get("answer").and_then(scalar_text) {
        return Ok(answer);
    }
    Ok(serde_json::to_string_pretty(&reply)?)
}

/// Builds the two-line text shown when a chat request fails.
///
/// `body` is the raw error response, if any. Anything that is not a JSON
/// object is treated as an empty one.
pub fn failure_text(body: Option<&str>) -> String {
    let parsed = body
        .and_then(|body| serde_json::from_str::<Value>(body).ok())
        .filter(Value::is_object);
    let field = |name: &str| parsed.as_ref().and_then(|v| v.get(name)).and_then(scalar_text);

    let error = field("error").unwrap_or_else(|| REQUEST_FAILED.to_string());
    let details = field("details").unwrap_or_default();
    format!("Error: {error}\nDetails: {details}")
}

// Empty strings, zero, false and null count as missing. Objects and arrays
// have no useful text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
