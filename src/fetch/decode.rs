/// Decoding the routine's stdout into a `ProfileRecord`.
use serde::de::Error as _;
use serde_json::Value;

use super::FetchError;
use crate::types::ProfileRecord;

/// Decode raw JSON bytes into a profile.
///
/// A bare `null` document decodes to an all-zero profile. Invalid UTF-8 is
/// replaced with U+FFFD rather than rejected.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the bytes are not JSON, are not an object,
/// or a declared field has the wrong type.
pub fn decode_profile(bytes: &[u8]) -> Result<ProfileRecord, FetchError> {
    // Parse to `Value` first: serde would otherwise read a JSON array positionally.
    let text = String::from_utf8_lossy(bytes);
    match serde_json::from_str::<Value>(&text).map_err(FetchError::Decode)? {
        Value::Null => Ok(ProfileRecord::default()),
        value @ Value::Object(_) => serde_json::from_value(value).map_err(FetchError::Decode),
        other => Err(FetchError::Decode(serde_json::Error::custom(format!(
            "expected a profile object, found {}",
            kind(&other)
        )))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
