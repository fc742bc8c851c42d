use serde_json::Value;
use crate::error::{Error, Result};
use crate::models::VendorRecord;

/// Parses a `vendorInfo` body. `null` and `{}` both mean the vendor has no data.
pub fn parse_vendor_body(body: &[u8]) -> Result<Option<VendorRecord>> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Null => Ok(None),
        Value::Object(object) if object.is_empty() => Ok(None),
        Value::Object(object) => Ok(Some(VendorRecord::from_json_object(object))),
        other => Err(Error::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
