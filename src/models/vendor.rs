use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Flat set of named text fields describing one vendor.
///
/// Values are stored as text exactly as read. Empty strings are kept but treated as missing by
/// [`VendorRecord::get`], so every renderer sees the same notion of "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorRecord {
    fields: BTreeMap<String, String>,
}

impl VendorRecord {
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        let fields = object
            .into_iter()
            .filter_map(|(key, value)| text_value(value).map(|text| (key, text)))
            .collect();
        Self { fields }
    }

    /// Returns the value for `key`, or `None` when it is absent or empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for VendorRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

fn text_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}
