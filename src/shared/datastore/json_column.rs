use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

// jsonb columns hold string lists and metric maps.

pub fn to_json<T: Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

pub fn from_json<T: DeserializeOwned>(json: &Value) -> Result<T, String> {
    serde_json::from_value(json.clone()).map_err(|e| e.to_string())
}
