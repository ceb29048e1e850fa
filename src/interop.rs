//! Conversions between [`JsonValue`] and `serde_json::Value`.
//!
//! Numbers that fit in i64 become `Int`; anything else becomes `Float`, so a
//! u64 above `i64::MAX` loses precision on the way in. Going out, an absent
//! `Json` and a non-finite float both map to `Value::Null` because
//! `serde_json` has no representation for either.

use std::borrow::Cow;

use crate::{Json, JsonValue};

impl From<serde_json::Value> for JsonValue<'static> {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i)
                } else {
                    JsonValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => JsonValue::String(Cow::Owned(s)),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(|v| Json::from(v)).collect())
            }
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (Cow::Owned(k), Json::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonValue<'_>> for serde_json::Value {
    fn from(v: JsonValue<'_>) -> Self {
        match v {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Int(i) => serde_json::Value::from(i),
            JsonValue::Float(f) => serde_json::Value::from(f),
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            JsonValue::String(s) => serde_json::Value::String(s.into_owned()),
            JsonValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k.into_owned(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Json<'_>> for serde_json::Value {
    fn from(json: Json<'_>) -> Self {
        match json.into_value() {
            Some(v) => serde_json::Value::from(v),
            None => serde_json::Value::Null,
        }
    }
}
