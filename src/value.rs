//! [`Json`] and [`JsonValue`] — the tagged-union value model and its
//! conversion surface.
//!
//! Strings are `Cow<'a, str>`, so a value may borrow text straight out of a
//! caller-supplied buffer instead of copying it. The borrow is bounded by
//! `'a`; a `Json<'static>` owns all of its text.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::Deref;

/// A JSON value, or nothing.
///
/// `Json(None)` means "no value at all" and is distinct from an explicit
/// `JsonValue::Null`:
///
/// ```
/// use json_cow::{Json, JsonValue};
///
/// let absent = Json::from(None);
/// let null = Json::from(JsonValue::Null);
/// assert!(!absent.has_value());
/// assert!(null.has_value());
/// assert_ne!(absent, null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Json<'a>(pub Option<JsonValue<'a>>);

/// One JSON value.
///
/// Equality is structural. `Float` uses IEEE-754 comparison through the
/// derived `PartialEq`, so `Float(f64::NAN)` is not equal to itself; compare
/// bits with [`f64::to_bits`] when NaN matters.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue<'a> {
    /// Explicit JSON null.
    Null,
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Text, either owned or borrowed from an input buffer.
    String(Cow<'a, str>),
    /// Ordered sequence of values.
    Array(Vec<Json<'a>>),
    /// Mapping with unique keys, kept in sorted order.
    Object(BTreeMap<Cow<'a, str>, Json<'a>>),
}

impl<'a> Json<'a> {
    /// Returns `true` when this wraps a value, including an explicit null.
    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    pub fn into_value(self) -> Option<JsonValue<'a>> {
        self.0
    }
}

impl<'a> Deref for Json<'a> {
    type Target = Option<JsonValue<'a>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> From<Option<JsonValue<'a>>> for Json<'a> {
    fn from(v: Option<JsonValue<'a>>) -> Self {
        Json(v)
    }
}

/// Any convertible value lifts into a present `Json`.
impl<'a, T: Into<JsonValue<'a>>> From<T> for Json<'a> {
    fn from(v: T) -> Self {
        Json(Some(v.into()))
    }
}

impl<'a> From<i64> for JsonValue<'a> {
    fn from(v: i64) -> Self {
        JsonValue::Int(v)
    }
}

impl<'a> From<f64> for JsonValue<'a> {
    fn from(v: f64) -> Self {
        JsonValue::Float(v)
    }
}

impl<'a> From<bool> for JsonValue<'a> {
    fn from(v: bool) -> Self {
        JsonValue::Bool(v)
    }
}

impl<'a> From<&'a str> for JsonValue<'a> {
    fn from(v: &'a str) -> Self {
        JsonValue::String(Cow::Borrowed(v))
    }
}

impl<'a> From<String> for JsonValue<'a> {
    fn from(v: String) -> Self {
        JsonValue::String(Cow::Owned(v))
    }
}

impl<'a> From<Cow<'a, str>> for JsonValue<'a> {
    fn from(v: Cow<'a, str>) -> Self {
        JsonValue::String(v)
    }
}

impl<'a: 'b, 'b> From<&'b [Json<'a>]> for JsonValue<'a> {
    fn from(v: &'b [Json<'a>]) -> Self {
        JsonValue::Array(v.to_vec())
    }
}

impl<'a, T: Into<Json<'a>>> From<Vec<T>> for JsonValue<'a> {
    fn from(v: Vec<T>) -> Self {
        Self::from_iter(v)
    }
}

impl<'a, K: Into<Cow<'a, str>>, V: Into<Json<'a>>> From<BTreeMap<K, V>> for JsonValue<'a> {
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::from_iter(v)
    }
}

impl<'a, V: Into<Json<'a>>> FromIterator<V> for JsonValue<'a> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        JsonValue::Array(iter.into_iter().map(V::into).collect())
    }
}

impl<'a, K: Into<Cow<'a, str>>, V: Into<Json<'a>>> FromIterator<(K, V)> for JsonValue<'a> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        JsonValue::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
