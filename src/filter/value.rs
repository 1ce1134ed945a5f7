use serde_json::{Map, Value};
use std::borrow::Cow;

/// A single field read off a record, borrowed where possible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Text(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl<'a> FieldValue<'a> {
    /// Text rendition used by substring search. Missing fields read as "".
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Missing => Cow::Borrowed(""),
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Int(n) => Cow::Owned(n.to_string()),
            FieldValue::Float(n) => Cow::Owned(n.to_string()),
            FieldValue::Bool(b) => Cow::Owned(b.to_string()),
        }
    }

    /// Only text values are ever dates; numbers are not treated as timestamps.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> From<&'a Option<String>> for FieldValue<'a> {
    fn from(v: &'a Option<String>) -> Self {
        v.as_deref().map_or(FieldValue::Missing, FieldValue::Text)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(v: &'a String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<Option<i64>> for FieldValue<'_> {
    fn from(v: Option<i64>) -> Self {
        v.map_or(FieldValue::Missing, FieldValue::Int)
    }
}

impl From<Option<bool>> for FieldValue<'_> {
    fn from(v: Option<bool>) -> Self {
        v.map_or(FieldValue::Missing, FieldValue::Bool)
    }
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(v: &'a Value) -> Self {
        match v {
            Value::String(s) => FieldValue::Text(s),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => n.as_f64().map_or(FieldValue::Missing, FieldValue::Float),
            },
            // Nested values are not filterable
            Value::Null | Value::Array(_) | Value::Object(_) => FieldValue::Missing,
        }
    }
}

/// Anything the filter engine can read fields from.
///
/// Implementations must never panic on an unknown field name; they return
/// [`FieldValue::Missing`] instead.
pub trait Record {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> FieldValue<'_> {
        self.get(name).map_or(FieldValue::Missing, FieldValue::from)
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match self {
            Value::Object(map) => map.field(name),
            _ => FieldValue::Missing,
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> FieldValue<'_> {
        (**self).field(name)
    }
}
