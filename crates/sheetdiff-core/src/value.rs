//! Value model compared by the diff engine.
//!
//! Callers hand the engine untyped row/cell snapshots; [`Value`] is the closed
//! set of shapes those snapshots can take. JSON is the usual source, so the
//! type converts losslessly from `serde_json::Value` and serializes back to
//! the same shape (dates become ISO-8601 strings).
//!
//! ## Emptiness
//!
//! A value is *empty* when it is `Null`, the empty string, or a composite
//! whose members are all empty (recursively, including no members at all).
//! Every empty value compares equal to every other empty value.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::errors::{ExError, SheetDiffError};

/// A caller-supplied value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    /// Null / absent / undefined
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// A point in time
    Date(DateTime<Utc>),
    Array(Vec<Value>),
    /// Keyed mapping; keys iterate in sorted order
    Object(BTreeMap<String, Value>),
}

/// Canonical comparable form of a [`Value`].
///
/// Empty values collapse to empty text, numbers and strings to their printed
/// text. Booleans compare by value. Composites and dates keep their identity:
/// two of them are only "the same" when they are the same allocation.
#[derive(Debug, Clone)]
pub enum Normalized<'a> {
    Text(Cow<'a, str>),
    Bool(bool),
    Composite(&'a Value),
}

impl Normalized<'_> {
    /// Identity comparison of two normalized forms.
    pub fn same_as(&self, other: &Normalized<'_>) -> bool {
        match (self, other) {
            (Normalized::Text(a), Normalized::Text(b)) => a == b,
            (Normalized::Bool(a), Normalized::Bool(b)) => a == b,
            (Normalized::Composite(a), Normalized::Composite(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Value {
    /// Build an object from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from items.
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Parse JSON text into a value.
    ///
    /// # Errors
    ///
    /// - `Serialization` — `text` is not valid JSON
    pub fn from_json_str(text: &str) -> Result<Self, ExError> {
        let raw: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| ExError::from(SheetDiffError::from(e)).with_op("from_json_str"))?;
        Ok(Value::from(raw))
    }

    /// True for arrays, objects and dates.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_) | Value::Date(_))
    }

    /// Short lowercase name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Whether this value belongs to the emptiness class.
    ///
    /// Walks with an explicit stack so arbitrarily deep input cannot overflow
    /// the call stack here.
    pub fn is_empty_value(&self) -> bool {
        let mut pending: Vec<&Value> = vec![self];
        while let Some(value) = pending.pop() {
            match value {
                Value::Null => {}
                Value::String(s) if s.is_empty() => {}
                Value::Array(items) => pending.extend(items.iter()),
                Value::Object(map) => pending.extend(map.values()),
                _ => return false,
            }
        }
        true
    }

    /// Structural equality that treats `NaN` as equal to `NaN`.
    ///
    /// Decides whether a comparison is `Identical` rather than `Equivalent`.
    /// Walks with an explicit stack, like [`Value::is_empty_value`].
    pub fn is_identical_to(&self, other: &Value) -> bool {
        let mut pending: Vec<(&Value, &Value)> = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Value::Number(x), Value::Number(y)) => {
                    if x != y && !(x.is_nan() && y.is_nan()) {
                        return false;
                    }
                }
                (Value::Array(xs), Value::Array(ys)) => {
                    if xs.len() != ys.len() {
                        return false;
                    }
                    pending.extend(xs.iter().zip(ys.iter()));
                }
                (Value::Object(xs), Value::Object(ys)) => {
                    if xs.len() != ys.len() {
                        return false;
                    }
                    for ((kx, x), (ky, y)) in xs.iter().zip(ys.iter()) {
                        if kx != ky {
                            return false;
                        }
                        pending.push((x, y));
                    }
                }
                (Value::Array(_) | Value::Object(_), _)
                | (_, Value::Array(_) | Value::Object(_)) => return false,
                (x, y) => {
                    if x != y {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Canonical comparable form.
    pub fn normalized(&self) -> Normalized<'_> {
        if self.is_empty_value() {
            return Normalized::Text(Cow::Borrowed(""));
        }
        match self {
            Value::String(s) => Normalized::Text(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Normalized::Text(Cow::Owned(number_to_text(*n))),
            Value::Bool(b) => Normalized::Bool(*b),
            other => Normalized::Composite(other),
        }
    }

    /// ISO-8601 rendering for dates (`YYYY-MM-DDTHH:MM:SS.mmmZ`).
    pub fn to_iso_string(&self) -> Option<String> {
        match self {
            Value::Date(at) => Some(iso_string(at)),
            _ => None,
        }
    }
}

/// Render a UTC instant with millisecond precision and a `Z` suffix.
pub fn iso_string(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Print a number the way a spreadsheet cell shows it, following ECMAScript
/// `Number::toString`: shortest round-trip digits, exponent form below 1e-6
/// and from 1e21 up, `NaN` and `Infinity` by name, and `-0` as `0`.
pub fn number_to_text(n: f64) -> String {
    if n == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    ryu_js::Buffer::new().format(n).to_string()
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => number_to_json(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Date(at) => serde_json::Value::String(iso_string(&at)),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Integral numbers serialize as JSON integers; NaN and infinities as null.
///
/// `i64::MAX as f64` rounds up to 2^63, which is out of range, hence the
/// strict upper bound.
fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(at: DateTime<Utc>) -> Self {
        Value::Date(at)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
