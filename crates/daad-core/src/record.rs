//! # Course Records
//!
//! [`RawCourse`] is one entry of the DAAD export's `courses` array, kept as
//! a JSON object. [`NormalizedCourse`] is the fixed output shape; its field
//! order is the key order of the written document.
//!
//! ## Truthiness
//!
//! Several defaults depend on whether a value is "set". [`is_truthy`] makes
//! that explicit: `null`, `false`, zero, the empty string, the empty array
//! and the empty object are unset; every other value is set.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One raw course record from the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCourse(Map<String, Value>);

impl RawCourse {
    /// Wrap a JSON value if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// The value under `key`, if the key is present (even when `null`).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value under `key`, or `default` when the key is absent.
    ///
    /// A key that is present with `null` yields `null`.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        match self.0.get(key) {
            Some(v) => v.clone(),
            None => default.into(),
        }
    }

    /// The string under `key`, if present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// True when `key` is present with a non-null value.
    pub fn has_non_null(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|v| !v.is_null())
    }

    /// The entries of the `date` array, or an empty slice when `date` is
    /// absent or not an array.
    pub fn dates(&self) -> &[Value] {
        self.0
            .get("date")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One normalized date entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDate {
    pub start: Value,
    pub end: Value,
    /// `"€<amount>"` or `"Unknown"`.
    pub costs: String,
    pub registration_deadline: Value,
    pub select_hsk_hwk: Value,
}

/// One normalized course record.
///
/// Fields typed as [`Value`] are copied from the raw record (or defaulted)
/// without type coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCourse {
    pub id: Value,
    /// Absolute image URL, or `null` when the record has no image.
    pub image: Option<String>,
    /// `"<N> months"` or `"Unknown"`.
    pub program_duration: String,
    pub total_semester: i64,
    pub course_name: Value,
    pub course_name_short: Value,
    /// `courseNameShort` with `\uXXXX` escapes decoded.
    pub original_short_course_name: Value,
    pub academy: Value,
    /// `academy` with `\uXXXX` escapes decoded.
    pub original_academy: Value,
    pub city: Value,
    pub languages: Value,
    pub language_level_german: Value,
    pub language_level_english: Value,
    pub date: Vec<CourseDate>,
    /// Resolved course-type label.
    pub course_type: String,
    /// Copy of `id`, with its own default.
    pub cursor_number: Value,
    pub is_elearning: Value,
    pub application_deadline: Value,
    /// Resolved subject category.
    pub subject: String,
    pub sub_subject_id: Option<u32>,
    pub sub_subject_name: String,
    pub support_international_students: bool,
    pub link: Value,
    pub request_language: Value,
}

/// Whether a JSON value counts as set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a value for inclusion in a larger string.
///
/// Strings are inserted without quotes; numbers use their JSON text;
/// booleans render as `True`/`False`. Arrays and objects fall back to
/// compact JSON.
pub fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}
