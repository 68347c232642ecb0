//! # Transform Errors
//!
//! Structural failures of a batch run. Per-field problems never surface
//! here; the mapper absorbs them into defaults.

use std::path::PathBuf;

use thiserror::Error;

/// Error during a batch transform.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The source document could not be opened.
    #[error("cannot open source document {path}")]
    OpenSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination document could not be created.
    #[error("cannot create destination document {path}")]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source document is not valid JSON, or a value could not be
    /// serialized.
    #[error("json error")]
    Json(#[from] serde_json::Error),

    /// The top level of the source document is not an object.
    #[error("source document must be a JSON object, found {found}")]
    InvalidDocument { found: &'static str },

    /// The source document has no `courses` key.
    #[error("source document has no \"courses\" key")]
    MissingCourses,

    /// The `courses` value is not an array.
    #[error("\"courses\" must be an array, found {found}")]
    CoursesNotArray { found: &'static str },

    /// IO error while reading or writing, including a failed write of the
    /// output document.
    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
