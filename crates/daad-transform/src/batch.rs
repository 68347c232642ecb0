//! # Batch Driver
//!
//! Reads the export document, extracts its `courses` array, drops entries
//! that carry no record, normalizes the rest in order, and writes the
//! resulting array.
//!
//! ## Entry Filtering
//!
//! Falsy entries (`null`, `false`, `0`, `""`, `[]`, `{}`) are dropped
//! silently. Any other non-object entry cannot be a course record and is
//! dropped with a warning. Output order is the order of the surviving
//! input entries.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use daad_core::{is_truthy, NormalizedCourse, RawCourse, ReferenceTables};
use serde_json::Value;

use crate::config::{OutputOptions, TransformConfig};
use crate::error::{json_type_name, TransformError};
use crate::mapper::normalize_with;
use crate::output::write_json;

/// Key of the course array in the source document.
pub const COURSES_KEY: &str = "courses";

/// Outcome of normalizing one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformReport {
    /// Entries found in the `courses` array.
    pub seen: usize,
    /// Falsy entries dropped without comment.
    pub skipped_empty: usize,
    /// Truthy non-object entries dropped with a warning.
    pub skipped_invalid: usize,
    /// Normalized records, in input order.
    pub courses: Vec<NormalizedCourse>,
}

impl TransformReport {
    /// Number of records written.
    pub fn normalized(&self) -> usize {
        self.courses.len()
    }
}

/// Take the `courses` array out of a parsed source document.
pub fn extract_courses(document: Value) -> Result<Vec<Value>, TransformError> {
    let mut root = match document {
        Value::Object(root) => root,
        other => {
            return Err(TransformError::InvalidDocument {
                found: json_type_name(&other),
            })
        }
    };
    match root.remove(COURSES_KEY) {
        Some(Value::Array(entries)) => Ok(entries),
        Some(other) => Err(TransformError::CoursesNotArray {
            found: json_type_name(&other),
        }),
        None => Err(TransformError::MissingCourses),
    }
}

/// Parse a source document from `reader` and return its `courses` entries.
pub fn read_courses<R: Read>(reader: R) -> Result<Vec<Value>, TransformError> {
    let document: Value = serde_json::from_reader(reader)?;
    extract_courses(document)
}

/// Filter and normalize a batch of raw entries.
pub fn transform_courses(entries: Vec<Value>, tables: &ReferenceTables) -> TransformReport {
    let mut report = TransformReport {
        seen: entries.len(),
        courses: Vec::with_capacity(entries.len()),
        ..TransformReport::default()
    };

    for (index, entry) in entries.into_iter().enumerate() {
        if !is_truthy(&entry) {
            report.skipped_empty += 1;
            continue;
        }
        let found = json_type_name(&entry);
        match RawCourse::from_value(entry) {
            Some(course) => report.courses.push(normalize_with(&course, tables)),
            None => {
                tracing::warn!(index, found, "skipping course entry that is not an object");
                report.skipped_invalid += 1;
            }
        }
    }

    tracing::debug!(
        seen = report.seen,
        skipped_empty = report.skipped_empty,
        skipped_invalid = report.skipped_invalid,
        normalized = report.normalized(),
        "normalized course batch"
    );
    report
}

/// Write normalized records to `writer` as a JSON array.
pub fn write_courses<W: Write>(
    writer: W,
    courses: &[NormalizedCourse],
    options: &OutputOptions,
) -> Result<(), TransformError> {
    write_json(writer, courses, options).map_err(|e| {
        if e.is_io() {
            TransformError::Io(e.into())
        } else {
            TransformError::Json(e)
        }
    })
}

/// Open the source document at `path` for buffered reading.
pub fn open_source(path: &Path) -> Result<BufReader<File>, TransformError> {
    let file = File::open(path).map_err(|source| TransformError::OpenSource {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Create (or truncate) the destination document at `path`, creating
/// missing parent directories first.
///
/// Call only once the output is ready to be written, so a failed read
/// leaves an existing destination untouched.
pub fn create_destination(path: &Path) -> Result<BufWriter<File>, TransformError> {
    let create_error = |source| TransformError::CreateDestination {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(create_error)?;
        }
    }
    let file = File::create(path).map_err(create_error)?;
    Ok(BufWriter::new(file))
}

/// Run the whole pipeline from `config.input` to `config.output`.
pub fn run(config: &TransformConfig) -> Result<TransformReport, TransformError> {
    tracing::debug!(input = %config.input.display(), "reading source document");
    let entries = read_courses(open_source(&config.input)?)?;

    let report = transform_courses(entries, &ReferenceTables::STANDARD);

    let mut writer = create_destination(&config.output)?;
    write_courses(&mut writer, &report.courses, &config.output_options)?;
    writer.flush()?;

    tracing::info!(
        output = %config.output.display(),
        records = report.normalized(),
        "wrote normalized courses"
    );
    Ok(report)
}

/// Run the pipeline over in-memory streams instead of files.
pub fn run_streams<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    options: &OutputOptions,
) -> Result<TransformReport, TransformError> {
    let entries = read_courses(reader)?;
    let report = transform_courses(entries, &ReferenceTables::STANDARD);
    write_courses(&mut writer, &report.courses, options)?;
    writer.flush()?;
    Ok(report)
}
