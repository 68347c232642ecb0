//! # Error Types
//!
//! Errors raised by the pure helpers in this crate. The record mapper
//! absorbs all of them into field defaults and logs the cause, so none of
//! these escape a `normalize` call.

use thiserror::Error;

/// Error in a course-level helper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// A date string did not carry a numeric `YYYY-MM` prefix.
    #[error("malformed date {value:?}: {reason}")]
    MalformedDate {
        /// The offending date string.
        value: String,
        /// Which part of the prefix could not be read.
        reason: &'static str,
    },

    /// A date entry lacks a string under the given key.
    #[error("date entry has no string {0:?} field")]
    MissingDateField(&'static str),
}
