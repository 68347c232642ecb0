//! # daad-core: Foundational Types for Course Normalization
//!
//! This crate is the leaf of the workspace. It defines the static reference
//! data and the record shapes that the mapper in `daad-transform` works
//! with. It performs no I/O.
//!
//! ## Key Design Principles
//!
//! 1. **Reference tables are compile-time constants.** [`CourseType`] is an
//!    exhaustive enum over the seven DAAD course-type codes, and
//!    [`subject::SUBJECTS`] is a `&'static` two-level table. Nothing is
//!    built or mutated at runtime.
//!
//! 2. **Raw input stays untyped.** [`RawCourse`] wraps a JSON object so that
//!    a record with a missing or oddly-typed field still maps. Values that
//!    are passed through keep their original JSON type.
//!
//! 3. **Normalized output is typed.** [`NormalizedCourse`] fixes the key
//!    set and key order of the output document. Every key is always
//!    present.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `daad-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod course_type;
pub mod decode;
pub mod duration;
pub mod error;
pub mod record;
pub mod reference;
pub mod subject;

// Re-export primary types for ergonomic imports.
pub use course_type::{CourseType, COURSE_TYPE_COUNT, UNKNOWN_COURSE_TYPE};
pub use decode::decode_unicode_escapes;
pub use duration::{months_between, semesters_for, YearMonth};
pub use error::CourseError;
pub use record::{is_truthy, render_scalar, CourseDate, NormalizedCourse, RawCourse};
pub use reference::ReferenceTables;
pub use subject::{
    SubSubject, SubjectCategory, SubjectMatch, SUBJECTS, UNKNOWN_SUBJECT, UNKNOWN_SUB_SUBJECT,
};
