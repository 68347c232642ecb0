//! # daad-transform: Course Normalization Pipeline
//!
//! Turns the raw DAAD course export into the normalized collection used by
//! the presentation layer:
//!
//! - **Mapper** (`mapper.rs`): one raw record in, one normalized record
//!   out. Resolves course-type and subject labels against the
//!   [`daad_core::ReferenceTables`], decodes escaped names, derives program
//!   duration and semester count, and fills every missing field with its
//!   default. Never fails.
//!
//! - **Batch** (`batch.rs`): reads the source document, filters empty
//!   entries, maps the rest in order, writes the result.
//!
//! - **Output** (`output.rs`): indented JSON with optional ASCII escaping.
//!
//! ## Crate Policy
//!
//! - Depends only on `daad-core` internally.
//! - Only structural failures (I/O, invalid JSON, missing `courses`) are
//!   errors. Field-level anomalies are absorbed by the mapper.

pub mod batch;
pub mod config;
pub mod error;
pub mod mapper;
pub mod output;

pub use batch::{
    create_destination, extract_courses, open_source, read_courses, run, run_streams,
    transform_courses, write_courses, TransformReport,
};
pub use config::{OutputOptions, TransformConfig};
pub use error::TransformError;
pub use mapper::{normalize, normalize_with};
