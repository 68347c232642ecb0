//! # daad-cli: Course Export Command-Line Interface
//!
//! Thin clap front end over `daad-transform`.
//!
//! ## Subcommands
//!
//! - `transform`: normalize a course export (the default when no
//!   subcommand is given)
//! - `tables`: print the compiled-in course-type and subject tables
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here. Record semantics live in the library
//!   crates.
//! - Handlers return an exit code or an `anyhow::Error` with context.

pub mod tables;
pub mod transform;
