//! Batch transform configuration.
//!
//! Defaults reproduce the file names and output layout of the original
//! export tooling. The CLI overrides individual fields from its flags.

use std::path::PathBuf;

/// Default source document.
pub const DEFAULT_INPUT_PATH: &str = "./daad_data.json";

/// Default destination document.
pub const DEFAULT_OUTPUT_PATH: &str = "./transformed_daac_data.json";

/// Default indentation width of the written document.
pub const DEFAULT_INDENT: usize = 4;

/// How the normalized collection is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Write every non-ASCII character as a `\uXXXX` escape.
    pub ensure_ascii: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            ensure_ascii: true,
        }
    }
}

/// Configuration for one file-to-file run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    /// Source document with a top-level `courses` array.
    pub input: PathBuf,
    /// Destination for the normalized array. Missing parent directories
    /// are created.
    pub output: PathBuf,
    /// Output layout.
    pub output_options: OutputOptions,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_options: OutputOptions::default(),
        }
    }
}
