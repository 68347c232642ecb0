//! # Transform Subcommand
//!
//! Normalizes a DAAD course export into the presentation-layer collection.
//!
//! ```bash
//! # Default file names in the current directory:
//! daad transform
//!
//! # Explicit paths, raw UTF-8 output with two-space indent:
//! daad transform --input export.json --output public/courses.json --indent 2 --unicode
//!
//! # Stream from stdin to stdout:
//! cat export.json | daad transform --input - --output -
//! ```

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use daad_core::ReferenceTables;
use daad_transform::config::{DEFAULT_INDENT, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use daad_transform::{
    create_destination, open_source, read_courses, transform_courses, write_courses,
    OutputOptions, TransformConfig, TransformReport,
};

/// Path argument that selects stdin or stdout.
const STDIO_PATH: &str = "-";

/// Arguments for the transform subcommand.
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Source document with a top-level "courses" array ("-" for stdin).
    #[arg(long, short, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Destination for the normalized array ("-" for stdout).
    #[arg(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Spaces per indentation level.
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Write non-ASCII characters as-is instead of \uXXXX escapes.
    #[arg(long)]
    pub unicode: bool,
}

impl Default for TransformArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            indent: DEFAULT_INDENT,
            unicode: false,
        }
    }
}

impl TransformArgs {
    /// Build the library configuration from the parsed flags.
    pub fn to_config(&self) -> TransformConfig {
        TransformConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            output_options: OutputOptions {
                indent: self.indent,
                ensure_ascii: !self.unicode,
            },
        }
    }
}

/// Execute the transform subcommand.
pub fn run_transform(args: &TransformArgs) -> Result<u8> {
    let config = args.to_config();
    let report = if is_stdio(&config.input) || is_stdio(&config.output) {
        run_with_stdio(&config, io::stdin().lock(), io::stdout().lock())?
    } else {
        daad_transform::run(&config).with_context(|| {
            format!(
                "failed to transform {} into {}",
                config.input.display(),
                config.output.display()
            )
        })?
    };

    if report.skipped_invalid > 0 {
        tracing::warn!(
            skipped = report.skipped_invalid,
            "some course entries were not objects and were skipped"
        );
    }

    if !is_stdio(&config.output) {
        println!(
            "Data transformation complete. The transformed data is saved in '{}'.",
            config.output.display()
        );
    }
    Ok(0)
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Run with either end bound to a standard stream. The whole input is read
/// before the destination is opened, so bad input never truncates an
/// existing file.
fn run_with_stdio<R: Read, W: Write>(
    config: &TransformConfig,
    stdin: R,
    mut stdout: W,
) -> Result<TransformReport> {
    let entries = if is_stdio(&config.input) {
        read_courses(stdin).context("failed to read course document from stdin")?
    } else {
        read_courses(open_source(&config.input)?).with_context(|| {
            format!("failed to read course document {}", config.input.display())
        })?
    };

    let report = transform_courses(entries, &ReferenceTables::STANDARD);

    if is_stdio(&config.output) {
        write_courses(&mut stdout, &report.courses, &config.output_options)?;
        writeln!(stdout)?;
        stdout.flush()?;
    } else {
        let mut writer = create_destination(&config.output)?;
        write_courses(&mut writer, &report.courses, &config.output_options)?;
        writer.flush()?;
    }
    Ok(report)
}
