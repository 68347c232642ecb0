//! # daad CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Running `daad` with no subcommand performs a default `transform`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daad_cli::tables::{run_tables, TablesArgs};
use daad_cli::transform::{run_transform, TransformArgs};

/// DAAD course export normalizer.
///
/// Converts the raw course export into the flat collection consumed by the
/// course browser, resolving course types and subjects along the way.
#[derive(Parser, Debug)]
#[command(name = "daad", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize a course export into the presentation collection.
    Transform(TransformArgs),

    /// Print the built-in reference tables.
    Tables(TablesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout may carry the transformed document.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "daad CLI starting");

    let result = match cli.command {
        Some(Commands::Transform(args)) => run_transform(&args),
        Some(Commands::Tables(args)) => run_tables(&args),
        None => run_transform(&TransformArgs::default()),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daad_cli::tables::Table;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["daad"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_transform_defaults() {
        let cli = Cli::try_parse_from(["daad", "transform"]).unwrap();
        if let Some(Commands::Transform(args)) = cli.command {
            assert_eq!(args.input, PathBuf::from("./daad_data.json"));
            assert_eq!(args.output, PathBuf::from("./transformed_daac_data.json"));
            assert_eq!(args.indent, 4);
            assert!(!args.unicode);
        } else {
            panic!("expected Transform command");
        }
    }

    #[test]
    fn cli_parse_transform_flags() {
        let cli = Cli::try_parse_from([
            "daad", "transform", "-i", "in.json", "-o", "-", "--indent", "2", "--unicode",
        ])
        .unwrap();
        if let Some(Commands::Transform(args)) = cli.command {
            assert_eq!(args.input, PathBuf::from("in.json"));
            assert_eq!(args.output, PathBuf::from("-"));
            assert_eq!(args.indent, 2);
            assert!(args.unicode);
        } else {
            panic!("expected Transform command");
        }
    }

    #[test]
    fn cli_parse_verbose_is_global() {
        let cli = Cli::try_parse_from(["daad", "transform", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parse_tables() {
        let cli = Cli::try_parse_from(["daad", "tables", "subjects", "--json"]).unwrap();
        if let Some(Commands::Tables(args)) = cli.command {
            assert_eq!(args.table, Table::Subjects);
            assert!(args.json);
        } else {
            panic!("expected Tables command");
        }
    }

    #[test]
    fn cli_rejects_unknown_table() {
        assert!(Cli::try_parse_from(["daad", "tables", "cities"]).is_err());
    }

    #[test]
    fn cli_rejects_non_numeric_indent() {
        assert!(Cli::try_parse_from(["daad", "transform", "--indent", "wide"]).is_err());
    }
}
