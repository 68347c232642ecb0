//! # Tables Subcommand
//!
//! Prints the compiled-in reference tables, so the labels a transform will
//! produce can be checked without running one.
//!
//! ```bash
//! daad tables course-types
//! daad tables subjects --json
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use daad_core::{CourseType, SUBJECTS};

/// Tables subcommand arguments.
#[derive(Args, Debug)]
pub struct TablesArgs {
    #[command(subcommand)]
    pub table: Table,

    /// Print as JSON instead of aligned text.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available reference tables.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// Course-type codes and their labels.
    CourseTypes,
    /// Subject categories with their sub-subject ids and names.
    Subjects,
}

/// Execute the tables subcommand.
pub fn run_tables(args: &TablesArgs) -> Result<u8> {
    let text = match (args.table, args.json) {
        (Table::CourseTypes, false) => render_course_types(),
        (Table::Subjects, false) => render_subjects(),
        (Table::CourseTypes, true) => {
            let rows: Vec<_> = CourseType::all()
                .iter()
                .map(|t| json!({ "code": t.code(), "label": t.label() }))
                .collect();
            serde_json::to_string_pretty(&rows)?
        }
        (Table::Subjects, true) => serde_json::to_string_pretty(SUBJECTS)?,
    };
    println!("{text}");
    Ok(0)
}

fn render_course_types() -> String {
    CourseType::all()
        .iter()
        .map(|t| format!("{:>2}  {}", t.code(), t.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_subjects() -> String {
    let mut lines = Vec::new();
    for category in SUBJECTS {
        lines.push(category.name.to_string());
        for s in category.sub_subjects {
            lines.push(format!("  {:>2}  {}", s.id, s.name));
        }
    }
    lines.join("\n")
}
