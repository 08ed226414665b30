use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};

use todo_report_validator::ReportValidator;

#[derive(Parser)]
#[command(name = "xtask", about = "Report validator workspace tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Validate a report JSON file against schemas/todo_report.schema.json and the built-in checker
    CheckSchema { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::CheckSchema { file } => check_schema(&file),
    }
}

fn check_schema(path: &PathBuf) -> Result<()> {
    let schema: serde_json::Value = serde_json::from_str(todo_report_validator::REPORT_SCHEMA)?;
    let compiled = jsonschema::validator_for(&schema)?;
    let data_text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let data: serde_json::Value = serde_json::from_str(&data_text).with_context(|| "parse json")?;

    let errors: Vec<_> = compiled.iter_errors(&data).collect();
    let builtin = ReportValidator::new().validate_value(&data);
    if !errors.is_empty() || builtin.is_err() {
        eprintln!("Invalid: {}", path.display());
        for e in errors {
            eprintln!("- {}", e);
        }
        if let Err(e) = builtin {
            eprintln!("- checker: {}", e);
        }
        std::process::exit(1);
    }
    println!("OK: {}", path.display());
    Ok(())
}
