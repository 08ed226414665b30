// report/src/cli.rs

use anyhow::Result;
use clap::Parser;
use std::{io::Write, path::PathBuf};
use tracing::{debug, info};

use crate::{schema::REPORT_SCHEMA, validate::ReportValidator};

pub const DEFAULT_REPORT_PATH: &str = "todo_report.json";

#[derive(Parser, Debug)]
#[command(name = "validate-report", version, about = "Check a TODO report JSON file against the fixed item schema")]
pub struct Args {
    /// Report file to validate
    #[arg(default_value = DEFAULT_REPORT_PATH)]
    pub path: PathBuf,
    /// Print the report JSON Schema and exit
    #[arg(long)]
    pub print_schema: bool,
}

/// Process exit status for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus { Valid, Invalid }

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
        }
    }
}

/// Validates `args.path` and writes the single verdict line to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<ExitStatus> {
    if args.print_schema {
        writeln!(out, "{}", REPORT_SCHEMA.trim_end())?;
        return Ok(ExitStatus::Valid);
    }
    debug!(path = %args.path.display(), "validating");
    match ReportValidator::new().validate_path(&args.path) {
        Ok(outcome) => {
            info!(items = outcome.items(), "report valid");
            writeln!(out, "{}", outcome.message())?;
            Ok(ExitStatus::Valid)
        }
        Err(e) => {
            info!(index = ?e.index(), "report invalid");
            writeln!(out, "Error: {e}")?;
            Ok(ExitStatus::Invalid)
        }
    }
}
