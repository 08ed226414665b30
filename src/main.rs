// report/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_report_validator::cli::{run, Args};

fn main() -> anyhow::Result<()> {
    // stdout carries only the verdict line; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let status = run(&args, &mut std::io::stdout().lock())?;
    std::process::exit(status.code());
}
