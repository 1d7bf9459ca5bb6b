//! Command-line entry point for the declaration generator.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tsdgen::{GenerateError, generate, load_definitions};

#[derive(Parser, Debug)]
#[command(
    name = "tsdgen",
    version,
    about = "Generate a TypeScript declaration file from JSON widget API definitions"
)]
struct Cli {
    /// Definition documents: JSON files, or directories searched recursively
    #[arg(value_name = "PATH", required = true)]
    inputs: Vec<PathBuf>,

    /// Version token substituted into the generated preamble
    #[arg(long = "lib-version", value_name = "VERSION", default_value = "0.0.0")]
    lib_version: String,

    /// Output file; the generated document is printed to stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), GenerateError> {
    let mut set = load_definitions(&cli.inputs)?;
    info!(components = set.len(), "Loaded widget definitions.");

    let document = generate(&mut set, &cli.lib_version)?;

    match &cli.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &document)?;
            info!(out = %path.display(), bytes = document.len(), "Declaration file written.");
        }
        None => {
            std::io::stdout().write_all(document.as_bytes())?;
        }
    }
    Ok(())
}
