//! `bloom-explorer` entry point.
//!
//! Wires logging and configuration, then delegates to
//! [`bloom_explorer::run`].

use std::io::{self, Write};
use std::process::ExitCode;

use bloom_explorer::{CliArgs, ExplorerError, ExplorerOptions, ExplorerSettings, run};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = CliArgs::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: CliArgs) -> Result<(), ExplorerError> {
    let settings = ExplorerSettings::from_env()?;
    let options = ExplorerOptions::resolve(cli, &settings)?;
    let outcome = run(&options, io::stdout().lock())?;
    info!(
        total_matches = outcome.total_matches,
        destination = ?outcome.destination,
        "explorer run complete"
    );
    Ok(())
}
