//! Command-line explorer over the Bloom company directory.
//!
//! The explorer generates the directory dataset, evaluates a bookmarkable
//! filter query against it and prints the result as JSON, either as a company
//! listing or as insight aggregates. The binary is a thin wrapper over
//! [`run`], which keeps the behaviour testable without spawning a process.

mod config;
mod error;
mod export;
mod report;

use std::io::Write;

use bloom_data::Dataset;
use camino::Utf8PathBuf;
use tracing::info;

pub use config::{CliArgs, ExplorerOptions, ExplorerSettings};
pub use error::{ExplorerError, ExportError};
pub use export::export_report;
pub use report::{Insights, Report, ReportBody, TOP_COUNTRIES, build_report};

/// Where a run's report ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Written to the supplied writer.
    Writer,
    /// Exported to a file.
    File(Utf8PathBuf),
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of companies that matched the filters.
    pub total_matches: usize,
    /// Where the report was written.
    pub destination: Destination,
}

/// Generates the dataset, evaluates the query and writes the report.
///
/// The report goes to `out` unless `options.output` names an export file.
///
/// # Errors
///
/// Returns [`ExplorerError`] when the report cannot be rendered or written.
///
/// # Example
///
/// ```
/// use bloom_explorer::{Destination, ExplorerOptions, run};
///
/// let options = ExplorerOptions {
///     query: "country=Kenya".to_owned(),
///     limit: Some(2),
///     ..ExplorerOptions::default()
/// };
/// let mut out = Vec::new();
///
/// let outcome = run(&options, &mut out).expect("run succeeds");
/// assert_eq!(outcome.destination, Destination::Writer);
/// assert!(String::from_utf8(out).expect("utf-8").contains("\"country\": \"Kenya\""));
/// ```
pub fn run<W: Write>(options: &ExplorerOptions, mut out: W) -> Result<RunOutcome, ExplorerError> {
    let dataset = Dataset::generate(options.seed);
    let report = build_report(&dataset, options);
    let rendered = serde_json::to_string_pretty(&report)?;

    let destination = match &options.output {
        Some(path) => {
            export_report(path, &rendered)?;
            info!(path = %path, "report exported");
            Destination::File(path.clone())
        }
        None => {
            writeln!(out, "{rendered}")?;
            out.flush()?;
            Destination::Writer
        }
    };

    Ok(RunOutcome {
        total_matches: report.total_matches,
        destination,
    })
}
