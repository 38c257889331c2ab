//! Error types for the explorer.

use std::io;
use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export path does not name a file.
    #[error("export path '{path}' must name a file")]
    NotAFile {
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// The export directory could not be opened.
    #[error("failed to open export directory '{path}': {message}")]
    OpenDirectory {
        /// Directory that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error message.
        message: String,
    },
    /// Writing or renaming the export file failed.
    #[error("failed to write export '{path}': {message}")]
    Write {
        /// File that failed to write.
        path: Utf8PathBuf,
        /// Underlying I/O error message.
        message: String,
    },
}

/// Errors surfaced by an explorer run.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Environment configuration could not be loaded.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Loader error message.
        message: String,
    },
    /// The export path is not valid UTF-8.
    #[error("output path '{}' is not valid UTF-8", path.display())]
    NonUtf8Output {
        /// Offending path.
        path: PathBuf,
    },
    /// The report could not be rendered as JSON.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
    /// Writing the report to standard output failed.
    #[error("failed to write report: {0}")]
    Stdout(#[from] io::Error),
    /// Writing the export file failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
