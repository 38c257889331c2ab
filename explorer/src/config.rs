//! Explorer configuration loaded via OrthoConfig, with command-line
//! overrides parsed by clap.
//!
//! Environment variables use the `BLOOM_` prefix. A flag given on the command
//! line always wins over its environment counterpart.

use std::ffi::OsString;
use std::path::PathBuf;

use bloom_data::CANONICAL_SEED;
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::ExplorerError;

/// Settings read from the environment.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOOM")]
pub struct ExplorerSettings {
    /// Dataset seed.
    pub seed: Option<u32>,
    /// Filter query string in the bookmarkable URL format.
    pub query: Option<String>,
    /// Maximum number of companies to print.
    pub limit: Option<usize>,
    /// Print insight aggregates instead of companies.
    #[ortho_config(default = false)]
    pub summary: bool,
    /// Export file path; stdout when absent.
    pub output: Option<PathBuf>,
}

impl ExplorerSettings {
    /// Loads settings from the environment only.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ExplorerError> {
        Self::load_from_iter([OsString::from("bloom-explorer")]).map_err(|err| {
            ExplorerError::Config {
                message: err.to_string(),
            }
        })
    }

    /// Return the configured seed, falling back to the canonical seed.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or(CANONICAL_SEED)
    }

    /// Return the configured query, falling back to no filters.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }
}

/// `bloom-explorer` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "bloom-explorer",
    about = "Evaluate a bookmarkable filter query against the Bloom company directory",
    version
)]
pub struct CliArgs {
    /// Dataset seed. Overrides `BLOOM_SEED`.
    #[arg(long, value_name = "u32")]
    pub seed: Option<u32>,
    /// Filter query string, e.g. `cat=Florist%2CNursery&fmin=2005`.
    #[arg(long, value_name = "query")]
    pub query: Option<String>,
    /// Maximum number of companies to print. Overrides `BLOOM_LIMIT`.
    #[arg(long, value_name = "n")]
    pub limit: Option<usize>,
    /// Print insight aggregates instead of companies.
    #[arg(long)]
    pub summary: bool,
    /// Write the report atomically to this file instead of stdout.
    #[arg(long, value_name = "path")]
    pub output: Option<PathBuf>,
}

/// Fully resolved options for one explorer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerOptions {
    /// Dataset seed.
    pub seed: u32,
    /// Filter query string.
    pub query: String,
    /// Maximum number of companies to print.
    pub limit: Option<usize>,
    /// Print insight aggregates instead of companies.
    pub summary: bool,
    /// Export file path.
    pub output: Option<Utf8PathBuf>,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            seed: CANONICAL_SEED,
            query: String::new(),
            limit: None,
            summary: false,
            output: None,
        }
    }
}

impl ExplorerOptions {
    /// Merges command-line arguments over environment settings.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::NonUtf8Output`] when the export path is not
    /// valid UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use bloom_explorer::{CliArgs, ExplorerOptions, ExplorerSettings};
    ///
    /// let settings = ExplorerSettings {
    ///     seed: Some(7),
    ///     query: Some("cat=Grower".to_owned()),
    ///     limit: None,
    ///     summary: false,
    ///     output: None,
    /// };
    /// let cli = CliArgs {
    ///     seed: Some(9),
    ///     ..CliArgs::default()
    /// };
    ///
    /// let options = ExplorerOptions::resolve(cli, &settings).expect("valid options");
    /// assert_eq!(options.seed, 9);
    /// assert_eq!(options.query, "cat=Grower");
    /// ```
    pub fn resolve(cli: CliArgs, settings: &ExplorerSettings) -> Result<Self, ExplorerError> {
        let output = cli
            .output
            .or_else(|| settings.output.clone())
            .map(|path| {
                Utf8PathBuf::try_from(path)
                    .map_err(|err| ExplorerError::NonUtf8Output { path: err.into_path_buf() })
            })
            .transpose()?;
        Ok(Self {
            seed: cli.seed.unwrap_or_else(|| settings.seed()),
            query: cli.query.unwrap_or_else(|| settings.query().to_owned()),
            limit: cli.limit.or(settings.limit),
            summary: cli.summary || settings.summary,
            output,
        })
    }
}
