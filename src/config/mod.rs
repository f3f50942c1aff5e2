pub mod file;

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::today::{DEFAULT_ENDPOINTS, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::model::Language;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use file::FileConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "salshomar")]
#[command(about = "Bilingual age calculator and Gregorian/Jalali date converter")]
pub struct CliConfig {
    /// Interface language: en or fa
    #[arg(long)]
    pub lang: Option<Language>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Time API endpoint, tried in order; may be repeated or comma-separated
    #[arg(long = "time-endpoint", value_delimiter = ',')]
    pub time_endpoints: Vec<String>,

    /// Per-request timeout for the time API, in seconds
    #[arg(long)]
    pub http_timeout_secs: Option<u64>,

    /// Never query the network for the current date
    #[arg(long)]
    pub offline: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

/// Effective configuration after merging CLI flags over the optional file.
/// CLI values win; anything still unset falls to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub language: Language,
    pub endpoints: Vec<String>,
    pub timeout_seconds: u64,
    pub offline: bool,
    pub color: bool,
    pub verbose: bool,
}

impl Settings {
    pub fn load(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(FileConfig::from_file(path)?),
            None => None,
        };
        Ok(Self::merge(cli, file))
    }

    fn merge(cli: CliConfig, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();
        let general = file.general.unwrap_or_default();
        let time = file.time.unwrap_or_default();

        let endpoints = if !cli.time_endpoints.is_empty() {
            cli.time_endpoints
        } else {
            time.endpoints
                .unwrap_or_else(|| DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect())
        };

        Settings {
            language: cli.lang.or(general.language).unwrap_or(Language::Fa),
            endpoints,
            timeout_seconds: cli
                .http_timeout_secs
                .or(time.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            offline: cli.offline || time.offline.unwrap_or(false),
            color: !cli.no_color,
            verbose: cli.verbose,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("time.timeout_seconds", self.timeout_seconds, 1, 30)?;

        if !self.offline {
            if self.endpoints.is_empty() {
                return Err(AppError::ConfigError {
                    message: "at least one time endpoint is required unless offline".to_string(),
                });
            }
            for endpoint in &self.endpoints {
                validate_url("time.endpoints", endpoint)?;
            }
        }

        Ok(())
    }
}
