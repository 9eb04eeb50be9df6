//! # Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--invoice`, `--plays`, `--format`)
//! 2. Environment variables (`ENCORE_*`)
//! 3. Defaults (built-in Bigco sample, text output)
//!
//! An input path left unset falls back to the matching half of the sample.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

pub const INVOICE_VAR: &str = "ENCORE_INVOICE";
pub const PLAYS_VAR: &str = "ENCORE_PLAYS";
pub const FORMAT_VAR: &str = "ENCORE_FORMAT";

/// How statements are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The customer-facing text statement
    #[default]
    Text,

    /// The structured statement as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(FORMAT_VAR.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Invoice JSON file (one invoice or an array of invoices)
    pub invoice_path: Option<PathBuf>,

    /// Play catalog JSON file
    pub plays_path: Option<PathBuf>,

    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env_map(&env::vars().collect())
    }

    /// Load configuration from an explicit variable map.
    pub fn from_env_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Ok(AppConfig {
            invoice_path: non_empty(vars, INVOICE_VAR).map(PathBuf::from),
            plays_path: non_empty(vars, PLAYS_VAR).map(PathBuf::from),
            format: non_empty(vars, FORMAT_VAR)
                .map(str::parse::<OutputFormat>)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Overlay command-line flags on top of this configuration.
    pub fn with_args(mut self, args: CliArgs) -> Self {
        if args.invoice.is_some() {
            self.invoice_path = args.invoice;
        }
        if args.plays.is_some() {
            self.plays_path = args.plays;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        self
    }
}

/// Blank values count as unset.
fn non_empty<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Command-line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "encore")]
#[command(about = "Render theater billing statements")]
#[command(version)]
pub struct CliArgs {
    /// Invoice JSON file (a single invoice or an array of invoices)
    #[arg(short, long)]
    pub invoice: Option<PathBuf>,

    /// Play catalog JSON file
    #[arg(short, long)]
    pub plays: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
