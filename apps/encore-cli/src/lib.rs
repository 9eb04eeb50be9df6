//! # encore-cli
//!
//! Command-line host for encore-core.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  flags / ENCORE_* env ──► AppConfig                                     │
//! │                              │                                          │
//! │        invoice.json ─────────┼──► Vec<Invoice>                          │
//! │        plays.json ───────────┼──► PlayCatalog (shared, read-only)       │
//! │                              ▼                                          │
//! │                   encore_core::build_statement (per invoice)            │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                  text statements │ JSON array ──► stdout               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so stdout carries only the statements.

pub mod config;
pub mod error;
pub mod loader;

use encore_core::sample::{sample_catalog, sample_invoice};
use encore_core::{build_statement, render_text, Statement};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, OutputFormat};
use crate::error::{AppError, AppResult};
use crate::loader::{load_catalog, load_invoices};

/// Initialize tracing for the process, filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Bills every invoice and returns the complete stdout payload.
///
/// Nothing is returned if any invoice fails to bill.
pub fn run(config: &AppConfig) -> AppResult<String> {
    let invoices = match &config.invoice_path {
        Some(path) => load_invoices(path)?,
        None => vec![sample_invoice()],
    };
    let catalog = match &config.plays_path {
        Some(path) => load_catalog(path)?,
        None => sample_catalog(),
    };

    let statements = invoices
        .iter()
        .map(|invoice| -> AppResult<Statement> {
            let statement = build_statement(invoice, &catalog).inspect_err(|err| {
                tracing::error!(customer = %invoice.customer, error = %err, "Billing failed");
            })?;
            tracing::info!(
                customer = %statement.customer,
                lines = statement.line_items.len(),
                amount_cents = statement.total_amount_cents,
                credits = statement.total_volume_credits,
                "Statement built"
            );
            Ok(statement)
        })
        .collect::<AppResult<Vec<_>>>()?;

    match config.format {
        OutputFormat::Text => Ok(statements.iter().map(render_text).collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&statements).map_err(AppError::Serialize)?;
            json.push('\n');
            Ok(json)
        }
    }
}
