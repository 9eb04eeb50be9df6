//! # encore
//!
//! Prints billing statements for theater invoices.
//!
//! ## Usage
//! ```bash
//! # Bigco sample statement
//! cargo run -p encore-cli
//!
//! # Bill your own data
//! cargo run -p encore-cli -- --invoice invoices.json --plays plays.json
//!
//! # Structured output
//! ENCORE_FORMAT=json cargo run -p encore-cli
//! ```

use std::io::{self, Write};

use clap::Parser;
use encore_cli::config::{AppConfig, CliArgs};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    encore_cli::init_tracing();

    let args = CliArgs::parse();
    let config = AppConfig::load()?.with_args(args);
    info!(
        invoice = ?config.invoice_path,
        plays = ?config.plays_path,
        format = %config.format,
        "Configuration loaded"
    );

    let output = encore_cli::run(&config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
