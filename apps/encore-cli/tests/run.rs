//! End-to-end billing runs through the command-line host.

use std::io::Write;
use std::path::PathBuf;

use encore_cli::config::{AppConfig, OutputFormat};
use encore_cli::error::AppError;
use encore_cli::run;
use encore_core::{CoreError, Statement};
use tempfile::NamedTempFile;

const BIGCO: &str = "Statement for Bigco
  Hamlet: $650.00 (55 seats)
  As You Like It: $580.00 (35 seats)
  Othello: $500.00 (40 seats)
Amount owed is $1730.00
you earned 47 credits
";

const PLAYS: &str = r#"{
    "hamlet": {"name": "Hamlet", "type": "tragedy"},
    "as-like": {"name": "As You Like It", "type": "comedy"},
    "othello": {"name": "Othello", "type": "tragedy"},
    "henry-v": {"name": "Henry V", "type": "history"}
}"#;

const BIGCO_INVOICE: &str = r#"{
    "customer": "Bigco",
    "performances": [
        {"playID": "hamlet", "audience": 55},
        {"playID": "as-like", "audience": 35},
        {"playID": "othello", "audience": 40}
    ]
}"#;

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn config(invoice: Option<&NamedTempFile>, plays: Option<&NamedTempFile>) -> AppConfig {
    AppConfig {
        invoice_path: invoice.map(|f| f.path().to_path_buf()),
        plays_path: plays.map(|f| f.path().to_path_buf()),
        format: OutputFormat::Text,
    }
}

#[test]
fn default_run_bills_the_sample() {
    assert_eq!(run(&AppConfig::default()).unwrap(), BIGCO);
}

#[test]
fn bills_invoice_and_catalog_files() {
    let invoice = json_file(BIGCO_INVOICE);
    let plays = json_file(PLAYS);

    assert_eq!(run(&config(Some(&invoice), Some(&plays))).unwrap(), BIGCO);
}

#[test]
fn bills_each_invoice_of_an_array_in_order() {
    let invoice = json_file(
        r#"[
            {"customer": "Acme", "performances": [{"playID": "othello", "audience": 30}]},
            {"customer": "Globex", "performances": [{"playID": "as-like", "audience": 20}]}
        ]"#,
    );

    let output = run(&config(Some(&invoice), None)).unwrap();
    assert_eq!(
        output,
        "Statement for Acme\n  Othello: $400.00 (30 seats)\nAmount owed is $400.00\nyou earned 0 credits\n\
         Statement for Globex\n  As You Like It: $360.00 (20 seats)\nAmount owed is $360.00\nyou earned 4 credits\n"
    );
}

#[test]
fn unknown_play_fails_without_output() {
    let invoice = json_file(
        r#"{"customer": "Bigco", "performances": [
            {"playID": "hamlet", "audience": 55},
            {"playID": "unknown", "audience": 10}
        ]}"#,
    );

    let err = run(&config(Some(&invoice), None)).unwrap_err();
    assert!(matches!(
        err,
        AppError::Billing(CoreError::UnknownPlay(ref id)) if id == "unknown"
    ));
}

#[test]
fn unknown_genre_fails_without_output() {
    let invoice = json_file(
        r#"{"customer": "Bigco", "performances": [{"playID": "henry-v", "audience": 10}]}"#,
    );
    let plays = json_file(PLAYS);

    let err = run(&config(Some(&invoice), Some(&plays))).unwrap_err();
    assert!(matches!(
        err,
        AppError::Billing(CoreError::UnknownGenre(ref genre)) if genre == "history"
    ));
}

#[test]
fn json_output_is_structured_statements() {
    let cfg = AppConfig {
        format: OutputFormat::Json,
        ..AppConfig::default()
    };

    let output = run(&cfg).unwrap();
    let statements: Vec<Statement> = serde_json::from_str(&output).unwrap();

    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].customer, "Bigco");
    assert_eq!(statements[0].total_amount_cents, 173_000);
    assert_eq!(statements[0].total_volume_credits, 47);
}

#[test]
fn missing_file_is_an_io_error() {
    let cfg = AppConfig {
        invoice_path: Some(PathBuf::from("/nonexistent/encore/invoice.json")),
        ..AppConfig::default()
    };
    assert!(matches!(run(&cfg).unwrap_err(), AppError::Io { .. }));
}

#[test]
fn malformed_json_is_reported_with_path() {
    let plays = json_file("{ not json");
    let err = run(&config(None, Some(&plays))).unwrap_err();

    assert!(matches!(err, AppError::Json { .. }));
    assert!(err.to_string().contains(&plays.path().display().to_string()));
}
