//! # Input Loading
//!
//! Reads invoices and play catalogs from JSON files. An invoice file holds
//! either one invoice object or an array of them.

use std::fs;
use std::path::Path;

use encore_core::{Invoice, PlayCatalog};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum InvoiceFile {
    Many(Vec<Invoice>),
    One(Invoice),
}

/// Loads every invoice in the file, in file order.
pub fn load_invoices(path: &Path) -> AppResult<Vec<Invoice>> {
    let invoices = match read_json::<InvoiceFile>(path)? {
        InvoiceFile::Many(invoices) => invoices,
        InvoiceFile::One(invoice) => vec![invoice],
    };
    tracing::debug!(path = %path.display(), count = invoices.len(), "Invoices loaded");
    Ok(invoices)
}

/// Loads a play catalog.
pub fn load_catalog(path: &Path) -> AppResult<PlayCatalog> {
    let catalog: PlayCatalog = read_json(path)?;
    tracing::debug!(path = %path.display(), plays = catalog.len(), "Play catalog loaded");
    Ok(catalog)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}
