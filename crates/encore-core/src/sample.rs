//! # Sample Data
//!
//! The Bigco invoice and its three-play catalog. Used as the default input
//! of the command-line host and as the reference scenario in tests.

use crate::types::{Genre, Invoice, Performance, Play, PlayCatalog};

/// Bigco's invoice: Hamlet (55), As You Like It (35), Othello (40).
pub fn sample_invoice() -> Invoice {
    Invoice {
        customer: "Bigco".to_string(),
        performances: vec![
            Performance::new("hamlet", 55),
            Performance::new("as-like", 35),
            Performance::new("othello", 40),
        ],
    }
}

/// Catalog covering every play in [`sample_invoice`].
pub fn sample_catalog() -> PlayCatalog {
    [
        ("hamlet", Play::new("Hamlet", Genre::Tragedy)),
        ("as-like", Play::new("As You Like It", Genre::Comedy)),
        ("othello", Play::new("Othello", Genre::Tragedy)),
    ]
    .into_iter()
    .collect()
}
