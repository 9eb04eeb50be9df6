//! # Statement Aggregation
//!
//! Turns an invoice and a play catalog into a priced `Statement`.
//!
//! ## Flow
//! ```text
//! Invoice.performances ──► resolve play ──► amount_for / volume_credits_for
//!                                                    │
//!                                                    ▼
//!                                          LineItem (same order)
//!                                                    │
//!                                                    ▼
//!                              totals summed from the finished line items
//! ```
//!
//! The first unknown play or genre aborts the whole statement.

use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::{amount_for, volume_credits_for};
use crate::types::{Invoice, LineItem, Performance, PlayCatalog, Statement};

/// Prices every performance of the invoice and totals the result.
///
/// ## Errors
/// - `CoreError::UnknownPlay` for a performance whose play is not catalogued
/// - `CoreError::UnknownGenre` for a catalogued play without a formula
///
/// ## Example
/// ```rust
/// use encore_core::sample::{sample_catalog, sample_invoice};
/// use encore_core::statement::build_statement;
///
/// let statement = build_statement(&sample_invoice(), &sample_catalog()).unwrap();
/// assert_eq!(statement.total_amount_cents, 173_000);
/// assert_eq!(statement.total_volume_credits, 47);
/// ```
pub fn build_statement(invoice: &Invoice, catalog: &PlayCatalog) -> CoreResult<Statement> {
    let line_items = invoice
        .performances
        .iter()
        .map(|performance| line_item_for(performance, catalog))
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(Statement {
        customer: invoice.customer.clone(),
        total_amount_cents: total_amount_for(&line_items).cents(),
        total_volume_credits: total_volume_credits_for(&line_items),
        line_items,
    })
}

/// Prices a single performance against the catalog.
pub fn line_item_for(performance: &Performance, catalog: &PlayCatalog) -> CoreResult<LineItem> {
    let play = catalog.resolve(&performance.play_id)?;

    Ok(LineItem {
        name: play.name.clone(),
        amount_cents: amount_for(play, performance)?.cents(),
        audience: performance.audience,
        volume_credits: volume_credits_for(play, performance)?,
    })
}

/// Sum of the line item charges.
pub fn total_amount_for(line_items: &[LineItem]) -> Money {
    line_items.iter().map(LineItem::amount).sum()
}

/// Sum of the line item volume credits.
pub fn total_volume_credits_for(line_items: &[LineItem]) -> u64 {
    line_items.iter().map(|item| item.volume_credits).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
