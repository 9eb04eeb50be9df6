//! # Statement Rendering
//!
//! Plain-text form of a `Statement`. This layout is what customers receive,
//! so it is fixed:
//!
//! ```text
//! Statement for Bigco
//!   Hamlet: $650.00 (55 seats)
//!   As You Like It: $580.00 (35 seats)
//!   Othello: $500.00 (40 seats)
//! Amount owed is $1730.00
//! you earned 47 credits
//! ```
//!
//! Every line ends with `\n`. Rendering performs no I/O.

use std::fmt::Write;

use crate::error::CoreResult;
use crate::statement::build_statement;
use crate::types::{Invoice, PlayCatalog, Statement};

/// Renders a statement as text.
pub fn render_text(statement: &Statement) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Statement for {}", statement.customer);
    for item in &statement.line_items {
        let _ = writeln!(out, "  {}: {} ({} seats)", item.name, item.amount(), item.audience);
    }
    let _ = writeln!(out, "Amount owed is {}", statement.total_amount());
    let _ = writeln!(out, "you earned {} credits", statement.total_volume_credits);

    out
}

/// Builds and renders the statement for an invoice in one step.
///
/// ## Example
/// ```rust
/// use encore_core::render::statement;
/// use encore_core::sample::{sample_catalog, sample_invoice};
///
/// let text = statement(&sample_invoice(), &sample_catalog()).unwrap();
/// assert!(text.ends_with("you earned 47 credits\n"));
/// ```
pub fn statement(invoice: &Invoice, catalog: &PlayCatalog) -> CoreResult<String> {
    build_statement(invoice, catalog).map(|statement| render_text(&statement))
}
