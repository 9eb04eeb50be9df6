//! # encore-core: Pure Billing Logic for Encore
//!
//! Prices theater performances, accrues volume credits and renders customer
//! statements. Every function is pure: no I/O, no clock, no shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Encore Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    encore-cli (host)                            │   │
//! │  │    invoice.json + plays.json ──► core ──► stdout                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ encore-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │─►│ statement │─►│  render   │  │   money   │  │   │
//! │  │   │ amount    │  │ LineItem  │  │  text     │  │  cents    │  │   │
//! │  │   │ credits   │  │ totals    │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Play, PlayCatalog, Invoice, LineItem, Statement
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Per-performance charge and volume credits
//! - [`statement`] - Aggregation of an invoice into a statement
//! - [`render`] - Plain-text statement
//! - [`sample`] - The Bigco reference invoice and catalog
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use encore_core::{render_text, build_statement};
//! use encore_core::sample::{sample_catalog, sample_invoice};
//!
//! let statement = build_statement(&sample_invoice(), &sample_catalog()).unwrap();
//! let text = render_text(&statement);
//!
//! assert!(text.starts_with("Statement for Bigco\n"));
//! assert!(text.contains("Amount owed is $1730.00\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod render;
pub mod sample;
pub mod statement;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use pricing::{amount_for, volume_credits_for};
pub use render::render_text;
pub use statement::build_statement;
pub use types::*;
