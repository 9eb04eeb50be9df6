//! # Error Types
//!
//! Domain-specific error types for encore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  encore-core errors (this file)                                        │
//! │  └── CoreError        - Catalog lookups and genre resolution           │
//! │                                                                         │
//! │  encore-cli errors (app)                                               │
//! │  └── AppError         - File, JSON and config failures + CoreError     │
//! │                                                                         │
//! │  Flow: CoreError → AppError → non-zero exit                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both variants are fatal for the statement being computed: the first one
//! encountered aborts the run and no partial statement is returned.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core billing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A play carries a genre tag that has no pricing formula.
    ///
    /// ## When This Occurs
    /// - Catalog entry with `"type": "history"` (or any unrecognized tag)
    /// - Raised while pricing the first performance of that play
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    /// A performance references a play identifier missing from the catalog.
    #[error("Unknown play: {0}")]
    UnknownPlay(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
