//! # Domain Types
//!
//! Core domain types used throughout Encore.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Reference data (read-only)        Billing input                        │
//! │  ┌─────────────────┐               ┌─────────────────┐                 │
//! │  │  PlayCatalog    │◄── play_id ───│   Performance   │                 │
//! │  │  id → Play      │               │  play_id        │                 │
//! │  │  name, genre    │               │  audience       │                 │
//! │  └─────────────────┘               └────────┬────────┘                 │
//! │                                             │ ordered                   │
//! │                                    ┌────────┴────────┐                 │
//! │                                    │    Invoice      │                 │
//! │                                    │  customer       │                 │
//! │                                    └─────────────────┘                 │
//! │                                                                         │
//! │  Derived output                                                         │
//! │  ┌─────────────────┐   one per performance   ┌─────────────────┐       │
//! │  │   Statement     │◄────────────────────────│    LineItem     │       │
//! │  │  totals         │                         │  amount, seats  │       │
//! │  └─────────────────┘                         │  credits        │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## JSON Shape
//! Catalogs and invoices use the field names of the billing feed:
//! `{"hamlet": {"name": "Hamlet", "type": "tragedy"}}` and
//! `{"customer": "Bigco", "performances": [{"playID": "hamlet", "audience": 55}]}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Genre
// =============================================================================

/// Classification of a play; selects its pricing formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    /// The tag used for this genre in catalog data.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl FromStr for Genre {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(CoreError::UnknownGenre(other.to_string())),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Play
// =============================================================================

/// A play as listed in the catalog.
///
/// The genre is kept as the raw catalog tag. A catalog may list a genre
/// without a pricing formula; that only becomes an error once a performance
/// of the play is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Play {
    /// Display name printed on the statement.
    pub name: String,

    /// Genre tag, e.g. "tragedy".
    #[serde(rename = "type")]
    pub genre_tag: String,
}

impl Play {
    /// Creates a play with a known genre.
    pub fn new(name: impl Into<String>, genre: Genre) -> Self {
        Play {
            name: name.into(),
            genre_tag: genre.as_str().to_string(),
        }
    }

    /// Creates a play from a raw genre tag, which may be unrecognized.
    pub fn with_tag(name: impl Into<String>, genre_tag: impl Into<String>) -> Self {
        Play {
            name: name.into(),
            genre_tag: genre_tag.into(),
        }
    }

    /// Resolves the genre tag.
    ///
    /// ## Errors
    /// `CoreError::UnknownGenre` carrying the tag when it has no formula.
    pub fn genre(&self) -> CoreResult<Genre> {
        self.genre_tag.parse()
    }
}

// =============================================================================
// Play Catalog
// =============================================================================

/// Mapping from play identifier to play.
///
/// Read-only during statement generation, so a single catalog can be shared
/// by any number of concurrent billing runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayCatalog(BTreeMap<String, Play>);

impl PlayCatalog {
    pub fn new() -> Self {
        PlayCatalog(BTreeMap::new())
    }

    /// Adds or replaces a play, returning the previous entry.
    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) -> Option<Play> {
        self.0.insert(play_id.into(), play)
    }

    pub fn get(&self, play_id: &str) -> Option<&Play> {
        self.0.get(play_id)
    }

    /// Looks up a play, failing with `CoreError::UnknownPlay` when absent.
    pub fn resolve(&self, play_id: &str) -> CoreResult<&Play> {
        self.get(play_id)
            .ok_or_else(|| CoreError::UnknownPlay(play_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Play)> {
        self.0.iter().map(|(id, play)| (id.as_str(), play))
    }
}

impl<K: Into<String>> FromIterator<(K, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        PlayCatalog(
            iter.into_iter()
                .map(|(id, play)| (id.into(), play))
                .collect(),
        )
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// One billed performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Performance {
    /// Catalog key of the performed play.
    #[serde(rename = "playID")]
    pub play_id: String,

    /// Seats filled.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice. Performance order is the line order on the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

// =============================================================================
// Statement
// =============================================================================

/// Priced performance, one per `Performance` of the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Play display name.
    pub name: String,

    /// Charge in cents.
    pub amount_cents: i64,

    pub audience: u32,

    #[ts(type = "number")]
    pub volume_credits: u64,
}

impl LineItem {
    /// Returns the charge as Money.
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

/// Fully derived billing statement for one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Statement {
    pub customer: String,

    pub line_items: Vec<LineItem>,

    /// Sum of every line item's `amount_cents`.
    pub total_amount_cents: i64,

    /// Sum of every line item's `volume_credits`.
    #[ts(type = "number")]
    pub total_volume_credits: u64,
}

impl Statement {
    /// Returns the amount owed as Money.
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
