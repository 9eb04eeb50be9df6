//! # Pricing Engine
//!
//! Charge and volume credits for a single performance of a play.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TRAGEDY                                                                │
//! │    $400.00                                                              │
//! │    + $10.00 per seat above 30                                           │
//! │                                                                         │
//! │  COMEDY                                                                 │
//! │    $300.00                                                              │
//! │    + $100.00 + $5.00 per seat above 20   (only when audience > 20)      │
//! │    + $3.00 per seat                      (always)                       │
//! │                                                                         │
//! │  VOLUME CREDITS                                                         │
//! │    1 per seat above 30                                                  │
//! │    + 1 per 5 seats (floor)               (comedy only)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is integer arithmetic; the result depends only on the inputs.

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Genre, Performance, Play};

// =============================================================================
// Pricing Constants
// =============================================================================

pub const TRAGEDY_BASE: Money = Money::from_cents(40_000);
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;
pub const TRAGEDY_PER_EXTRA_SEAT: Money = Money::from_cents(1_000);

pub const COMEDY_BASE: Money = Money::from_cents(30_000);
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;
pub const COMEDY_LARGE_AUDIENCE_BONUS: Money = Money::from_cents(10_000);
pub const COMEDY_PER_EXTRA_SEAT: Money = Money::from_cents(500);
pub const COMEDY_PER_SEAT: Money = Money::from_cents(300);

/// Seats above this count earn one credit each, whatever the genre.
pub const CREDIT_AUDIENCE_THRESHOLD: u32 = 30;

/// Comedies earn one extra credit per this many seats.
pub const COMEDY_CREDIT_DIVISOR: u32 = 5;

// =============================================================================
// Charges
// =============================================================================

/// Computes the charge for one performance.
///
/// ## Errors
/// `CoreError::UnknownGenre` when the play's genre tag has no formula.
///
/// ## Example
/// ```rust
/// use encore_core::pricing::amount_for;
/// use encore_core::types::{Genre, Performance, Play};
///
/// let hamlet = Play::new("Hamlet", Genre::Tragedy);
/// let amount = amount_for(&hamlet, &Performance::new("hamlet", 55)).unwrap();
/// assert_eq!(amount.cents(), 65_000);
/// ```
pub fn amount_for(play: &Play, performance: &Performance) -> CoreResult<Money> {
    let audience = performance.audience;

    let amount = match play.genre()? {
        Genre::Tragedy => {
            let mut result = TRAGEDY_BASE;
            if audience > TRAGEDY_AUDIENCE_THRESHOLD {
                result += TRAGEDY_PER_EXTRA_SEAT
                    .multiply_quantity(i64::from(audience - TRAGEDY_AUDIENCE_THRESHOLD));
            }
            result
        }
        Genre::Comedy => {
            let mut result = COMEDY_BASE;
            if audience > COMEDY_AUDIENCE_THRESHOLD {
                result += COMEDY_LARGE_AUDIENCE_BONUS
                    + COMEDY_PER_EXTRA_SEAT
                        .multiply_quantity(i64::from(audience - COMEDY_AUDIENCE_THRESHOLD));
            }
            // Applies to every comedy, not only large audiences.
            result += COMEDY_PER_SEAT.multiply_quantity(i64::from(audience));
            result
        }
    };

    Ok(amount)
}

// =============================================================================
// Volume Credits
// =============================================================================

/// Computes the volume credits earned by one performance.
///
/// ## Errors
/// `CoreError::UnknownGenre` when the play's genre tag has no formula, so a
/// bad catalog entry fails the same way for charges and credits.
///
/// ## Example
/// ```rust
/// use encore_core::pricing::volume_credits_for;
/// use encore_core::types::{Genre, Performance, Play};
///
/// let as_like = Play::new("As You Like It", Genre::Comedy);
/// let credits = volume_credits_for(&as_like, &Performance::new("as-like", 35)).unwrap();
/// assert_eq!(credits, 5 + 7);
/// ```
pub fn volume_credits_for(play: &Play, performance: &Performance) -> CoreResult<u64> {
    let audience = performance.audience;

    let mut credits = u64::from(audience.saturating_sub(CREDIT_AUDIENCE_THRESHOLD));
    if play.genre()? == Genre::Comedy {
        credits += u64::from(audience / COMEDY_CREDIT_DIVISOR);
    }

    Ok(credits)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use proptest::prelude::*;

    fn tragedy() -> Play {
        Play::new("Hamlet", Genre::Tragedy)
    }

    fn comedy() -> Play {
        Play::new("As You Like It", Genre::Comedy)
    }

    fn seats(audience: u32) -> Performance {
        Performance::new("any", audience)
    }

    #[test]
    fn test_tragedy_flat_up_to_threshold() {
        for audience in [0, 1, 29, 30] {
            assert_eq!(amount_for(&tragedy(), &seats(audience)).unwrap().cents(), 40_000);
        }
    }

    #[test]
    fn test_tragedy_above_threshold() {
        assert_eq!(amount_for(&tragedy(), &seats(31)).unwrap().cents(), 41_000);
        assert_eq!(amount_for(&tragedy(), &seats(55)).unwrap().cents(), 65_000);
        assert_eq!(amount_for(&tragedy(), &seats(40)).unwrap().cents(), 50_000);
    }

    #[test]
    fn test_comedy_seat_surcharge_applies_below_threshold() {
        assert_eq!(amount_for(&comedy(), &seats(0)).unwrap().cents(), 30_000);
        assert_eq!(amount_for(&comedy(), &seats(10)).unwrap().cents(), 33_000);
        assert_eq!(amount_for(&comedy(), &seats(20)).unwrap().cents(), 36_000);
    }

    #[test]
    fn test_comedy_above_threshold() {
        // 30000 + 10000 + 500*15 + 300*35
        assert_eq!(amount_for(&comedy(), &seats(35)).unwrap().cents(), 58_000);
        // 30000 + 10000 + 500*1 + 300*21
        assert_eq!(amount_for(&comedy(), &seats(21)).unwrap().cents(), 46_800);
    }

    #[test]
    fn test_unknown_genre_fails() {
        let history = Play::with_tag("Henry V", "history");
        assert_eq!(
            amount_for(&history, &seats(10)),
            Err(CoreError::UnknownGenre("history".to_string()))
        );
        assert_eq!(
            volume_credits_for(&history, &seats(10)),
            Err(CoreError::UnknownGenre("history".to_string()))
        );
    }

    #[test]
    fn test_credits() {
        assert_eq!(volume_credits_for(&tragedy(), &seats(55)).unwrap(), 25);
        assert_eq!(volume_credits_for(&tragedy(), &seats(30)).unwrap(), 0);
        assert_eq!(volume_credits_for(&tragedy(), &seats(0)).unwrap(), 0);
        assert_eq!(volume_credits_for(&comedy(), &seats(35)).unwrap(), 12);
        assert_eq!(volume_credits_for(&comedy(), &seats(4)).unwrap(), 0);
        assert_eq!(volume_credits_for(&comedy(), &seats(9)).unwrap(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Tragedy charge is flat to 30 seats, then grows by $10 a seat.
        #[test]
        fn tragedy_step_function(audience in 0u32..10_000) {
            let amount = amount_for(&tragedy(), &seats(audience)).unwrap().cents();
            let next = amount_for(&tragedy(), &seats(audience + 1)).unwrap().cents();

            prop_assert!(next >= amount);
            if audience < 30 {
                prop_assert_eq!(next, 40_000);
            } else {
                prop_assert_eq!(next - amount, 1_000);
            }
        }

        #[test]
        fn comedy_closed_form(audience in 0u32..10_000) {
            let a = i64::from(audience);
            let expected = if audience <= 20 {
                30_000 + 300 * a
            } else {
                30_000 + 10_000 + 500 * (a - 20) + 300 * a
            };
            prop_assert_eq!(amount_for(&comedy(), &seats(audience)).unwrap().cents(), expected);
        }

        #[test]
        fn credits_closed_form(audience in 0u32..10_000) {
            let base = u64::from(audience.saturating_sub(30));
            prop_assert_eq!(volume_credits_for(&tragedy(), &seats(audience)).unwrap(), base);
            prop_assert_eq!(
                volume_credits_for(&comedy(), &seats(audience)).unwrap(),
                base + u64::from(audience) / 5
            );
        }
    }
}
