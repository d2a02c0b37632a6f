//! # Discount Strategies
//!
//! Price transformations that can be bound to a book or passed as an
//! override to a purchase.
//!
//! ## Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Percentage { micro_pct }                                               │
//! │                         round(price × (100% - pct)), half away from 0   │
//! │                         20% of $50.00 ──► $40.00                        │
//! │                                                                         │
//! │  Fixed { amount }       max(price - amount, 0)                          │
//! │                         $100 off $60.00 ──► $0.00                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parameters are checked once, at construction. A strategy value that
//! exists is always in range.

use serde::Serialize;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_discount_amount, validate_discount_bps, validate_percentage};

/// Millionths of a percent in one percent.
const MICRO_PER_PERCENT: u32 = 1_000_000;

/// A discount policy.
///
/// The policy itself is private; build values through
/// [`DiscountStrategy::percentage`], [`DiscountStrategy::percentage_bps`]
/// or [`DiscountStrategy::fixed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiscountStrategy(Policy);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Policy {
    /// Takes a share of the price off, in millionths of a percent
    /// (20_000_000 = 20%).
    Percentage { micro_pct: u32 },
    /// Takes a flat amount off, never going below zero.
    Fixed { amount: Money },
}

impl DiscountStrategy {
    /// Creates a percentage discount from a plain percentage (20.0 = 20%).
    ///
    /// Fractional percentages are kept to six decimal places, so 33.333%
    /// and 0.004% are applied as given.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::discount::DiscountStrategy;
    /// use bookstore_core::money::Money;
    ///
    /// let twenty_off = DiscountStrategy::percentage(20.0).unwrap();
    /// assert_eq!(twenty_off.apply(Money::from_cents(5000)).unwrap().cents(), 4000);
    ///
    /// assert!(DiscountStrategy::percentage(150.0).is_err());
    /// assert!(DiscountStrategy::percentage(-1.0).is_err());
    /// ```
    pub fn percentage(pct: f64) -> CoreResult<Self> {
        validate_percentage(pct)?;
        Ok(DiscountStrategy(Policy::Percentage {
            micro_pct: (pct * MICRO_PER_PERCENT as f64).round() as u32,
        }))
    }

    /// Creates a percentage discount from basis points (2000 = 20%).
    pub fn percentage_bps(bps: u32) -> CoreResult<Self> {
        validate_discount_bps(bps)?;
        Ok(DiscountStrategy(Policy::Percentage {
            micro_pct: bps * (MICRO_PER_PERCENT / 100),
        }))
    }

    /// Creates a fixed-amount discount.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::discount::DiscountStrategy;
    /// use bookstore_core::money::Money;
    ///
    /// let hundred_off = DiscountStrategy::fixed(Money::from_cents(10000)).unwrap();
    /// assert!(hundred_off.apply(Money::from_cents(6000)).unwrap().is_zero());
    ///
    /// assert!(DiscountStrategy::fixed(Money::from_cents(-500)).is_err());
    /// ```
    pub fn fixed(amount: Money) -> CoreResult<Self> {
        validate_discount_amount(amount)?;
        Ok(DiscountStrategy(Policy::Fixed { amount }))
    }

    /// Applies the discount to `price`.
    ///
    /// ## Errors
    /// [`CoreError::NegativePrice`] if `price` is negative, for either
    /// variant.
    pub fn apply(&self, price: Money) -> CoreResult<Money> {
        if price.is_negative() {
            return Err(CoreError::NegativePrice {
                cents: price.cents(),
            });
        }

        Ok(self.discounted(price))
    }

    /// Discount math without the price check. Callers must already know
    /// `price` is non-negative.
    pub(crate) fn discounted(&self, price: Money) -> Money {
        match self.0 {
            Policy::Percentage { micro_pct } => price.apply_percentage_discount(micro_pct),
            Policy::Fixed { amount } => (price - amount).floor_zero(),
        }
    }
}

impl fmt::Display for DiscountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Policy::Percentage { micro_pct } => {
                let whole = micro_pct / MICRO_PER_PERCENT;
                let frac = micro_pct % MICRO_PER_PERCENT;
                if frac == 0 {
                    write!(f, "{}% off", whole)
                } else {
                    let digits = format!("{:06}", frac);
                    write!(f, "{}.{}% off", whole, digits.trim_end_matches('0'))
                }
            }
            Policy::Fixed { amount } => write!(f, "{} off", amount),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
