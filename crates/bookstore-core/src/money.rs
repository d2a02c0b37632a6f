//! # Money Module
//!
//! Provides the `Money` type for handling book prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    39.99 * 0.8 = 31.992000000000004                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    round(3999 × 80_000_000 / 100_000_000) = round(3199.2) = 3199 cents  │
//! │    Every intermediate value is exact; rounding happens once             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::money::Money;
//!
//! let price = Money::from_cents(3999); // $39.99
//! let sale = price - Money::from_cents(1000);
//! assert_eq!(sale.cents(), 2999);
//! ```

use serde::Serialize;
use std::fmt;
use std::ops::Sub;

use crate::MAX_DISCOUNT_MICRO_PCT;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: the fixed discount subtracts before flooring at zero,
///   so intermediate values may briefly go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// Book.price ──┬──► Book::final_price()       (bound discount)
///              │
///              └──► StoreManager::purchase_book ──► override discount
///                                                   ──► clamp ≥ 0
///                                                   ──► PaymentAuthorizer
///                                                   ──► "$39.99" in receipt
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let price = Money::from_cents(3999); // $39.99
    /// assert_eq!(price.cents(), 3999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_micro_pct` - Discount in millionths of a percent
    ///   (20_000_000 = 20%, 33_333_000 = 33.333%)
    ///
    /// Computes `price × (100% - discount)` exactly in i128 and rounds the
    /// result once, half away from zero, to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let price = Money::from_cents(5000); // $50.00
    /// assert_eq!(price.apply_percentage_discount(20_000_000).cents(), 4000);
    ///
    /// // 50% of $0.01 is half a cent, which rounds up
    /// assert_eq!(Money::from_cents(1).apply_percentage_discount(50_000_000).cents(), 1);
    /// ```
    pub fn apply_percentage_discount(&self, discount_micro_pct: u32) -> Money {
        let scale = MAX_DISCOUNT_MICRO_PCT as i128;
        let kept = scale - discount_micro_pct.min(MAX_DISCOUNT_MICRO_PCT) as i128;
        let exact = self.0 as i128 * kept;

        let magnitude = (exact.abs() + scale / 2) / scale;
        let cents = if exact < 0 { -magnitude } else { magnitude };
        Money::from_cents(cents as i64)
    }

    /// Returns `self`, or zero when `self` is negative.
    #[inline]
    pub fn floor_zero(self) -> Money {
        self.max(Money::zero())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as US dollars. Purchase receipts go through
/// [`CurrencyFormat`] instead so the symbol stays configurable.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Currency Formatting
// =============================================================================

/// Renders money for customer-facing text.
///
/// The store only knows cents; which symbol goes in front of them is a
/// presentation choice made by whoever builds the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyFormat {
    symbol: String,
}

impl CurrencyFormat {
    /// Creates a format with the given currency symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Formats an amount as `<sign><symbol><dollars>.<cents>`.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::{CurrencyFormat, Money};
    ///
    /// let usd = CurrencyFormat::default();
    /// assert_eq!(usd.format(Money::from_cents(3999)), "$39.99");
    ///
    /// let eur = CurrencyFormat::new("€");
    /// assert_eq!(eur.format(Money::from_cents(-550)), "-€5.50");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::new("$")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
