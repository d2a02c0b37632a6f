//! # bookstore-core: Pure Business Logic for the Bookstore
//!
//! This crate holds the catalog, discount and purchase rules as plain
//! functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    bookstore-cli (demo)                         │   │
//! │  │    env config ──► logging ──► sample data ──► print outcomes    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐   │   │
//! │  │   │  types   │ │ discount │ │ payment  │ │      store       │   │   │
//! │  │   │  Book    │ │ Percent  │ │ Method   │ │  StoreManager    │   │   │
//! │  │   │ Customer │ │  Fixed   │ │Authorizer│ │ PurchaseOutcome  │   │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Book and Customer
//! - [`money`] - Money type with integer arithmetic, currency formatting
//! - [`discount`] - Percentage and fixed-amount discount strategies
//! - [`payment`] - Accepted payment methods and authorizers
//! - [`store`] - Catalog and purchase workflow
//! - [`error`] - Contract-violation errors
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: prices are cents (i64), never floats
//! 2. **Checked Construction**: invalid books, customers and discounts
//!    cannot be built
//! 3. **Outcomes vs Errors**: "book not found" is a [`PurchaseOutcome`];
//!    a blank ISBN is a [`CoreError`]
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::{Book, Customer, DiscountStrategy, Money, StoreManager};
//!
//! let store = StoreManager::new();
//! store.add_book(Book::new("Rust in Action", "Tim McNamara", "5000", Money::from_cents(5000), None).unwrap());
//!
//! let bob = Customer::new("Bob", "bob@example.com").unwrap();
//! let twenty_off = DiscountStrategy::percentage(20.0).unwrap();
//!
//! let outcome = store.purchase_book("5000", &bob, "PayPal", Some(&twenty_off)).unwrap();
//! assert_eq!(
//!     outcome.message(),
//!     "Purchase successful! Bob bought 'Rust in Action' for $40.00 using PayPal."
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod payment;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::DiscountStrategy;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{CurrencyFormat, Money};
pub use payment::{
    CreditCardPaymentProcessor, PaymentAuthorizer, PaymentMethod, PaymentProcessor,
    ProcessorRegistry, StubPaymentAuthorizer,
};
pub use store::{PurchaseFailure, PurchaseOutcome, PurchaseReceipt, StoreManager};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest percentage discount, in basis points (100%).
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

/// Largest percentage discount, in millionths of a percent (100%).
///
/// Percentage discounts are stored at this resolution so that rates such as
/// 33.333% or 0.004% survive construction unchanged.
pub const MAX_DISCOUNT_MICRO_PCT: u32 = 100_000_000;
