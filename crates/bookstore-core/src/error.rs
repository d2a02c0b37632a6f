//! # Error Types
//!
//! Contract-violation errors for bookstore-core.
//!
//! ## Two Kinds of "Failure"
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Contract violations (this file)       Business outcomes (store.rs)     │
//! │  ───────────────────────────────       ───────────────────────────      │
//! │  • empty title / isbn / name           • book not found                 │
//! │  • percentage outside 0..=100          • invalid payment method         │
//! │  • negative fixed discount             • payment failed                 │
//! │  • negative price into apply()                                          │
//! │                                                                         │
//! │  Returned as Err(CoreError)            Returned as Ok(PurchaseOutcome)  │
//! │  Caller bug: nothing was mutated       Routine: show message to user    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised when a caller breaks an operation's contract.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A negative price was handed to a discount strategy.
    #[error("Price cannot be negative (got {cents} cents)")]
    NegativePrice { cents: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. a NaN percentage).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
