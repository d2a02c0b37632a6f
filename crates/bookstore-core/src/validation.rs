//! # Validation Module
//!
//! Input validation utilities shared by the entity constructors, the
//! discount strategies and the store manager.
//!
//! Every validator runs before anything is built or mutated, so a failed
//! check never leaves partial state behind.
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::{validate_required, validate_percentage};
//!
//! assert!(validate_required("isbn", "9876").is_ok());
//! assert!(validate_required("isbn", "   ").is_err());
//! assert!(validate_percentage(150.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_DISCOUNT_BPS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required text field is present.
///
/// ## Rules
/// - Must not be empty
/// - Must not consist only of whitespace
///
/// The value itself is never trimmed or rewritten; callers store exactly
/// what they were given.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free books)
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(3999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount percentage given as a plain number (20.0 = 20%).
///
/// ## Rules
/// - Must be a finite number
/// - Must be between 0 and 100 inclusive
pub fn validate_percentage(pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "discount percentage".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "discount percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_DISCOUNT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount_bps".to_string(),
            min: 0,
            max: MAX_DISCOUNT_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a fixed discount amount.
///
/// ## Rules
/// - Must be non-negative; a zero discount is allowed
pub fn validate_discount_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "discount amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
