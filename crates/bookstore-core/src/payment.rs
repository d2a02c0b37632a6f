//! # Payment Module
//!
//! Payment method validation and the authorization seam used by the store.
//!
//! ## Purchase Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Credit Card" ──► PaymentMethod::parse ──► None ──► Invalid payment    │
//! │                        │                            method.             │
//! │                        ▼ Some(CreditCard)                               │
//! │               PaymentAuthorizer::authorize("Credit Card", $39.99)       │
//! │                        │                                                │
//! │              ┌─────────┴──────────┐                                     │
//! │              ▼                    ▼                                     │
//! │            true                 false ──► Payment failed.               │
//! │              │                                                          │
//! │              ▼                                                          │
//! │        Purchase successful!                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Authorizers
//! - [`StubPaymentAuthorizer`]: accepts any valid method (the default)
//! - [`ProcessorRegistry`]: routes to registered [`PaymentProcessor`]s and
//!   declines methods nobody has registered

use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_required;

/// Payment method names accepted by the store, in lowercase.
pub const ACCEPTED_PAYMENT_METHODS: [&str; 3] = ["credit card", "paypal", "bank transfer"];

// =============================================================================
// Payment Method
// =============================================================================

/// An accepted payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    BankTransfer,
}

impl PaymentMethod {
    /// Parses a payment method name, ignoring case.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::payment::PaymentMethod;
    ///
    /// assert_eq!(PaymentMethod::parse("Credit Card"), Some(PaymentMethod::CreditCard));
    /// assert_eq!(PaymentMethod::parse("PAYPAL"), Some(PaymentMethod::PayPal));
    /// assert_eq!(PaymentMethod::parse("Bitcoin"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "credit card" => Some(PaymentMethod::CreditCard),
            "paypal" => Some(PaymentMethod::PayPal),
            "bank transfer" => Some(PaymentMethod::BankTransfer),
            _ => None,
        }
    }

    /// The canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit card",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::BankTransfer => "bank transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks a payment method name against [`ACCEPTED_PAYMENT_METHODS`],
/// ignoring case.
pub fn is_accepted_payment_method(name: &str) -> bool {
    PaymentMethod::parse(name).is_some()
}

// =============================================================================
// Authorization
// =============================================================================

/// Decides whether a payment goes through.
///
/// The store calls this only after the method name has been validated and
/// only with non-negative amounts. Anything other than `true` is reported
/// to the customer as "Payment failed.".
pub trait PaymentAuthorizer: Send + Sync {
    fn authorize(&self, method: &str, amount: Money) -> bool;
}

/// Authorizer that approves every accepted payment method.
///
/// No gateway is contacted. The method is checked again so the authorizer
/// is safe to call on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPaymentAuthorizer;

impl PaymentAuthorizer for StubPaymentAuthorizer {
    fn authorize(&self, method: &str, amount: Money) -> bool {
        if !is_accepted_payment_method(method) {
            return false;
        }

        debug!(method, amount = %amount, "Stub payment approved");
        true
    }
}

// =============================================================================
// Payment Processors
// =============================================================================

/// A concrete way of taking money for one payment method.
pub trait PaymentProcessor: Send + Sync {
    /// Display name of the method this processor handles, e.g. "Credit Card".
    fn method_name(&self) -> &str;

    /// Charges `amount`. Returns `true` on success.
    fn process_payment(&self, amount: Money) -> bool;
}

/// Credit card processor. Logs the charge and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPaymentProcessor;

impl PaymentProcessor for CreditCardPaymentProcessor {
    fn method_name(&self) -> &str {
        "Credit Card"
    }

    fn process_payment(&self, amount: Money) -> bool {
        info!(amount = %amount, "Processing credit card payment");
        true
    }
}

/// Authorizer backed by a set of [`PaymentProcessor`]s.
///
/// A method name is routed to the processor whose `method_name` matches it,
/// ignoring case. Accepted methods without a registered processor are
/// declined.
///
/// ## Usage
/// ```rust
/// use bookstore_core::money::Money;
/// use bookstore_core::payment::{CreditCardPaymentProcessor, PaymentAuthorizer, ProcessorRegistry};
///
/// let registry = ProcessorRegistry::new()
///     .register(CreditCardPaymentProcessor)
///     .unwrap();
///
/// assert!(registry.authorize("credit card", Money::from_cents(3999)));
/// assert!(!registry.authorize("PayPal", Money::from_cents(3999)));
/// ```
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn PaymentProcessor>>,
}

impl ProcessorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ProcessorRegistry::default()
    }

    /// Adds a processor.
    ///
    /// ## Errors
    /// `Required` if the processor reports a blank method name.
    pub fn register<P>(mut self, processor: P) -> CoreResult<Self>
    where
        P: PaymentProcessor + 'static,
    {
        validate_required("payment method name", processor.method_name())?;
        self.processors.push(Box::new(processor));
        Ok(self)
    }

    /// Number of registered processors.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    fn processor_for(&self, method: &str) -> Option<&dyn PaymentProcessor> {
        let wanted = method.to_lowercase();
        self.processors
            .iter()
            .find(|p| p.method_name().to_lowercase() == wanted)
            .map(|p| p.as_ref())
    }
}

impl PaymentAuthorizer for ProcessorRegistry {
    fn authorize(&self, method: &str, amount: Money) -> bool {
        if amount.is_negative() {
            warn!(method, amount = %amount, "Refusing to charge a negative amount");
            return false;
        }

        match self.processor_for(method) {
            Some(processor) => processor.process_payment(amount),
            None => {
                warn!(method, "No payment processor registered");
                false
            }
        }
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field(
                "methods",
                &self
                    .processors
                    .iter()
                    .map(|p| p.method_name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
