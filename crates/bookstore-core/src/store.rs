//! # Store Manager
//!
//! Owns the catalog and runs the purchase workflow.
//!
//! ## Purchase Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  purchase_book("9876", Thomas, "Credit Card", None)                     │
//! │       │                                                                 │
//! │       ├── blank isbn / method? ─────────────► Err(CoreError)            │
//! │       ▼                                                                 │
//! │  Look up by exact ISBN ── missing ──────────► "Book not found."         │
//! │       │ (read lock released here)                                       │
//! │       ▼                                                                 │
//! │  Price: override discount on base price, floored at $0.00               │
//! │       │                                                                 │
//! │       ├── method not accepted ──────────────► "Invalid payment method." │
//! │       ▼                                                                 │
//! │  PaymentAuthorizer::authorize ── false ─────► "Payment failed."         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Purchase successful! Thomas bought '...' for $39.99 using Credit Card."│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The catalog lives behind an `RwLock`. `add_book` holds the write lock
//! across its duplicate check and insert so two racing inserts of the same
//! ISBN cannot both succeed. Purchases clone the book out under the read
//! lock and call the authorizer without holding any lock.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::discount::DiscountStrategy;
use crate::error::CoreResult;
use crate::money::{CurrencyFormat, Money};
use crate::payment::{is_accepted_payment_method, PaymentAuthorizer, StubPaymentAuthorizer};
use crate::types::{Book, Customer};
use crate::validation::validate_required;

// =============================================================================
// Purchase Outcome
// =============================================================================

/// Why a purchase did not go through.
///
/// These are ordinary results, not errors: a caller shows the message and
/// moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseFailure {
    BookNotFound,
    InvalidPaymentMethod,
    PaymentFailed,
}

impl PurchaseFailure {
    pub const fn message(&self) -> &'static str {
        match self {
            PurchaseFailure::BookNotFound => "Book not found.",
            PurchaseFailure::InvalidPaymentMethod => "Invalid payment method.",
            PurchaseFailure::PaymentFailed => "Payment failed.",
        }
    }
}

impl fmt::Display for PurchaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Record of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    /// Receipt identifier (UUID v4).
    pub id: Uuid,
    pub customer_name: String,
    pub book_title: String,
    pub isbn: String,
    /// Price actually charged.
    pub final_price: Money,
    /// Payment method exactly as the caller spelled it.
    pub payment_method: String,
    pub purchased_at: DateTime<Utc>,
    /// Customer-facing confirmation text.
    pub message: String,
}

/// Result of [`StoreManager::purchase_book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PurchaseOutcome {
    Success(PurchaseReceipt),
    Failed { reason: PurchaseFailure },
}

impl PurchaseOutcome {
    fn failed(reason: PurchaseFailure) -> Self {
        PurchaseOutcome::Failed { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PurchaseOutcome::Success(_))
    }

    pub fn receipt(&self) -> Option<&PurchaseReceipt> {
        match self {
            PurchaseOutcome::Success(receipt) => Some(receipt),
            PurchaseOutcome::Failed { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<PurchaseFailure> {
        match self {
            PurchaseOutcome::Success(_) => None,
            PurchaseOutcome::Failed { reason } => Some(*reason),
        }
    }

    /// The text shown to the customer.
    pub fn message(&self) -> &str {
        match self {
            PurchaseOutcome::Success(receipt) => &receipt.message,
            PurchaseOutcome::Failed { reason } => reason.message(),
        }
    }
}

impl fmt::Display for PurchaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Store Manager
// =============================================================================

/// The bookstore: catalog plus purchase orchestration.
///
/// Each instance owns its own catalog. Build as many as you need; nothing
/// is shared between them.
///
/// ## Usage
/// ```rust
/// use bookstore_core::{Book, Customer, Money, StoreManager};
///
/// let store = StoreManager::new();
/// let book = Book::new(
///     "Framework Design Guidelines",
///     "Kryzsztof Cwalina",
///     "9876",
///     Money::from_cents(3999),
///     None,
/// )
/// .unwrap();
/// assert!(store.add_book(book));
///
/// let thomas = Customer::new("Thomas", "thomas@example.com").unwrap();
/// let outcome = store.purchase_book("9876", &thomas, "Credit Card", None).unwrap();
/// assert_eq!(
///     outcome.message(),
///     "Purchase successful! Thomas bought 'Framework Design Guidelines' for $39.99 using Credit Card."
/// );
/// ```
#[derive(Debug)]
pub struct StoreManager<A = StubPaymentAuthorizer> {
    /// Books in insertion order. ISBNs are unique.
    catalog: RwLock<Vec<Book>>,
    authorizer: A,
    currency: CurrencyFormat,
}

impl StoreManager {
    /// Creates an empty store that approves every accepted payment method.
    pub fn new() -> Self {
        StoreManager::with_authorizer(StubPaymentAuthorizer)
    }
}

impl Default for StoreManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PaymentAuthorizer> StoreManager<A> {
    /// Creates an empty store that sends payments to `authorizer`.
    pub fn with_authorizer(authorizer: A) -> Self {
        StoreManager {
            catalog: RwLock::new(Vec::new()),
            authorizer,
            currency: CurrencyFormat::default(),
        }
    }

    /// Replaces the currency format used in purchase messages.
    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    pub fn authorizer(&self) -> &A {
        &self.authorizer
    }

    // A panic while holding the lock cannot leave the Vec half-written
    // (push is the only mutation), so a poisoned lock is still usable.
    fn read_catalog(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_catalog(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a book to the catalog.
    ///
    /// ## Returns
    /// - `true` if the book was added
    /// - `false` if a book with the same ISBN is already present; the
    ///   catalog is left untouched
    pub fn add_book(&self, book: Book) -> bool {
        let mut catalog = self.write_catalog();

        if catalog.iter().any(|b| b.isbn() == book.isbn()) {
            debug!(isbn = book.isbn(), "Duplicate ISBN rejected");
            return false;
        }

        info!(isbn = book.isbn(), title = book.title(), "Book added to catalog");
        catalog.push(book);
        true
    }

    /// Finds a book by ISBN or title.
    ///
    /// ## Matching
    /// A book matches when its ISBN equals `query` exactly, or its title
    /// equals `query` ignoring case. The first match in insertion order
    /// wins.
    ///
    /// ## Errors
    /// `Required` if `query` is blank.
    pub fn find_book(&self, query: &str) -> CoreResult<Option<Book>> {
        validate_required("query", query)?;

        let wanted_title = query.to_lowercase();
        let found = self
            .read_catalog()
            .iter()
            .find(|b| b.isbn() == query || b.title().to_lowercase() == wanted_title)
            .cloned();

        Ok(found)
    }

    /// Buys the book with `isbn` for `customer`.
    ///
    /// `discount` overrides pricing for this purchase only and is applied
    /// to the book's base price. Without it the base price is charged.
    /// A discount bound to the book is not consulted here (see
    /// [`Book::final_price`]).
    ///
    /// ## Errors
    /// `Required` if `isbn` or `payment_method` is blank. Everything else,
    /// including an unknown book or a declined payment, comes back as a
    /// [`PurchaseOutcome`].
    pub fn purchase_book(
        &self,
        isbn: &str,
        customer: &Customer,
        payment_method: &str,
        discount: Option<&DiscountStrategy>,
    ) -> CoreResult<PurchaseOutcome> {
        validate_required("isbn", isbn)?;
        validate_required("payment method", payment_method)?;

        let book = self.read_catalog().iter().find(|b| b.isbn() == isbn).cloned();
        let Some(book) = book else {
            info!(isbn, "Purchase failed: book not found");
            return Ok(PurchaseOutcome::failed(PurchaseFailure::BookNotFound));
        };

        let final_price = match discount {
            Some(discount) => discount.apply(book.price())?.floor_zero(),
            None => book.price(),
        };

        if !is_accepted_payment_method(payment_method) {
            info!(isbn, payment_method, "Purchase failed: invalid payment method");
            return Ok(PurchaseOutcome::failed(PurchaseFailure::InvalidPaymentMethod));
        }

        if !self.authorizer.authorize(payment_method, final_price) {
            info!(isbn, payment_method, amount = %final_price, "Purchase failed: payment declined");
            return Ok(PurchaseOutcome::failed(PurchaseFailure::PaymentFailed));
        }

        let message = format!(
            "Purchase successful! {} bought '{}' for {} using {}.",
            customer.name(),
            book.title(),
            self.currency.format(final_price),
            payment_method
        );

        let receipt = PurchaseReceipt {
            id: Uuid::new_v4(),
            customer_name: customer.name().to_string(),
            book_title: book.title().to_string(),
            isbn: book.isbn().to_string(),
            final_price,
            payment_method: payment_method.to_string(),
            purchased_at: Utc::now(),
            message,
        };

        info!(
            receipt_id = %receipt.id,
            isbn,
            customer = customer.name(),
            amount = %final_price,
            "Purchase completed"
        );

        Ok(PurchaseOutcome::Success(receipt))
    }

    /// Number of books in the catalog.
    pub fn len(&self) -> usize {
        self.read_catalog().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_catalog().is_empty()
    }

    /// Snapshot of the catalog in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.read_catalog().clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::payment::{CreditCardPaymentProcessor, ProcessorRegistry};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn book(title: &str, isbn: &str, cents: i64) -> Book {
        Book::new(title, "Some Author", isbn, Money::from_cents(cents), None).unwrap()
    }

    fn guidelines() -> Book {
        Book::new(
            "Framework Design Guidelines",
            "Kryzsztof Cwalina",
            "9876",
            Money::from_cents(3999),
            None,
        )
        .unwrap()
    }

    fn thomas() -> Customer {
        Customer::new("Thomas", "thomas@example.com").unwrap()
    }

    /// Declines everything and counts how often it was asked.
    #[derive(Default)]
    struct CountingDecliner {
        calls: AtomicUsize,
    }

    impl PaymentAuthorizer for CountingDecliner {
        fn authorize(&self, _method: &str, _amount: Money) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            false
        }
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_book_increases_catalog() {
        let store = StoreManager::new();
        assert!(store.is_empty());

        assert!(store.add_book(guidelines()));
        assert_eq!(store.len(), 1);

        let found = store.find_book("9876").unwrap().unwrap();
        assert_eq!(found.title(), "Framework Design Guidelines");
    }

    #[test]
    fn test_add_book_rejects_duplicate_isbn() {
        let store = StoreManager::new();
        assert!(store.add_book(guidelines()));

        // Same ISBN, different everything else
        assert!(!store.add_book(book("Another Title", "9876", 100)));
        assert!(!store.add_book(guidelines()));

        assert_eq!(store.len(), 1);
        let kept = store.find_book("9876").unwrap().unwrap();
        assert_eq!(kept.title(), "Framework Design Guidelines");
    }

    #[test]
    fn test_isbn_uniqueness_is_case_sensitive() {
        let store = StoreManager::new();
        assert!(store.add_book(book("Lower", "isbn-x", 100)));
        assert!(store.add_book(book("Upper", "ISBN-X", 100)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_concurrent_duplicate_inserts_admit_exactly_one() {
        let store = StoreManager::new();
        let shared = &store;

        let added: usize = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| s.spawn(move || shared.add_book(book(&format!("Copy {i}"), "1111", 100))))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap() as usize)
                .sum()
        });

        assert_eq!(added, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_books_preserves_insertion_order() {
        let store = StoreManager::new();
        store.add_book(book("C", "3", 100));
        store.add_book(book("A", "1", 100));
        store.add_book(book("B", "2", 100));

        let isbns: Vec<_> = store.books().iter().map(|b| b.isbn().to_string()).collect();
        assert_eq!(isbns, ["3", "1", "2"]);
    }

    #[test]
    fn test_separate_stores_do_not_share_catalogs() {
        let first = StoreManager::new();
        let second = StoreManager::new();
        first.add_book(guidelines());

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert!(second.add_book(guidelines()));
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    #[test]
    fn test_find_book_by_isbn() {
        let store = StoreManager::new();
        store.add_book(book("Professional C# and .NET", "1234", 4599));

        let found = store.find_book("1234").unwrap().unwrap();
        assert_eq!(found.title(), "Professional C# and .NET");
    }

    #[test]
    fn test_find_book_by_title_ignores_case() {
        let store = StoreManager::new();
        store.add_book(guidelines());

        let found = store.find_book("framework DESIGN guidelines").unwrap().unwrap();
        assert_eq!(found.isbn(), "9876");
    }

    #[test]
    fn test_find_book_isbn_match_is_exact() {
        let store = StoreManager::new();
        store.add_book(book("Title", "AB-1", 100));

        assert!(store.find_book("ab-1").unwrap().is_none());
        assert!(store.find_book("AB-").unwrap().is_none());
    }

    #[test]
    fn test_find_book_returns_first_match_in_catalog_order() {
        let store = StoreManager::new();
        // Title of the first book equals the ISBN of the second
        store.add_book(book("2222", "1111", 100));
        store.add_book(book("Other", "2222", 200));

        let found = store.find_book("2222").unwrap().unwrap();
        assert_eq!(found.isbn(), "1111");
    }

    #[test]
    fn test_find_book_missing() {
        let store = StoreManager::new();
        store.add_book(guidelines());
        assert!(store.find_book("0000").unwrap().is_none());
    }

    #[test]
    fn test_find_book_rejects_blank_query() {
        let store = StoreManager::new();
        for query in ["", "   "] {
            assert!(matches!(
                store.find_book(query),
                Err(CoreError::Validation(ValidationError::Required { .. }))
            ));
        }
    }

    // -------------------------------------------------------------------------
    // Purchase
    // -------------------------------------------------------------------------

    #[test]
    fn test_purchase_success_message() {
        let store = StoreManager::new();
        store.add_book(guidelines());

        let outcome = store
            .purchase_book("9876", &thomas(), "Credit Card", None)
            .unwrap();

        assert!(outcome.is_success());
        assert_eq!(
            outcome.message(),
            "Purchase successful! Thomas bought 'Framework Design Guidelines' for $39.99 using Credit Card."
        );
        assert_eq!(outcome.to_string(), outcome.message());

        let receipt = outcome.receipt().unwrap();
        assert_eq!(receipt.customer_name, "Thomas");
        assert_eq!(receipt.isbn, "9876");
        assert_eq!(receipt.final_price, Money::from_cents(3999));
    }

    #[test]
    fn test_purchase_keeps_payment_method_spelling() {
        let store = StoreManager::new();
        store.add_book(guidelines());

        let outcome = store.purchase_book("9876", &thomas(), "PAYPAL", None).unwrap();
        assert!(outcome.message().ends_with("using PAYPAL."));
        assert_eq!(outcome.receipt().unwrap().payment_method, "PAYPAL");
    }

    #[test]
    fn test_purchase_book_not_found() {
        let store = StoreManager::new();
        let bob = Customer::new("Bob", "bob@example.com").unwrap();

        let outcome = store.purchase_book("3691", &bob, "Credit Card", None).unwrap();

        assert_eq!(outcome.failure(), Some(PurchaseFailure::BookNotFound));
        assert_eq!(outcome.message(), "Book not found.");
    }

    #[test]
    fn test_purchase_does_not_match_by_title() {
        let store = StoreManager::new();
        store.add_book(guidelines());

        let outcome = store
            .purchase_book("Framework Design Guidelines", &thomas(), "Credit Card", None)
            .unwrap();
        assert_eq!(outcome.failure(), Some(PurchaseFailure::BookNotFound));
    }

    #[test]
    fn test_purchase_invalid_payment_method() {
        let store = StoreManager::new();
        store.add_book(guidelines());

        let outcome = store.purchase_book("9876", &thomas(), "Bitcoin", None).unwrap();
        assert_eq!(outcome.message(), "Invalid payment method.");
    }

    #[test]
    fn test_purchase_invalid_payment_method_never_reaches_authorizer() {
        let store = StoreManager::with_authorizer(CountingDecliner::default());
        store.add_book(guidelines());

        let outcome = store.purchase_book("9876", &thomas(), "Bitcoin", None).unwrap();

        assert_eq!(outcome.failure(), Some(PurchaseFailure::InvalidPaymentMethod));
        assert_eq!(store.authorizer().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_purchase_payment_failed() {
        let store = StoreManager::with_authorizer(CountingDecliner::default());
        store.add_book(guidelines());

        let outcome = store.purchase_book("9876", &thomas(), "PayPal", None).unwrap();

        assert_eq!(outcome.message(), "Payment failed.");
        assert_eq!(store.authorizer().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_purchase_through_processor_registry() {
        let registry = ProcessorRegistry::new()
            .register(CreditCardPaymentProcessor)
            .unwrap();
        let store = StoreManager::with_authorizer(registry);
        store.add_book(guidelines());

        let paid = store.purchase_book("9876", &thomas(), "credit card", None).unwrap();
        assert!(paid.is_success());

        // Accepted method, but nobody processes bank transfers
        let declined = store
            .purchase_book("9876", &thomas(), "Bank Transfer", None)
            .unwrap();
        assert_eq!(declined.failure(), Some(PurchaseFailure::PaymentFailed));
    }

    #[test]
    fn test_purchase_with_percentage_override() {
        let store = StoreManager::new();
        store.add_book(book("Discounted", "5000", 5000));
        let twenty_off = DiscountStrategy::percentage(20.0).unwrap();

        let outcome = store
            .purchase_book("5000", &thomas(), "Credit Card", Some(&twenty_off))
            .unwrap();

        assert_eq!(outcome.receipt().unwrap().final_price, Money::from_cents(4000));
        assert!(outcome.message().contains("for $40.00 using"));
    }

    #[test]
    fn test_purchase_with_fractional_percentage_override() {
        let store = StoreManager::new();
        store.add_book(book("Collector's Edition", "1000", 100_000));
        let third_off = DiscountStrategy::percentage(33.333).unwrap();

        let outcome = store
            .purchase_book("1000", &thomas(), "PayPal", Some(&third_off))
            .unwrap();

        assert_eq!(outcome.receipt().unwrap().final_price, Money::from_cents(66_667));
        assert!(outcome.message().ends_with("for $666.67 using PayPal."));
    }

    #[test]
    fn test_purchase_half_cent_price_rounds_up() {
        let store = StoreManager::new();
        store.add_book(book("Pamphlet", "0001", 1));
        let half_off = DiscountStrategy::percentage(50.0).unwrap();

        let outcome = store
            .purchase_book("0001", &thomas(), "Credit Card", Some(&half_off))
            .unwrap();

        assert_eq!(outcome.receipt().unwrap().final_price, Money::from_cents(1));
        assert!(outcome.message().contains("for $0.01 using"));
    }

    #[test]
    fn test_purchase_with_fixed_override_floors_at_zero() {
        let store = StoreManager::new();
        store.add_book(book("Cheap", "6000", 6000));
        let hundred_off = DiscountStrategy::fixed(Money::from_cents(10000)).unwrap();

        let outcome = store
            .purchase_book("6000", &thomas(), "Bank Transfer", Some(&hundred_off))
            .unwrap();

        assert_eq!(outcome.receipt().unwrap().final_price, Money::zero());
        assert!(outcome.message().contains("for $0.00 using"));
    }

    #[test]
    fn test_purchase_ignores_books_bound_discount() {
        let store = StoreManager::new();
        let bound = DiscountStrategy::percentage(50.0).unwrap();
        let discounted =
            Book::new("Half Off", "Author", "7777", Money::from_cents(2000), Some(bound)).unwrap();
        assert_eq!(discounted.final_price(), Money::from_cents(1000));
        store.add_book(discounted);

        let outcome = store.purchase_book("7777", &thomas(), "PayPal", None).unwrap();
        assert_eq!(outcome.receipt().unwrap().final_price, Money::from_cents(2000));

        // An override replaces the base price; the bound discount still plays no part
        let ten_off = DiscountStrategy::percentage(10.0).unwrap();
        let outcome = store
            .purchase_book("7777", &thomas(), "PayPal", Some(&ten_off))
            .unwrap();
        assert_eq!(outcome.receipt().unwrap().final_price, Money::from_cents(1800));
    }

    #[test]
    fn test_purchase_uses_configured_currency() {
        let store = StoreManager::new().with_currency(CurrencyFormat::new("€"));
        store.add_book(guidelines());

        let outcome = store.purchase_book("9876", &thomas(), "PayPal", None).unwrap();
        assert!(outcome.message().contains("for €39.99 using"));
    }

    #[test]
    fn test_purchase_rejects_blank_arguments() {
        let store = StoreManager::new();
        store.add_book(guidelines());

        assert!(matches!(
            store.purchase_book("  ", &thomas(), "Credit Card", None),
            Err(CoreError::Validation(ValidationError::Required { ref field })) if field == "isbn"
        ));
        assert!(matches!(
            store.purchase_book("9876", &thomas(), "", None),
            Err(CoreError::Validation(ValidationError::Required { ref field })) if field == "payment method"
        ));
    }

    #[test]
    fn test_purchase_leaves_catalog_unchanged() {
        let store = StoreManager::new();
        store.add_book(guidelines());

        store.purchase_book("9876", &thomas(), "Credit Card", None).unwrap();
        store.purchase_book("9876", &thomas(), "Credit Card", None).unwrap();

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_purchase_receipts_are_unique() {
        let store = StoreManager::new();
        store.add_book(guidelines());

        let first = store.purchase_book("9876", &thomas(), "Credit Card", None).unwrap();
        let second = store.purchase_book("9876", &thomas(), "Credit Card", None).unwrap();

        assert_ne!(first.receipt().unwrap().id, second.receipt().unwrap().id);
        assert_eq!(first.message(), second.message());
    }

    #[test]
    fn test_outcome_serialization() {
        let failed = PurchaseOutcome::failed(PurchaseFailure::InvalidPaymentMethod);
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "failed", "reason": "invalid_payment_method" })
        );

        let store = StoreManager::new();
        store.add_book(guidelines());
        let outcome = store.purchase_book("9876", &thomas(), "Credit Card", None).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["final_price"], 3999);
        assert_eq!(json["payment_method"], "Credit Card");
    }
}
