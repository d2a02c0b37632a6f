//! # Domain Types
//!
//! The catalog entity ([`Book`]) and the buyer ([`Customer`]).
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────────────┐        ┌─────────────────────────┐        │
//! │  │          Book            │        │        Customer         │        │
//! │  │  ──────────────────────  │        │  ─────────────────────  │        │
//! │  │  title                   │        │  name  (shown on        │        │
//! │  │  author                  │        │         receipts)       │        │
//! │  │  isbn  (catalog key)     │        │  email                  │        │
//! │  │  price (Money, ≥ 0)      │        └─────────────────────────┘        │
//! │  │  discount (optional)     │                                           │
//! │  └──────────────────────────┘                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both types are immutable once built: fields are private and only
//! readable through accessors.

use serde::Serialize;

use crate::discount::DiscountStrategy;
use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_required};

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    author: String,
    /// Unique catalog key. Compared exactly (case-sensitive).
    isbn: String,
    price: Money,
    /// Bound discount, used only by [`Book::final_price`].
    discount: Option<DiscountStrategy>,
}

impl Book {
    /// Creates a book.
    ///
    /// ## Errors
    /// - `Required` if title, author or isbn is empty or whitespace-only
    /// - `OutOfRange` if price is negative
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::{Book, Money};
    ///
    /// let book = Book::new(
    ///     "Framework Design Guidelines",
    ///     "Kryzsztof Cwalina",
    ///     "9876",
    ///     Money::from_cents(3999),
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(book.final_price().cents(), 3999);
    /// ```
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        price: Money,
        discount: Option<DiscountStrategy>,
    ) -> CoreResult<Self> {
        let title = title.into();
        let author = author.into();
        let isbn = isbn.into();

        validate_required("title", &title)?;
        validate_required("author", &author)?;
        validate_required("isbn", &isbn)?;
        validate_price_cents(price.cents())?;

        Ok(Book {
            title,
            author,
            isbn,
            price,
            discount,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Base price, before any discount.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn discount(&self) -> Option<&DiscountStrategy> {
        self.discount.as_ref()
    }

    /// Price after the book's own bound discount, if it has one.
    ///
    /// ## Note
    /// Purchases do not go through this method. `purchase_book` starts from
    /// [`Book::price`] and only applies an override discount passed by the
    /// caller.
    pub fn final_price(&self) -> Money {
        match &self.discount {
            Some(discount) => discount.discounted(self.price),
            None => self.price,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// The buyer named on a purchase receipt.
///
/// No email format checks and no uniqueness: a customer is only a display
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    name: String,
    email: String,
}

impl Customer {
    /// Creates a customer.
    ///
    /// ## Errors
    /// `Required` if name or email is empty or whitespace-only.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        let email = email.into();

        validate_required("name", &name)?;
        validate_required("email", &email)?;

        Ok(Customer { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
