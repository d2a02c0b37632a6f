//! # Bookstore Demo
//!
//! Runs the bookstore core against a handful of sample books and prints
//! what happens.
//!
//! ## Usage
//! ```bash
//! # Human-readable output
//! cargo run -p bookstore-cli
//!
//! # One JSON document per step
//! cargo run -p bookstore-cli -- --json
//!
//! # See catalog and payment logs (written to stderr)
//! RUST_LOG=debug cargo run -p bookstore-cli
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (env, then flags)
//! 3. Build the store and add sample books
//! 4. Run lookups and purchases, printing each outcome

mod config;

use std::env;
use std::error::Error;

use bookstore_core::{Book, Customer, DiscountStrategy, Money, PurchaseOutcome, StoreManager};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, OutputFormat};

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mut config = CliConfig::from_env()?;
    config.apply_args(env::args().skip(1))?;
    info!(?config, "Configuration loaded");

    let store = StoreManager::new().with_currency(config.currency());
    let text = config.output == OutputFormat::Text;

    if text {
        println!("=== Welcome to the {} ===", config.store_name);
    }

    // Sample catalog
    let twenty_off = DiscountStrategy::percentage(20.0)?;
    let books = [
        Book::new(
            "Framework Design Guidelines book",
            "Kryzsztof Cwalina",
            "9876",
            Money::from_cents(3999),
            None,
        )?,
        Book::new("Fake Book", "Random Guy", "2468", Money::from_cents(5599), None)?,
        Book::new(
            "Professional C# and .NET",
            "Christian Nagel",
            "1234",
            Money::from_cents(4599),
            Some(twenty_off),
        )?,
    ];

    let added = books
        .into_iter()
        .map(|book| store.add_book(book))
        .filter(|added| *added)
        .count();
    if text {
        println!("{} books added to the store.\n", added);
    } else {
        print_json(json!({ "step": "add_books", "added": added, "books": store.books() }))?;
    }

    // Searching
    for query in ["9876", "fake book", "0000"] {
        let found = store.find_book(query)?;
        match (&found, text) {
            (Some(book), true) => println!(
                "Found: {} by {}, Price: {}, Final price: {}",
                book.title(),
                book.author(),
                book.price(),
                book.final_price()
            ),
            (None, true) => println!("No book matches '{}'.", query),
            (_, false) => print_json(json!({ "step": "find_book", "query": query, "book": found }))?,
        }
    }

    // Purchasing
    let thomas = Customer::new("Thomas", "thomas@example.com")?;
    let bob = Customer::new("Bob", "bob@example.com")?;
    let ten_off = DiscountStrategy::fixed(Money::from_cents(1000))?;

    let purchases = [
        ("9876", &thomas, "Credit Card", None),
        ("2468", &bob, "PayPal", Some(&ten_off)),
        ("1234", &bob, "Bitcoin", None),
        ("3691", &thomas, "Bank Transfer", None),
    ];

    if text {
        println!();
    }
    for (isbn, customer, method, discount) in purchases {
        let outcome = store.purchase_book(isbn, customer, method, discount)?;
        report_purchase(isbn, &outcome, config.output)?;
    }

    if text {
        println!("\n=== Thank you for visiting the {}! ===", config.store_name);
    }

    Ok(())
}

fn report_purchase(
    isbn: &str,
    outcome: &PurchaseOutcome,
    output: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match output {
        OutputFormat::Text => println!("{}", outcome),
        OutputFormat::Json => print_json(json!({
            "step": "purchase_book",
            "isbn": isbn,
            "message": outcome.message(),
            "outcome": outcome,
        }))?,
    }

    Ok(())
}

fn print_json(value: serde_json::Value) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean for `--json`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: warnings only, so the demo output stays readable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
