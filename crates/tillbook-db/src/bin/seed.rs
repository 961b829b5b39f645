//! # Seed Data Generator
//!
//! Populates a database with sample bills for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default dev database
//! cargo run -p tillbook-db --bin seed
//!
//! # Specify a database path
//! cargo run -p tillbook-db --bin seed -- --db ./data/tillbook.db
//! ```
//!
//! Repository tracing is on the `RUST_LOG` env filter, e.g.
//! `RUST_LOG=tillbook_db=debug cargo run -p tillbook-db --bin seed`.

use std::env;

use tracing_subscriber::EnvFilter;

use tillbook_core::history::BillFilter;
use tillbook_core::{BillDraft, DraftItem, Money, PaymentMethod, PaymentStatus};
use tillbook_db::{Database, DbConfig};

/// Sample bills: customer, status, method, items (name, qty, price in paise).
const SAMPLE_BILLS: &[(
    &str,
    PaymentStatus,
    PaymentMethod,
    &[(&str, i64, i64)],
)] = &[
    (
        "Ravi",
        PaymentStatus::Unpaid,
        PaymentMethod::Cash,
        &[("Tea", 2, 2000), ("Bun", 1, 1500)],
    ),
    (
        "Anita",
        PaymentStatus::Paid,
        PaymentMethod::Qr,
        &[("Samosa", 3, 1500), ("Lassi", 1, 4000)],
    ),
    (
        "Meena",
        PaymentStatus::Paid,
        PaymentMethod::Cash,
        &[("Vada Pav", 2, 2500)],
    ),
    (
        "Suresh",
        PaymentStatus::Unpaid,
        PaymentMethod::Qr,
        &[("Masala Dosa", 1, 8000), ("Filter Coffee", 2, 3000)],
    ),
    (
        "Priya",
        PaymentStatus::Paid,
        PaymentMethod::Qr,
        &[("Idli", 4, 1500), ("Chutney", 1, 500), ("Tea", 1, 2000)],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./tillbook_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("TillBook POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./tillbook_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("TillBook POS Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.bills().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} bills", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding bills...");

    let store = db.bills();
    for (customer, status, method, items) in SAMPLE_BILLS {
        let draft = BillDraft {
            customer_name: customer.to_string(),
            payment_status: *status,
            payment_method: *method,
            items: items
                .iter()
                .map(|(name, qty, cents)| DraftItem::new(*name, *qty, Money::from_cents(*cents)))
                .collect(),
        };

        let id = store.save(None, &draft).await?;
        println!("  #{} {} - {} ({} items)", id, customer, draft.total(), items.len());
    }

    println!();
    println!("History listing:");
    let rows = db.history().list(&BillFilter::all(), None).await?;
    for row in &rows {
        println!(
            "  #{:<3} {:<10} {}  {:<6} {:<4} {}",
            row.id,
            row.customer_name,
            row.timestamp,
            row.payment_status.to_string(),
            row.payment_method.to_string(),
            row.total()
        );
    }

    let paid = db
        .history()
        .list(&BillFilter::all().with_status(PaymentStatus::Paid), None)
        .await?;
    println!();
    println!("✓ Seeded {} bills ({} paid)", rows.len(), paid.len());

    db.close().await;
    Ok(())
}
