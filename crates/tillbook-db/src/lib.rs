//! # tillbook-db: Database Layer for TillBook POS
//!
//! SQLite persistence via sqlx. This crate owns every query; business rules
//! stay in `tillbook-core`.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      TillBook POS Data Flow                             │
//! │                                                                         │
//! │  Presentation action (save bill, list history)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tillbook-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ BillStore     │    │  (embedded)  │  │   │
//! │  │   │               │    │ HistoryQuery  │    │ 001_init.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (WAL mode, foreign keys on)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tillbook_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/tillbook.db")).await?;
//!
//! let id = db.bills().save(None, &draft).await?;
//! let items = db.bills().load_items(id).await?;
//! let rows = db.history().list(&BillFilter::all(), None).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::bill::BillStore;
pub use repository::history::HistoryQuery;
