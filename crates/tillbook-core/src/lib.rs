//! # tillbook-core: Pure Business Logic for TillBook POS
//!
//! Everything in this crate is pure and synchronous; nothing here performs
//! I/O. The persistence layer lives in `tillbook-db`; the presentation layer
//! (out of tree) drives both.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      TillBook POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (out of tree)                         │   │
//! │  │    History view ──► Bill editor ──► Save / Delete               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tillbook-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  editor   │  │  history  │  │   │
//! │  │   │   Bill    │  │   Money   │  │  session  │  │ sort/filt │  │   │
//! │  │   │  LineItem │  │  parsing  │  │   rows    │  │   state   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tillbook-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, bill store                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Bill, LineItem, BillSummary, payment enums)
//! - [`money`] - Integer-paise Money type and lenient amount parsing
//! - [`editor`] - BillEditorSession: working copy of a bill edit
//! - [`history`] - Filter, sort columns, and per-column sort state
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Example
//! ```rust
//! use tillbook_core::editor::BillEditorSession;
//! use tillbook_core::money::Money;
//!
//! let mut session = BillEditorSession::new();
//! session.set_customer_name("Ravi");
//!
//! let row = session.rows()[0].id();
//! session.set_item_name(row, "Tea");
//! session.set_price_input(row, "20");
//! session.set_qty_input(row, "2");
//! assert_eq!(session.total(), Money::from_cents(4000));
//!
//! let draft = session.commit().unwrap();
//! assert_eq!(draft.items.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod editor;
pub mod error;
pub mod history;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use editor::{BillEditorSession, EditorRow, RowId};
pub use error::ValidationError;
pub use history::{sort_rows, BillFilter, SortColumn, SortSpec, SortState};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Bill timestamp format ("YYYY-MM-DD HH:MM:SS").
///
/// Written once when a bill is created, never changed by edits. The format
/// sorts lexicographically in chronological order, which the history view's
/// timestamp column relies on.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum customer name length accepted by validation.
pub const MAX_CUSTOMER_NAME_LEN: usize = 200;
