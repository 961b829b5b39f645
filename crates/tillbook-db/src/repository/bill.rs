//! # Bill Store
//!
//! Database operations for bills and their line items.
//!
//! ## Bill Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bill Lifecycle                                    │
//! │                                                                         │
//! │  1. CREATE                                                              │
//! │     └── save(None, draft) → INSERT bill (timestamp = now)              │
//! │                             INSERT items, positions 0..n               │
//! │                                                                         │
//! │  2. EDIT (replace wholesale)                                           │
//! │     └── save(Some(id), draft) → UPDATE bill fields (timestamp kept)    │
//! │                                 DELETE all old items                   │
//! │                                 INSERT new items, positions 0..n       │
//! │                                                                         │
//! │  3. DELETE                                                             │
//! │     └── delete(id) → items and bill removed together (idempotent)      │
//! │                                                                         │
//! │  Every arrow above is one transaction: a failure mid-write rolls the   │
//! │  whole call back and prior state survives untouched.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Individual item rows are never patched in place; an edit always replaces
//! the entire item set, which is what keeps positions dense and the editor's
//! row order authoritative.

use chrono::Local;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use tillbook_core::{Bill, BillDraft, LineItem, TIMESTAMP_FORMAT};

/// Repository for bill persistence.
#[derive(Debug, Clone)]
pub struct BillStore {
    pool: SqlitePool,
}

impl BillStore {
    /// Creates a new BillStore.
    pub fn new(pool: SqlitePool) -> Self {
        BillStore { pool }
    }

    /// Creates or replaces a bill from a validated draft.
    ///
    /// ## Arguments
    /// * `bill_id` - `None` creates a new bill (timestamp = now);
    ///   `Some(id)` updates that bill's customer/status/method (timestamp
    ///   untouched) and replaces its entire item set.
    ///
    /// ## Returns
    /// The bill's id - freshly assigned for a create, unchanged for an edit.
    ///
    /// ## Errors
    /// `DbError::NotFound` when editing an id that no longer exists; the
    /// bill is not recreated. Any storage failure rolls the whole call back.
    pub async fn save(&self, bill_id: Option<i64>, draft: &BillDraft) -> DbResult<i64> {
        let mut tx = self.pool.begin().await?;

        let id = match bill_id {
            None => {
                let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
                debug!(customer = %draft.customer_name, "Inserting bill");

                let result = sqlx::query(
                    "INSERT INTO bills (customer_name, timestamp, payment_status, payment_method) \
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .bind(&draft.customer_name)
                .bind(&timestamp)
                .bind(draft.payment_status)
                .bind(draft.payment_method)
                .execute(&mut *tx)
                .await?;

                result.last_insert_rowid()
            }
            Some(id) => {
                debug!(id, customer = %draft.customer_name, "Updating bill");

                let result = sqlx::query(
                    "UPDATE bills SET customer_name = ?2, payment_status = ?3, payment_method = ?4 \
                     WHERE id = ?1",
                )
                .bind(id)
                .bind(&draft.customer_name)
                .bind(draft.payment_status)
                .bind(draft.payment_method)
                .execute(&mut *tx)
                .await?;

                // Editing a bill that vanished is rejected, not recreated;
                // dropping the transaction rolls back.
                if result.rows_affected() == 0 {
                    return Err(DbError::not_found("Bill", id.to_string()));
                }

                sqlx::query("DELETE FROM bill_items WHERE bill_id = ?1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                id
            }
        };

        for (position, item) in draft.items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO bill_items (bill_id, item_name, qty, price_cents, position) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(id)
            .bind(&item.item_name)
            .bind(item.qty)
            .bind(item.price_cents)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(id, items = draft.items.len(), "Bill saved");
        Ok(id)
    }

    /// Removes a bill and all its line items.
    ///
    /// Idempotent: deleting a nonexistent id is a no-op, not an error.
    pub async fn delete(&self, bill_id: i64) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        // Items first; foreign keys are enforced.
        sqlx::query("DELETE FROM bill_items WHERE bill_id = ?1")
            .bind(bill_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM bills WHERE id = ?1")
            .bind(bill_id)
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(bill_id, existed = result.rows_affected() > 0, "Bill deleted");
        Ok(())
    }

    /// Gets a bill by id.
    pub async fn get(&self, bill_id: i64) -> DbResult<Option<Bill>> {
        let bill = sqlx::query_as::<_, Bill>(
            "SELECT id, customer_name, timestamp, payment_status, payment_method \
             FROM bills WHERE id = ?1",
        )
        .bind(bill_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bill)
    }

    /// Gets a bill's items in their original insertion order.
    ///
    /// Order is stable across loads and edits: every save writes positions
    /// 0..n in editor order.
    pub async fn load_items(&self, bill_id: i64) -> DbResult<Vec<LineItem>> {
        let items = sqlx::query_as::<_, LineItem>(
            "SELECT bill_id, item_name, qty, price_cents \
             FROM bill_items WHERE bill_id = ?1 ORDER BY position",
        )
        .bind(bill_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Counts bills (for diagnostics and the seed guard).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bills")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
