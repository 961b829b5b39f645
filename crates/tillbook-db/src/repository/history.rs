//! # History Query
//!
//! The read side of the history view: bills with their derived totals,
//! filtered by payment status/method.
//!
//! Filter values are always bound parameters (`QueryBuilder::push_bind`),
//! never interpolated into the SQL text. Rows come back ascending by id -
//! the view's default order - and an optional [`SortSpec`] re-sorts them in
//! memory, since a header click re-sorts whatever is currently displayed.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use tillbook_core::history::{sort_rows, BillFilter, SortSpec};
use tillbook_core::BillSummary;

/// Composes bill reads with filters and an optional sort into a
/// display-ready listing.
#[derive(Debug, Clone)]
pub struct HistoryQuery {
    pool: SqlitePool,
}

impl HistoryQuery {
    /// Creates a new HistoryQuery.
    pub fn new(pool: SqlitePool) -> Self {
        HistoryQuery { pool }
    }

    /// Lists bills matching the filter, each with its derived total.
    ///
    /// ## Semantics
    /// - `total_cents` = `Σ qty × price` over the bill's items, 0 for an
    ///   item-less bill; computed per call, never read from the bill row.
    /// - Active filter fields are equality matches, AND-combined.
    /// - With `sort` = `None`, rows are ascending by id. Otherwise rows are
    ///   re-sorted per the requested column and direction (id/total numeric,
    ///   name/timestamp lexicographic).
    pub async fn list(
        &self,
        filter: &BillFilter,
        sort: Option<SortSpec>,
    ) -> DbResult<Vec<BillSummary>> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT b.id, b.customer_name, b.timestamp, b.payment_status, b.payment_method, \
             COALESCE((SELECT SUM(i.qty * i.price_cents) FROM bill_items i \
                       WHERE i.bill_id = b.id), 0) AS total_cents \
             FROM bills b",
        );

        let mut sep = " WHERE ";
        if let Some(status) = filter.status {
            qb.push(sep);
            qb.push("b.payment_status = ");
            qb.push_bind(status);
            sep = " AND ";
        }
        if let Some(method) = filter.method {
            qb.push(sep);
            qb.push("b.payment_method = ");
            qb.push_bind(method);
        }

        qb.push(" ORDER BY b.id");

        let mut rows: Vec<BillSummary> =
            qb.build_query_as().fetch_all(&self.pool).await?;

        if let Some(spec) = sort {
            sort_rows(&mut rows, spec);
        }

        debug!(count = rows.len(), "History listing");
        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
