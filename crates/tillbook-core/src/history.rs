//! # History Filter & Sort
//!
//! Filter and sort primitives for the bill history view.
//!
//! Filtering happens in the database (see `HistoryQuery` in tillbook-db);
//! sorting happens here, in memory, over the rows the query returned - the
//! history view re-sorts whatever it is currently displaying when a column
//! header is selected.
//!
//! ## Sort semantics
//! - `Id` and `Total` compare numerically; `CustomerName` and `Timestamp`
//!   compare lexicographically (the "YYYY-MM-DD HH:MM:SS" timestamp format
//!   makes lexicographic and chronological order coincide).
//! - Payment status and method are filter-only. They are not variants of
//!   [`SortColumn`], so a sort on them cannot be expressed.
//! - Descending order is "sort ascending, then reverse", so selecting the
//!   same column twice yields the exact reverse of the first ordering.

use serde::{Deserialize, Serialize};

use crate::types::{BillSummary, PaymentMethod, PaymentStatus};

// =============================================================================
// Filter
// =============================================================================

/// History view filter. `None` on a field means "All".
///
/// Active fields are equality matches and combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillFilter {
    pub status: Option<PaymentStatus>,
    pub method: Option<PaymentMethod>,
}

impl BillFilter {
    /// The unfiltered view ("All" / "All").
    pub fn all() -> Self {
        BillFilter::default()
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = Some(method);
        self
    }
}

// =============================================================================
// Sort Columns
// =============================================================================

/// Columns the history view can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Id,
    CustomerName,
    Timestamp,
    Total,
}

/// A concrete sort request: which column, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub descending: bool,
}

// =============================================================================
// Sort State
// =============================================================================

/// Per-column toggle-direction tracker for the history view.
///
/// Each sortable column keeps one direction flag, all starting false.
/// Selecting a column flips its flag and sorts with the new value as the
/// descending flag, so the first selection of any column sorts descending
/// and re-selecting alternates. Selecting a different column leaves the
/// previous column's flag where it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    id: bool,
    customer_name: bool,
    timestamp: bool,
    total: bool,
}

impl SortState {
    pub fn new() -> Self {
        SortState::default()
    }

    /// Flips the column's direction flag and returns the sort to apply.
    pub fn toggle(&mut self, column: SortColumn) -> SortSpec {
        let flag = self.flag_mut(column);
        *flag = !*flag;
        SortSpec {
            column,
            descending: *flag,
        }
    }

    /// The direction a column would sort with if it were selected next
    /// (i.e. the stored flag, pre-toggle).
    pub fn descending(&self, column: SortColumn) -> bool {
        match column {
            SortColumn::Id => self.id,
            SortColumn::CustomerName => self.customer_name,
            SortColumn::Timestamp => self.timestamp,
            SortColumn::Total => self.total,
        }
    }

    fn flag_mut(&mut self, column: SortColumn) -> &mut bool {
        match column {
            SortColumn::Id => &mut self.id,
            SortColumn::CustomerName => &mut self.customer_name,
            SortColumn::Timestamp => &mut self.timestamp,
            SortColumn::Total => &mut self.total,
        }
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Re-sorts history rows in place per the given spec.
pub fn sort_rows(rows: &mut [BillSummary], spec: SortSpec) {
    match spec.column {
        SortColumn::Id => rows.sort_by_key(|row| row.id),
        SortColumn::Total => rows.sort_by_key(|row| row.total_cents),
        SortColumn::CustomerName => {
            rows.sort_by(|a, b| a.customer_name.cmp(&b.customer_name))
        }
        SortColumn::Timestamp => rows.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
    }

    if spec.descending {
        rows.reverse();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str, timestamp: &str, total_cents: i64) -> BillSummary {
        BillSummary {
            id,
            customer_name: name.to_string(),
            timestamp: timestamp.to_string(),
            payment_status: PaymentStatus::Unpaid,
            payment_method: PaymentMethod::Qr,
            total_cents,
        }
    }

    fn sample_rows() -> Vec<BillSummary> {
        vec![
            summary(1, "Ravi", "2026-08-01 09:00:00", 5500),
            summary(2, "Anita", "2026-08-03 14:20:00", 1500),
            summary(3, "Meena", "2026-08-02 11:45:00", 9900),
        ]
    }

    #[test]
    fn test_first_toggle_is_descending() {
        let mut state = SortState::new();
        assert!(!state.descending(SortColumn::Total));

        let spec = state.toggle(SortColumn::Total);
        assert_eq!(spec.column, SortColumn::Total);
        assert!(spec.descending);

        let spec = state.toggle(SortColumn::Total);
        assert!(!spec.descending);
    }

    #[test]
    fn test_toggling_one_column_preserves_the_others() {
        let mut state = SortState::new();
        state.toggle(SortColumn::Total); // Total now descending=true

        let spec = state.toggle(SortColumn::Id);
        assert!(spec.descending); // Id's own first toggle

        // Back to Total: its flag was left at true, so it flips to false.
        let spec = state.toggle(SortColumn::Total);
        assert!(!spec.descending);
    }

    #[test]
    fn test_sort_total_numeric() {
        let mut rows = sample_rows();
        sort_rows(
            &mut rows,
            SortSpec {
                column: SortColumn::Total,
                descending: false,
            },
        );
        let totals: Vec<i64> = rows.iter().map(|r| r.total_cents).collect();
        assert_eq!(totals, vec![1500, 5500, 9900]);
    }

    #[test]
    fn test_sort_descending_is_exact_reverse() {
        let mut ascending = sample_rows();
        sort_rows(
            &mut ascending,
            SortSpec {
                column: SortColumn::Total,
                descending: false,
            },
        );

        let mut descending = sample_rows();
        sort_rows(
            &mut descending,
            SortSpec {
                column: SortColumn::Total,
                descending: true,
            },
        );

        let fwd: Vec<i64> = ascending.iter().map(|r| r.id).collect();
        let mut rev: Vec<i64> = descending.iter().map(|r| r.id).collect();
        rev.reverse();
        assert_eq!(fwd, rev);
    }

    #[test]
    fn test_sort_customer_name_lexicographic() {
        let mut rows = sample_rows();
        sort_rows(
            &mut rows,
            SortSpec {
                column: SortColumn::CustomerName,
                descending: false,
            },
        );
        let names: Vec<&str> = rows.iter().map(|r| r.customer_name.as_str()).collect();
        assert_eq!(names, vec!["Anita", "Meena", "Ravi"]);
    }

    #[test]
    fn test_sort_timestamp_lexicographic_is_chronological() {
        let mut rows = sample_rows();
        sort_rows(
            &mut rows,
            SortSpec {
                column: SortColumn::Timestamp,
                descending: false,
            },
        );
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_filter_builder() {
        let filter = BillFilter::all();
        assert_eq!(filter.status, None);
        assert_eq!(filter.method, None);

        let filter = BillFilter::all()
            .with_status(PaymentStatus::Paid)
            .with_method(PaymentMethod::Cash);
        assert_eq!(filter.status, Some(PaymentStatus::Paid));
        assert_eq!(filter.method, Some(PaymentMethod::Cash));
    }
}
