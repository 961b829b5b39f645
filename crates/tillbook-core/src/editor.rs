//! # Bill Editor Session
//!
//! The in-memory working copy of a bill being created or edited.
//!
//! ## Editor Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Editor Session Operations                            │
//! │                                                                         │
//! │  UI Action                 Session Call             State Change        │
//! │  ─────────                 ────────────             ────────────        │
//! │                                                                         │
//! │  Click "Add Item" ───────► add_blank_row() ───────► rows.push(row)     │
//! │                                                                         │
//! │  Type in price field ────► set_price_input() ─────► row.price = parsed │
//! │                                                     row.subtotal, total│
//! │                                                     recomputed         │
//! │  Click row delete ───────► remove_row(id) ────────► rows.retain(..)    │
//! │                                                                         │
//! │  Click "Save Bill" ──────► commit() ──────────────► BillDraft (or      │
//! │                                                     ValidationError)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is a transient, disposable copy: dropping it cancels the edit;
//! `commit` hands a validated [`BillDraft`] to the store, which replaces the
//! persisted item set wholesale. Rows carry a stable [`RowId`] generated by
//! the session, so removing a row never re-indexes the others.
//!
//! Subtotals and the session total are recomputed synchronously inside the
//! mutation methods. There is no observer wiring; callers read the fresh
//! values right after mutating.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Bill, BillDraft, DraftItem, LineItem, PaymentMethod, PaymentStatus};
use crate::validation::{validate_customer_name, validate_price_cents, validate_qty};

// =============================================================================
// Row Identity
// =============================================================================

/// Stable identifier for an editor row.
///
/// Assigned from a session-local counter when the row is added and never
/// reused within the session. Not related to any persisted id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(u64);

// =============================================================================
// Editor Row
// =============================================================================

/// One item row in the editor: name, price, quantity, cached subtotal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorRow {
    id: RowId,
    item_name: String,
    price: Money,
    qty: i64,
    subtotal: Money,
}

impl EditorRow {
    fn new(id: RowId, item_name: String, price: Money, qty: i64) -> Self {
        let mut row = EditorRow {
            id,
            item_name,
            price,
            qty,
            subtotal: Money::zero(),
        };
        row.recompute();
        row
    }

    #[inline]
    pub fn id(&self) -> RowId {
        self.id
    }

    #[inline]
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn qty(&self) -> i64 {
        self.qty
    }

    /// The cached `price × qty`, refreshed by every mutation method.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    fn recompute(&mut self) {
        self.subtotal = self.price.multiply_quantity(self.qty);
    }
}

// =============================================================================
// Bill Editor Session
// =============================================================================

/// Mutable row list for an in-progress bill edit.
///
/// ## Invariants
/// - Row order is insertion order; it becomes the persisted item order.
/// - Every row's `subtotal` equals `price × qty` after any mutation returns.
/// - The session never touches the store; `commit` only produces a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillEditorSession {
    customer_name: String,
    payment_status: PaymentStatus,
    payment_method: PaymentMethod,
    rows: Vec<EditorRow>,
    next_row_id: u64,
}

impl BillEditorSession {
    /// Creates a blank session for a new bill.
    ///
    /// Starts with the new-bill form defaults: unpaid, QR, and a single
    /// blank starter row (empty name, price 0, qty 1).
    pub fn new() -> Self {
        let mut session = BillEditorSession {
            customer_name: String::new(),
            payment_status: PaymentStatus::default(),
            payment_method: PaymentMethod::default(),
            rows: Vec::new(),
            next_row_id: 0,
        };
        session.add_blank_row();
        session
    }

    /// Creates a session seeded from an existing bill and its items.
    ///
    /// One row per stored item, in stored order; no starter row is added.
    pub fn for_bill(bill: &Bill, items: &[LineItem]) -> Self {
        let mut session = BillEditorSession {
            customer_name: bill.customer_name.clone(),
            payment_status: bill.payment_status,
            payment_method: bill.payment_method,
            rows: Vec::new(),
            next_row_id: 0,
        };
        for item in items {
            session.add_row(item.item_name.clone(), item.price(), item.qty);
        }
        session
    }

    // -------------------------------------------------------------------------
    // Row operations
    // -------------------------------------------------------------------------

    /// Appends a row and returns its stable id.
    pub fn add_row(&mut self, item_name: impl Into<String>, price: Money, qty: i64) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        self.rows.push(EditorRow::new(id, item_name.into(), price, qty));
        id
    }

    /// Appends a blank row (empty name, price 0, qty 1).
    pub fn add_blank_row(&mut self) -> RowId {
        self.add_row(String::new(), Money::zero(), 1)
    }

    /// Removes a row by id. Returns false if the id is not in the session.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    /// Sets a row's item name. Returns false if the id is not in the session.
    pub fn set_item_name(&mut self, id: RowId, name: &str) -> bool {
        match self.row_mut(id) {
            Some(row) => {
                row.item_name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Sets a row's price and recomputes its subtotal.
    pub fn set_price(&mut self, id: RowId, price: Money) -> bool {
        match self.row_mut(id) {
            Some(row) => {
                row.price = price;
                row.recompute();
                true
            }
            None => false,
        }
    }

    /// Sets a row's quantity and recomputes its subtotal.
    pub fn set_qty(&mut self, id: RowId, qty: i64) -> bool {
        match self.row_mut(id) {
            Some(row) => {
                row.qty = qty;
                row.recompute();
                true
            }
            None => false,
        }
    }

    /// Sets a row's price from raw field text.
    ///
    /// Empty or non-numeric input counts as zero; it never errors.
    pub fn set_price_input(&mut self, id: RowId, input: &str) -> bool {
        self.set_price(id, Money::parse_lenient(input))
    }

    /// Sets a row's quantity from raw field text.
    ///
    /// Empty or non-numeric input counts as zero; it never errors.
    pub fn set_qty_input(&mut self, id: RowId, input: &str) -> bool {
        self.set_qty(id, parse_qty_lenient(input))
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Rows in editor order.
    pub fn rows(&self) -> &[EditorRow] {
        &self.rows
    }

    /// A row's cached subtotal, or None for an unknown id.
    pub fn subtotal(&self, id: RowId) -> Option<Money> {
        self.rows.iter().find(|row| row.id == id).map(|row| row.subtotal)
    }

    /// The session total: sum of all row subtotals.
    pub fn total(&self) -> Money {
        Money::from_cents(self.rows.iter().map(|row| row.subtotal.cents()).sum())
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn set_customer_name(&mut self, name: &str) {
        self.customer_name = name.to_string();
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.payment_status = status;
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    // -------------------------------------------------------------------------
    // Commit
    // -------------------------------------------------------------------------

    /// Validates the session and produces a draft for the store.
    ///
    /// Fails with [`ValidationError::Required`] when the customer name is
    /// blank, before any persistence is attempted. Rows whose item name is
    /// blank are dropped as whole rows - the name, qty, and price of one row
    /// filter together. An empty item list is permitted.
    pub fn commit(&self) -> Result<BillDraft, ValidationError> {
        validate_customer_name(&self.customer_name)?;

        let mut items = Vec::new();
        for row in self.rows.iter().filter(|r| !r.item_name.trim().is_empty()) {
            validate_qty(row.qty)?;
            validate_price_cents(row.price.cents())?;
            items.push(DraftItem::new(row.item_name.clone(), row.qty, row.price));
        }

        Ok(BillDraft {
            customer_name: self.customer_name.trim().to_string(),
            payment_status: self.payment_status,
            payment_method: self.payment_method,
            items,
        })
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut EditorRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

impl Default for BillEditorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a quantity field, treating anything unusable as zero.
///
/// Unsigned digits only; signs, decimals, and stray characters all count as
/// zero, matching the price field's lenient behavior.
fn parse_qty_lenient(input: &str) -> i64 {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    input.parse().unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line_item(bill_id: i64, name: &str, qty: i64, price_cents: i64) -> LineItem {
        LineItem {
            bill_id,
            item_name: name.to_string(),
            qty,
            price_cents,
        }
    }

    #[test]
    fn test_new_session_has_one_blank_starter_row() {
        let session = BillEditorSession::new();

        assert_eq!(session.rows().len(), 1);
        let row = &session.rows()[0];
        assert_eq!(row.item_name(), "");
        assert_eq!(row.price(), Money::zero());
        assert_eq!(row.qty(), 1);
        assert_eq!(session.total(), Money::zero());
        assert_eq!(session.payment_status(), PaymentStatus::Unpaid);
        assert_eq!(session.payment_method(), PaymentMethod::Qr);
    }

    #[test]
    fn test_totals_recompute_on_mutation() {
        let mut session = BillEditorSession::new();
        let tea = session.rows()[0].id();
        session.set_item_name(tea, "Tea");
        session.set_price(tea, Money::from_cents(2000));
        session.set_qty(tea, 2);

        assert_eq!(session.subtotal(tea), Some(Money::from_cents(4000)));
        assert_eq!(session.total(), Money::from_cents(4000));

        let bun = session.add_row("Bun", Money::from_cents(1500), 1);
        assert_eq!(session.subtotal(bun), Some(Money::from_cents(1500)));
        assert_eq!(session.total(), Money::from_cents(5500));
        assert_eq!(session.total().to_string(), "Rs. 55.00");
    }

    #[test]
    fn test_lenient_inputs_count_as_zero() {
        let mut session = BillEditorSession::new();
        let id = session.rows()[0].id();
        session.set_item_name(id, "Tea");

        session.set_price_input(id, "20.50");
        session.set_qty_input(id, "2");
        assert_eq!(session.subtotal(id), Some(Money::from_cents(4100)));

        session.set_price_input(id, "oops");
        assert_eq!(session.subtotal(id), Some(Money::zero()));

        session.set_price_input(id, "20");
        session.set_qty_input(id, "");
        assert_eq!(session.subtotal(id), Some(Money::zero()));
        assert_eq!(session.total(), Money::zero());
    }

    #[test]
    fn test_remove_row_keeps_other_ids_stable() {
        let mut session = BillEditorSession::new();
        let first = session.rows()[0].id();
        let second = session.add_row("Tea", Money::from_cents(2000), 1);
        let third = session.add_row("Bun", Money::from_cents(1500), 3);

        assert!(session.remove_row(second));
        assert!(!session.remove_row(second)); // already gone

        assert_eq!(session.rows().len(), 2);
        assert_eq!(session.subtotal(first), Some(Money::zero()));
        assert_eq!(session.subtotal(third), Some(Money::from_cents(4500)));
        assert_eq!(session.total(), Money::from_cents(4500));
    }

    #[test]
    fn test_commit_requires_customer_name() {
        let session = BillEditorSession::new();
        let err = session.commit().unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));

        let mut session = BillEditorSession::new();
        session.set_customer_name("   ");
        assert!(session.commit().is_err());
    }

    #[test]
    fn test_commit_filters_blank_rows_as_whole_rows() {
        let mut session = BillEditorSession::new();
        session.set_customer_name("Ravi");

        // Starter row stays blank; it must drop along with its qty/price.
        let blank = session.rows()[0].id();
        session.set_price(blank, Money::from_cents(9999));
        session.add_row("Tea", Money::from_cents(2000), 2);
        session.add_row("   ", Money::from_cents(500), 4);
        session.add_row("Bun", Money::from_cents(1500), 1);

        let draft = session.commit().unwrap();
        assert_eq!(
            draft.items,
            vec![
                DraftItem::new("Tea", 2, Money::from_cents(2000)),
                DraftItem::new("Bun", 1, Money::from_cents(1500)),
            ]
        );
        assert_eq!(draft.total(), Money::from_cents(5500));
    }

    #[test]
    fn test_commit_trims_customer_name_and_allows_empty_items() {
        let mut session = BillEditorSession::new();
        session.set_customer_name("  Ravi  ");

        let draft = session.commit().unwrap();
        assert_eq!(draft.customer_name, "Ravi");
        assert!(draft.items.is_empty());
        assert_eq!(draft.payment_status, PaymentStatus::Unpaid);
        assert_eq!(draft.payment_method, PaymentMethod::Qr);
    }

    #[test]
    fn test_commit_rejects_negative_values_from_typed_setters() {
        let mut session = BillEditorSession::new();
        session.set_customer_name("Ravi");
        let id = session.rows()[0].id();
        session.set_item_name(id, "Tea");
        session.set_qty(id, -2);

        let err = session.commit().unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_seeded_session_reproduces_items_in_order() {
        let bill = Bill {
            id: 7,
            customer_name: "Ravi".to_string(),
            timestamp: "2026-08-05 10:30:00".to_string(),
            payment_status: PaymentStatus::Paid,
            payment_method: PaymentMethod::Cash,
        };
        let items = vec![
            line_item(7, "Tea", 2, 2000),
            line_item(7, "Bun", 1, 1500),
        ];

        let session = BillEditorSession::for_bill(&bill, &items);
        assert_eq!(session.customer_name(), "Ravi");
        assert_eq!(session.payment_status(), PaymentStatus::Paid);
        assert_eq!(session.payment_method(), PaymentMethod::Cash);
        assert_eq!(session.rows().len(), 2);
        assert_eq!(session.total(), Money::from_cents(5500));

        // Committing the untouched session reproduces the stored items.
        let draft = session.commit().unwrap();
        assert_eq!(
            draft.items,
            vec![
                DraftItem::new("Tea", 2, Money::from_cents(2000)),
                DraftItem::new("Bun", 1, Money::from_cents(1500)),
            ]
        );
    }

    #[test]
    fn test_parse_qty_lenient() {
        assert_eq!(parse_qty_lenient("3"), 3);
        assert_eq!(parse_qty_lenient(" 12 "), 12);
        assert_eq!(parse_qty_lenient(""), 0);
        assert_eq!(parse_qty_lenient("abc"), 0);
        assert_eq!(parse_qty_lenient("-3"), 0);
        assert_eq!(parse_qty_lenient("2.5"), 0);
    }
}
