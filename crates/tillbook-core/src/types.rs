//! # Domain Types
//!
//! Core domain types for TillBook POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Bill       │   │    LineItem     │   │   BillSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (rowid)     │   │  bill_id (FK)   │   │  id             │       │
//! │  │  customer_name  │   │  item_name      │   │  customer_name  │       │
//! │  │  timestamp      │   │  qty            │   │  timestamp      │       │
//! │  │  payment_status │   │  price_cents    │   │  total_cents    │       │
//! │  │  payment_method │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  BillDraft/DraftItem: editor output, not yet persisted (no ids)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A bill's total is always derived from its items (`Σ qty × price`); it is
//! never stored on the bill row. `BillSummary.total_cents` carries the value
//! the history query computed for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Payment Status
// =============================================================================

/// Whether a bill has been settled.
///
/// Stored and serialized as "Paid" / "Unpaid".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

/// New bills start unpaid.
impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Unpaid
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Unpaid => write!(f, "Unpaid"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "unpaid" => Ok(PaymentStatus::Unpaid),
            _ => Err(ValidationError::NotAllowed {
                field: "payment_status".to_string(),
                allowed: vec!["Paid".to_string(), "Unpaid".to_string()],
            }),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a bill was (or will be) paid.
///
/// Stored and serialized as "QR" / "Cash".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum PaymentMethod {
    #[serde(rename = "QR")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "QR"))]
    Qr,
    Cash,
}

/// New bills default to QR payment.
impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Qr
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Qr => write!(f, "QR"),
            PaymentMethod::Cash => write!(f, "Cash"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "qr" => Ok(PaymentMethod::Qr),
            "cash" => Ok(PaymentMethod::Cash),
            _ => Err(ValidationError::NotAllowed {
                field: "payment_method".to_string(),
                allowed: vec!["QR".to_string(), "Cash".to_string()],
            }),
        }
    }
}

// =============================================================================
// Bill
// =============================================================================

/// One sales transaction with customer and payment metadata.
///
/// `id` is the SQLite rowid, assigned on creation and stable for the bill's
/// lifetime. `timestamp` ("YYYY-MM-DD HH:MM:SS") is written once at creation
/// and never modified by edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Bill {
    pub id: i64,
    pub customer_name: String,
    pub timestamp: String,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced quantity of a named product belonging to a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LineItem {
    pub bill_id: i64,
    pub item_name: String,
    pub qty: i64,
    pub price_cents: i64,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the line subtotal (price × qty) as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.price().multiply_quantity(self.qty)
    }
}

// =============================================================================
// Bill Draft
// =============================================================================

/// An unpersisted item row produced by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftItem {
    pub item_name: String,
    pub qty: i64,
    pub price_cents: i64,
}

impl DraftItem {
    pub fn new(item_name: impl Into<String>, qty: i64, price: Money) -> Self {
        DraftItem {
            item_name: item_name.into(),
            qty,
            price_cents: price.cents(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the line subtotal (price × qty) as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.price().multiply_quantity(self.qty)
    }
}

/// Validated editor output handed to the bill store.
///
/// Produced by `BillEditorSession::commit`; the customer name is already
/// known to be non-blank and blank-named rows have been dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillDraft {
    pub customer_name: String,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    /// Items in editor order; persisted positions follow this order.
    pub items: Vec<DraftItem>,
}

impl BillDraft {
    /// Sum of item subtotals.
    pub fn total(&self) -> Money {
        Money::from_cents(self.items.iter().map(|i| i.subtotal().cents()).sum())
    }
}

// =============================================================================
// Bill Summary
// =============================================================================

/// One row of the history view: bill fields plus the derived total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BillSummary {
    pub id: i64,
    pub customer_name: String,
    pub timestamp: String,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    /// `Σ qty × price` over the bill's items; 0 for an item-less bill.
    pub total_cents: i64,
}

impl BillSummary {
    /// Returns the derived total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_new_bill_form() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Unpaid);
        assert_eq!(PaymentMethod::default(), PaymentMethod::Qr);
    }

    #[test]
    fn test_display_matches_stored_strings() {
        assert_eq!(PaymentStatus::Paid.to_string(), "Paid");
        assert_eq!(PaymentStatus::Unpaid.to_string(), "Unpaid");
        assert_eq!(PaymentMethod::Qr.to_string(), "QR");
        assert_eq!(PaymentMethod::Cash.to_string(), "Cash");
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("paid".parse::<PaymentStatus>().unwrap(), PaymentStatus::Paid);
        assert_eq!("UNPAID".parse::<PaymentStatus>().unwrap(), PaymentStatus::Unpaid);
        assert_eq!("qr".parse::<PaymentMethod>().unwrap(), PaymentMethod::Qr);
        assert_eq!("Cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert!("card".parse::<PaymentMethod>().is_err());
        assert!("".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Qr).unwrap(), "\"QR\"");
        assert_eq!(serde_json::to_string(&PaymentStatus::Paid).unwrap(), "\"Paid\"");

        let method: PaymentMethod = serde_json::from_str("\"QR\"").unwrap();
        assert_eq!(method, PaymentMethod::Qr);
    }

    #[test]
    fn test_line_item_subtotal() {
        let item = LineItem {
            bill_id: 1,
            item_name: "Tea".to_string(),
            qty: 2,
            price_cents: 2000,
        };
        assert_eq!(item.subtotal().cents(), 4000);
    }

    #[test]
    fn test_draft_total() {
        let draft = BillDraft {
            customer_name: "Ravi".to_string(),
            payment_status: PaymentStatus::Unpaid,
            payment_method: PaymentMethod::Cash,
            items: vec![
                DraftItem::new("Tea", 2, Money::from_cents(2000)),
                DraftItem::new("Bun", 1, Money::from_cents(1500)),
            ],
        };
        assert_eq!(draft.total().cents(), 5500);
        assert_eq!(draft.total().to_string(), "Rs. 55.00");
    }
}
