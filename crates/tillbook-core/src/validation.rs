//! # Validation Module
//!
//! Input validation for TillBook POS.
//!
//! Validators run in the editor before a draft is handed to the store; the
//! database schema backs them up with NOT NULL and CHECK constraints.

use crate::error::ValidationError;
use crate::MAX_CUSTOMER_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be blank (whitespace-only counts as blank)
/// - Must be at most 200 characters after trimming
///
/// ## Example
/// ```rust
/// use tillbook_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Ravi").is_ok());
/// assert!(validate_customer_name("   ").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer_name".to_string(),
        });
    }

    if name.len() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer_name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item quantity. Zero is allowed; negative is not.
pub fn validate_qty(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::OutOfRange {
            field: "qty".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a price in paise. Zero is allowed (free items); negative is not.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Ravi").is_ok());
        assert!(validate_customer_name("  Ravi  ").is_ok());

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_qty() {
        assert!(validate_qty(0).is_ok());
        assert!(validate_qty(12).is_ok());
        assert!(validate_qty(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(2000).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }
}
