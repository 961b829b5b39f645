//! # Error Types
//!
//! Domain error types for tillbook-core.
//!
//! Validation failures are raised before any persistence is attempted, so a
//! rejected commit leaves both the editor session and the store untouched.
//! Database failures have their own type (`DbError` in tillbook-db).

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Errors are enum variants with context, never bare strings; each variant
/// renders a user-facing message.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "customer_name".to_string(),
        };
        assert_eq!(err.to_string(), "customer_name is required");

        let err = ValidationError::TooLong {
            field: "customer_name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "customer_name must be at most 200 characters");
    }
}
