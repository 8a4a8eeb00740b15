//! # Error Types
//!
//! Domain-specific error types for lab-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lab-core errors (this file)                                           │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  lab-cli errors (binary)                                               │
//! │  └── ConfigError      - Malformed environment configuration            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow::Error → exit code         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! A rejected registration or a declined payment is a business outcome and
//! is reported as `false`. Out-of-range prices and discounts are clamped.
//! Errors here only cover malformed input used to BUILD domain values.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Payment method name is not one of the supported processors.
    ///
    /// ## When This Occurs
    /// - CLI receives `--method paypal`
    /// - A stored order references a method that was removed
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before a `Student` or `Order` is built.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., letters inside a NIM).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownPaymentMethod("paypal".to_string());
        assert_eq!(err.to_string(), "Unknown payment method: paypal");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "nim".to_string(),
        };
        assert_eq!(err.to_string(), "nim is required");

        let err = ValidationError::Negative {
            field: "sks".to_string(),
        };
        assert_eq!(err.to_string(), "sks must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "nim".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: nim is required");
    }
}
