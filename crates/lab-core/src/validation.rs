//! # Validation Module
//!
//! Input validation for values that arrive as raw user input.
//!
//! ## Where This Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Kinds of "Validation"                          │
//! │                                                                         │
//! │  1. Input validation (THIS MODULE)                                     │
//! │     "Is `24a11` a NIM at all?"                                          │
//! │     → Err(ValidationError), the value is never built                    │
//! │                                                                         │
//! │  2. Business rules (`registration` module)                             │
//! │     "May student 24111 take 26 SKS?"                                    │
//! │     → false, with a log line naming the rule                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lab_core::validation::{validate_student_id, validated_student};
//!
//! assert!(validate_student_id("24111").is_ok());
//! assert!(validate_student_id("24-111").is_err());
//!
//! let student = validated_student("1049", 20, true).unwrap();
//! assert_eq!(student.sks(), 20);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Student;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest NIM accepted.
pub const MAX_NIM_LENGTH: usize = 20;

/// Longest customer name accepted.
pub const MAX_CUSTOMER_NAME_LENGTH: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a student identification number (NIM).
///
/// ## Rules
/// - Must not be empty
/// - At most 20 characters
/// - Digits only (leading zeros are significant, so it stays a string)
pub fn validate_student_id(nim: &str) -> ValidationResult<()> {
    let nim = nim.trim();

    if nim.is_empty() {
        return Err(ValidationError::Required {
            field: "nim".to_string(),
        });
    }

    if !nim.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "nim".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    // ASCII digits only from here, so bytes == characters.
    if nim.len() > MAX_NIM_LENGTH {
        return Err(ValidationError::TooLong {
            field: "nim".to_string(),
            max: MAX_NIM_LENGTH,
        });
    }

    Ok(())
}

/// Validates a customer name for an order.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer_name".to_string(),
        });
    }

    if name.chars().count() > MAX_CUSTOMER_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "customer_name".to_string(),
            max: MAX_CUSTOMER_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested credit load and narrows it to `u32`.
///
/// Values above `SKS_LIMIT` are NOT rejected here; exceeding the limit is a
/// business rule outcome, not malformed input.
pub fn validate_credit_load(sks: i64) -> ValidationResult<u32> {
    if sks < 0 {
        return Err(ValidationError::Negative {
            field: "sks".to_string(),
        });
    }

    u32::try_from(sks).map_err(|_| ValidationError::OutOfRange {
        field: "sks".to_string(),
        min: 0,
        max: u32::MAX as i64,
    })
}

/// Validates an order total given in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (fully discounted orders)
pub fn validate_order_total(minor_units: i64) -> ValidationResult<Money> {
    if minor_units < 0 {
        return Err(ValidationError::Negative {
            field: "total".to_string(),
        });
    }

    Ok(Money::from_minor_units(minor_units))
}

// =============================================================================
// Builders
// =============================================================================

/// Builds a `Student` from raw input, validating every field first.
pub fn validated_student(
    nim: &str,
    sks: i64,
    prerequisite_met: bool,
) -> ValidationResult<Student> {
    validate_student_id(nim)?;
    let sks = validate_credit_load(sks)?;
    Ok(Student::new(nim.trim(), sks, prerequisite_met))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_student_id() {
        assert!(validate_student_id("24111").is_ok());
        assert!(validate_student_id("0244").is_ok());
        assert!(validate_student_id(" 1049 ").is_ok());

        assert!(matches!(
            validate_student_id(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_student_id("24a11"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_student_id(&"1".repeat(21)),
            Err(ValidationError::TooLong { max: 20, .. })
        ));
    }

    #[test]
    fn test_non_ascii_nim_is_format_error() {
        // 8 chars but 24 bytes: must not be reported as too long.
        assert!(matches!(
            validate_student_id("２４１１１２３４"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_student_id("ñ"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Andi").is_ok());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"B".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_credit_load() {
        assert_eq!(validate_credit_load(0).unwrap(), 0);
        assert_eq!(validate_credit_load(26).unwrap(), 26);
        assert!(matches!(
            validate_credit_load(-1),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_credit_load(i64::MAX),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_order_total() {
        assert_eq!(validate_order_total(0).unwrap(), Money::zero());
        assert_eq!(validate_order_total(1099).unwrap().minor_units(), 1099);
        assert!(validate_order_total(-1).is_err());
    }

    #[test]
    fn test_validated_student_trims_nim() {
        let student = validated_student(" 0244 ", 20, false).unwrap();
        assert_eq!(student.nim(), "0244");
        assert!(!student.prerequisite_met());
    }
}
