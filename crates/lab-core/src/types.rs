//! # Domain Types
//!
//! Core domain types used throughout SOLID Lab.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Student      │   │      Order      │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  nim            │   │  id (UUID)      │   │  bps (u32)      │       │
//! │  │  sks            │   │  customer_name  │   │  1000 = 10%     │       │
//! │  │  prerequisite   │   │  total (Money)  │   └─────────────────┘       │
//! │  └─────────────────┘   │  status         │                              │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  OrderStatus    │   │ PaymentMethod   │                              │
//! │  │  Open           │   │ CreditCard      │                              │
//! │  │  Paid           │   │ BankTransfer    │                              │
//! │  └─────────────────┘   │ Qris            │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the fixed VAT used by the pricing calculator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a multiplier: 1000 bps → 0.10.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }
}

// =============================================================================
// Student
// =============================================================================

/// A student applying for course registration.
///
/// Immutable once built: rules only ever see `&Student`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    nim: String,
    sks: u32,
    prerequisite_met: bool,
}

impl Student {
    /// Creates a student record.
    pub fn new(nim: impl Into<String>, sks: u32, prerequisite_met: bool) -> Self {
        Student {
            nim: nim.into(),
            sks,
            prerequisite_met,
        }
    }

    /// Creates a student whose prerequisites are already satisfied.
    pub fn new_eligible(nim: impl Into<String>, sks: u32) -> Self {
        Student::new(nim, sks, true)
    }

    /// Student identification number (NIM).
    #[inline]
    pub fn nim(&self) -> &str {
        &self.nim
    }

    /// Credit load (SKS) requested this semester.
    #[inline]
    pub fn sks(&self) -> u32 {
        self.sks
    }

    /// Whether prerequisite courses have been passed.
    #[inline]
    pub fn prerequisite_met(&self) -> bool {
        self.prerequisite_met
    }
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment through the card processor.
    CreditCard,
    /// Manual bank transfer.
    BankTransfer,
    /// QRIS QR-code payment.
    Qris,
}

impl PaymentMethod {
    /// All supported methods, in display order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::Qris,
    ];

    /// The snake_case name used on the command line and in JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Qris => "qris",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == name)
            .ok_or_else(|| CoreError::UnknownPaymentMethod(s.to_string()))
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting for payment.
    #[default]
    Open,
    /// Payment succeeded.
    Paid,
}

// =============================================================================
// Order
// =============================================================================

/// A customer order going through checkout.
///
/// `status` is private: only `CheckoutService` moves an order to `Paid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub total: Money,
    status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an open order with a fresh UUID v4.
    pub fn new(customer_name: impl Into<String>, total: Money) -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            customer_name: customer_name.into(),
            total,
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    #[inline]
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    pub(crate) fn mark_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.fraction() - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_student_defaults_to_eligible() {
        let student = Student::new_eligible("1049", 23);
        assert_eq!(student.nim(), "1049");
        assert_eq!(student.sks(), 23);
        assert!(student.prerequisite_met());
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!(
            "credit_card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            " Bank_Transfer ".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
        assert_eq!("qris".parse::<PaymentMethod>().unwrap(), PaymentMethod::Qris);

        let err = "paypal".parse::<PaymentMethod>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownPaymentMethod(ref m) if m == "paypal"));
    }

    #[test]
    fn test_payment_method_serde_matches_display() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{method}\""));
        }
    }

    #[test]
    fn test_new_order_is_open() {
        let order = Order::new("Andi", Money::from_major_minor(500_000, 0));
        assert_eq!(order.status(), OrderStatus::Open);
        assert!(!order.is_paid());
        assert!(Uuid::parse_str(&order.id).is_ok());
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Open);
    }
}
