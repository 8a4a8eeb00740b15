//! # lab-core: Pure Business Logic for SOLID Lab
//!
//! Three small business components, each built from injected parts so that
//! new behaviour is added by writing a new type rather than editing a
//! coordinator.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SOLID Lab Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    solid-lab (apps/lab-cli)                     │   │
//! │  │    register ──► price ──► checkout ──► demo                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lab-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────────┐  ┌───────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │  │ registration │  │  pricing  │  │ checkout  │  │validation│  │   │
//! │  │  │ rule chain   │  │ discount  │  │ processor │  │  input   │  │   │
//! │  │  │              │  │ + VAT     │  │ notifier  │  │  checks  │  │   │
//! │  │  └──────────────┘  └───────────┘  └───────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • tracing events only      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Student, Order, PaymentMethod, TaxRate)
//! - [`money`] - Integer money for order totals
//! - [`error`] - Domain error types
//! - [`validation`] - Raw input validation
//! - [`registration`] - Registration rule chain
//! - [`pricing`] - Discount and tax calculation
//! - [`checkout`] - Payment and notification coordination
//!
//! ## Example Usage
//!
//! ```rust
//! use lab_core::pricing::compute_final_price;
//! use lab_core::registration::{standard_rules, RegistrationService};
//! use lab_core::Student;
//!
//! let service = RegistrationService::new(standard_rules());
//! assert!(service.register(&Student::new_eligible("1049", 23)));
//!
//! assert_eq!(compute_final_price(0.0, 10.0), 0.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod registration;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{CheckoutService, NotificationService, PaymentProcessor};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::{compute_final_price, PriceQuote};
pub use registration::{RegistrationOutcome, RegistrationService, ValidationRule};
pub use types::*;
