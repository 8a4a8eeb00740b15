//! # Checkout Module
//!
//! Coordinates payment and customer notification for an order.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CheckoutService::run_checkout(order)                                   │
//! │                                                                         │
//! │  order already Paid? ──yes──► warn, false (never charge twice)          │
//! │      │no                                                                │
//! │  processor.process(order)                                               │
//! │      ├── true  ──► order → Paid ──► notifier.send(order) ──► true       │
//! │      └── false ──► error log, order stays Open, no notification, false  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both collaborators are injected. Adding QRIS, or a new notifier, means
//! adding a type; `CheckoutService` is untouched.

use tracing::{error, info, warn};

use crate::types::{Order, PaymentMethod};

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Charges an order through one payment channel.
pub trait PaymentProcessor: Send + Sync {
    fn method(&self) -> PaymentMethod;

    /// Returns `true` when the payment went through.
    fn process(&self, order: &Order) -> bool;
}

/// Tells the customer their order was paid.
pub trait NotificationService: Send + Sync {
    fn send(&self, order: &Order);
}

// =============================================================================
// Payment Processors
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn process(&self, order: &Order) -> bool {
        info!(order_id = %order.id, total = %order.total, "Payment: processing credit card");
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferProcessor;

impl PaymentProcessor for BankTransferProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::BankTransfer
    }

    fn process(&self, order: &Order) -> bool {
        info!(order_id = %order.id, total = %order.total, "Payment: processing bank transfer");
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QrisProcessor;

impl PaymentProcessor for QrisProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Qris
    }

    fn process(&self, order: &Order) -> bool {
        info!(order_id = %order.id, total = %order.total, "Payment: processing QRIS");
        true
    }
}

/// Builds the processor for `method`.
pub fn processor_for(method: PaymentMethod) -> Box<dyn PaymentProcessor> {
    match method {
        PaymentMethod::CreditCard => Box::new(CreditCardProcessor),
        PaymentMethod::BankTransfer => Box::new(BankTransferProcessor),
        PaymentMethod::Qris => Box::new(QrisProcessor),
    }
}

// =============================================================================
// Notifiers
// =============================================================================

/// Sends a confirmation email (logged; no mail transport here).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl NotificationService for EmailNotifier {
    fn send(&self, order: &Order) {
        info!(
            order_id = %order.id,
            customer = %order.customer_name,
            "Notification: sending confirmation email to {}",
            order.customer_name
        );
    }
}

// =============================================================================
// Checkout Service
// =============================================================================

pub struct CheckoutService {
    payment_processor: Box<dyn PaymentProcessor>,
    notifier: Box<dyn NotificationService>,
}

impl CheckoutService {
    pub fn new(
        payment_processor: Box<dyn PaymentProcessor>,
        notifier: Box<dyn NotificationService>,
    ) -> Self {
        CheckoutService {
            payment_processor,
            notifier,
        }
    }

    /// Method of the injected processor.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_processor.method()
    }

    /// Pays for `order` and notifies the customer.
    ///
    /// Returns `false` if payment fails or the order was already paid.
    pub fn run_checkout(&self, order: &mut Order) -> bool {
        info!(
            order_id = %order.id,
            customer = %order.customer_name,
            total = %order.total,
            method = %self.payment_processor.method(),
            "Starting checkout for {}",
            order.customer_name
        );

        if order.is_paid() {
            warn!(order_id = %order.id, "Order already paid, checkout skipped");
            return false;
        }

        if !self.payment_processor.process(order) {
            error!(order_id = %order.id, "Payment failed, transaction cancelled");
            return false;
        }

        order.mark_paid();
        self.notifier.send(order);
        info!(order_id = %order.id, status = ?order.status(), "Checkout succeeded");
        true
    }
}

impl std::fmt::Debug for CheckoutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutService")
            .field("payment_method", &self.payment_processor.method())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::OrderStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct DecliningProcessor;

    impl PaymentProcessor for DecliningProcessor {
        fn method(&self) -> PaymentMethod {
            PaymentMethod::CreditCard
        }

        fn process(&self, _order: &Order) -> bool {
            false
        }
    }

    struct CountingProcessor(Arc<AtomicUsize>);

    impl PaymentProcessor for CountingProcessor {
        fn method(&self) -> PaymentMethod {
            PaymentMethod::Qris
        }

        fn process(&self, _order: &Order) -> bool {
            self.0.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

    impl RecordingNotifier {
        fn sent(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl NotificationService for RecordingNotifier {
        fn send(&self, order: &Order) {
            self.0.lock().unwrap().push(order.customer_name.clone());
        }
    }

    fn order(name: &str) -> Order {
        Order::new(name, Money::from_major_minor(500_000, 0))
    }

    #[test]
    fn test_successful_checkout_marks_paid_and_notifies() {
        let notifier = RecordingNotifier::default();
        let service = CheckoutService::new(Box::new(CreditCardProcessor), Box::new(notifier.clone()));

        let mut andi = order("Andi");
        assert!(service.run_checkout(&mut andi));
        assert_eq!(andi.status(), OrderStatus::Paid);
        assert_eq!(notifier.sent(), vec!["Andi".to_string()]);
    }

    #[test]
    fn test_failed_payment_leaves_order_open() {
        let notifier = RecordingNotifier::default();
        let service = CheckoutService::new(Box::new(DecliningProcessor), Box::new(notifier.clone()));

        let mut budi = order("Budi");
        assert!(!service.run_checkout(&mut budi));
        assert_eq!(budi.status(), OrderStatus::Open);
        assert!(notifier.sent().is_empty());
    }

    #[test]
    fn test_paid_order_not_charged_twice() {
        let charges = Arc::new(AtomicUsize::new(0));
        let notifier = RecordingNotifier::default();
        let service = CheckoutService::new(
            Box::new(CountingProcessor(Arc::clone(&charges))),
            Box::new(notifier.clone()),
        );

        let mut budi = order("Budi");
        assert!(service.run_checkout(&mut budi));
        assert!(!service.run_checkout(&mut budi));
        assert_eq!(charges.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.sent().len(), 1);
        assert!(budi.is_paid());
    }

    #[test]
    fn test_processor_for_matches_method() {
        for method in PaymentMethod::ALL {
            assert_eq!(processor_for(method).method(), method);
        }
    }

    #[test]
    fn test_every_builtin_processor_succeeds() {
        for method in PaymentMethod::ALL {
            let service = CheckoutService::new(processor_for(method), Box::new(EmailNotifier));
            assert_eq!(service.payment_method(), method);
            let mut o = order("Citra");
            assert!(service.run_checkout(&mut o), "{method} should succeed");
        }
    }
}
