//! # Pricing Module
//!
//! Discount and tax calculation for price quotes.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_final_price(base, discount)                                    │
//! │                                                                         │
//! │  base <= 0 ?          ──yes──► 0.0                                      │
//! │      │no                                                                │
//! │  discount < 0 ?       ──yes──► base   (untouched, no tax)               │
//! │      │no                                                                │
//! │  discount > 100 ?     ──yes──► discount = 100                           │
//! │  discounted = base × (1 − discount / 100)                               │
//! │  tax        = discounted × 10%        ◄── applied ONCE                  │
//! │  final      = discounted + tax                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All arithmetic is `f64` and nothing is rounded here; round for display.
//! Out-of-range input is clamped, never rejected. NaN fails both bound
//! checks and propagates into a NaN quote.
//!
//! ## Example
//! ```rust
//! use lab_core::pricing::compute_final_price;
//!
//! let total = compute_final_price(999.0, 33.0);
//! assert!((total - 736.263).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::TaxRate;

/// VAT applied to every discounted price.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Upper bound of the discount percentage.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;

// =============================================================================
// Price Quote
// =============================================================================

/// Breakdown of a single price calculation.
///
/// Not stored anywhere; compute a fresh one per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub base_price: f64,
    /// Discount actually applied, after clamping.
    pub discount_percent: f64,
    pub discounted_price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl PriceQuote {
    fn flat(base_price: f64, final_price: f64) -> Self {
        PriceQuote {
            base_price,
            discount_percent: 0.0,
            discounted_price: final_price,
            tax: 0.0,
            final_price,
        }
    }
}

/// Computes the full quote for `base_price` at `discount_percent`.
pub fn quote(base_price: f64, discount_percent: f64) -> PriceQuote {
    if base_price <= 0.0 {
        return PriceQuote::flat(base_price, 0.0);
    }

    // Negative discount: price goes out untouched and untaxed.
    if discount_percent < 0.0 {
        return PriceQuote::flat(base_price, base_price);
    }

    // Explicit comparison, not `f64::min`: NaN must not become 100%.
    let discount_percent = if discount_percent > MAX_DISCOUNT_PERCENT {
        MAX_DISCOUNT_PERCENT
    } else {
        discount_percent
    };
    let discounted_price = base_price * (1.0 - discount_percent / 100.0);
    let tax = discounted_price * TAX_RATE.fraction();

    PriceQuote {
        base_price,
        discount_percent,
        discounted_price,
        tax,
        final_price: discounted_price + tax,
    }
}

/// Final price after discount and a single 10% tax.
pub fn compute_final_price(base_price: f64, discount_percent: f64) -> f64 {
    quote(base_price, discount_percent).final_price
}

// =============================================================================
// Discount Calculator
// =============================================================================

/// Stateless calculator object for callers that inject their pricing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn new() -> Self {
        DiscountCalculator
    }

    pub fn final_price(&self, base_price: f64, discount_percent: f64) -> f64 {
        compute_final_price(base_price, discount_percent)
    }

    pub fn quote(&self, base_price: f64, discount_percent: f64) -> PriceQuote {
        quote(base_price, discount_percent)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fractional_discount() {
        // 999 - 33% = 669.33; VAT 66.933; total 736.263
        let q = quote(999.0, 33.0);
        assert!((q.discounted_price - 669.33).abs() < 1e-6);
        assert!((q.tax - 66.933).abs() < 1e-6);
        assert!((q.final_price - 736.263).abs() < 1e-3);
    }

    #[test]
    fn test_zero_base_price() {
        assert_eq!(compute_final_price(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_non_positive_base_is_zero() {
        for base in [0.0, -0.01, -1.0, -999.0, f64::MIN] {
            for discount in [-10.0, 0.0, 50.0, 150.0] {
                assert_eq!(compute_final_price(base, discount), 0.0);
            }
        }
    }

    #[test]
    fn test_negative_discount_returns_base() {
        for base in [0.5, 100.0, 999.0] {
            for discount in [-0.1, -1.0, -250.0] {
                assert_eq!(compute_final_price(base, discount), base);
            }
        }
    }

    #[test]
    fn test_discount_above_hundred_clamps() {
        let q = quote(500.0, 150.0);
        assert_eq!(q.discount_percent, 100.0);
        assert_eq!(q.final_price, 0.0);
        assert_eq!(compute_final_price(500.0, 100.0), 0.0);
    }

    #[test]
    fn test_nan_discount_propagates() {
        assert!(compute_final_price(100.0, f64::NAN).is_nan());

        let q = quote(100.0, f64::NAN);
        assert!(q.discount_percent.is_nan());
        assert!(q.final_price.is_nan());

        // NaN base slips past the `<= 0` guard too.
        assert!(compute_final_price(f64::NAN, 10.0).is_nan());
    }

    #[test]
    fn test_tax_applied_once() {
        for (base, discount) in [(100.0, 0.0), (250.0, 20.0), (80.0, 99.5)] {
            let q = quote(base, discount);
            let expected = base * (1.0 - discount / 100.0) * 1.10;
            assert!((q.final_price - expected).abs() < EPS);
        }
        assert!((compute_final_price(100.0, 0.0) - 110.0).abs() < EPS);
    }

    #[test]
    fn test_quote_parts_add_up() {
        let q = quote(1234.5, 12.5);
        assert!((q.discounted_price + q.tax - q.final_price).abs() < EPS);
        assert_eq!(q.base_price, 1234.5);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(compute_final_price(999.0, 33.0), compute_final_price(999.0, 33.0));
        assert_eq!(quote(42.0, 7.0), quote(42.0, 7.0));
    }

    #[test]
    fn test_calculator_delegates() {
        let calc = DiscountCalculator::new();
        assert_eq!(calc.final_price(999.0, 33.0), compute_final_price(999.0, 33.0));
        assert_eq!(calc.quote(10.0, 5.0), quote(10.0, 5.0));
    }
}
