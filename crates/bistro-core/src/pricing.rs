//! # Pricing Kernel
//!
//! The shared arithmetic for menu price consistency: given a menu's
//! line items with their products' CURRENT prices already resolved,
//! compute the summed line total and compare a candidate menu price
//! against it.
//!
//! This is the one computation used both at menu-creation time and by
//! the product price-change cascade.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Menu "Lunch Set" priced $25.00                                     │
//! │                                                                     │
//! │    Meat Pie   $15.00 × 1  =  $15.00                                 │
//! │    Side Salad  $6.00 × 2  =  $12.00                                 │
//! │                              ───────                                │
//! │    line_total                $27.00                                 │
//! │                                                                     │
//! │  $25.00 > $27.00 ?  no  →  menu price is consistent                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No side effects, deterministic, exact integer arithmetic. Callers
//! are responsible for resolving prices FRESH at call time; nothing in
//! here caches.

use crate::money::Money;

// =============================================================================
// Priced Line Item
// =============================================================================

/// A menu line item whose product price has been resolved by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedLineItem {
    /// The product's current unit price.
    pub unit_price: Money,

    /// The line's quantity (non-negative integer multiplier).
    pub quantity: i64,
}

// =============================================================================
// Kernel
// =============================================================================

/// Computes the summed line total: `Σ unit_price × quantity`.
///
/// ## Example
/// ```rust
/// use bistro_core::money::Money;
/// use bistro_core::pricing::{line_total, PricedLineItem};
///
/// let total = line_total(&[
///     PricedLineItem { unit_price: Money::from_cents(1500), quantity: 1 },
///     PricedLineItem { unit_price: Money::from_cents(600), quantity: 2 },
/// ]);
/// assert_eq!(total, Money::from_cents(2700));
/// ```
pub fn line_total(items: &[PricedLineItem]) -> Money {
    let mut total = Money::zero();
    for item in items {
        total += item.unit_price.multiply_quantity(item.quantity);
    }
    total
}

/// Returns true iff a candidate menu price exceeds the line total.
///
/// A price exactly equal to the total is consistent: creation succeeds
/// on the boundary, and the cascade leaves the menu displayed.
#[inline]
pub fn exceeds_line_total(price: Money, line_total: Money) -> bool {
    price > line_total
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cents: i64, quantity: i64) -> PricedLineItem {
        PricedLineItem {
            unit_price: Money::from_cents(cents),
            quantity,
        }
    }

    #[test]
    fn test_line_total_single_item() {
        assert_eq!(line_total(&[line(3000, 1)]), Money::from_cents(3000));
    }

    #[test]
    fn test_line_total_accumulates_across_items() {
        let total = line_total(&[line(1500, 1), line(600, 2)]);
        assert_eq!(total, Money::from_cents(2700));
    }

    #[test]
    fn test_line_total_zero_quantity_contributes_nothing() {
        let total = line_total(&[line(1500, 0), line(600, 1)]);
        assert_eq!(total, Money::from_cents(600));
    }

    #[test]
    fn test_line_total_empty_is_zero() {
        assert_eq!(line_total(&[]), Money::zero());
    }

    #[test]
    fn test_exceeds_line_total() {
        let total = Money::from_cents(2700);
        assert!(exceeds_line_total(Money::from_cents(2800), total));
        assert!(!exceeds_line_total(Money::from_cents(2500), total));
    }

    /// Boundary: a price exactly equal to the total does not exceed it.
    #[test]
    fn test_equal_price_is_consistent() {
        let total = Money::from_cents(2700);
        assert!(!exceeds_line_total(Money::from_cents(2700), total));
    }
}
