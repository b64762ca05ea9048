//! # Validation Module
//!
//! Field validation rules shared by menu creation and product
//! registration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Request layer (out of scope here)                         │
//! │  ├── Deserialization / type checks                                  │
//! │  └── Immediate caller feedback                                      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE + the services                                │
//! │  ├── Field rules (presence, sign)                                   │
//! │  └── Cross-entity rules (group exists, price vs. line total)        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  └── Foreign key constraints                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// Monetary Validators
// =============================================================================

/// Validates a candidate price: it must be present and non-negative.
///
/// ## Rules
/// - Must be supplied (a request without a price is rejected)
/// - Must be `>= 0`; zero is allowed (a free menu is consistent with
///   any line total)
///
/// ## Example
/// ```rust
/// use bistro_core::validation::require_price;
///
/// assert!(require_price(Some(2500), "price").is_ok());
/// assert!(require_price(Some(0), "price").is_ok());
/// assert!(require_price(None, "price").is_err());
/// assert!(require_price(Some(-100), "price").is_err());
/// ```
pub fn require_price(cents: Option<i64>, field: &str) -> ValidationResult<Money> {
    let cents = cents.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })?;

    let price = Money::from_cents(cents);
    if price.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// Quantity Validator
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be `>= 0`
///
/// A quantity of exactly zero passes. The business rule reads "one or
/// more products", but the accepted behavior only rejects negatives,
/// and callers depend on that; the zero case is covered by a
/// regression test, not endorsed.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity { quantity });
    }

    Ok(())
}

// =============================================================================
// Name Validator
// =============================================================================

/// Validates that a name is present.
///
/// Only a missing name is rejected. Empty strings pass: no emptiness
/// rule exists, and downstream profanity screening receives the name
/// as-is.
///
/// ## Example
/// ```rust
/// use bistro_core::validation::require_name;
///
/// assert_eq!(require_name(Some("Lunch Set"), "name").unwrap(), "Lunch Set");
/// assert!(require_name(Some(""), "name").is_ok());
/// assert!(require_name(None, "name").is_err());
/// ```
pub fn require_name<'a>(name: Option<&'a str>, field: &str) -> ValidationResult<&'a str> {
    name.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
