//! # Error Types
//!
//! Validation error types for bistro-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, amounts, counts)
//! 3. Errors are enum variants, never String
//! 4. Every variant is a caller error: malformed or rule-violating input

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are the invalid-argument family of failures: they abort the
/// operation immediately and nothing is persisted. Lookups that fail to
/// resolve an identifier are a separate, not-found family raised by the
/// service layer.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// A monetary amount is negative.
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },

    /// A line item quantity is negative.
    ///
    /// Zero quantities pass; see [`validate_quantity`].
    ///
    /// [`validate_quantity`]: crate::validation::validate_quantity
    #[error("line item quantity must not be negative, got {quantity}")]
    NegativeQuantity { quantity: i64 },

    /// A menu was submitted without any line items.
    #[error("menu must contain at least one line item")]
    NoLineItems,

    /// The bulk product lookup resolved fewer products than line items
    /// were supplied.
    #[error("{found} products found for {requested} line items")]
    UnresolvedLineItemProducts { requested: usize, found: usize },

    /// The candidate menu price exceeds the summed line item total.
    #[error("menu price {price} exceeds line item total {line_total}")]
    PriceExceedsLineTotal { price: Money, line_total: Money },

    /// A name failed the profanity screen.
    #[error("name contains profanity: {name}")]
    ProfaneName { name: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
