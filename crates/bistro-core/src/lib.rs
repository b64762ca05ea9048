//! # bistro-core: Pure Business Logic for Bistro POS
//!
//! This crate is the **heart** of the menu catalog. It contains the
//! pricing and validation rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Bistro POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Request layer (out of scope)                  │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │                  bistro-catalog (services)                    │  │
//! │  │     MenuService::create, ProductService::change_price         │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │               ★ bistro-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐   │  │
//! │  │   │  types   │  │  money   │  │ pricing  │  │ validation │   │  │
//! │  │   │ Product  │  │  Money   │  │line_total│  │   rules    │   │  │
//! │  │   │ Menu ... │  │          │  │          │  │            │   │  │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └────────────┘   │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, MenuGroup, Menu, MenuLineItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The price-consistency kernel shared by creation and
//!   the price-change cascade
//! - [`validation`] - Field validation rules
//! - [`error`] - Validation error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bistro_core::Money` instead of
// `use bistro_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;
