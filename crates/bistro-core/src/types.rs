//! # Domain Types
//!
//! Core domain types for the menu catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │   MenuGroup    │   │      Menu      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (UUID)     │   │  id (UUID)     │   │  id (UUID)     │      │
//! │  │  name          │   │  name          │   │  name          │      │
//! │  │  price_cents   │   └────────────────┘   │  price_cents   │      │
//! │  └────────────────┘            ▲           │  displayed     │      │
//! │           ▲                    └───────────│  menu_group_id │      │
//! │           │                                │  line_items[]  │      │
//! │           │        ┌────────────────┐      └────────────────┘      │
//! │           │        │  MenuLineItem  │              │               │
//! │           └────────│  product_id    │◄─────────────┘               │
//! │        (by id)     │  quantity      │                              │
//! │                    └────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Relations are identifier-based: a line item names its product by id,
//! and the current product record is always resolved through a store.
//! No entity embeds ownership of another across the aggregate boundary,
//! so the price-change cascade re-reads prices instead of relying on
//! shared mutable references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A sellable product in the catalog.
///
/// Mutated in place by the price-change operation; never deleted within
/// this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name. Screened for profanity at registration.
    pub name: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated (price changes bump this).
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Menu Group
// =============================================================================

/// An organizational grouping every menu must belong to.
///
/// Immutable with respect to this core; only looked up by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroup {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,
}

// =============================================================================
// Menu Line Item
// =============================================================================

/// A (product, quantity) pairing scoped to exactly one menu.
///
/// Holds the product by identifier only. Quantity is a non-negative
/// integer; zero is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuLineItem {
    /// Identifier of the product this line denotes.
    pub product_id: String,

    /// How many units of the product the menu bundles.
    pub quantity: i64,
}

// =============================================================================
// Menu
// =============================================================================

/// A sellable bundle of line items at a fixed price.
///
/// Creation enforces `price <= Σ quantity × product price` at current
/// product prices. The `displayed` flag is maintained lazily: a product
/// price change that breaks the invariant forces it to false, but
/// nothing ever re-enables it automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name. Screened for profanity at creation.
    pub name: String,

    /// Bundle price in cents. Never negative.
    pub price_cents: i64,

    /// Whether the menu is currently visible for sale.
    pub displayed: bool,

    /// The group this menu belongs to (required).
    pub menu_group_id: String,

    /// Ordered, non-empty line items.
    pub line_items: Vec<MenuLineItem>,

    /// When the menu was created.
    pub created_at: DateTime<Utc>,

    /// When the menu was last updated (display flips bump this).
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    /// Returns the bundle price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
