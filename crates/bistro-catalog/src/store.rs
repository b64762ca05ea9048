//! # Store Contracts
//!
//! Identifier-keyed lookup and persistence contracts the services
//! depend on. The stores are the arena; identifiers are the indices:
//! every cross-entity relation in the catalog is resolved through one
//! of these traits rather than through embedded ownership.
//!
//! ## Who Implements These
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  production:  bistro-db repositories (SQLite via sqlx)              │
//! │  tests:       in-memory maps, one per store                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All methods return `Result<_, StoreError>`: the backend is fallible
//! I/O, and the services surface its failures without retrying.

use async_trait::async_trait;
use thiserror::Error;

use bistro_core::{Menu, MenuGroup, Product};

// =============================================================================
// Store Error
// =============================================================================

/// Opaque backend failure raised by a store implementation.
///
/// Validation and not-found outcomes are NOT store errors; lookups
/// signal absence with `Option` and the services decide what absence
/// means.
#[derive(Debug, Error)]
#[error("store backend error: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Creates a store error from any displayable backend failure.
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Product Store
// =============================================================================

/// Lookup and persistence of products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Resolves a product by identifier.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>>;

    /// Bulk lookup by identifier.
    ///
    /// Returns only the products that exist, each at most once, with no
    /// error for missing identifiers. Callers must compare cardinality
    /// themselves when absence matters.
    async fn find_all_by_id_in(&self, ids: &[String]) -> StoreResult<Vec<Product>>;

    /// Lists every registered product.
    async fn find_all(&self) -> StoreResult<Vec<Product>>;

    /// Persists a product (insert or update by identifier) and returns
    /// the persisted entity.
    async fn save(&self, product: &Product) -> StoreResult<Product>;
}

// =============================================================================
// Menu Group Store
// =============================================================================

/// Lookup of menu groups. Groups are immutable to this core, so the
/// contract is lookup only.
#[async_trait]
pub trait MenuGroupStore: Send + Sync {
    /// Resolves a menu group by identifier.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MenuGroup>>;
}

// =============================================================================
// Menu Store
// =============================================================================

/// Lookup and persistence of menus.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Finds every menu referencing the given product through any of
    /// its line items.
    async fn find_all_by_product_id(&self, product_id: &str) -> StoreResult<Vec<Menu>>;

    /// Persists a menu (insert or update by identifier) and returns the
    /// persisted entity.
    async fn save(&self, menu: &Menu) -> StoreResult<Menu>;
}
