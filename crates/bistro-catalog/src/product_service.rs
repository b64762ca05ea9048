//! # Product Service
//!
//! Product registration, listing, and the price-change cascade.
//!
//! ## Price-Change Cascade
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  change_price("pie", $27.00)                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  validate candidate price ── invalid? abort, nothing touched        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  resolve product ── missing? not-found, nothing touched             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  persist new price (store = single source of truth)                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  for every menu referencing "pie":                                  │
//! │    recompute line total at CURRENT store prices                     │
//! │    menu.price > total ?                                             │
//! │       ├── yes → displayed = false, re-persist                       │
//! │       └── no  → leave displayed as-is (never re-shown here)         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  return the updated product                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The re-evaluation loop never fails the operation: its only outcome
//! is display flags being forced off.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::profanity::ProfanityChecker;
use crate::store::{MenuStore, ProductStore};
use bistro_core::pricing::{self, PricedLineItem};
use bistro_core::{validation, Menu, Money, Product, ValidationError};

// =============================================================================
// Requests
// =============================================================================

/// A candidate product as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price_cents: Option<i64>,
}

/// A candidate price for an existing product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeProductPriceRequest {
    pub price_cents: Option<i64>,
}

// =============================================================================
// Service
// =============================================================================

/// Orchestrates product registration and the display cascade that
/// follows a price change.
pub struct ProductService<PS, MS, PC> {
    products: PS,
    menus: MS,
    profanity: PC,
}

impl<PS, MS, PC> ProductService<PS, MS, PC>
where
    PS: ProductStore,
    MS: MenuStore,
    PC: ProfanityChecker,
{
    /// Creates a product service over the given collaborators.
    pub fn new(products: PS, menus: MS, profanity: PC) -> Self {
        ProductService {
            products,
            menus,
            profanity,
        }
    }

    /// Registers a new product.
    ///
    /// The price must be present and non-negative; the name must be
    /// present and survive the same profanity screen menus go through.
    pub async fn create(&self, request: CreateProductRequest) -> CatalogResult<Product> {
        let price = validation::require_price(request.price_cents, "product price")?;
        let name = validation::require_name(request.name.as_deref(), "product name")?;

        if self.profanity.contains_profanity(name).await? {
            return Err(ValidationError::ProfaneName {
                name: name.to_string(),
            }
            .into());
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price_cents: price.cents(),
            created_at: now,
            updated_at: now,
        };

        let saved = self.products.save(&product).await?;

        info!(product_id = %saved.id, name = %saved.name, price = %saved.price(), "Product registered");
        Ok(saved)
    }

    /// Changes a product's price and reconciles every menu that
    /// references it.
    ///
    /// Validation and the product lookup both run before anything is
    /// mutated; once the new price is persisted, each referencing menu
    /// is re-evaluated at current store prices and hidden if its stored
    /// price now exceeds the recomputed line total. A menu that was
    /// already hidden stays hidden regardless of direction; nothing in
    /// this path ever re-enables display.
    pub async fn change_price(
        &self,
        product_id: &str,
        request: ChangeProductPriceRequest,
    ) -> CatalogResult<Product> {
        // Candidate price first: an invalid request must not even look
        // anything up.
        let price = validation::require_price(request.price_cents, "product price")?;

        let mut product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))?;

        let previous = product.price();
        product.price_cents = price.cents();
        product.updated_at = Utc::now();

        // Persist before the cascade: the store is the single source of
        // truth, so every re-read below observes the new price.
        let product = self.products.save(&product).await?;

        info!(
            product_id = %product.id,
            previous = %previous,
            current = %product.price(),
            "Product price changed"
        );

        let menus = self.menus.find_all_by_product_id(product_id).await?;
        debug!(product_id = %product.id, menu_count = menus.len(), "Re-evaluating referencing menus");

        for mut menu in menus {
            let Some(line_total) = self.current_line_total(&menu).await? else {
                continue;
            };

            if pricing::exceeds_line_total(menu.price(), line_total) && menu.displayed {
                menu.displayed = false;
                menu.updated_at = Utc::now();
                self.menus.save(&menu).await?;
                info!(
                    menu_id = %menu.id,
                    menu_price = %menu.price(),
                    line_total = %line_total,
                    "Menu hidden: price exceeds recomputed line total"
                );
            }
        }

        Ok(product)
    }

    /// Lists every registered product. Pass-through, no validation.
    pub async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.find_all().await?)
    }

    /// Recomputes a menu's line total at current store prices.
    ///
    /// Returns `None` when a line item product no longer resolves; the
    /// cascade logs and skips such a menu rather than failing the whole
    /// price change.
    async fn current_line_total(&self, menu: &Menu) -> CatalogResult<Option<Money>> {
        let mut priced = Vec::with_capacity(menu.line_items.len());
        for item in &menu.line_items {
            match self.products.find_by_id(&item.product_id).await? {
                Some(product) => priced.push(PricedLineItem {
                    unit_price: product.price(),
                    quantity: item.quantity,
                }),
                None => {
                    warn!(
                        menu_id = %menu.id,
                        product_id = %item.product_id,
                        "Skipping menu re-evaluation: line item product does not resolve"
                    );
                    return Ok(None);
                }
            }
        }
        Ok(Some(pricing::line_total(&priced)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
