//! # Menu Service
//!
//! Admission of new menus. A menu is only persisted once the full rule
//! chain passes; the first failing rule aborts the operation with
//! nothing written.
//!
//! ## Rule Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  create(request)                                                    │
//! │                                                                     │
//! │   1. price present and >= 0            invalid-argument             │
//! │   2. menu group resolves               not-found                    │
//! │   3. line items present, non-empty     invalid-argument             │
//! │   4. bulk product lookup cardinality   invalid-argument             │
//! │   5. every quantity >= 0               invalid-argument             │
//! │   6. resolve products, sum line total  not-found per item           │
//! │   7. price <= line total               invalid-argument             │
//! │   8. name present                      invalid-argument             │
//! │   9. profanity screen                  invalid-argument             │
//! │  10. mint id, persist, return                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Steps 4 and 6 both hit the product store (one bulk call, then one
//! call per line item). The duplication is deliberate: the bulk call
//! answers "do they all exist", the per-item calls resolve prices in
//! line-item order.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::profanity::ProfanityChecker;
use crate::store::{MenuGroupStore, MenuStore, ProductStore};
use bistro_core::pricing::{self, PricedLineItem};
use bistro_core::{validation, Menu, MenuLineItem, ValidationError};

// =============================================================================
// Requests
// =============================================================================

/// One (product, quantity) pairing in a menu creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuLineItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// A candidate menu as submitted by the caller.
///
/// Optional fields model values the caller may simply omit; presence is
/// a validation rule, not a type guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenuRequest {
    pub name: Option<String>,
    pub price_cents: Option<i64>,
    pub menu_group_id: String,
    /// Persisted verbatim; creation never overrides the caller's choice.
    pub displayed: bool,
    pub line_items: Option<Vec<MenuLineItemRequest>>,
}

// =============================================================================
// Service
// =============================================================================

/// Orchestrates the full rule set for admitting a new menu.
pub struct MenuService<MS, GS, PS, PC> {
    menus: MS,
    menu_groups: GS,
    products: PS,
    profanity: PC,
}

impl<MS, GS, PS, PC> MenuService<MS, GS, PS, PC>
where
    MS: MenuStore,
    GS: MenuGroupStore,
    PS: ProductStore,
    PC: ProfanityChecker,
{
    /// Creates a menu service over the given collaborators.
    pub fn new(menus: MS, menu_groups: GS, products: PS, profanity: PC) -> Self {
        MenuService {
            menus,
            menu_groups,
            products,
            profanity,
        }
    }

    /// Validates and persists a candidate menu.
    ///
    /// Rules run strictly in the order documented on the module; the
    /// first violation aborts with nothing persisted. On success the
    /// menu is saved exactly once, carrying the caller-supplied
    /// `displayed` flag verbatim and the line items in caller order.
    pub async fn create(&self, request: CreateMenuRequest) -> CatalogResult<Menu> {
        // 1. Candidate price must be present and non-negative.
        let price = validation::require_price(request.price_cents, "menu price")?;

        // 2. The menu must belong to an existing group.
        let group = self
            .menu_groups
            .find_by_id(&request.menu_group_id)
            .await?
            .ok_or_else(|| CatalogError::MenuGroupNotFound(request.menu_group_id.clone()))?;

        // 3. Line items must be present and non-empty.
        let line_items = match request.line_items.as_deref() {
            Some(items) if !items.is_empty() => items,
            _ => return Err(ValidationError::NoLineItems.into()),
        };

        // 4. Every referenced product must exist. The bulk lookup
        //    returns each existing product once, so a duplicate product
        //    across line items also fails the cardinality check.
        let ids: Vec<String> = line_items.iter().map(|li| li.product_id.clone()).collect();
        let found = self.products.find_all_by_id_in(&ids).await?;
        if found.len() != line_items.len() {
            return Err(ValidationError::UnresolvedLineItemProducts {
                requested: line_items.len(),
                found: found.len(),
            }
            .into());
        }

        // 5. Quantities must be non-negative (zero passes).
        for item in line_items {
            validation::validate_quantity(item.quantity)?;
        }

        // 6. Resolve each product in line-item order and accumulate the
        //    line total at current prices.
        let mut priced = Vec::with_capacity(line_items.len());
        for item in line_items {
            let product = self
                .products
                .find_by_id(&item.product_id)
                .await?
                .ok_or_else(|| CatalogError::ProductNotFound(item.product_id.clone()))?;
            priced.push(PricedLineItem {
                unit_price: product.price(),
                quantity: item.quantity,
            });
        }
        let line_total = pricing::line_total(&priced);

        // 7. The bundle may be discounted, never marked up.
        if pricing::exceeds_line_total(price, line_total) {
            return Err(ValidationError::PriceExceedsLineTotal { price, line_total }.into());
        }

        // 8. A name must be supplied (empty strings pass).
        let name = validation::require_name(request.name.as_deref(), "menu name")?;

        // 9. The name must survive the profanity screen.
        if self.profanity.contains_profanity(name).await? {
            return Err(ValidationError::ProfaneName {
                name: name.to_string(),
            }
            .into());
        }

        // 10. Mint an identity and persist, exactly once.
        let now = Utc::now();
        let menu = Menu {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price_cents: price.cents(),
            displayed: request.displayed,
            menu_group_id: group.id,
            line_items: line_items
                .iter()
                .map(|li| MenuLineItem {
                    product_id: li.product_id.clone(),
                    quantity: li.quantity,
                })
                .collect(),
            created_at: now,
            updated_at: now,
        };

        debug!(menu_id = %menu.id, price = %price, line_total = %line_total, "Menu passed validation");

        let saved = self.menus.save(&menu).await?;

        info!(menu_id = %saved.id, name = %saved.name, "Menu created");
        Ok(saved)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{
        InMemoryMenuGroupStore, InMemoryMenuStore, InMemoryProductStore, StubProfanityChecker,
    };
    use bistro_core::{MenuGroup, Product};

    const GROUP_ID: &str = "group-1";
    const PIE_ID: &str = "product-pie";
    const SALAD_ID: &str = "product-salad";

    fn product(id: &str, cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("product {id}"),
            price_cents: cents,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn seeded_service(
    ) -> (
        MenuService<InMemoryMenuStore, InMemoryMenuGroupStore, InMemoryProductStore, StubProfanityChecker>,
        InMemoryMenuStore,
    ) {
        let menus = InMemoryMenuStore::default();
        let groups = InMemoryMenuGroupStore::with_groups(vec![MenuGroup {
            id: GROUP_ID.to_string(),
            name: "Lunch".to_string(),
        }]);
        let products =
            InMemoryProductStore::with_products(vec![product(PIE_ID, 1500), product(SALAD_ID, 600)]);
        let service = MenuService::new(
            menus.clone(),
            groups,
            products,
            StubProfanityChecker::banning(&["damn"]),
        );
        (service, menus)
    }

    fn valid_request() -> CreateMenuRequest {
        CreateMenuRequest {
            name: Some("Meat Pie Set".to_string()),
            price_cents: Some(2500),
            menu_group_id: GROUP_ID.to_string(),
            displayed: true,
            line_items: Some(vec![
                MenuLineItemRequest {
                    product_id: PIE_ID.to_string(),
                    quantity: 1,
                },
                MenuLineItemRequest {
                    product_id: SALAD_ID.to_string(),
                    quantity: 2,
                },
            ]),
        }
    }

    #[tokio::test]
    async fn test_missing_price_is_invalid_argument() {
        let (service, menus) = seeded_service();
        let mut request = valid_request();
        request.price_cents = None;

        let err = service.create(request).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(menus.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_negative_price_is_invalid_argument() {
        let (service, menus) = seeded_service();
        let mut request = valid_request();
        request.price_cents = Some(-1000);

        let err = service.create(request).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::NegativeAmount { .. })
        ));
        assert_eq!(menus.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_menu_group_is_not_found() {
        let (service, _) = seeded_service();
        let mut request = valid_request();
        request.menu_group_id = "no-such-group".to_string();

        let err = service.create(request).await.unwrap_err();

        assert!(matches!(err, CatalogError::MenuGroupNotFound(id) if id == "no-such-group"));
    }

    #[tokio::test]
    async fn test_missing_line_items_is_invalid_argument() {
        let (service, _) = seeded_service();

        for line_items in [None, Some(vec![])] {
            let mut request = valid_request();
            request.line_items = line_items;

            let err = service.create(request).await.unwrap_err();
            assert!(matches!(
                err,
                CatalogError::Validation(ValidationError::NoLineItems)
            ));
        }
    }

    #[tokio::test]
    async fn test_unresolved_line_item_product_is_invalid_argument() {
        let (service, _) = seeded_service();
        let mut request = valid_request();
        request
            .line_items
            .as_mut()
            .unwrap()
            .push(MenuLineItemRequest {
                product_id: "no-such-product".to_string(),
                quantity: 1,
            });

        let err = service.create(request).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::UnresolvedLineItemProducts {
                requested: 3,
                found: 2,
            })
        ));
    }

    /// Two line items naming the same product resolve to one product in
    /// the bulk lookup and fail the cardinality check. Known edge case,
    /// guarded as-is.
    #[tokio::test]
    async fn test_duplicate_product_line_items_are_rejected() {
        let (service, _) = seeded_service();
        let mut request = valid_request();
        request.line_items = Some(vec![
            MenuLineItemRequest {
                product_id: PIE_ID.to_string(),
                quantity: 1,
            },
            MenuLineItemRequest {
                product_id: PIE_ID.to_string(),
                quantity: 1,
            },
        ]);

        let err = service.create(request).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::UnresolvedLineItemProducts { .. })
        ));
    }

    #[tokio::test]
    async fn test_negative_quantity_is_invalid_argument() {
        let (service, _) = seeded_service();
        let mut request = valid_request();
        request.line_items.as_mut().unwrap()[0].quantity = -1;

        let err = service.create(request).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::NegativeQuantity { quantity: -1 })
        ));
    }

    /// Regression guard: a zero-quantity line item is accepted today.
    #[tokio::test]
    async fn test_zero_quantity_is_accepted() {
        let (service, _) = seeded_service();
        let mut request = valid_request();
        request.line_items.as_mut().unwrap()[0].quantity = 0;
        // Pie contributes nothing now; salad alone covers $12.00.
        request.price_cents = Some(1200);

        let menu = service.create(request).await.unwrap();

        assert_eq!(menu.line_items[0].quantity, 0);
    }

    #[tokio::test]
    async fn test_price_above_line_total_is_invalid_argument() {
        let (service, menus) = seeded_service();
        let mut request = valid_request();
        // Line total is 1500 + 2 x 600 = 2700.
        request.price_cents = Some(2701);

        let err = service.create(request).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::PriceExceedsLineTotal { .. })
        ));
        assert_eq!(menus.save_calls(), 0);
    }

    /// Boundary: a price exactly equal to the line total is admitted.
    #[tokio::test]
    async fn test_price_equal_to_line_total_is_accepted() {
        let (service, _) = seeded_service();
        let mut request = valid_request();
        request.price_cents = Some(2700);

        assert!(service.create(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_name_is_invalid_argument() {
        let (service, _) = seeded_service();
        let mut request = valid_request();
        request.name = None;

        let err = service.create(request).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::Required { .. })
        ));
    }

    /// Regression guard: an empty name passes; only a missing name fails.
    #[tokio::test]
    async fn test_empty_name_is_accepted() {
        let (service, _) = seeded_service();
        let mut request = valid_request();
        request.name = Some(String::new());

        let menu = service.create(request).await.unwrap();

        assert_eq!(menu.name, "");
    }

    #[tokio::test]
    async fn test_profane_name_is_invalid_argument() {
        let (service, menus) = seeded_service();
        let mut request = valid_request();
        request.name = Some("damn tasty meat pie set".to_string());

        let err = service.create(request).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::ProfaneName { .. })
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(menus.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_successful_creation_saves_exactly_once() {
        let (service, menus) = seeded_service();

        let menu = service.create(valid_request()).await.unwrap();

        assert_eq!(menus.save_calls(), 1);
        assert_eq!(menus.len(), 1);
        assert!(!menu.id.is_empty());
        assert_eq!(menu.name, "Meat Pie Set");
        assert_eq!(menu.price_cents, 2500);
        assert_eq!(menu.menu_group_id, GROUP_ID);
        // Line items keep caller order.
        assert_eq!(menu.line_items[0].product_id, PIE_ID);
        assert_eq!(menu.line_items[1].product_id, SALAD_ID);
        assert_eq!(menu.line_items[1].quantity, 2);
    }

    /// The caller-supplied displayed flag is persisted verbatim.
    #[tokio::test]
    async fn test_displayed_flag_is_preserved_verbatim() {
        for displayed in [true, false] {
            let (service, menus) = seeded_service();
            let mut request = valid_request();
            request.displayed = displayed;

            let menu = service.create(request).await.unwrap();

            assert_eq!(menu.displayed, displayed);
            assert_eq!(menus.get(&menu.id).unwrap().displayed, displayed);
        }
    }
}
