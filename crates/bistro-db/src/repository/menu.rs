//! # Menu Repository
//!
//! Database operations for menus and their line items, implementing
//! the `MenuStore` contract.
//!
//! ## Aggregate Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  menus                     menu_line_items                          │
//! │  ─────                     ───────────────                          │
//! │  id ◄──────────────────────  menu_id                                │
//! │  name                        seq        (caller order)              │
//! │  price_cents                 product_id (weak reference)            │
//! │  displayed                   quantity                               │
//! │  menu_group_id                                                      │
//! │                                                                     │
//! │  A menu is always written and read as a whole: the menu row plus    │
//! │  its ordered line items, in one transaction on the write side.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reverse lookup (`find_all_by_product_id`) joins through
//! menu_line_items; it is the query feeding the price-change cascade.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use bistro_catalog::store::{MenuStore, StoreResult};
use bistro_core::{Menu, MenuLineItem};

#[derive(Debug, sqlx::FromRow)]
struct MenuRow {
    id: String,
    name: String,
    price_cents: i64,
    displayed: bool,
    menu_group_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MenuRow {
    fn into_menu(self, line_items: Vec<MenuLineItem>) -> Menu {
        Menu {
            id: self.id,
            name: self.name,
            price_cents: self.price_cents,
            displayed: self.displayed,
            menu_group_id: self.menu_group_id,
            line_items,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MenuLineItemRow {
    product_id: String,
    quantity: i64,
}

const SELECT_COLUMNS: &str = "id, name, price_cents, displayed, menu_group_id, created_at, updated_at";

/// Repository for menu database operations.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new MenuRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Gets a menu by its ID, line items included.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Menu>> {
        let row: Option<MenuRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM menus WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(row) => {
                let line_items = self.load_line_items(id).await?;
                Ok(Some(row.into_menu(line_items)))
            }
            None => Ok(None),
        }
    }

    /// Finds every menu referencing the given product through any line
    /// item.
    pub async fn list_by_product_id(&self, product_id: &str) -> DbResult<Vec<Menu>> {
        debug!(product_id = %product_id, "Looking up menus referencing product");

        let rows: Vec<MenuRow> = sqlx::query_as(
            r#"
            SELECT DISTINCT
                m.id, m.name, m.price_cents, m.displayed, m.menu_group_id,
                m.created_at, m.updated_at
            FROM menus m
            INNER JOIN menu_line_items li ON li.menu_id = m.id
            WHERE li.product_id = ?1
            ORDER BY m.id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        let mut menus = Vec::with_capacity(rows.len());
        for row in rows {
            let line_items = self.load_line_items(&row.id).await?;
            menus.push(row.into_menu(line_items));
        }

        Ok(menus)
    }

    /// Inserts or updates a menu together with its line items.
    ///
    /// The menu row and its line items are written in one transaction;
    /// line items are replaced wholesale so their stored order always
    /// matches the entity.
    pub async fn upsert(&self, menu: &Menu) -> DbResult<()> {
        debug!(id = %menu.id, displayed = menu.displayed, "Upserting menu");

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO menus (id, name, price_cents, displayed, menu_group_id, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                price_cents = excluded.price_cents,
                displayed = excluded.displayed,
                menu_group_id = excluded.menu_group_id,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&menu.id)
        .bind(&menu.name)
        .bind(menu.price_cents)
        .bind(menu.displayed)
        .bind(&menu.menu_group_id)
        .bind(menu.created_at)
        .bind(menu.updated_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM menu_line_items WHERE menu_id = ?1")
            .bind(&menu.id)
            .execute(&mut *tx)
            .await?;

        for (seq, item) in menu.line_items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO menu_line_items (menu_id, seq, product_id, quantity) VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(&menu.id)
            .bind(seq as i64)
            .bind(&item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Loads a menu's line items in stored (caller) order.
    async fn load_line_items(&self, menu_id: &str) -> DbResult<Vec<MenuLineItem>> {
        let rows: Vec<MenuLineItemRow> = sqlx::query_as(
            "SELECT product_id, quantity FROM menu_line_items WHERE menu_id = ?1 ORDER BY seq",
        )
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| MenuLineItem {
                product_id: row.product_id,
                quantity: row.quantity,
            })
            .collect())
    }
}

// =============================================================================
// Store Contract
// =============================================================================

#[async_trait]
impl MenuStore for MenuRepository {
    async fn find_all_by_product_id(&self, product_id: &str) -> StoreResult<Vec<Menu>> {
        Ok(self.list_by_product_id(product_id).await?)
    }

    async fn save(&self, menu: &Menu) -> StoreResult<Menu> {
        self.upsert(menu).await?;
        Ok(menu.clone())
    }
}
