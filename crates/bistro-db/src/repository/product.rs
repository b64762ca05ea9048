//! # Product Repository
//!
//! Database operations for products, implementing the `ProductStore`
//! contract the catalog services consult.
//!
//! ## Lookup Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  get_by_id       one product, Option on absence                     │
//! │  list_by_ids     bulk IN lookup, silently drops missing ids         │
//! │  list_all        the whole catalog, ordered by name                 │
//! │  upsert          insert-or-update keyed by id                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use bistro_catalog::store::{ProductStore, StoreResult};
use bistro_core::Product;

/// Row shape for the `products` table.
///
/// Kept separate from the domain type so the SQL layer can evolve
/// without leaking column concerns upward.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price_cents: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price_cents: row.price_cents,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str = "id, name, price_cents, created_at, updated_at";

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Bulk lookup by id.
    ///
    /// Returns only the products that exist, each once. Missing ids
    /// produce no row and no error; callers compare cardinality when
    /// absence matters.
    pub async fn list_by_ids(&self, ids: &[String]) -> DbResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(requested = ids.len(), "Bulk product lookup");

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE id IN ("
        ));
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        query.push(")");

        let rows: Vec<ProductRow> = query.build_query_as().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Lists all products, ordered by name.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM products ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Inserts or updates a product, keyed by id.
    pub async fn upsert(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Upserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_cents, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                price_cents = excluded.price_cents,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Store Contract
// =============================================================================

#[async_trait]
impl ProductStore for ProductRepository {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn find_all_by_id_in(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
        Ok(self.list_by_ids(ids).await?)
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.list_all().await?)
    }

    async fn save(&self, product: &Product) -> StoreResult<Product> {
        self.upsert(product).await?;
        Ok(product.clone())
    }
}
