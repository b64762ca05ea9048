//! # Menu Group Repository
//!
//! Database operations for menu groups. Groups are immutable to the
//! catalog core, so the store contract is lookup only; `insert` exists
//! for administration and seeding.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use bistro_catalog::store::{MenuGroupStore, StoreResult};
use bistro_core::MenuGroup;

#[derive(Debug, sqlx::FromRow)]
struct MenuGroupRow {
    id: String,
    name: String,
}

impl From<MenuGroupRow> for MenuGroup {
    fn from(row: MenuGroupRow) -> Self {
        MenuGroup {
            id: row.id,
            name: row.name,
        }
    }
}

/// Repository for menu group database operations.
#[derive(Debug, Clone)]
pub struct MenuGroupRepository {
    pool: SqlitePool,
}

impl MenuGroupRepository {
    /// Creates a new MenuGroupRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuGroupRepository { pool }
    }

    /// Gets a menu group by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<MenuGroup>> {
        let row: Option<MenuGroupRow> =
            sqlx::query_as("SELECT id, name FROM menu_groups WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(MenuGroup::from))
    }

    /// Inserts a new menu group.
    pub async fn insert(&self, group: &MenuGroup) -> DbResult<()> {
        debug!(id = %group.id, name = %group.name, "Inserting menu group");

        sqlx::query("INSERT INTO menu_groups (id, name) VALUES (?1, ?2)")
            .bind(&group.id)
            .bind(&group.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Store Contract
// =============================================================================

#[async_trait]
impl MenuGroupStore for MenuGroupRepository {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MenuGroup>> {
        Ok(self.get_by_id(id).await?)
    }
}
