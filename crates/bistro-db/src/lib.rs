//! # bistro-db: Database Layer for Bistro POS
//!
//! SQLite persistence for the menu catalog, built on sqlx. The
//! repositories here are the production implementations of the store
//! contracts defined in `bistro-catalog`.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, menu group, menu)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bistro_db::{Database, DbConfig};
//!
//! // Create database with default config (migrations run on connect)
//! let db = Database::new(DbConfig::new("path/to/bistro.db")).await?;
//!
//! // Repositories implement the catalog store contracts
//! let menu_service = MenuService::new(
//!     db.menus(),
//!     db.menu_groups(),
//!     db.products(),
//!     PurgomalumClient::new(),
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::menu::MenuRepository;
pub use repository::menu_group::MenuGroupRepository;
pub use repository::product::ProductRepository;
