//! # Repository Module
//!
//! Database repository implementations for the catalog stores.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Catalog service                                                    │
//! │       │                                                             │
//! │       │  ProductStore::find_by_id("uuid")                           │
//! │       ▼                                                             │
//! │  ProductRepository (this module) ── SQL ──► SQLite                  │
//! │                                                                     │
//! │  Each repository implements one store contract from                 │
//! │  bistro-catalog, plus the inherent methods administration           │
//! │  and seeding need. SQL stays isolated in this one place.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - products; implements `ProductStore`
//! - [`menu_group::MenuGroupRepository`] - groups; implements `MenuGroupStore`
//! - [`menu::MenuRepository`] - menus + line items; implements `MenuStore`

pub mod menu;
pub mod menu_group;
pub mod product;
