//! # bistro-catalog: Menu Catalog Services
//!
//! The orchestration core of the catalog: menu admission and the
//! product price-change cascade, built on top of the pure rules in
//! `bistro-core` and the collaborator contracts defined here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Bistro POS Data Flow                            │
//! │                                                                     │
//! │  Request layer (HTTP/CLI, out of scope)                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 bistro-catalog (THIS CRATE)                   │  │
//! │  │                                                               │  │
//! │  │   ┌─────────────┐  ┌────────────────┐  ┌──────────────────┐  │  │
//! │  │   │ MenuService │  │ ProductService │  │    contracts     │  │  │
//! │  │   │   create    │  │  change_price  │  │ stores/profanity │  │  │
//! │  │   │             │  │ create/find_all│  │                  │  │  │
//! │  │   └─────────────┘  └────────────────┘  └──────────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                               │                             │
//! │       ▼                               ▼                             │
//! │  bistro-db repositories        PurgoMalum HTTP service              │
//! │  (implement the stores)        (implements the checker)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu_service`] - Menu admission rule chain
//! - [`product_service`] - Product registration, listing, price cascade
//! - [`store`] - Store contracts the services consult
//! - [`profanity`] - Profanity-screening contract + HTTP client
//! - [`error`] - Catalog error types and their caller-facing kinds

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu_service;
pub mod product_service;
pub mod profanity;
pub mod store;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use menu_service::{CreateMenuRequest, MenuLineItemRequest, MenuService};
pub use product_service::{ChangeProductPriceRequest, CreateProductRequest, ProductService};
pub use profanity::{ProfanityChecker, ProfanityError, PurgomalumClient};
pub use store::{MenuGroupStore, MenuStore, ProductStore, StoreError, StoreResult};
