//! # Catalog Error Types
//!
//! Service-level errors for the menu catalog.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  ValidationError (bistro-core) ──┐                                  │
//! │  StoreError (store backend)    ──┼──► CatalogError (this module)    │
//! │  ProfanityError (HTTP client)  ──┘         │                        │
//! │                                            ▼                        │
//! │                    ErrorKind::{InvalidArgument, NotFound, Internal} │
//! │                                            │                        │
//! │                                            ▼                        │
//! │                    request layer maps kinds to status codes         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two kinds of caller error suffice: invalid-argument (malformed or
//! rule-violating input) and not-found (an identifier that does not
//! resolve). Both fail fast, surface synchronously, and are never
//! retried. Collaborator failures are a third, internal kind the
//! caller did not cause.

use thiserror::Error;

use crate::profanity::ProfanityError;
use crate::store::StoreError;
use bistro_core::ValidationError;

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors surfaced by the catalog services.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or rule-violating input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced product identifier does not resolve.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// A referenced menu group identifier does not resolve.
    #[error("menu group not found: {0}")]
    MenuGroupNotFound(String),

    /// A store backend failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The profanity service could not be consulted.
    #[error(transparent)]
    Profanity(#[from] ProfanityError),
}

// =============================================================================
// Error Kind
// =============================================================================

/// The coarse classification a request layer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller error: malformed or rule-violating input.
    InvalidArgument,
    /// Caller error: a referenced identifier does not resolve.
    NotFound,
    /// Collaborator failure the caller did not cause.
    Internal,
}

impl CatalogError {
    /// Classifies the error for the boundary above this core.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::InvalidArgument,
            CatalogError::ProductNotFound(_) | CatalogError::MenuGroupNotFound(_) => {
                ErrorKind::NotFound
            }
            CatalogError::Store(_) | CatalogError::Profanity(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
