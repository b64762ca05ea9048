//! # Profanity Screening
//!
//! Menu and product names are screened against an external
//! profanity-detection service before anything is persisted. The
//! service is consulted, never owned: the contract is a one-method
//! trait injected into the services, substitutable with a stub in
//! tests.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  MenuService::create("Lunch Set")                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ProfanityChecker::contains_profanity("Lunch Set")                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  GET {base_url}/containsprofanity?text=Lunch+Set                    │
//! │       │                                                             │
//! │       ├── body "false" → name accepted                              │
//! │       ├── body "true"  → invalid-argument                           │
//! │       └── anything else → ProfanityError (never a silent pass)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Default endpoint of the public PurgoMalum filtering service.
const DEFAULT_BASE_URL: &str = "https://www.purgomalum.com/service";

/// Default timeout for one screening request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// =============================================================================
// Error
// =============================================================================

/// Failures reaching or understanding the profanity service.
///
/// A failure here is an infrastructure problem, distinct from the
/// invalid-argument raised when a name actually contains profanity.
#[derive(Debug, Error)]
pub enum ProfanityError {
    /// The HTTP request itself failed (connect, timeout, non-2xx).
    #[error("profanity service request failed: {0}")]
    Request(String),

    /// The service answered with a body that is neither "true" nor
    /// "false".
    #[error("unexpected profanity service response: {0:?}")]
    InvalidResponse(String),
}

// =============================================================================
// Contract
// =============================================================================

/// External profanity-detection capability.
#[async_trait]
pub trait ProfanityChecker: Send + Sync {
    /// Returns whether the given text contains banned content.
    async fn contains_profanity(&self, text: &str) -> Result<bool, ProfanityError>;
}

// =============================================================================
// PurgoMalum HTTP Client
// =============================================================================

/// HTTP client for the PurgoMalum profanity filtering service.
///
/// ## Usage
/// ```rust,no_run
/// use bistro_catalog::profanity::PurgomalumClient;
///
/// // Public service endpoint
/// let checker = PurgomalumClient::new();
///
/// // Self-hosted or mocked endpoint
/// let checker = PurgomalumClient::with_base_url("http://localhost:8080/service");
/// ```
#[derive(Debug, Clone)]
pub struct PurgomalumClient {
    http: reqwest::Client,
    base_url: String,
}

impl PurgomalumClient {
    /// Creates a client against the public service endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint.
    ///
    /// The URL is the service root; `/containsprofanity` is appended
    /// per request.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("default reqwest client configuration is valid");

        PurgomalumClient {
            http,
            base_url: base_url.into(),
        }
    }
}

impl Default for PurgomalumClient {
    fn default() -> Self {
        PurgomalumClient::new()
    }
}

#[async_trait]
impl ProfanityChecker for PurgomalumClient {
    async fn contains_profanity(&self, text: &str) -> Result<bool, ProfanityError> {
        let url = format!("{}/containsprofanity", self.base_url);

        debug!(text_len = text.len(), "Screening name for profanity");

        let response = self
            .http
            .get(&url)
            .query(&[("text", text)])
            .send()
            .await
            .map_err(|e| ProfanityError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| ProfanityError::Request(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ProfanityError::Request(e.to_string()))?;

        // The service answers with a bare boolean literal.
        match body.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ProfanityError::InvalidResponse(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
