//! One-shot JWKS resolution.
//!
//! [`KeySetResolver`] performs exactly one HTTP fetch of a JWKS document and
//! turns every entry into key material. Resolution is all-or-nothing: the
//! first entry that fails to build aborts the whole operation, so a key set
//! never silently lacks a published key.
//!
//! There is no caching, refresh or retry here. A failed resolution is fatal
//! to verifier construction and the caller decides whether to try again.
//!
//! # Example
//!
//! ```ignore
//! use idguard_auth::config::JwksConfig;
//! use idguard_auth::jwks::KeySetResolver;
//!
//! let resolver = KeySetResolver::new(JwksConfig::default())?;
//! let key_set = resolver.resolve(&jwks_uri).await?;
//! ```

use url::Url;

use super::jwk::JwksDocument;
use super::key_material::{KeyMaterialError, build_key_material};
use super::key_set::KeySet;
use crate::config::JwksConfig;

/// Errors from fetching the JWKS document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A network error occurred, including the request timing out.
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint returned a non-success status code.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),

    /// The body is not a JWKS document.
    #[error("Failed to parse JWKS: {0}")]
    Parse(String),

    /// The JWKS URI scheme is not allowed (must be HTTPS unless configured).
    #[error("Invalid URL scheme: only HTTPS is allowed")]
    InvalidScheme,

    /// The response exceeded the maximum allowed size.
    #[error("Response exceeds maximum size of {max_size} bytes")]
    ResponseTooLarge {
        /// The maximum allowed size.
        max_size: usize,
    },
}

/// Errors from resolving a key set.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The document could not be fetched or parsed.
    #[error("JWKS fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// An entry could not be turned into key material.
    #[error("JWKS key rejected: {0}")]
    KeyMaterial(#[from] KeyMaterialError),
}

/// Fetches a JWKS document once and builds a [`KeySet`] from it.
#[derive(Debug, Clone)]
pub struct KeySetResolver {
    http_client: reqwest::Client,
    config: JwksConfig,
}

impl KeySetResolver {
    /// Creates a resolver with the given fetch settings.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the HTTP client cannot be built.
    pub fn new(config: JwksConfig) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Returns the fetch settings.
    #[must_use]
    pub fn config(&self) -> &JwksConfig {
        &self.config
    }

    /// Fetches the JWKS at `jwks_uri` and builds the key set.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Fetch`] on any transport, status or parse
    /// failure, and [`ResolveError::KeyMaterial`] for the first entry that
    /// cannot be built. No partial key set is ever returned.
    pub async fn resolve(&self, jwks_uri: &Url) -> Result<KeySet, ResolveError> {
        let document = self.fetch(jwks_uri).await?;
        let key_set = build_key_set(&document).inspect_err(|e| {
            tracing::warn!(jwks_uri = %jwks_uri, kid = %e.kid(), error = %e, "Rejected JWKS key");
        })?;

        tracing::debug!(jwks_uri = %jwks_uri, keys = key_set.len(), "Resolved JWKS");
        Ok(key_set)
    }

    /// Fetches and parses the JWKS document.
    async fn fetch(&self, jwks_uri: &Url) -> Result<JwksDocument, FetchError> {
        self.validate_scheme(jwks_uri)?;

        tracing::debug!("Fetching JWKS from {}", jwks_uri);

        let response = self
            .http_client
            .get(jwks_uri.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to fetch JWKS from {}: {}", jwks_uri, e);
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("JWKS endpoint {} returned status {}", jwks_uri, status);
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let max_size = self.config.max_response_size;
        if let Some(len) = response.content_length()
            && len > max_size as u64
        {
            return Err(FetchError::ResponseTooLarge { max_size });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read JWKS body from {}: {}", jwks_uri, e);
            FetchError::Network(e.to_string())
        })?;
        if body.len() > max_size {
            return Err(FetchError::ResponseTooLarge { max_size });
        }

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Failed to parse JWKS from {}: {}", jwks_uri, e);
            FetchError::Parse(e.to_string())
        })
    }

    /// Validates that the URI uses an allowed scheme.
    fn validate_scheme(&self, uri: &Url) -> Result<(), FetchError> {
        match uri.scheme() {
            "https" => Ok(()),
            "http" if self.config.allow_http => Ok(()),
            _ => Err(FetchError::InvalidScheme),
        }
    }
}

/// Builds a key set from every entry of `document`.
///
/// # Errors
///
/// Returns the error of the first entry that fails, even if later entries
/// would have built.
pub fn build_key_set(document: &JwksDocument) -> Result<KeySet, KeyMaterialError> {
    let keys = document
        .keys
        .iter()
        .map(build_key_material)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(KeySet::from_keys(keys))
}
