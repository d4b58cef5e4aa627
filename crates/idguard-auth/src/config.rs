//! Identity pool and verifier configuration.
//!
//! [`ProviderConfig`] names the identity pool a verifier is bound to and
//! controls how its JWKS document is fetched. [`VerifierConfig`] is the
//! immutable pair of expected claim values derived from it.
//!
//! # Example (TOML)
//!
//! ```toml
//! region = "ap-southeast-2"
//! user_pool_id = "ap-southeast-2_example"
//! client_id = "xxxxxxxxxxxxexample"
//!
//! [jwks]
//! request_timeout = "10s"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Errors raised while validating construction parameters.
///
/// These are always reported before any network call is attempted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required identifier is empty or absent.
    #[error("Missing required configuration field: {0}")]
    MissingField(&'static str),

    /// A configured or derived URL could not be parsed.
    #[error("Invalid URL for {field}: {message}")]
    InvalidUrl {
        /// The field the URL was built from.
        field: &'static str,
        /// Parser message.
        message: String,
    },

    /// A field holds a value outside its accepted range.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// JWKS fetch settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct JwksConfig {
    /// HTTP request timeout for the single JWKS fetch (default: 10 seconds).
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Maximum accepted response size in bytes (default: 1 MB).
    pub max_response_size: usize,

    /// Whether plain HTTP JWKS URIs are accepted.
    /// This should only be enabled for testing.
    pub allow_http: bool,
}

impl Default for JwksConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            max_response_size: 1024 * 1024,
            allow_http: false,
        }
    }
}

impl JwksConfig {
    /// Sets the HTTP request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the maximum response size.
    #[must_use]
    pub fn with_max_response_size(mut self, size: usize) -> Self {
        self.max_response_size = size;
        self
    }

    /// Allows HTTP (non-HTTPS) JWKS URIs.
    #[must_use]
    pub fn with_allow_http(mut self, allow: bool) -> Self {
        self.allow_http = allow;
        self
    }
}

/// Identity pool a verifier is bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider region, e.g. `ap-southeast-2`.
    pub region: String,

    /// User pool identifier, e.g. `ap-southeast-2_example`.
    pub user_pool_id: String,

    /// App client identifier. Tokens must carry it as their `aud` claim.
    pub client_id: String,

    /// Overrides the provider base URL
    /// (`https://cognito-idp.{region}.amazonaws.com`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// JWKS fetch settings.
    pub jwks: JwksConfig,
}

impl ProviderConfig {
    /// Creates a configuration for the given pool and client.
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        user_pool_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            user_pool_id: user_pool_id.into(),
            client_id: client_id.into(),
            endpoint: None,
            jwks: JwksConfig::default(),
        }
    }

    /// Sets the provider base URL override.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the JWKS fetch settings.
    #[must_use]
    pub fn with_jwks(mut self, jwks: JwksConfig) -> Self {
        self.jwks = jwks;
        self
    }

    /// Checks that every required identifier is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] for the first empty identifier,
    /// or [`ConfigError::InvalidValue`] for a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::MissingField("region"));
        }
        if self.user_pool_id.trim().is_empty() {
            return Err(ConfigError::MissingField("user_pool_id"));
        }
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::MissingField("client_id"));
        }
        if self.jwks.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "jwks.request_timeout",
                message: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the provider base URL without a trailing slash.
    fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://cognito-idp.{}.amazonaws.com", self.region),
        }
    }

    /// Returns the expected `iss` claim value.
    #[must_use]
    pub fn issuer(&self) -> String {
        format!("{}/{}", self.base_url(), self.user_pool_id)
    }

    /// Returns the JWKS document location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the derived URL does not parse.
    pub fn jwks_uri(&self) -> Result<Url, ConfigError> {
        let raw = format!("{}/.well-known/jwks.json", self.issuer());
        Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
            field: "jwks_uri",
            message: e.to_string(),
        })
    }

    /// Returns the claim expectations for tokens issued by this pool.
    #[must_use]
    pub fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig::new(self.client_id.clone(), self.issuer())
    }
}

/// Expected claim values, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    audience: String,
    issuer: String,
}

impl VerifierConfig {
    /// Creates a verifier configuration.
    #[must_use]
    pub fn new(audience: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            audience: audience.into(),
            issuer: issuer.into(),
        }
    }

    /// The relying-party client identifier expected in `aud`.
    #[must_use]
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// The identity provider URL expected in `iss`.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }
}
