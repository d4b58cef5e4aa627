//! Verifier construction and the request-time entry point.

use std::sync::Arc;

use crate::config::{ProviderConfig, VerifierConfig};
use crate::error::IdguardError;
use crate::jwks::{KeySet, KeySetResolver};
use crate::token::{ParsedToken, TokenError, TokenVerifier};

/// Verifies ID tokens issued by one identity pool for one client.
///
/// The key set is resolved exactly once, in [`IdTokenVerifier::connect`],
/// and never refreshed. Clones share the same key set and configuration, so
/// one verifier can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct IdTokenVerifier {
    key_set: Arc<KeySet>,
    config: Arc<VerifierConfig>,
}

impl IdTokenVerifier {
    /// Creates a verifier from an already-resolved key set.
    #[must_use]
    pub fn new(key_set: KeySet, config: VerifierConfig) -> Self {
        Self {
            key_set: Arc::new(key_set),
            config: Arc::new(config),
        }
    }

    /// Validates `provider`, resolves its JWKS and builds a verifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdguardError::Config`] before any network access if a
    /// required identifier is missing, and [`IdguardError::Fetch`] or
    /// [`IdguardError::KeyMaterial`] if the key set cannot be resolved.
    pub async fn connect(provider: &ProviderConfig) -> Result<Self, IdguardError> {
        provider.validate()?;
        let jwks_uri = provider.jwks_uri()?;

        let resolver = KeySetResolver::new(provider.jwks.clone())?;
        let key_set = resolver.resolve(&jwks_uri).await?;

        tracing::info!(
            issuer = %provider.issuer(),
            keys = key_set.len(),
            "Token verifier ready"
        );

        Ok(Self::new(key_set, provider.verifier_config()))
    }

    /// Verifies `token` at the current time.
    ///
    /// # Errors
    ///
    /// Returns the [`TokenError`] of the first failing check.
    pub fn verify(&self, token: &str) -> Result<ParsedToken, TokenError> {
        TokenVerifier::new(&self.key_set, &self.config)
            .verify(token)
            .inspect_err(|e| log_rejection(token, e))
    }

    /// Verifies `token` as of `now` (seconds since the Unix epoch).
    ///
    /// # Errors
    ///
    /// Returns the [`TokenError`] of the first failing check.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<ParsedToken, TokenError> {
        TokenVerifier::new(&self.key_set, &self.config)
            .verify_at(token, now)
            .inspect_err(|e| log_rejection(token, e))
    }

    /// The resolved key set.
    #[must_use]
    pub fn key_set(&self) -> &KeySet {
        &self.key_set
    }

    /// The expected claim values.
    #[must_use]
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }
}

fn log_rejection(token: &str, err: &TokenError) {
    match err {
        TokenError::Claim { claim, token, .. } => {
            tracing::debug!(
                claim = %claim,
                kid = token.header().key_id().unwrap_or_default(),
                error = %err,
                "Token rejected"
            );
        }
        _ => {
            tracing::debug!(token_len = token.len(), error = %err, "Token rejected");
        }
    }
}
