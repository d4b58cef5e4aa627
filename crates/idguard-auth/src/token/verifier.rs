//! Compact token verification.
//!
//! The pipeline runs in a fixed order and stops at the first failure:
//!
//! 1. split into three segments and decode the header
//! 2. match the header's `alg` against [`SigningAlgorithm`] (before any key lookup)
//! 3. select the key by `kid`
//! 4. check the signature over the first two segments as transmitted
//! 5. decode the payload and check `aud`, then `exp`, then `iss`
//!
//! No claim is read before the signature verifies.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use super::algorithm::SigningAlgorithm;
use super::claims::{ClaimKind, ClaimViolation, Claims};
use super::error::TokenError;
use super::parsed::{ParsedToken, TokenHeader};
use crate::config::VerifierConfig;
use crate::jwks::KeySet;

/// Verifies tokens against a fixed key set and expected claim values.
///
/// Borrows everything it needs, so constructing one per request is free.
#[derive(Debug, Clone, Copy)]
pub struct TokenVerifier<'a> {
    key_set: &'a KeySet,
    config: &'a VerifierConfig,
}

impl<'a> TokenVerifier<'a> {
    /// Creates a verifier over `key_set` expecting the values in `config`.
    #[must_use]
    pub fn new(key_set: &'a KeySet, config: &'a VerifierConfig) -> Self {
        Self { key_set, config }
    }

    /// Verifies `token` at the current wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`TokenVerifier::verify_at`].
    pub fn verify(&self, token: &str) -> Result<ParsedToken, TokenError> {
        self.verify_at(token, OffsetDateTime::now_utc().unix_timestamp())
    }

    /// Verifies `token` as of `now` (seconds since the Unix epoch).
    ///
    /// # Errors
    ///
    /// Returns the [`TokenError`] of the first failing stage. Only
    /// [`TokenError::Claim`] carries the parsed token.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<ParsedToken, TokenError> {
        let mut segments = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::malformed("token must have three segments"));
        };

        let header = TokenHeader::new(decode_object(header_b64, "header")?);

        let alg = header.algorithm().unwrap_or_default();
        let algorithm =
            SigningAlgorithm::from_header(alg).ok_or_else(|| TokenError::UnsupportedAlgorithm {
                alg: alg.to_string(),
            })?;

        let kid = header.key_id().ok_or(TokenError::MissingKeyId)?;
        let material = self
            .key_set
            .get(kid)
            .ok_or_else(|| TokenError::UnknownKey {
                kid: kid.to_string(),
            })?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::InvalidSignature)?;
        let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
        if !material
            .key()
            .verify(algorithm, signing_input.as_bytes(), signature_b64)
        {
            return Err(TokenError::InvalidSignature);
        }

        let claims = Claims::new(decode_object(payload_b64, "payload")?);
        let mut parsed = ParsedToken::new(token.to_string(), header, claims, signature);

        if let Err((claim, violation)) = self.check_claims(parsed.claims(), now) {
            return Err(TokenError::Claim {
                claim,
                violation,
                token: Box::new(parsed),
            });
        }

        parsed.mark_valid();
        Ok(parsed)
    }

    fn check_claims(&self, claims: &Claims, now: i64) -> Result<(), (ClaimKind, ClaimViolation)> {
        let audience = claims
            .audience()
            .map_err(|violation| (ClaimKind::Audience, violation))?;
        if audience != self.config.audience() {
            return Err((
                ClaimKind::Audience,
                ClaimViolation::Mismatch {
                    actual: audience.to_string(),
                },
            ));
        }

        let exp = claims
            .expires_at()
            .map_err(|violation| (ClaimKind::Expiry, violation))?;
        if exp <= now {
            return Err((ClaimKind::Expiry, ClaimViolation::Expired { exp, now }));
        }

        let issuer = claims
            .issuer()
            .map_err(|violation| (ClaimKind::Issuer, violation))?;
        if issuer != self.config.issuer() {
            return Err((
                ClaimKind::Issuer,
                ClaimViolation::Mismatch {
                    actual: issuer.to_string(),
                },
            ));
        }

        Ok(())
    }
}

fn decode_object(segment: &str, what: &str) -> Result<Map<String, Value>, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::malformed(format!("{what} is not base64url: {e}")))?;
    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(TokenError::malformed(format!("{what} is not a JSON object"))),
        Err(e) => Err(TokenError::malformed(format!("{what} is not valid JSON: {e}"))),
    }
}
