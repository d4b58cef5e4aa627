//! Token rejection reasons.

use super::claims::{ClaimKind, ClaimViolation};
use super::parsed::ParsedToken;

/// Why a token was rejected.
///
/// Variants are ordered as the verification stages that raise them. Only
/// [`TokenError::Claim`] carries the parsed token: every earlier stage
/// fails before the payload can be trusted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    /// The token is not three base64url segments with a JSON header, or
    /// its payload is not a JSON object.
    #[error("Malformed token: {message}")]
    Malformed {
        /// What was wrong with the token's structure.
        message: String,
    },

    /// The header declares an algorithm other than RS256.
    #[error("Invalid signing method {alg:?}: signing method must be RS256")]
    UnsupportedAlgorithm {
        /// The declared algorithm, empty if absent.
        alg: String,
    },

    /// The header has no `kid`.
    #[error("Token is missing key ID (kid) header")]
    MissingKeyId,

    /// The header's `kid` is not in the key set.
    #[error("Invalid kid {kid}")]
    UnknownKey {
        /// The unknown key id.
        kid: String,
    },

    /// The signature does not verify under the selected key.
    #[error("Invalid signature")]
    InvalidSignature,

    /// A claim check failed on an authentic token.
    #[error("{claim} claim rejected: {violation}")]
    Claim {
        /// The check that failed.
        claim: ClaimKind,
        /// Why it failed.
        violation: ClaimViolation,
        /// The rejected token, for auditing.
        token: Box<ParsedToken>,
    },
}

impl TokenError {
    /// Creates a new `Malformed` error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// The rejected token, present only for claim failures.
    #[must_use]
    pub fn token(&self) -> Option<&ParsedToken> {
        match self {
            Self::Claim { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Consumes the error, returning the rejected token if there is one.
    #[must_use]
    pub fn into_token(self) -> Option<ParsedToken> {
        match self {
            Self::Claim { token, .. } => Some(*token),
            _ => None,
        }
    }

    /// The failed claim check, if this is a claim failure.
    #[must_use]
    pub fn claim(&self) -> Option<ClaimKind> {
        match self {
            Self::Claim { claim, .. } => Some(*claim),
            _ => None,
        }
    }

    /// Returns `true` if the failure concerns key selection.
    #[must_use]
    pub fn is_key_error(&self) -> bool {
        matches!(self, Self::MissingKeyId | Self::UnknownKey { .. })
    }

    /// Returns `true` if the token failed before its signature was trusted.
    #[must_use]
    pub fn is_untrusted(&self) -> bool {
        !matches!(self, Self::Claim { .. })
    }
}
