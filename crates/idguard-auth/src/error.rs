//! Crate-wide error type.
//!
//! Each component reports its own error enum. [`IdguardError`] wraps all of
//! them for callers that only need to log or classify a failure.

use std::fmt;

use crate::config::ConfigError;
use crate::jwks::{FetchError, KeyMaterialError, ResolveError};
use crate::middleware::HeaderError;
use crate::token::TokenError;

/// Any failure raised while constructing a verifier or verifying a request.
#[derive(Debug, thiserror::Error)]
pub enum IdguardError {
    /// The provider configuration is incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The JWKS document could not be obtained.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A JWKS entry could not be turned into key material.
    #[error(transparent)]
    KeyMaterial(#[from] KeyMaterialError),

    /// A token was rejected.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// The Authorization header did not carry a bearer token.
    #[error(transparent)]
    Header(#[from] HeaderError),
}

impl From<ResolveError> for IdguardError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Fetch(e) => Self::Fetch(e),
            ResolveError::KeyMaterial(e) => Self::KeyMaterial(e),
        }
    }
}

impl IdguardError {
    /// Returns `true` if the failure happened while building a verifier.
    #[must_use]
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Fetch(_) | Self::KeyMaterial(_)
        )
    }

    /// Returns `true` if the failure rejected a request.
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::Token(_) | Self::Header(_))
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Fetch(_) => ErrorCategory::Fetch,
            Self::KeyMaterial(_) => ErrorCategory::KeyMaterial,
            Self::Token(TokenError::Claim { .. }) => ErrorCategory::Claim,
            Self::Token(_) => ErrorCategory::Token,
            Self::Header(_) => ErrorCategory::Header,
        }
    }
}

/// Categories of failures for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing or invalid configuration.
    Configuration,
    /// JWKS transport or parse failures.
    Fetch,
    /// Unusable published keys.
    KeyMaterial,
    /// Structural, algorithm, key selection and signature failures.
    Token,
    /// Claim checks on an authentic token.
    Claim,
    /// Authorization header format.
    Header,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Fetch => write!(f, "fetch"),
            Self::KeyMaterial => write!(f, "key_material"),
            Self::Token => write!(f, "token"),
            Self::Claim => write!(f, "claim"),
            Self::Header => write!(f, "header"),
        }
    }
}
