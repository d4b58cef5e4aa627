//! # idguard-auth
//!
//! Bearer token verification for OIDC-style identity pools that publish
//! their signing keys as a JSON Web Key Set.
//!
//! This crate provides:
//! - one-shot JWKS resolution into an immutable key set
//! - RS256 signature verification with the algorithm pinned before key lookup
//! - audience, expiry and issuer checks on authenticated claims
//! - axum extractors and middleware for `Authorization: Bearer` requests
//!
//! ## Modules
//!
//! - [`config`] - Identity pool and verifier configuration
//! - [`jwks`] - JWKS documents, key material and key set resolution
//! - [`token`] - Token parsing, claims and the verification pipeline
//! - [`verifier`] - Shared verifier built once per identity pool
//! - [`middleware`] - HTTP boundary
//! - [`error`] - Crate-wide error type
//!
//! ## Example
//!
//! ```ignore
//! use idguard_auth::prelude::*;
//!
//! let provider = ProviderConfig::new("ap-southeast-2", "ap-southeast-2_example", "client-id");
//! let verifier = IdTokenVerifier::connect(&provider).await?;
//!
//! match verifier.verify(token) {
//!     Ok(parsed) => println!("hello {:?}", parsed.claims().username()),
//!     Err(e) => eprintln!("rejected: {e}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod jwks;
pub mod middleware;
pub mod token;
pub mod verifier;

pub use config::{ConfigError, JwksConfig, ProviderConfig, VerifierConfig};
pub use error::{ErrorCategory, IdguardError};
pub use jwks::{
    FetchError, JsonWebKey, JwksDocument, KeyMaterialError, KeySet, KeySetResolver,
    PublicKeyMaterial, ResolveError, RsaKey, VerificationKey, build_key_material, build_key_set,
};
pub use middleware::{
    BearerAuth, HeaderError, VerifiedIdentity, VerifierState, authorize, token_from_auth_header,
};
pub use token::{
    ClaimKind, ClaimViolation, Claims, ParsedToken, SigningAlgorithm, TokenError, TokenHeader,
    TokenVerifier,
};
pub use verifier::IdTokenVerifier;

/// Result type for idguard operations.
pub type IdguardResult<T> = Result<T, IdguardError>;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```ignore
/// use idguard_auth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::IdguardResult;
    pub use crate::config::{ConfigError, JwksConfig, ProviderConfig, VerifierConfig};
    pub use crate::error::{ErrorCategory, IdguardError};
    pub use crate::jwks::{KeySet, KeySetResolver, PublicKeyMaterial};
    pub use crate::middleware::{BearerAuth, VerifiedIdentity, VerifierState, authorize};
    pub use crate::token::{ClaimKind, ClaimViolation, ParsedToken, TokenError};
    pub use crate::verifier::IdTokenVerifier;
}
