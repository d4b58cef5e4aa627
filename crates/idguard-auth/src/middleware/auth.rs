//! Bearer token authentication for axum.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use idguard_auth::middleware::{BearerAuth, VerifierState, authorize};
//!
//! async fn whoami(BearerAuth(identity): BearerAuth) -> String {
//!     identity.username().unwrap_or_default().to_string()
//! }
//!
//! let state = VerifierState::new(verifier);
//! let app = Router::new()
//!     .route("/whoami", get(whoami))
//!     .with_state(state);
//! ```

use axum::{
    body::Body,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use super::bearer::{HeaderError, token_from_auth_header};
use crate::error::IdguardError;
use crate::token::ParsedToken;
use crate::verifier::IdTokenVerifier;

// =============================================================================
// Verifier State
// =============================================================================

/// State required for bearer token authentication.
///
/// Include it in the application state and expose it through `FromRef`, or
/// use it as the router state directly.
#[derive(Debug, Clone)]
pub struct VerifierState {
    /// The verifier every request is checked against.
    pub verifier: IdTokenVerifier,
}

impl VerifierState {
    /// Wraps a verifier.
    #[must_use]
    pub fn new(verifier: IdTokenVerifier) -> Self {
        Self { verifier }
    }
}

// =============================================================================
// Verified Identity
// =============================================================================

/// The identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    token: ParsedToken,
    username: Option<String>,
}

impl VerifiedIdentity {
    fn from_token(token: ParsedToken) -> Self {
        let username = token.claims().username().map(ToString::to_string);
        Self { token, username }
    }

    /// The verified token.
    #[must_use]
    pub fn token(&self) -> &ParsedToken {
        &self.token
    }

    /// The user name claim, if the token carries one.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The `sub` claim, if present.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.token.claims().subject()
    }
}

/// Reads, verifies and wraps the bearer token in `headers`.
fn authenticate(
    verifier: &IdTokenVerifier,
    headers: &HeaderMap,
) -> Result<VerifiedIdentity, IdguardError> {
    let token = headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| HeaderError::InvalidFormat))
        .transpose()
        .and_then(token_from_auth_header)
        .inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected Authorization header");
        })?;

    let identity = VerifiedIdentity::from_token(verifier.verify(token)?);

    tracing::info!(
        username = identity.username().unwrap_or_default(),
        subject = identity.subject().unwrap_or_default(),
        "Request authenticated"
    );

    Ok(identity)
}

// =============================================================================
// Extractor
// =============================================================================

/// Extractor that requires a valid bearer token.
///
/// Rejects with `403 Forbidden` if the header is missing or malformed, or
/// if the token fails verification.
///
/// ```ignore
/// async fn handler(BearerAuth(identity): BearerAuth) -> impl IntoResponse {
///     identity.username().unwrap_or("anonymous").to_string()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BearerAuth(pub VerifiedIdentity);

impl<S> FromRequestParts<S> for BearerAuth
where
    S: Send + Sync,
    VerifierState: FromRef<S>,
{
    type Rejection = IdguardError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<VerifiedIdentity>() {
            return Ok(BearerAuth(identity.clone()));
        }

        let state = VerifierState::from_ref(state);
        authenticate(&state.verifier, &parts.headers).map(BearerAuth)
    }
}

// =============================================================================
// Middleware
// =============================================================================

/// Middleware that rejects unauthenticated requests and stores the
/// [`VerifiedIdentity`] in the request extensions.
///
/// ```ignore
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(axum::middleware::from_fn_with_state(state, authorize));
/// ```
///
/// # Errors
///
/// Returns the rejection, which renders as `403 Forbidden`.
pub async fn authorize(
    State(state): State<VerifierState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, IdguardError> {
    let identity = authenticate(&state.verifier, req.headers())?;
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
