//! HTTP boundary: bearer extraction and request authentication.
//!
//! [`token_from_auth_header`] implements the `Authorization: Bearer <token>`
//! contract on its own. The axum pieces build on it:
//!
//! - [`BearerAuth`] extractor for individual handlers
//! - [`authorize`] middleware for whole routers, which stores the
//!   [`VerifiedIdentity`] in request extensions

pub mod auth;
pub mod bearer;
pub mod error;

pub use auth::{BearerAuth, VerifiedIdentity, VerifierState, authorize};
pub use bearer::{HeaderError, token_from_auth_header};
pub use error::{INVALID_HEADER_MESSAGE, INVALID_TOKEN_MESSAGE};
