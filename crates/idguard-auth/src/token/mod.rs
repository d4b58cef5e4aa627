//! Token parsing and verification.

pub mod algorithm;
pub mod claims;
pub mod error;
pub mod parsed;
pub mod verifier;

pub use algorithm::SigningAlgorithm;
pub use claims::{ClaimKind, ClaimViolation, Claims};
pub use error::TokenError;
pub use parsed::{ParsedToken, TokenHeader};
pub use verifier::TokenVerifier;
