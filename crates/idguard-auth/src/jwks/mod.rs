//! JWKS resolution and key material.
//!
//! Data flows one way: a fetched [`JwksDocument`] is turned entry by entry
//! into [`PublicKeyMaterial`] by [`build_key_material`], and collected into
//! an immutable [`KeySet`] that verification only ever reads.

pub mod jwk;
pub mod key_material;
pub mod key_set;
pub mod resolver;

pub use jwk::{JsonWebKey, JwksDocument};
pub use key_material::{CANONICAL_EXPONENTS, KeyMaterialError, RSA_KEY_TYPE, build_key_material};
pub use key_set::{KeySet, PublicKeyMaterial, RsaKey, VerificationKey};
pub use resolver::{FetchError, KeySetResolver, ResolveError, build_key_set};
