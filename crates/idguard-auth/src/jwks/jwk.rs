//! Raw JSON Web Key records as published by the identity provider.

use serde::{Deserialize, Serialize};

/// A JWKS document: `{"keys": [...]}`.
///
/// The `keys` member is required; a document without it is a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JwksDocument {
    /// The published keys, in document order.
    pub keys: Vec<JsonWebKey>,
}

/// One published key, with its fields still encoded.
///
/// Absent fields deserialize as empty strings so that the key material
/// builder reports them as unsupported or malformed rather than the whole
/// document failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct JsonWebKey {
    /// Algorithm name (e.g. `RS256`).
    pub alg: String,

    /// Public exponent, base64url without padding.
    pub e: String,

    /// Key ID.
    pub kid: String,

    /// Key type (`RSA`).
    pub kty: String,

    /// Modulus, base64url without padding.
    pub n: String,

    /// Declared use (`sig`).
    #[serde(rename = "use")]
    pub use_: String,
}
