//! Conversion of raw JWK records into verification keys.
//!
//! Only the canonical public exponent 65537 is accepted, in one of the two
//! encodings the provider emits: the 3-byte `AQAB` and the zero-padded
//! 4-byte `AAEAAQ`. Any other exponent is rejected rather than decoded.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rsa::{BigUint, RsaPublicKey};

use super::jwk::JsonWebKey;
use super::key_set::{PublicKeyMaterial, VerificationKey};

/// The only key type accepted.
pub const RSA_KEY_TYPE: &str = "RSA";

/// Exponent encodings recognized as 65537.
pub const CANONICAL_EXPONENTS: [&str; 2] = ["AQAB", "AAEAAQ"];

const PUBLIC_EXPONENT: u32 = 65537;

/// Largest RSA modulus accepted, in bits.
pub const MAX_MODULUS_BITS: usize = 16384;

/// Errors produced while building key material from a JWK.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyMaterialError {
    /// The key type is not `RSA`.
    #[error("Key {kid}: unsupported key type {kty:?}, must be RSA")]
    UnsupportedKeyType {
        /// Key ID of the rejected entry.
        kid: String,
        /// The published key type.
        kty: String,
    },

    /// The modulus is not valid unpadded base64url.
    #[error("Key {kid}: modulus is not valid base64url: {message}")]
    BadModulusEncoding {
        /// Key ID of the rejected entry.
        kid: String,
        /// Decoder message.
        message: String,
    },

    /// The exponent is not one of the recognized encodings of 65537.
    #[error("Key {kid}: exponent {e:?} is invalid")]
    BadExponent {
        /// Key ID of the rejected entry.
        kid: String,
        /// The published exponent.
        e: String,
    },

    /// The decoded modulus was refused by the RSA implementation.
    #[error("Key {kid}: invalid RSA modulus: {message}")]
    InvalidModulus {
        /// Key ID of the rejected entry.
        kid: String,
        /// Why the modulus was refused.
        message: String,
    },
}

impl KeyMaterialError {
    /// Key ID of the entry that failed to build.
    #[must_use]
    pub fn kid(&self) -> &str {
        match self {
            Self::UnsupportedKeyType { kid, .. }
            | Self::BadModulusEncoding { kid, .. }
            | Self::BadExponent { kid, .. }
            | Self::InvalidModulus { kid, .. } => kid,
        }
    }
}

/// Builds key material from one JWK.
///
/// Pure and deterministic; safe to call concurrently.
///
/// # Errors
///
/// Returns a [`KeyMaterialError`] naming the key if the key type is not
/// RSA, the modulus is not unpadded base64url, or the exponent is not a
/// recognized encoding of 65537.
pub fn build_key_material(jwk: &JsonWebKey) -> Result<PublicKeyMaterial, KeyMaterialError> {
    if jwk.kty != RSA_KEY_TYPE {
        return Err(KeyMaterialError::UnsupportedKeyType {
            kid: jwk.kid.clone(),
            kty: jwk.kty.clone(),
        });
    }

    let modulus = URL_SAFE_NO_PAD
        .decode(jwk.n.as_bytes())
        .map_err(|e| KeyMaterialError::BadModulusEncoding {
            kid: jwk.kid.clone(),
            message: e.to_string(),
        })?;

    let exponent = canonical_exponent(&jwk.e).ok_or_else(|| KeyMaterialError::BadExponent {
        kid: jwk.kid.clone(),
        e: jwk.e.clone(),
    })?;

    let key = RsaPublicKey::new_with_max_size(
        BigUint::from_bytes_be(&modulus),
        BigUint::from(exponent),
        MAX_MODULUS_BITS,
    )
    .map_err(|e| KeyMaterialError::InvalidModulus {
            kid: jwk.kid.clone(),
            message: e.to_string(),
        })?;

    Ok(PublicKeyMaterial::new(jwk.kid.clone(), VerificationKey::from(key))
        .with_metadata(jwk.alg.clone(), jwk.use_.clone()))
}

/// Maps a recognized exponent encoding to its value.
fn canonical_exponent(encoded: &str) -> Option<u32> {
    CANONICAL_EXPONENTS
        .contains(&encoded)
        .then_some(PUBLIC_EXPONENT)
}
