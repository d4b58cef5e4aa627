//! Resolved verification keys indexed by key id.

use std::collections::HashMap;

use jsonwebtoken::DecodingKey;
use rsa::RsaPublicKey;
use rsa::traits::PublicKeyParts;

use crate::token::SigningAlgorithm;

/// Public key material by algorithm family.
///
/// Only RSA keys are published by the providers we verify against today.
/// Adding a family means adding a variant here and an arm in
/// [`VerificationKey::verify`]; the pipeline itself does not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationKey {
    /// RSA public key (`kty = "RSA"`).
    Rsa(RsaKey),
}

impl VerificationKey {
    /// Returns the JWK `kty` tag of this key family.
    #[must_use]
    pub fn key_type(&self) -> &'static str {
        match self {
            Self::Rsa(_) => "RSA",
        }
    }

    /// Returns the key size in bits.
    #[must_use]
    pub fn size_bits(&self) -> usize {
        match self {
            Self::Rsa(key) => key.public_key().n().bits(),
        }
    }

    /// Checks the base64url `signature` segment over `message` under
    /// `algorithm`.
    ///
    /// Returns `false` when the algorithm does not belong to this key's
    /// family, when the signature cannot be decoded or has the wrong
    /// length, or when the cryptographic check fails.
    #[must_use]
    pub fn verify(&self, algorithm: SigningAlgorithm, message: &[u8], signature: &str) -> bool {
        match (self, algorithm) {
            (Self::Rsa(key), SigningAlgorithm::RS256) => jsonwebtoken::crypto::verify(
                signature,
                message,
                key.decoding_key(),
                algorithm.jwt_algorithm(),
            )
            .unwrap_or(false),
        }
    }
}

impl From<RsaPublicKey> for VerificationKey {
    fn from(public_key: RsaPublicKey) -> Self {
        Self::Rsa(RsaKey::new(public_key))
    }
}

/// An RSA public key and the `jsonwebtoken` decoding key built from it.
///
/// Equality compares the public key only.
#[derive(Debug, Clone)]
pub struct RsaKey {
    public_key: RsaPublicKey,
    decoding_key: DecodingKey,
}

impl RsaKey {
    /// Builds the decoding key from the modulus and exponent of `public_key`.
    #[must_use]
    pub fn new(public_key: RsaPublicKey) -> Self {
        let decoding_key = DecodingKey::from_rsa_raw_components(
            &public_key.n().to_bytes_be(),
            &public_key.e().to_bytes_be(),
        );
        Self {
            public_key,
            decoding_key,
        }
    }

    /// The public key.
    #[must_use]
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// The key handed to `jsonwebtoken` for signature checks.
    #[must_use]
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl PartialEq for RsaKey {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for RsaKey {}

/// A verification key together with the JWK metadata it was published with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyMaterial {
    kid: String,
    algorithm: String,
    key_use: String,
    key: VerificationKey,
}

impl PublicKeyMaterial {
    /// Creates key material for `kid`.
    #[must_use]
    pub fn new(kid: impl Into<String>, key: VerificationKey) -> Self {
        Self {
            kid: kid.into(),
            algorithm: String::new(),
            key_use: String::new(),
            key,
        }
    }

    /// Records the `alg` and `use` values the key was published with.
    #[must_use]
    pub fn with_metadata(mut self, algorithm: impl Into<String>, key_use: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self.key_use = key_use.into();
        self
    }

    /// The key id.
    #[must_use]
    pub fn kid(&self) -> &str {
        &self.kid
    }

    /// The published `alg` value. Informational only; the token header
    /// decides which algorithm is checked.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The published `use` value.
    #[must_use]
    pub fn key_use(&self) -> &str {
        &self.key_use
    }

    /// The verification key.
    #[must_use]
    pub fn key(&self) -> &VerificationKey {
        &self.key
    }
}

/// Immutable mapping from key id to key material.
///
/// Built once per verifier and shared read-only between verification calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: HashMap<String, PublicKeyMaterial>,
}

impl KeySet {
    /// Builds a key set. A repeated key id keeps the last entry.
    #[must_use]
    pub fn from_keys(keys: impl IntoIterator<Item = PublicKeyMaterial>) -> Self {
        let keys = keys
            .into_iter()
            .map(|material| (material.kid.clone(), material))
            .collect();
        Self { keys }
    }

    /// Looks up key material by key id.
    #[must_use]
    pub fn get(&self, kid: &str) -> Option<&PublicKeyMaterial> {
        self.keys.get(kid)
    }

    /// Returns `true` if `kid` is present.
    #[must_use]
    pub fn contains(&self, kid: &str) -> bool {
        self.keys.contains_key(kid)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the set holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key ids, sorted.
    #[must_use]
    pub fn key_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.keys.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Iterates over the key material in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &PublicKeyMaterial> {
        self.keys.values()
    }
}
