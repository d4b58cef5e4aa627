//! Accepted token signing algorithms.

use std::fmt;

/// Signing algorithms a token header may declare.
///
/// The header's `alg` is matched against this list before any key lookup;
/// it is never inferred from the key or from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningAlgorithm {
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    RS256,
}

impl SigningAlgorithm {
    /// Every accepted algorithm.
    pub const ALL: [Self; 1] = [Self::RS256];

    /// Parses a header `alg` value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_header(alg: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == alg)
    }

    /// Returns the algorithm name as used in JWT headers.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RS256 => "RS256",
        }
    }

    /// The matching `jsonwebtoken` algorithm.
    #[must_use]
    pub fn jwt_algorithm(&self) -> jsonwebtoken::Algorithm {
        match self {
            Self::RS256 => jsonwebtoken::Algorithm::RS256,
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
