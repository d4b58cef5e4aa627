//! Parsed compact tokens.

use serde_json::{Map, Value};

use super::claims::Claims;

/// Decoded JOSE header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenHeader(Map<String, Value>);

impl TokenHeader {
    /// Wraps a decoded header object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The declared `alg`, if it is a string.
    #[must_use]
    pub fn algorithm(&self) -> Option<&str> {
        self.0.get("alg").and_then(Value::as_str)
    }

    /// The declared `kid`, if it is a string.
    #[must_use]
    pub fn key_id(&self) -> Option<&str> {
        self.0.get("kid").and_then(Value::as_str)
    }

    /// Returns a header field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The underlying header object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// A token whose signature has been verified.
///
/// A `ParsedToken` only exists once its signature checked out. It is marked
/// valid after every claim check passes; a token handed back inside a claim
/// rejection is never valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedToken {
    raw: String,
    header: TokenHeader,
    claims: Claims,
    signature: Vec<u8>,
    valid: bool,
}

impl ParsedToken {
    pub(crate) fn new(raw: String, header: TokenHeader, claims: Claims, signature: Vec<u8>) -> Self {
        Self {
            raw,
            header,
            claims,
            signature,
            valid: false,
        }
    }

    pub(crate) fn mark_valid(&mut self) {
        self.valid = true;
    }

    /// The original compact string.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The decoded header.
    #[must_use]
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// The claim set.
    #[must_use]
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// The raw signature bytes.
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// `true` once the signature and every claim check passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
