//! Typed access to a token's claim set.
//!
//! Claims are kept as the JSON object they were decoded from, so arbitrary
//! provider claims pass through untouched. The registered claims the
//! verifier checks are read through accessors that report a missing or
//! mistyped value as a [`ClaimViolation`] instead of panicking.

use std::fmt;

use serde_json::{Map, Value};

/// Registered claim names.
pub const AUDIENCE: &str = "aud";
/// Expiration time claim.
pub const EXPIRES_AT: &str = "exp";
/// Issuer claim.
pub const ISSUER: &str = "iss";
/// Subject claim.
pub const SUBJECT: &str = "sub";

/// The claim checks run after a signature is trusted, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKind {
    /// `aud` must equal the configured client identifier.
    Audience,
    /// `exp` must lie strictly in the future.
    Expiry,
    /// `iss` must equal the configured issuer.
    Issuer,
}

impl ClaimKind {
    /// The JSON member the check reads.
    #[must_use]
    pub fn claim_name(&self) -> &'static str {
        match self {
            Self::Audience => AUDIENCE,
            Self::Expiry => EXPIRES_AT,
            Self::Issuer => ISSUER,
        }
    }
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audience => write!(f, "audience"),
            Self::Expiry => write!(f, "expiry"),
            Self::Issuer => write!(f, "issuer"),
        }
    }
}

/// Why a claim failed its check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimViolation {
    /// The claim is absent.
    #[error("claim is missing")]
    Missing,

    /// The claim has the wrong JSON type.
    #[error("claim is not a {expected}")]
    WrongType {
        /// Expected JSON type.
        expected: &'static str,
    },

    /// The claim does not equal the expected value.
    #[error("unexpected value {actual:?}")]
    Mismatch {
        /// The value the token carried.
        actual: String,
    },

    /// The expiry is not after the verification time.
    #[error("token expired at {exp} (now {now})")]
    Expired {
        /// The token's `exp`, in whole seconds.
        exp: i64,
        /// Verification time, in whole seconds.
        now: i64,
    },
}

/// A token's claim set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Wraps a decoded claim object.
    #[must_use]
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    /// Returns a claim by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Reads a string claim.
    ///
    /// # Errors
    ///
    /// [`ClaimViolation::Missing`] if absent, [`ClaimViolation::WrongType`]
    /// if not a JSON string.
    pub fn string(&self, name: &str) -> Result<&str, ClaimViolation> {
        match self.0.get(name) {
            None => Err(ClaimViolation::Missing),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ClaimViolation::WrongType { expected: "string" }),
        }
    }

    /// Reads a NumericDate claim as whole seconds, rounding fractions up.
    ///
    /// Against a whole-second `now`, `ceil(exp) > now` holds exactly when
    /// `exp > now` does, so expiry checks keep sub-second precision.
    ///
    /// # Errors
    ///
    /// [`ClaimViolation::Missing`] if absent, [`ClaimViolation::WrongType`]
    /// if not a JSON number.
    pub fn numeric_date(&self, name: &str) -> Result<i64, ClaimViolation> {
        match self.0.get(name) {
            None => Err(ClaimViolation::Missing),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.ceil() as i64))
                .ok_or(ClaimViolation::WrongType { expected: "number" }),
            Some(_) => Err(ClaimViolation::WrongType { expected: "number" }),
        }
    }

    /// The `aud` claim. A multi-valued (array) audience is a type error.
    ///
    /// # Errors
    ///
    /// See [`Claims::string`].
    pub fn audience(&self) -> Result<&str, ClaimViolation> {
        self.string(AUDIENCE)
    }

    /// The `exp` claim.
    ///
    /// # Errors
    ///
    /// See [`Claims::numeric_date`].
    pub fn expires_at(&self) -> Result<i64, ClaimViolation> {
        self.numeric_date(EXPIRES_AT)
    }

    /// The `iss` claim.
    ///
    /// # Errors
    ///
    /// See [`Claims::string`].
    pub fn issuer(&self) -> Result<&str, ClaimViolation> {
        self.string(ISSUER)
    }

    /// The `sub` claim, if it is a string.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.string(SUBJECT).ok()
    }

    /// The user name: `username` if present, otherwise `cognito:username`.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.string("username")
            .or_else(|_| self.string("cognito:username"))
            .ok()
    }

    /// The underlying claim object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the claims, returning the claim object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}
