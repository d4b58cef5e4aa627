//! Authorization header parsing.

/// Why no bearer token could be taken from an `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// The header is absent or empty.
    #[error("no token present")]
    Missing,

    /// The header is present but is not `Bearer <token>`.
    #[error("invalid Authorization header")]
    InvalidFormat,
}

/// Extracts the token from an `Authorization` header value.
///
/// The value is split on whitespace. Exactly two fields are accepted and the
/// first must be `bearer` in any letter case. An absent or empty value is
/// [`HeaderError::Missing`]; anything else that does not fit is
/// [`HeaderError::InvalidFormat`].
///
/// # Errors
///
/// See above.
pub fn token_from_auth_header(value: Option<&str>) -> Result<&str, HeaderError> {
    let value = match value {
        None | Some("") => return Err(HeaderError::Missing),
        Some(value) => value,
    };

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(HeaderError::InvalidFormat),
    }
}
