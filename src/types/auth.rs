//! Bearer token type.

use std::fmt;

/// The authorization scheme prepended when rendering a header value.
const BEARER_SCHEME: &str = "Bearer ";

/// An opaque bearer token.
///
/// The token value is never inspected by the SDK; it is only rendered into
/// an `Authorization` header. `Debug` output is redacted so tokens do not
/// leak into logs.
///
/// ```rust
/// use palantir::AuthToken;
///
/// let token = AuthToken::from("eyJhbGciOi");
/// assert_eq!(token.authorization_header(), "Bearer eyJhbGciOi");
/// assert_eq!(format!("{:?}", token), "AuthToken(***)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    value: String,
}

impl AuthToken {
    /// Wraps a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Renders the token as an `Authorization` header value.
    pub fn authorization_header(&self) -> String {
        format!("{}{}", BEARER_SCHEME, self.value)
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for AuthToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}
