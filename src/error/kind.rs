//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// This enum provides a stable interface for matching on error types,
/// enabling different handling strategies for different failure modes.
///
/// | ErrorKind              | Typical source                              |
/// |------------------------|---------------------------------------------|
/// | `MalformedIdentifier`  | RID string failed validation                |
/// | `MissingConfiguration` | No provider in a chain produced a value     |
/// | `NotFound`             | Lookup miss, or HTTP 404                    |
/// | `Unauthorized`         | HTTP 401                                    |
/// | `Forbidden`            | HTTP 403                                    |
/// | `InvalidArgument`      | HTTP 400                                    |
/// | `Connection`           | DNS/TCP/TLS failure                         |
/// | `Protocol`             | Response body could not be decoded          |
/// | `Unavailable`          | HTTP 5xx                                    |
/// | `Configuration`        | Invalid base URL, client construction       |
/// | `Internal`             | Anything else                               |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A string does not conform to the canonical 5-component RID shape.
    ///
    /// Raised at parse time, never silently coerced into a partial value.
    #[error("malformed resource identifier")]
    MalformedIdentifier,

    /// A configuration concern resolved to absent where a concrete value
    /// was mandatorily required.
    ///
    /// Absence inside a provider chain is normal and surfaces as `None`;
    /// this kind appears only at consumption points such as building an
    /// `Authorization` header or performing a default-ontology lookup.
    #[error("missing configuration")]
    MissingConfiguration,

    /// A requested resource does not exist or is not visible to the user.
    ///
    /// HTTP: 404 Not Found, or a lookup miss over a listing.
    #[error("not found")]
    NotFound,

    /// Authentication failed (invalid or expired token).
    ///
    /// HTTP: 401 Unauthorized
    #[error("unauthorized")]
    Unauthorized,

    /// Valid credentials but insufficient permissions.
    ///
    /// HTTP: 403 Forbidden
    #[error("forbidden")]
    Forbidden,

    /// Invalid request argument or payload.
    ///
    /// HTTP: 400 Bad Request
    #[error("invalid argument")]
    InvalidArgument,

    /// Network connectivity failure (DNS, TCP, TLS).
    #[error("connection failed")]
    Connection,

    /// The service responded with a body the SDK could not decode.
    #[error("protocol error")]
    Protocol,

    /// The service is temporarily unable to handle the request.
    ///
    /// HTTP: 5xx
    #[error("service unavailable")]
    Unavailable,

    /// The SDK itself was misconfigured (invalid base URL, detached domain
    /// record, HTTP client construction failure).
    #[error("configuration error")]
    Configuration,

    /// An unexpected internal error.
    #[error("internal error")]
    Internal,
}
