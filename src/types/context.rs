//! The resolved configuration bundle passed into API operations.

use std::fmt;
use std::sync::Arc;

use crate::config::{
    self, Provider, Static, default_hostname_chain, default_ontology_rid_chain,
    default_token_chain,
};
use crate::error::{Error, Result};
use crate::types::AuthToken;

/// An immutable bundle of one resolved provider per configuration concern.
///
/// A `Context` holds the hostname, auth token, and default-ontology-RID
/// providers consumed by API operations. It is constructed once per call
/// site, never mutated, and cheap to clone; the same provider instance may
/// back many contexts.
///
/// Resolution is lazy per concern: a provider's `get()` runs only when the
/// concern is actually consumed (building a request URL or header), not at
/// construction time.
///
/// ## Example
///
/// ```rust,no_run
/// use palantir::Context;
///
/// // All concerns from the environment / config file.
/// let ctx = Context::default();
///
/// // Hostname pinned, everything else from the default chains.
/// let ctx = Context::builder()
///     .hostname("example.palantirfoundry.com")
///     .build();
/// ```
#[derive(Clone)]
pub struct Context {
    hostname: Arc<dyn Provider<String>>,
    auth: Arc<dyn Provider<AuthToken>>,
    ontology_rid: Arc<dyn Provider<String>>,
}

impl Context {
    /// Creates a context from explicit providers.
    pub fn new(
        hostname: Arc<dyn Provider<String>>,
        auth: Arc<dyn Provider<AuthToken>>,
        ontology_rid: Arc<dyn Provider<String>>,
    ) -> Self {
        Self {
            hostname,
            auth,
            ontology_rid,
        }
    }

    /// Returns a builder accepting optional literal overrides.
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// Resolves the Foundry hostname.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::MissingConfiguration`](crate::ErrorKind::MissingConfiguration)
    /// when no provider in the hostname chain yields a value.
    pub fn hostname(&self) -> Result<String> {
        self.hostname.get().ok_or_else(|| {
            Error::missing_configuration(format!(
                "no hostname: set {} or the `hostname` attribute of ~/.palantir/config",
                config::HOSTNAME_ENV
            ))
        })
    }

    /// Resolves the auth token and renders it as an `Authorization` header
    /// value.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::MissingConfiguration`](crate::ErrorKind::MissingConfiguration)
    /// when no provider in the token chain yields a value.
    pub fn authorization(&self) -> Result<String> {
        self.auth
            .get()
            .map(|token| token.authorization_header())
            .ok_or_else(|| {
                Error::missing_configuration(format!(
                    "no auth token: set {} or the `token` attribute of ~/.palantir/config",
                    config::TOKEN_ENV
                ))
            })
    }

    /// Resolves the default ontology RID, if one is configured.
    ///
    /// Absence stays data at this layer; the default-ontology lookup is the
    /// point that converts it into an error.
    pub fn ontology_rid(&self) -> Option<String> {
        self.ontology_rid.get()
    }
}

impl Default for Context {
    /// The zero-argument factory: every concern uses its default chain.
    fn default() -> Self {
        ContextBuilder::default().build()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}

/// Builder for [`Context`], accepting optional literal overrides.
///
/// Supplying a non-empty literal for a concern replaces that concern's
/// entire default chain with a static provider; an empty or omitted override
/// keeps the default chain. The decision is made once, at build time.
#[derive(Debug, Default)]
pub struct ContextBuilder {
    hostname: Option<String>,
    token: Option<String>,
    ontology_rid: Option<String>,
}

impl ContextBuilder {
    /// Pins the hostname to a literal value.
    ///
    /// An empty value is treated as "not provided".
    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into()).filter(|v| !v.is_empty());
        self
    }

    /// Pins the bearer token to a literal value.
    ///
    /// An empty value is treated as "not provided".
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into()).filter(|v| !v.is_empty());
        self
    }

    /// Pins the default ontology RID to a literal value.
    ///
    /// An empty value is treated as "not provided".
    #[must_use]
    pub fn ontology_rid(mut self, ontology_rid: impl Into<String>) -> Self {
        self.ontology_rid = Some(ontology_rid.into()).filter(|v| !v.is_empty());
        self
    }

    /// Builds the context.
    pub fn build(self) -> Context {
        let hostname: Arc<dyn Provider<String>> = match self.hostname {
            Some(literal) => Arc::new(Static::new(literal)),
            None => Arc::new(default_hostname_chain()),
        };
        let auth: Arc<dyn Provider<AuthToken>> = match self.token {
            Some(literal) => Arc::new(Static::new(AuthToken::from(literal))),
            None => Arc::new(default_token_chain()),
        };
        let ontology_rid: Arc<dyn Provider<String>> = match self.ontology_rid {
            Some(literal) => Arc::new(Static::new(literal)),
            None => Arc::new(default_ontology_rid_chain()),
        };
        Context::new(hostname, auth, ontology_rid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::config::Chain;

    fn absent<T: 'static>() -> Arc<dyn Provider<T>> {
        Arc::new(Chain::new(vec![]))
    }

    #[test]
    fn test_override_precedence() {
        // A literal override wins regardless of environment or config file.
        let ctx = Context::builder()
            .hostname("pinned.palantirfoundry.com")
            .build();
        assert_eq!(ctx.hostname().unwrap(), "pinned.palantirfoundry.com");
    }

    #[test]
    fn test_empty_override_keeps_default_chain() {
        let builder = Context::builder().hostname("").token("").ontology_rid("");
        assert!(builder.hostname.is_none());
        assert!(builder.token.is_none());
        assert!(builder.ontology_rid.is_none());
    }

    #[test]
    fn test_authorization_renders_bearer_header() {
        let ctx = Context::builder().token("tok-123").build();
        assert_eq!(ctx.authorization().unwrap(), "Bearer tok-123");
    }

    #[test]
    fn test_absent_hostname_is_missing_configuration() {
        let ctx = Context::new(
            absent(),
            Arc::new(Static::new(AuthToken::from("t"))),
            absent(),
        );
        let err = ctx.hostname().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingConfiguration);
    }

    #[test]
    fn test_absent_token_is_missing_configuration() {
        let ctx = Context::new(Arc::new(Static::new("h".to_string())), absent(), absent());
        let err = ctx.authorization().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingConfiguration);
    }

    #[test]
    fn test_absent_ontology_rid_stays_data() {
        let ctx = Context::new(
            Arc::new(Static::new("h".to_string())),
            Arc::new(Static::new(AuthToken::from("t"))),
            absent(),
        );
        assert_eq!(ctx.ontology_rid(), None);
    }

    #[test]
    fn test_providers_shared_across_contexts() {
        let hostname: Arc<dyn Provider<String>> = Arc::new(Static::new("shared".to_string()));
        let auth: Arc<dyn Provider<AuthToken>> = Arc::new(Static::new(AuthToken::from("t")));
        let rid: Arc<dyn Provider<String>> = Arc::new(Static::new("r".to_string()));

        let a = Context::new(Arc::clone(&hostname), Arc::clone(&auth), Arc::clone(&rid));
        let b = Context::new(hostname, auth, rid);
        assert_eq!(a.hostname().unwrap(), b.hostname().unwrap());
    }
}
