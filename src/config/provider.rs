//! Provider trait and the built-in provider variants.

use std::sync::Arc;

/// A unit capable of producing an optional configuration value from one
/// specific source.
///
/// `get()` is pure except for [`EnvVar`] and [`ConfigFile`], which read
/// external state at call time. Results are never memoized: a change to the
/// environment or the config file between calls is observed on the next
/// call.
///
/// ## Object Safety
///
/// The trait is object-safe and is typically used as
/// `Arc<dyn Provider<T>>` or boxed inside a [`Chain`].
///
/// ## Example
///
/// ```rust
/// use palantir::config::{Provider, Static};
///
/// let provider = Static::new("example.palantirfoundry.com".to_string());
/// assert_eq!(provider.get().as_deref(), Some("example.palantirfoundry.com"));
/// ```
///
/// [`ConfigFile`]: crate::config::ConfigFile
pub trait Provider<T>: Send + Sync {
    /// Returns the value from this source, or `None` when the source has
    /// nothing to offer.
    ///
    /// Absence is a normal, expected outcome, not a failure.
    fn get(&self) -> Option<T>;
}

impl<T, P: Provider<T> + ?Sized> Provider<T> for Arc<P> {
    fn get(&self) -> Option<T> {
        (**self).get()
    }
}

impl<T, P: Provider<T> + ?Sized> Provider<T> for Box<P> {
    fn get(&self) -> Option<T> {
        (**self).get()
    }
}

/// A provider that always returns the same fixed value.
///
/// Installed when a caller supplies an explicit literal override for a
/// concern, replacing that concern's entire default chain.
#[derive(Debug, Clone)]
pub struct Static<T> {
    value: T,
}

impl<T> Static<T> {
    /// Creates a provider that always yields `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone + Send + Sync> Provider<T> for Static<T> {
    fn get(&self) -> Option<T> {
        Some(self.value.clone())
    }
}

/// A provider reading a named process environment variable.
///
/// Absent when the variable is unset, empty, or not valid Unicode. The
/// variable is re-read on every call.
#[derive(Debug, Clone)]
pub struct EnvVar {
    name: String,
}

impl EnvVar {
    /// Creates a provider for the environment variable `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the variable name this provider reads.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: From<String>> Provider<T> for EnvVar {
    fn get(&self) -> Option<T> {
        std::env::var(&self.name)
            .ok()
            .filter(|v| !v.is_empty())
            .map(T::from)
    }
}

/// An ordered fallback sequence of providers for one configuration concern.
///
/// `get()` iterates the members in order and returns the first present
/// result. Evaluation short-circuits: members after the first hit are never
/// invoked. Returns `None` only when every member returns `None`.
pub struct Chain<T> {
    providers: Vec<Box<dyn Provider<T>>>,
}

impl<T> Chain<T> {
    /// Creates a chain over the given providers, evaluated in order.
    pub fn new(providers: Vec<Box<dyn Provider<T>>>) -> Self {
        Self { providers }
    }

    /// Returns the number of member providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if the chain has no members.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<T> Provider<T> for Chain<T> {
    fn get(&self) -> Option<T> {
        self.providers.iter().find_map(|p| p.get())
    }
}

impl<T> std::fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("providers", &self.providers.len())
            .finish()
    }
}
