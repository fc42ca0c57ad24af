//! Client types for talking to the ontology service.
//!
//! [`ObjectsClient`] is the entry point: construct it from a
//! [`Context`](crate::Context), then list ontologies, look one up, and walk
//! its object types.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use palantir::{Context, ObjectsClient};
//!
//! fn main() -> Result<(), palantir::Error> {
//!     let client = ObjectsClient::new(Context::default())?;
//!
//!     for ontology in client.list_ontologies()? {
//!         println!("{} ({})", ontology.display_name(), ontology.rid());
//!     }
//!
//!     let ontology = client.get_default_ontology()?;
//!     for object_type in ontology.list_object_types()? {
//!         println!("  {}", object_type?.api_name());
//!     }
//!     Ok(())
//! }
//! ```

mod paginate;

pub use paginate::PageIter;

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::objects::{ObjectType, Ontology};
use crate::transport::records::{ObjectTypeRecord, Page};
use crate::transport::rest::ApiService;
use crate::types::Context;

/// Client for the ontology API.
///
/// `ObjectsClient` is `Clone` and thread-safe: it wraps a shared inner
/// state, so cloning is cheap and domain records can carry a non-owning
/// handle back to the client that fetched them.
#[derive(Clone)]
pub struct ObjectsClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    api: ApiService,
}

impl ObjectsClient {
    /// Creates a client over the given context.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Configuration`](crate::ErrorKind::Configuration) when
    /// the underlying HTTP client cannot be constructed. Hostname and auth
    /// are not resolved here; that happens lazily per request.
    pub fn new(ctx: Context) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ClientInner {
                api: ApiService::new(ctx)?,
            }),
        })
    }

    /// Creates a client whose every concern resolves through the default
    /// chains (environment variables, then `~/.palantir/config`).
    pub fn from_env() -> Result<Self> {
        Self::new(Context::default())
    }

    /// Returns the context this client resolves configuration from.
    pub fn context(&self) -> &Context {
        self.inner.api.context()
    }

    /// Lists the ontologies visible to the user.
    ///
    /// Returns a finite, fully-materialized list. Every raw RID in the
    /// response is parsed; a single unparsable RID fails the whole call
    /// rather than yielding partial results.
    pub fn list_ontologies(&self) -> Result<Vec<Ontology>> {
        self.inner
            .api
            .list_ontologies()?
            .data
            .into_iter()
            .map(|record| {
                Ok(Ontology::new(
                    record.rid.parse()?,
                    record.description,
                    record.display_name,
                    Some(self.clone()),
                ))
            })
            .collect()
    }

    /// Walks every object type of an ontology across all server pages.
    ///
    /// The returned iterator is lazy: no request is sent until the first
    /// item is pulled, and the next page is fetched only once the previous
    /// page's items are consumed.
    pub fn list_object_types(&self, ontology_rid: &str) -> ObjectTypeIter {
        let client = self.clone();
        let rid = ontology_rid.to_string();
        ObjectTypeIter {
            inner: PageIter::new(Box::new(move |token: Option<&str>| {
                client.inner.api.list_object_types(&rid, token)
            })),
        }
    }

    /// Fetches a single object type of an ontology by API name.
    pub fn get_object_type(&self, ontology_rid: &str, api_name: &str) -> Result<ObjectType> {
        let record = self.inner.api.get_object_type(ontology_rid, api_name)?;
        ObjectType::from_record(record)
    }

    /// Looks up an ontology by its RID string.
    ///
    /// Scans the full visible listing; the service exposes no
    /// single-ontology endpoint.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::NotFound`](crate::ErrorKind::NotFound) when no visible
    /// ontology matches `rid`.
    pub fn get_ontology(&self, rid: &str) -> Result<Ontology> {
        self.find_ontology(rid)?.ok_or_else(|| {
            Error::not_found(format!(
                "ontology {:?} does not exist or is not visible to the user",
                rid
            ))
        })
    }

    /// Looks up the ontology named by the context's ontology-RID concern.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::MissingConfiguration`](crate::ErrorKind::MissingConfiguration)
    /// when no provider in the ontology-RID chain yields a value;
    /// [`ErrorKind::NotFound`](crate::ErrorKind::NotFound) when the resolved
    /// RID matches no visible ontology.
    pub fn get_default_ontology(&self) -> Result<Ontology> {
        let rid = self.context().ontology_rid().ok_or_else(|| {
            Error::missing_configuration(
                "ontology rid is not specified and cannot be found in the environment",
            )
        })?;
        self.find_ontology(&rid)?.ok_or_else(|| {
            Error::not_found(format!(
                "ontology {:?} obtained from the environment does not exist or is not visible to the user",
                rid
            ))
        })
    }

    /// Linear scan over the visible ontologies, comparing canonical RID
    /// forms. An unparsable needle simply never matches.
    fn find_ontology(&self, rid: &str) -> Result<Option<Ontology>> {
        Ok(self
            .list_ontologies()?
            .into_iter()
            .find(|ontology| ontology.rid().to_string() == rid))
    }
}

impl std::fmt::Debug for ObjectsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectsClient").finish_non_exhaustive()
    }
}

/// Lazy iterator over the object types of one ontology.
///
/// Yields `Result<ObjectType>`: a transport failure or an unparsable RID
/// surfaces as an `Err` item, after which iteration ends.
pub struct ObjectTypeIter {
    inner: PageIter<
        ObjectTypeRecord,
        Box<dyn FnMut(Option<&str>) -> Result<Page<ObjectTypeRecord>> + Send>,
    >,
}

impl Iterator for ObjectTypeIter {
    type Item = Result<ObjectType>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|record| record.and_then(ObjectType::from_record))
    }
}

impl std::fmt::Debug for ObjectTypeIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectTypeIter").finish_non_exhaustive()
    }
}
