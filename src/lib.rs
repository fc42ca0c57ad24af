//! # Palantir Rust SDK
//!
//! Rust SDK for the Palantir Foundry ontology API: authenticate against a
//! Foundry host, discover the ontologies and object-type schemas visible to
//! you, and page lazily through large listings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use palantir::{Context, ObjectsClient};
//!
//! fn main() -> Result<(), palantir::Error> {
//!     // Hostname, token, and default ontology come from the environment
//!     // (PALANTIR_HOSTNAME, PALANTIR_TOKEN, PALANTIR_ONTOLOGY_RID) or from
//!     // ~/.palantir/config; any of them can be pinned explicitly.
//!     let ctx = Context::builder()
//!         .hostname("example.palantirfoundry.com")
//!         .build();
//!     let client = ObjectsClient::new(ctx)?;
//!
//!     let ontology = client.get_default_ontology()?;
//!     for object_type in ontology.list_object_types()? {
//!         let object_type = object_type?;
//!         println!("{} ({})", object_type.api_name(), object_type.rid());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Providers and chains**: every configuration concern resolves through
//!   an ordered fallback chain (environment variable, then config file)
//!   unless pinned with an explicit literal; see [`config`].
//! - **RIDs**: resource identifiers are parsed and validated up front; a
//!   [`ResourceIdentifier`] round-trips losslessly to its canonical string.
//! - **Lazy pagination**: multi-page listings are exposed as iterators that
//!   fetch a page only once the previous page is fully consumed.
//! - **Blocking calls**: every operation runs to completion on the caller's
//!   thread; there is no background scheduling.

// Core modules
pub mod config;
pub mod error;
pub mod objects;
pub mod types;

// Transport layer
pub mod transport;

// Client
pub mod client;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{ObjectTypeIter, ObjectsClient, PageIter};
pub use error::{Error, ErrorKind, Result};
pub use objects::{FilterTerm, Object, ObjectType, Ontology, OrderTerm, PropertyFilter, PropertyType};
pub use types::{AuthToken, Context, ContextBuilder, ResourceIdentifier};
