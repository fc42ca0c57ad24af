//! Domain records for ontologies, object types, and objects.
//!
//! These are thin read-only views assembled from decoded responses. An
//! [`Ontology`] optionally carries a non-owning handle back to the
//! [`ObjectsClient`](crate::ObjectsClient) that fetched it, so nested
//! collections can be traversed lazily; records built without a handle
//! (e.g. in tests) still compare and hash normally.

mod filter;
mod model;

pub use filter::{FilterTerm, OrderTerm, PropertyFilter};
pub use model::{Object, ObjectType, Ontology, PropertyType};
