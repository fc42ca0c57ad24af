//! HTTP transport for the ontology REST API.
//!
//! [`records`] holds the wire-level request/response shapes with the exact
//! service-side field names; [`rest`] executes blocking HTTP requests
//! against `https://<hostname>/api/v1` with lazy hostname and auth
//! resolution from the [`Context`](crate::Context).

pub mod records;
pub mod rest;

pub use records::{
    ListOntologiesResponse, ObjectTypeRecord, OntologyRecord, Page, PropertyRecord,
};
pub use rest::ApiService;
