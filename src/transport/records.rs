//! Wire-level response shapes.
//!
//! Field names on the wire are the service's (`displayName`, `apiName`,
//! `primaryKey`, `baseType`, `nextPageToken`); serde renames map them
//! one-to-one onto the domain's snake_case names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One ontology as returned by the list-ontologies endpoint.
///
/// The `rid` stays a raw string at this level; the client parses it into a
/// [`ResourceIdentifier`](crate::ResourceIdentifier) when assembling domain
/// records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyRecord {
    /// Raw resource identifier.
    pub rid: String,
    /// Human-readable name (wire: `displayName`).
    pub display_name: String,
    /// Free-form description.
    pub description: String,
}

/// One property descriptor inside an object type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Base type tag (wire: `baseType`), e.g. `String`, `Array<String>`.
    pub base_type: String,
    /// Optional property description.
    #[serde(default)]
    pub description: Option<String>,
}

/// One object type as returned by the object-type endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTypeRecord {
    /// API name (wire: `apiName`).
    pub api_name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered primary-key property names (wire: `primaryKey`), absent for
    /// object types without a declared key.
    #[serde(default)]
    pub primary_key: Option<Vec<String>>,
    /// Property name to descriptor mapping.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyRecord>,
    /// Raw resource identifier.
    pub rid: String,
}

/// Response of the list-ontologies endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListOntologiesResponse {
    /// The visible ontologies.
    pub data: Vec<OntologyRecord>,
}

/// One server-side page of a multi-page listing.
///
/// Produced fresh per request and discarded once the pagination adapter has
/// consumed it. An absent `next_page_token` is the sole end-of-results
/// signal; an empty `data` with a present token means "this page happened to
/// be empty, keep going".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page, in server order.
    pub data: Vec<T>,
    /// Opaque continuation token for the next page (wire: `nextPageToken`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Returns `true` if this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the continuation token, if the server sent one.
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            next_page_token: None,
        }
    }
}
