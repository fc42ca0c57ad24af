//! Ontology, object-type, and object records.

use std::collections::BTreeMap;

use crate::client::{ObjectTypeIter, ObjectsClient};
use crate::error::{Error, Result};
use crate::transport::records::ObjectTypeRecord;
use crate::types::ResourceIdentifier;

/// An ontology visible to the user.
///
/// Equality and ordering cover the RID and metadata only; the optional
/// client handle is ignored, so records constructed without one (as tests
/// do) compare equal to their fetched counterparts.
#[derive(Debug, Clone)]
pub struct Ontology {
    rid: ResourceIdentifier,
    description: String,
    display_name: String,
    client: Option<ObjectsClient>,
}

impl Ontology {
    /// Assembles an ontology record.
    ///
    /// `client` is the non-owning back-handle used by
    /// [`list_object_types`](Self::list_object_types); pass `None` for
    /// detached records.
    pub fn new(
        rid: ResourceIdentifier,
        description: impl Into<String>,
        display_name: impl Into<String>,
        client: Option<ObjectsClient>,
    ) -> Self {
        Self {
            rid,
            description: description.into(),
            display_name: display_name.into(),
            client,
        }
    }

    /// The ontology's resource identifier.
    pub fn rid(&self) -> &ResourceIdentifier {
        &self.rid
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Walks the object types in this ontology, lazily paging through the
    /// server-side listing.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Configuration`](crate::ErrorKind::Configuration) when
    /// the record is detached from a client.
    pub fn list_object_types(&self) -> Result<ObjectTypeIter> {
        let client = self.attached_client()?;
        Ok(client.list_object_types(&self.rid.to_string()))
    }

    /// Fetches the object type named `api_name` in this ontology.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Configuration`](crate::ErrorKind::Configuration) when
    /// the record is detached from a client.
    pub fn object_type(&self, api_name: &str) -> Result<ObjectType> {
        let client = self.attached_client()?;
        client.get_object_type(&self.rid.to_string(), api_name)
    }

    fn attached_client(&self) -> Result<&ObjectsClient> {
        self.client
            .as_ref()
            .ok_or_else(|| Error::configuration("ontology is not attached to a client"))
    }
}

impl PartialEq for Ontology {
    fn eq(&self, other: &Self) -> bool {
        self.rid == other.rid
            && self.description == other.description
            && self.display_name == other.display_name
    }
}

impl Eq for Ontology {}

/// One property descriptor of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyType {
    /// Base type tag, e.g. `String`, `Array<String>`.
    pub base_type: String,
    /// Optional description.
    pub description: Option<String>,
}

/// The schema of one object type in an ontology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    api_name: String,
    description: Option<String>,
    primary_key: Vec<String>,
    properties: BTreeMap<String, PropertyType>,
    rid: ResourceIdentifier,
}

impl ObjectType {
    /// Builds the domain record from its wire shape, parsing the raw RID.
    pub(crate) fn from_record(record: ObjectTypeRecord) -> Result<Self> {
        Ok(Self {
            api_name: record.api_name,
            description: record.description,
            primary_key: record.primary_key.unwrap_or_default(),
            properties: record
                .properties
                .into_iter()
                .map(|(name, property)| {
                    (
                        name,
                        PropertyType {
                            base_type: property.base_type,
                            description: property.description,
                        },
                    )
                })
                .collect(),
            rid: record.rid.parse()?,
        })
    }

    /// The API name used to address this object type.
    pub fn api_name(&self) -> &str {
        &self.api_name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Ordered primary-key property names.
    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    /// Property name to descriptor mapping, ordered by name.
    pub fn properties(&self) -> &BTreeMap<String, PropertyType> {
        &self.properties
    }

    /// The object type's resource identifier.
    pub fn rid(&self) -> &ResourceIdentifier {
        &self.rid
    }
}

/// A single object instance: its RID and raw property values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    rid: ResourceIdentifier,
    properties: serde_json::Map<String, serde_json::Value>,
}

impl Object {
    /// Assembles an object record.
    pub fn new(
        rid: ResourceIdentifier,
        properties: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self { rid, properties }
    }

    /// The object's resource identifier.
    pub fn rid(&self) -> &ResourceIdentifier {
        &self.rid
    }

    /// Raw property values keyed by property name.
    pub fn properties(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.properties
    }
}
