//! Resource identifiers.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// The fixed literal every RID starts with.
const RID_PREFIX: &str = "ri";

/// Number of dot-separated components, prefix included.
const COMPONENT_COUNT: usize = 5;

/// A parsed, validated Foundry resource identifier.
///
/// RIDs have the canonical shape `ri.<service>.<instance>.<type>.<locator>`:
/// five dot-separated components, each non-empty and restricted to letters,
/// digits, hyphens, and underscores.
///
/// Parsing a malformed string fails with
/// [`ErrorKind::MalformedIdentifier`](crate::ErrorKind::MalformedIdentifier)
/// rather than producing a partially-populated value, and rendering a parsed
/// RID always reproduces the input:
///
/// ```rust
/// use palantir::ResourceIdentifier;
///
/// let rid: ResourceIdentifier = "ri.ontology.main.ontology.a0a03652".parse()?;
/// assert_eq!(rid.service(), "ontology");
/// assert_eq!(rid.to_string(), "ri.ontology.main.ontology.a0a03652");
/// # Ok::<(), palantir::Error>(())
/// ```
///
/// Equality, ordering, and hashing are structural over the four components
/// following the `ri` literal. No normalization is performed: two RIDs
/// differing only in locator case are distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceIdentifier {
    service: String,
    instance: String,
    resource_type: String,
    locator: String,
}

impl ResourceIdentifier {
    /// The service that issued the identifier (e.g. `ontology`).
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The service instance (e.g. `main`).
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// The resource type (e.g. `ontology`, `object-type`).
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// The opaque locator distinguishing this resource.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    fn component_is_valid(component: &str) -> bool {
        !component.is_empty()
            && component
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

impl FromStr for ResourceIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split('.').collect();
        if components.len() != COMPONENT_COUNT {
            return Err(Error::malformed_identifier(format!(
                "expected {} dot-separated components, got {}: {:?}",
                COMPONENT_COUNT,
                components.len(),
                s
            )));
        }
        if components[0] != RID_PREFIX {
            return Err(Error::malformed_identifier(format!(
                "identifier must start with \"{}.\": {:?}",
                RID_PREFIX, s
            )));
        }
        for component in &components[1..] {
            if !Self::component_is_valid(component) {
                return Err(Error::malformed_identifier(format!(
                    "invalid component {:?} in {:?}",
                    component, s
                )));
            }
        }
        Ok(Self {
            service: components[1].to_string(),
            instance: components[2].to_string(),
            resource_type: components[3].to_string(),
            locator: components[4].to_string(),
        })
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            RID_PREFIX, self.service, self.instance, self.resource_type, self.locator
        )
    }
}

impl Serialize for ResourceIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
