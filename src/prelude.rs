//! Convenient glob import for common SDK types.
//!
//! ```rust
//! use palantir::prelude::*;
//! ```

pub use crate::client::ObjectsClient;
pub use crate::config::{Chain, ConfigFile, EnvVar, Provider, Static};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::objects::{ObjectType, Ontology};
pub use crate::types::{AuthToken, Context, ResourceIdentifier};
