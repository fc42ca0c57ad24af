//! Configuration resolution for the Palantir SDK.
//!
//! Every configuration concern (hostname, auth token, default ontology RID)
//! is resolved through a [`Provider`]: a unit capable of producing an
//! optional value from one specific source. Providers compose into a
//! [`Chain`], an ordered fallback sequence evaluated in order with
//! short-circuiting.
//!
//! Three default chains are defined, each trying a process environment
//! variable first and the `[default]` table of `~/.palantir/config` second:
//!
//! | Concern       | Environment variable    | Config file attribute |
//! |---------------|-------------------------|-----------------------|
//! | Hostname      | `PALANTIR_HOSTNAME`     | `hostname`            |
//! | Auth token    | `PALANTIR_TOKEN`        | `token`               |
//! | Ontology RID  | `PALANTIR_ONTOLOGY_RID` | `ontology_rid`        |
//!
//! Absence is not an error at this layer. `get()` returning `None` is a
//! normal outcome; callers decide whether absence is fatal.

mod file;
mod provider;

pub use file::ConfigFile;
pub use provider::{Chain, EnvVar, Provider, Static};

use crate::types::AuthToken;

/// Environment variable holding the Foundry hostname.
pub const HOSTNAME_ENV: &str = "PALANTIR_HOSTNAME";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "PALANTIR_TOKEN";

/// Environment variable holding the default ontology RID.
pub const ONTOLOGY_RID_ENV: &str = "PALANTIR_ONTOLOGY_RID";

/// The default hostname resolution chain.
///
/// Order: `PALANTIR_HOSTNAME`, then the `hostname` attribute of the config
/// file.
pub fn default_hostname_chain() -> Chain<String> {
    Chain::new(vec![
        Box::new(EnvVar::new(HOSTNAME_ENV)),
        Box::new(ConfigFile::new("hostname")),
    ])
}

/// The default auth token resolution chain.
///
/// Order: `PALANTIR_TOKEN`, then the `token` attribute of the config file.
pub fn default_token_chain() -> Chain<AuthToken> {
    Chain::new(vec![
        Box::new(EnvVar::new(TOKEN_ENV)),
        Box::new(ConfigFile::new("token")),
    ])
}

/// The default ontology RID resolution chain.
///
/// Order: `PALANTIR_ONTOLOGY_RID`, then the `ontology_rid` attribute of the
/// config file.
pub fn default_ontology_rid_chain() -> Chain<String> {
    Chain::new(vec![
        Box::new(EnvVar::new(ONTOLOGY_RID_ENV)),
        Box::new(ConfigFile::new("ontology_rid")),
    ])
}
