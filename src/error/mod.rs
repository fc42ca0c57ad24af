//! Error types for the Palantir SDK.
//!
//! The SDK reports every failure through a single [`Error`] type carrying an
//! [`ErrorKind`] for categorization.
//!
//! ## Key Invariant
//!
//! Provider absence is not an error. A resolution chain that produces no
//! value surfaces as `None`, and only becomes
//! [`ErrorKind::MissingConfiguration`] at the point where a concrete value is
//! mandatorily required (building an auth header, looking up the default
//! ontology).
//!
//! ```rust,ignore
//! match client.get_default_ontology() {
//!     Ok(ontology) => println!("{}", ontology.display_name()),
//!     Err(e) if e.kind() == ErrorKind::MissingConfiguration => {
//!         eprintln!("set PALANTIR_ONTOLOGY_RID or add it to ~/.palantir/config");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for Palantir SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
