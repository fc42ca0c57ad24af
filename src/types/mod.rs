//! Core value types shared across the SDK.

mod auth;
mod context;
mod rid;

pub use auth::AuthToken;
pub use context::{Context, ContextBuilder};
pub use rid::ResourceIdentifier;
