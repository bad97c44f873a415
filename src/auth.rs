//! Service identifiers, API keys, and shared-secret credentials.

pub mod credentials;
pub mod id;
pub mod secret;

pub use credentials::*;
pub use id::*;
pub use secret::*;
