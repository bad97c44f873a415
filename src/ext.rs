//! Public extension contracts for the signer's external collaborators.
//!
//! The crate signs URLs but never performs I/O itself. These traits describe the two
//! collaborators that do: an HTTP client that issues the signed GET request, and a
//! secret-provisioning source that yields [`Credentials`](crate::auth::Credentials).

pub mod credentials_source;
pub mod dispatch;

pub use credentials_source::*;
pub use dispatch::*;
