//! Secret-provisioning contracts.

// self
use crate::{_prelude::*, auth::Credentials};

/// Source of signing credentials (secret store, vault client, environment loader, ...).
///
/// The signer never reads environment variables or files; callers plug those in here.
pub trait CredentialsSource
where
	Self: Send + Sync,
{
	/// Returns the credentials to sign with.
	fn credentials(&self) -> Result<Credentials>;
}
impl<S> CredentialsSource for Arc<S>
where
	S: ?Sized + CredentialsSource,
{
	fn credentials(&self) -> Result<Credentials> {
		(**self).credentials()
	}
}

/// In-memory credentials, typically populated once at startup.
#[derive(Clone, Debug)]
pub struct StaticCredentials(Credentials);
impl StaticCredentials {
	/// Wraps an already provisioned pair.
	pub fn new(credentials: Credentials) -> Self {
		Self(credentials)
	}
}
impl CredentialsSource for StaticCredentials {
	fn credentials(&self) -> Result<Credentials> {
		Ok(self.0.clone())
	}
}
