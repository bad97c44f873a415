//! Key/secret pair handed to the signer at call time.

// self
use crate::{
	_prelude::*,
	auth::{ApiKey, SharedSecret},
};

/// Client credentials supplied by a secret-provisioning collaborator.
///
/// The signer borrows these for the duration of a call and never persists them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
	/// Public API key embedded in the request path.
	pub key: ApiKey,
	/// Shared secret used as HMAC key material.
	pub secret: SharedSecret,
}
impl Credentials {
	/// Pairs an API key with its shared secret.
	pub fn new(key: ApiKey, secret: impl Into<SharedSecret>) -> Self {
		Self { key, secret: secret.into() }
	}

	/// Validates raw strings into credentials.
	pub fn parse(key: impl AsRef<str>, secret: impl Into<SharedSecret>) -> Result<Self> {
		Ok(Self::new(ApiKey::new(key)?, secret))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parse_validates_key_and_keeps_secret_redacted() {
		let credentials =
			Credentials::parse("ABC123", "s3cr3t").expect("Credentials fixture should parse.");

		assert_eq!(credentials.key.as_str(), "ABC123");
		assert_eq!(credentials.secret.expose(), "s3cr3t");
		assert!(!format!("{credentials:?}").contains("s3cr3t"));
		assert!(matches!(
			Credentials::parse("ABC 123", "s3cr3t"),
			Err(Error::Config(crate::error::ConfigError::InvalidIdentifier(_)))
		));
	}
}
