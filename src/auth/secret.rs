//! Shared-secret wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Redacted shared-secret wrapper keeping HMAC key material out of logs.
///
/// An empty secret is valid: signing then falls back to another key source, see
/// [`KeyFallback`](crate::signature::KeyFallback).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SharedSecret(String);
impl SharedSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns the UTF-8 bytes used as HMAC key material.
	pub fn as_bytes(&self) -> &[u8] {
		self.0.as_bytes()
	}

	/// Returns `true` when no secret was provisioned.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<&str> for SharedSecret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for SharedSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for SharedSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SharedSecret").field(&"<redacted>").finish()
	}
}
impl Display for SharedSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
