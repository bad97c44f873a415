//! HMAC primitives, key selection, and the URL-safe auth code they produce.

// crates.io
use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
// self
use crate::{
	_prelude::*,
	auth::{ApiKey, ServiceId, SharedSecret},
	error::SigningError,
};

/// HMAC-SHA1 as used by the geocoding service.
pub type HmacSha1 = Hmac<Sha1>;
/// HMAC-SHA256, the planned successor algorithm.
pub type HmacSha256 = Hmac<Sha256>;

/// Literal auth code accepted by the service for trial accounts.
pub const TRIAL_AUTH_CODE: &str = "trial";

/// Keyed digest used to compute signed auth codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureAlgorithm {
	#[default]
	/// HMAC over SHA-1; the algorithm the service currently verifies.
	HmacSha1,
	/// HMAC over SHA-256.
	HmacSha256,
}
impl SignatureAlgorithm {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::HmacSha1 => "hmac_sha1",
			Self::HmacSha256 => "hmac_sha256",
		}
	}

	/// Computes the raw digest of `message` under `key`.
	pub fn digest(self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, SigningError> {
		match self {
			Self::HmacSha1 => hmac_sha1(key, message).map(|tag| tag.to_vec()),
			Self::HmacSha256 => {
				let mut mac = HmacSha256::new_from_slice(key)
					.map_err(|_| SigningError::InvalidKey { algorithm: self.as_str() })?;

				mac.update(message);

				Ok(mac.finalize().into_bytes().to_vec())
			},
		}
	}

	/// Signs an ASCII canonical message and returns the URL-safe auth code.
	///
	/// The service verifies the ASCII bytes of the message, so any non-ASCII character is
	/// rejected instead of being substituted.
	pub fn sign(self, key: &[u8], message: &str) -> Result<AuthCode, SigningError> {
		if let Some(position) = message.bytes().position(|b| !b.is_ascii()) {
			return Err(SigningError::NonAsciiMessage { position });
		}

		let digest = self.digest(key, message.as_bytes())?;

		Ok(AuthCode::Signed(encode_url_safe(&digest)))
	}
}
impl Display for SignatureAlgorithm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Key source consulted when the shared secret is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyFallback {
	#[default]
	/// Sign with the bytes of the service identifier.
	ServiceId,
	/// Sign with the bytes of the API key.
	ApiKey,
}
impl KeyFallback {
	/// Returns a stable label suitable for error messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::ServiceId => "service_id",
			Self::ApiKey => "api_key",
		}
	}
}

/// Inputs that decide which bytes key the HMAC.
#[derive(Clone, Copy, Debug)]
pub struct KeyMaterial<'a> {
	/// Provisioned shared secret; used whenever non-empty.
	pub secret: &'a SharedSecret,
	/// Service identifier, a fallback candidate.
	pub service_id: &'a ServiceId,
	/// API key, a fallback candidate.
	pub key: &'a ApiKey,
	/// Which candidate replaces an empty secret.
	pub fallback: KeyFallback,
}
impl<'a> KeyMaterial<'a> {
	/// Resolves the key bytes, applying the fallback for an empty secret.
	pub fn resolve(&self) -> Result<&'a [u8], SigningError> {
		let bytes = if !self.secret.is_empty() {
			self.secret.as_bytes()
		} else {
			match self.fallback {
				KeyFallback::ServiceId => self.service_id.as_bytes(),
				KeyFallback::ApiKey => self.key.as_bytes(),
			}
		};

		if bytes.is_empty() {
			return Err(SigningError::EmptyKeyMaterial { fallback: self.fallback.as_str() });
		}

		Ok(bytes)
	}
}

/// Auth code embedded in the request path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AuthCode {
	/// Trial token; the service skips signature verification.
	Trial,
	/// Base64url (no padding) HMAC digest.
	Signed(String),
}
impl AuthCode {
	/// Returns the path segment form of the auth code.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Trial => TRIAL_AUTH_CODE,
			Self::Signed(code) => code,
		}
	}

	/// Returns `true` for the trial token.
	pub fn is_trial(&self) -> bool {
		matches!(self, Self::Trial)
	}
}
impl AsRef<str> for AuthCode {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Display for AuthCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Computes HMAC-SHA1 of `message` keyed with `key`.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> Result<[u8; 20], SigningError> {
	let mut mac = HmacSha1::new_from_slice(key)
		.map_err(|_| SigningError::InvalidKey { algorithm: SignatureAlgorithm::HmacSha1.as_str() })?;

	mac.update(message);

	let mut tag = [0_u8; 20];

	tag.copy_from_slice(&mac.finalize().into_bytes());

	Ok(tag)
}

/// Encodes a digest as Base64 with `-`/`_` in place of `+`/`/` and no `=` padding.
pub fn encode_url_safe(digest: &[u8]) -> String {
	BASE64_URL_SAFE_NO_PAD.encode(digest)
}
