//! Signer configuration, its builder, and JSON loading.

// self
use crate::{
	_prelude::*,
	auth::ServiceId,
	error::ConfigError,
	signature::{KeyFallback, SignatureAlgorithm},
};

/// Production endpoint of the geocoding REST API.
pub const DEFAULT_BASE_URL: &str = "https://saas.afrigis.co.za/rest/2/";

/// Validated, immutable signer settings.
///
/// Credentials are deliberately absent; they are supplied separately so the config can be
/// loaded from plain files without carrying secrets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SignerConfigBuilder")]
pub struct SignerConfig {
	/// Remote web service identifier.
	pub service_id: ServiceId,
	/// Base URL the service path is appended to; always ends with `/`.
	pub base_url: Url,
	/// Emit the `trial` auth code instead of signing.
	pub use_trial: bool,
	/// Sign and embed the current Unix timestamp.
	pub use_timestamp: bool,
	/// Keyed digest used for signed auth codes.
	pub algorithm: SignatureAlgorithm,
	/// Key source used when the shared secret is empty.
	pub key_fallback: KeyFallback,
}
impl SignerConfig {
	/// Creates a new builder for the provided service.
	pub fn builder(service_id: ServiceId) -> SignerConfigBuilder {
		SignerConfigBuilder::new(service_id)
	}

	/// Parses and validates a JSON document, reporting the path of the first bad field.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(json);
		let builder: SignerConfigBuilder = serde_path_to_error::deserialize(&mut de)?;

		de.end().map_err(|source| ConfigError::Malformed { path: ".".into(), source })?;

		builder.build()
	}
}

/// Builder for [`SignerConfig`] values.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignerConfigBuilder {
	/// Service identifier for the config being constructed.
	pub service_id: ServiceId,
	/// Optional base URL override; defaults to [`DEFAULT_BASE_URL`].
	#[serde(default)]
	pub base_url: Option<Url>,
	/// Trial mode flag.
	#[serde(default)]
	pub use_trial: bool,
	/// Timestamp flag.
	#[serde(default = "default_use_timestamp")]
	pub use_timestamp: bool,
	/// Digest selection.
	#[serde(default)]
	pub algorithm: SignatureAlgorithm,
	/// Empty-secret fallback selection.
	#[serde(default)]
	pub key_fallback: KeyFallback,
}
impl SignerConfigBuilder {
	/// Creates a new builder seeded with the provided service identifier.
	pub fn new(service_id: ServiceId) -> Self {
		Self {
			service_id,
			base_url: None,
			use_trial: false,
			use_timestamp: default_use_timestamp(),
			algorithm: SignatureAlgorithm::default(),
			key_fallback: KeyFallback::default(),
		}
	}

	/// Overrides the base URL.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Toggles trial mode.
	pub fn use_trial(mut self, enabled: bool) -> Self {
		self.use_trial = enabled;

		self
	}

	/// Toggles timestamped signing.
	pub fn use_timestamp(mut self, enabled: bool) -> Self {
		self.use_timestamp = enabled;

		self
	}

	/// Overrides the digest algorithm.
	pub fn algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
		self.algorithm = algorithm;

		self
	}

	/// Overrides the empty-secret fallback.
	pub fn key_fallback(mut self, fallback: KeyFallback) -> Self {
		self.key_fallback = fallback;

		self
	}

	/// Consumes the builder and validates the resulting config.
	pub fn build(self) -> Result<SignerConfig, ConfigError> {
		let base_url = match self.base_url {
			Some(url) => url,
			None => Url::parse(DEFAULT_BASE_URL)
				.map_err(|source| ConfigError::InvalidBaseUrl { source })?,
		};

		Ok(SignerConfig {
			service_id: self.service_id,
			base_url: normalize_base_url(base_url)?,
			use_trial: self.use_trial,
			use_timestamp: self.use_timestamp,
			algorithm: self.algorithm,
			key_fallback: self.key_fallback,
		})
	}
}
impl TryFrom<SignerConfigBuilder> for SignerConfig {
	type Error = ConfigError;

	fn try_from(builder: SignerConfigBuilder) -> Result<Self, Self::Error> {
		builder.build()
	}
}

fn default_use_timestamp() -> bool {
	true
}

fn normalize_base_url(mut url: Url) -> Result<Url, ConfigError> {
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::UnsupportedScheme { url: url.to_string() });
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(ConfigError::BaseUrlHasQuery { url: url.to_string() });
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	Ok(url)
}
