//! Query encoding, canonical messages, and the assembled signed URL.

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{ApiKey, ServiceId},
	clock,
	error::EncodingError,
	signature::AuthCode,
};

/// Query parameter capping the number of geocode candidates.
pub const RESULT_COUNT_PARAM: &str = "ils_result_count";
/// Query parameter carrying the free-text location.
pub const LOCATION_PARAM: &str = "ils_location";

/// Form-encodes free text: alphanumerics and `*-._` pass through, space becomes `+`, and every
/// other UTF-8 byte becomes `%XX`.
pub fn encode_search_text(search_text: &str) -> String {
	form_urlencoded::byte_serialize(search_text.as_bytes()).collect()
}

/// Builds the query string shared by the canonical message and the request URL.
pub fn query_string(search_text: &str) -> String {
	format!("{RESULT_COUNT_PARAM}=1&{LOCATION_PARAM}={}", encode_search_text(search_text))
}

/// Exact string the HMAC is computed over.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalMessage(String);
impl CanonicalMessage {
	/// Returns the message as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns the message length in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` for an empty message; never the case for assembled messages.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Consumes the message into its backing string.
	pub fn into_string(self) -> String {
		self.0
	}
}
impl AsRef<str> for CanonicalMessage {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Display for CanonicalMessage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Immutable input to a single signing operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRequest {
	/// Encoded query string, without the leading `?`.
	pub query_string: String,
	/// Remote web service identifier.
	pub service_id: ServiceId,
	/// API key embedded in the path.
	pub key: ApiKey,
	/// Unix timestamp in whole seconds, when timestamped signing is enabled.
	pub timestamp: Option<i64>,
	/// Emit the trial auth code instead of signing.
	pub use_trial: bool,
}
impl SigningRequest {
	/// Creates an untimestamped, signed request for the provided search text.
	pub fn new(search_text: &str, service_id: ServiceId, key: ApiKey) -> Self {
		Self {
			query_string: query_string(search_text),
			service_id,
			key,
			timestamp: None,
			use_trial: false,
		}
	}

	/// Sets the timestamp from an instant, truncating to whole seconds.
	pub fn with_timestamp_at(mut self, instant: OffsetDateTime) -> Self {
		self.timestamp = Some(clock::unix_seconds(instant));

		self
	}

	/// Overrides the raw Unix timestamp.
	pub fn with_timestamp(mut self, timestamp: Option<i64>) -> Self {
		self.timestamp = timestamp;

		self
	}

	/// Overrides the trial flag.
	pub fn with_trial(mut self, use_trial: bool) -> Self {
		self.use_trial = use_trial;

		self
	}

	/// Builds `query/service/key[/timestamp]`.
	pub fn canonical_message(&self) -> CanonicalMessage {
		let mut message = format!("{}/{}/{}", self.query_string, self.service_id, self.key);

		if let Some(timestamp) = self.timestamp {
			message.push('/');
			message.push_str(&timestamp.to_string());
		}

		CanonicalMessage(message)
	}

	/// Builds `base service/key/auth[/timestamp]/?query` and checks that it parses.
	///
	/// Parsing must keep the path and query byte-for-byte and add no fragment; a segment the parser
	/// would normalize, escape, or split off is an [`EncodingError::Altered`].
	pub fn assemble(&self, base_url: &Url, auth_code: AuthCode) -> Result<SignedUrl, EncodingError> {
		let mut segments = format!("{}/{}/{auth_code}", self.service_id, self.key);

		if let Some(timestamp) = self.timestamp {
			segments.push('/');
			segments.push_str(&timestamp.to_string());
		}

		segments.push('/');

		let raw = format!("{base_url}{segments}?{}", self.query_string);
		let url = Url::parse(&raw).map_err(|source| EncodingError::MalformedUrl { source })?;
		let altered = if url.path() != format!("{}{segments}", base_url.path()) {
			Some("path")
		} else if url.query() != Some(self.query_string.as_str()) {
			Some("query")
		} else if url.fragment().is_some() {
			Some("fragment")
		} else {
			None
		};

		if let Some(component) = altered {
			return Err(EncodingError::Altered { component, url: raw });
		}

		Ok(SignedUrl { raw, url, auth_code, timestamp: self.timestamp })
	}
}

/// Fully assembled request URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedUrl {
	raw: String,
	url: Url,
	auth_code: AuthCode,
	timestamp: Option<i64>,
}
impl SignedUrl {
	/// Returns the URL exactly as assembled.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Returns the parsed form for HTTP clients.
	pub fn as_url(&self) -> &Url {
		&self.url
	}

	/// Returns the auth code embedded in the path.
	pub fn auth_code(&self) -> &AuthCode {
		&self.auth_code
	}

	/// Returns the signed timestamp, if any.
	pub fn timestamp(&self) -> Option<i64> {
		self.timestamp
	}

	/// Returns the decoded `ils_location` value.
	pub fn location(&self) -> Option<String> {
		self.url
			.query_pairs()
			.find(|(name, _)| name == LOCATION_PARAM)
			.map(|(_, value)| value.into_owned())
	}

	/// Consumes the value into the assembled string.
	pub fn into_string(self) -> String {
		self.raw
	}
}
impl AsRef<str> for SignedUrl {
	fn as_ref(&self) -> &str {
		&self.raw
	}
}
impl Display for SignedUrl {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.raw)
	}
}
impl From<SignedUrl> for Url {
	fn from(value: SignedUrl) -> Self {
		value.url
	}
}
