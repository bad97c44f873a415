//! Signer-level error types shared across identifiers, configuration, and signing.

// self
use crate::_prelude::*;

/// Signer-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical signer error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Search text or the assembled URL could not be encoded.
	#[error(transparent)]
	Encoding(#[from] EncodingError),
	/// The auth code could not be computed.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// A collaborator (credential source, HTTP dispatch) failed.
	#[error("{context} failed.")]
	Collaborator {
		/// Which collaborator reported the failure.
		context: &'static str,
		/// Underlying collaborator failure.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Wraps a failure reported by an external collaborator.
	pub fn collaborator(
		context: &'static str,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Collaborator { context, source: Box::new(src) }
	}
}
impl Error {
	/// Returns a stable category label suitable for metric dimensions.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Config(_) => "config",
			Self::Encoding(_) => "encoding",
			Self::Signing(_) => "signing",
			Self::Collaborator { .. } => "collaborator",
		}
	}
}
impl From<crate::auth::IdentifierError> for Error {
	fn from(e: crate::auth::IdentifierError) -> Self {
		Self::Config(e.into())
	}
}

/// Configuration and validation failures raised before any signing happens.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Service identifier or API key failed validation.
	#[error("Identifier is invalid.")]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than HTTP(S).
	#[error("Base URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// Base URL that failed validation.
		url: String,
	},
	/// Base URL carries a query or fragment that would corrupt the signed path.
	#[error("Base URL must not carry a query or fragment: {url}.")]
	BaseUrlHasQuery {
		/// Base URL that failed validation.
		url: String,
	},
	/// JSON configuration could not be deserialized.
	#[error("Signer configuration is malformed at `{path}`.")]
	Malformed {
		/// Path to the offending field.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Malformed { path, source: e.into_inner() }
	}
}

/// Failures raised while encoding search text or assembling the request URL.
#[derive(Debug, ThisError)]
pub enum EncodingError {
	/// The assembled request does not parse as a URL.
	#[error("Assembled request URL is malformed.")]
	MalformedUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// URL parsing rewrote part of the assembled request, so the signed form would not be sent.
	#[error("Assembled request URL changes its {component} when parsed: {url}.")]
	Altered {
		/// Component that differs after parsing (`path`, `query`, or `fragment`).
		component: &'static str,
		/// URL as assembled.
		url: String,
	},
}

/// Failures raised while computing an auth code.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SigningError {
	/// The canonical message contains bytes outside ASCII and cannot be signed verbatim.
	#[error("Canonical message contains a non-ASCII character at byte {position}.")]
	NonAsciiMessage {
		/// Byte offset of the first non-ASCII character.
		position: usize,
	},
	/// Both the shared secret and its fallback were empty.
	#[error("HMAC key material is empty after applying the {fallback} fallback.")]
	EmptyKeyMaterial {
		/// Fallback label that was consulted.
		fallback: &'static str,
	},
	/// The MAC primitive rejected the key.
	#[error("The {algorithm} primitive rejected the key material.")]
	InvalidKey {
		/// Algorithm label.
		algorithm: &'static str,
	},
}
