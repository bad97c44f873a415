//! Strongly typed identifiers that end up as path segments of signed requests.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}

			/// Returns the identifier as a string slice.
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;
// Characters a URL parser treats as delimiters or percent-encodes inside a path segment.
const URL_DELIMITERS: &[char] = &['?', '#', '%', '\\', '"', '<', '>', '`', '{', '}', '^', '|'];

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (service, API key).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (service, API key).
		kind: &'static str,
	},
	/// The identifier contains a path separator and would split the request path.
	#[error("{kind} identifier contains a `/` path separator.")]
	ContainsSeparator {
		/// Kind of identifier (service, API key).
		kind: &'static str,
	},
	/// The identifier contains a character URL parsing would reinterpret or escape.
	#[error("{kind} identifier contains the URL delimiter {character:?}.")]
	ContainsDelimiter {
		/// Kind of identifier (service, API key).
		kind: &'static str,
		/// First offending character.
		character: char,
	},
	/// The identifier is a `.` or `..` dot-segment that URL normalization would collapse.
	#[error("{kind} identifier cannot be a dot-segment.")]
	DotSegment {
		/// Kind of identifier (service, API key).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed byte count.
	#[error("{kind} identifier exceeds {max} bytes.")]
	TooLong {
		/// Kind of identifier (service, API key).
		kind: &'static str,
		/// Maximum permitted byte count.
		max: usize,
	},
}

def_id! { ServiceId, "Identifier of the remote web service, e.g. `intiendols.basic.geocode.address`.", "Service" }
def_id! { ApiKey, "Public client key issued alongside a shared secret.", "ApiKey" }

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.contains('/') {
		return Err(IdentifierError::ContainsSeparator { kind });
	}
	if let Some(character) =
		view.chars().find(|c| c.is_ascii_control() || URL_DELIMITERS.contains(c))
	{
		return Err(IdentifierError::ContainsDelimiter { kind, character });
	}
	if matches!(view, "." | "..") {
		return Err(IdentifierError::DotSegment { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}
