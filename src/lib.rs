//! Signed request URLs for the ILS geocoding service—HMAC auth codes, URL-safe Base64, and
//! injectable clocks in one small, stateless crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod clock;
pub mod error;
pub mod ext;
pub mod obs;
pub mod signature;
pub mod signer;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{ApiKey, Credentials, ServiceId, SharedSecret},
		clock::FixedClock,
		signer::{RequestSigner, SignerConfig},
	};

	/// API key used by the published known-vector scenario.
	pub const VECTOR_KEY: &str = "ABC123";
	/// Shared secret used by the published known-vector scenario.
	pub const VECTOR_SECRET: &str = "s3cr3t";
	/// Service identifier used by the published known-vector scenario.
	pub const VECTOR_SERVICE: &str = "intiendols.basic.geocode.address";
	/// Search text used by the published known-vector scenario.
	pub const VECTOR_SEARCH_TEXT: &str = "Hatfield, Pretoria";

	/// Builds the known-vector credentials with the provided secret.
	pub fn vector_credentials(secret: &str) -> Credentials {
		let key = ApiKey::new(VECTOR_KEY).expect("Known-vector API key should be valid.");

		Credentials::new(key, SharedSecret::new(secret))
	}

	/// Builds a [`SignerConfig`] for the known-vector service with timestamps disabled.
	pub fn vector_config() -> SignerConfig {
		let service =
			ServiceId::new(VECTOR_SERVICE).expect("Known-vector service identifier should be valid.");

		SignerConfig::builder(service)
			.use_timestamp(false)
			.build()
			.expect("Known-vector signer config should build successfully.")
	}

	/// Constructs a [`RequestSigner`] for the known-vector scenario with a pinned clock.
	pub fn build_vector_signer(secret: &str, now: OffsetDateTime) -> RequestSigner<FixedClock> {
		RequestSigner::new(vector_config(), vector_credentials(secret))
			.with_clock(FixedClock::new(now))
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
