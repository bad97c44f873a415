//! Request signing for the geocoding service.
//!
//! [`RequestSigner`] turns free search text into a [`SignedUrl`] of the form
//! `<base><service>/<key>/<auth>[/<timestamp>]/?ils_result_count=1&ils_location=<text>`.
//! The signer is stateless apart from its config, credentials, and clock, so a single
//! instance can be shared across threads behind an [`Arc`].

pub mod config;
pub mod request;

pub use config::*;
pub use request::*;

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	clock::{Clock, SystemClock},
	obs::{self, SignMode, SignOutcome, SignSpan},
	signature::{AuthCode, KeyMaterial},
};

/// Builds signed request URLs from a [`SignerConfig`] and caller-provided [`Credentials`].
#[derive(Clone, Debug)]
pub struct RequestSigner<C = SystemClock> {
	config: SignerConfig,
	credentials: Credentials,
	clock: C,
}
impl RequestSigner {
	/// Creates a signer that reads the wall clock for timestamps.
	pub fn new(config: SignerConfig, credentials: Credentials) -> Self {
		Self { config, credentials, clock: SystemClock }
	}
}
impl<C> RequestSigner<C>
where
	C: Clock,
{
	/// Swaps the time source used for timestamped requests.
	pub fn with_clock<C2>(self, clock: C2) -> RequestSigner<C2>
	where
		C2: Clock,
	{
		RequestSigner { config: self.config, credentials: self.credentials, clock }
	}

	/// Returns the active configuration.
	pub fn config(&self) -> &SignerConfig {
		&self.config
	}

	/// Returns the credentials used for signing.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Builds a signed URL, reading the clock when timestamps are enabled.
	pub fn build_url(&self, search_text: &str) -> Result<SignedUrl> {
		self.build_url_at(search_text, self.clock.now_utc())
	}

	/// Builds a signed URL as of `now`.
	///
	/// `now` is ignored when the config disables timestamps.
	pub fn build_url_at(&self, search_text: &str, now: OffsetDateTime) -> Result<SignedUrl> {
		self.sign(&self.signing_request(search_text, now))
	}

	/// Derives the [`SigningRequest`] the config describes for `search_text`.
	pub fn signing_request(&self, search_text: &str, now: OffsetDateTime) -> SigningRequest {
		let request = SigningRequest::new(
			search_text,
			self.config.service_id.clone(),
			self.credentials.key.clone(),
		)
		.with_trial(self.config.use_trial);

		if self.config.use_timestamp { request.with_timestamp_at(now) } else { request }
	}

	/// Computes the auth code for `request` and assembles the final URL.
	pub fn sign(&self, request: &SigningRequest) -> Result<SignedUrl> {
		let mode = SignMode::from_trial(request.use_trial);
		let _span = SignSpan::new(mode, "sign").entered();

		let algorithm = self.config.algorithm;

		obs::record_sign_outcome(mode, algorithm, SignOutcome::Attempt);

		let result = self.auth_code(request).and_then(|auth_code| {
			request.assemble(&self.config.base_url, auth_code).map_err(Error::from)
		});

		match &result {
			Ok(_) => obs::record_sign_outcome(mode, algorithm, SignOutcome::Success),
			Err(e) => {
				obs::record_sign_outcome(mode, algorithm, SignOutcome::Failure);
				obs::record_sign_failure(mode, e);
			},
		}

		result
	}

	/// Computes the auth code alone, without assembling a URL.
	pub fn auth_code(&self, request: &SigningRequest) -> Result<AuthCode> {
		let message = request.canonical_message();

		obs::trace_canonical_message(message.len(), request.timestamp.is_some());

		if request.use_trial {
			return Ok(AuthCode::Trial);
		}

		let material = KeyMaterial {
			secret: &self.credentials.secret,
			service_id: &request.service_id,
			key: &request.key,
			fallback: self.config.key_fallback,
		};

		Ok(self.config.algorithm.sign(material.resolve()?, message.as_str())?)
	}
}

/// One-shot helper that signs `search_text` against the wall clock.
pub fn build_url(
	search_text: &str,
	config: &SignerConfig,
	credentials: &Credentials,
) -> Result<SignedUrl> {
	RequestSigner::new(config.clone(), credentials.clone()).build_url(search_text)
}
