//! Optional observability helpers for request signing.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `geocode_signer.sign` with the `mode` (auth
//!   code kind) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `geocode_signer_sign_total` counter for every
//!   attempt/success/failure, labeled by `mode`, `algorithm` (`none` for trial codes) and
//!   `outcome`, plus `geocode_signer_sign_errors_total` labeled by `mode` and error `kind`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Auth code kinds produced by the signer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignMode {
	/// Literal trial token, no HMAC computed.
	Trial,
	/// HMAC-signed auth code.
	Hmac,
}
impl SignMode {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignMode::Trial => "trial",
			SignMode::Hmac => "hmac",
		}
	}

	/// Maps the trial flag to a mode.
	pub const fn from_trial(use_trial: bool) -> Self {
		if use_trial { SignMode::Trial } else { SignMode::Hmac }
	}
}
impl Display for SignMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignOutcome {
	/// Entry to the signer.
	Attempt,
	/// Signed URL produced.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl SignOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignOutcome::Attempt => "attempt",
			SignOutcome::Success => "success",
			SignOutcome::Failure => "failure",
		}
	}
}
impl Display for SignOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
