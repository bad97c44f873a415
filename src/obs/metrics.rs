// self
use crate::{
	_prelude::*,
	obs::{SignMode, SignOutcome},
	signature::SignatureAlgorithm,
};

/// `algorithm` label for trial requests, which compute no digest.
pub const NO_ALGORITHM: &str = "none";

/// Returns the `algorithm` label recorded for a signing attempt in `mode`.
pub const fn algorithm_label(mode: SignMode, algorithm: SignatureAlgorithm) -> &'static str {
	match mode {
		SignMode::Trial => NO_ALGORITHM,
		SignMode::Hmac => algorithm.as_str(),
	}
}

/// Counts a signing attempt, success, or failure per mode and digest algorithm.
pub fn record_sign_outcome(mode: SignMode, algorithm: SignatureAlgorithm, outcome: SignOutcome) {
	let algorithm = algorithm_label(mode, algorithm);

	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"geocode_signer_sign_total",
			"mode" => mode.as_str(),
			"algorithm" => algorithm,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (algorithm, outcome);
	}
}

/// Counts a failed signing attempt by error category (`config`, `encoding`, `signing`,
/// `collaborator`).
pub fn record_sign_failure(mode: SignMode, error: &Error) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"geocode_signer_sign_errors_total",
			"mode" => mode.as_str(),
			"kind" => error.kind()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (mode, error);
	}
}
