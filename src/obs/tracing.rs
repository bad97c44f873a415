// self
use crate::{_prelude::*, obs::SignMode};

/// A span builder used around signing calls.
#[derive(Clone, Debug)]
pub struct SignSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SignSpan {
	/// Creates a new span tagged with the provided mode + stage.
	pub fn new(mode: SignMode, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("geocode_signer.sign", mode = mode.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (mode, stage);

			Self {}
		}
	}

	/// Enters the span for the duration of the returned guard.
	pub fn entered(self) -> SignSpanGuard {
		#[cfg(feature = "tracing")]
		{
			SignSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			SignSpanGuard {}
		}
	}
}

/// RAII guard returned by [`SignSpan::entered`].
pub struct SignSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for SignSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SignSpanGuard(..)")
	}
}

/// Emits a debug event describing a freshly built canonical message.
///
/// Only lengths and flags are recorded; the message itself may carry user search text.
pub fn trace_canonical_message(len: usize, timestamped: bool) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(message_len = len, timestamped, "canonical message assembled");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (len, timestamped);
	}
}
