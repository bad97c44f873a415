//! UTC time sources used for timestamped requests.

// self
use crate::_prelude::*;

/// Supplies the instant that timestamped requests are signed against.
pub trait Clock
where
	Self: Send + Sync,
{
	/// Returns the current UTC instant.
	fn now_utc(&self) -> OffsetDateTime;
}
impl<C> Clock for Arc<C>
where
	C: ?Sized + Clock,
{
	fn now_utc(&self) -> OffsetDateTime {
		(**self).now_utc()
	}
}

/// Wall-clock time source.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn now_utc(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc()
	}
}

/// Clock pinned to a single instant, for reproducible signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(OffsetDateTime);
impl FixedClock {
	/// Pins the clock to `instant`.
	pub fn new(instant: OffsetDateTime) -> Self {
		Self(instant)
	}
}
impl Clock for FixedClock {
	fn now_utc(&self) -> OffsetDateTime {
		self.0
	}
}

/// Whole seconds since the Unix epoch, truncated toward negative infinity.
pub fn unix_seconds(instant: OffsetDateTime) -> i64 {
	instant.unix_timestamp()
}
