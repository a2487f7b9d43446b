use std::time::Duration;

/// How long an entry rests on screen before leaving on its own.
///
/// The auto-exit countdown starts at mount and covers the entrance
/// animation as well, so the configured time is spent resting rather than
/// animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayDuration {
	/// Entry leaves by itself after the given time.
	Timed(Duration),

	/// Entry stays until dismissed, swiped, or displaced.
	Infinite,
}

impl DisplayDuration {
	/// Returns the timed duration, if any.
	pub const fn timed(&self) -> Option<Duration> {
		match self {
			Self::Timed(duration) => Some(*duration),
			Self::Infinite => None,
		}
	}

	/// Returns true when the entry never times out.
	pub const fn is_infinite(&self) -> bool {
		matches!(self, Self::Infinite)
	}
}

impl Default for DisplayDuration {
	fn default() -> Self {
		Self::Timed(Duration::from_secs(4))
	}
}
