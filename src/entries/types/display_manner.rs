/// Precedence of an enqueued entry.
///
/// A point on an open-ended ordered scale. The named constants cover the
/// common bands; `custom` values may sit anywhere, including between the
/// named ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(i32);

impl Priority {
	/// Lowest named priority.
	pub const MIN: Self = Self(0);

	/// Below-normal priority.
	pub const LOW: Self = Self(250);

	/// Everyday priority.
	pub const NORMAL: Self = Self(500);

	/// Above-normal priority.
	pub const HIGH: Self = Self(750);

	/// Highest named priority.
	pub const MAX: Self = Self(1000);

	/// Creates a priority at an arbitrary point on the scale.
	pub const fn custom(value: i32) -> Self {
		Self(value)
	}

	/// Raw ordering value.
	pub const fn value(&self) -> i32 {
		self.0
	}
}

impl Default for Priority {
	fn default() -> Self {
		Self::NORMAL
	}
}

/// How a displayed entry relates to whatever already holds the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayManner {
	/// Displace the mounted entry right away.
	Override,

	/// Wait behind the mounted entry with the given precedence.
	Enqueue(Priority),
}

impl DisplayManner {
	/// Returns the queue priority for enqueued entries.
	pub const fn priority(&self) -> Option<Priority> {
		match self {
			Self::Enqueue(priority) => Some(*priority),
			Self::Override => None,
		}
	}

	/// Returns true for the override manner.
	pub const fn is_override(&self) -> bool {
		matches!(self, Self::Override)
	}
}

impl Default for DisplayManner {
	fn default() -> Self {
		Self::Override
	}
}
