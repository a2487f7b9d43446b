use std::time::Duration;

/// Spring settle played when a dragged entry is released short of a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullbackAnimation {
	/// Settle running time.
	pub duration: Duration,

	/// Spring damping ratio.
	pub damping: f32,

	/// Spring initial velocity.
	pub initial_velocity: f32,
}

impl PullbackAnimation {
	/// Smooth settle without overshoot.
	pub const fn ease_out() -> Self {
		Self {
			duration: Duration::from_millis(300),
			damping: 1.0,
			initial_velocity: 10.0,
		}
	}

	/// Springy settle with a visible bounce.
	pub const fn jolt() -> Self {
		Self {
			duration: Duration::from_millis(500),
			damping: 0.3,
			initial_velocity: 10.0,
		}
	}
}

impl Default for PullbackAnimation {
	fn default() -> Self {
		Self::ease_out()
	}
}

/// How a mounted entry responds to vertical drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollBehavior {
	/// Drags are ignored outright.
	Disabled,

	/// Drag toward the exit edge only; the entry never stretches past its
	/// resting position and a release always settles back. Never
	/// dismisses.
	EdgeCrossingDisabled,

	/// Elastic drag in both directions: 1:1 toward the exit edge,
	/// rubber-banded when stretched into the screen.
	Enabled {
		/// Whether a fast release toward the exit edge dismisses.
		swipeable: bool,

		/// Settle animation after a release that does not dismiss.
		pullback: PullbackAnimation,
	},
}

impl ScrollBehavior {
	/// True unless drags are disabled outright.
	pub const fn is_loosely_enabled(&self) -> bool {
		!matches!(self, Self::Disabled)
	}

	/// True when drags may stretch past the resting position.
	pub const fn is_edge_crossing_enabled(&self) -> bool {
		matches!(self, Self::Enabled { .. })
	}

	/// True when a fast release toward the exit edge may dismiss.
	pub const fn is_swipeable(&self) -> bool {
		matches!(
			self,
			Self::Enabled {
				swipeable: true,
				..
			}
		)
	}

	/// Settle animation used when a release returns to rest.
	pub fn pullback(&self) -> PullbackAnimation {
		match self {
			Self::Enabled { pullback, .. } => *pullback,
			_ => PullbackAnimation::ease_out(),
		}
	}
}

impl Default for ScrollBehavior {
	fn default() -> Self {
		Self::EdgeCrossingDisabled
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_predicates() {
		assert!(!ScrollBehavior::Disabled.is_loosely_enabled());
		assert!(ScrollBehavior::EdgeCrossingDisabled.is_loosely_enabled());
		assert!(!ScrollBehavior::EdgeCrossingDisabled.is_swipeable());
		let enabled = ScrollBehavior::Enabled {
			swipeable: true,
			pullback: PullbackAnimation::jolt(),
		};
		assert!(enabled.is_swipeable());
		assert!(enabled.is_edge_crossing_enabled());
		assert_eq!(enabled.pullback(), PullbackAnimation::jolt());
	}
}
