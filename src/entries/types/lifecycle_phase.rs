/// Lifecycle phase of a mounted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
	/// Entrance animation running.
	Entering,

	/// Resting on screen; the auto-exit countdown is live.
	Active,

	/// A drag is in progress or the release settle is running.
	Panning,

	/// Exit animation running.
	Exiting,

	/// Gone; the surface slot can be reused.
	Removed,
}

impl LifecyclePhase {
	/// True once an exit has begun or finished.
	pub const fn is_leaving(&self) -> bool {
		matches!(self, Self::Exiting | Self::Removed)
	}
}
