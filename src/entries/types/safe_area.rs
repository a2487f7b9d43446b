/// Rows reserved by the host along the vertical screen edges.
///
/// Typically the host's own chrome: a tab line at the top, a status line
/// at the bottom. Entries rest inside these unless their safe-area
/// behavior overrides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SafeAreaInsets {
	/// Reserved rows at the top edge.
	pub top: u16,

	/// Reserved rows at the bottom edge.
	pub bottom: u16,
}

impl SafeAreaInsets {
	/// Insets reserving the given rows at each edge.
	pub const fn new(top: u16, bottom: u16) -> Self {
		Self { top, bottom }
	}
}

/// How an entry relates to the host's reserved edge rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeAreaBehavior {
	/// Entry may cover the reserved rows.
	Overridden,

	/// Entry rests inside the safe region.
	Empty {
		/// Blank the reserved rows on the entry's side while it is
		/// mounted.
		fill: bool,
	},
}

impl SafeAreaBehavior {
	/// True when the entry may cover the reserved rows.
	pub const fn is_overridden(&self) -> bool {
		matches!(self, Self::Overridden)
	}

	/// True when the reserved rows should be blanked while mounted.
	pub const fn should_fill(&self) -> bool {
		matches!(self, Self::Empty { fill: true })
	}
}

impl Default for SafeAreaBehavior {
	fn default() -> Self {
		Self::Empty { fill: true }
	}
}
