/// Vertical placement of a presented entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
	/// Entry rests along the top edge.
	Top,

	/// Entry floats at the vertical center.
	Center,

	/// Entry rests along the bottom edge.
	Bottom,
}

impl Position {
	/// Returns true for top placement.
	pub const fn is_top(&self) -> bool {
		matches!(self, Self::Top)
	}

	/// Returns true for center placement.
	pub const fn is_center(&self) -> bool {
		matches!(self, Self::Center)
	}

	/// Returns true for bottom placement.
	pub const fn is_bottom(&self) -> bool {
		matches!(self, Self::Bottom)
	}

	/// Direction of the exit edge in screen rows: -1.0 for entries that
	/// leave over the top, 1.0 for entries that leave over the bottom.
	///
	/// Center entries drop away downward.
	pub const fn exit_sign(&self) -> f32 {
		match self {
			Self::Top => -1.0,
			Self::Center | Self::Bottom => 1.0,
		}
	}
}

impl Default for Position {
	fn default() -> Self {
		Self::Top
	}
}
