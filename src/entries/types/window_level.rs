/// Z-band the overlay surface occupies relative to other host layers.
///
/// The crate always paints over whatever the host drew first; the level is
/// carried and exposed so hosts juggling several overlay systems can
/// arbitrate between them numerically. Raw values follow the classic
/// window-level constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowLevel {
	/// Same band as regular application chrome.
	Normal,

	/// Above the status-line band.
	StatusBar,

	/// Above alert dialogs.
	Alerts,

	/// Explicit raw level. Negative values are refused at display time.
	Custom(i32),
}

impl WindowLevel {
	/// Raw numeric level.
	pub const fn value(&self) -> i32 {
		match self {
			Self::Normal => 0,
			Self::StatusBar => 1000,
			Self::Alerts => 2000,
			Self::Custom(value) => *value,
		}
	}
}

impl Default for WindowLevel {
	fn default() -> Self {
		Self::StatusBar
	}
}
