use super::attributes::Attributes;

/// Hooks into entry lifecycle transitions.
///
/// All hooks default to no-ops; implement the ones of interest and
/// register the observer on the presenter. Hooks run after the transition
/// that triggered them has completed.
pub trait EntryObserver {
	/// The entry finished its entrance animation and is now interactive.
	fn entry_became_active(&mut self, _attributes: &Attributes, _name: Option<&str>) {}

	/// The entry began leaving, for any reason. Fires once per entry,
	/// even when the entry never reached the active phase.
	fn entry_became_inactive(&mut self, _attributes: &Attributes, _name: Option<&str>) {}
}
