use super::animation::Animation;
use super::display_duration::DisplayDuration;
use super::display_manner::{DisplayManner, Priority};
use super::error::AttributesError;
use super::interaction::UserInteraction;
use super::position::Position;
use super::safe_area::SafeAreaBehavior;
use super::scroll::ScrollBehavior;
use super::window_level::WindowLevel;

/// Full presentation description of an entry.
///
/// Attributes are plain data: start from one of the presets (or
/// `Default`) and adjust fields. The default describes a top banner at
/// status-bar level that overrides whatever is on screen, rests for four
/// seconds, and fades in and out.
#[derive(Debug, Clone)]
pub struct Attributes {
	/// Vertical placement.
	pub position: Position,

	/// Time on screen once mounted.
	pub display_duration: DisplayDuration,

	/// Z-band relative to other host overlays.
	pub window_level: WindowLevel,

	/// Relation to whatever is already mounted.
	pub display_manner: DisplayManner,

	/// Played while the entry arrives.
	pub entrance_animation: Animation,

	/// Played while the entry leaves by timeout or dismissal.
	pub exit_animation: Animation,

	/// Played when a newcomer displaces this entry; prompt removal when
	/// absent.
	pub pop_animation: Option<Animation>,

	/// Vertical drag response.
	pub scroll_behavior: ScrollBehavior,

	/// Press policy on the entry itself.
	pub entry_interaction: UserInteraction,

	/// Press policy on the backdrop outside the entry.
	pub screen_interaction: UserInteraction,

	/// Relation to the host's reserved edge rows.
	pub safe_area: SafeAreaBehavior,

	/// Extra rows between the (inset) screen edge and the resting spot.
	pub vertical_offset: u16,
}

impl Attributes {
	/// Banner resting along the top edge. Same as `Default`.
	pub fn top_banner() -> Self {
		Self::default()
	}

	/// Toast sliding in along the bottom edge, enqueued at normal
	/// priority.
	pub fn bottom_toast() -> Self {
		Self {
			position: Position::Bottom,
			display_manner: DisplayManner::Enqueue(Priority::NORMAL),
			entrance_animation: Animation::translation(),
			exit_animation: Animation::translation(),
			..Self::default()
		}
	}

	/// Centered alert that stays until acted upon, dimming the backdrop.
	pub fn center_alert() -> Self {
		Self {
			position: Position::Center,
			display_duration: DisplayDuration::Infinite,
			window_level: WindowLevel::Alerts,
			scroll_behavior: ScrollBehavior::Disabled,
			screen_interaction: UserInteraction::dismissing(),
			..Self::default()
		}
	}

	/// Checks the fields a presenter refuses to work with.
	pub fn validate(&self) -> Result<(), AttributesError> {
		let level = self.window_level.value();
		if level < 0 {
			return Err(AttributesError::InvalidWindowLevel(level));
		}
		if matches!(self.display_duration, DisplayDuration::Timed(duration) if duration.is_zero())
		{
			return Err(AttributesError::InvalidDisplayDuration);
		}
		Ok(())
	}

	/// True when `validate` succeeds.
	pub fn is_valid(&self) -> bool {
		self.validate().is_ok()
	}
}

impl Default for Attributes {
	fn default() -> Self {
		Self {
			position: Position::Top,
			display_duration: DisplayDuration::default(),
			window_level: WindowLevel::StatusBar,
			display_manner: DisplayManner::Override,
			entrance_animation: Animation::fade_in(),
			exit_animation: Animation::fade_out(),
			pop_animation: Some(Animation::pop()),
			scroll_behavior: ScrollBehavior::default(),
			entry_interaction: UserInteraction::dismissing(),
			screen_interaction: UserInteraction::unresponsive(),
			safe_area: SafeAreaBehavior::default(),
			vertical_offset: 0,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	#[test]
	fn test_default_attributes_are_valid() {
		assert!(Attributes::default().is_valid());
	}

	#[test]
	fn test_standard_window_levels_are_valid() {
		for level in [
			WindowLevel::Normal,
			WindowLevel::StatusBar,
			WindowLevel::Alerts,
			WindowLevel::Custom(1),
		] {
			let attributes = Attributes {
				window_level: level,
				..Attributes::default()
			};
			assert!(attributes.is_valid());
		}
	}

	#[test]
	fn test_negative_custom_level_is_invalid() {
		let attributes = Attributes {
			window_level: WindowLevel::Custom(-1),
			..Attributes::default()
		};
		assert_eq!(
			attributes.validate(),
			Err(AttributesError::InvalidWindowLevel(-1))
		);
	}

	#[test]
	fn test_infinite_duration_is_valid() {
		let attributes = Attributes {
			display_duration: DisplayDuration::Infinite,
			..Attributes::default()
		};
		assert!(attributes.is_valid());
	}

	#[test]
	fn test_zero_timed_duration_is_invalid() {
		let attributes = Attributes {
			display_duration: DisplayDuration::Timed(Duration::ZERO),
			..Attributes::default()
		};
		assert_eq!(
			attributes.validate(),
			Err(AttributesError::InvalidDisplayDuration)
		);
	}

	#[test]
	fn test_presets() {
		assert!(Attributes::bottom_toast().position.is_bottom());
		assert!(Attributes::center_alert().display_duration.is_infinite());
		assert!(Attributes::center_alert().is_valid());
	}
}
