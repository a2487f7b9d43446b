use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Lifecycle effect of a recognized press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
	/// Animate the entry out.
	Dismiss,

	/// Keep the entry around for the given time past the press.
	DelayExit(Duration),

	/// Leave the lifecycle untouched.
	Ignore,
}

/// Press policy for the entry surface or the backdrop around it.
#[derive(Clone)]
pub struct UserInteraction {
	/// Whether presses are recognized at all.
	pub responsive: bool,

	/// Lifecycle effect of a recognized press.
	pub default_action: TapAction,

	/// Callbacks run after the default action, in order.
	pub custom_actions: Vec<Rc<dyn Fn()>>,
}

impl UserInteraction {
	/// Responsive policy that dismisses on press.
	pub fn dismissing() -> Self {
		Self {
			responsive: true,
			default_action: TapAction::Dismiss,
			custom_actions: Vec::new(),
		}
	}

	/// Responsive policy that postpones the auto-exit by the given time.
	pub fn delaying(by: Duration) -> Self {
		Self {
			responsive: true,
			default_action: TapAction::DelayExit(by),
			custom_actions: Vec::new(),
		}
	}

	/// Responsive policy with no lifecycle effect of its own.
	pub fn passive() -> Self {
		Self {
			responsive: true,
			default_action: TapAction::Ignore,
			custom_actions: Vec::new(),
		}
	}

	/// Policy that ignores presses entirely.
	pub fn unresponsive() -> Self {
		Self {
			responsive: false,
			default_action: TapAction::Ignore,
			custom_actions: Vec::new(),
		}
	}

	/// Adds a callback run after the default action.
	#[must_use]
	pub fn with_action(mut self, action: impl Fn() + 'static) -> Self {
		self.custom_actions.push(Rc::new(action));
		self
	}

	/// True when a press postpones the auto-exit countdown.
	pub fn is_delay_exit(&self) -> bool {
		matches!(self.default_action, TapAction::DelayExit(_))
	}
}

impl fmt::Debug for UserInteraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UserInteraction")
			.field("responsive", &self.responsive)
			.field("default_action", &self.default_action)
			.field("custom_actions", &self.custom_actions.len())
			.finish()
	}
}
