use std::time::Duration;

/// Spring parameters for translation and scale tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
	/// Damping ratio; 1.0 settles without overshoot, lower values bounce.
	pub damping: f32,

	/// Initial velocity feeding the oscillation speed.
	pub initial_velocity: f32,
}

/// Translation track sliding between the resting spot and the nearest
/// vertical edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
	/// Track running time.
	pub duration: Duration,

	/// Wait before the track starts.
	pub delay: Duration,

	/// Spring easing; plain ease-out when absent.
	pub spring: Option<Spring>,
}

/// Fade track between two alpha values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
	/// Starting alpha (0.0 transparent, 1.0 opaque).
	pub from: f32,

	/// Ending alpha.
	pub to: f32,

	/// Track running time.
	pub duration: Duration,

	/// Wait before the track starts.
	pub delay: Duration,
}

/// Scale track shrinking or growing the entry around its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
	/// Starting scale factor.
	pub from: f32,

	/// Ending scale factor.
	pub to: f32,

	/// Track running time.
	pub duration: Duration,

	/// Wait before the track starts.
	pub delay: Duration,

	/// Spring easing; plain ease-out when absent.
	pub spring: Option<Spring>,
}

/// Composite animation of optional translation, fade, and scale tracks.
///
/// All present tracks run concurrently, each honoring its own delay. An
/// empty composite is legal and completes in zero time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Animation {
	/// Vertical slide track.
	pub translate: Option<Translate>,

	/// Alpha track.
	pub fade: Option<Fade>,

	/// Size track.
	pub scale: Option<Scale>,
}

impl Animation {
	/// Composite with no tracks; completes instantly.
	pub const fn none() -> Self {
		Self {
			translate: None,
			fade: None,
			scale: None,
		}
	}

	/// Plain 300 ms slide from or toward the nearest vertical edge.
	pub const fn translation() -> Self {
		Self {
			translate: Some(Translate {
				duration: Duration::from_millis(300),
				delay: Duration::ZERO,
				spring: None,
			}),
			fade: None,
			scale: None,
		}
	}

	/// 300 ms fade from transparent to opaque.
	pub const fn fade_in() -> Self {
		Self {
			translate: None,
			fade: Some(Fade {
				from: 0.0,
				to: 1.0,
				duration: Duration::from_millis(300),
				delay: Duration::ZERO,
			}),
			scale: None,
		}
	}

	/// 300 ms fade from opaque to transparent.
	pub const fn fade_out() -> Self {
		Self {
			translate: None,
			fade: Some(Fade {
				from: 1.0,
				to: 0.0,
				duration: Duration::from_millis(300),
				delay: Duration::ZERO,
			}),
			scale: None,
		}
	}

	/// 600 ms scale-down played when a newcomer displaces an entry.
	pub const fn pop() -> Self {
		Self {
			translate: None,
			fade: None,
			scale: Some(Scale {
				from: 1.0,
				to: 0.7,
				duration: Duration::from_millis(600),
				delay: Duration::ZERO,
				spring: None,
			}),
		}
	}

	/// Time until every present track has finished, delays included.
	pub fn total_duration(&self) -> Duration {
		let mut total = Duration::ZERO;
		if let Some(translate) = &self.translate {
			total = total.max(translate.delay + translate.duration);
		}
		if let Some(fade) = &self.fade {
			total = total.max(fade.delay + fade.duration);
		}
		if let Some(scale) = &self.scale {
			total = total.max(scale.delay + scale.duration);
		}
		total
	}

	/// True when at least one track is present.
	pub const fn is_animated(&self) -> bool {
		self.translate.is_some() || self.fade.is_some() || self.scale.is_some()
	}

	/// True when the composite moves the entry vertically.
	pub const fn has_translation(&self) -> bool {
		self.translate.is_some()
	}
}
