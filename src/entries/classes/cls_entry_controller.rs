use std::time::Duration;

use log::{debug, trace};
use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;
use ratatui::widgets::{Clear, Widget};

use crate::entries::classes::cls_entry::Entry;
use crate::entries::classes::cls_pan_gesture::{PanGesture, PanOutcome};
use crate::entries::functions::{animated_rect, apply_fade, resting_rect, ALPHA_FLOOR};
use crate::entries::types::{
	Animation, EntryContent, Fade, LifecyclePhase, Position, PullbackAnimation, SafeAreaInsets,
	Scale, Spring, TapAction, UserInteraction,
};
use crate::shared_utils::math::{ease_out, lerp, spring};

/// Bounds on the swipe-out duration derived from the release velocity.
const SWIPE_EXIT_MIN: Duration = Duration::from_millis(300);
const SWIPE_EXIT_MAX: Duration = Duration::from_millis(700);

/// Content transform transition: resize with a dip, then fade back in.
const TRANSFORM_RESIZE: Duration = Duration::from_millis(200);
const TRANSFORM_FADE_IN: Duration = Duration::from_millis(250);

/// Lifecycle notification drained by the presenter after each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControllerEvent {
	BecameActive,
	BecameInactive,
}

/// Why an exit began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitReason {
	Timeout,
	Dismissed,
	Swiped,
	Displaced,
}

#[derive(Debug)]
enum ExitStyle {
	Animated(Animation),
	Swipe { duration: Duration },
}

#[derive(Debug)]
struct ExitState {
	reason: ExitReason,
	style: ExitStyle,
	total: Duration,
	from_shift: f32,
}

#[derive(Debug)]
struct PullbackState {
	from_shift: f32,
	animation: PullbackAnimation,
	elapsed: Duration,
}

struct TransformState {
	from_height: u16,
	elapsed: Duration,
}

/// Interpolated visual state consumed by the render path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EntryVisuals {
	pub shift: f32,
	pub alpha: f32,
	pub scale: f32,
}

/// Drives one mounted entry through its lifecycle.
///
/// The controller owns the entry while it is on screen. Animations and
/// the auto-exit countdown are advanced by `tick`; completing an
/// animation is an explicit phase transition inside it, and every exit
/// path funnels through the same routine, so an entry leaves exactly
/// once. Lifecycle notifications are buffered and drained by the
/// presenter after each step.
pub(crate) struct EntryController {
	entry: Entry,
	phase: LifecyclePhase,
	/// Clock of the running entrance or exit animation.
	elapsed: Duration,
	/// Countdown to the automatic exit; `None` when cancelled or the
	/// duration is infinite.
	auto_exit: Option<Duration>,
	exit: Option<ExitState>,
	pan: Option<PanGesture>,
	pullback: Option<PullbackState>,
	transform: Option<TransformState>,
	/// Visual vertical shift from rest, in rows, positive toward the
	/// bottom.
	shift: f32,
	/// Geometry resolved at the last render; drives hit testing and
	/// gesture math between renders.
	resting: Rect,
	area: Rect,
	frame: Rect,
	events: Vec<ControllerEvent>,
	completions: Vec<Box<dyn FnOnce()>>,
}

impl EntryController {
	/// Mounts the entry and schedules its auto-exit countdown.
	pub fn new(entry: Entry) -> Self {
		let auto_exit = initial_countdown(&entry);
		debug!(
			"mounting entry '{}' created {}",
			entry.name().unwrap_or("unnamed"),
			entry.created_at().format("%H:%M:%S%.3f")
		);
		Self {
			entry,
			phase: LifecyclePhase::Entering,
			elapsed: Duration::ZERO,
			auto_exit,
			exit: None,
			pan: None,
			pullback: None,
			transform: None,
			shift: 0.0,
			resting: Rect::default(),
			area: Rect::default(),
			frame: Rect::default(),
			events: Vec::new(),
			completions: Vec::new(),
		}
	}

	/// Advances animations and the countdown by the elapsed time.
	pub fn tick(&mut self, delta: Duration) {
		match self.phase {
			LifecyclePhase::Entering => {
				self.elapsed += delta;
				let total = self.entry.attributes().entrance_animation.total_duration();
				if self.elapsed >= total {
					self.phase = LifecyclePhase::Active;
					self.shift = 0.0;
					self.events.push(ControllerEvent::BecameActive);
					debug!("entry '{}' active", self.entry.name().unwrap_or("unnamed"));
				}
				self.tick_transform(delta);
				self.tick_countdown(delta);
			}
			LifecyclePhase::Active => {
				self.tick_transform(delta);
				self.tick_countdown(delta);
			}
			LifecyclePhase::Panning => self.tick_pan(delta),
			LifecyclePhase::Exiting => {
				self.elapsed += delta;
				let finished = self
					.exit
					.as_ref()
					.is_some_and(|exit| self.elapsed >= exit.total);
				if finished {
					self.finish_removal();
				}
			}
			LifecyclePhase::Removed => {}
		}
	}

	/// Starts the exit path for the given reason; requests made once an
	/// exit is under way are no-ops.
	pub fn begin_exit(&mut self, reason: ExitReason) {
		if self.phase.is_leaving() {
			trace!("exit already under way; ignoring {reason:?}");
			return;
		}
		let style = match reason {
			ExitReason::Displaced => ExitStyle::Animated(
				self.entry
					.attributes()
					.pop_animation
					.unwrap_or(Animation::none()),
			),
			_ => ExitStyle::Animated(self.entry.attributes().exit_animation),
		};
		self.install_exit(reason, style);
	}

	/// Routes a press at the given row; `inside` says whether it landed
	/// on the entry as last painted.
	pub fn press(&mut self, row: u16, inside: bool) -> bool {
		if self.phase.is_leaving() {
			return false;
		}
		if !inside {
			let screen = self.entry.attributes().screen_interaction.clone();
			if !screen.responsive {
				return false;
			}
			trace!("backdrop pressed");
			self.perform_tap(&screen);
			return true;
		}
		let interaction = self.entry.attributes().entry_interaction.clone();
		let scrollable = self
			.entry
			.attributes()
			.scroll_behavior
			.is_loosely_enabled();
		if !interaction.responsive && !scrollable {
			return false;
		}
		if interaction.responsive && interaction.is_delay_exit() {
			self.auto_exit = None;
			trace!("press cancelled the auto-exit countdown");
		}
		self.pan = Some(PanGesture::begin(row, self.shift));
		if scrollable && matches!(self.phase, LifecyclePhase::Active | LifecyclePhase::Panning) {
			self.pullback = None;
			self.phase = LifecyclePhase::Panning;
		}
		true
	}

	/// Routes a drag to the given row.
	pub fn drag(&mut self, row: u16) -> bool {
		let scroll = self.entry.attributes().scroll_behavior;
		let exit_sign = self.entry.attributes().position.exit_sign();
		let limit = self.stretch_limit();
		let Some(pan) = &mut self.pan else {
			return false;
		};
		pan.drag_to(row);
		if self.phase == LifecyclePhase::Panning {
			self.shift = pan.shift(&scroll, exit_sign, limit);
		}
		true
	}

	/// Resolves a release: a tap when the press never left the slop, the
	/// drag outcome otherwise.
	pub fn release(&mut self) -> bool {
		let Some(pan) = self.pan.take() else {
			return false;
		};
		if self.phase.is_leaving() {
			return false;
		}
		let scroll = self.entry.attributes().scroll_behavior;
		let exit_sign = self.entry.attributes().position.exit_sign();
		let interaction = self.entry.attributes().entry_interaction.clone();
		if !pan.is_drag() {
			if self.phase == LifecyclePhase::Panning {
				self.phase = LifecyclePhase::Active;
			}
			if interaction.responsive {
				trace!("entry tapped");
				self.perform_tap(&interaction);
			}
			return true;
		}
		if self.phase != LifecyclePhase::Panning {
			// The press cancelled a delay-exit countdown; a drag that
			// never drove the entry (disabled scroll, or one begun
			// mid-entrance) must still restore it.
			if interaction.responsive && interaction.is_delay_exit() {
				self.reschedule_countdown();
			}
			return true;
		}
		match pan.outcome(&scroll, exit_sign) {
			PanOutcome::Swipe { velocity } => {
				trace!("swipe release at {velocity:.0} rows/s");
				self.begin_swipe_exit(velocity);
			}
			PanOutcome::Pullback => {
				trace!("release below swipe threshold; pulling back");
				self.pullback = Some(PullbackState {
					from_shift: self.shift,
					animation: scroll.pullback(),
					elapsed: Duration::ZERO,
				});
				if interaction.responsive && interaction.is_delay_exit() {
					self.reschedule_countdown();
				}
			}
		}
		true
	}

	/// Swaps the content surface in place with a short resize and fade
	/// transition. Valid while entering or active.
	pub fn transform(&mut self, content: Box<dyn EntryContent>) {
		match self.phase {
			LifecyclePhase::Entering | LifecyclePhase::Active => {
				let from_height = self.resting.height;
				self.entry.replace_content(content);
				self.transform = Some(TransformState {
					from_height,
					elapsed: Duration::ZERO,
				});
				debug!("entry content transformed");
			}
			_ => trace!("ignoring transform in phase {:?}", self.phase),
		}
	}

	/// Runs the closure once the entry reaches removal.
	pub fn push_completion(&mut self, completion: Box<dyn FnOnce()>) {
		if self.phase == LifecyclePhase::Removed {
			completion();
		} else {
			self.completions.push(completion);
		}
	}

	/// Paints the entry for the current instant and records the geometry
	/// used for hit testing.
	pub fn render(&mut self, frame: Rect, insets: SafeAreaInsets, buf: &mut Buffer) {
		self.frame = frame;
		let position = self.entry.attributes().position;
		let safe_area = self.entry.attributes().safe_area;
		let vertical_offset = self.entry.attributes().vertical_offset;
		let mut size = self.entry.content().measure(frame);
		size.height = self.transform_height(size.height);
		self.resting = resting_rect(size, frame, position, safe_area, insets, vertical_offset);
		let visuals = self.visuals();
		if visuals.alpha < ALPHA_FLOOR {
			self.area = Rect::default();
			return;
		}
		let area = animated_rect(self.resting, frame, visuals.shift, visuals.scale);
		self.area = area;
		if area.is_empty() {
			return;
		}
		Widget::render(Clear, area, buf);
		self.entry.content().render(area, buf);
		apply_fade(buf, area, visuals.alpha);
	}

	/// Area the entry occupied at the last render; empty when faded out
	/// or off screen.
	pub fn area(&self) -> Rect {
		self.area
	}

	/// True when the point lies on the entry as last painted.
	pub fn hit_test(&self, column: u16, row: u16) -> bool {
		!self.area.is_empty()
			&& self
				.area
				.contains(ratatui::layout::Position::new(column, row))
	}

	/// Interpolated shift, alpha, and scale for the current instant.
	pub fn visuals(&self) -> EntryVisuals {
		match self.phase {
			LifecyclePhase::Entering => self.entrance_visuals(),
			LifecyclePhase::Active => EntryVisuals {
				shift: self.shift,
				alpha: self.transform_alpha(),
				scale: 1.0,
			},
			LifecyclePhase::Panning => EntryVisuals {
				shift: self.shift,
				alpha: 1.0,
				scale: 1.0,
			},
			LifecyclePhase::Exiting => self.exit_visuals(),
			LifecyclePhase::Removed => EntryVisuals {
				shift: 0.0,
				alpha: 0.0,
				scale: 1.0,
			},
		}
	}

	pub fn phase(&self) -> LifecyclePhase {
		self.phase
	}

	pub fn is_removed(&self) -> bool {
		self.phase == LifecyclePhase::Removed
	}

	pub fn entry(&self) -> &Entry {
		&self.entry
	}

	/// Takes the buffered lifecycle notifications.
	pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
		std::mem::take(&mut self.events)
	}

	pub fn auto_exit_remaining(&self) -> Option<Duration> {
		self.auto_exit
	}

	pub fn exit_reason(&self) -> Option<ExitReason> {
		self.exit.as_ref().map(|exit| exit.reason)
	}

	fn tick_countdown(&mut self, delta: Duration) {
		let Some(remaining) = self.auto_exit else {
			return;
		};
		if remaining <= delta {
			self.auto_exit = None;
			trace!("auto-exit countdown fired");
			self.begin_exit(ExitReason::Timeout);
		} else {
			self.auto_exit = Some(remaining - delta);
		}
	}

	/// While a drag is held the countdown freezes; a settle hands the
	/// entry back to the active phase.
	fn tick_pan(&mut self, delta: Duration) {
		if let Some(pan) = &mut self.pan {
			pan.tick(delta);
			return;
		}
		let Some(pullback) = &mut self.pullback else {
			self.phase = LifecyclePhase::Active;
			return;
		};
		pullback.elapsed += delta;
		let total = pullback.animation.duration;
		let progress = if total.is_zero() {
			1.0
		} else {
			(pullback.elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
		};
		let eased = spring(
			progress,
			pullback.animation.damping,
			pullback.animation.initial_velocity,
		);
		self.shift = lerp(pullback.from_shift, 0.0, eased);
		if pullback.elapsed >= total {
			self.shift = 0.0;
			self.pullback = None;
			self.phase = LifecyclePhase::Active;
			trace!("pullback settled");
		}
	}

	fn tick_transform(&mut self, delta: Duration) {
		let Some(transform) = &mut self.transform else {
			return;
		};
		transform.elapsed += delta;
		if transform.elapsed >= TRANSFORM_RESIZE + TRANSFORM_FADE_IN {
			self.transform = None;
			trace!("content transform finished");
		}
	}

	fn begin_swipe_exit(&mut self, velocity: f32) {
		if self.phase.is_leaving() {
			return;
		}
		let distance = (self.offscreen_shift() - self.shift).abs().max(1.0);
		let secs = (distance / velocity.abs().max(f32::EPSILON))
			.clamp(SWIPE_EXIT_MIN.as_secs_f32(), SWIPE_EXIT_MAX.as_secs_f32());
		self.install_exit(
			ExitReason::Swiped,
			ExitStyle::Swipe {
				duration: Duration::from_secs_f32(secs),
			},
		);
	}

	/// Cancels the countdown, notifies once, and starts the exit
	/// animation; a zero-length exit removes synchronously.
	fn install_exit(&mut self, reason: ExitReason, style: ExitStyle) {
		self.auto_exit = None;
		self.pan = None;
		self.pullback = None;
		self.transform = None;
		let total = match &style {
			ExitStyle::Animated(animation) => animation.total_duration(),
			ExitStyle::Swipe { duration } => *duration,
		};
		self.exit = Some(ExitState {
			reason,
			style,
			total,
			from_shift: self.shift,
		});
		self.phase = LifecyclePhase::Exiting;
		self.elapsed = Duration::ZERO;
		self.events.push(ControllerEvent::BecameInactive);
		debug!(
			"entry '{}' exiting: {reason:?}",
			self.entry.name().unwrap_or("unnamed")
		);
		if total.is_zero() {
			self.finish_removal();
		}
	}

	fn finish_removal(&mut self) {
		self.phase = LifecyclePhase::Removed;
		for completion in self.completions.drain(..) {
			completion();
		}
		debug!(
			"entry '{}' removed",
			self.entry.name().unwrap_or("unnamed")
		);
	}

	fn perform_tap(&mut self, interaction: &UserInteraction) {
		match interaction.default_action {
			TapAction::Dismiss => self.begin_exit(ExitReason::Dismissed),
			TapAction::DelayExit(by) => {
				let lead = self.entry.attributes().entrance_animation.total_duration();
				self.auto_exit = Some(lead + by);
				trace!("auto-exit postponed by {by:?}");
			}
			TapAction::Ignore => {}
		}
		for action in &interaction.custom_actions {
			action();
		}
	}

	/// Restores the full mount countdown, entrance time included.
	fn reschedule_countdown(&mut self) {
		self.auto_exit = initial_countdown(&self.entry);
		trace!("auto-exit countdown rescheduled");
	}

	fn entrance_visuals(&self) -> EntryVisuals {
		let animation = &self.entry.attributes().entrance_animation;
		let shift = match &animation.translate {
			Some(translate) => {
				let progress = track_progress(self.elapsed, translate.delay, translate.duration);
				let eased = eased_progress(progress, translate.spring);
				lerp(self.offscreen_shift(), 0.0, eased)
			}
			None => 0.0,
		};
		EntryVisuals {
			shift,
			alpha: fade_value(&animation.fade, self.elapsed),
			scale: scale_value(&animation.scale, self.elapsed),
		}
	}

	fn exit_visuals(&self) -> EntryVisuals {
		let Some(exit) = &self.exit else {
			return EntryVisuals {
				shift: self.shift,
				alpha: 1.0,
				scale: 1.0,
			};
		};
		match &exit.style {
			ExitStyle::Animated(animation) => {
				let shift = match &animation.translate {
					Some(translate) => {
						let progress =
							track_progress(self.elapsed, translate.delay, translate.duration);
						let eased = eased_progress(progress, translate.spring);
						lerp(exit.from_shift, self.offscreen_shift(), eased)
					}
					None => exit.from_shift,
				};
				EntryVisuals {
					shift,
					alpha: fade_value(&animation.fade, self.elapsed),
					scale: scale_value(&animation.scale, self.elapsed),
				}
			}
			ExitStyle::Swipe { duration } => {
				let progress = track_progress(self.elapsed, Duration::ZERO, *duration);
				EntryVisuals {
					shift: lerp(exit.from_shift, self.offscreen_shift(), ease_out(progress)),
					alpha: 1.0,
					scale: 1.0,
				}
			}
		}
	}

	fn transform_alpha(&self) -> f32 {
		let Some(transform) = &self.transform else {
			return 1.0;
		};
		if transform.elapsed < TRANSFORM_RESIZE {
			let progress = track_progress(transform.elapsed, Duration::ZERO, TRANSFORM_RESIZE);
			lerp(1.0, 0.4, progress)
		} else {
			let progress = track_progress(
				transform.elapsed - TRANSFORM_RESIZE,
				Duration::ZERO,
				TRANSFORM_FADE_IN,
			);
			lerp(0.4, 1.0, progress)
		}
	}

	fn transform_height(&self, measured: u16) -> u16 {
		let Some(transform) = &self.transform else {
			return measured;
		};
		let progress = track_progress(transform.elapsed, Duration::ZERO, TRANSFORM_RESIZE);
		lerp(
			transform.from_height as f32,
			measured as f32,
			ease_out(progress),
		)
		.round() as u16
	}

	/// Shift that fully clears the entry past its exit edge.
	fn offscreen_shift(&self) -> f32 {
		if self.resting.is_empty() {
			return 0.0;
		}
		match self.entry.attributes().position {
			Position::Top => -((self.resting.y - self.frame.y + self.resting.height) as f32),
			Position::Center | Position::Bottom => (self.frame.bottom() - self.resting.y) as f32,
		}
	}

	/// Rubber-band stretch limit: the travel needed to clear the exit
	/// edge.
	fn stretch_limit(&self) -> f32 {
		self.offscreen_shift().abs().max(1.0)
	}
}

fn initial_countdown(entry: &Entry) -> Option<Duration> {
	let attributes = entry.attributes();
	attributes
		.display_duration
		.timed()
		.map(|resting| attributes.entrance_animation.total_duration() + resting)
}

fn track_progress(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
	if elapsed <= delay {
		return 0.0;
	}
	if duration.is_zero() {
		return 1.0;
	}
	((elapsed - delay).as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

fn eased_progress(progress: f32, spring_params: Option<Spring>) -> f32 {
	match spring_params {
		Some(params) => spring(progress, params.damping, params.initial_velocity),
		None => ease_out(progress),
	}
}

fn fade_value(fade: &Option<Fade>, elapsed: Duration) -> f32 {
	match fade {
		Some(fade) => lerp(
			fade.from,
			fade.to,
			track_progress(elapsed, fade.delay, fade.duration),
		),
		None => 1.0,
	}
}

fn scale_value(scale: &Option<Scale>, elapsed: Duration) -> f32 {
	match scale {
		Some(scale) => {
			let progress = track_progress(elapsed, scale.delay, scale.duration);
			lerp(scale.from, scale.to, eased_progress(progress, scale.spring))
		}
		None => 1.0,
	}
}
