use std::time::Duration;

use crate::entries::types::ScrollBehavior;
use crate::shared_utils::math::rubber_band;

/// Minimum release speed toward the exit edge, in rows per second, for a
/// drag to turn into a swipe-out.
pub const SWIPE_MIN_VELOCITY: f32 = 60.0;

/// Resolution of a released drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PanOutcome {
	/// Settle back to the resting position.
	Pullback,

	/// Leave the screen from the current offset.
	Swipe {
		/// Release velocity in rows per second, signed toward the bottom.
		velocity: f32,
	},
}

/// One in-flight vertical drag on a mounted entry.
///
/// Offsets are in rows, positive toward the bottom of the screen.
/// Velocity is sampled once per tick, so resolution is deterministic for
/// a given event and tick sequence.
#[derive(Debug)]
pub(crate) struct PanGesture {
	start_row: f32,
	/// Shift carried over when the drag grabbed a settling entry.
	carried: f32,
	raw_offset: f32,
	sampled_offset: f32,
	velocity: f32,
	moved: bool,
}

impl PanGesture {
	/// Starts tracking at the pressed row. `carried` seeds the offset
	/// when the press grabbed an entry that was still settling.
	pub fn begin(row: u16, carried: f32) -> Self {
		Self {
			start_row: row as f32,
			carried,
			raw_offset: carried,
			sampled_offset: carried,
			velocity: 0.0,
			moved: false,
		}
	}

	/// Feeds a drag event at an absolute row.
	pub fn drag_to(&mut self, row: u16) {
		let displacement = row as f32 - self.start_row;
		self.raw_offset = self.carried + displacement;
		if displacement.abs() >= 1.0 {
			self.moved = true;
		}
	}

	/// Samples velocity over the elapsed tick interval.
	pub fn tick(&mut self, delta: Duration) {
		let secs = delta.as_secs_f32();
		if secs > 0.0 {
			self.velocity = (self.raw_offset - self.sampled_offset) / secs;
			self.sampled_offset = self.raw_offset;
		}
	}

	/// True once the drag left the tap slop.
	pub fn is_drag(&self) -> bool {
		self.moved
	}

	/// Last sampled velocity in rows per second, signed toward the
	/// bottom.
	pub fn velocity(&self) -> f32 {
		self.velocity
	}

	/// Visual shift for the current offset under the given behavior.
	///
	/// `exit_sign` is the direction of the exit edge (-1.0 top, 1.0
	/// bottom); `limit` bounds the rubber-band stretch into the screen.
	pub fn shift(&self, behavior: &ScrollBehavior, exit_sign: f32, limit: f32) -> f32 {
		let toward_exit = self.raw_offset * exit_sign;
		if toward_exit >= 0.0 {
			return self.raw_offset;
		}
		let stretch = -toward_exit;
		match behavior {
			ScrollBehavior::Enabled { .. } => -exit_sign * rubber_band(stretch, limit),
			_ => 0.0,
		}
	}

	/// Decides what a release does under the given behavior.
	pub fn outcome(&self, behavior: &ScrollBehavior, exit_sign: f32) -> PanOutcome {
		let toward_exit = self.raw_offset * exit_sign;
		let exit_velocity = self.velocity * exit_sign;
		if behavior.is_swipeable() && toward_exit > 0.0 && exit_velocity >= SWIPE_MIN_VELOCITY {
			PanOutcome::Swipe {
				velocity: self.velocity,
			}
		} else {
			PanOutcome::Pullback
		}
	}
}
