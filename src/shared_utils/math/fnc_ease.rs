use std::f32::consts::PI;

/// Cubic ease-out curve.
///
/// # Arguments
///
/// * `t` - Progress (0.0 to 1.0), clamped
///
/// # Returns
///
/// Eased progress, fast at the start and settling smoothly at 1.0
#[inline]
pub fn ease_out(t: f32) -> f32 {
	let t = t.clamp(0.0, 1.0);
	1.0 - (1.0 - t).powi(3)
}

/// Normalized underdamped spring easing.
///
/// Models a displacement settling toward 1.0 over `t` in `[0, 1]`. The
/// oscillation envelope is forced to zero at `t = 1.0` so the curve always
/// lands exactly on its target. A damping ratio at or above 1.0 degenerates
/// to the cubic ease-out curve.
///
/// # Arguments
///
/// * `t` - Progress (0.0 to 1.0), clamped
/// * `damping` - Damping ratio; lower values overshoot more
/// * `initial_velocity` - Feeds the oscillation frequency
///
/// # Returns
///
/// Eased progress, possibly overshooting 1.0 before settling
pub fn spring(t: f32, damping: f32, initial_velocity: f32) -> f32 {
	let t = t.clamp(0.0, 1.0);
	if damping >= 1.0 {
		return ease_out(t);
	}
	let damping = damping.clamp(0.05, 1.0);
	let omega = PI * (2.0 + initial_velocity.abs() / 4.0);
	let envelope = (1.0 - t) * (-damping * omega * t).exp();
	let oscillation = (omega * (1.0 - damping * damping).sqrt() * t).cos();
	1.0 - envelope * oscillation
}
