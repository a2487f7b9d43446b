use ratatui::prelude::Rect;

/// Applies an animated vertical shift and scale to a resting rect and
/// clips the result to the frame.
///
/// # Arguments
///
/// * `resting` - The rect the entry occupies when fully presented
/// * `frame` - The visible frame area
/// * `shift` - Vertical shift in rows; negative moves toward the top
/// * `scale` - Size factor applied around the rect center
///
/// # Returns
///
/// The visible rectangle, or `Rect::default()` when nothing remains on
/// screen
pub fn animated_rect(resting: Rect, frame: Rect, shift: f32, scale: f32) -> Rect {
	let scale = scale.max(0.0);
	let scaled_width = resting.width as f32 * scale;
	let scaled_height = resting.height as f32 * scale;
	let x = resting.x as f32 + (resting.width as f32 - scaled_width) / 2.0;
	let y = resting.y as f32 + (resting.height as f32 - scaled_height) / 2.0 + shift;

	let x1 = x.max(frame.x as f32);
	let y1 = y.max(frame.y as f32);
	let x2 = (x + scaled_width).min(frame.right() as f32);
	let y2 = (y + scaled_height).min(frame.bottom() as f32);
	let width = (x2 - x1).max(0.0).round() as u16;
	let height = (y2 - y1).max(0.0).round() as u16;
	if width == 0 || height == 0 {
		return Rect::default();
	}

	let x1 = x1.round() as u16;
	let y1 = y1.round() as u16;
	Rect {
		x: x1,
		y: y1,
		width: width.min(frame.right().saturating_sub(x1)),
		height: height.min(frame.bottom().saturating_sub(y1)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const FRAME: Rect = Rect {
		x: 0,
		y: 0,
		width: 40,
		height: 12,
	};

	#[test]
	fn test_identity_at_rest() {
		let resting = Rect::new(15, 4, 10, 2);
		assert_eq!(animated_rect(resting, FRAME, 0.0, 1.0), resting);
	}

	#[test]
	fn test_shift_moves_vertically() {
		let resting = Rect::new(15, 4, 10, 2);
		assert_eq!(
			animated_rect(resting, FRAME, -3.0, 1.0),
			Rect::new(15, 1, 10, 2)
		);
	}

	#[test]
	fn test_shift_past_top_edge_clips() {
		let resting = Rect::new(15, 1, 10, 2);
		let clipped = animated_rect(resting, FRAME, -2.0, 1.0);
		assert_eq!(clipped, Rect::new(15, 0, 10, 1));
	}

	#[test]
	fn test_scale_shrinks_around_center() {
		let resting = Rect::new(10, 4, 20, 4);
		assert_eq!(
			animated_rect(resting, FRAME, 0.0, 0.5),
			Rect::new(15, 5, 10, 2)
		);
	}

	#[test]
	fn test_fully_offscreen_is_empty() {
		let resting = Rect::new(15, 4, 10, 2);
		assert_eq!(animated_rect(resting, FRAME, 20.0, 1.0), Rect::default());
		assert_eq!(animated_rect(resting, FRAME, 0.0, 0.0), Rect::default());
	}
}
