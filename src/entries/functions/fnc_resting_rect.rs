use ratatui::layout::Size;
use ratatui::prelude::Rect;

use crate::entries::types::{Position, SafeAreaBehavior, SafeAreaInsets};

/// Calculates the rect an entry rests at when fully presented.
///
/// The entry is centered horizontally and sized to its measured content,
/// clamped to the frame. Safe-area insets shift the resting row inward
/// unless the entry overrides the safe area; the vertical offset adds
/// further rows away from the edge.
///
/// # Arguments
///
/// * `content` - Measured content size
/// * `frame` - The visible frame area
/// * `position` - Vertical placement of the entry
/// * `safe_area` - Whether the reserved edge rows are honored
/// * `insets` - Rows reserved by the host at each vertical edge
/// * `vertical_offset` - Extra rows away from the (inset) edge
///
/// # Returns
///
/// The resting rectangle, or `Rect::default()` for degenerate content
pub fn resting_rect(
	content: Size,
	frame: Rect,
	position: Position,
	safe_area: SafeAreaBehavior,
	insets: SafeAreaInsets,
	vertical_offset: u16,
) -> Rect {
	let width = content.width.min(frame.width);
	let height = content.height.min(frame.height);
	if width == 0 || height == 0 {
		return Rect::default();
	}

	let x = frame.x + (frame.width - width) / 2;
	let (top_inset, bottom_inset) = if safe_area.is_overridden() {
		(0, 0)
	} else {
		(insets.top, insets.bottom)
	};

	let max_y = frame.bottom().saturating_sub(height);
	let y = match position {
		Position::Top => frame
			.y
			.saturating_add(top_inset)
			.saturating_add(vertical_offset),
		Position::Center => {
			let centered = frame.y + (frame.height - height) / 2;
			centered.saturating_add(vertical_offset)
		}
		Position::Bottom => frame
			.bottom()
			.saturating_sub(height)
			.saturating_sub(bottom_inset)
			.saturating_sub(vertical_offset),
	};

	Rect::new(x, y.clamp(frame.y, max_y), width, height)
}
