use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;
use ratatui::style::{Color, Modifier, Style};

/// Alpha below which content is skipped entirely instead of painted.
pub const ALPHA_FLOOR: f32 = 0.05;

/// Applies a fade alpha to an already painted area.
///
/// Terminal cells have no real alpha channel: RGB colors are scaled
/// toward black, while palette colors take the DIM modifier once alpha
/// drops below two thirds.
///
/// # Arguments
///
/// * `buf` - The buffer holding the painted area
/// * `area` - Cells to fade
/// * `alpha` - 0.0 (invisible) to 1.0 (untouched)
pub fn apply_fade(buf: &mut Buffer, area: Rect, alpha: f32) {
	let alpha = alpha.clamp(0.0, 1.0);
	if alpha >= 0.999 {
		return;
	}
	for y in area.top()..area.bottom() {
		for x in area.left()..area.right() {
			let Some(cell) = buf.cell_mut((x, y)) else {
				continue;
			};
			let style = cell.style();
			let mut faded = style;
			match style.fg {
				Some(Color::Rgb(r, g, b)) => {
					faded = faded.fg(scale_rgb(r, g, b, alpha));
				}
				_ if alpha < 0.66 => {
					faded = faded.add_modifier(Modifier::DIM);
				}
				_ => {}
			}
			if let Some(Color::Rgb(r, g, b)) = style.bg {
				faded = faded.bg(scale_rgb(r, g, b, alpha));
			}
			cell.set_style(faded);
		}
	}
}

fn scale_rgb(r: u8, g: u8, b: u8, alpha: f32) -> Color {
	Color::Rgb(
		(r as f32 * alpha).round() as u8,
		(g as f32 * alpha).round() as u8,
		(b as f32 * alpha).round() as u8,
	)
}
