use log::debug;
use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Widget};

use crate::entries::classes::cls_entry_controller::EntryController;
use crate::entries::types::{EntryContent, Position, SafeAreaInsets, WindowLevel};

/// What the surface shows once the last entry is gone.
pub enum Rollback {
	/// Nothing; the host UI shows through.
	Main,

	/// A caller-supplied fallback painted until the next entry mounts.
	Custom(Box<dyn EntryContent>),
}

impl Default for Rollback {
	fn default() -> Self {
		Self::Main
	}
}

/// The overlay surface hosting at most one mounted entry.
///
/// Materialized when the first entry mounts and torn down when the last
/// one is removed with nothing waiting. Visibility is structural: the
/// surface is active exactly while it holds a controller, so the mounted
/// entry and the visible state can never disagree.
#[derive(Default)]
pub(crate) struct Surface {
	mounted: Option<EntryController>,
	level: Option<WindowLevel>,
	rollback: Rollback,
}

impl Surface {
	/// Mounts a controller, taking the window level from its entry.
	pub fn mount(&mut self, controller: EntryController) {
		let level = controller.entry().attributes().window_level;
		debug!("surface active at level {}", level.value());
		self.level = Some(level);
		self.mounted = Some(controller);
	}

	/// Detaches and returns the mounted controller, keeping the surface
	/// up for a successor.
	pub fn unmount(&mut self) -> Option<EntryController> {
		self.mounted.take()
	}

	/// Drops surface state and hands the screen back to the rollback
	/// target.
	pub fn teardown(&mut self) {
		self.mounted = None;
		self.level = None;
		match self.rollback {
			Rollback::Main => debug!("surface torn down; host UI restored"),
			Rollback::Custom(_) => debug!("surface torn down; rollback content showing"),
		}
	}

	/// True while an entry holds the surface.
	pub fn is_active(&self) -> bool {
		self.mounted.is_some()
	}

	pub fn mounted(&self) -> Option<&EntryController> {
		self.mounted.as_ref()
	}

	pub fn mounted_mut(&mut self) -> Option<&mut EntryController> {
		self.mounted.as_mut()
	}

	/// Level of the last mounted entry; `None` once torn down.
	pub fn level(&self) -> Option<WindowLevel> {
		self.level
	}

	pub fn set_rollback(&mut self, rollback: Rollback) {
		self.rollback = rollback;
	}

	/// Paints the mounted entry, its backdrop, and the safe-area fill, or
	/// the rollback content when no entry holds the surface.
	pub fn render(&mut self, frame: Rect, insets: SafeAreaInsets, buf: &mut Buffer) {
		let Some(controller) = self.mounted.as_mut() else {
			if let Rollback::Custom(content) = &self.rollback {
				let size = content.measure(frame);
				let area = Rect {
					x: frame.x,
					y: frame.y,
					width: size.width.min(frame.width),
					height: size.height.min(frame.height),
				};
				content.render(area, buf);
			}
			return;
		};
		let attributes = controller.entry().attributes();
		if attributes.screen_interaction.responsive {
			buf.set_style(frame, Style::default().add_modifier(Modifier::DIM));
		}
		let position = attributes.position;
		let should_fill = attributes.safe_area.should_fill();
		controller.render(frame, insets, buf);
		if should_fill {
			fill_safe_area(controller, position, frame, insets, buf);
		}
	}
}

/// Blanks the reserved edge rows on the entry's side, spanning its
/// columns, while the entry rests there.
fn fill_safe_area(
	controller: &EntryController,
	position: Position,
	frame: Rect,
	insets: SafeAreaInsets,
	buf: &mut Buffer,
) {
	let entry = controller.area();
	if entry.is_empty() {
		return;
	}
	let gap = match position {
		Position::Top if insets.top > 0 && entry.y > frame.y => Rect {
			x: entry.x,
			y: frame.y,
			width: entry.width,
			height: insets.top.min(entry.y - frame.y),
		},
		Position::Bottom if insets.bottom > 0 && entry.bottom() < frame.bottom() => {
			let height = insets.bottom.min(frame.bottom() - entry.bottom());
			Rect {
				x: entry.x,
				y: frame.bottom() - height,
				width: entry.width,
				height,
			}
		}
		_ => return,
	};
	Widget::render(Clear, gap, buf);
}

#[cfg(test)]
mod tests {
	use ratatui::text::Text;

	use crate::entries::classes::cls_entry::Entry;
	use crate::entries::types::Attributes;

	use super::*;

	fn mounted_surface() -> Surface {
		let mut surface = Surface::default();
		let entry = Entry::text("hello", Attributes::default());
		surface.mount(EntryController::new(entry));
		surface
	}

	#[test]
	fn test_active_iff_mounted() {
		let mut surface = mounted_surface();
		assert!(surface.is_active());
		assert!(surface.unmount().is_some());
		assert!(!surface.is_active());
	}

	#[test]
	fn test_level_follows_the_mounted_entry() {
		let surface = mounted_surface();
		assert_eq!(surface.level(), Some(WindowLevel::StatusBar));
	}

	#[test]
	fn test_teardown_clears_the_level() {
		let mut surface = mounted_surface();
		surface.teardown();
		assert_eq!(surface.level(), None);
		assert!(!surface.is_active());
	}

	#[test]
	fn test_rollback_content_paints_when_inactive() {
		let mut surface = Surface::default();
		surface.set_rollback(Rollback::Custom(Box::new(Text::from("fallback"))));
		let frame = Rect::new(0, 0, 20, 4);
		let mut buf = Buffer::empty(frame);
		surface.render(frame, SafeAreaInsets::default(), &mut buf);
		assert_eq!(buf.cell((0, 0)).map(|cell| cell.symbol()), Some("f"));
	}
}
