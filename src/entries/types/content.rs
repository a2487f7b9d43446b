use ratatui::buffer::Buffer;
use ratatui::layout::{Rect, Size};
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// Content surface presented inside an entry.
///
/// The presenter treats content as opaque: it asks for a preferred size
/// against the frame, resolves where the entry sits, and hands back the
/// area to paint. Anything renderable can implement this; a ready-made
/// impl exists for [`Text`].
pub trait EntryContent {
	/// Preferred size within the given frame.
	fn measure(&self, frame: Rect) -> Size;

	/// Paints the content into `area`.
	fn render(&self, area: Rect, buf: &mut Buffer);

	/// Content-specific validity check, consulted before display.
	fn is_valid(&self) -> bool {
		true
	}
}

impl EntryContent for Text<'static> {
	fn measure(&self, frame: Rect) -> Size {
		let width = (self.width() as u16).min(frame.width);
		let height = (self.height() as u16).min(frame.height);
		Size::new(width, height)
	}

	fn render(&self, area: Rect, buf: &mut Buffer) {
		Widget::render(self, area, buf);
	}
}
