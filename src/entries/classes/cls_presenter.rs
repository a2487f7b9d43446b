use std::time::Duration;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::{debug, warn};
use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;

use crate::entries::classes::cls_entry::Entry;
use crate::entries::classes::cls_entry_controller::{
	ControllerEvent, EntryController, ExitReason,
};
use crate::entries::classes::cls_entry_queue::{EntryQueue, QueuePolicy};
use crate::entries::classes::cls_surface::{Rollback, Surface};
use crate::entries::types::{EntryContent, EntryObserver, SafeAreaInsets, WindowLevel};

/// Single access point for presenting entries.
///
/// The presenter owns the overlay surface, the waiting queue, and the
/// registered observer, and routes every display request: override
/// entries displace whatever is mounted, enqueued entries wait their
/// turn. One entry holds the surface at a time; when it is removed the
/// staged override entry mounts, else the queue promotes, else the
/// surface tears down to the rollback target.
///
/// Drive it from the host event loop: `tick` on every frame,
/// `handle_mouse` for input, `render` into the frame buffer.
#[derive(Default)]
pub struct Presenter {
	surface: Surface,
	queue: EntryQueue,
	/// Override entry waiting for the displaced entry's pop to finish.
	staged: Option<Entry>,
	observer: Option<Box<dyn EntryObserver>>,
	insets: SafeAreaInsets,
}

impl Presenter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the lifecycle observer, replacing any previous one.
	pub fn set_observer(&mut self, observer: impl EntryObserver + 'static) {
		self.observer = Some(Box::new(observer));
	}

	/// Rows reserved by the host at the vertical screen edges.
	pub fn set_safe_area(&mut self, insets: SafeAreaInsets) {
		self.insets = insets;
	}

	/// Swaps the queue discipline for subsequent insertions.
	pub fn set_queue_policy(&mut self, policy: QueuePolicy) {
		self.queue.set_policy(policy);
	}

	/// What the surface shows once the last entry is gone.
	pub fn set_rollback(&mut self, rollback: Rollback) {
		self.surface.set_rollback(rollback);
	}

	/// Presents an entry, displacing or queueing per its display manner.
	///
	/// Entries that fail validation are dropped with a log line; a
	/// refused display never reaches the surface.
	pub fn display(&mut self, entry: Entry) {
		if let Err(reason) = entry.validate() {
			warn!(
				"refusing entry '{}': {reason}",
				entry.name().unwrap_or("unnamed")
			);
			return;
		}
		if entry.attributes().display_manner.is_override() {
			self.display_override(entry);
		} else {
			self.display_enqueued(entry);
		}
	}

	/// Animates out the mounted entry; a logged no-op when nothing is
	/// mounted.
	pub fn dismiss(&mut self) {
		self.dismiss_with(|| {});
	}

	/// Animates out the mounted entry and runs `completion` once it is
	/// removed. With nothing mounted the completion runs right away.
	pub fn dismiss_with(&mut self, completion: impl FnOnce() + 'static) {
		let Some(controller) = self.surface.mounted_mut() else {
			warn!("dismiss with nothing mounted");
			completion();
			return;
		};
		controller.push_completion(Box::new(completion));
		controller.begin_exit(ExitReason::Dismissed);
		self.settle();
	}

	/// True while any entry holds the surface.
	pub fn is_displaying(&self) -> bool {
		self.surface.is_active()
	}

	/// True while the mounted entry carries the given name.
	pub fn is_displaying_named(&self, name: &str) -> bool {
		self.surface
			.mounted()
			.is_some_and(|controller| controller.entry().name() == Some(name))
	}

	/// Animates out the mounted entry when it carries the given name and
	/// drops waiting entries with that name.
	pub fn dismiss_named(&mut self, name: &str) {
		let dropped = self.queue.remove_named(name);
		if dropped > 0 {
			debug!("dropped {dropped} waiting entries named '{name}'");
		}
		if self.is_displaying_named(name) {
			if let Some(controller) = self.surface.mounted_mut() {
				controller.begin_exit(ExitReason::Dismissed);
			}
			self.settle();
		}
	}

	/// True when a waiting entry carries the given name.
	pub fn is_queued_named(&self, name: &str) -> bool {
		self.queue.contains_named(name)
	}

	/// Swaps the mounted entry's content in place with a short resize and
	/// fade transition; a logged no-op when nothing is mounted.
	pub fn transform(&mut self, content: impl EntryContent + 'static) {
		match self.surface.mounted_mut() {
			Some(controller) => controller.transform(Box::new(content)),
			None => warn!("transform with nothing mounted"),
		}
	}

	/// Advances animations and countdowns by the elapsed time, promoting
	/// or tearing down as entries finish.
	pub fn tick(&mut self, delta: Duration) {
		if let Some(controller) = self.surface.mounted_mut() {
			controller.tick(delta);
		}
		self.settle();
	}

	/// Routes a mouse event to the mounted entry; returns whether the
	/// overlay consumed it.
	pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
		let Some(controller) = self.surface.mounted_mut() else {
			return false;
		};
		let consumed = match event.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				let inside = controller.hit_test(event.column, event.row);
				controller.press(event.row, inside)
			}
			MouseEventKind::Drag(MouseButton::Left) => controller.drag(event.row),
			MouseEventKind::Up(MouseButton::Left) => controller.release(),
			_ => false,
		};
		self.settle();
		consumed
	}

	/// Paints the overlay for the current instant.
	pub fn render(&mut self, frame: Rect, buf: &mut Buffer) {
		self.surface.render(frame, self.insets, buf);
	}

	/// Number of entries waiting behind the mounted one.
	pub fn queued_count(&self) -> usize {
		self.queue.len()
	}

	/// Drops every waiting entry; the mounted one is unaffected.
	pub fn clear_queue(&mut self) {
		self.queue.clear();
	}

	/// Window level of the surface; `None` when torn down.
	pub fn window_level(&self) -> Option<WindowLevel> {
		self.surface.level()
	}

	fn display_override(&mut self, entry: Entry) {
		if self.staged.is_some() {
			debug!("override replaced the staged entry");
		}
		match self.surface.mounted_mut() {
			Some(mounted) => {
				// The newcomer waits out the displaced entry's pop; a
				// prompt pop hands over inside this call via settle.
				self.staged = Some(entry);
				mounted.begin_exit(ExitReason::Displaced);
				self.settle();
			}
			None => {
				self.staged = None;
				self.mount(entry);
			}
		}
	}

	fn display_enqueued(&mut self, entry: Entry) {
		if self.surface.is_active() || self.staged.is_some() {
			self.queue.insert(entry);
		} else {
			self.mount(entry);
		}
	}

	fn mount(&mut self, entry: Entry) {
		self.surface.mount(EntryController::new(entry));
	}

	/// Forwards buffered lifecycle notifications and fills the surface
	/// slot once the mounted entry is removed.
	fn settle(&mut self) {
		loop {
			self.notify_observer();
			let removed = self
				.surface
				.mounted()
				.is_some_and(EntryController::is_removed);
			if !removed {
				return;
			}
			self.surface.unmount();
			if let Some(staged) = self.staged.take() {
				self.mount(staged);
			} else if let Some(next) = self.queue.next() {
				debug!("promoting entry '{}'", next.name().unwrap_or("unnamed"));
				self.mount(next);
			} else {
				self.surface.teardown();
				return;
			}
		}
	}

	fn notify_observer(&mut self) {
		let Some(controller) = self.surface.mounted_mut() else {
			return;
		};
		let events = controller.drain_events();
		if events.is_empty() {
			return;
		}
		let attributes = controller.entry().attributes().clone();
		let name = controller.entry().name().map(str::to_owned);
		let Some(observer) = self.observer.as_mut() else {
			return;
		};
		for event in events {
			match event {
				ControllerEvent::BecameActive => {
					observer.entry_became_active(&attributes, name.as_deref());
				}
				ControllerEvent::BecameInactive => {
					observer.entry_became_inactive(&attributes, name.as_deref());
				}
			}
		}
	}
}
