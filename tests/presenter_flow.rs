//! End-to-end sequencing scenarios driven through the public `Presenter`
//! API: display routing, queue promotion, displacement, and gestures.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;

use ratatui_overlays::{
	Animation, Attributes, DisplayDuration, DisplayManner, Entry, EntryObserver, Presenter,
	Priority, PullbackAnimation, QueuePolicy, SafeAreaInsets, ScrollBehavior, WindowLevel,
};

const FRAME: Rect = Rect {
	x: 0,
	y: 0,
	width: 40,
	height: 12,
};

/// Observer appending `active:`/`inactive:` lines to a shared log.
struct Recorder {
	log: Rc<RefCell<Vec<String>>>,
}

impl EntryObserver for Recorder {
	fn entry_became_active(&mut self, _attributes: &Attributes, name: Option<&str>) {
		self.log
			.borrow_mut()
			.push(format!("active:{}", name.unwrap_or("?")));
	}

	fn entry_became_inactive(&mut self, _attributes: &Attributes, name: Option<&str>) {
		self.log
			.borrow_mut()
			.push(format!("inactive:{}", name.unwrap_or("?")));
	}
}

fn recorded() -> (Presenter, Rc<RefCell<Vec<String>>>) {
	let log = Rc::new(RefCell::new(Vec::new()));
	let mut presenter = Presenter::new();
	presenter.set_observer(Recorder {
		log: Rc::clone(&log),
	});
	(presenter, log)
}

/// Attributes without animations, so transitions resolve synchronously.
fn plain() -> Attributes {
	Attributes {
		entrance_animation: Animation::none(),
		exit_animation: Animation::none(),
		pop_animation: None,
		..Attributes::default()
	}
}

fn overriding(name: &str) -> Entry {
	Entry::text(name.to_string(), plain()).named(name)
}

fn enqueued(name: &str, priority: Priority) -> Entry {
	let attributes = Attributes {
		display_manner: DisplayManner::Enqueue(priority),
		..plain()
	};
	Entry::text(name.to_string(), attributes).named(name)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind,
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

#[test]
fn test_override_mounts_immediately() {
	let (mut presenter, log) = recorded();
	presenter.display(overriding("a"));
	presenter.tick(Duration::ZERO);
	assert!(presenter.is_displaying());
	assert!(presenter.is_displaying_named("a"));
	assert!(!presenter.is_displaying_named("b"));
	assert_eq!(*log.borrow(), ["active:a"]);
}

#[test]
fn test_override_displaces_without_waiting_for_the_timer() {
	let (mut presenter, log) = recorded();
	presenter.display(overriding("a"));
	presenter.tick(Duration::ZERO);
	presenter.display(overriding("b"));
	presenter.tick(Duration::ZERO);
	assert!(presenter.is_displaying_named("b"));
	assert_eq!(*log.borrow(), ["active:a", "inactive:a", "active:b"]);
}

#[test]
fn test_override_supersedes_the_staged_entry() {
	let (mut presenter, log) = recorded();
	let popping = Attributes {
		pop_animation: Some(Animation::pop()),
		..plain()
	};
	presenter.display(Entry::text("a", popping).named("a"));
	presenter.tick(Duration::ZERO);
	presenter.display(overriding("b"));
	presenter.display(overriding("c"));
	// The displaced entry plays its pop out; only the latest override
	// mounts when it finishes.
	presenter.tick(Duration::from_millis(600));
	presenter.tick(Duration::ZERO);
	assert!(presenter.is_displaying_named("c"));
	assert_eq!(*log.borrow(), ["active:a", "inactive:a", "active:c"]);
}

#[test]
fn test_enqueued_entry_waits_for_the_mounted_one() {
	let (mut presenter, log) = recorded();
	presenter.display(enqueued("a", Priority::NORMAL));
	presenter.tick(Duration::ZERO);
	presenter.display(enqueued("b", Priority::HIGH));
	assert!(presenter.is_displaying_named("a"));
	assert_eq!(presenter.queued_count(), 1);
	// The mounted entry completes its 4 s countdown, then the queue
	// promotes.
	presenter.tick(Duration::from_secs(4));
	presenter.tick(Duration::ZERO);
	assert!(presenter.is_displaying_named("b"));
	assert_eq!(presenter.queued_count(), 0);
	assert_eq!(*log.borrow(), ["active:a", "inactive:a", "active:b"]);
}

#[test]
fn test_priority_queue_promotes_descending_with_customs_interleaved() {
	let (mut presenter, log) = recorded();
	presenter.set_queue_policy(QueuePolicy::Priority);
	presenter.display(Entry::text(
		"blocker",
		Attributes {
			display_duration: DisplayDuration::Infinite,
			..plain()
		},
	));
	presenter.tick(Duration::ZERO);
	for (name, priority) in [
		("min", Priority::MIN),
		("c999", Priority::custom(999)),
		("low", Priority::LOW),
		("max", Priority::MAX),
		("c1", Priority::custom(1)),
		("normal", Priority::NORMAL),
		("high", Priority::HIGH),
	] {
		presenter.display(enqueued(name, priority));
	}
	assert_eq!(presenter.queued_count(), 7);
	log.borrow_mut().clear();
	// Dismissing each mounted entry promotes the next in priority order.
	for _ in 0..8 {
		presenter.dismiss();
		presenter.tick(Duration::ZERO);
	}
	assert!(!presenter.is_displaying());
	let promoted: Vec<String> = log
		.borrow()
		.iter()
		.filter_map(|line| line.strip_prefix("active:").map(str::to_owned))
		.collect();
	assert_eq!(promoted, ["max", "c999", "high", "normal", "low", "c1", "min"]);
}

#[test]
fn test_chronological_queue_promotes_in_arrival_order() {
	let (mut presenter, log) = recorded();
	presenter.display(overriding("blocker"));
	presenter.tick(Duration::ZERO);
	presenter.display(enqueued("first", Priority::MIN));
	presenter.display(enqueued("second", Priority::MAX));
	log.borrow_mut().clear();
	for _ in 0..3 {
		presenter.dismiss();
		presenter.tick(Duration::ZERO);
	}
	let promoted: Vec<String> = log
		.borrow()
		.iter()
		.filter_map(|line| line.strip_prefix("active:").map(str::to_owned))
		.collect();
	assert_eq!(promoted, ["first", "second"]);
}

#[test]
fn test_manual_dismissal_notifies_exactly_once() {
	let (mut presenter, log) = recorded();
	presenter.display(Entry::text("a", Attributes::default()).named("a"));
	presenter.tick(Duration::from_millis(300));
	presenter.dismiss();
	presenter.dismiss();
	presenter.tick(Duration::from_millis(300));
	presenter.tick(Duration::from_secs(60));
	assert!(!presenter.is_displaying());
	let inactive = log
		.borrow()
		.iter()
		.filter(|line| line.starts_with("inactive:"))
		.count();
	assert_eq!(inactive, 1);
}

#[test]
fn test_dismiss_with_nothing_mounted_still_completes() {
	let mut presenter = Presenter::new();
	let completed = Rc::new(RefCell::new(false));
	let flag = Rc::clone(&completed);
	presenter.dismiss_with(move || *flag.borrow_mut() = true);
	assert!(*completed.borrow());
	assert!(!presenter.is_displaying());
}

#[test]
fn test_dismiss_completion_runs_after_removal() {
	let mut presenter = Presenter::new();
	presenter.display(Entry::text("a", Attributes::default()));
	presenter.tick(Duration::from_millis(300));
	let completed = Rc::new(RefCell::new(false));
	let flag = Rc::clone(&completed);
	presenter.dismiss_with(move || *flag.borrow_mut() = true);
	assert!(!*completed.borrow());
	presenter.tick(Duration::from_millis(300));
	assert!(*completed.borrow());
}

#[test]
fn test_infinite_entry_outlives_any_wait() {
	let (mut presenter, log) = recorded();
	let attributes = Attributes {
		display_duration: DisplayDuration::Infinite,
		..plain()
	};
	presenter.display(Entry::text("pinned", attributes).named("pinned"));
	presenter.tick(Duration::from_secs(3600));
	assert!(presenter.is_displaying_named("pinned"));
	presenter.dismiss();
	presenter.tick(Duration::ZERO);
	assert!(!presenter.is_displaying());
	assert_eq!(*log.borrow(), ["active:pinned", "inactive:pinned"]);
}

#[test]
fn test_negative_window_level_is_refused() {
	let (mut presenter, log) = recorded();
	let attributes = Attributes {
		window_level: WindowLevel::Custom(-1),
		..plain()
	};
	presenter.display(Entry::text("bad", attributes).named("bad"));
	presenter.tick(Duration::ZERO);
	assert!(!presenter.is_displaying());
	assert!(log.borrow().is_empty());
}

#[test]
fn test_window_level_follows_the_mounted_entry() {
	let mut presenter = Presenter::new();
	assert_eq!(presenter.window_level(), None);
	let attributes = Attributes {
		window_level: WindowLevel::Alerts,
		..plain()
	};
	presenter.display(Entry::text("alert", attributes));
	assert_eq!(presenter.window_level(), Some(WindowLevel::Alerts));
	presenter.dismiss();
	presenter.tick(Duration::ZERO);
	assert_eq!(presenter.window_level(), None);
}

#[test]
fn test_clear_queue_keeps_the_mounted_entry() {
	let mut presenter = Presenter::new();
	presenter.display(overriding("a"));
	presenter.display(enqueued("b", Priority::NORMAL));
	presenter.display(enqueued("c", Priority::NORMAL));
	assert_eq!(presenter.queued_count(), 2);
	presenter.clear_queue();
	assert_eq!(presenter.queued_count(), 0);
	assert!(presenter.is_displaying_named("a"));
	presenter.dismiss();
	presenter.tick(Duration::ZERO);
	assert!(!presenter.is_displaying());
}

#[test]
fn test_dismiss_named_targets_mounted_and_queued_entries() {
	let (mut presenter, log) = recorded();
	presenter.display(overriding("keep"));
	presenter.tick(Duration::ZERO);
	presenter.display(enqueued("drop", Priority::NORMAL));
	presenter.display(enqueued("drop", Priority::NORMAL));
	presenter.display(enqueued("other", Priority::NORMAL));
	assert!(presenter.is_queued_named("drop"));
	presenter.dismiss_named("drop");
	assert!(!presenter.is_queued_named("drop"));
	assert!(presenter.is_displaying_named("keep"));
	assert_eq!(presenter.queued_count(), 1);
	presenter.dismiss_named("keep");
	presenter.tick(Duration::ZERO);
	assert!(presenter.is_displaying_named("other"));
	assert_eq!(
		*log.borrow(),
		["active:keep", "inactive:keep", "active:other"]
	);
}

#[test]
fn test_dismiss_named_ignores_other_names() {
	let mut presenter = Presenter::new();
	presenter.display(overriding("keep"));
	presenter.dismiss_named("missing");
	assert!(presenter.is_displaying_named("keep"));
	assert!(!presenter.is_queued_named("missing"));
}

#[test]
fn test_transform_swaps_content_without_touching_the_lifecycle() {
	let (mut presenter, log) = recorded();
	presenter.display(overriding("a"));
	presenter.tick(Duration::ZERO);
	presenter.transform(ratatui::text::Text::from("replacement\ncontent"));
	presenter.tick(Duration::from_millis(450));
	assert!(presenter.is_displaying_named("a"));
	assert_eq!(*log.borrow(), ["active:a"]);
}

#[test]
fn test_transform_with_nothing_mounted_is_a_noop() {
	let mut presenter = Presenter::new();
	presenter.transform(ratatui::text::Text::from("nothing to replace"));
	assert!(!presenter.is_displaying());
}

#[test]
fn test_tap_on_the_entry_dismisses_it() {
	let (mut presenter, log) = recorded();
	presenter.set_safe_area(SafeAreaInsets::new(2, 2));
	presenter.display(overriding("tap"));
	presenter.tick(Duration::ZERO);
	let mut buf = Buffer::empty(FRAME);
	presenter.render(FRAME, &mut buf);
	// "tap" is 3 columns wide, centered; the entry rests at row 2.
	assert!(presenter.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 19, 2)));
	assert!(presenter.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 19, 2)));
	assert!(!presenter.is_displaying());
	assert_eq!(*log.borrow(), ["active:tap", "inactive:tap"]);
}

#[test]
fn test_slow_release_rebounds_and_the_countdown_still_governs() {
	let (mut presenter, log) = recorded();
	presenter.set_safe_area(SafeAreaInsets::new(2, 2));
	let attributes = Attributes {
		scroll_behavior: ScrollBehavior::Enabled {
			swipeable: true,
			pullback: PullbackAnimation::ease_out(),
		},
		..plain()
	};
	presenter.display(Entry::text("hold", attributes).named("hold"));
	presenter.tick(Duration::ZERO);
	let mut buf = Buffer::empty(FRAME);
	presenter.render(FRAME, &mut buf);
	// Drag two rows toward the top exit edge over 100 ms: 20 rows/s,
	// well below the swipe threshold.
	assert!(presenter.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 19, 2)));
	assert!(presenter.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 19, 0)));
	presenter.tick(Duration::from_millis(100));
	assert!(presenter.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 19, 0)));
	presenter.tick(Duration::from_millis(300));
	assert!(presenter.is_displaying_named("hold"));
	presenter.tick(Duration::from_secs(4));
	assert!(!presenter.is_displaying());
	assert_eq!(*log.borrow(), ["active:hold", "inactive:hold"]);
}

#[test]
fn test_fast_release_toward_the_exit_edge_swipes_out() {
	let (mut presenter, log) = recorded();
	presenter.set_safe_area(SafeAreaInsets::new(2, 2));
	let attributes = Attributes {
		scroll_behavior: ScrollBehavior::Enabled {
			swipeable: true,
			pullback: PullbackAnimation::ease_out(),
		},
		..plain()
	};
	presenter.display(Entry::text("flick", attributes).named("flick"));
	presenter.tick(Duration::ZERO);
	let mut buf = Buffer::empty(FRAME);
	presenter.render(FRAME, &mut buf);
	// Two rows in 16 ms is ~125 rows/s toward the exit edge.
	assert!(presenter.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 19, 2)));
	assert!(presenter.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 19, 0)));
	presenter.tick(Duration::from_millis(16));
	assert!(presenter.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 19, 0)));
	presenter.tick(Duration::from_millis(700));
	assert!(!presenter.is_displaying());
	assert_eq!(*log.borrow(), ["active:flick", "inactive:flick"]);
}

#[test]
fn test_mouse_events_pass_through_when_nothing_is_mounted() {
	let mut presenter = Presenter::new();
	assert!(!presenter.handle_mouse(mouse(
		MouseEventKind::Down(MouseButton::Left),
		5,
		5
	)));
}
