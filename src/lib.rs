//! # Ratatui Overlays
//!
//! Animated overlay entries for [ratatui](https://ratatui.rs) terminal
//! applications: transient banners, toasts, and alerts presented above the
//! host UI with configurable position, lifetime, animation, queueing, and
//! gesture-driven dismissal.
//!
//! ## Features
//!
//! - **Display manners**: `Override` displaces whatever is showing;
//!   `Enqueue` waits its turn, chronologically or by priority
//! - **Composite animations**: independent slide, fade, and scale tracks
//!   with per-track delay and optional spring easing
//! - **Auto-exit**: timed display durations with a cancellable countdown,
//!   or infinite entries that stay until acted upon
//! - **Gestures**: tap to dismiss or delay, drag with rubber-band
//!   stretch, velocity-based swipe-to-dismiss
//! - **Lifecycle observer**: hooks for entries becoming active and
//!   inactive
//!
//! ## Quick Start
//!
//! ```no_run
//! use ratatui_overlays::{Attributes, Entry, Presenter};
//!
//! // Create the presenter once, alongside the host UI state
//! let mut presenter = Presenter::new();
//!
//! // Present a banner
//! let entry = Entry::text("Saved!", Attributes::top_banner()).named("saved");
//! presenter.display(entry);
//!
//! // In your event loop:
//! // presenter.tick(Duration::from_millis(16));
//! // presenter.handle_mouse(mouse_event);
//! // presenter.render(frame.area(), frame.buffer_mut());
//! ```
//!
//! ## Display Manners
//!
//! ```no_run
//! use ratatui_overlays::{Attributes, DisplayManner, Entry, Presenter, Priority, QueuePolicy};
//!
//! let mut presenter = Presenter::new();
//! presenter.set_queue_policy(QueuePolicy::Priority);
//!
//! // Displace whatever is showing
//! let urgent = Entry::text(
//! 	"Disk full!",
//! 	Attributes {
//! 		display_manner: DisplayManner::Override,
//! 		..Attributes::top_banner()
//! 	},
//! );
//!
//! // Wait behind the mounted entry, ahead of lower priorities
//! let patient = Entry::text(
//! 	"Sync finished",
//! 	Attributes {
//! 		display_manner: DisplayManner::Enqueue(Priority::LOW),
//! 		..Attributes::bottom_toast()
//! 	},
//! );
//!
//! presenter.display(urgent);
//! presenter.display(patient);
//! ```
//!
//! ## Gestures
//!
//! ```no_run
//! use ratatui_overlays::{Attributes, Entry, PullbackAnimation, ScrollBehavior};
//!
//! // Elastic drag; a fast flick toward the edge dismisses
//! let entry = Entry::text(
//! 	"Drag me",
//! 	Attributes {
//! 		scroll_behavior: ScrollBehavior::Enabled {
//! 			swipeable: true,
//! 			pullback: PullbackAnimation::jolt(),
//! 		},
//! 		..Attributes::top_banner()
//! 	},
//! );
//! ```

pub mod entries;
pub(crate) mod shared_utils;

// Re-export public API at crate root for ergonomic imports
pub use entries::{
	// Configuration types
	Animation,
	Attributes,
	// Error type
	AttributesError,
	DisplayDuration,
	DisplayManner,
	// Core types
	Entry,
	EntryContent,
	EntryObserver,
	EntryQueue,
	Fade,
	LifecyclePhase,
	Position,

	Presenter,

	Priority,
	PullbackAnimation,
	QueuePolicy,
	Rollback,
	SWIPE_MIN_VELOCITY,
	SafeAreaBehavior,
	SafeAreaInsets,
	Scale,
	ScrollBehavior,
	Spring,
	TapAction,
	Translate,
	UserInteraction,
	WindowLevel,
};
