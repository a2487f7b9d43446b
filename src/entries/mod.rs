//! Entry presentation: types, geometry, and the stateful components.

pub mod classes;
pub mod functions;
pub mod types;

pub use classes::{Entry, EntryQueue, Presenter, QueuePolicy, Rollback, SWIPE_MIN_VELOCITY};
pub use types::{
	Animation, Attributes, AttributesError, DisplayDuration, DisplayManner, EntryContent,
	EntryObserver, Fade, LifecyclePhase, Position, Priority, PullbackAnimation, SafeAreaBehavior,
	SafeAreaInsets, Scale, ScrollBehavior, Spring, TapAction, Translate, UserInteraction,
	WindowLevel,
};
