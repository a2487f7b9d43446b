//! Plain data types describing how entries present themselves.

pub mod animation;
pub mod attributes;
pub mod content;
pub mod display_duration;
pub mod display_manner;
pub mod error;
pub mod interaction;
pub mod lifecycle_phase;
pub mod observer;
pub mod position;
pub mod safe_area;
pub mod scroll;
pub mod window_level;

pub use animation::{Animation, Fade, Scale, Spring, Translate};
pub use attributes::Attributes;
pub use content::EntryContent;
pub use display_duration::DisplayDuration;
pub use display_manner::{DisplayManner, Priority};
pub use error::AttributesError;
pub use interaction::{TapAction, UserInteraction};
pub use lifecycle_phase::LifecyclePhase;
pub use observer::EntryObserver;
pub use position::Position;
pub use safe_area::{SafeAreaBehavior, SafeAreaInsets};
pub use scroll::{PullbackAnimation, ScrollBehavior};
pub use window_level::WindowLevel;
