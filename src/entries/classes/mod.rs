//! Stateful components of the presentation system.

pub mod cls_entry;
pub mod cls_entry_controller;
pub mod cls_entry_queue;
pub mod cls_pan_gesture;
pub mod cls_presenter;
pub mod cls_surface;

pub use cls_entry::Entry;
pub use cls_entry_queue::{EntryQueue, QueuePolicy};
pub use cls_pan_gesture::SWIPE_MIN_VELOCITY;
pub use cls_presenter::Presenter;
pub use cls_surface::Rollback;
