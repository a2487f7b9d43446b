//! Geometry and paint helpers for presented entries.

pub mod fnc_animated_rect;
pub mod fnc_fade_style;
pub mod fnc_resting_rect;

pub use fnc_animated_rect::animated_rect;
pub use fnc_fade_style::{apply_fade, ALPHA_FLOOR};
pub use fnc_resting_rect::resting_rect;
