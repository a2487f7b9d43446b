//! Animation math helpers.

pub mod fnc_ease;
pub mod fnc_lerp;
pub mod fnc_rubber_band;

pub use fnc_ease::{ease_out, spring};
pub use fnc_lerp::lerp;
pub use fnc_rubber_band::rubber_band;
