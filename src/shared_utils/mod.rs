//! Internal utilities shared across the crate.

pub mod math;
