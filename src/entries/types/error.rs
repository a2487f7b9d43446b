use thiserror::Error;

/// Rejection reasons for entries refused at the display boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttributesError {
	/// Window level resolves below zero.
	#[error("Window level {0} is below zero")]
	InvalidWindowLevel(i32),

	/// Timed display duration of zero.
	#[error("Timed display duration must be positive")]
	InvalidDisplayDuration,

	/// Entry content failed its own validation.
	#[error("Entry content failed validation")]
	InvalidContent,
}
