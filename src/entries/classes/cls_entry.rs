use std::fmt;

use chrono::{DateTime, Utc};
use ratatui::text::Text;

use crate::entries::types::{Attributes, AttributesError, EntryContent, Priority};

/// A presentable unit: content plus the attributes describing how it
/// arrives, rests, and leaves.
pub struct Entry {
	content: Box<dyn EntryContent>,
	attributes: Attributes,
	name: Option<String>,
	created_at: DateTime<Utc>,
}

impl Entry {
	/// Creates an entry from any content surface.
	pub fn new(content: impl EntryContent + 'static, attributes: Attributes) -> Self {
		Self {
			content: Box::new(content),
			attributes,
			name: None,
			created_at: Utc::now(),
		}
	}

	/// Creates a text entry.
	pub fn text(text: impl Into<Text<'static>>, attributes: Attributes) -> Self {
		Self::new(text.into(), attributes)
	}

	/// Tags the entry for targeted queries and log lines.
	#[must_use]
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Presentation description.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Tag given at construction, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Creation timestamp.
	pub fn created_at(&self) -> DateTime<Utc> {
		self.created_at
	}

	/// Content surface.
	pub fn content(&self) -> &dyn EntryContent {
		self.content.as_ref()
	}

	/// Checks both the attributes and the content.
	pub fn validate(&self) -> Result<(), AttributesError> {
		self.attributes.validate()?;
		if !self.content.is_valid() {
			return Err(AttributesError::InvalidContent);
		}
		Ok(())
	}

	/// Queue precedence; entries without an enqueue manner sort as
	/// normal.
	pub(crate) fn priority(&self) -> Priority {
		self.attributes
			.display_manner
			.priority()
			.unwrap_or_default()
	}

	/// Swaps the content surface in place, returning the old one.
	pub(crate) fn replace_content(&mut self, content: Box<dyn EntryContent>) -> Box<dyn EntryContent> {
		std::mem::replace(&mut self.content, content)
	}
}

impl fmt::Debug for Entry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Entry")
			.field("name", &self.name)
			.field("created_at", &self.created_at)
			.field("attributes", &self.attributes)
			.finish_non_exhaustive()
	}
}
