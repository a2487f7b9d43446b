use std::collections::VecDeque;

use log::debug;

use crate::entries::classes::cls_entry::Entry;

/// Ordering discipline for waiting entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueuePolicy {
	/// First in, first out.
	Chronological,

	/// Highest priority first; arrival order within equal priorities.
	Priority,
}

impl Default for QueuePolicy {
	fn default() -> Self {
		Self::Chronological
	}
}

/// Entries waiting while another entry holds the surface.
///
/// One discipline is active at a time; swapping it affects subsequent
/// insertions and leaves already waiting entries in place.
#[derive(Debug, Default)]
pub struct EntryQueue {
	policy: QueuePolicy,
	items: VecDeque<Entry>,
}

impl EntryQueue {
	/// Empty queue with the given discipline.
	pub fn new(policy: QueuePolicy) -> Self {
		Self {
			policy,
			items: VecDeque::new(),
		}
	}

	/// Active discipline.
	pub fn policy(&self) -> QueuePolicy {
		self.policy
	}

	/// Swaps the discipline for subsequent insertions.
	pub fn set_policy(&mut self, policy: QueuePolicy) {
		self.policy = policy;
	}

	/// Inserts an entry per the active discipline.
	pub fn insert(&mut self, entry: Entry) {
		match self.policy {
			QueuePolicy::Chronological => self.items.push_back(entry),
			QueuePolicy::Priority => {
				let priority = entry.priority();
				let at = self
					.items
					.iter()
					.position(|waiting| waiting.priority() < priority)
					.unwrap_or(self.items.len());
				self.items.insert(at, entry);
			}
		}
		debug!("enqueued entry ({} waiting)", self.items.len());
	}

	/// Removes and returns the entry next in line.
	pub fn next(&mut self) -> Option<Entry> {
		self.items.pop_front()
	}

	/// Drops every waiting entry.
	pub fn clear(&mut self) {
		if !self.items.is_empty() {
			debug!("dropping {} waiting entries", self.items.len());
			self.items.clear();
		}
	}

	/// Drops waiting entries with the given name, returning how many.
	pub fn remove_named(&mut self, name: &str) -> usize {
		let before = self.items.len();
		self.items.retain(|entry| entry.name() != Some(name));
		before - self.items.len()
	}

	/// True when a waiting entry carries the given name.
	pub fn contains_named(&self, name: &str) -> bool {
		self.items.iter().any(|entry| entry.name() == Some(name))
	}

	/// Number of waiting entries.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// True when nothing is waiting.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
