use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// Number of call records kept unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// Shared handle to a fixed-capacity, most-recent-first log of completed
/// guarded calls.
///
/// Clones share one buffer. The log only annotates error messages.
#[derive(Clone, Debug)]
pub struct CallHistory {
	entries: Arc<Mutex<VecDeque<String>>>,
	capacity: usize,
}

impl CallHistory {
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
			capacity,
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Pushes `entry` to the front, dropping the oldest past capacity.
	pub fn record(&self, entry: String) {
		let mut entries = self.entries.lock();
		entries.push_front(entry);
		entries.truncate(self.capacity);
	}

	/// Snapshot, most recent first.
	pub fn entries(&self) -> Vec<String> {
		self.entries.lock().iter().cloned().collect()
	}

	pub fn latest(&self) -> Option<String> {
		self.entries.lock().front().cloned()
	}

	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}

	pub fn clear(&self) {
		self.entries.lock().clear();
	}
}

impl Default for CallHistory {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_most_recent_first() {
		let history = CallHistory::with_capacity(3);
		for i in 0..5 {
			history.record(format!("f{i}()"));
		}
		assert_eq!(history.entries(), vec!["f4()", "f3()", "f2()"]);
		assert_eq!(history.latest().as_deref(), Some("f4()"));
	}

	#[test]
	fn clones_share_the_buffer() {
		let history = CallHistory::new();
		let other = history.clone();
		other.record("g()".to_owned());
		assert_eq!(history.len(), 1);
		history.clear();
		assert!(other.is_empty());
	}

	#[test]
	fn zero_capacity_keeps_nothing() {
		let history = CallHistory::with_capacity(0);
		history.record("f()".to_owned());
		assert!(history.is_empty());
	}
}
