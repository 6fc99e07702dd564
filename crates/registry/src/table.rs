//! Copy-on-write table with atomic publication.
//!
//! # Invariants
//!
//! - Readers see a complete snapshot; a lookup never observes a half-applied
//!   insert.
//! - Concurrent inserts are linearizable: each one rebuilds from the latest
//!   snapshot and retries when another writer published first.

use std::hash::Hash;
use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;

pub struct Table<K, V> {
	snap: ArcSwap<FxHashMap<K, V>>,
}

impl<K, V> Table<K, V>
where
	K: Eq + Hash + Clone,
	V: Clone,
{
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(FxHashMap::default()),
		}
	}

	pub fn get<Q>(&self, key: &Q) -> Option<V>
	where
		K: std::borrow::Borrow<Q>,
		Q: Eq + Hash + ?Sized,
	{
		self.snap.load().get(key).cloned()
	}

	pub fn contains<Q>(&self, key: &Q) -> bool
	where
		K: std::borrow::Borrow<Q>,
		Q: Eq + Hash + ?Sized,
	{
		self.snap.load().contains_key(key)
	}

	/// Publishes `value` under `key`, returning the entry it replaced.
	pub fn insert(&self, key: K, value: V) -> Option<V> {
		loop {
			let old = self.snap.load_full();
			let mut next = FxHashMap::clone(&old);
			let replaced = next.insert(key.clone(), value.clone());
			let new_arc = Arc::new(next);

			let prev = self.snap.compare_and_swap(&old, new_arc);
			if Arc::ptr_eq(&prev, &old) {
				return replaced;
			}
		}
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.snap.load().is_empty()
	}

	/// Pins the current snapshot.
	pub fn snapshot(&self) -> Arc<FxHashMap<K, V>> {
		self.snap.load_full()
	}
}

impl<K, V> Table<K, V>
where
	K: Eq + Hash + Clone + Ord,
	V: Clone,
{
	/// Keys of the current snapshot, sorted.
	pub fn keys(&self) -> Vec<K> {
		let mut keys: Vec<K> = self.snap.load().keys().cloned().collect();
		keys.sort_unstable();
		keys
	}
}

impl<K, V> Default for Table<K, V>
where
	K: Eq + Hash + Clone,
	V: Clone,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V> std::fmt::Debug for Table<K, V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Table")
			.field("len", &self.snap.load().len())
			.finish()
	}
}
