//! Keyed collections over [`Value`].
//!
//! Values are not hashable (numbers are `f64`), so both collections keep their
//! entries in insertion order and compare keys with [`same_value_zero`].

use crate::value::{Value, same_value_zero};

/// Insertion-ordered map from value to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
	entries: Vec<(Value, Value)>,
}

impl ValueMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, key: &Value) -> Option<&Value> {
		self.entries.iter().find(|(k, _)| same_value_zero(k, key)).map(|(_, v)| v)
	}

	pub fn contains_key(&self, key: &Value) -> bool {
		self.get(key).is_some()
	}

	/// Inserts or replaces; an existing key keeps its position.
	pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
		match self.entries.iter_mut().find(|(k, _)| same_value_zero(k, &key)) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.entries.push((key, value));
				None
			}
		}
	}

	pub fn remove(&mut self, key: &Value) -> Option<Value> {
		let idx = self.entries.iter().position(|(k, _)| same_value_zero(k, key))?;
		Some(self.entries.remove(idx).1)
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Value, &Value)> {
		self.entries.iter().map(|(k, v)| (k, v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &Value> {
		self.entries.iter().map(|(k, _)| k)
	}

	pub fn values(&self) -> impl Iterator<Item = &Value> {
		self.entries.iter().map(|(_, v)| v)
	}
}

impl FromIterator<(Value, Value)> for ValueMap {
	fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
		let mut map = Self::new();
		for (key, value) in iter {
			map.insert(key, value);
		}
		map
	}
}

/// Insertion-ordered set of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSet {
	items: Vec<Value>,
}

impl ValueSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn contains(&self, value: &Value) -> bool {
		self.items.iter().any(|item| same_value_zero(item, value))
	}

	/// Returns `false` if an equal value was already present.
	pub fn insert(&mut self, value: Value) -> bool {
		if self.contains(&value) {
			return false;
		}
		self.items.push(value);
		true
	}

	pub fn remove(&mut self, value: &Value) -> bool {
		match self.items.iter().position(|item| same_value_zero(item, value)) {
			Some(idx) => {
				self.items.remove(idx);
				true
			}
			None => false,
		}
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.items.iter()
	}
}

impl FromIterator<Value> for ValueSet {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		let mut set = Self::new();
		for value in iter {
			set.insert(value);
		}
		set
	}
}
