use crate::value::Value;

/// Insertion-ordered record used by [`Value::Record`] and tagged objects.
///
/// Keys are unique: inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	inner: Vec<(String, Value)>,
}

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: Vec::with_capacity(capacity),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Inserts `value` under `key`, returning the replaced value if the key
	/// was already present.
	pub fn insert<K>(&mut self, key: K, value: Value) -> Option<Value>
	where
		K: Into<String>,
	{
		let key = key.into();
		match self.get_mut(&key) {
			Some(slot) => Some(std::mem::replace(slot, value)),
			None => {
				self.inner.push((key, value));
				None
			}
		}
	}

	/// Builder form of [`Record::insert`].
	pub fn with<K>(mut self, key: K, value: Value) -> Self
	where
		K: Into<String>,
	{
		self.insert(key, value);
		self
	}

	pub fn contains(&self, key: impl AsRef<str>) -> bool {
		self.get(key).is_some()
	}

	pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
		let key = key.as_ref();
		self.inner.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
		let key = key.as_ref();
		self.inner.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
		let key = key.as_ref();
		let idx = self.inner.iter().position(|(k, _)| k == key)?;
		Some(self.inner.remove(idx).1)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.inner.iter().map(|(k, _)| k.as_str())
	}

	pub fn values(&self) -> impl Iterator<Item = &Value> {
		self.inner.iter().map(|(_, v)| v)
	}

	pub fn iter(&self) -> RecordIter<'_> {
		RecordIter { inner: self.inner.iter() }
	}
}

pub struct RecordIter<'a> {
	inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for RecordIter<'a> {
	type Item = (&'a str, &'a Value);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(key, value)| (key.as_str(), value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a> ExactSizeIterator for RecordIter<'a> {}

impl<'a> IntoIterator for &'a Record {
	type Item = (&'a str, &'a Value);
	type IntoIter = RecordIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K> FromIterator<(K, Value)> for Record
where
	K: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		let mut record = Self::new();
		for (key, value) in iter {
			record.insert(key, value);
		}
		record
	}
}
