use typegate_value::{Descriptor, Hint, Limits, Result, ToPrimitive, Value, ValueMap, coercion_error, describe_with};

use crate::check::{concrete_element, ensure_matches, fixed_descriptor, wrong_variant};

/// Map whose entries all share one key and one value descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct HomMap {
	entries: ValueMap,
	descriptor: Descriptor,
	limits: Limits,
}

impl HomMap {
	pub fn new(value: Value) -> Result<Self> {
		Self::with_limits(value, Limits::default())
	}

	pub fn with_limits(value: Value, limits: Limits) -> Result<Self> {
		let descriptor = fixed_descriptor("HomMap", &value, &limits)?;
		match value {
			Value::Map(entries) => Ok(Self {
				entries,
				descriptor,
				limits,
			}),
			other => Err(wrong_variant("HomMap", "a map", &other, &limits)),
		}
	}

	pub fn empty(key: Descriptor, value: Descriptor) -> Result<Self> {
		concrete_element("HomMap", &key)?;
		concrete_element("HomMap", &value)?;
		Ok(Self {
			entries: ValueMap::new(),
			descriptor: Descriptor::map_of(key, value),
			limits: Limits::default(),
		})
	}

	/// Fixed `Map<K, V>` descriptor.
	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	pub fn get(&self, key: &Value) -> Option<&Value> {
		self.entries.get(key)
	}

	pub fn contains_key(&self, key: &Value) -> bool {
		self.entries.contains_key(key)
	}

	/// Inserts or replaces the entry for `key`, returning the previous value.
	pub fn set(&mut self, key: Value, value: Value) -> Result<Option<Value>> {
		let pair = Value::Map([(key.clone(), value.clone())].into_iter().collect());
		ensure_matches("HomMap", &self.descriptor, describe_with(&pair, &self.limits))?;
		Ok(self.entries.insert(key, value))
	}

	pub fn remove(&mut self, key: &Value) -> Option<Value> {
		self.entries.remove(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Value, &Value)> {
		self.entries.iter()
	}

	pub fn into_value(self) -> Value {
		Value::Map(self.entries)
	}
}

impl ToPrimitive for HomMap {
	fn to_primitive(&self, hint: Hint) -> Result<Value> {
		Err(coercion_error(format_args!("HomMap {}", self.descriptor), hint))
	}
}
