use std::slice;

use typegate_value::{Descriptor, Hint, Limits, Result, ToPrimitive, Value, ValueSet, coercion_error, describe_with};

use crate::check::{concrete_element, ensure_matches, fixed_descriptor, wrong_variant};

/// Set whose members all share one descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct HomSet {
	items: ValueSet,
	descriptor: Descriptor,
	limits: Limits,
}

impl HomSet {
	pub fn new(value: Value) -> Result<Self> {
		Self::with_limits(value, Limits::default())
	}

	pub fn with_limits(value: Value, limits: Limits) -> Result<Self> {
		let descriptor = fixed_descriptor("HomSet", &value, &limits)?;
		match value {
			Value::Set(items) => Ok(Self {
				items,
				descriptor,
				limits,
			}),
			other => Err(wrong_variant("HomSet", "a set", &other, &limits)),
		}
	}

	pub fn empty(element: Descriptor) -> Result<Self> {
		concrete_element("HomSet", &element)?;
		Ok(Self {
			items: ValueSet::new(),
			descriptor: Descriptor::set_of(element),
			limits: Limits::default(),
		})
	}

	/// Fixed `Set<T>` descriptor.
	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	/// Adds `value`; `Ok(false)` if an equal member was already present.
	pub fn add(&mut self, value: Value) -> Result<bool> {
		let candidate = describe_with(&Value::Set([value.clone()].into_iter().collect()), &self.limits);
		ensure_matches("HomSet", &self.descriptor, candidate)?;
		Ok(self.items.insert(value))
	}

	pub fn contains(&self, value: &Value) -> bool {
		self.items.contains(value)
	}

	pub fn remove(&mut self, value: &Value) -> bool {
		self.items.remove(value)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> slice::Iter<'_, Value> {
		self.items.iter()
	}

	pub fn into_value(self) -> Value {
		Value::Set(self.items)
	}
}

impl ToPrimitive for HomSet {
	fn to_primitive(&self, hint: Hint) -> Result<Value> {
		Err(coercion_error(format_args!("HomSet {}", self.descriptor), hint))
	}
}
