use std::slice;

use typegate_value::{Descriptor, Error, Hint, Limits, Result, ToPrimitive, Value, coercion_error, describe_with};

use crate::check::{concrete_element, ensure_matches, fixed_descriptor, wrong_variant};

/// Array whose elements all share one descriptor.
///
/// Writes may only extend the array by one slot and removals may only take
/// the last element, so the array never has gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct HomArray {
	items: Vec<Value>,
	descriptor: Descriptor,
	limits: Limits,
}

impl HomArray {
	pub fn new(value: Value) -> Result<Self> {
		Self::with_limits(value, Limits::default())
	}

	pub fn with_limits(value: Value, limits: Limits) -> Result<Self> {
		let descriptor = fixed_descriptor("HomArray", &value, &limits)?;
		match value {
			Value::Array(items) => Ok(Self {
				items,
				descriptor,
				limits,
			}),
			other => Err(wrong_variant("HomArray", "an array", &other, &limits)),
		}
	}

	/// An empty array of `element`.
	pub fn empty(element: Descriptor) -> Result<Self> {
		concrete_element("HomArray", &element)?;
		Ok(Self {
			items: Vec::new(),
			descriptor: Descriptor::array_of(element),
			limits: Limits::default(),
		})
	}

	/// Fixed `[T]` descriptor.
	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	pub fn element(&self) -> Option<&Descriptor> {
		self.descriptor.element()
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.items.get(index)
	}

	/// Writes `value` at `index`. `index == len` appends.
	pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
		if index > self.items.len() {
			return Err(Error::ArgValue(format!(
				"HomArray write at index {index} would leave a gap (length {})",
				self.items.len()
			)));
		}
		self.check(&value)?;
		if index == self.items.len() {
			self.items.push(value);
		} else {
			self.items[index] = value;
		}
		Ok(())
	}

	pub fn push(&mut self, value: Value) -> Result<()> {
		self.check(&value)?;
		self.items.push(value);
		Ok(())
	}

	/// Removes the element at `index`, which must be the last one.
	pub fn remove(&mut self, index: usize) -> Result<Value> {
		match self.items.len().checked_sub(1) {
			Some(last) if last == index => Ok(self.items.swap_remove(index)),
			_ => Err(Error::ArgValue(format!(
				"HomArray can only remove its last element; index {index} of length {}",
				self.items.len()
			))),
		}
	}

	pub fn pop(&mut self) -> Option<Value> {
		self.items.pop()
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

	pub fn as_slice(&self) -> &[Value] {
		&self.items
	}

	pub fn into_value(self) -> Value {
		Value::Array(self.items)
	}

	fn check(&self, value: &Value) -> Result<()> {
		let candidate = describe_with(&Value::Array(vec![value.clone()]), &self.limits);
		ensure_matches("HomArray", &self.descriptor, candidate)
	}
}

impl<'a> IntoIterator for &'a HomArray {
	type Item = &'a Value;
	type IntoIter = slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl ToPrimitive for HomArray {
	fn to_primitive(&self, hint: Hint) -> Result<Value> {
		Err(coercion_error(format_args!("HomArray {}", self.descriptor), hint))
	}
}
