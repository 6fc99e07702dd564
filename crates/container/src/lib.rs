//! Homogeneous containers.
//!
//! A wrapper describes its container once at construction and fixes that
//! descriptor. Every later write is described again and must match it.
//! Heterogeneous containers are rejected up front, and empty ones need their
//! element type spelled out through the `empty` constructors.

mod array;
mod check;
mod map;
mod set;

pub use array::HomArray;
pub use map::HomMap;
pub use set::HomSet;
use typegate_value::{Descriptor, Error, Hint, Limits, Result, ToPrimitive, Value, describe_with};

/// Any homogeneous wrapper, chosen by the variant of the wrapped value.
#[derive(Debug, Clone, PartialEq)]
pub enum Homogeneous {
	Array(HomArray),
	Map(HomMap),
	Set(HomSet),
}

impl Homogeneous {
	pub fn wrap(value: Value) -> Result<Self> {
		Self::wrap_with(value, Limits::default())
	}

	pub fn wrap_with(value: Value, limits: Limits) -> Result<Self> {
		match value {
			Value::Array(_) => HomArray::with_limits(value, limits).map(Self::Array),
			Value::Map(_) => HomMap::with_limits(value, limits).map(Self::Map),
			Value::Set(_) => HomSet::with_limits(value, limits).map(Self::Set),
			other => Err(Error::ArgType(format!(
				"homogeneous wrapper expects an array, map or set\nreceived: {}",
				describe_with(&other, &limits)
			))),
		}
	}

	pub fn descriptor(&self) -> &Descriptor {
		match self {
			Self::Array(array) => array.descriptor(),
			Self::Map(map) => map.descriptor(),
			Self::Set(set) => set.descriptor(),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Self::Array(array) => array.len(),
			Self::Map(map) => map.len(),
			Self::Set(set) => set.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn into_value(self) -> Value {
		match self {
			Self::Array(array) => array.into_value(),
			Self::Map(map) => map.into_value(),
			Self::Set(set) => set.into_value(),
		}
	}
}

impl ToPrimitive for Homogeneous {
	fn to_primitive(&self, hint: Hint) -> Result<Value> {
		match self {
			Self::Array(array) => array.to_primitive(hint),
			Self::Map(map) => map.to_primitive(hint),
			Self::Set(set) => set.to_primitive(hint),
		}
	}
}

#[cfg(test)]
mod tests;
