//! Structural type descriptors.
//!
//! # Role
//!
//! [`describe`] maps any [`Value`] to a [`Descriptor`] whose `Display` form is
//! the canonical descriptor string (`"Number"`, `"[String]"`,
//! `"{x: Number, y: String}"`, `"Map<String, Number>"`, ...).
//!
//! # Invariants
//!
//! - Description is total and deterministic for a value's current state.
//! - Containers whose elements share one descriptor collapse to a single
//!   parameterized form.
//! - Mixed elements are listed positionally up to the configured ceiling and
//!   collapse to the `?` placeholder beyond it.
//! - Nesting below [`Limits::max_depth`] describes as `?`.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use smallvec::SmallVec;

use crate::value::Value;

/// Ceilings bounding descriptor computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
	/// Largest array or tuple whose mixed elements are listed positionally.
	pub max_positional: usize,
	/// Largest record whose mixed fields are listed by key.
	pub max_record_keys: usize,
	/// Deepest container nesting that is described structurally.
	pub max_depth: usize,
}

impl Default for Limits {
	fn default() -> Self {
		Self {
			max_positional: 8,
			max_record_keys: 16,
			max_depth: 16,
		}
	}
}

/// Element shape of arrays and sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Elements {
	Empty,
	Uniform(Box<Descriptor>),
	Positional(Vec<Descriptor>),
}

/// Field shape of records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fields {
	Empty,
	Uniform(Box<Descriptor>),
	Named(Vec<(String, Descriptor)>),
}

/// Entry shape of maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entries {
	Empty,
	Uniform(Box<Descriptor>, Box<Descriptor>),
	Mixed,
}

/// Structural type of a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Descriptor {
	Undefined,
	NaN,
	Infinity,
	Null,
	Boolean,
	Number,
	String,
	Symbol,
	/// Function with its declared name.
	Function(Arc<str>),
	/// Attached descriptor or constructor tag, reported verbatim.
	Tagged(Arc<str>),
	/// The `?` placeholder.
	Unknown,
	Array(Elements),
	Tuple(Vec<Descriptor>),
	Record(Fields),
	Map(Entries),
	Set(Elements),
}

impl Descriptor {
	/// Markers the guard treats as type errors.
	pub fn is_invalid(&self) -> bool {
		matches!(self, Self::Undefined | Self::NaN | Self::Infinity)
	}

	/// Whether the `?` placeholder occurs anywhere in this descriptor.
	pub fn contains_unknown(&self) -> bool {
		match self {
			Self::Unknown => true,
			Self::Array(elems) | Self::Set(elems) => match elems {
				Elements::Empty => false,
				Elements::Uniform(elem) => elem.contains_unknown(),
				Elements::Positional(elems) => elems.iter().any(Self::contains_unknown),
			},
			Self::Tuple(elems) => elems.iter().any(Self::contains_unknown),
			Self::Record(fields) => match fields {
				Fields::Empty => false,
				Fields::Uniform(field) => field.contains_unknown(),
				Fields::Named(fields) => fields.iter().any(|(_, d)| d.contains_unknown()),
			},
			Self::Map(entries) => match entries {
				Entries::Empty => false,
				Entries::Uniform(k, v) => k.contains_unknown() || v.contains_unknown(),
				Entries::Mixed => true,
			},
			_ => false,
		}
	}

	/// Whether this container descriptor admits more than one element type.
	pub fn is_heterogeneous(&self) -> bool {
		matches!(
			self,
			Self::Array(Elements::Positional(_)) | Self::Set(Elements::Positional(_)) | Self::Record(Fields::Named(_))
		) || self.contains_unknown()
	}

	/// Element descriptor of a single-parameter form (`[T]`, `Set<T>`, `{T}`).
	pub fn element(&self) -> Option<&Descriptor> {
		match self {
			Self::Array(Elements::Uniform(elem)) | Self::Set(Elements::Uniform(elem)) | Self::Record(Fields::Uniform(elem)) => {
				Some(elem)
			}
			_ => None,
		}
	}

	/// `[T]`
	pub fn array_of(elem: Descriptor) -> Self {
		Self::Array(Elements::Uniform(Box::new(elem)))
	}

	/// `Set<T>`
	pub fn set_of(elem: Descriptor) -> Self {
		Self::Set(Elements::Uniform(Box::new(elem)))
	}

	/// `Map<K, V>`
	pub fn map_of(key: Descriptor, value: Descriptor) -> Self {
		Self::Map(Entries::Uniform(Box::new(key), Box::new(value)))
	}
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Descriptor]) -> fmt::Result {
	for (i, item) in items.iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item}")?;
	}
	Ok(())
}

impl fmt::Display for Descriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Undefined => f.write_str("Undefined"),
			Self::NaN => f.write_str("NaN"),
			Self::Infinity => f.write_str("Infinity"),
			Self::Null => f.write_str("Null"),
			Self::Boolean => f.write_str("Boolean"),
			Self::Number => f.write_str("Number"),
			Self::String => f.write_str("String"),
			Self::Symbol => f.write_str("Symbol"),
			Self::Function(name) => write!(f, "λ{name}"),
			Self::Tagged(tag) => f.write_str(tag),
			Self::Unknown => f.write_str("?"),
			Self::Array(elems) => {
				f.write_str("[")?;
				match elems {
					Elements::Empty => {}
					Elements::Uniform(elem) => write!(f, "{elem}")?,
					Elements::Positional(elems) => write_list(f, elems)?,
				}
				f.write_str("]")
			}
			Self::Tuple(elems) => {
				f.write_str("Tuple<")?;
				write_list(f, elems)?;
				f.write_str(">")
			}
			Self::Record(fields) => {
				f.write_str("{")?;
				match fields {
					Fields::Empty => {}
					Fields::Uniform(field) => write!(f, "{field}")?,
					Fields::Named(fields) => {
						for (i, (key, ty)) in fields.iter().enumerate() {
							if i > 0 {
								f.write_str(", ")?;
							}
							write!(f, "{key}: {ty}")?;
						}
					}
				}
				f.write_str("}")
			}
			Self::Map(entries) => match entries {
				Entries::Empty => f.write_str("Map<>"),
				Entries::Uniform(k, v) => write!(f, "Map<{k}, {v}>"),
				Entries::Mixed => f.write_str("Map<?>"),
			},
			Self::Set(elems) => {
				f.write_str("Set<")?;
				match elems {
					Elements::Empty => {}
					Elements::Uniform(elem) => write!(f, "{elem}")?,
					Elements::Positional(elems) => write_list(f, elems)?,
				}
				f.write_str(">")
			}
		}
	}
}

/// Describes `value` under the default [`Limits`].
pub fn describe(value: &Value) -> Descriptor {
	describe_with(value, &Limits::default())
}

/// Describes `value` under explicit ceilings.
pub fn describe_with(value: &Value, limits: &Limits) -> Descriptor {
	Describer { limits }.describe(value, 0)
}

struct Describer<'a> {
	limits: &'a Limits,
}

impl Describer<'_> {
	fn describe(&self, value: &Value, depth: usize) -> Descriptor {
		match value {
			Value::Undefined => Descriptor::Undefined,
			Value::Null => Descriptor::Null,
			Value::Bool(_) => Descriptor::Boolean,
			Value::Number(n) if n.is_nan() => Descriptor::NaN,
			Value::Number(n) if n.is_infinite() => Descriptor::Infinity,
			Value::Number(_) => Descriptor::Number,
			Value::String(_) => Descriptor::String,
			Value::Symbol(_) => Descriptor::Symbol,
			Value::Function(func) => Descriptor::Function(Arc::from(func.name())),
			Value::Object(obj) => Descriptor::Tagged(Arc::from(obj.descriptor().unwrap_or(obj.tag()))),
			_ if depth >= self.limits.max_depth => Descriptor::Unknown,
			Value::Array(items) => Descriptor::Array(self.elements(items, depth, true)),
			Value::Tuple(items) if items.len() > self.limits.max_positional => Descriptor::Tuple(vec![Descriptor::Unknown]),
			Value::Tuple(items) => Descriptor::Tuple(items.iter().map(|item| self.describe(item, depth + 1)).collect()),
			Value::Record(record) => Descriptor::Record(self.fields(record, depth)),
			Value::Map(map) => Descriptor::Map(self.entries(map, depth)),
			Value::Set(set) => Descriptor::Set(self.elements(set.iter(), depth, false)),
		}
	}

	/// Past the positional ceiling the scan stops at the first mismatch.
	fn elements<'v, I>(&self, items: I, depth: usize, positional: bool) -> Elements
	where
		I: IntoIterator<Item = &'v Value>,
		I::IntoIter: ExactSizeIterator,
	{
		let items = items.into_iter();
		let len = items.len();
		let listable = positional && len <= self.limits.max_positional;
		let mut seen: SmallVec<[Descriptor; 8]> = SmallVec::new();
		let mut uniform = true;
		for item in items {
			let desc = self.describe(item, depth + 1);
			if seen.first().is_some_and(|first| *first != desc) {
				uniform = false;
				if !listable {
					return Elements::Uniform(Box::new(Descriptor::Unknown));
				}
			}
			seen.push(desc);
		}
		match seen.len() {
			0 => Elements::Empty,
			_ if uniform => Elements::Uniform(Box::new(seen.swap_remove(0))),
			_ => Elements::Positional(seen.into_vec()),
		}
	}

	fn fields(&self, record: &crate::Record, depth: usize) -> Fields {
		if record.is_empty() {
			return Fields::Empty;
		}
		let listable = record.len() <= self.limits.max_record_keys;
		let mut seen: Vec<(String, Descriptor)> = Vec::with_capacity(record.len());
		let mut uniform = true;
		for (key, item) in record {
			let desc = self.describe(item, depth + 1);
			if seen.first().is_some_and(|(_, first)| *first != desc) {
				uniform = false;
				if !listable {
					return Fields::Uniform(Box::new(Descriptor::Unknown));
				}
			}
			seen.push((key.to_owned(), desc));
		}
		if uniform {
			Fields::Uniform(Box::new(seen.swap_remove(0).1))
		} else {
			Fields::Named(seen)
		}
	}

	fn entries(&self, map: &crate::ValueMap, depth: usize) -> Entries {
		let mut iter = map.iter();
		let Some((key, value)) = iter.next() else {
			return Entries::Empty;
		};
		let key_desc = self.describe(key, depth + 1);
		let value_desc = self.describe(value, depth + 1);
		for (k, v) in iter {
			if self.describe(k, depth + 1) != key_desc || self.describe(v, depth + 1) != value_desc {
				return Entries::Mixed;
			}
		}
		Entries::Uniform(Box::new(key_desc), Box::new(value_desc))
	}
}
