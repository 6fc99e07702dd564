//! Boxed primitive subtypes.
//!
//! [`Char`] and [`Int`] narrow `String` and `Number`. Their value forms are
//! tagged objects that refuse implicit conversion; the payload is reached
//! through [`Char::get`] and [`Int::get`] only.

use std::fmt;

use typegate_value::{Error, Hint, Object, Record, Result, ToPrimitive, Value, coercion_error, describe};

const PAYLOAD: &str = "value";

/// Largest integer a `Number` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A string of exactly one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Char(char);

impl Char {
	pub const TAG: &'static str = "Char";

	pub fn new(s: &str) -> Result<Self> {
		let mut chars = s.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(Self(c)),
			_ => Err(Error::ArgValue(format!(
				"Char expects exactly one character, received {s:?}"
			))),
		}
	}

	pub fn get(&self) -> char {
		self.0
	}

	pub fn from_value(value: &Value) -> Result<Self> {
		match payload(value, Self::TAG).and_then(Value::as_str) {
			Some(s) => Self::new(s),
			None => Err(not_boxed(Self::TAG, value)),
		}
	}
}

impl fmt::Display for Char {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Char({:?})", self.0)
	}
}

impl From<Char> for Value {
	fn from(c: Char) -> Self {
		boxed(Char::TAG, Value::string(c.0.to_string()))
	}
}

impl ToPrimitive for Char {
	fn to_primitive(&self, hint: Hint) -> Result<Value> {
		Err(coercion_error(self, hint))
	}
}

/// An integral `Number` within the exactly representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Int(i64);

impl Int {
	pub const TAG: &'static str = "Int";

	pub fn new(n: f64) -> Result<Self> {
		if !n.is_finite() || n.fract() != 0.0 || n.abs() > MAX_SAFE_INTEGER {
			return Err(Error::ArgValue(format!("Int expects a finite integral number, received {n}")));
		}
		Ok(Self(n as i64))
	}

	pub fn get(&self) -> i64 {
		self.0
	}

	pub fn from_value(value: &Value) -> Result<Self> {
		match payload(value, Self::TAG).and_then(Value::as_number) {
			Some(n) => Self::new(n),
			None => Err(not_boxed(Self::TAG, value)),
		}
	}
}

impl fmt::Display for Int {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Int({})", self.0)
	}
}

impl From<Int> for Value {
	fn from(n: Int) -> Self {
		boxed(Int::TAG, Value::Number(n.0 as f64))
	}
}

impl ToPrimitive for Int {
	fn to_primitive(&self, hint: Hint) -> Result<Value> {
		Err(coercion_error(self, hint))
	}
}

fn boxed(tag: &'static str, payload: Value) -> Value {
	Value::object(Object::new(tag, Record::new().with(PAYLOAD, payload)).forbid_coercion())
}

fn payload<'v>(value: &'v Value, tag: &str) -> Option<&'v Value> {
	value
		.as_object()
		.filter(|obj| obj.tag() == tag)
		.and_then(|obj| obj.field(PAYLOAD))
}

fn not_boxed(tag: &str, value: &Value) -> Error {
	Error::ArgType(format!("expected a {tag}\nreceived: {}", describe(value)))
}
