//! Primitive coercion boundary.
//!
//! Every place that would implicitly turn a value into a primitive goes
//! through [`ToPrimitive`]. Plain values convert; disciplined wrappers refuse.

use std::fmt;

use crate::describe::describe;
use crate::error::{Error, Result};
use crate::value::Value;

/// Preferred primitive kind for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hint {
	#[default]
	Default,
	Number,
	String,
}

impl fmt::Display for Hint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Default => "default",
			Self::Number => "number",
			Self::String => "string",
		})
	}
}

pub trait ToPrimitive {
	fn to_primitive(&self, hint: Hint) -> Result<Value>;
}

/// Error for a wrapper described as `what` refusing a conversion.
pub fn coercion_error(what: impl fmt::Display, hint: Hint) -> Error {
	Error::TypeCoercion(format!(
		"illegal implicit conversion of {what} to a primitive (hint: {hint})\nuse an explicit accessor instead"
	))
}

impl ToPrimitive for Value {
	fn to_primitive(&self, hint: Hint) -> Result<Value> {
		match self {
			Value::Undefined
			| Value::Null
			| Value::Bool(_)
			| Value::Number(_)
			| Value::String(_)
			| Value::Symbol(_) => Ok(self.clone()),
			Value::Object(obj) if !obj.is_coercible() => Err(coercion_error(describe(self), hint)),
			other => Ok(Value::String(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ErrorKind, Object, Record};

	#[test]
	fn primitives_convert_to_themselves() {
		assert_eq!(Value::from(3).to_primitive(Hint::Number).unwrap(), Value::Number(3.0));
		assert_eq!(Value::from("a").to_primitive(Hint::Default).unwrap(), Value::from("a"));
	}

	#[test]
	fn plain_containers_degrade_to_strings() {
		let arr = Value::array(vec![Value::from(1), Value::from(2)]);
		assert_eq!(arr.to_primitive(Hint::String).unwrap(), Value::from("1,2"));
		let rec = Value::record(Record::new());
		assert_eq!(rec.to_primitive(Hint::Default).unwrap(), Value::from("[object Object]"));
	}

	#[test]
	fn forbidden_objects_refuse() {
		let obj = Value::object(
			Object::new("Sum", Record::new().with("run", Value::from(1)))
				.with_descriptor("Sum<Number>")
				.forbid_coercion(),
		);
		let err = obj.to_primitive(Hint::Number).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::TypeCoercion);
		assert!(err.message().contains("Sum<Number>"), "got: {err}");
		assert!(err.message().contains("hint: number"), "got: {err}");
	}
}
