use std::fmt;
use std::sync::Arc;

use crate::collections::{ValueMap, ValueSet};
use crate::error::Result;
use crate::record::Record;

/// Body of a [`Func`].
pub type FuncBody = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// Callable value: a display name, a declared parameter count and a body.
///
/// The declared count is what arity checks compare against; the body itself
/// may accept any slice.
#[derive(Clone)]
pub struct Func {
	name: Arc<str>,
	arity: usize,
	body: Arc<FuncBody>,
	trail: Option<Arc<[String]>>,
}

impl Func {
	pub fn new<F>(name: impl Into<Arc<str>>, arity: usize, body: F) -> Self
	where
		F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			arity,
			body: Arc::new(body),
			trail: None,
		}
	}

	/// Declared name; may be empty for anonymous functions.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared parameter count.
	pub fn arity(&self) -> usize {
		self.arity
	}

	pub fn call(&self, args: &[Value]) -> Result<Value> {
		(self.body)(args)
	}

	/// Call records of the guarded chain this function continues, if any.
	pub fn call_trail(&self) -> Option<&[String]> {
		self.trail.as_deref()
	}

	/// Whether this function already checks its own calls.
	pub fn is_guarded(&self) -> bool {
		self.trail.is_some()
	}

	#[doc(hidden)]
	pub fn with_trail(mut self, trail: Arc<[String]>) -> Self {
		self.trail = Some(trail);
		self
	}

	/// Whether both handles share one body.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.body, &other.body)
	}
}

impl fmt::Debug for Func {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Func")
			.field("name", &self.name)
			.field("arity", &self.arity)
			.finish_non_exhaustive()
	}
}

impl PartialEq for Func {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

/// Unique symbol; two symbols are equal only if they are the same symbol.
#[derive(Clone, Debug)]
pub struct Symbol {
	description: Arc<str>,
}

impl Symbol {
	pub fn new(description: impl Into<Arc<str>>) -> Self {
		Self {
			description: description.into(),
		}
	}

	pub fn description(&self) -> &str {
		&self.description
	}
}

impl PartialEq for Symbol {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.description, &other.description)
	}
}

/// Tagged object produced by a constructor.
///
/// The tag names the constructor. An attached descriptor overrides structural
/// description, and objects may refuse implicit primitive conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
	tag: Arc<str>,
	fields: Record,
	descriptor: Option<Arc<str>>,
	coercible: bool,
}

impl Object {
	pub fn new(tag: impl Into<Arc<str>>, fields: Record) -> Self {
		Self {
			tag: tag.into(),
			fields,
			descriptor: None,
			coercible: true,
		}
	}

	pub fn with_descriptor(mut self, descriptor: impl Into<Arc<str>>) -> Self {
		self.descriptor = Some(descriptor.into());
		self
	}

	pub fn forbid_coercion(mut self) -> Self {
		self.coercible = false;
		self
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn fields(&self) -> &Record {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}

	pub fn descriptor(&self) -> Option<&str> {
		self.descriptor.as_deref()
	}

	pub fn is_coercible(&self) -> bool {
		self.coercible
	}
}

/// Runtime value checked by the guard layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	#[default]
	Undefined,
	Null,
	Bool(bool),
	Number(f64),
	String(String),
	Symbol(Symbol),
	Function(Func),
	Array(Vec<Value>),
	/// Frozen positional array.
	Tuple(Vec<Value>),
	Record(Record),
	Map(ValueMap),
	Set(ValueSet),
	Object(Box<Object>),
}

impl Value {
	pub fn number(val: f64) -> Self {
		Self::Number(val)
	}

	pub fn string(val: impl Into<String>) -> Self {
		Self::String(val.into())
	}

	pub fn array(vals: Vec<Value>) -> Self {
		Self::Array(vals)
	}

	pub fn tuple(vals: Vec<Value>) -> Self {
		Self::Tuple(vals)
	}

	pub fn record(val: Record) -> Self {
		Self::Record(val)
	}

	pub fn map(val: ValueMap) -> Self {
		Self::Map(val)
	}

	pub fn set(val: ValueSet) -> Self {
		Self::Set(val)
	}

	pub fn object(val: Object) -> Self {
		Self::Object(Box::new(val))
	}

	pub fn function<F>(name: impl Into<Arc<str>>, arity: usize, body: F) -> Self
	where
		F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
	{
		Self::Function(Func::new(name, arity, body))
	}

	/// Cheap dispatch tag: the constructor name, or the function's own name.
	pub fn tag(&self) -> &str {
		match self {
			Self::Undefined => "Undefined",
			Self::Null => "Null",
			Self::Bool(_) => "Boolean",
			Self::Number(_) => "Number",
			Self::String(_) => "String",
			Self::Symbol(_) => "Symbol",
			Self::Function(func) => func.name(),
			Self::Array(_) => "Array",
			Self::Tuple(_) => "Tuple",
			Self::Record(_) => "Object",
			Self::Map(_) => "Map",
			Self::Set(_) => "Set",
			Self::Object(obj) => obj.tag(),
		}
	}

	pub fn is_function(&self) -> bool {
		matches!(self, Self::Function(_))
	}

	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(val) => Some(*val),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(val) => Some(val),
			_ => None,
		}
	}

	pub fn as_func(&self) -> Option<&Func> {
		match self {
			Self::Function(func) => Some(func),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(vals) => Some(vals),
			_ => None,
		}
	}

	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Self::Record(val) => Some(val),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Self::Object(obj) => Some(obj),
			_ => None,
		}
	}

	/// Invokes a function value; any other value is an argument-type error.
	pub fn call(&self, args: &[Value]) -> Result<Value> {
		match self {
			Self::Function(func) => func.call(args),
			other => Err(crate::Error::ArgType(format!(
				"cannot call a non-function value\nreceived: {}",
				crate::describe(other)
			))),
		}
	}
}

/// Key equality used by [`ValueMap`] and [`ValueSet`]: like `==`, except that
/// NaN equals NaN.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
	match (a, b) {
		(Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
		_ => a == b,
	}
}

impl fmt::Display for Value {
	/// Implicit string conversion of a plain value.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Undefined => f.write_str("undefined"),
			Self::Null => f.write_str("null"),
			Self::Bool(val) => write!(f, "{val}"),
			Self::Number(val) if val.is_nan() => f.write_str("NaN"),
			Self::Number(val) if val.is_infinite() => {
				f.write_str(if *val > 0.0 { "Infinity" } else { "-Infinity" })
			}
			Self::Number(val) => write!(f, "{val}"),
			Self::String(val) => f.write_str(val),
			Self::Symbol(sym) => write!(f, "Symbol({})", sym.description()),
			Self::Function(func) => write!(f, "function {}()", func.name()),
			Self::Array(vals) | Self::Tuple(vals) => {
				for (i, val) in vals.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					match val {
						Self::Undefined | Self::Null => {}
						other => write!(f, "{other}")?,
					}
				}
				Ok(())
			}
			Self::Record(_) => f.write_str("[object Object]"),
			Self::Map(_) => f.write_str("[object Map]"),
			Self::Set(_) => f.write_str("[object Set]"),
			Self::Object(obj) => write!(f, "[object {}]", obj.tag()),
		}
	}
}

impl From<bool> for Value {
	fn from(val: bool) -> Self {
		Self::Bool(val)
	}
}

impl From<f64> for Value {
	fn from(val: f64) -> Self {
		Self::Number(val)
	}
}

impl From<i32> for Value {
	fn from(val: i32) -> Self {
		Self::Number(f64::from(val))
	}
}

impl From<&str> for Value {
	fn from(val: &str) -> Self {
		Self::String(val.to_owned())
	}
}

impl From<String> for Value {
	fn from(val: String) -> Self {
		Self::String(val)
	}
}

impl From<Vec<Value>> for Value {
	fn from(vals: Vec<Value>) -> Self {
		Self::Array(vals)
	}
}

impl From<Record> for Value {
	fn from(val: Record) -> Self {
		Self::Record(val)
	}
}

impl From<ValueMap> for Value {
	fn from(val: ValueMap) -> Self {
		Self::Map(val)
	}
}

impl From<ValueSet> for Value {
	fn from(val: ValueSet) -> Self {
		Self::Set(val)
	}
}

impl From<Func> for Value {
	fn from(func: Func) -> Self {
		Self::Function(func)
	}
}

impl From<Object> for Value {
	fn from(obj: Object) -> Self {
		Self::Object(Box::new(obj))
	}
}

#[cfg(test)]
mod tests;
