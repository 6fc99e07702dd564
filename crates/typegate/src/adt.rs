//! Algebraic type declarations.
//!
//! A product type wraps a single payload; its instances describe as
//! `Name<PayloadDescriptor>`. A sum type has named cases carrying positional
//! values; its instances describe as the bare type name, and case analysis
//! goes through [`Guard::match_cases`].

use std::sync::Arc;

use tracing::debug;
use typegate_guard::Guard;
use typegate_value::{Error, Func, Object, Record, Result, Value, describe};

const PAYLOAD: &str = "run";
const CASE: &str = "case";
const VALUES: &str = "values";

fn check_name(kind: &str, name: &str) -> Result<()> {
	if name.chars().next().is_some_and(char::is_uppercase) {
		return Ok(());
	}
	Err(Error::ArgValue(format!(
		"{kind} name must start with an uppercase letter, received {name:?}"
	)))
}

/// Declares a single-constructor type.
pub fn declare_type(name: &str) -> Result<ProductType> {
	check_name("type", name)?;
	debug!(name, "product type declared");
	Ok(ProductType { name: Arc::from(name) })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductType {
	name: Arc<str>,
}

impl ProductType {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn construct(&self, payload: Value) -> Value {
		let descriptor = format!("{}<{}>", self.name, describe(&payload));
		Value::object(
			Object::new(self.name.clone(), Record::new().with(PAYLOAD, payload))
				.with_descriptor(descriptor)
				.forbid_coercion(),
		)
	}

	pub fn is_instance(&self, value: &Value) -> bool {
		value.as_object().is_some_and(|obj| obj.tag() == &*self.name)
	}

	/// Extracts the payload of an instance.
	pub fn run(&self, value: &Value) -> Result<Value> {
		value
			.as_object()
			.filter(|obj| obj.tag() == &*self.name)
			.and_then(|obj| obj.field(PAYLOAD))
			.cloned()
			.ok_or_else(|| {
				Error::ArgType(format!("{}.run expects a {} instance\nreceived: {}", self.name, self.name, describe(value)))
			})
	}

	/// The constructor as a one-argument function value.
	pub fn constructor(&self) -> Func {
		let ty = self.clone();
		Func::new(self.name.clone(), 1, move |args| {
			Ok(ty.construct(args.first().cloned().unwrap_or_default()))
		})
	}
}

/// Declares a type with the named cases.
pub fn declare_sum(name: &str, cases: &[&str]) -> Result<SumType> {
	check_name("type", name)?;
	if cases.is_empty() {
		return Err(Error::ArgValue(format!("sum type {name} needs at least one case")));
	}
	for (i, case) in cases.iter().enumerate() {
		check_name("case", case)?;
		if cases[..i].contains(case) {
			return Err(Error::ArgValue(format!("sum type {name} declares case {case} twice")));
		}
	}
	debug!(name, cases = ?cases, "sum type declared");
	Ok(SumType {
		name: Arc::from(name),
		cases: cases.iter().map(|case| Arc::from(*case)).collect(),
	})
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumType {
	name: Arc<str>,
	cases: Arc<[Arc<str>]>,
}

impl SumType {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn cases(&self) -> impl ExactSizeIterator<Item = &str> {
		self.cases.iter().map(|case| &**case)
	}

	/// Builds an instance of `case` holding `values`.
	pub fn case(&self, case: &str, values: Vec<Value>) -> Result<Value> {
		if !self.cases.iter().any(|known| &**known == case) {
			return Err(Error::ArgValue(format!(
				"{} has no case {case}\ncases: {}",
				self.name,
				self.cases().collect::<Vec<_>>().join(", ")
			)));
		}
		let fields = Record::new()
			.with(CASE, Value::string(case))
			.with(VALUES, Value::array(values));
		Ok(Value::object(
			Object::new(self.name.clone(), fields).with_descriptor(self.name.clone()).forbid_coercion(),
		))
	}

	/// Case name of an instance.
	pub fn case_of<'v>(&self, value: &'v Value) -> Option<&'v str> {
		value
			.as_object()
			.filter(|obj| obj.tag() == &*self.name)
			.and_then(|obj| obj.field(CASE))
			.and_then(Value::as_str)
	}

	/// Runs the handler in `cases` for the case of `value`.
	///
	/// A handler that is a function receives the case values as arguments;
	/// any other handler is returned as is.
	pub fn match_on(&self, guard: &Guard, value: &Value, cases: &Record) -> Result<Value> {
		let Some(case) = self.case_of(value) else {
			return Err(Error::ArgType(format!(
				"{} pattern match expects a {} instance\nreceived: {}",
				self.name,
				self.name,
				describe(value)
			)));
		};
		let values = value
			.as_object()
			.and_then(|obj| obj.field(VALUES))
			.and_then(Value::as_array)
			.unwrap_or_default();
		let required: Vec<&str> = self.cases().collect();
		guard.match_cases(&self.name, &required, cases, |cases| match cases.get(case) {
			Some(Value::Function(handler)) => handler.call(values),
			Some(constant) => Ok(constant.clone()),
			None => Err(Error::ArgValue(format!("{} pattern match is missing case {case}", self.name))),
		})
	}
}
