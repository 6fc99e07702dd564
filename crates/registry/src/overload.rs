//! Unary overloads.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};
use typegate_value::{Error, Func, Result, Value, describe};

use crate::table::Table;

/// Computes the dispatch key of an argument.
pub type Dispatch = dyn Fn(&Value) -> String + Send + Sync;

/// Function name for callables, constructor tag otherwise.
pub fn default_dispatch(value: &Value) -> String {
	value.tag().to_owned()
}

/// A named operation with one implementation per dispatch key.
///
/// Cloning shares the table, so registrations through any handle are seen by
/// every other.
#[derive(Clone)]
pub struct Overload {
	inner: Arc<Inner>,
}

struct Inner {
	name: Arc<str>,
	dispatch: Box<Dispatch>,
	table: Table<String, Value>,
}

impl Overload {
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self::with_dispatch(name, default_dispatch)
	}

	pub fn with_dispatch<F>(name: impl Into<Arc<str>>, dispatch: F) -> Self
	where
		F: Fn(&Value) -> String + Send + Sync + 'static,
	{
		Self {
			inner: Arc::new(Inner {
				name: name.into(),
				dispatch: Box::new(dispatch),
				table: Table::new(),
			}),
		}
	}

	pub fn name(&self) -> &str {
		&self.inner.name
	}

	/// Registers `implementation` for `key`; a later registration for the
	/// same key replaces it.
	pub fn register(&self, key: impl Into<String>, implementation: impl Into<Value>) -> &Self {
		let key = key.into();
		let replaced = self.inner.table.insert(key.clone(), implementation.into());
		debug!(name = %self.inner.name, key, replaced = replaced.is_some(), "overload registered");
		self
	}

	pub fn key_of(&self, value: &Value) -> String {
		(self.inner.dispatch)(value)
	}

	/// Implementation registered for the key of `value`.
	pub fn resolve(&self, value: &Value) -> Result<Value> {
		let key = self.key_of(value);
		self.inner
			.table
			.get(&key)
			.ok_or_else(|| missing_instance(&self.inner.name, &key, &[value], &self.inner.table.keys()))
	}

	pub fn call(&self, x: &Value) -> Result<Value> {
		let implementation = self.resolve(x)?;
		trace!(name = %self.inner.name, key = %self.key_of(x), "overload dispatched");
		match implementation {
			Value::Function(func) => func.call(std::slice::from_ref(x)),
			constant => Ok(constant),
		}
	}

	pub fn contains(&self, key: &str) -> bool {
		self.inner.table.contains(key)
	}

	pub fn len(&self) -> usize {
		self.inner.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.table.is_empty()
	}

	/// Registered keys, sorted.
	pub fn keys(&self) -> Vec<String> {
		self.inner.table.keys()
	}

	/// A one-argument function value that dispatches through this overload.
	pub fn as_func(&self) -> Func {
		let overload = self.clone();
		Func::new(self.inner.name.clone(), 1, move |args| match args.first() {
			Some(x) => overload.call(x),
			None => overload.call(&Value::Undefined),
		})
	}
}

impl fmt::Debug for Overload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Overload")
			.field("name", &self.inner.name)
			.field("keys", &self.keys())
			.finish_non_exhaustive()
	}
}

impl From<Overload> for Value {
	fn from(overload: Overload) -> Self {
		Value::Function(overload.as_func())
	}
}

pub(crate) fn missing_instance(name: &str, key: &str, args: &[&Value], registered: &[String]) -> Error {
	let args = args.iter().map(|arg| describe(arg).to_string()).collect::<Vec<_>>();
	debug!(name, key, "no overload instance");
	Error::Overload(format!(
		"no instance of {name} for {key}\nargument: {}\nregistered: {}",
		args.join(", "),
		if registered.is_empty() {
			"none".to_owned()
		} else {
			registered.join(", ")
		},
	))
}
