//! Overloads on two arguments.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use typegate_value::{Func, Result, Value};

use crate::overload::{Dispatch, default_dispatch, missing_instance};
use crate::table::Table;

/// Like [`Overload`](crate::Overload), keyed on the pair of dispatch keys.
#[derive(Clone)]
pub struct Overload2 {
	inner: Arc<Inner>,
}

struct Inner {
	name: Arc<str>,
	dispatch: Box<Dispatch>,
	table: Table<(String, String), Value>,
}

impl Overload2 {
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

	pub fn register(
		&self,
		left: impl Into<String>,
		right: impl Into<String>,
		implementation: impl Into<Value>,
	) -> &Self {
		let key = (left.into(), right.into());
		debug!(name = %self.inner.name, left = key.0, right = key.1, "binary overload registered");
		self.inner.table.insert(key, implementation.into());
		self
	}

	pub fn call(&self, x: &Value, y: &Value) -> Result<Value> {
		let key = ((self.inner.dispatch)(x), (self.inner.dispatch)(y));
		let Some(implementation) = self.inner.table.get(&key) else {
			let registered = self
				.inner
				.table
				.keys()
				.into_iter()
				.map(|(l, r)| format!("({l}, {r})"))
				.collect::<Vec<_>>();
			return Err(missing_instance(
				&self.inner.name,
				&format!("({}, {})", key.0, key.1),
				&[x, y],
				&registered,
			));
		};
		match implementation {
			Value::Function(func) => func.call(&[x.clone(), y.clone()]),
			constant => Ok(constant),
		}
	}

	pub fn contains(&self, left: &str, right: &str) -> bool {
		self.inner.table.contains(&(left.to_owned(), right.to_owned()))
	}

	pub fn len(&self) -> usize {
		self.inner.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.table.is_empty()
	}

	/// A two-argument function value that dispatches through this overload.
	pub fn as_func(&self) -> Func {
		let overload = self.clone();
		Func::new(self.inner.name.clone(), 2, move |args| {
			let x = args.first().cloned().unwrap_or_default();
			let y = args.get(1).cloned().unwrap_or_default();
			overload.call(&x, &y)
		})
	}
}

impl fmt::Debug for Overload2 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Overload2")
			.field("name", &self.inner.name)
			.field("len", &self.inner.table.len())
			.finish_non_exhaustive()
	}
}

impl From<Overload2> for Value {
	fn from(overload: Overload2) -> Self {
		Value::Function(overload.as_func())
	}
}
