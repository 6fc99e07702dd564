//! Guarded function wrappers.
//!
//! # Role
//!
//! [`Guard`] holds the shared state every wrapper needs (call history,
//! switch, descriptor limits) and builds [`GuardedFn`]s. A guarded call runs
//! the checks in a fixed order: arity, argument types, invocation, return
//! type. A function result continues the chain as a new guarded function;
//! any other result completes the call and is recorded in the history.
//!
//! # Invariants
//!
//! - Only completed calls reach the [`CallHistory`]; intermediate steps of a
//!   curried chain are kept in the continuation's log instead.
//! - The raw function always receives the raw arguments.
//! - With the switch off, no check runs and nothing is recorded.
//! - A result that is already guarded is returned as is, so one logical call
//!   is checked and recorded once.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, trace};
use typegate_value::{Descriptor, Error, Func, Limits, Result, Value, describe_with};

use crate::config::GuardConfig;
use crate::diagnostic::{call_record, ordinal, with_context};
use crate::history::CallHistory;
use crate::switch::Switch;

/// How the declared parameter count is compared to the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArityMode {
	/// Argument count must equal the declared count.
	#[default]
	Fixed,
	/// Argument count must be at least the declared count.
	Variadic,
}

/// Factory for guarded functions sharing one history and switch.
#[derive(Clone, Debug)]
pub struct Guard {
	history: CallHistory,
	switch: Switch,
	limits: Limits,
}

impl Guard {
	/// A guard recording into `history`, controlled by the process-wide switch.
	pub fn new(history: CallHistory) -> Self {
		Self {
			history,
			switch: Switch::global(),
			limits: Limits::default(),
		}
	}

	/// Builds a guard from `config`.
	///
	/// `config.enabled` seeds the process-wide switch only when nothing has
	/// created it yet; an existing switch keeps its state.
	pub fn from_config(config: &GuardConfig) -> Self {
		Self {
			history: CallHistory::with_capacity(config.history_capacity),
			switch: Switch::init_global(config.enabled),
			limits: config.limits,
		}
	}

	pub fn with_switch(mut self, switch: Switch) -> Self {
		self.switch = switch;
		self
	}

	pub fn with_limits(mut self, limits: Limits) -> Self {
		self.limits = limits;
		self
	}

	pub fn history(&self) -> &CallHistory {
		&self.history
	}

	pub fn switch(&self) -> &Switch {
		&self.switch
	}

	pub fn limits(&self) -> &Limits {
		&self.limits
	}

	pub fn is_enabled(&self) -> bool {
		self.switch.is_enabled()
	}

	pub fn describe(&self, value: &Value) -> Descriptor {
		describe_with(value, &self.limits)
	}

	/// Wraps `func` with exact arity checking.
	pub fn wrap(&self, name: impl Into<Arc<str>>, func: Func) -> GuardedFn {
		self.wrap_with(name, func, ArityMode::Fixed)
	}

	/// Wraps `func` with minimum arity checking.
	pub fn wrap_variadic(&self, name: impl Into<Arc<str>>, func: Func) -> GuardedFn {
		self.wrap_with(name, func, ArityMode::Variadic)
	}

	pub fn wrap_with(&self, name: impl Into<Arc<str>>, func: Func, mode: ArityMode) -> GuardedFn {
		let name = name.into();
		debug!(name = %name, arity = func.arity(), ?mode, "guarding function");
		GuardedFn {
			guard: self.clone(),
			name,
			func,
			mode,
			step: 1,
			log: Arc::default(),
		}
	}
}

impl Default for Guard {
	fn default() -> Self {
		Self::new(CallHistory::new())
	}
}

/// A function whose every call is checked.
#[derive(Clone, Debug)]
pub struct GuardedFn {
	guard: Guard,
	name: Arc<str>,
	func: Func,
	mode: ArityMode,
	step: usize,
	log: Arc<[String]>,
}

impl GuardedFn {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn mode(&self) -> ArityMode {
		self.mode
	}

	/// 1-based position of this function within its curried chain.
	pub fn step(&self) -> usize {
		self.step
	}

	/// Call records of the previous steps of the chain.
	pub fn log(&self) -> &[String] {
		&self.log
	}

	pub fn raw(&self) -> &Func {
		&self.func
	}

	pub fn call(&self, args: &[Value]) -> Result<Value> {
		if !self.guard.is_enabled() {
			return self.func.call(args);
		}

		self.check_arity(args.len())?;

		let arg_types: SmallVec<[Descriptor; 4]> = args.iter().map(|arg| self.guard.describe(arg)).collect();
		if let Some((idx, desc)) = arg_types.iter().enumerate().find(|(_, desc)| desc.is_invalid()) {
			return Err(self.arg_type_error(idx, desc, &arg_types));
		}

		let result = self.func.call(args)?;
		let record = call_record(&self.name, &arg_types);

		let ret_type = self.guard.describe(&result);
		if ret_type.is_invalid() {
			return Err(self.return_type_error(&ret_type, &record));
		}

		match result {
			Value::Function(next) if next.is_guarded() => {
				trace!(name = %self.name, step = self.step, record = %record, "guarded call returned a guarded function");
				Ok(Value::Function(next))
			}
			Value::Function(next) => {
				trace!(name = %self.name, step = self.step, record = %record, "guarded call continues");
				Ok(Value::Function(self.continuation(next, record).into_func()))
			}
			result => {
				trace!(name = %self.name, step = self.step, record = %record, "guarded call completed");
				self.guard.history.record(record);
				Ok(result)
			}
		}
	}

	/// Converts into a plain function value that still checks every call and
	/// exposes the chain log through [`Func::call_trail`].
	pub fn into_func(self) -> Func {
		let name = self.name.clone();
		let arity = self.func.arity();
		let trail = self.log.clone();
		Func::new(name, arity, move |args| self.call(args)).with_trail(trail)
	}

	fn continuation(&self, next: Func, record: String) -> GuardedFn {
		let name = if next.name().is_empty() {
			self.name.clone()
		} else {
			Arc::from(next.name())
		};
		let mut log = Vec::with_capacity(self.log.len() + 1);
		log.extend_from_slice(&self.log);
		log.push(record);
		GuardedFn {
			guard: self.guard.clone(),
			name,
			func: next,
			mode: self.mode,
			step: self.step + 1,
			log: log.into(),
		}
	}

	fn check_arity(&self, received: usize) -> Result<()> {
		let declared = self.func.arity();
		let ok = match self.mode {
			ArityMode::Fixed => received == declared,
			ArityMode::Variadic => received >= declared,
		};
		if ok {
			return Ok(());
		}
		let expected = match self.mode {
			ArityMode::Fixed => format!("{declared}"),
			ArityMode::Variadic => format!("at least {declared}"),
		};
		debug!(name = %self.name, declared, received, "arity check failed");
		Err(Error::Arity(self.context(format!(
			"{name} expects {expected} argument(s), received {received}\nin the {call} call",
			name = self.name,
			call = ordinal(self.step),
		))))
	}

	fn arg_type_error(&self, idx: usize, desc: &Descriptor, arg_types: &[Descriptor]) -> Error {
		debug!(name = %self.name, position = idx + 1, %desc, "argument type check failed");
		Error::ArgType(self.context(format!(
			"{name} received an invalid argument\n{pos} argument: {desc}\ncall: {record}\nin the {call} call",
			name = self.name,
			pos = ordinal(idx + 1),
			record = call_record(&self.name, arg_types),
			call = ordinal(self.step),
		)))
	}

	fn return_type_error(&self, desc: &Descriptor, record: &str) -> Error {
		debug!(name = %self.name, %desc, "return type check failed");
		Error::ReturnType(self.context(format!(
			"{name} returned an invalid value: {desc}\ncall: {record}\nin the {call} call",
			name = self.name,
			call = ordinal(self.step),
		)))
	}

	fn context(&self, msg: String) -> String {
		with_context(msg, &self.log, &self.guard.history.entries())
	}
}

impl From<GuardedFn> for Value {
	fn from(guarded: GuardedFn) -> Self {
		Value::Function(guarded.into_func())
	}
}

impl From<GuardedFn> for Func {
	fn from(guarded: GuardedFn) -> Self {
		guarded.into_func()
	}
}
