//! Case-record validation for sum-type matching.

use tracing::debug;
use typegate_value::{Error, Record, Result, Value};

use crate::guard::Guard;

/// Checks that `cases` names exactly the `required` cases of `type_name`.
///
/// Reports the first missing case, else the first unexpected one.
pub fn check_cases(type_name: &str, required: &[&str], cases: &Record) -> Result<()> {
	let problem = if let Some(missing) = required.iter().find(|case| !cases.contains(case)) {
		format!("{type_name} pattern match is missing case {missing}")
	} else if let Some(extra) = cases.keys().find(|key| !required.contains(key)) {
		format!("{type_name} pattern match received unexpected case {extra}")
	} else {
		return Ok(());
	};
	debug!(type_name, %problem, "case record rejected");
	Err(Error::ArgValue(format!(
		"{problem}\nexpected cases: {}\nreceived cases: {}",
		required.join(", "),
		cases.keys().collect::<Vec<_>>().join(", "),
	)))
}

impl Guard {
	/// Runs a case match for `type_name` after validating the case record.
	///
	/// A function result is guarded under `"{type_name}.match"`.
	pub fn match_cases<F>(&self, type_name: &str, required: &[&str], cases: &Record, run: F) -> Result<Value>
	where
		F: FnOnce(&Record) -> Result<Value>,
	{
		if !self.is_enabled() {
			return run(cases);
		}
		check_cases(type_name, required, cases)?;
		match run(cases)? {
			Value::Function(func) => Ok(self.wrap(format!("{type_name}.match"), func).into()),
			other => Ok(other),
		}
	}
}

#[cfg(test)]
mod tests {
	use typegate_value::ErrorKind;

	use super::*;
	use crate::{CallHistory, Switch};

	fn cases(names: &[&str]) -> Record {
		names.iter().map(|name| (*name, Value::from(*name))).collect()
	}

	#[test]
	fn exact_case_set_passes() {
		assert!(check_cases("Option", &["Some", "None"], &cases(&["None", "Some"])).is_ok());
	}

	#[test]
	fn missing_case_is_named() {
		let err = check_cases("Option", &["Some", "None"], &cases(&["Some"])).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::ArgValue);
		assert!(err.message().contains("missing case None"), "got: {err}");
	}

	#[test]
	fn unexpected_case_is_named() {
		let err = check_cases("Option", &["Some", "None"], &cases(&["Some", "None", "Nope"])).unwrap_err();
		assert!(err.message().contains("unexpected case Nope"), "got: {err}");
	}

	#[test]
	fn function_results_are_guarded() {
		let guard = Guard::new(CallHistory::new()).with_switch(Switch::new(true));
		let result = guard
			.match_cases("Option", &["Some", "None"], &cases(&["Some", "None"]), |_| {
				Ok(Value::function("", 1, |args| Ok(args[0].clone())))
			})
			.unwrap();
		let func = result.as_func().unwrap();
		assert_eq!(func.name(), "Option.match");
		let err = func.call(&[Value::Undefined]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::ArgType);
	}

	#[test]
	fn disabled_switch_skips_validation() {
		let guard = Guard::new(CallHistory::new()).with_switch(Switch::new(false));
		let result = guard.match_cases("Option", &["Some", "None"], &cases(&["Some"]), |_| Ok(Value::from(1)));
		assert_eq!(result.unwrap(), Value::from(1));
	}
}
