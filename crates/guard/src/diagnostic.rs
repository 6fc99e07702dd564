use std::fmt::Write;

use typegate_value::Descriptor;

/// `1st`, `2nd`, `3rd`, `4th`, ..., `11th`, ..., `21st`
pub(crate) fn ordinal(n: usize) -> String {
	let suffix = match (n % 10, n % 100) {
		(_, 11..=13) => "th",
		(1, _) => "st",
		(2, _) => "nd",
		(3, _) => "rd",
		_ => "th",
	};
	format!("{n}{suffix}")
}

/// `name(T1, T2, ...)`
pub(crate) fn call_record(name: &str, args: &[Descriptor]) -> String {
	let mut out = String::with_capacity(name.len() + 2 + args.len() * 8);
	out.push_str(name);
	out.push('(');
	for (i, arg) in args.iter().enumerate() {
		if i > 0 {
			out.push_str(", ");
		}
		let _ = write!(out, "{arg}");
	}
	out.push(')');
	out
}

/// Appends the chain log and the recent call history to `msg`.
pub(crate) fn with_context(mut msg: String, log: &[String], recent: &[String]) -> String {
	if !log.is_empty() {
		msg.push_str("\n\ncall log:");
		for entry in log {
			let _ = write!(msg, "\n  {entry}");
		}
	}
	if !recent.is_empty() {
		msg.push_str("\n\nrecent calls:");
		for entry in recent {
			let _ = write!(msg, "\n  {entry}");
		}
	}
	msg
}
