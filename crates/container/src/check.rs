use tracing::debug;
use typegate_value::{Descriptor, Elements, Entries, Error, Limits, Result, Value, describe_with};

/// Describes `value` as the fixed descriptor of a `kind` wrapper.
pub(crate) fn fixed_descriptor(kind: &str, value: &Value, limits: &Limits) -> Result<Descriptor> {
	let desc = describe_with(value, limits);
	let empty = match &desc {
		Descriptor::Array(elems) | Descriptor::Set(elems) => matches!(elems, Elements::Empty),
		Descriptor::Map(entries) => matches!(entries, Entries::Empty),
		_ => false,
	};
	if empty {
		return Err(Error::ArgType(format!(
			"{kind} cannot fix an element type from an empty container: {desc}\nuse {kind}::empty with an explicit element type"
		)));
	}
	if desc.is_heterogeneous() {
		debug!(kind, %desc, "heterogeneous container rejected");
		return Err(Error::ArgType(format!("{kind} requires a homogeneous container\nreceived: {desc}")));
	}
	Ok(desc)
}

pub(crate) fn wrong_variant(kind: &str, expected: &str, value: &Value, limits: &Limits) -> Error {
	Error::ArgType(format!(
		"{kind} expects {expected}\nreceived: {}",
		describe_with(value, limits)
	))
}

/// Rejects a write whose singleton descriptor differs from the fixed one.
pub(crate) fn ensure_matches(kind: &str, fixed: &Descriptor, candidate: Descriptor) -> Result<()> {
	if *fixed == candidate {
		return Ok(());
	}
	debug!(kind, expected = %fixed, received = %candidate, "off-type write rejected");
	Err(Error::ArgType(format!("{kind} expected {fixed}, received {candidate}")))
}

/// Rejects an explicit element descriptor no value could satisfy.
pub(crate) fn concrete_element(kind: &str, element: &Descriptor) -> Result<()> {
	if element.is_invalid() || element.contains_unknown() {
		debug!(kind, %element, "element descriptor rejected");
		return Err(Error::ArgType(format!(
			"{kind}::empty needs a concrete element type\nreceived: {element}"
		)));
	}
	Ok(())
}
