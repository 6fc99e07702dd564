use std::fmt;

use thiserror::Error;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	ArgType,
	ArgValue,
	Arity,
	ReturnType,
	TypeCoercion,
	Overload,
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::ArgType => "ArgTypeError",
			Self::ArgValue => "ArgValueError",
			Self::Arity => "ArityError",
			Self::ReturnType => "ReturnTypeError",
			Self::TypeCoercion => "TypeCoercionError",
			Self::Overload => "OverloadError",
		};
		f.write_str(name)
	}
}

/// Failures raised by the type discipline layer.
///
/// Every variant carries a multi-line message meant for a human reading a
/// failure during development. The kind is the only structured part.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// An argument has an invalid type, or a homogeneous container insertion
	/// would change the element type.
	#[error("ArgTypeError\n{0}")]
	ArgType(String),

	/// A value is well-typed but semantically invalid.
	#[error("ArgValueError\n{0}")]
	ArgValue(String),

	/// Declared parameter count does not match the call site.
	#[error("ArityError\n{0}")]
	Arity(String),

	/// A guarded call produced a value with an invalid type.
	#[error("ReturnTypeError\n{0}")]
	ReturnType(String),

	/// A disciplined wrapper was asked for an implicit primitive conversion.
	#[error("TypeCoercionError\n{0}")]
	TypeCoercion(String),

	/// No implementation is registered for a dispatch key.
	#[error("OverloadError\n{0}")]
	Overload(String),
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::ArgType(_) => ErrorKind::ArgType,
			Self::ArgValue(_) => ErrorKind::ArgValue,
			Self::Arity(_) => ErrorKind::Arity,
			Self::ReturnType(_) => ErrorKind::ReturnType,
			Self::TypeCoercion(_) => ErrorKind::TypeCoercion,
			Self::Overload(_) => ErrorKind::Overload,
		}
	}

	/// The message without the kind header.
	pub fn message(&self) -> &str {
		match self {
			Self::ArgType(msg)
			| Self::ArgValue(msg)
			| Self::Arity(msg)
			| Self::ReturnType(msg)
			| Self::TypeCoercion(msg)
			| Self::Overload(msg) => msg,
		}
	}
}

/// Result type for checked operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
