//! Runtime type discipline for dynamically typed values.
//!
//! | Crate | Provides |
//! |---|---|
//! | [`value`] | [`Value`], [`Descriptor`], [`describe`], the [`Error`] kinds |
//! | [`guard`] | [`Guard`], [`GuardedFn`], [`CallHistory`], the process-wide switch |
//! | [`registry`] | [`Overload`] and [`Overload2`] |
//! | [`container`] | [`HomArray`], [`HomMap`], [`HomSet`] |
//!
//! This crate adds algebraic type declarators ([`declare_type`],
//! [`declare_sum`]) and boxed primitive subtypes ([`Char`], [`Int`]).

pub mod adt;
pub mod boxed;

pub use adt::{ProductType, SumType, declare_sum, declare_type};
pub use boxed::{Char, Int};
pub use typegate_container::{self as container, HomArray, HomMap, HomSet, Homogeneous};
pub use typegate_guard::{
	self as guard, ArityMode, CallHistory, Guard, GuardConfig, GuardedFn, Switch, checking_enabled, set_checking,
};
pub use typegate_registry::{self as registry, Overload, Overload2};
pub use typegate_value::{
	self as value, Descriptor, Error, ErrorKind, Func, Hint, Object, Record, Result, ToPrimitive, Value, ValueMap,
	ValueSet, describe,
};

/// Glob import for the common surface.
pub mod prelude {
	pub use crate::{
		Char, Descriptor, Error, ErrorKind, Func, Guard, HomArray, HomMap, HomSet, Int, Overload, Overload2, Record,
		Result, Value, declare_sum, declare_type, describe,
	};
}
