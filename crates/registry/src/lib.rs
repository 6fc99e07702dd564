//! Overload tables: per-operation implementations selected by the runtime
//! shape of the argument.
//!
//! An [`Overload`] maps a dispatch key (by default [`Value::tag`]) to an
//! implementation. Implementations that are functions are invoked with the
//! argument; any other value is returned as is, so constants can be
//! overloaded too. [`Overload2`] does the same on the pair of keys of two
//! arguments.
//!
//! [`Value::tag`]: typegate_value::Value::tag

/// Binary dispatch on the keys of two arguments.
pub mod binary;
/// Unary dispatch.
pub mod overload;
/// Copy-on-write key table.
pub mod table;

pub use binary::Overload2;
pub use overload::{Overload, default_dispatch};
pub use table::Table;
