//! Dynamic values and their structural type descriptors.
//!
//! Everything the guard layer checks flows through this crate: a [`Value`] is
//! described into a [`Descriptor`], and every rejection is one of the
//! [`Error`] kinds.

/// Primitive coercion boundary.
pub mod coerce;
/// Insertion-ordered map and set keyed by SameValueZero.
pub mod collections;
/// Structural type descriptors.
pub mod describe;
/// Error taxonomy shared by every checking layer.
pub mod error;
/// Insertion-ordered string-keyed record.
pub mod record;
/// Runtime value model.
pub mod value;

pub use coerce::{Hint, ToPrimitive, coercion_error};
pub use collections::{ValueMap, ValueSet};
pub use describe::{Descriptor, Elements, Entries, Fields, Limits, describe, describe_with};
pub use error::{Error, ErrorKind, Result};
pub use record::Record;
pub use value::{Func, FuncBody, Object, Symbol, Value, same_value_zero};
