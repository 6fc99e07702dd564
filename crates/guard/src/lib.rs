//! Call-time verification of functions over dynamic values.
//!
//! A [`Guard`] wraps a [`Func`](typegate_value::Func) into a [`GuardedFn`]
//! that checks arity, argument and return types on every call, follows
//! curried chains, and records completed calls in a shared [`CallHistory`].
//! The process-wide [`Switch`] turns all checking off.

/// Guard configuration loaded from TOML.
pub mod config;
/// Error message composition.
mod diagnostic;
/// Guard construction and the checked call path.
pub mod guard;
/// Rolling log of completed guarded calls.
pub mod history;
/// Case-record validation for sum-type matching.
pub mod sum;
/// Process-wide checking switch.
pub mod switch;

pub use config::{ConfigError, GuardConfig};
pub use guard::{ArityMode, Guard, GuardedFn};
pub use history::{CallHistory, DEFAULT_CAPACITY};
pub use sum::check_cases;
pub use switch::{Switch, checking_enabled, set_checking};
