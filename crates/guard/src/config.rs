//! Guard configuration.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! enabled = true
//! history_capacity = 10
//!
//! [limits]
//! max_positional = 8
//! max_record_keys = 16
//! max_depth = 16
//! ```

use serde::Deserialize;
use thiserror::Error;
use typegate_value::Limits;

use crate::history::DEFAULT_CAPACITY;

/// Errors that can occur when loading a [`GuardConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A limit is outside its usable range.
	#[error("invalid limit: {0}")]
	InvalidLimit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
	/// Initial state of the process-wide switch.
	pub enabled: bool,
	/// Entries kept by the call history.
	pub history_capacity: usize,
	pub limits: Limits,
}

impl Default for GuardConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			history_capacity: DEFAULT_CAPACITY,
			limits: Limits::default(),
		}
	}
}

impl GuardConfig {
	pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(src)?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.limits.max_depth == 0 {
			return Err(ConfigError::InvalidLimit(
				"limits.max_depth must be at least 1".to_owned(),
			));
		}
		Ok(())
	}
}
