use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Switch> = OnceLock::new();

/// Shared on/off flag consulted by every guarded call.
///
/// When off, guarded functions are plain passthrough. [`Switch::global`] is
/// the process-wide instance guards use by default.
#[derive(Clone, Debug)]
pub struct Switch {
	flag: Arc<AtomicBool>,
}

impl Switch {
	/// A private switch, independent of the process-wide one.
	pub fn new(enabled: bool) -> Self {
		Self {
			flag: Arc::new(AtomicBool::new(enabled)),
		}
	}

	/// The process-wide switch; starts enabled.
	pub fn global() -> Self {
		GLOBAL.get_or_init(|| Self::new(true)).clone()
	}

	/// The process-wide switch, created in state `enabled` if it does not
	/// exist yet. An existing switch is returned unchanged.
	pub fn init_global(enabled: bool) -> Self {
		GLOBAL.get_or_init(|| Self::new(enabled)).clone()
	}

	pub fn is_enabled(&self) -> bool {
		self.flag.load(Ordering::SeqCst)
	}

	/// Sets the flag and returns its previous state.
	pub fn set(&self, enabled: bool) -> bool {
		let previous = self.flag.swap(enabled, Ordering::SeqCst);
		if previous != enabled {
			tracing::debug!(enabled, "guard checking toggled");
		}
		previous
	}
}

/// Turns process-wide checking on or off; returns the previous state.
pub fn set_checking(enabled: bool) -> bool {
	Switch::global().set(enabled)
}

pub fn checking_enabled() -> bool {
	Switch::global().is_enabled()
}
