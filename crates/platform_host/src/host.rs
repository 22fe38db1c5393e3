//! Shared host-bundle model for browser runtime composition.

use std::rc::Rc;

use crate::{NoopPrefsStore, PrefsStore};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition (`localStorage` preferences).
    Browser,
    /// Placeholder composition with no-op adapters.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// Environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime decoupled from browser adapter details and lets
/// tests substitute an in-memory store.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight string preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle around `prefs`.
    pub fn new(prefs: Rc<dyn PrefsStore>, host_strategy: HostStrategy) -> Self {
        Self {
            prefs,
            host_strategy,
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::new(Rc::new(NoopPrefsStore), HostStrategy::Stub)
    }
}
