use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, NoopPrefsStore, PrefsStore};

use crate::WebPrefsStore;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` preference persistence.
    Browser(WebPrefsStore),
    /// No-op fallback used when the host is intentionally stubbed.
    Stub(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Stub(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, value: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, value),
            Self::Stub(store) => store.save_pref(key, value),
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Stub(store) => store.delete_pref(key),
        }
    }
}

/// Builds the preference adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Stub => PrefsStoreAdapter::Stub(NoopPrefsStore),
    }
}

/// Assembles the host bundle injected into `desktop_runtime::DesktopProvider`.
pub fn build_host_services() -> HostServices {
    HostServices::new(Rc::new(prefs_store()), selected_host_strategy())
}
