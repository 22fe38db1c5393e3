use leptos::{logging, SignalWithUntracked};

use crate::{
    host::DesktopHostContext,
    persistence::{self, PreferenceKey},
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn persist_preference(
    host: &DesktopHostContext,
    runtime: DesktopRuntimeContext,
    key: PreferenceKey,
) {
    let appearance = runtime.state.with_untracked(|state| state.appearance.clone());
    let prefs = host.prefs_store();
    if let Err(err) = persistence::persist_preference(prefs.as_ref(), key, &appearance) {
        logging::warn!("persist preference `{}` failed: {err}", key.storage_key());
    }
}
