//! Host-side runtime helpers for executing reducer effects and touching browser environment state.
//!
//! The reducer stays pure; everything that schedules timers, writes preferences or mutates the
//! document outside the Leptos view tree goes through [`DesktopHostContext`].

mod boot;
mod frame_ticks;
mod host_ui;
mod lazy_load;
mod persistence_effects;
mod timers;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{HostServices, HostStrategy, PrefsStore};

use crate::{
    appearance::DocumentAppearance,
    model::ElementSize,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub use frame_ticks::FrameTickGate;
pub use lazy_load::{LAZY_LOAD_CLASS, LAZY_LOAD_THRESHOLD, LOADED_CLASS};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    host_strategy: HostStrategy,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::default())
    }
}

impl DesktopHostContext {
    /// Builds a host context from an injected host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            prefs: services.prefs,
            host_strategy: services.host_strategy,
        }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy.as_str()
    }

    /// Installs boot hydration: persisted preferences first, then the boot windows.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Installs debounced, frame-coalesced scroll offset tracking.
    pub fn install_scroll_frames(&self) {
        frame_ticks::install_scroll_frames();
    }

    /// Observes every `.lazy-load` element and marks it `loaded` on first sight.
    pub fn install_lazy_load(&self) {
        lazy_load::install_lazy_load();
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistPreference(key) => {
                persistence_effects::persist_preference(self, runtime, key)
            }
            RuntimeEffect::ScheduleEntranceReplay { window_id, token } => {
                timers::schedule_entrance_replay(runtime, window_id, token)
            }
            RuntimeEffect::ScheduleMinimizeCompletion { window_id, token } => {
                timers::schedule_minimize_completion(runtime, window_id, token)
            }
        }
    }

    /// Writes the document-level appearance markers (root class, body class and background,
    /// transition speed).
    pub fn apply_document_appearance(&self, appearance: &DocumentAppearance) {
        host_ui::apply_document_appearance(appearance);
    }

    /// Returns the current browser viewport size.
    pub fn viewport_size(&self) -> ElementSize {
        host_ui::viewport_size()
    }
}
