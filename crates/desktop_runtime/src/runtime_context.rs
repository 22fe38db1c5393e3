//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue and host bootstrap
//! wiring. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::HostServices;

use crate::{
    appearance::document_appearance,
    apps, effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn install_document_appearance(runtime: DesktopRuntimeContext) {
    let document = create_memo(move |_| {
        runtime
            .state
            .with(|state| document_appearance(&state.appearance))
    });
    create_effect(move |_| {
        document.with(|appearance| runtime.host.get_value().apply_document_appearance(appearance));
    });
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    effect_executor::install(runtime);
    install_document_appearance(runtime);

    let host = runtime.host.get_value();
    host.install_boot_hydration(runtime.dispatch);
    host.install_scroll_frames();
    host.install_lazy_load();
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted preferences.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(apps::initial_desktop_state());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if state.with_untracked(|previous| previous != &desktop) {
                    state.set(desktop);
                }
                if interaction.with_untracked(|previous| previous != &ui) {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
