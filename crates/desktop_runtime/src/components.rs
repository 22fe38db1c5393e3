//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menubar;
mod settings;
mod shortcuts;
mod window;

use leptos::*;

use self::{
    dock::Dock, menubar::MenuBar, settings::SettingsPanel, shortcuts::shortcut_from_key,
    window::DesktopWindow,
};

use crate::{
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the menu bar, every pre-declared window and the dock, and wires global input.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        let Some(shortcut) = shortcut_from_key(&ev.key(), ev.ctrl_key(), ev.meta_key()) else {
            return;
        };
        if shortcut.suppresses_default() {
            ev.prevent_default();
        }
        runtime.dispatch_action(shortcut.action());
    });
    on_cleanup(move || shortcut_listener.remove());

    let pointer_move_listener = window_event_listener(ev::pointermove, move |ev| {
        if runtime
            .interaction
            .with_untracked(|interaction| interaction.dragging.is_none())
        {
            return;
        }
        runtime.dispatch_action(DesktopAction::UpdateMove {
            pointer: pointer_from_pointer_event(&ev),
            viewport: runtime.host.get_value().viewport_size(),
        });
    });
    on_cleanup(move || pointer_move_listener.remove());

    let pointer_up_listener =
        window_event_listener(ev::pointerup, move |_| end_active_pointer_interaction(runtime));
    on_cleanup(move || pointer_up_listener.remove());

    let window_ids = move || {
        state.with(|state| {
            state
                .windows
                .iter()
                .map(|win| win.id.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div id="desktop" class="desktop">
            <MenuBar />
            <main class="window-layer">
                <For each=window_ids key=|window_id| window_id.0.clone() let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </main>
            <Dock />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    if runtime
        .interaction
        .with_untracked(|interaction| interaction.dragging.is_some())
    {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
}
