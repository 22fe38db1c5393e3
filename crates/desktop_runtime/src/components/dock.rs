use super::*;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let dock_class = move || {
        state.with(|state| format!("dock {}", state.appearance.dock_position.as_str()))
    };
    let launcher_apps = move || {
        state.with(|state| {
            state
                .launchers
                .iter()
                .map(|launcher| launcher.app_name.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <nav id="dock" class=dock_class>
            <For each=launcher_apps key=|app_name| app_name.clone() let:app_name>
                <DockItem app_name=app_name />
            </For>
        </nav>
    }
}

#[component]
fn DockItem(app_name: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let launcher = {
        let app_name = app_name.clone();
        create_memo(move |_| {
            runtime
                .state
                .with(|state| state.launcher(&app_name).cloned())
        })
    };
    let (label, glyph) = launcher
        .get_untracked()
        .map(|launcher| (launcher.label, launcher.glyph))
        .unwrap_or_default();
    let is_active = move || launcher.with(|launcher| launcher.as_ref().is_some_and(|l| l.is_active));
    let open = {
        let app_name = app_name.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::OpenApp {
                app_name: app_name.clone(),
            })
        }
    };

    view! {
        <button
            class="dock-item"
            class:active=is_active
            data-app=app_name
            title=label.clone()
            on:click=open
        >
            <span class="dock-icon" aria-hidden="true">{glyph}</span>
            <span class="dock-label">{label}</span>
        </button>
    }
}
